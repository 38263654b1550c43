use d3rs::scale::{LinearScale, Scale as D3Scale};

/// Continuous value scale backed by d3rs.
#[derive(Clone)]
pub struct ChartScale {
    inner: LinearScale,
    domain: (f64, f64),
}

impl ChartScale {
    pub fn new_linear(domain: (f64, f64), range: (f32, f32)) -> Self {
        let mut d_min = domain.0;
        let mut d_max = domain.1;
        if (d_max - d_min).abs() < f64::EPSILON {
            d_min -= 0.5;
            d_max += 0.5;
        }
        let inner = LinearScale::new()
            .domain(d_min, d_max)
            .range(range.0 as f64, range.1 as f64);
        Self {
            inner,
            domain: (d_min, d_max),
        }
    }

    pub fn map(&self, value: f64) -> f32 {
        let res = self.inner.scale(value) as f32;
        if res.is_nan() || res.is_infinite() {
            0.0
        } else {
            res
        }
    }

    /// Inverse of [`map`](Self::map). Falls back to the lower domain bound when
    /// the underlying scale cannot invert.
    pub fn invert(&self, pixel: f32) -> f64 {
        self.inner.invert(pixel as f64).unwrap_or(self.domain.0)
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        self.inner.ticks(count)
    }
}

/// Ordinal scale placing `count` categories at evenly spaced points with
/// `padding` steps of outer padding on both ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointScale {
    count: usize,
    range: (f32, f32),
    padding: f32,
}

impl PointScale {
    pub fn new(count: usize, range: (f32, f32), padding: f32) -> Self {
        Self {
            count,
            range,
            padding,
        }
    }

    /// Distance between two neighbouring categories.
    pub fn step(&self) -> f32 {
        let slots = (self.count as f32 - 1.0 + 2.0 * self.padding).max(1.0);
        (self.range.1 - self.range.0) / slots
    }

    /// Pixel position of the category at `index`; out of range indices clamp to the ends.
    pub fn map(&self, index: usize) -> f32 {
        let index = index.min(self.count.saturating_sub(1));
        self.range.0 + self.step() * (self.padding + index as f32)
    }
}
