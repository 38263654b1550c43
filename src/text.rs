/// Measures single-line text so layout code can size boxes before painting.
pub trait TextMeasure {
    fn width(&self, text: &str, font_size: f32) -> f32;
}

/// Fixed average advance per character. Cheap and deterministic, which keeps
/// scenes comparable between renders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ApproxTextMeasure {
    pub advance: f32,
}

impl Default for ApproxTextMeasure {
    fn default() -> Self {
        Self { advance: 0.6 }
    }
}

impl TextMeasure for ApproxTextMeasure {
    fn width(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * font_size * self.advance
    }
}

/// Formats a whole number with `,` thousands separators.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `$123,400` style currency label.
pub fn format_usd(value: f64) -> String {
    let rounded = value.round();
    if rounded < 0.0 {
        format!("-${}", group_thousands((-rounded) as u64))
    } else {
        format!("${}", group_thousands(rounded as u64))
    }
}
