use crate::config::MarkerStyle;
use crate::data_types::{is_fixed, ChartState, Year, MARKER_COUNT, YEARS};
use crate::transform::PlotTransform;
use gpui::*;
use tracing::{debug, trace};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging { year: Year },
}

/// Serialized pointer input, already translated to surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Press at a plot-local position.
    Down { position: Point<Pixels> },
    /// Movement while a button is held. `local_y` is the native plot-local
    /// coordinate when the source provides one; `position` is the raw surface
    /// position used as a fallback.
    Move {
        local_y: Option<f32>,
        position: Option<Point<Pixels>>,
    },
    Up,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    Ignored,
    Started(Year),
    Updated { year: Year, value: u32 },
    Ended(Year),
}

impl DragOutcome {
    /// Whether the chart must be re-rendered.
    pub fn needs_render(&self) -> bool {
        matches!(self, Self::Started(_) | Self::Updated { .. })
    }
}

/// Input targets of one marker: the visible handle and the larger invisible
/// hit region around it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerTarget {
    pub year: Year,
    pub handle_radius: f32,
    pub hit_radius: f32,
}

impl MarkerTarget {
    fn reach(&self) -> f32 {
        self.handle_radius.max(self.hit_radius)
    }
}

/// Turns pointer input into chart state updates.
///
/// Targets are created once per marker with the controller and are never
/// rebuilt by rendering, so each marker keeps exactly one binding.
#[derive(Clone, Debug)]
pub struct DragController {
    phase: DragPhase,
    targets: [MarkerTarget; MARKER_COUNT],
}

impl DragController {
    pub fn new(style: &MarkerStyle) -> Self {
        Self {
            phase: DragPhase::Idle,
            targets: YEARS.map(|year| MarkerTarget {
                year,
                handle_radius: style.handle_radius,
                hit_radius: style.hit_radius,
            }),
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn targets(&self) -> &[MarkerTarget; MARKER_COUNT] {
        &self.targets
    }

    /// Nearest marker whose handle or hit region contains the plot-local `position`.
    pub fn hit_test(
        &self,
        position: Point<Pixels>,
        state: &ChartState,
        transform: &PlotTransform,
    ) -> Option<Year> {
        let (x, y) = (f32::from(position.x), f32::from(position.y));
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        self.targets
            .iter()
            .filter_map(|target| {
                let value = state.value(target.year)?;
                let dx = transform.x_of(target.year) - x;
                let dy = transform.y_of(value) - y;
                let distance = (dx * dx + dy * dy).sqrt();
                (distance <= target.reach()).then_some((target.year, distance))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(year, _)| year)
    }

    /// Idle -> Dragging. Refused while locked and for the fixed marker.
    pub fn start(&mut self, year: Year, state: &mut ChartState) -> DragOutcome {
        if state.is_locked() || is_fixed(year) || state.value(year).is_none() {
            return DragOutcome::Ignored;
        }
        debug!(year, "drag start");
        self.phase = DragPhase::Dragging { year };
        state.set_active(year);
        DragOutcome::Started(year)
    }

    /// Applies one movement sample to the dragged marker.
    pub fn update(
        &mut self,
        local_y: Option<f32>,
        position: Option<Point<Pixels>>,
        state: &mut ChartState,
        transform: &PlotTransform,
    ) -> DragOutcome {
        let DragPhase::Dragging { year } = self.phase else {
            return DragOutcome::Ignored;
        };
        let Some(y) = Self::resolve_y(local_y, position, transform) else {
            trace!(year, "unresolvable pointer position");
            return DragOutcome::Ignored;
        };
        let value = transform.value_of(y);
        if !state.set_value(year, value as f64) {
            return DragOutcome::Ignored;
        }
        state.set_active(year);
        trace!(year, value, "drag update");
        DragOutcome::Updated { year, value }
    }

    /// Dragging -> Idle. The last applied value stays.
    pub fn release(&mut self) -> DragOutcome {
        match std::mem::take(&mut self.phase) {
            DragPhase::Dragging { year } => {
                debug!(year, "drag end");
                DragOutcome::Ended(year)
            }
            DragPhase::Idle => DragOutcome::Ignored,
        }
    }

    pub fn handle(
        &mut self,
        event: PointerEvent,
        state: &mut ChartState,
        transform: &PlotTransform,
    ) -> DragOutcome {
        match event {
            PointerEvent::Down { position } => {
                if self.phase != DragPhase::Idle {
                    return DragOutcome::Ignored;
                }
                match self.hit_test(position, state, transform) {
                    Some(year) => self.start(year, state),
                    None => DragOutcome::Ignored,
                }
            }
            PointerEvent::Move { local_y, position } => {
                self.update(local_y, position, state, transform)
            }
            PointerEvent::Up => self.release(),
        }
    }

    fn resolve_y(
        local_y: Option<f32>,
        position: Option<Point<Pixels>>,
        transform: &PlotTransform,
    ) -> Option<f32> {
        if let Some(y) = local_y.filter(|y| y.is_finite()) {
            return Some(y);
        }
        let local = transform.to_local(position?);
        let y = f32::from(local.y);
        y.is_finite().then_some(y)
    }
}
