//! projection_chart: a drag-to-forecast line chart for GPUI.
//!
//! Five yearly markers, one of them pinned to a known value, are dragged
//! vertically to state a projection. Percent changes between neighbours are
//! annotated under the plot, and the answers are written to the host's field
//! store once the user locks them.

pub mod chart_view;
pub mod config;
pub mod data_types;
pub mod drag_controller;
pub mod host;
pub mod labels;
pub mod layout;
pub mod lock;
pub mod rendering;
pub mod resize;
pub mod scales;
pub mod segments;
pub mod text;
pub mod theme;
pub mod transform;
pub mod widget;

pub use chart_view::ProjectionChartView;
pub use config::WidgetConfig;
pub use data_types::{ChartState, TimeMarker, Year, FIXED_YEAR, YEARS};
pub use drag_controller::{DragController, DragOutcome, DragPhase, PointerEvent};
pub use host::{FieldWriter, HostLifecycle, MemoryFieldStore, RecordingHost};
pub use lock::LockManager;
pub use rendering::{render, ChartScene};
pub use widget::{ProjectionWidget, WidgetPhase};
