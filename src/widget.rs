use crate::config::WidgetConfig;
use crate::data_types::ChartState;
use crate::drag_controller::{DragController, DragPhase, PointerEvent};
use crate::host::{FieldWriter, HostLifecycle};
use crate::layout::Layout;
use crate::lock::{persist, LockManager};
use crate::rendering::{render, ChartScene};
use crate::resize::ResizeCoalescer;
use crate::text::{ApproxTextMeasure, TextMeasure};
use crate::transform::PlotTransform;
use eyre::{Result, WrapErr};
use gpui::{Pixels, Point};
use std::rc::Rc;
use tracing::{info, warn};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum WidgetPhase {
    /// Constructed, waiting for the host's ready signal.
    #[default]
    Pending,
    Ready,
    /// Rendering backend failed to load; the instance is inert from here on.
    Failed(String),
}

/// One drag-to-forecast chart instance.
///
/// Owns the chart state exclusively and drives every component from a single
/// thread: pointer events, finalize, resize and unload all go through `&mut self`.
pub struct ProjectionWidget {
    config: WidgetConfig,
    state: ChartState,
    layout: Layout,
    transform: PlotTransform,
    drag: DragController,
    resize: ResizeCoalescer,
    scene: ChartScene,
    writer: Box<dyn FieldWriter>,
    host: Box<dyn HostLifecycle>,
    measure: Rc<dyn TextMeasure>,
    phase: WidgetPhase,
    render_count: usize,
    layout_count: usize,
}

impl ProjectionWidget {
    pub fn new(
        config: WidgetConfig,
        writer: impl FieldWriter + 'static,
        host: impl HostLifecycle + 'static,
    ) -> Self {
        let state = ChartState::new();
        let layout = Layout::compute(0.0, &config);
        let measure = ApproxTextMeasure::default();
        let scene = render(&state, &layout, &config, &measure);
        Self {
            transform: PlotTransform::new(&layout),
            drag: DragController::new(&config.markers),
            resize: ResizeCoalescer::default(),
            writer: Box::new(writer),
            host: Box::new(host),
            measure: Rc::new(measure),
            phase: WidgetPhase::Pending,
            render_count: 0,
            layout_count: 0,
            config,
            state,
            layout,
            scene,
        }
    }

    pub fn with_text_measure(mut self, measure: impl TextMeasure + 'static) -> Self {
        self.measure = Rc::new(measure);
        self.rerender();
        self
    }

    /// Host ready signal. `load_backend` brings up the rendering backend; if it
    /// fails the host shows a failure notice and the widget stays inert.
    pub fn mount(
        &mut self,
        container_width: f32,
        load_backend: impl FnOnce() -> Result<()>,
    ) -> Result<()> {
        if self.phase != WidgetPhase::Pending {
            return Ok(());
        }
        if let Err(err) = load_backend().wrap_err("rendering backend unavailable") {
            warn!(error = ?err, "projection chart failed to start");
            let notice = self.config.failure_notice.clone();
            self.host.show_failure(&notice);
            self.phase = WidgetPhase::Failed(notice);
            return Err(err);
        }
        self.host.disable_forward();
        self.phase = WidgetPhase::Ready;
        self.relayout(container_width);
        info!(width = self.layout.width, compact = self.layout.compact, "projection chart mounted");
        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.phase == WidgetPhase::Ready
    }

    fn rerender(&mut self) {
        self.scene = render(&self.state, &self.layout, &self.config, self.measure.as_ref());
        self.render_count += 1;
    }

    fn relayout(&mut self, container_width: f32) {
        self.layout = Layout::compute(container_width, &self.config);
        self.transform = PlotTransform::new(&self.layout);
        self.layout_count += 1;
        self.rerender();
    }

    /// Records a container resize. Returns `true` when the caller must schedule
    /// a [`flush_resize`](Self::flush_resize) for the next frame.
    pub fn signal_resize(&mut self, container_width: f32) -> bool {
        if !self.is_ready() {
            return false;
        }
        self.resize.signal(container_width)
    }

    /// Runs the pending re-layout, if any. Re-persists when already locked.
    pub fn flush_resize(&mut self) -> bool {
        if !self.is_ready() {
            return false;
        }
        let Some(width) = self.resize.take() else {
            return false;
        };
        self.relayout(width);
        if self.state.is_locked() {
            persist(&self.state, self.writer.as_mut(), &self.config.fields);
        }
        true
    }

    /// Feeds one pointer event through the drag controller. Returns `true` when
    /// the scene changed.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        if !self.is_ready() {
            return false;
        }
        let outcome = self.drag.handle(event, &mut self.state, &self.transform);
        if outcome.needs_render() {
            self.rerender();
        }
        outcome.needs_render()
    }

    pub fn pointer_down(&mut self, local: Point<Pixels>) -> bool {
        self.handle_pointer(PointerEvent::Down { position: local })
    }

    pub fn pointer_move(&mut self, local_y: Option<f32>, surface: Option<Point<Pixels>>) -> bool {
        self.handle_pointer(PointerEvent::Move {
            local_y,
            position: surface,
        })
    }

    pub fn pointer_up(&mut self) -> bool {
        self.handle_pointer(PointerEvent::Up)
    }

    /// The lock action. No-op when already locked or not mounted.
    pub fn finalize(&mut self) -> bool {
        if !self.is_ready() {
            return false;
        }
        // An in-flight drag ends here; its last value is what gets locked.
        self.drag.release();
        let locked = LockManager::finalize(
            &mut self.state,
            self.writer.as_mut(),
            self.host.as_mut(),
            &self.config.fields,
        );
        if locked {
            self.rerender();
        }
        locked
    }

    /// Host unload signal: writes whatever state exists as a fallback.
    pub fn unload(&mut self) {
        if !self.is_ready() {
            return;
        }
        info!(locked = self.state.is_locked(), "projection chart unloading");
        persist(&self.state, self.writer.as_mut(), &self.config.fields);
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn state(&self) -> &ChartState {
        &self.state
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn transform(&self) -> &PlotTransform {
        &self.transform
    }

    pub fn scene(&self) -> &ChartScene {
        &self.scene
    }

    /// Shared handle so painting measures text exactly like layout did.
    pub fn measure(&self) -> Rc<dyn TextMeasure> {
        self.measure.clone()
    }

    pub fn drag_phase(&self) -> DragPhase {
        self.drag.phase()
    }

    pub fn drag_controller(&self) -> &DragController {
        &self.drag
    }

    pub fn phase(&self) -> &WidgetPhase {
        &self.phase
    }

    pub fn is_resize_pending(&self) -> bool {
        self.resize.is_pending()
    }

    pub fn render_count(&self) -> usize {
        self.render_count
    }

    pub fn layout_count(&self) -> usize {
        self.layout_count
    }

    pub fn lock_button_label(&self) -> &str {
        if self.state.is_locked() {
            &self.config.locked_label
        } else {
            &self.config.lock_label
        }
    }
}
