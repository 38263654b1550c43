// gpui surface for one ProjectionWidget

use crate::data_types::Year;
use crate::drag_controller::DragPhase;
use crate::rendering::paint_scene;
use crate::widget::{ProjectionWidget, WidgetPhase};
use gpui::prelude::*;
use gpui::*;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

/// gpui view hosting one [`ProjectionWidget`]: paints its scene, forwards mouse
/// input and exposes the lock button.
pub struct ProjectionChartView {
    pub widget: ProjectionWidget,
    pub max_width: Pixels,

    hover: Option<Year>,
    container_width: f32,
    bounds: Rc<RefCell<Bounds<Pixels>>>,
}

impl ProjectionChartView {
    /// Wraps an already mounted widget. Releasing the view triggers the
    /// widget's unload write.
    pub fn new(widget: ProjectionWidget, cx: &mut Context<Self>) -> Self {
        cx.on_release(|this, _cx| this.widget.unload()).detach();

        Self {
            widget,
            max_width: px(900.0),
            hover: None,
            container_width: 0.0,
            bounds: Rc::new(RefCell::new(Bounds::default())),
        }
    }

    fn surface_position(&self, window_position: Point<Pixels>) -> Point<Pixels> {
        window_position - self.bounds.borrow().origin
    }

    fn handle_mouse_down(
        &mut self,
        event: &MouseDownEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let surface = self.surface_position(event.position);
        let local = self.widget.transform().to_local(surface);
        if self.widget.pointer_down(local) {
            cx.notify();
        }
    }

    fn handle_mouse_move(
        &mut self,
        event: &MouseMoveEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let surface = self.surface_position(event.position);

        if self.widget.drag_phase() == DragPhase::Idle {
            let local = self.widget.transform().to_local(surface);
            let hover = self.widget.drag_controller().hit_test(
                local,
                self.widget.state(),
                self.widget.transform(),
            );
            if hover != self.hover {
                self.hover = hover;
                cx.notify();
            }
            return;
        }

        // Released outside of the view: the drag is over.
        if event.pressed_button != Some(MouseButton::Left) {
            self.widget.pointer_up();
            cx.notify();
            return;
        }

        let local_y = if self.bounds.borrow().is_empty() {
            None
        } else {
            Some(f32::from(self.widget.transform().to_local(surface).y))
        };
        if self.widget.pointer_move(local_y, Some(surface)) {
            cx.notify();
        }
    }

    fn handle_mouse_up(&mut self, _event: &MouseUpEvent, _window: &mut Window, cx: &mut Context<Self>) {
        if self.widget.drag_phase() != DragPhase::Idle {
            self.widget.pointer_up();
            cx.notify();
        }
    }

    fn handle_lock(&mut self, _event: &MouseDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        if self.widget.finalize() {
            cx.notify();
        }
    }

    /// Picks up a new container width; bursts collapse into one re-layout on the next frame.
    fn track_container_width(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let width = f32::from(self.bounds.borrow().size.width);
        if width <= 0.0 || (width - self.container_width).abs() < 0.5 {
            return;
        }
        self.container_width = width;
        if self.widget.signal_resize(width) {
            debug!(width, "scheduling re-layout");
            cx.on_next_frame(window, |this, _window, cx| {
                if this.widget.flush_resize() {
                    cx.notify();
                }
            });
        }
    }

    fn render_lock_button(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let locked = self.widget.state().is_locked();
        let accent = self.widget.config().theme.pinned;

        div()
            .mt_2()
            .px_3()
            .py_2()
            .rounded_md()
            .border_1()
            .border_color(accent)
            .bg(gpui::white())
            .text_color(accent)
            .text_size(px(14.0))
            .font_weight(FontWeight::SEMIBOLD)
            .when(locked, |d| d.opacity(0.75))
            .when(!locked, |d| {
                d.cursor_pointer()
                    .on_mouse_down(MouseButton::Left, cx.listener(Self::handle_lock))
            })
            .child(self.widget.lock_button_label().to_string())
    }
}

impl Render for ProjectionChartView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if let WidgetPhase::Failed(notice) = self.widget.phase() {
            return div()
                .size_full()
                .flex()
                .items_center()
                .justify_center()
                .text_color(self.widget.config().theme.failure_text)
                .child(notice.clone())
                .into_any_element();
        }

        self.track_container_width(window, cx);

        let scene = self.widget.scene().clone();
        let measure = self.widget.measure();
        let bounds_rc = self.bounds.clone();
        let laid_out_width = self.container_width;
        let height = px(self.widget.layout().height);

        let cursor = if self.widget.drag_phase() != DragPhase::Idle || self.hover.is_some() {
            CursorStyle::ResizeUpDown
        } else {
            CursorStyle::Arrow
        };

        div()
            .size_full()
            .flex()
            .flex_col()
            .items_center()
            .bg(scene.background)
            .child(
                div()
                    .w_full()
                    .max_w(self.max_width)
                    .h(height)
                    .relative()
                    .cursor(cursor)
                    .on_mouse_down(MouseButton::Left, cx.listener(Self::handle_mouse_down))
                    .on_mouse_move(cx.listener(Self::handle_mouse_move))
                    .on_mouse_up(MouseButton::Left, cx.listener(Self::handle_mouse_up))
                    .on_mouse_up_out(MouseButton::Left, cx.listener(Self::handle_mouse_up))
                    .child(
                        canvas(
                            move |bounds, window, _cx| {
                                // First frame or container resize: render again with the real width.
                                let width = f32::from(bounds.size.width);
                                if (width - laid_out_width).abs() >= 0.5 {
                                    window.request_animation_frame();
                                }
                            },
                            move |bounds, (), window, cx| {
                                *bounds_rc.borrow_mut() = bounds;
                                paint_scene(window, bounds, &scene, measure.as_ref(), cx);
                            },
                        )
                        .size_full(),
                    ),
            )
            .child(self.render_lock_button(cx))
            .into_any_element()
    }
}
