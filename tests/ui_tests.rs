use gpui::TestAppContext;
use projection_chart::config::WidgetConfig;
use projection_chart::host::{MemoryFieldStore, RecordingHost};
use projection_chart::widget::{ProjectionWidget, WidgetPhase};
use projection_chart::ProjectionChartView;

fn mounted_widget(store: MemoryFieldStore, host: RecordingHost) -> ProjectionWidget {
    let mut widget = ProjectionWidget::new(WidgetConfig::default(), store, host);
    widget.mount(0.0, || Ok(())).unwrap();
    widget
}

#[gpui::test]
fn test_chart_view_renders_mounted_widget(cx: &mut TestAppContext) {
    let store = MemoryFieldStore::new();
    let widget = mounted_widget(store.clone(), RecordingHost::new());

    let window = cx.add_window(|_window, cx| ProjectionChartView::new(widget, cx));
    cx.run_until_parked();

    window
        .update(cx, |view, _window, _cx| {
            assert_eq!(view.widget.phase(), &WidgetPhase::Ready);
            assert!(view.widget.layout().width >= 400.0);
            assert_eq!(view.widget.scene().points.len(), 5);
            assert_eq!(view.widget.lock_button_label(), "Lock in my answers");
        })
        .unwrap();
    assert_eq!(store.write_count(), 0);
}

#[gpui::test]
fn test_chart_view_lock(cx: &mut TestAppContext) {
    let store = MemoryFieldStore::new();
    let host = RecordingHost::new();
    let widget = mounted_widget(store.clone(), host.clone());

    let window = cx.add_window(|_window, cx| ProjectionChartView::new(widget, cx));
    cx.run_until_parked();

    window
        .update(cx, |view, _window, cx| {
            assert!(view.widget.finalize());
            cx.notify();
        })
        .unwrap();
    cx.run_until_parked();

    window
        .update(cx, |view, _window, _cx| {
            assert!(view.widget.state().is_locked());
            assert_eq!(view.widget.lock_button_label(), "Answers locked");
        })
        .unwrap();
    assert_eq!(store.get("locked_answers").as_deref(), Some("1"));
    assert!(host.snapshot().forward_enabled);
}

#[gpui::test]
fn test_chart_view_failure_notice(cx: &mut TestAppContext) {
    let host = RecordingHost::new();
    let mut widget = ProjectionWidget::new(
        WidgetConfig::default(),
        MemoryFieldStore::new(),
        host.clone(),
    );
    assert!(widget.mount(600.0, || Err(eyre::eyre!("backend missing"))).is_err());

    let window = cx.add_window(|_window, cx| ProjectionChartView::new(widget, cx));
    cx.run_until_parked();

    window
        .update(cx, |view, _window, _cx| {
            assert!(matches!(view.widget.phase(), WidgetPhase::Failed(_)));
        })
        .unwrap();
    assert_eq!(host.snapshot().failures.len(), 1);
}
