use gpui::{px, Point};
use projection_chart::config::{FieldNames, WidgetConfig};
use projection_chart::data_types::ChartState;
use projection_chart::host::{MemoryFieldStore, RecordingHost};
use projection_chart::lock::{field_values, LockManager};
use projection_chart::widget::{ProjectionWidget, WidgetPhase};

fn mounted() -> (ProjectionWidget, MemoryFieldStore, RecordingHost) {
    let store = MemoryFieldStore::new();
    let host = RecordingHost::new();
    let mut widget = ProjectionWidget::new(WidgetConfig::default(), store.clone(), host.clone());
    widget.mount(600.0, || Ok(())).unwrap();
    (widget, store, host)
}

fn drag(widget: &mut ProjectionWidget, x: f32, from_y: f32, to_y: f32) {
    assert!(widget.pointer_down(Point::new(px(x), px(from_y))));
    assert!(widget.pointer_move(Some(to_y), None));
    widget.pointer_up();
}

#[test]
fn test_field_values_order_and_keys() {
    let state = ChartState::from_values([150_000.0, 100_000.0, 100_000.0, 0.0, 50_000.0]);
    let fields = field_values(&state, &FieldNames::default());
    let keys: Vec<&str> = fields.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "pred2013",
            "pred2018",
            "pred2023",
            "pred2028",
            "pred2033",
            "pct_2013_2018",
            "pct_2018_2023",
            "pct_2023_2028",
            "pct_2028_2033",
            "locked_answers",
        ]
    );
    assert_eq!(fields[0].1, "150000");
    assert_eq!(fields[3].1, "0");
    assert_eq!(fields[5].1, "-0.3333");
    assert_eq!(fields[7].1, "-1");
    // Growth from zero is stored blank.
    assert_eq!(fields[8].1, "");
    assert_eq!(fields[9].1, "0");
}

#[test]
fn test_mount_disables_forward() {
    let (widget, store, host) = mounted();
    assert_eq!(widget.phase(), &WidgetPhase::Ready);
    let log = host.snapshot();
    assert!(!log.forward_enabled);
    assert_eq!(log.disable_calls, 1);
    assert_eq!(store.write_count(), 0);
}

#[test]
fn test_finalize_persists_and_enables_forward() {
    let (mut widget, store, host) = mounted();
    drag(&mut widget, 49.6, 178.0, 89.0);

    assert!(widget.finalize());
    assert!(widget.state().is_locked());
    assert_eq!(widget.lock_button_label(), "Answers locked");

    assert_eq!(store.get("pred2013").as_deref(), Some("150000"));
    assert_eq!(store.get("pred2023").as_deref(), Some("100000"));
    assert_eq!(store.get("pct_2013_2018").as_deref(), Some("-0.3333"));
    assert_eq!(store.get("pct_2018_2023").as_deref(), Some("0"));
    assert_eq!(store.get("locked_answers").as_deref(), Some("1"));
    assert_eq!(store.write_count(), 10);

    let log = host.snapshot();
    assert!(log.forward_enabled);
    assert_eq!(log.enable_calls, 1);
}

#[test]
fn test_finalize_is_one_shot() {
    let (mut widget, store, host) = mounted();
    assert!(widget.finalize());
    assert!(!widget.finalize());
    assert_eq!(store.write_count(), 10);
    assert_eq!(host.snapshot().enable_calls, 1);
}

#[test]
fn test_locked_chart_rejects_drags() {
    let (mut widget, _store, _host) = mounted();
    widget.finalize();
    assert!(!widget.pointer_down(Point::new(px(49.6), px(178.0))));
    assert!(!widget.pointer_move(Some(0.0), None));
    assert_eq!(widget.state().values(), [100_000; 5]);
}

#[test]
fn test_finalize_ends_active_drag() {
    let (mut widget, store, _host) = mounted();
    widget.pointer_down(Point::new(px(148.8), px(178.0)));
    widget.pointer_move(Some(0.0), None);
    assert!(widget.finalize());
    assert_eq!(store.get("pred2018").as_deref(), Some("200000"));
    assert!(!widget.pointer_move(Some(356.0), None));
    assert_eq!(widget.state().value(2018), Some(200_000));
}

#[test]
fn test_unload_before_lock_writes_fallback() {
    let (mut widget, store, host) = mounted();
    drag(&mut widget, 347.2, 178.0, 0.0);
    widget.unload();

    assert_eq!(store.write_count(), 10);
    assert_eq!(store.get("pred2028").as_deref(), Some("200000"));
    assert_eq!(store.get("pct_2023_2028").as_deref(), Some("1"));
    assert_eq!(store.get("locked_answers").as_deref(), Some("0"));
    assert_eq!(host.snapshot().enable_calls, 0);
}

#[test]
fn test_unload_after_lock_rewrites_same_values() {
    let (mut widget, store, _host) = mounted();
    widget.finalize();
    let locked = store.snapshot().fields;
    widget.unload();
    assert_eq!(store.write_count(), 20);
    assert_eq!(store.snapshot().fields, locked);
}

#[test]
fn test_lock_manager_direct() {
    let mut state = ChartState::new();
    let mut store = MemoryFieldStore::new();
    let mut host = RecordingHost::new();
    let names = FieldNames::default();

    assert!(LockManager::finalize(&mut state, &mut store, &mut host, &names));
    assert!(!LockManager::finalize(&mut state, &mut store, &mut host, &names));
    assert_eq!(store.write_count(), 10);
    assert!(store.to_json().unwrap().contains("\"locked_answers\": \"1\""));
}

#[test]
fn test_custom_field_names() {
    let config = WidgetConfig::from_json(
        r#"{ "fields": { "value_prefix": "guess_", "locked": "done" } }"#,
    )
    .unwrap();
    let store = MemoryFieldStore::new();
    let mut widget = ProjectionWidget::new(config, store.clone(), RecordingHost::new());
    widget.mount(600.0, || Ok(())).unwrap();
    widget.finalize();
    assert_eq!(store.get("guess_2013").as_deref(), Some("100000"));
    assert_eq!(store.get("pct_2013_2018").as_deref(), Some("0"));
    assert_eq!(store.get("done").as_deref(), Some("1"));
}
