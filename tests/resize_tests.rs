use projection_chart::config::WidgetConfig;
use projection_chart::host::{MemoryFieldStore, RecordingHost};
use projection_chart::resize::ResizeCoalescer;
use projection_chart::widget::ProjectionWidget;

fn mounted(store: MemoryFieldStore) -> ProjectionWidget {
    let mut widget = ProjectionWidget::new(WidgetConfig::default(), store, RecordingHost::new());
    widget.mount(600.0, || Ok(())).unwrap();
    widget
}

#[test]
fn test_coalescer_keeps_latest() {
    let mut coalescer = ResizeCoalescer::default();
    assert!(coalescer.signal(500.0));
    assert!(!coalescer.signal(510.0));
    assert!(!coalescer.signal(520.0));
    assert!(coalescer.is_pending());
    assert_eq!(coalescer.superseded(), 2);
    assert_eq!(coalescer.take(), Some(520.0));
    assert_eq!(coalescer.take(), None);
    assert!(coalescer.signal(530.0));
}

#[test]
fn test_burst_collapses_into_one_layout() {
    let mut widget = mounted(MemoryFieldStore::new());
    assert_eq!(widget.layout_count(), 1);

    let scheduled: Vec<bool> = (0..10)
        .map(|i| widget.signal_resize(700.0 + i as f32 * 10.0))
        .collect();
    assert!(scheduled[0]);
    assert!(scheduled[1..].iter().all(|s| !s));
    assert_eq!(widget.layout_count(), 1);
    assert!(widget.is_resize_pending());

    assert!(widget.flush_resize());
    assert_eq!(widget.layout_count(), 2);
    assert_eq!(widget.layout().width, 790.0);
    assert!(!widget.flush_resize());
    assert_eq!(widget.layout_count(), 2);
}

#[test]
fn test_resize_switches_compact_mode() {
    let mut widget = mounted(MemoryFieldStore::new());
    assert!(!widget.layout().compact);
    widget.signal_resize(450.0);
    widget.flush_resize();
    assert!(widget.layout().compact);
    assert!(widget.scene().compact);

    // Width below the floor is laid out at the floor.
    widget.signal_resize(100.0);
    widget.flush_resize();
    assert_eq!(widget.layout().width, 400.0);
}

#[test]
fn test_same_width_relayout_keeps_scene() {
    let mut widget = mounted(MemoryFieldStore::new());
    let before = widget.scene().clone();
    widget.signal_resize(600.0);
    widget.flush_resize();
    assert_eq!(widget.scene(), &before);
}

#[test]
fn test_resize_while_locked_persists_again() {
    let store = MemoryFieldStore::new();
    let mut widget = mounted(store.clone());
    widget.signal_resize(700.0);
    widget.flush_resize();
    assert_eq!(store.write_count(), 0);

    widget.finalize();
    assert_eq!(store.write_count(), 10);
    widget.signal_resize(800.0);
    widget.flush_resize();
    assert_eq!(store.write_count(), 20);
    assert_eq!(store.get("locked_answers").as_deref(), Some("1"));
}
