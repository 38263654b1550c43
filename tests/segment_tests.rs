use projection_chart::config::WidgetConfig;
use projection_chart::layout::Layout;
use projection_chart::segments::{
    badge_for, display_percent, persist_percent, segments, INFINITE_CHANGE,
};
use projection_chart::text::{format_usd, group_thousands, ApproxTextMeasure};
use projection_chart::transform::PlotTransform;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn test_display_percent() {
    assert_eq!(display_percent(100_000, 150_000), "+50%");
    assert_eq!(display_percent(100_000, 80_000), "\u{2212}20%");
    assert_eq!(display_percent(100_000, 100_000), "+0%");
    assert_eq!(display_percent(0, 5_000), INFINITE_CHANGE);
    assert_eq!(display_percent(0, 0), "0%");
    assert_eq!(display_percent(100_000, 0), "\u{2212}100%");
}

#[test]
fn test_display_percent_rounds_to_whole() {
    assert_eq!(display_percent(30_000, 40_000), "+33%");
    assert_eq!(display_percent(30_000, 50_000), "+67%");
    assert_eq!(display_percent(150_000, 100_000), "\u{2212}33%");
}

#[test]
fn test_small_change_keeps_its_sign() {
    assert_eq!(display_percent(100_000, 99_700), "\u{2212}0%");
    assert_eq!(display_percent(100_000, 100_300), "+0%");
    assert_eq!(persist_percent(100_000, 99_700), "-0.003");
}

#[test]
fn test_persist_percent() {
    assert_eq!(persist_percent(100_000, 150_000), "0.5");
    assert_eq!(persist_percent(100_000, 80_000), "-0.2");
    assert_eq!(persist_percent(100_000, 100_000), "0");
    assert_eq!(persist_percent(30_000, 40_000), "0.3333");
    assert_eq!(persist_percent(150_000, 100_000), "-0.3333");
    assert_eq!(persist_percent(100, 200_000), "1999");
}

#[test]
fn test_zero_start_is_blank_but_displayed_infinite() {
    assert_eq!(persist_percent(0, 5_000), "");
    assert_eq!(persist_percent(0, 0), "");
    assert_eq!(display_percent(0, 5_000), "∞%");
}

#[test]
fn test_segments_cover_neighbours() {
    let segs = segments(&[100_000, 150_000, 100_000, 100_000, 0]);
    let keys: Vec<String> = segs.iter().map(|s| s.key()).collect();
    assert_eq!(keys, vec!["2013-2018", "2018-2023", "2023-2028", "2028-2033"]);
    assert_eq!(segs[0].display, "+50%");
    assert_eq!(segs[1].persisted, "-0.3333");
    assert_eq!(segs[3].display, "\u{2212}100%");
    assert_eq!(segs[3].span_label(), "2028→2033");
}

#[test]
fn test_badge_geometry() {
    let config = WidgetConfig::default();
    let layout = Layout::compute(600.0, &config);
    let transform = PlotTransform::new(&layout);
    let segs = segments(&[100_000; 5]);
    let badge = badge_for(
        &segs[0],
        &transform,
        &layout,
        &ApproxTextMeasure::default(),
        &config.badges,
    );

    assert_eq!(badge.key, "2013-2018");
    assert!(approx(f32::from(badge.origin.x), 99.2));
    assert!(approx(f32::from(badge.origin.y), 392.0));
    // Widest line is the year span: 9 chars * 12 * 0.6, plus padding.
    assert!(approx(f32::from(badge.frame.size.width), 74.8));
    assert!(approx(f32::from(badge.frame.origin.x), -37.4));
    assert!(approx(f32::from(badge.frame.origin.y), -12.0));
    assert!(approx(f32::from(badge.frame.size.height), 24.0));
    assert_eq!(badge.top, "+0%");
    assert_eq!(badge.bottom.as_deref(), Some("2013→2018"));
}

#[test]
fn test_compact_badge_drops_year_span() {
    let config = WidgetConfig::default();
    let layout = Layout::compute(450.0, &config);
    assert!(layout.compact);
    let transform = PlotTransform::new(&layout);
    let segs = segments(&[100_000; 5]);
    let badge = badge_for(
        &segs[0],
        &transform,
        &layout,
        &ApproxTextMeasure::default(),
        &config.badges,
    );

    assert_eq!(badge.bottom, None);
    assert!(approx(f32::from(badge.origin.y), 410.0));
    assert!(approx(f32::from(badge.frame.size.height), 16.0));
    assert!(approx(f32::from(badge.frame.origin.y), -10.0));
    assert!(approx(f32::from(badge.frame.size.width), 29.8));
    assert_eq!(badge.font_size, 11.0);
}

#[test]
fn test_currency_formatting() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1_000), "1,000");
    assert_eq!(group_thousands(1_234_567), "1,234,567");
    assert_eq!(format_usd(123_400.0), "$123,400");
    assert_eq!(format_usd(0.0), "$0");
    assert_eq!(format_usd(200_000.0), "$200,000");
}
