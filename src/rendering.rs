// Scene building and painting for the projection chart
//
// `render` composes the chart state, coordinate mapper, label placement and
// segment badges into a plain `ChartScene`. `paint_scene` draws that scene on a
// gpui window. Building is pure so identical inputs always give equal scenes.

use crate::config::WidgetConfig;
use crate::data_types::{is_fixed, ChartState, Year, YEARS};
use crate::labels::{place_labels, LabelPlacement, TextAnchor};
use crate::layout::Layout;
use crate::segments::{badge_for, segments, Badge};
use crate::text::{format_usd, TextMeasure};
use crate::transform::PlotTransform;
use gpui::*;

/// Straight stroked line in plot-local coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    pub from: Point<Pixels>,
    pub to: Point<Pixels>,
    pub width: f32,
    pub color: Hsla,
}

/// Single line of text. `position` is the anchor point on the baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct TextMark {
    pub text: String,
    pub position: Point<Pixels>,
    pub anchor: TextAnchor,
    pub font_size: f32,
    pub color: Hsla,
    pub bold: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointLabel {
    pub mark: TextMark,
    pub placement: LabelPlacement,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointMark {
    pub year: Year,
    pub value: u32,
    pub center: Point<Pixels>,
    pub handle_radius: f32,
    pub hit_radius: f32,
    pub fill: Hsla,
    pub stroke: Hsla,
    pub stroke_width: f32,
    pub label: PointLabel,
    /// Note above the fixed marker.
    pub note: Option<TextMark>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BadgeMark {
    pub badge: Badge,
    pub text_color: Hsla,
    pub fill: Hsla,
    pub border: Hsla,
}

/// Everything needed to draw one frame. Coordinates are local to `origin`.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartScene {
    pub size: Size<Pixels>,
    pub origin: Point<Pixels>,
    pub background: Hsla,
    pub grid: Vec<Rule>,
    pub axes: Vec<Rule>,
    pub ticks: Vec<TextMark>,
    pub titles: Vec<TextMark>,
    pub line: Vec<Point<Pixels>>,
    pub line_width: f32,
    pub line_color: Hsla,
    pub points: Vec<PointMark>,
    pub badges: Vec<BadgeMark>,
    pub compact: bool,
    pub locked: bool,
}

impl ChartScene {
    pub fn point(&self, year: Year) -> Option<&PointMark> {
        self.points.iter().find(|p| p.year == year)
    }

    pub fn visible_labels(&self) -> Vec<Year> {
        self.points
            .iter()
            .filter(|p| p.label.placement.visible)
            .map(|p| p.year)
            .collect()
    }
}

fn axis_marks(
    layout: &Layout,
    transform: &PlotTransform,
    config: &WidgetConfig,
    scene: &mut ChartScene,
) {
    let theme = &config.theme;
    let font_size = config.axis_font_size;
    let (plot_w, plot_h) = (layout.plot_width, layout.plot_height);

    for tick in transform.y_scale.ticks(config.y_tick_count) {
        let y = transform.y_scale.map(tick);
        scene.grid.push(Rule {
            from: Point::new(px(0.0), px(y)),
            to: Point::new(px(plot_w), px(y)),
            width: 1.0,
            color: theme.grid_line,
        });
        scene.ticks.push(TextMark {
            text: format_usd(tick),
            position: Point::new(px(-9.0), px(y + font_size * 0.32)),
            anchor: TextAnchor::End,
            font_size,
            color: theme.axis_label,
            bold: false,
        });
    }

    for year in YEARS {
        let x = transform.x_of(year);
        scene.axes.push(Rule {
            from: Point::new(px(x), px(plot_h)),
            to: Point::new(px(x), px(plot_h + 6.0)),
            width: 1.0,
            color: theme.axis_line,
        });
        scene.ticks.push(TextMark {
            text: year.to_string(),
            position: Point::new(px(x), px(plot_h + 9.0 + font_size * 0.71)),
            anchor: TextAnchor::Middle,
            font_size,
            color: theme.axis_label,
            bold: false,
        });
    }

    scene.axes.push(Rule {
        from: Point::new(px(0.0), px(plot_h)),
        to: Point::new(px(plot_w), px(plot_h)),
        width: 1.0,
        color: theme.axis_line,
    });
    scene.axes.push(Rule {
        from: Point::new(px(0.0), px(0.0)),
        to: Point::new(px(0.0), px(plot_h)),
        width: 1.0,
        color: theme.axis_line,
    });

    // gpui text cannot be rotated, so the value title sits above the axis.
    let origin = layout.plot_origin();
    scene.titles.push(TextMark {
        text: config.y_axis_title.clone(),
        position: Point::new(px(8.0) - origin.x, px(-8.0)),
        anchor: TextAnchor::Start,
        font_size,
        color: theme.axis_title,
        bold: false,
    });
    scene.titles.push(TextMark {
        text: config.x_axis_title.clone(),
        position: Point::new(px(plot_w / 2.0), px(plot_h + font_size + 60.0)),
        anchor: TextAnchor::Middle,
        font_size,
        color: theme.axis_title,
        bold: false,
    });
}

/// Builds the scene for `state` under `layout`.
pub fn render(
    state: &ChartState,
    layout: &Layout,
    config: &WidgetConfig,
    measure: &dyn TextMeasure,
) -> ChartScene {
    let transform = PlotTransform::new(layout);
    let theme = &config.theme;
    let style = &config.markers;
    let locked = state.is_locked();

    let mut scene = ChartScene {
        size: layout.size(),
        origin: layout.plot_origin(),
        background: theme.background,
        grid: Vec::new(),
        axes: Vec::new(),
        ticks: Vec::new(),
        titles: Vec::new(),
        line: Vec::new(),
        line_width: style.line_width,
        line_color: theme.line,
        points: Vec::new(),
        badges: Vec::new(),
        compact: layout.compact,
        locked,
    };

    axis_marks(layout, &transform, config, &mut scene);

    let placements = place_labels(state, layout, &transform, &config.labels);
    for (marker, placement) in state.markers().iter().zip(placements) {
        let center = transform.marker_position(marker.year, marker.value);
        scene.line.push(center);

        let pinned = locked || is_fixed(marker.year);
        let note = is_fixed(marker.year).then(|| TextMark {
            text: style.fixed_note.clone(),
            position: center + point(px(0.0), px(style.fixed_note_dy)),
            anchor: TextAnchor::Middle,
            font_size: config.labels.font_size,
            color: theme.pinned,
            bold: true,
        });

        scene.points.push(PointMark {
            year: marker.year,
            value: marker.value,
            center,
            handle_radius: style.handle_radius,
            hit_radius: style.hit_radius,
            fill: if pinned { theme.pinned } else { theme.handle_fill },
            stroke: if pinned { theme.pinned } else { theme.handle_stroke },
            stroke_width: style.stroke_width,
            label: PointLabel {
                mark: TextMark {
                    text: format_usd(marker.value as f64),
                    position: center + point(px(placement.dx), px(placement.dy)),
                    anchor: placement.anchor,
                    font_size: config.labels.font_size,
                    color: theme.point_label,
                    bold: false,
                },
                placement,
            },
            note,
        });
    }

    scene.badges = segments(&state.values())
        .iter()
        .map(|segment| BadgeMark {
            badge: badge_for(segment, &transform, layout, measure, &config.badges),
            text_color: theme.badge_text,
            fill: theme.badge_fill,
            border: theme.badge_border,
        })
        .collect();

    scene
}

/// Paints `scene` with its top-left corner at `bounds.origin`.
pub fn paint_scene(
    window: &mut Window,
    bounds: Bounds<Pixels>,
    scene: &ChartScene,
    measure: &dyn TextMeasure,
    cx: &mut App,
) {
    window.paint_quad(gpui::fill(bounds, scene.background));
    let origin = bounds.origin + scene.origin;

    for rule in scene.grid.iter().chain(scene.axes.iter()) {
        let mut builder = PathBuilder::stroke(px(rule.width));
        builder.move_to(origin + rule.from);
        builder.line_to(origin + rule.to);
        if let Ok(path) = builder.build() {
            window.paint_path(path, rule.color);
        }
    }

    for mark in scene.ticks.iter().chain(scene.titles.iter()) {
        paint_text(window, origin, mark, measure, cx);
    }

    let mut builder = PathBuilder::stroke(px(scene.line_width));
    for (i, p) in scene.line.iter().enumerate() {
        if i == 0 {
            builder.move_to(origin + *p);
        } else {
            builder.line_to(origin + *p);
        }
    }
    if let Ok(path) = builder.build() {
        window.paint_path(path, scene.line_color);
    }

    for point_mark in &scene.points {
        let r = point_mark.handle_radius;
        let circle = Bounds::new(
            origin + point_mark.center - point(px(r), px(r)),
            size(px(2.0 * r), px(2.0 * r)),
        );
        window.paint_quad(
            gpui::fill(circle, point_mark.fill)
                .corner_radii(Corners::all(px(r)))
                .border_widths(Edges::all(px(point_mark.stroke_width)))
                .border_color(point_mark.stroke),
        );
        if point_mark.label.placement.visible {
            paint_text(window, origin, &point_mark.label.mark, measure, cx);
        }
        if let Some(note) = &point_mark.note {
            paint_text(window, origin, note, measure, cx);
        }
    }

    for badge_mark in &scene.badges {
        let badge = &badge_mark.badge;
        let badge_origin = origin + badge.origin;
        let frame = Bounds::new(badge_origin + badge.frame.origin, badge.frame.size);
        window.paint_quad(
            gpui::fill(frame, badge_mark.fill)
                .corner_radii(Corners::all(px(badge.corner_radius)))
                .border_widths(Edges::all(px(1.0)))
                .border_color(badge_mark.border),
        );
        let mut lines = vec![(badge.top.clone(), 0.0)];
        if let Some(bottom) = &badge.bottom {
            lines.push((bottom.clone(), badge.bottom_dy));
        }
        for (text, dy) in lines {
            let mark = TextMark {
                text,
                position: badge.origin + point(px(0.0), px(dy)),
                anchor: TextAnchor::Middle,
                font_size: badge.font_size,
                color: badge_mark.text_color,
                bold: true,
            };
            paint_text(window, origin, &mark, measure, cx);
        }
    }
}

fn paint_text(
    window: &mut Window,
    origin: Point<Pixels>,
    mark: &TextMark,
    measure: &dyn TextMeasure,
    cx: &mut App,
) {
    if mark.text.is_empty() {
        return;
    }
    let width = measure.width(&mark.text, mark.font_size);
    let shift = match mark.anchor {
        TextAnchor::Start => 0.0,
        TextAnchor::Middle => width / 2.0,
        TextAnchor::End => width,
    };
    let font_size = px(mark.font_size);
    // Baseline to top of the line box.
    let top_left = origin + mark.position - point(px(shift), px(mark.font_size));

    let mut font = TextStyle::default().font();
    if mark.bold {
        font.weight = FontWeight::BOLD;
    }
    let run = TextRun {
        len: mark.text.len(),
        font,
        color: mark.color,
        background_color: None,
        underline: None,
        strikethrough: None,
    };
    if let Ok(lines) =
        window
            .text_system()
            .shape_text(mark.text.clone().into(), font_size, &[run], None, None)
    {
        for line in lines {
            let _ = line.paint(
                top_left,
                font_size * 1.25,
                TextAlign::Left,
                None,
                window,
                cx,
            );
        }
    }
}
