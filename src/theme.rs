use gpui::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartTheme {
    pub background: Hsla,
    pub grid_line: Hsla,
    pub axis_line: Hsla,
    pub axis_label: Hsla,
    pub axis_title: Hsla,
    pub line: Hsla,
    pub handle_fill: Hsla,
    pub handle_stroke: Hsla,
    /// Fixed marker, and every marker once locked.
    pub pinned: Hsla,
    pub point_label: Hsla,
    pub badge_text: Hsla,
    pub badge_fill: Hsla,
    pub badge_border: Hsla,
    pub failure_text: Hsla,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background: gpui::white(),
            grid_line: rgb(0xeeeeee).into(),
            axis_line: rgb(0x999999).into(),
            axis_label: rgb(0x444444).into(),
            axis_title: rgb(0x111111).into(),
            line: rgb(0x1f77b4).into(),
            handle_fill: gpui::white(),
            handle_stroke: rgb(0x1f77b4).into(),
            pinned: rgb(0xd62728).into(),
            point_label: rgb(0x222222).into(),
            badge_text: rgb(0x111111).into(),
            badge_fill: gpui::white().opacity(0.97),
            badge_border: rgb(0xdddddd).into(),
            failure_text: rgb(0xd62728).into(),
        }
    }
}
