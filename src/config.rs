//! Widget configuration.
//!
//! Every field has a default, so a host can override a handful of values from a
//! partial JSON document and keep the rest.

use crate::data_types::Year;
use crate::theme::ChartTheme;
use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 24.0,
            right: 32.0,
            bottom: 160.0,
            left: 72.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerStyle {
    pub handle_radius: f32,
    /// Invisible touch target around each handle.
    pub hit_radius: f32,
    pub stroke_width: f32,
    pub line_width: f32,
    pub fixed_note: String,
    pub fixed_note_dy: f32,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            handle_radius: 9.0,
            hit_radius: 24.0,
            stroke_width: 3.0,
            line_width: 2.5,
            fixed_note: "True value (fixed)".to_string(),
            fixed_note_dy: -12.0,
        }
    }
}

/// Offsets used by the label placement policy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub font_size: f32,
    pub above_dy: f32,
    pub below_dy: f32,
    pub dx: f32,
    /// Labels whose baseline would land closer than this to the plot top flip below.
    pub top_guard: f32,
    /// Labels whose baseline would land closer than this to the plot bottom flip above.
    pub bottom_guard: f32,
    pub compact_top_edge: f32,
    pub compact_bottom_edge: f32,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            font_size: 12.0,
            above_dy: -12.0,
            below_dy: 18.0,
            dx: 12.0,
            top_guard: 8.0,
            bottom_guard: 4.0,
            compact_top_edge: 18.0,
            compact_bottom_edge: 26.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeConfig {
    pub font_size: f32,
    pub compact_font_size: f32,
    pub offset: f32,
    pub compact_offset: f32,
    pub padding: f32,
    pub height: f32,
    pub compact_height: f32,
    pub top: f32,
    pub compact_top: f32,
    pub second_line_dy: f32,
    pub corner_radius: f32,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            font_size: 12.0,
            compact_font_size: 11.0,
            offset: 36.0,
            compact_offset: 54.0,
            padding: 10.0,
            height: 24.0,
            compact_height: 16.0,
            top: -12.0,
            compact_top: -10.0,
            second_line_dy: 14.0,
            corner_radius: 4.0,
        }
    }
}

/// Keys used when writing the final answers to the host's field store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldNames {
    pub value_prefix: String,
    pub percent_prefix: String,
    pub locked: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            value_prefix: "pred".to_string(),
            percent_prefix: "pct_".to_string(),
            locked: "locked_answers".to_string(),
        }
    }
}

impl FieldNames {
    pub fn value_key(&self, year: Year) -> String {
        format!("{}{}", self.value_prefix, year)
    }

    pub fn percent_key(&self, from: Year, to: Year) -> String {
        format!("{}{}_{}", self.percent_prefix, from, to)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Fixed surface height; content never changes it.
    pub height: f32,
    pub min_width: f32,
    /// Width used when the container reports none.
    pub fallback_width: f32,
    pub margin: Margins,
    /// Extra shift of the plot group to the right of the left margin.
    pub plot_offset_x: f32,
    /// Plot widths below this switch the chart to compact mode.
    pub compact_threshold: f32,
    pub y_tick_count: usize,
    pub axis_font_size: f32,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub lock_label: String,
    pub locked_label: String,
    pub failure_notice: String,
    pub markers: MarkerStyle,
    pub labels: LabelConfig,
    pub badges: BadgeConfig,
    pub fields: FieldNames,
    pub theme: ChartTheme,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            height: 540.0,
            min_width: 400.0,
            fallback_width: 600.0,
            margin: Margins::default(),
            plot_offset_x: 20.0,
            compact_threshold: 420.0,
            y_tick_count: 5,
            axis_font_size: 12.0,
            x_axis_title: "Year".to_string(),
            y_axis_title: "Average wage (USD)".to_string(),
            lock_label: "Lock in my answers".to_string(),
            locked_label: "Answers locked".to_string(),
            failure_notice: "Failed to load chart renderer.".to_string(),
            markers: MarkerStyle::default(),
            labels: LabelConfig::default(),
            badges: BadgeConfig::default(),
            fields: FieldNames::default(),
            theme: ChartTheme::default(),
        }
    }
}

impl WidgetConfig {
    /// Parses a (possibly partial) JSON document over the defaults.
    pub fn from_json(source: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(source).wrap_err("invalid projection chart config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let plot_height = self.height - self.margin.top - self.margin.bottom;
        if plot_height <= 0.0 {
            eyre::bail!(
                "height {} leaves no room for the plot after margins",
                self.height
            );
        }
        if self.min_width <= self.margin.left + self.margin.right {
            eyre::bail!(
                "min_width {} leaves no room for the plot after margins",
                self.min_width
            );
        }
        if self.markers.hit_radius < self.markers.handle_radius {
            eyre::bail!("hit radius must cover the visible handle");
        }
        Ok(())
    }
}
