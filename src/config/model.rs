//! Dataset and presentation settings for the GDP reel, loaded from JSON.
//!
//! [`ReelConfig::builtin`] carries the reference dataset; any field set can be
//! replaced by pointing the CLI at another file with the same shape.

use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::color::Color,
    foundation::core::{Canvas, Fps},
    foundation::error::{ReelError, ReelResult},
    layout::axes::{AxisRange, DataPoint},
    layout::pie::{PieSlice, check_slices},
};

const BUILTIN_JSON: &str = include_str!("../../data/gdp_reel.json");

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReelConfig {
    #[serde(default)]
    pub render: RenderConfig,
    pub intro: IntroConfig,
    pub series: SeriesConfig,
    #[serde(default)]
    pub highlights: Vec<HighlightConfig>,
    pub formula: FormulaConfig,
    pub composition: CompositionConfig,
    pub factors: FactorsConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderConfig {
    pub fps: Fps,
    pub canvas: Canvas,
    #[serde(default = "default_background")]
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            fps: Fps { num: 30, den: 1 },
            canvas: Canvas {
                width: 1920,
                height: 1080,
            },
            background: default_background(),
        }
    }
}

fn default_background() -> Color {
    Color::BLACK
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IntroConfig {
    pub title: String,
    pub subtitle: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SeriesConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_axis: AxisRange,
    pub y_axis: AxisRange,
    #[serde(default)]
    pub x_numbers: Vec<f64>,
    #[serde(default)]
    pub y_numbers: Vec<f64>,
    #[serde(default = "default_series_color")]
    pub color: Color,
    #[serde(default = "default_draw_secs")]
    pub draw_secs: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emphasize_secs: Option<f64>,
    pub points: Vec<DataPoint>,
}

fn default_series_color() -> Color {
    Color::BLUE
}

fn default_draw_secs() -> f64 {
    3.0
}

/// A boxed period on the chart with a caption above it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HighlightConfig {
    pub label: String,
    pub year: f64,
    pub value: f64,
    /// Box width/height as a fraction of the axis lengths.
    pub size: f64,
    #[serde(default)]
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FormulaConfig {
    pub expression: String,
    pub terms: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CompositionConfig {
    pub title: String,
    #[serde(default = "default_radius")]
    pub radius: f64,
    #[serde(default = "default_label_scale")]
    pub label_scale: f64,
    /// Treat a slice total other than 100 as an error instead of a warning.
    #[serde(default)]
    pub require_full_total: bool,
    pub slices: Vec<PieSlice>,
}

fn default_radius() -> f64 {
    2.0
}

fn default_label_scale() -> f64 {
    crate::layout::pie::DEFAULT_LABEL_SCALE
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FactorsConfig {
    pub title: String,
    pub items: Vec<String>,
    pub conclusion: String,
}

impl ReelConfig {
    /// The reference dataset shipped with the crate.
    pub fn builtin() -> ReelResult<Self> {
        Self::from_json_str(BUILTIN_JSON)
    }

    pub fn from_json_str(s: &str) -> ReelResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| ReelError::config(format!("parse config JSON: {e}")))?;
        Ok(cfg)
    }

    #[tracing::instrument]
    pub fn from_path(path: &Path) -> ReelResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Hard errors for unusable data; returns the list of flagged but
    /// tolerated issues. With `strict`, flagged issues are errors too.
    pub fn validate(&self, strict: bool) -> ReelResult<Vec<String>> {
        Fps::new(self.render.fps.num, self.render.fps.den)?;
        self.render.canvas.validate()?;
        self.series.x_axis.validate()?;
        self.series.y_axis.validate()?;

        if !(self.series.draw_secs.is_finite() && self.series.draw_secs > 0.0) {
            return Err(ReelError::config("series.draw_secs must be > 0"));
        }
        if let Some(secs) = self.series.emphasize_secs
            && !(secs.is_finite() && secs > 0.0)
        {
            return Err(ReelError::config("series.emphasize_secs must be > 0"));
        }
        if !self
            .series
            .points
            .windows(2)
            .all(|w| w[0].year < w[1].year)
        {
            return Err(ReelError::config(
                "series.points must be strictly increasing by year",
            ));
        }
        if self.series.points.iter().any(|p| !p.value.is_finite()) {
            return Err(ReelError::config("series.points values must be finite"));
        }
        for h in &self.highlights {
            if !(h.size > 0.0 && h.size <= 1.0) {
                return Err(ReelError::config(format!(
                    "highlight '{}' size must be in (0, 1]",
                    h.label
                )));
            }
        }
        let c = &self.composition;
        if !(c.radius > 0.0 && c.label_scale > 0.0) {
            return Err(ReelError::config(
                "composition radius and label_scale must be > 0",
            ));
        }

        let mut flagged = Vec::new();
        for p in &self.series.points {
            if !self.series.x_axis.contains(f64::from(p.year))
                || !self.series.y_axis.contains(p.value)
            {
                flagged.push(format!(
                    "data point ({}, {}) lies outside the axis ranges",
                    p.year, p.value
                ));
            }
        }
        for h in &self.highlights {
            if !self.series.x_axis.contains(h.year) || !self.series.y_axis.contains(h.value) {
                flagged.push(format!("highlight '{}' lies outside the axis ranges", h.label));
            }
        }

        let total = check_slices(&c.slices)?;
        if !total.is_full() {
            let msg = format!(
                "composition slices sum to {} instead of 100; sweeps are scaled by the actual total",
                total.total
            );
            if c.require_full_total {
                return Err(ReelError::config(msg));
            }
            flagged.push(msg);
        }

        for msg in &flagged {
            tracing::warn!("{msg}");
        }
        if strict && !flagged.is_empty() {
            return Err(ReelError::config(format!(
                "{} flagged issue(s) in strict mode: {}",
                flagged.len(),
                flagged.join("; ")
            )));
        }
        Ok(flagged)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
