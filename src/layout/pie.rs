//! Pie chart geometry: angle spans from percentages, sector outlines and
//! label anchors.
//!
//! Angles are in radians, counter-clockwise from +x in y-up scene space.

use std::f64::consts::TAU;

use kurbo::{Arc, BezPath, Point, Shape, Vec2};

use crate::foundation::color::Color;
use crate::foundation::error::{ReelError, ReelResult};

/// Curve flattening tolerance for sector arcs, in scene units.
const ARC_TOLERANCE: f64 = 1e-3;

/// Default outward push applied to a sector's center to place its label.
pub const DEFAULT_LABEL_SCALE: f64 = 1.5;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub percentage: f64,
    #[serde(default)]
    pub color: Color,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AngleSpan {
    pub start_angle: f64,
    pub sweep_angle: f64,
}

impl AngleSpan {
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep_angle
    }
}

/// Cumulative spans for raw percentages. Each sweep is `2π·p/Σp`; when the
/// total is zero every sweep is zero.
pub fn angle_spans(percentages: &[f64]) -> Vec<AngleSpan> {
    let total: f64 = percentages.iter().sum();
    let mut start = 0.0;
    percentages
        .iter()
        .map(|&p| {
            let sweep_angle = if total > 0.0 { TAU * p / total } else { 0.0 };
            let span = AngleSpan {
                start_angle: start,
                sweep_angle,
            };
            start += sweep_angle;
            span
        })
        .collect()
}

pub fn pie_spans(slices: &[PieSlice]) -> Vec<AngleSpan> {
    let percentages: Vec<f64> = slices.iter().map(|s| s.percentage).collect();
    angle_spans(&percentages)
}

/// How a slice set's percentages add up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieTotal {
    pub total: f64,
}

impl PieTotal {
    const TOLERANCE: f64 = 1e-6;

    pub fn is_full(&self) -> bool {
        (self.total - 100.0).abs() <= Self::TOLERANCE
    }
}

/// Rejects percentages outside `[0, 100]` and reports the total. A total
/// other than 100 is not an error here; callers decide whether to flag it.
pub fn check_slices(slices: &[PieSlice]) -> ReelResult<PieTotal> {
    for s in slices {
        if !s.percentage.is_finite() || !(0.0..=100.0).contains(&s.percentage) {
            return Err(ReelError::validation(format!(
                "pie slice '{}' has percentage {} outside [0, 100]",
                s.label, s.percentage
            )));
        }
    }
    Ok(PieTotal {
        total: slices.iter().map(|s| s.percentage).sum(),
    })
}

/// Closed wedge outline: center, out along `start_angle`, arc, back.
pub fn sector_path(center: Point, radius: f64, span: AngleSpan) -> BezPath {
    let arc = Arc {
        center,
        radii: Vec2::new(radius, radius),
        start_angle: span.start_angle,
        sweep_angle: span.sweep_angle,
        x_rotation: 0.0,
    };
    let mut path = BezPath::new();
    path.move_to(center);
    path.line_to(center + Vec2::from_angle(span.start_angle) * radius);
    path.extend(arc.append_iter(ARC_TOLERANCE));
    path.close_path();
    path
}

/// Label position: the sector's bounding-box center, pushed away from the
/// pie center by `scale`.
pub fn label_anchor(center: Point, radius: f64, span: AngleSpan, scale: f64) -> Point {
    let bbox_center = sector_path(center, radius, span).bounding_box().center();
    center + (bbox_center - center) * scale
}

#[cfg(test)]
#[path = "../../tests/unit/layout/pie.rs"]
mod tests;
