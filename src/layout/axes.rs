use kurbo::{BezPath, Point, Rect};

use crate::foundation::error::{ReelError, ReelResult};

/// Default axis lengths in scene units (frame minus a one-unit margin per side).
pub const DEFAULT_X_LENGTH: f64 = 12.0;
pub const DEFAULT_Y_LENGTH: f64 = 6.0;

/// Half-length of an axis tick mark.
pub const TICK_HALF: f64 = 0.1;

/// Upper bound on ticks per axis.
pub const MAX_TICKS: usize = 10_000;

/// One sample of the plotted series.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DataPoint {
    pub year: i32,
    pub value: f64,
}

/// A plotted position in scene units.
pub type LayoutPoint = Point;

/// Numeric domain of one axis plus its tick spacing.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64, step: f64) -> ReelResult<Self> {
        let r = Self { min, max, step };
        r.validate()?;
        Ok(r)
    }

    pub fn validate(&self) -> ReelResult<()> {
        if !(self.min.is_finite() && self.max.is_finite() && self.step.is_finite()) {
            return Err(ReelError::validation("axis range values must be finite"));
        }
        if self.min >= self.max {
            return Err(ReelError::validation(format!(
                "axis range min ({}) must be < max ({})",
                self.min, self.max
            )));
        }
        if self.step <= 0.0 {
            return Err(ReelError::validation("axis range step must be > 0"));
        }
        let steps = self.span() / self.step;
        if !steps.is_finite() || steps >= MAX_TICKS as f64 {
            return Err(ReelError::validation(format!(
                "axis range [{}, {}] with step {} needs more than {MAX_TICKS} ticks",
                self.min, self.max, self.step
            )));
        }
        Ok(())
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, v: f64) -> bool {
        self.min <= v && v <= self.max
    }

    /// Position of `v` within the domain; 0 at `min`, 1 at `max`, unclamped.
    pub fn normalize(&self, v: f64) -> f64 {
        (v - self.min) / self.span()
    }

    /// Tick values from `min` to `max` inclusive.
    pub fn ticks(&self) -> Vec<f64> {
        // Indexed rather than accumulated so 0.1-style steps do not drift.
        let n = (self.span() / self.step + 1e-9).floor() as usize;
        (0..=n).map(|i| self.min + self.step * i as f64).collect()
    }
}

/// A pair of linear axes laid out in scene space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Axes {
    pub x: AxisRange,
    pub y: AxisRange,
    pub x_length: f64,
    pub y_length: f64,
    pub center: Point,
}

impl Axes {
    pub fn new(x: AxisRange, y: AxisRange) -> Self {
        Self {
            x,
            y,
            x_length: DEFAULT_X_LENGTH,
            y_length: DEFAULT_Y_LENGTH,
            center: Point::ORIGIN,
        }
    }

    pub fn validate(&self) -> ReelResult<()> {
        self.x.validate()?;
        self.y.validate()?;
        if !(self.x_length > 0.0 && self.y_length > 0.0) {
            return Err(ReelError::validation("axis lengths must be > 0"));
        }
        Ok(())
    }

    /// The plot area spanned by both domains.
    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(self.center, (self.x_length, self.y_length))
    }

    /// Domain-to-scene transform.
    pub fn coords_to_point(&self, x: f64, y: f64) -> LayoutPoint {
        let b = self.bounds();
        Point::new(
            b.x0 + self.x.normalize(x) * self.x_length,
            b.y0 + self.y.normalize(y) * self.y_length,
        )
    }

    /// Maps every data point, preserving order and length.
    pub fn map_points(&self, points: &[DataPoint]) -> Vec<LayoutPoint> {
        points
            .iter()
            .map(|p| self.coords_to_point(f64::from(p.year), p.value))
            .collect()
    }

    /// Where the two axis lines cross: domain zero, clamped into range.
    pub fn origin_point(&self) -> Point {
        self.coords_to_point(
            0.0_f64.clamp(self.x.min, self.x.max),
            0.0_f64.clamp(self.y.min, self.y.max),
        )
    }

    pub fn x_axis_end(&self) -> Point {
        Point::new(self.bounds().x1, self.origin_point().y)
    }

    pub fn y_axis_end(&self) -> Point {
        Point::new(self.origin_point().x, self.bounds().y1)
    }

    /// Both axis lines with a tick mark at every step.
    pub fn outline_path(&self) -> BezPath {
        let b = self.bounds();
        let o = self.origin_point();
        let mut path = BezPath::new();
        path.move_to((b.x0, o.y));
        path.line_to((b.x1, o.y));
        path.move_to((o.x, b.y0));
        path.line_to((o.x, b.y1));

        for t in self.x.ticks() {
            let p = self.coords_to_point(t, 0.0);
            path.move_to((p.x, o.y - TICK_HALF));
            path.line_to((p.x, o.y + TICK_HALF));
        }
        for t in self.y.ticks() {
            let p = self.coords_to_point(0.0, t);
            path.move_to((o.x - TICK_HALF, p.y));
            path.line_to((o.x + TICK_HALF, p.y));
        }
        path
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/axes.rs"]
mod tests;
