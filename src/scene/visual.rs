use std::fmt;

use kurbo::{BezPath, Point, Rect, Shape};

use crate::{
    foundation::color::Color,
    layout::{axes::Axes, place},
};

/// Default outline width handed to the renderer, in output pixels.
pub const DEFAULT_STROKE_PX: f64 = 4.0;

/// Stable key of a visual within one timeline.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct VisualId(pub String);

impl VisualId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VisualId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VisualId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A positioned primitive in scene units. Geometry is final once built.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Visual {
    pub kind: VisualKind,
    pub bounds: Rect,
    pub color: Color,
    #[serde(default)]
    pub z: i32,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VisualKind {
    Text {
        text: String,
        font_size: f64,
    },
    Formula {
        tex: String,
        font_size: f64,
    },
    Axes {
        axes: Axes,
        path_d: String,
    },
    Shape {
        role: ShapeRole,
        path_d: String,
        stroke_px: f64,
        fill_opacity: f64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeRole {
    Curve,
    Frame,
    Sector,
}

impl Visual {
    /// Text whose estimated box is placed by `place` (given the box at the
    /// origin).
    pub fn text(
        text: impl Into<String>,
        font_size: f64,
        color: Color,
        place: impl FnOnce(Rect) -> Rect,
    ) -> Self {
        let text = text.into();
        let size = place::text_size(&text, font_size);
        Self {
            bounds: place(place::centered(Point::ORIGIN, size)),
            kind: VisualKind::Text { text, font_size },
            color,
            z: 0,
        }
    }

    pub fn formula(
        tex: impl Into<String>,
        font_size: f64,
        color: Color,
        place: impl FnOnce(Rect) -> Rect,
    ) -> Self {
        let tex = tex.into();
        let size = place::text_size(&tex, font_size);
        Self {
            bounds: place(place::centered(Point::ORIGIN, size)),
            kind: VisualKind::Formula { tex, font_size },
            color,
            z: 0,
        }
    }

    pub fn axes(axes: &Axes, color: Color) -> Self {
        Self {
            kind: VisualKind::Axes {
                axes: *axes,
                path_d: axes.outline_path().to_svg(),
            },
            bounds: axes.bounds(),
            color,
            z: 0,
        }
    }

    pub fn shape(role: ShapeRole, path: &BezPath, color: Color, fill_opacity: f64) -> Self {
        Self {
            kind: VisualKind::Shape {
                role,
                path_d: path.to_svg(),
                stroke_px: DEFAULT_STROKE_PX,
                fill_opacity: fill_opacity.clamp(0.0, 1.0),
            },
            bounds: path_bounds(path),
            color,
            z: 0,
        }
    }

    pub fn with_z(mut self, z: i32) -> Self {
        self.z = z;
        self
    }

    /// Short label for logs and plan listings.
    pub fn describe(&self) -> String {
        match &self.kind {
            VisualKind::Text { text, .. } => format!("text {:?}", text),
            VisualKind::Formula { tex, .. } => format!("formula {:?}", tex),
            VisualKind::Axes { .. } => "axes".to_string(),
            VisualKind::Shape { role, .. } => format!("{role:?}").to_lowercase(),
        }
    }
}

/// Bounding box of `path`; a path with no segments is bounded by its points.
fn path_bounds(path: &BezPath) -> Rect {
    if path.segments().next().is_some() {
        return path.bounding_box();
    }
    let mut points = path.elements().iter().filter_map(|el| el.end_point());
    match points.next() {
        Some(first) => points.fold(Rect::from_points(first, first), |r, p| r.union_pt(p)),
        None => Rect::ZERO,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/visual.rs"]
mod tests;
