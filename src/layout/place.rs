//! Box placement in scene units (y up).
//!
//! Text sizes here are estimates from font size and character count; the
//! renderer shapes the real glyphs. Estimates only need to be stable and
//! roughly proportional so stacked and adjacent boxes do not collide.

use kurbo::{Point, Rect, Size, Vec2};

pub const SMALL_BUFF: f64 = 0.1;
pub const MED_SMALL_BUFF: f64 = 0.25;
pub const MED_LARGE_BUFF: f64 = 0.5;
pub const LARGE_BUFF: f64 = 1.0;

/// Scene units per em at font size 1.
const EM_PER_POINT: f64 = 0.75 / 48.0;
const ADVANCE_EM: f64 = 0.55;
const LINE_HEIGHT_EM: f64 = 1.2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn unit(self) -> Vec2 {
        match self {
            Self::Up => Vec2::new(0.0, 1.0),
            Self::Down => Vec2::new(0.0, -1.0),
            Self::Left => Vec2::new(-1.0, 0.0),
            Self::Right => Vec2::new(1.0, 0.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// Estimated box for (possibly multi-line) text.
pub fn text_size(text: &str, font_size: f64) -> Size {
    let em = font_size * EM_PER_POINT;
    let lines = text.lines().count().max(1);
    let widest = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    Size::new(
        widest as f64 * ADVANCE_EM * em,
        lines as f64 * LINE_HEIGHT_EM * em,
    )
}

/// A box of `size` centered on `center`.
pub fn centered(center: Point, size: Size) -> Rect {
    Rect::from_center_size(center, size)
}

/// Moves `rect` so it sits `buff` away from `anchor` on side `dir`, centered
/// on the other axis.
pub fn next_to(rect: Rect, anchor: Rect, dir: Direction, buff: f64) -> Rect {
    let c = anchor.center();
    let (w, h) = (rect.width(), rect.height());
    let center = match dir {
        Direction::Up => Point::new(c.x, anchor.y1 + buff + h * 0.5),
        Direction::Down => Point::new(c.x, anchor.y0 - buff - h * 0.5),
        Direction::Left => Point::new(anchor.x0 - buff - w * 0.5, c.y),
        Direction::Right => Point::new(anchor.x1 + buff + w * 0.5, c.y),
    };
    Rect::from_center_size(center, rect.size())
}

/// Pushes `rect` against one edge of `frame`, keeping the other coordinate.
pub fn to_edge(rect: Rect, frame: Rect, edge: Edge, buff: f64) -> Rect {
    let delta = match edge {
        Edge::Top => Vec2::new(0.0, frame.y1 - buff - rect.y1),
        Edge::Bottom => Vec2::new(0.0, frame.y0 + buff - rect.y0),
        Edge::Left => Vec2::new(frame.x0 + buff - rect.x0, 0.0),
        Edge::Right => Vec2::new(frame.x1 - buff - rect.x1, 0.0),
    };
    rect + delta
}

/// Stacks boxes top to bottom with `buff` between them, left edges aligned,
/// the first box's top-left at the origin.
pub fn arrange_column(sizes: &[Size], buff: f64) -> Vec<Rect> {
    let mut top = 0.0;
    sizes
        .iter()
        .map(|s| {
            let r = Rect::new(0.0, top - s.height, s.width, top);
            top -= s.height + buff;
            r
        })
        .collect()
}

pub fn union_all(rects: &[Rect]) -> Option<Rect> {
    let (first, rest) = rects.split_first()?;
    Some(rest.iter().fold(*first, |acc, r| acc.union(*r)))
}

/// Translates every box so the group's union lands where `place` puts it.
pub fn place_group(rects: &mut [Rect], place: impl FnOnce(Rect) -> Rect) {
    let Some(bounds) = union_all(rects) else {
        return;
    };
    let target = place(bounds);
    let delta = Vec2::new(target.x0 - bounds.x0, target.y0 - bounds.y0);
    for r in rects.iter_mut() {
        *r = *r + delta;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/place.rs"]
mod tests;
