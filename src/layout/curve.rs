use kurbo::{BezPath, Point};

/// A smooth cubic curve through every point, in order.
///
/// Interior handles follow the Catmull-Rom tangent `(p[i+1] - p[i-1]) / 6`;
/// end tangents reuse the neighbouring segment so the curve does not kink at
/// the first or last sample.
pub fn smooth_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let Some(&first) = points.first() else {
        return path;
    };
    path.move_to(first);
    if points.len() == 2 {
        path.line_to(points[1]);
        return path;
    }

    let last = points.len() - 1;
    for i in 0..last {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(last)];

        let c1 = p1 + (p2 - p0) / 6.0;
        let c2 = p2 - (p3 - p1) / 6.0;
        path.curve_to(c1, c2, p2);
    }
    path
}

#[cfg(test)]
#[path = "../../tests/unit/layout/curve.rs"]
mod tests;
