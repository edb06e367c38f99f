use kurbo::{PathEl, Shape};

use super::*;

fn endpoints(path: &BezPath) -> Vec<Point> {
    path.elements()
        .iter()
        .filter_map(|el| match *el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) | PathEl::CurveTo(_, _, p) => Some(p),
            _ => None,
        })
        .collect()
}

#[test]
fn curve_passes_through_every_point() {
    let pts = vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.5),
        Point::new(2.0, 2.0),
        Point::new(3.0, 2.2),
        Point::new(4.0, 4.0),
    ];
    let path = smooth_path(&pts);
    assert_eq!(endpoints(&path), pts);
}

#[test]
fn interior_joins_are_tangent_continuous() {
    let pts = vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(2.0, 0.0),
        Point::new(3.0, 1.0),
    ];
    let path = smooth_path(&pts);
    let els = path.elements();
    // els[1] and els[2] are the first two cubics; they meet at pts[1].
    let (PathEl::CurveTo(_, c2, p), PathEl::CurveTo(c1_next, _, _)) = (els[1], els[2]) else {
        panic!("expected cubic segments");
    };
    let incoming = p - c2;
    let outgoing = c1_next - p;
    assert!((incoming.cross(outgoing)).abs() < 1e-12);
}

#[test]
fn degenerate_inputs() {
    assert!(smooth_path(&[]).elements().is_empty());

    let one = smooth_path(&[Point::new(1.0, 2.0)]);
    assert_eq!(one.elements(), &[PathEl::MoveTo(Point::new(1.0, 2.0))]);

    let two = smooth_path(&[Point::ORIGIN, Point::new(1.0, 1.0)]);
    assert_eq!(two.elements().len(), 2);
    assert!((two.perimeter(1e-9) - 2f64.sqrt()).abs() < 1e-9);
}
