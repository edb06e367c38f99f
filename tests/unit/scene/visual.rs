use super::*;
use crate::layout::axes::AxisRange;

#[test]
fn text_is_placed_from_a_centered_box() {
    let v = Visual::text("hello", 48.0, Color::WHITE, |r| {
        r + kurbo::Vec2::new(1.0, 2.0)
    });
    let size = place::text_size("hello", 48.0);
    assert!((v.bounds.center().x - 1.0).abs() < 1e-12);
    assert!((v.bounds.center().y - 2.0).abs() < 1e-12);
    assert!((v.bounds.width() - size.width).abs() < 1e-12);
}

#[test]
fn shape_bounds_follow_path() {
    let mut path = BezPath::new();
    path.move_to((0.0, 0.0));
    path.line_to((2.0, 1.0));
    let v = Visual::shape(ShapeRole::Curve, &path, Color::BLUE, 3.0);
    assert_eq!(v.bounds, Rect::new(0.0, 0.0, 2.0, 1.0));
    let VisualKind::Shape {
        path_d,
        fill_opacity,
        ..
    } = &v.kind
    else {
        panic!("expected shape");
    };
    assert_eq!(*fill_opacity, 1.0);
    assert!(path_d.starts_with('M'));
}

#[test]
fn serde_tags_kinds_in_snake_case() {
    let axes = Axes::new(
        AxisRange::new(0.0, 10.0, 1.0).unwrap(),
        AxisRange::new(0.0, 5.0, 1.0).unwrap(),
    );
    let v = Visual::axes(&axes, Color::WHITE).with_z(-1);
    let json = serde_json::to_value(&v).unwrap();
    assert_eq!(json["kind"]["type"], "axes");
    assert_eq!(json["z"], -1);

    let back: Visual = serde_json::from_value(json).unwrap();
    assert_eq!(back, v);
}

#[test]
fn visual_id_is_transparent_in_json() {
    let id = VisualId::from("chart.curve");
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"chart.curve\"");
    assert_eq!(id.to_string(), "chart.curve");
}

#[test]
fn single_point_shape_is_bounded_at_its_point() {
    let p = Point::new(3.0, -2.0);
    let path = crate::layout::curve::smooth_path(&[p]);
    let v = Visual::shape(ShapeRole::Curve, &path, Color::BLUE, 0.0);
    assert_eq!(v.bounds, Rect::from_points(p, p));
    assert_eq!(v.bounds.center(), p);

    let empty = Visual::shape(ShapeRole::Curve, &BezPath::new(), Color::BLUE, 0.0);
    assert_eq!(empty.bounds, Rect::ZERO);
}
