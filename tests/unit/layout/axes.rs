use super::*;

fn gdp_axes() -> Axes {
    Axes::new(
        AxisRange::new(1960.0, 2020.0, 10.0).unwrap(),
        AxisRange::new(0.0, 100.0, 20.0).unwrap(),
    )
}

fn gdp_points() -> Vec<DataPoint> {
    let values = [
        1.4, 2.2, 3.4, 6.4, 11.3, 18.3, 31.5, 33.6, 47.4, 65.6, 84.9, 96.1, 97.8,
    ];
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| DataPoint {
            year: 1960 + 5 * i as i32,
            value,
        })
        .collect()
}

#[test]
fn range_ends_map_to_axis_ends() {
    let axes = gdp_axes();
    let lo = axes.coords_to_point(1960.0, 0.0);
    let hi = axes.coords_to_point(2020.0, 100.0);
    assert_eq!(lo, Point::new(-DEFAULT_X_LENGTH / 2.0, -DEFAULT_Y_LENGTH / 2.0));
    assert_eq!(hi, Point::new(DEFAULT_X_LENGTH / 2.0, DEFAULT_Y_LENGTH / 2.0));
}

#[test]
fn mapping_preserves_length_and_order() {
    let axes = gdp_axes();
    let pts = gdp_points();
    let mapped = axes.map_points(&pts);
    assert_eq!(mapped.len(), pts.len());
    for (p, m) in pts.iter().zip(&mapped) {
        assert_eq!(*m, axes.coords_to_point(f64::from(p.year), p.value));
    }
}

#[test]
fn mapped_x_is_strictly_increasing_for_increasing_years() {
    let mapped = gdp_axes().map_points(&gdp_points());
    assert!(mapped.windows(2).all(|w| w[0].x < w[1].x));
}

#[test]
fn empty_series_maps_to_empty() {
    assert!(gdp_axes().map_points(&[]).is_empty());
}

#[test]
fn ticks_cover_range_inclusive() {
    let r = AxisRange::new(1960.0, 2020.0, 20.0).unwrap();
    assert_eq!(r.ticks(), vec![1960.0, 1980.0, 2000.0, 2020.0]);

    let r = AxisRange::new(0.0, 1.0, 0.1).unwrap();
    assert_eq!(r.ticks().len(), 11);
}

#[test]
fn invalid_ranges_are_rejected() {
    assert!(AxisRange::new(5.0, 5.0, 1.0).is_err());
    assert!(AxisRange::new(0.0, 5.0, 0.0).is_err());
    assert!(AxisRange::new(f64::NAN, 5.0, 1.0).is_err());
}

#[test]
fn axes_cross_at_clamped_zero() {
    let axes = gdp_axes();
    // x domain excludes 0, so the y axis sits at the left edge.
    assert_eq!(axes.origin_point(), axes.coords_to_point(1960.0, 0.0));
    assert_eq!(axes.x_axis_end().x, axes.bounds().x1);
    assert_eq!(axes.y_axis_end().y, axes.bounds().y1);
}

#[test]
fn tick_count_is_bounded() {
    assert!(AxisRange::new(0.0, 1e300, 1e-300).is_err());
    assert!(AxisRange::new(0.0, 1e8, 1.0).is_err());
    assert!(AxisRange::new(0.0, f64::MAX, f64::MIN_POSITIVE).is_err());

    let r = AxisRange::new(0.0, (MAX_TICKS - 1) as f64, 1.0).unwrap();
    assert_eq!(r.ticks().len(), MAX_TICKS);
}
