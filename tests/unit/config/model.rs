use super::*;

#[test]
fn builtin_config_parses_and_validates_clean() {
    let cfg = ReelConfig::builtin().unwrap();
    assert_eq!(cfg.series.points.len(), 13);
    assert_eq!(cfg.highlights.len(), 4);
    assert_eq!(cfg.composition.slices.len(), 4);
    assert_eq!(cfg.render.fps, Fps { num: 30, den: 1 });

    let flagged = cfg.validate(true).unwrap();
    assert!(flagged.is_empty(), "{flagged:?}");
}

#[test]
fn missing_optional_sections_take_defaults() {
    let mut v = serde_json::to_value(ReelConfig::builtin().unwrap()).unwrap();
    let obj = v.as_object_mut().unwrap();
    obj.remove("render");
    obj.remove("highlights");
    obj.remove("credits");
    obj["composition"]
        .as_object_mut()
        .unwrap()
        .remove("label_scale");

    let cfg = ReelConfig::from_json_str(&v.to_string()).unwrap();
    assert_eq!(cfg.render, RenderConfig::default());
    assert!(cfg.highlights.is_empty());
    assert!(cfg.credits.is_none());
    assert_eq!(cfg.composition.label_scale, 1.5);
}

#[test]
fn short_pie_total_is_flagged_not_fatal() {
    let mut cfg = ReelConfig::builtin().unwrap();
    cfg.composition.slices[3].percentage = 0.0;

    let flagged = cfg.validate(false).unwrap();
    assert_eq!(flagged.len(), 1);
    assert!(flagged[0].contains("95"));

    assert!(cfg.validate(true).is_err());

    cfg.composition.require_full_total = true;
    assert!(cfg.validate(false).is_err());
}

#[test]
fn out_of_range_slice_is_fatal() {
    let mut cfg = ReelConfig::builtin().unwrap();
    cfg.composition.slices[0].percentage = 120.0;
    assert!(cfg.validate(false).is_err());
}

#[test]
fn points_must_increase_by_year() {
    let mut cfg = ReelConfig::builtin().unwrap();
    cfg.series.points.swap(0, 1);
    let err = cfg.validate(false).unwrap_err();
    assert!(err.to_string().contains("strictly increasing"));
}

#[test]
fn points_outside_axes_are_flagged() {
    let mut cfg = ReelConfig::builtin().unwrap();
    cfg.series.y_axis = AxisRange::new(0.0, 25.0, 5.0).unwrap();

    let flagged = cfg.validate(false).unwrap();
    assert!(flagged.iter().any(|m| m.contains("(2020, 97.8)")));
    assert!(flagged.iter().any(|m| m.contains("Financial Crisis")));
}

#[test]
fn bad_highlight_size_is_rejected() {
    let mut cfg = ReelConfig::builtin().unwrap();
    cfg.highlights[0].size = 0.0;
    assert!(cfg.validate(false).is_err());
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = ReelConfig::from_json_str("{ \"intro\": 3 }").unwrap_err();
    assert!(matches!(err, ReelError::Config(_)));
}

#[test]
fn missing_file_reports_the_path() {
    let err = ReelConfig::from_path(Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(format!("{err:#}").contains("not/here.json"));
}

#[test]
fn axis_with_too_many_ticks_is_rejected() {
    let mut cfg = ReelConfig::builtin().unwrap();
    cfg.series.y_axis = AxisRange {
        min: 0.0,
        max: 1e300,
        step: 1e-300,
    };
    let err = cfg.validate(false).unwrap_err();
    assert!(matches!(err, ReelError::Validation(_)));
}
