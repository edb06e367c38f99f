use super::*;
use crate::scene::visual::Visual;

fn basic_reel() -> Reel {
    let mut visuals = Catalog::new();
    visuals.insert(
        VisualId::from("t0"),
        Visual::text("hello", 24.0, Color::WHITE, |r| r),
    );
    Reel {
        fps: Fps::new(30, 1).unwrap(),
        canvas: Canvas {
            width: 640,
            height: 360,
        },
        background: Color::BLACK,
        duration: FrameIndex(60),
        visuals,
        clips: vec![Clip {
            id: "t0#0".to_string(),
            visual: VisualId::from("t0"),
            range: FrameRange::new(FrameIndex(0), FrameIndex(60)).unwrap(),
            opacity: Keyframes::constant(1.0),
            reveal: Keyframes::constant(1.0),
            scale: Keyframes::constant(1.0),
        }],
    }
}

#[test]
fn json_roundtrip_keeps_structure() {
    let reel = basic_reel();
    let s = reel.to_json_pretty().unwrap();
    let de: Reel = serde_json::from_str(&s).unwrap();
    assert_eq!(de.canvas.width, 640);
    assert_eq!(de.clips.len(), 1);
    assert_eq!(de.clips[0].visual, VisualId::from("t0"));
    de.validate().unwrap();
}

#[test]
fn validate_rejects_missing_visual() {
    let mut reel = basic_reel();
    reel.clips[0].visual = VisualId::from("missing");
    assert!(reel.validate().is_err());
}

#[test]
fn validate_rejects_out_of_bounds_range() {
    let mut reel = basic_reel();
    reel.clips[0].range = FrameRange {
        start: FrameIndex(0),
        end: FrameIndex(999),
    };
    assert!(reel.validate().is_err());
}

#[test]
fn validate_rejects_empty_duration_and_bad_canvas() {
    let mut reel = basic_reel();
    reel.duration = FrameIndex(0);
    assert!(reel.validate().is_err());

    let mut reel = basic_reel();
    reel.canvas.height = 0;
    assert!(reel.validate().is_err());
}

#[test]
fn duration_secs_uses_fps() {
    assert_eq!(basic_reel().duration_secs(), 2.0);
}
