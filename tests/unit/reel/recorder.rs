use super::*;
use crate::{
    scene::visual::Visual,
    timeline::builder::{Timeline, TimelineBuilder},
};

fn fixture() -> Timeline {
    let mut b = TimelineBuilder::new();
    let a = b
        .add("a", Visual::text("A", 24.0, Color::WHITE, |r| r))
        .unwrap();
    let bb = b
        .add("b", Visual::text("B", 24.0, Color::WHITE, |r| r))
        .unwrap();
    b.introduce(std::slice::from_ref(&a), Entrance::Write)
        .wait(1.0)
        .emphasize(&a, 1.0)
        .introduce(std::slice::from_ref(&bb), Entrance::FadeIn)
        .retire(std::slice::from_ref(&a), Exit::FadeOut)
        .wait(0.5);
    b.build().unwrap()
}

fn record(tl: &Timeline) -> Reel {
    record_reel(
        tl,
        Fps::new(10, 1).unwrap(),
        Canvas {
            width: 160,
            height: 90,
        },
        Color::BLACK,
    )
    .unwrap()
}

#[test]
fn clip_ranges_follow_cue_times() {
    let reel = record(&fixture());
    assert_eq!(reel.duration, FrameIndex(55));

    let spans: Vec<(&str, u64, u64)> = reel
        .clips
        .iter()
        .map(|c| (c.id.as_str(), c.range.start.0, c.range.end.0))
        .collect();
    assert_eq!(spans, vec![("a#0", 0, 50), ("b#0", 30, 55)]);
}

#[test]
fn entrances_exits_and_emphasis_become_keyframes() {
    let reel = record(&fixture());
    let a = &reel.clips[0];
    let b = &reel.clips[1];

    assert_eq!(a.reveal.sample(FrameIndex(0)).unwrap(), 0.0);
    assert_eq!(a.reveal.sample(FrameIndex(10)).unwrap(), 1.0);
    assert_eq!(a.opacity.sample(FrameIndex(10)).unwrap(), 1.0);

    assert_eq!(a.scale.sample(FrameIndex(19)).unwrap(), 1.0);
    assert_eq!(a.scale.sample(FrameIndex(25)).unwrap(), EMPHASIS_SCALE);
    assert_eq!(a.scale.sample(FrameIndex(30)).unwrap(), 1.0);

    assert_eq!(a.opacity.sample(FrameIndex(40)).unwrap(), 1.0);
    assert!((a.opacity.sample(FrameIndex(45)).unwrap() - 0.5).abs() < 1e-9);
    assert_eq!(a.opacity.sample(FrameIndex(50)).unwrap(), 0.0);

    assert_eq!(b.opacity.sample(FrameIndex(0)).unwrap(), 0.0);
    assert_eq!(b.opacity.sample(FrameIndex(10)).unwrap(), 1.0);
    assert_eq!(b.reveal.sample(FrameIndex(0)).unwrap(), 1.0);
}

#[test]
fn reintroduced_visuals_get_fresh_clip_ids() {
    let mut b = TimelineBuilder::new();
    let a = b
        .add("a", Visual::text("A", 24.0, Color::WHITE, |r| r))
        .unwrap();
    let one = std::slice::from_ref(&a);
    b.introduce(one, Entrance::Create)
        .retire(one, Exit::Uncreate)
        .introduce(one, Entrance::Create);
    let reel = record(&b.build().unwrap());

    let ids: Vec<&str> = reel.clips.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["a#0", "a#1"]);
    assert_eq!(reel.clips[0].range.end, FrameIndex(20));
    assert_eq!(reel.clips[0].reveal.sample(FrameIndex(20)).unwrap(), 0.0);
    assert_eq!(reel.clips[1].range.start, FrameIndex(20));
}

#[test]
fn recorder_rejects_cues_for_visuals_not_on_screen() {
    let mut rec = ReelRecorder::new(Fps::new(30, 1).unwrap());
    let cue = Cue {
        at: 0.0,
        run_time: 1.0,
        visual: "ghost".into(),
        action: CueAction::Exit(Exit::FadeOut),
    };
    assert!(rec.cue(&cue).is_err());
}

#[test]
fn unfinished_recorder_cannot_build_a_reel() {
    let rec = ReelRecorder::new(Fps::new(30, 1).unwrap());
    let canvas = Canvas {
        width: 16,
        height: 9,
    };
    assert!(
        rec.into_reel(canvas, Color::BLACK, Catalog::new())
            .is_err()
    );
}
