use super::*;
use crate::{foundation::color::Color, scene::session::CueAction};

fn text(s: &str) -> Visual {
    Visual::text(s, 24.0, Color::WHITE, |r| r)
}

#[test]
fn waits_attach_to_the_preceding_step() {
    let mut b = TimelineBuilder::new();
    let title = b.add("title", text("Title")).unwrap();
    let body = b.add("body", text("Body")).unwrap();
    b.wait(0.5);
    b.introduce(std::slice::from_ref(&title), Entrance::Write)
        .wait(1.0)
        .wait(0.5);
    b.introduce_for(std::slice::from_ref(&body), Entrance::FadeIn, 2.0);
    b.retire(&[title.clone(), body.clone()], Exit::FadeOut);
    let tl = b.build().unwrap();

    assert_eq!(tl.beats().len(), 3);
    assert_eq!(tl.beats()[0].wait_after, 1.5);
    assert_eq!(tl.duration(), 0.5 + 1.0 + 1.5 + 2.0 + 1.0);

    let starts: Vec<f64> = tl.cues().unwrap().iter().map(|c| c.at).collect();
    assert_eq!(starts, vec![0.5, 3.0, 5.0, 5.0]);
}

#[test]
fn build_rejects_illegal_sequences() {
    let mut b = TimelineBuilder::new();
    let a = b.add("a", text("A")).unwrap();
    b.retire(std::slice::from_ref(&a), Exit::FadeOut);
    let err = b.build().unwrap_err();
    assert!(err.to_string().contains("beat 0 (retire)"));

    let mut b = TimelineBuilder::new();
    let a = b.add("a", text("A")).unwrap();
    b.introduce(std::slice::from_ref(&a), Entrance::Write)
        .emphasize(&a, 1.0)
        .retire(std::slice::from_ref(&a), Exit::FadeOut)
        .emphasize(&a, 1.0);
    assert!(b.build().is_err());
}

#[test]
fn duplicate_or_blank_ids_are_rejected() {
    let mut b = TimelineBuilder::new();
    b.add("x", text("x")).unwrap();
    assert!(b.add("x", text("y")).is_err());
    assert!(b.add("  ", text("z")).is_err());
}

#[test]
fn visuals_can_return_after_retiring() {
    let mut b = TimelineBuilder::new();
    let a = b.add("a", text("A")).unwrap();
    let one = std::slice::from_ref(&a);
    b.introduce(one, Entrance::Write)
        .retire(one, Exit::Uncreate)
        .introduce(one, Entrance::Create);
    let tl = b.build().unwrap();
    let actions: Vec<CueAction> = tl.cues().unwrap().iter().map(|c| c.action).collect();
    assert_eq!(
        actions,
        vec![
            CueAction::Enter(Entrance::Write),
            CueAction::Exit(Exit::Uncreate),
            CueAction::Enter(Entrance::Create),
        ]
    );
}

#[test]
fn empty_timeline_is_valid() {
    let tl = TimelineBuilder::new().build().unwrap();
    assert_eq!(tl.duration(), 0.0);
    assert!(tl.cues().unwrap().is_empty());
}
