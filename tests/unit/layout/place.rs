use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn text_size_scales_with_font_and_lines() {
    let one = text_size("abcd", 48.0);
    let big = text_size("abcd", 96.0);
    assert!(approx(big.width, one.width * 2.0));
    assert!(approx(big.height, one.height * 2.0));

    let two_lines = text_size("abcd\nab", 48.0);
    assert!(approx(two_lines.width, one.width));
    assert!(approx(two_lines.height, one.height * 2.0));

    assert_eq!(text_size("", 48.0).width, 0.0);
}

#[test]
fn next_to_keeps_buffer_and_centers() {
    let anchor = Rect::new(-1.0, -1.0, 1.0, 1.0);
    let r = Rect::new(5.0, 5.0, 7.0, 6.0);

    let below = next_to(r, anchor, Direction::Down, 0.5);
    assert!(approx(below.y1, -1.5));
    assert!(approx(below.center().x, 0.0));
    assert!(approx(below.height(), 1.0));

    let right = next_to(r, anchor, Direction::Right, 0.25);
    assert!(approx(right.x0, 1.25));
    assert!(approx(right.center().y, 0.0));
}

#[test]
fn to_edge_respects_buffer() {
    let frame = Rect::new(-7.0, -4.0, 7.0, 4.0);
    let r = Rect::new(-1.0, -0.5, 1.0, 0.5);
    let top = to_edge(r, frame, Edge::Top, MED_LARGE_BUFF);
    assert!(approx(top.y1, 3.5));
    assert!(approx(top.x0, -1.0));
    let left = to_edge(r, frame, Edge::Left, MED_LARGE_BUFF);
    assert!(approx(left.x0, -6.5));
}

#[test]
fn column_is_left_aligned_and_buffered() {
    let rects = arrange_column(&[Size::new(2.0, 1.0), Size::new(4.0, 0.5)], 0.3);
    assert_eq!(rects[0], Rect::new(0.0, -1.0, 2.0, 0.0));
    assert!(approx(rects[1].y1, -1.3));
    assert!(approx(rects[1].x0, 0.0));
    assert!(arrange_column(&[], 0.3).is_empty());
}

#[test]
fn place_group_moves_rects_together() {
    let mut rects = vec![Rect::new(0.0, 0.0, 1.0, 1.0), Rect::new(2.0, 0.0, 3.0, 1.0)];
    place_group(&mut rects, |b| b + Vec2::new(-10.0, 5.0));
    assert_eq!(rects[0], Rect::new(-10.0, 5.0, -9.0, 6.0));
    assert_eq!(rects[1], Rect::new(-8.0, 5.0, -7.0, 6.0));
    assert!(union_all(&[]).is_none());
}
