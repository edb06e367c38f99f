//! The GDP explainer: lays out every visual from a [`ReelConfig`] and
//! sequences them into a [`Timeline`].
//!
//! Layout is computed up front ([`StoryLayout`]); visuals are immutable once
//! registered, so anything positioned relative to another visual is placed
//! from that visual's computed bounds.

use kurbo::{Point, Rect, Shape, Vec2};

use crate::{
    config::model::{HighlightConfig, ReelConfig},
    foundation::color::Color,
    foundation::error::ReelResult,
    layout::{
        axes::{AxisRange, Axes, LayoutPoint},
        curve::smooth_path,
        pie::{AngleSpan, label_anchor, pie_spans, sector_path},
        place::{
            self, Direction, Edge, MED_LARGE_BUFF, MED_SMALL_BUFF, SMALL_BUFF,
        },
    },
    scene::visual::{ShapeRole, Visual, VisualId},
    timeline::{
        builder::{Timeline, TimelineBuilder},
        step::{Entrance, Exit},
    },
};

const TITLE_PT: f64 = 40.0;
const HEADING_PT: f64 = 30.0;
const FINAL_HEADING_PT: f64 = 36.0;
const BODY_PT: f64 = 24.0;
const CAPTION_PT: f64 = 20.0;
const FORMULA_PT: f64 = 48.0;

const TERM_SPACING: f64 = 0.3;
const FACTOR_SPACING: f64 = 0.4;
const SECTOR_FILL: f64 = 0.8;
const PATH_TOLERANCE: f64 = 1e-3;
const SECTOR_DRAW_SECS: f64 = 2.0;

/// Where the chart and the pie end up on screen.
#[derive(Clone, Debug, serde::Serialize)]
pub struct StoryLayout {
    pub frame: Rect,
    pub axes: Axes,
    pub points: Vec<PlottedPoint>,
    pub curve_d: String,
    pub pie_center: Point,
    pub pie_total: f64,
    pub slices: Vec<SliceLayout>,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct PlottedPoint {
    pub year: i32,
    pub value: f64,
    pub at: LayoutPoint,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct SliceLayout {
    pub label: String,
    pub percentage: f64,
    #[serde(flatten)]
    pub span: AngleSpan,
    pub label_at: Point,
}

fn axes_for(x: AxisRange, y: AxisRange) -> ReelResult<Axes> {
    let axes = Axes::new(x, y);
    axes.validate()?;
    Ok(axes)
}

fn pie_title_bounds(cfg: &ReelConfig, frame: Rect) -> Rect {
    let size = place::text_size(&cfg.composition.title, HEADING_PT);
    place::to_edge(place::centered(Point::ORIGIN, size), frame, Edge::Top, MED_LARGE_BUFF)
}

/// Computes the chart mapping and the pie placement for `cfg`.
#[tracing::instrument(skip_all)]
pub fn layout(cfg: &ReelConfig) -> ReelResult<StoryLayout> {
    let frame = cfg.render.canvas.scene_frame();
    let axes = axes_for(cfg.series.x_axis, cfg.series.y_axis)?;
    let mapped = axes.map_points(&cfg.series.points);
    let curve_d = smooth_path(&mapped).to_svg();
    let points = cfg
        .series
        .points
        .iter()
        .zip(mapped)
        .map(|(p, at)| PlottedPoint {
            year: p.year,
            value: p.value,
            at,
        })
        .collect();

    let c = &cfg.composition;
    let total = crate::layout::pie::check_slices(&c.slices)?;
    let spans = pie_spans(&c.slices);

    // Lay the pie out around the origin, then move the whole group (sectors
    // and labels) under its title.
    let mut group: Vec<Rect> = Vec::with_capacity(spans.len() * 2);
    let mut anchors = Vec::with_capacity(spans.len());
    for (slice, span) in c.slices.iter().zip(&spans) {
        group.push(sector_path(Point::ORIGIN, c.radius, *span).bounding_box());
        let at = label_anchor(Point::ORIGIN, c.radius, *span, c.label_scale);
        group.push(place::centered(at, place::text_size(&slice.label, CAPTION_PT)));
        anchors.push(at);
    }
    let shift = match place::union_all(&group) {
        Some(bounds) => {
            let target = place::next_to(
                bounds,
                pie_title_bounds(cfg, frame),
                Direction::Down,
                MED_LARGE_BUFF,
            );
            Vec2::new(target.x0 - bounds.x0, target.y0 - bounds.y0)
        }
        None => Vec2::ZERO,
    };

    let slices = c
        .slices
        .iter()
        .zip(spans)
        .zip(anchors)
        .map(|((s, span), at)| SliceLayout {
            label: s.label.clone(),
            percentage: s.percentage,
            span,
            label_at: at + shift,
        })
        .collect();

    Ok(StoryLayout {
        frame,
        axes,
        points,
        curve_d,
        pie_center: Point::ORIGIN + shift,
        pie_total: total.total,
        slices,
    })
}

/// Sizes of `texts` stacked into a left-aligned column placed under `anchor`.
fn column_under(texts: &[String], font_size: f64, spacing: f64, anchor: Rect) -> Vec<Rect> {
    let sizes: Vec<_> = texts.iter().map(|t| place::text_size(t, font_size)).collect();
    let mut rects = place::arrange_column(&sizes, spacing);
    place::place_group(&mut rects, |g| {
        place::next_to(g, anchor, Direction::Down, MED_LARGE_BUFF)
    });
    rects
}

fn fixed(rect: Rect) -> impl FnOnce(Rect) -> Rect {
    move |_| rect
}

fn point_rect(p: Point) -> Rect {
    Rect::from_origin_size(p, (0.0, 0.0))
}

fn add_highlight(
    b: &mut TimelineBuilder,
    i: usize,
    h: &HighlightConfig,
    axes: &Axes,
) -> ReelResult<[VisualId; 2]> {
    let center = axes.coords_to_point(h.year, h.value);
    let rect = Rect::from_center_size(center, (axes.x_length * h.size, axes.y_length * h.size));
    let frame = b.add(
        format!("highlight.{i}.frame"),
        Visual::shape(ShapeRole::Frame, &rect.to_path(PATH_TOLERANCE), h.color, 0.0),
    )?;
    let label = b.add(
        format!("highlight.{i}.label"),
        Visual::text(&h.label, CAPTION_PT, h.color, |r| {
            place::next_to(r, rect, Direction::Up, MED_SMALL_BUFF)
        }),
    )?;
    Ok([frame, label])
}

/// Builds the full explainer timeline for `cfg`.
#[tracing::instrument(skip_all)]
pub fn build_timeline(cfg: &ReelConfig) -> ReelResult<Timeline> {
    let lay = layout(cfg)?;
    let frame = lay.frame;
    let axes = lay.axes;
    let mut b = TimelineBuilder::new();

    // Intro.
    let intro_title = place::centered(
        Point::ORIGIN,
        place::text_size(&cfg.intro.title, TITLE_PT),
    );
    let intro = [
        b.add(
            "intro.title",
            Visual::text(&cfg.intro.title, TITLE_PT, Color::WHITE, fixed(intro_title)),
        )?,
        b.add(
            "intro.subtitle",
            Visual::text(&cfg.intro.subtitle, HEADING_PT, Color::WHITE, |r| {
                place::next_to(r, intro_title, Direction::Down, MED_SMALL_BUFF)
            }),
        )?,
    ];
    b.introduce(&intro, Entrance::Write)
        .wait(1.0)
        .retire(&intro, Exit::FadeOut);

    // Chart furniture: axes, tick numbers, axis labels, heading.
    let s = &cfg.series;
    let origin = axes.origin_point();
    let mut furniture = vec![b.add("chart.axes", Visual::axes(&axes, Color::WHITE))?];
    for (i, n) in s.x_numbers.iter().enumerate() {
        let tick = point_rect(Point::new(axes.coords_to_point(*n, s.y_axis.min).x, origin.y));
        furniture.push(b.add(
            format!("chart.x_number.{i}"),
            Visual::text(n.to_string(), BODY_PT, Color::WHITE, |r| {
                place::next_to(r, tick, Direction::Down, MED_SMALL_BUFF)
            }),
        )?);
    }
    for (i, n) in s.y_numbers.iter().enumerate() {
        let tick = point_rect(Point::new(origin.x, axes.coords_to_point(s.x_axis.min, *n).y));
        furniture.push(b.add(
            format!("chart.y_number.{i}"),
            Visual::text(n.to_string(), BODY_PT, Color::WHITE, |r| {
                place::next_to(r, tick, Direction::Left, MED_SMALL_BUFF)
            }),
        )?);
    }
    let x_end = point_rect(axes.x_axis_end());
    let y_end = point_rect(axes.y_axis_end());
    furniture.push(b.add(
        "chart.x_label",
        Visual::text(&s.x_label, BODY_PT, Color::WHITE, |r| {
            place::next_to(r, x_end, Direction::Up, SMALL_BUFF)
        }),
    )?);
    furniture.push(b.add(
        "chart.y_label",
        Visual::text(&s.y_label, BODY_PT, Color::WHITE, |r| {
            place::next_to(r, y_end, Direction::Right, SMALL_BUFF)
        }),
    )?);
    let chart_title = b.add(
        "chart.title",
        Visual::text(&s.title, HEADING_PT, Color::WHITE, |r| {
            place::to_edge(r, frame, Edge::Top, MED_LARGE_BUFF)
        }),
    )?;
    let mut chart_intro = furniture.clone();
    chart_intro.push(chart_title.clone());
    b.introduce(&chart_intro, Entrance::Create).wait(1.0);

    // The series curve.
    let mapped: Vec<Point> = lay.points.iter().map(|p| p.at).collect();
    let curve = b.add(
        "chart.curve",
        Visual::shape(ShapeRole::Curve, &smooth_path(&mapped), s.color, 0.0).with_z(1),
    )?;
    b.introduce_for(std::slice::from_ref(&curve), Entrance::Create, s.draw_secs)
        .wait(1.0);

    // Highlighted periods, one at a time, then cleared together.
    let mut highlighted = Vec::with_capacity(cfg.highlights.len() * 2);
    for (i, h) in cfg.highlights.iter().enumerate() {
        let pair = add_highlight(&mut b, i, h, &axes)?;
        b.introduce(&pair, Entrance::Create).wait(1.5);
        highlighted.extend(pair);
    }
    if !highlighted.is_empty() {
        b.retire(&highlighted, Exit::FadeOut).wait(1.0);
    }
    if let Some(secs) = s.emphasize_secs {
        b.emphasize(&curve, secs);
    }

    // Expenditure formula and its terms.
    let formula_bounds = place::to_edge(
        place::centered(
            Point::ORIGIN,
            place::text_size(&cfg.formula.expression, FORMULA_PT),
        ),
        frame,
        Edge::Top,
        MED_LARGE_BUFF,
    );
    let formula = b.add(
        "formula",
        Visual::formula(
            &cfg.formula.expression,
            FORMULA_PT,
            Color::WHITE,
            fixed(formula_bounds),
        ),
    )?;
    b.swap(
        std::slice::from_ref(&chart_title),
        Exit::FadeOut,
        std::slice::from_ref(&formula),
        Entrance::Write,
    )
    .wait(1.0);

    let term_rects = column_under(&cfg.formula.terms, BODY_PT, TERM_SPACING, formula_bounds);
    let mut formula_group = Vec::with_capacity(term_rects.len() + 1);
    for (i, (term, rect)) in cfg.formula.terms.iter().zip(term_rects).enumerate() {
        let id = b.add(
            format!("formula.term.{i}"),
            Visual::text(term, BODY_PT, Color::WHITE, fixed(rect)),
        )?;
        b.introduce(std::slice::from_ref(&id), Entrance::Write)
            .wait(0.5);
        formula_group.push(id);
    }
    b.wait(1.0);
    formula_group.push(formula);
    b.retire(&formula_group, Exit::FadeOut);

    // Composition pie.
    let c = &cfg.composition;
    let pie_title = b.add(
        "pie.title",
        Visual::text(&c.title, HEADING_PT, Color::WHITE, fixed(pie_title_bounds(cfg, frame))),
    )?;
    b.introduce(std::slice::from_ref(&pie_title), Entrance::Write);

    let mut sectors = Vec::with_capacity(lay.slices.len());
    let mut labels = Vec::with_capacity(lay.slices.len());
    for (i, (slice, placed)) in c.slices.iter().zip(&lay.slices).enumerate() {
        let path = sector_path(lay.pie_center, c.radius, placed.span);
        sectors.push(b.add(
            format!("pie.sector.{i}"),
            Visual::shape(ShapeRole::Sector, &path, slice.color, SECTOR_FILL),
        )?);
        let size = place::text_size(&slice.label, CAPTION_PT);
        labels.push(b.add(
            format!("pie.label.{i}"),
            Visual::text(
                &slice.label,
                CAPTION_PT,
                Color::WHITE,
                fixed(place::centered(placed.label_at, size)),
            )
            .with_z(1),
        )?);
    }
    if !sectors.is_empty() {
        b.introduce_for(&sectors, Entrance::Create, SECTOR_DRAW_SECS);
    }
    for label in &labels {
        b.introduce(std::slice::from_ref(label), Entrance::Write);
    }
    b.wait(2.0);

    // Everything from the chart onward leaves as the closing heading arrives.
    let f = &cfg.factors;
    let final_bounds = place::to_edge(
        place::centered(Point::ORIGIN, place::text_size(&f.title, FINAL_HEADING_PT)),
        frame,
        Edge::Top,
        MED_LARGE_BUFF,
    );
    let final_title = b.add(
        "factors.title",
        Visual::text(&f.title, FINAL_HEADING_PT, Color::WHITE, fixed(final_bounds)),
    )?;
    let mut clear: Vec<VisualId> = sectors;
    clear.extend(labels);
    clear.push(pie_title);
    clear.extend(furniture);
    clear.push(curve);
    b.swap(
        &clear,
        Exit::FadeOut,
        std::slice::from_ref(&final_title),
        Entrance::Write,
    );

    let factor_rects = column_under(&f.items, HEADING_PT, FACTOR_SPACING, final_bounds);
    let mut closing = vec![final_title];
    for (i, (item, rect)) in f.items.iter().zip(&factor_rects).enumerate() {
        let id = b.add(
            format!("factors.item.{i}"),
            Visual::text(item, HEADING_PT, Color::WHITE, fixed(*rect)),
        )?;
        b.introduce(std::slice::from_ref(&id), Entrance::Write)
            .wait(0.5);
        closing.push(id);
    }
    b.wait(2.0);

    let above = place::union_all(&factor_rects).unwrap_or(final_bounds);
    let conclusion = b.add(
        "factors.conclusion",
        Visual::text(&f.conclusion, BODY_PT, Color::WHITE, |r| {
            place::next_to(r, above, Direction::Down, 0.8)
        }),
    )?;
    b.introduce(std::slice::from_ref(&conclusion), Entrance::Write)
        .wait(3.0);
    closing.push(conclusion);
    b.retire(&closing, Exit::FadeOut);

    if let Some(text) = &cfg.credits {
        let credits = b.add(
            "credits",
            Visual::text(text, HEADING_PT, Color::WHITE, |r| r),
        )?;
        let one = std::slice::from_ref(&credits);
        b.introduce(one, Entrance::Write)
            .wait(2.0)
            .retire(one, Exit::FadeOut)
            .wait(1.0);
    } else {
        b.wait(1.0);
    }

    b.build()
}

#[cfg(test)]
#[path = "../tests/unit/storyboard.rs"]
mod tests;
