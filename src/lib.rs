//! gdpreel lays out a small economic dataset and sequences it into an
//! explainer reel.
//!
//! The crate stops at a declarative document boundary:
//!
//! - Load and validate a [`ReelConfig`]
//! - Compute the chart and pie layout ([`storyboard::layout`])
//! - Build a checked [`Timeline`] ([`storyboard::build_timeline`])
//! - Record it into a [`Reel`] and evaluate single frames with [`Evaluator`]
#![forbid(unsafe_code)]

/// Easing and keyframes.
pub mod animation;
/// JSON configuration model.
pub mod config;
mod foundation;
/// Layout calculator.
pub mod layout;
/// Reel document, recorder and evaluator.
pub mod reel;
/// Visuals and the scene session.
pub mod scene;
/// The GDP explainer storyline.
pub mod storyboard;
/// Presentation steps and the timeline builder.
pub mod timeline;

pub use crate::foundation::color::Color;
pub use crate::foundation::core::{
    Affine, BezPath, Canvas, FRAME_HEIGHT, Fps, FrameIndex, FrameRange, Point, Rect, Size, Vec2,
};
pub use crate::foundation::error::{ReelError, ReelResult};

pub use crate::config::model::ReelConfig;
pub use crate::layout::axes::{AxisRange, Axes, DataPoint, LayoutPoint};
pub use crate::layout::pie::{AngleSpan, PieSlice, angle_spans, pie_spans};
pub use crate::reel::evaluator::{EvaluatedFrame, EvaluatedNode, Evaluator};
pub use crate::reel::model::{Clip, Reel};
pub use crate::reel::recorder::{ReelRecorder, record_reel};
pub use crate::scene::session::{Catalog, Cue, CueAction, CueSink, Session};
pub use crate::scene::visual::{Visual, VisualId, VisualKind};
pub use crate::timeline::builder::{Timeline, TimelineBuilder};
pub use crate::timeline::step::{Beat, Entrance, Exit, Step};
