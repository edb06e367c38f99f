//! The renderer-facing document: clips on frame ranges with keyframed
//! opacity, reveal and scale.

pub mod evaluator;
pub mod model;
pub mod recorder;
