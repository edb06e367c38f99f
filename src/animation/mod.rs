//! Easing curves and keyframed properties.

pub mod ease;
pub mod keyframes;
