//! Scene-space geometry: axis mapping, the series curve, pie sectors and
//! text placement.
//!
//! Everything here is plain arithmetic over `kurbo` types and cannot fail
//! once its inputs have been validated.

pub mod axes;
pub mod curve;
pub mod pie;
pub mod place;
