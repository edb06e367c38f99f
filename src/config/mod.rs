//! Dataset and presentation settings.

pub mod model;
