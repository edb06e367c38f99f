//! Ordered presentation steps and the builder that validates them.

pub mod builder;
pub mod step;
