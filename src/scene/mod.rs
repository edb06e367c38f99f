//! Visual primitives and the session that tracks which of them are on screen.

pub mod session;
pub mod visual;
