//! Scene Description Foundations

mod path;

pub use path::*;
