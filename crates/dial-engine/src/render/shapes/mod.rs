//! Shape renderers.

mod common;

pub mod circle;
pub mod line;
