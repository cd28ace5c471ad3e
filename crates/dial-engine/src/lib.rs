//! Dial engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the widget layer:
//! window and surface management, the draw stream, and the shape renderers.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
