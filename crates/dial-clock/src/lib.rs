//! Analog clock widget and the pieces it is computed from.
//!
//! - [`time`]: wall-clock input and hour/minute/second decomposition
//! - [`hand`]: per-hand angle, length, thickness and color
//! - [`face`]: ring, face, hub and tick geometry
//! - [`clock`]: the [`Clock`](clock::Clock) widget that paints all of it

pub mod clock;
pub mod config;
pub mod face;
pub mod hand;
pub mod theme;
pub mod time;
