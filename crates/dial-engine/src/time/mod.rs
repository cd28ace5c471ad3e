//! Time subsystem.
//!
//! Provides stable, testable timing utilities without coupling to the runtime:
//! - `FrameClock`: one per window, `tick()` once per presented frame
//! - `Ticker`: fixed-period deadlines for work that runs between frames

mod frame_clock;
mod ticker;

pub use frame_clock::{FrameClock, FrameTime};
pub use ticker::Ticker;
