//! Frame timing.
//!
//! One `FrameClock` per render loop; `tick()` once per presented frame.
//! `dt` drives camera movement, `elapsed` drives time-based animation.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
