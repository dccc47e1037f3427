//! Platform abstraction layer
//!
//! Seams to the host environment:
//! - Input events and held keys/buttons
//! - Frame timing
//!
//! The simulation never talks to these directly; the runner snapshots input
//! into a [`FrameInput`] once per frame and hands the controller a delta.

pub mod input;
pub mod time;

pub use input::{FrameInput, Input, InputEvent, Key, MouseButton};
pub use time::{Clock, FixedClock, FrameLimiter};
