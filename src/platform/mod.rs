//! Platform abstraction layer
//!
//! Handles the collaborators the simulation doesn't own:
//! - Input snapshots (keys → logical controls)
//! - Tick pacing (sleepers)

pub mod input;
pub mod time;

pub use input::{Autopilot, Control, Controls, InputSource, Key, KeyBindings, ScriptedInput};
pub use time::{RecordingSleeper, Sleeper, ThreadSleeper};
