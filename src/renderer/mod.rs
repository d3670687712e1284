//! Rendering module
//!
//! The simulation hands a `Frame` of filled rectangles to a `RenderSink` once
//! per tick. Sinks own whatever surface they draw on.

pub mod shapes;
pub mod text;

pub use shapes::{Color, DrawRect, Frame, build_frame};
pub use text::TextSink;

use crate::error::RenderError;

/// Destination for per-tick frames. An error ends the run.
pub trait RenderSink {
    fn present(&mut self, frame: &Frame) -> Result<(), RenderError>;
}

/// Keeps every presented frame in memory
#[derive(Debug, Clone, Default)]
pub struct FrameRecorder {
    pub frames: Vec<Frame>,
}

impl RenderSink for FrameRecorder {
    fn present(&mut self, frame: &Frame) -> Result<(), RenderError> {
        self.frames.push(frame.clone());
        Ok(())
    }
}
