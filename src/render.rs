//! Renderer
//!
//! Receives already-resolved frames from the navigator and draws them. The
//! navigator never depends on how a frame is displayed.

mod terminal;

pub use terminal::{format_frame, TerminalRenderer};

use crate::error::CatalogError;
use crate::navigator::RenderFrame;

/// Presentation collaborator
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> Result<(), CatalogError>;
}

/// Keeps every frame it receives; useful where output is inspected later.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub frames: Vec<RenderFrame>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, frame: &RenderFrame) -> Result<(), CatalogError> {
        self.frames.push(frame.clone());
        Ok(())
    }
}
