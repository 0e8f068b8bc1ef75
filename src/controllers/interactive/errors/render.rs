use thiserror::Error;

/// A frame that could not be rendered. Cancelled frames never produce one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("render {generation} failed: {message}")]
pub struct RenderError {
    pub generation: u64,
    pub message: String,
}
