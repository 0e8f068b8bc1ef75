use crate::core::data::view_state::ViewStateError;
use crate::core::data::viewport::ViewportError;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum InteractionError {
    #[error(transparent)]
    Viewport(#[from] ViewportError),
    #[error(transparent)]
    View(#[from] ViewStateError),
}
