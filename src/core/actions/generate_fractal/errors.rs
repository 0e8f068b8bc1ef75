use crate::core::actions::cancellation::Cancelled;
use std::error::Error;
use thiserror::Error;

/// Failure of a cancel-aware generator.
///
/// Cancellation is expected control flow and callers should not surface it
/// as an error to the user.
#[derive(Debug, Error)]
pub enum GenerateFractalError<E: Error + 'static> {
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error("algorithm error: {0}")]
    Algorithm(#[source] E),
}
