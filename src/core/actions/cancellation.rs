use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use thiserror::Error;

/// Generators poll the token at each row start and every this many pixels.
pub const CANCEL_CHECK_INTERVAL_PIXELS: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("operation cancelled")]
pub struct Cancelled;

pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

/// Cancels a frame once a newer generation is submitted or shutdown is requested.
#[derive(Debug, Clone, Copy)]
pub struct GenerationToken<'a> {
    generation: u64,
    latest: &'a AtomicU64,
    shutdown: &'a AtomicBool,
}

impl<'a> GenerationToken<'a> {
    #[must_use]
    pub fn new(generation: u64, latest: &'a AtomicU64, shutdown: &'a AtomicBool) -> Self {
        Self {
            generation,
            latest,
            shutdown,
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl CancelToken for GenerationToken<'_> {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.shutdown.load(Ordering::Relaxed) || self.latest.load(Ordering::Relaxed) != self.generation
    }
}
