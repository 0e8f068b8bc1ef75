//! Input adapters that turn platform events into view interactions.

#[cfg(feature = "gui")]
pub mod gui;
