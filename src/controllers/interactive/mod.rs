//! Background rendering for the interactive explorer.
//!
//! The GUI submits immutable [`FrameRequest`] snapshots; a worker thread
//! renders the newest one and hands the result to a presenter port. A newer
//! submission cancels the frame in flight.
//!
//! [`FrameRequest`]: crate::core::actions::render_frame::FrameRequest

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::InteractiveController;
