//! Pointer, wheel and keyboard-command handling over a [`ViewState`].
//!
//! [`ViewState`]: crate::core::data::view_state::ViewState

pub mod controller;
pub mod errors;
pub mod input_event;
pub mod limits;
pub mod navigation;

pub use controller::{DragState, InteractionController, InteractionReport};
pub use errors::InteractionError;
pub use input_event::{InputEvent, PointerButton};
pub use limits::InteractionLimits;
