//! Windowed explorer: winit for the event loop, pixels for the framebuffer
//! and egui for the status overlay.

pub mod app;
pub mod commands;
pub mod events;
