//! Interactive Mandelbrot explorer: a pure view model (zoom, centre, iteration
//! budget, palette choice), the escape-time pipeline that renders it, and the
//! still-image and windowed front ends built on top.

pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
pub mod presenters;

pub use crate::controllers::cli::options::{GuiOptions, StillRenderOptions};
pub use crate::controllers::cli::still::StillRenderController;
pub use crate::core::actions::render_frame::{FrameRequest, RenderMode, render_frame};
pub use crate::core::data::frame_params::FrameParams;
pub use crate::core::data::view_state::ViewState;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::fractals::mandelbrot::ExplorerConfig;
pub use crate::core::interaction::{InputEvent, InteractionController};
pub use crate::presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;
