use crate::controllers::cli::options::{GuiOptions, OptionsError};
use crate::controllers::interactive::InteractiveController;
use crate::core::interaction::limits::InteractionLimitsError;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::state::GuiAppState;
use crate::input::gui::app::view_input::CONTROLS_HELP;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::events::GuiEvent;
use log::info;
use std::marker::PhantomData;
use thiserror::Error;
use winit::dpi::PhysicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event_loop::EventLoopBuilder;
use winit::window::{Window, WindowBuilder};

#[derive(Debug, Error)]
pub enum RunGuiError {
    #[error(transparent)]
    Options(#[from] OptionsError),
    #[error("invalid interaction limits: {0}")]
    Limits(#[from] InteractionLimitsError),
    #[error("event loop failed: {0}")]
    EventLoop(#[from] EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] OsError),
    #[error("failed to create drawing surface: {0}")]
    Surface(#[from] pixels::Error),
}

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    options: GuiOptions,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, options: GuiOptions) -> Self {
        Self {
            presenter_factory,
            options,
            _phantom: PhantomData,
        }
    }

    pub fn execute(&self) -> Result<(), RunGuiError> {
        let viewport = self.options.view.viewport()?;
        let state = GuiAppState::new(self.options.view.explorer_config()?, self.options.view_state())?;

        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
        let event_loop_proxy = event_loop.create_proxy();

        // pixels borrows the window for the surface's lifetime
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Mandelbrot Explorer")
                .with_inner_size(PhysicalSize::new(viewport.width(), viewport.height()))
                .with_min_inner_size(PhysicalSize::new(200, 200))
                .build(&event_loop)?,
        ));

        let presenter = self
            .presenter_factory
            .build(window, event_loop_proxy, self.options.vsync)?;
        let controller = InteractiveController::new(presenter.share_adapter());

        info!(
            "opened {}x{} window, vsync {}, anti-aliasing {}",
            viewport.width(),
            viewport.height(),
            self.options.vsync,
            self.options.view.anti_aliasing
        );
        info!("controls: {CONTROLS_HELP}");

        GuiApp::new(window, &event_loop, presenter, controller, state).run(event_loop)?;

        Ok(())
    }
}
