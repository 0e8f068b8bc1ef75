use crate::controllers::interactive::InteractiveController;
use crate::core::data::viewport::Viewport;
use crate::core::interaction::InputEvent;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::state::GuiAppState;
use crate::input::gui::app::view_input::{GuiCommand, ViewInput};
use crate::input::gui::events::GuiEvent;
use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{debug, error};
use std::sync::Arc;
use std::time::Instant;
use winit::error::EventLoopError;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::Window;

pub struct GuiApp<T: GuiPresenterPort> {
    window: &'static Window,
    width: u32,
    height: u32,
    presenter: T,
    controller: InteractiveController,
    state: GuiAppState,
    input: ViewInput,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: T,
        controller: InteractiveController,
        state: GuiAppState,
    ) -> Self {
        let size = window.inner_size();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None,
        );

        Self {
            window,
            width: size.width,
            height: size.height,
            presenter,
            controller,
            state,
            input: ViewInput::default(),
            egui_ctx,
            egui_state,
        }
    }

    fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    /// Runs until the window closes or Esc is pressed.
    pub fn run(mut self, event_loop: EventLoop<GuiEvent>) -> Result<(), EventLoopError> {
        let mut redraw_pending = true;

        event_loop.run(move |event, elwt| match event {
            Event::UserEvent(GuiEvent::Wake) => {
                redraw_pending = true;
            }
            Event::WindowEvent { ref event, window_id } if window_id == self.window.id() => {
                let response = self.egui_state.on_window_event(self.window, event);
                if response.repaint {
                    redraw_pending = true;
                }

                match event {
                    WindowEvent::CloseRequested => {
                        self.controller.shutdown();
                        elwt.exit();
                    }
                    WindowEvent::RedrawRequested => {
                        redraw_pending = false;
                        self.state.clock.tick(Instant::now());

                        let egui_output = self.update_ui();
                        self.submit_render_request_if_needed();

                        self.egui_state
                            .handle_platform_output(self.window, egui_output.platform_output.clone());

                        if egui_output
                            .viewport_output
                            .values()
                            .any(|v| v.repaint_delay.is_zero())
                        {
                            redraw_pending = true;
                        }

                        if let Err(err) = self.presenter.render(egui_output, &self.egui_ctx) {
                            error!("presenting frame failed: {err}");
                            self.controller.shutdown();
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        self.resize(size.width, size.height);
                        redraw_pending = true;
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = self.window.inner_size();
                        self.resize(size.width, size.height);
                        redraw_pending = true;
                    }
                    _ => match self.input.translate(event) {
                        Some(GuiCommand::Quit) => {
                            self.controller.shutdown();
                            elwt.exit();
                        }
                        Some(GuiCommand::Input(input)) => {
                            if self.handle_input(input, response.consumed) {
                                redraw_pending = true;
                            }
                        }
                        None => {}
                    },
                }
            }
            Event::AboutToWait => {
                if redraw_pending {
                    self.window.request_redraw();
                }
            }
            _ => {}
        })
    }

    /// Returns whether the view changed.
    fn handle_input(&mut self, input: InputEvent, egui_consumed: bool) -> bool {
        // a drag in progress always sees its moves and release
        let releases_drag = matches!(input, InputEvent::Release { .. } | InputEvent::Move { .. });
        if egui_consumed && !releases_drag {
            return false;
        }

        match self.state.apply(input, self.viewport()) {
            Ok(report) => report.view_changed,
            Err(_) => false,
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return;
        }

        if let Err(err) = self.presenter.resize(width, height) {
            error!("resizing surface to {width}x{height} failed: {err}");
        }
    }

    fn submit_render_request_if_needed(&mut self) {
        let request = match self.state.build_render_request(self.viewport()) {
            Ok(request) => request,
            Err(err) => {
                debug!("skipping frame: {err}");
                return;
            }
        };

        if self.state.should_submit(&request) {
            let request = Arc::new(request);
            let generation = self.controller.submit_request(Arc::clone(&request));
            self.state.record_submission(request, generation);
        }
    }

    fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let viewport = self.viewport();
        let state = &self.state;
        let presenter = &self.presenter;

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Mandelbrot Explorer")
                .default_pos([10.0, 10.0])
                .resizable(false)
                .show(ctx, |ui| {
                    match state.clock.fps() {
                        Some(fps) => ui.label(format!("FPS: {fps:.1}")),
                        None => ui.label("FPS: -"),
                    };

                    let center = state.view.center();
                    ui.label(format!("Zoom: {:.6e}", state.view.zoom()));
                    ui.label(format!("Centre: {:.12} {:+.12}i", center.real, center.imag));

                    match state.frame_params(viewport) {
                        Ok(params) => ui.label(format!(
                            "Iterations: {} (base {}, adaptive {})",
                            params.effective_max_iterations,
                            state.view.max_iterations(),
                            if params.adaptive_enabled { "on" } else { "off" }
                        )),
                        Err(err) => ui.label(format!("Iterations: - ({err})")),
                    };

                    if let Some(duration) = presenter.last_render_duration() {
                        ui.label(format!("Last render: {:.1} ms", duration.as_secs_f64() * 1000.0));
                    }

                    ui.label(format!(
                        "Palette: fg {} / bg {}",
                        state.view.foreground_index(),
                        state.view.background_index()
                    ));

                    if let Some(message) = presenter.last_error_message() {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                });
        })
    }
}
