use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::data::viewport::Viewport;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::adapter::PixelsAdapter;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use log::{debug, warn};
use pixels::{Pixels, PixelsBuilder, SurfaceTexture, wgpu};
use std::sync::Arc;
use std::time::Duration;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

/// Shows worker frames through a `pixels` surface with egui drawn on top.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    adapter: Arc<PixelsAdapter>,
    viewport: Viewport,
    last_presented_generation: u64,
    last_error_message: Option<String>,
    last_render_duration: Option<Duration>,
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        vsync: bool,
    ) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let pixels = PixelsBuilder::new(size.width, size.height, surface_texture)
            .enable_vsync(vsync)
            .build()?;

        let egui_renderer = EguiRenderer::new(pixels.device(), pixels.render_texture_format(), None, 1);

        let mut presenter = Self {
            pixels,
            egui_renderer,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            viewport: Viewport::new(size.width, size.height),
            last_presented_generation: 0,
            last_error_message: None,
            last_render_duration: None,
        };
        presenter.clear();

        Ok(presenter)
    }

    fn clear(&mut self) {
        for pixel in self.pixels.frame_mut().chunks_exact_mut(4) {
            pixel.copy_from_slice(&[0, 0, 0, 255]);
        }
    }

    fn poll_render_event(&mut self) {
        let Some(event) = self.adapter.take_render_event() else {
            return;
        };

        match event {
            RenderEvent::Frame(frame) => {
                if frame.generation > self.last_presented_generation
                    && frame.viewport() == self.viewport
                {
                    self.draw_frame(&frame);
                } else {
                    debug!("ignoring frame {} for a different surface", frame.generation);
                }
            }
            RenderEvent::Error(error) => {
                if error.generation >= self.last_presented_generation {
                    self.last_error_message = Some(error.message);
                }
            }
        }
    }

    fn draw_frame(&mut self, frame: &FrameData) {
        match frame.pixel_buffer.copy_into_rgba(self.pixels.frame_mut()) {
            Ok(()) => {
                self.last_presented_generation = frame.generation;
                self.last_render_duration = Some(frame.render_duration);
                self.last_error_message = None;
            }
            Err(err) => warn!("frame {} not drawn: {err}", frame.generation),
        }
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error> {
        if self.viewport.is_degenerate() {
            return Ok(());
        }

        self.poll_render_event();

        let egui_renderer = &mut self.egui_renderer;
        let size_in_pixels = [self.viewport.width(), self.viewport.height()];

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let pixels_per_point = egui_ctx.pixels_per_point();
            let clipped_primitives = egui_ctx.tessellate(egui_output.shapes, pixels_per_point);
            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels,
                pixels_per_point,
            };
            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
            }

            egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            // keep the fractal underneath
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)?;

        self.viewport = Viewport::new(width, height);
        self.clear();

        Ok(())
    }

    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn InteractiveControllerPresenterPort>
    }

    fn last_render_duration(&self) -> Option<Duration> {
        self.last_render_duration
    }

    fn last_error_message(&self) -> Option<&str> {
        self.last_error_message.as_deref()
    }
}
