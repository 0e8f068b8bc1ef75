use clap::{ArgAction, Args, Parser};
use crate::core::actions::render_frame::RenderMode;
use crate::core::data::anti_aliasing::{AntiAliasing, AntiAliasingError};
use crate::core::data::complex::Complex;
use crate::core::data::view_state::{
    DEFAULT_MAX_ITERATIONS, DEFAULT_ZOOM, MAX_ITERATIONS, MIN_ITERATIONS, ViewState, ViewStateError,
};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::colour_map::OvershootPolicy;
use crate::core::fractals::mandelbrot::explorer_config::ExplorerConfig;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error(transparent)]
    View(#[from] ViewStateError),
    #[error(transparent)]
    AntiAliasing(#[from] AntiAliasingError),
    #[error("palette index {index} is out of range, {len} entries available")]
    PaletteIndex { index: usize, len: usize },
    #[error("image size {width}x{height} must be non-zero")]
    EmptyImage { width: u32, height: u32 },
}

/// Settings shared by the still renderer and the window.
#[derive(Debug, Clone, PartialEq, Args)]
pub struct ViewOptions {
    /// Image width in pixels
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Base iteration budget before adaptive scaling
    #[arg(
        long = "max-iters",
        default_value_t = DEFAULT_MAX_ITERATIONS,
        value_parser = clap::value_parser!(i32).range(i64::from(MIN_ITERATIONS)..=i64::from(MAX_ITERATIONS))
    )]
    pub max_iterations: i32,

    /// Clamp the escape fraction to [0, 1] before blending colours
    #[arg(long)]
    pub clamp_overshoot: bool,

    /// Anti-aliasing level; renders an n x n sample grid per pixel, n = ceil(sqrt(level))
    #[arg(
        long = "aa",
        default_value_t = 0,
        value_parser = clap::value_parser!(u8).range(0..=i64::from(AntiAliasing::MAX_LEVEL))
    )]
    pub anti_aliasing: u8,
}

impl ViewOptions {
    pub fn viewport(&self) -> Result<Viewport, OptionsError> {
        let viewport = Viewport::new(self.width, self.height);

        if viewport.is_degenerate() {
            return Err(OptionsError::EmptyImage {
                width: self.width,
                height: self.height,
            });
        }

        Ok(viewport)
    }

    pub fn explorer_config(&self) -> Result<ExplorerConfig, OptionsError> {
        let overshoot = if self.clamp_overshoot {
            OvershootPolicy::Clamp
        } else {
            OvershootPolicy::Preserve
        };

        Ok(ExplorerConfig {
            overshoot,
            anti_aliasing: AntiAliasing::new(self.anti_aliasing)?,
            ..ExplorerConfig::default()
        })
    }
}

/// Render one Mandelbrot frame to a binary PPM file.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "mandelbrot_explorer", version)]
pub struct StillRenderOptions {
    #[command(flatten)]
    pub view: ViewOptions,

    /// Half-height of the visible region in complex units
    #[arg(long, default_value_t = DEFAULT_ZOOM)]
    pub zoom: f64,

    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub center_re: f64,

    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub center_im: f64,

    /// Foreground palette index
    #[arg(long, default_value_t = 0)]
    pub foreground: usize,

    /// Background palette index
    #[arg(long, default_value_t = 0)]
    pub background: usize,

    /// Use the base iteration budget at every zoom level
    #[arg(long)]
    pub no_adaptive: bool,

    /// Render on the calling thread instead of the rayon pool
    #[arg(long)]
    pub serial: bool,

    #[arg(long, short, default_value = "output/mandelbrot.ppm")]
    pub output: PathBuf,
}

impl StillRenderOptions {
    pub fn explorer_config(&self) -> Result<ExplorerConfig, OptionsError> {
        let render_mode = if self.serial {
            RenderMode::Serial
        } else {
            RenderMode::Parallel
        };

        Ok(ExplorerConfig {
            render_mode,
            ..self.view.explorer_config()?
        })
    }

    /// The starting view; unlike interactive cycling, out-of-range indices are rejected.
    pub fn view_state(&self, config: &ExplorerConfig) -> Result<ViewState, OptionsError> {
        let len = config.palettes.len();
        for index in [self.foreground, self.background] {
            if index >= len {
                return Err(OptionsError::PaletteIndex { index, len });
            }
        }

        let mut view = ViewState::new(
            self.zoom,
            Complex::new(self.center_re, self.center_im),
            self.view.max_iterations,
        )?;
        view.select_colours(self.foreground, self.background, len);
        view.set_adaptive_enabled(!self.no_adaptive);

        Ok(view)
    }
}

/// Open an interactive Mandelbrot window.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "gui", version)]
pub struct GuiOptions {
    #[command(flatten)]
    pub view: ViewOptions,

    /// Synchronise presentation with the display refresh rate
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub vsync: bool,
}

impl GuiOptions {
    pub fn view_state(&self) -> ViewState {
        let mut view = ViewState::default();
        view.set_max_iterations(self.view.max_iterations);
        view
    }
}
