use crate::core::data::point::{Point, ScreenPoint};
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ViewportError {
    #[error("viewport {width}x{height} has a zero dimension")]
    DivisionByZero { width: u32, height: u32 },
}

/// Size of the render surface in device pixels.
///
/// Owned by the windowing layer and updated on resize. A zero-sized viewport
/// is representable (minimised window) but cannot be rendered.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn aspect_ratio(&self) -> Result<f64, ViewportError> {
        if self.height == 0 {
            return Err(ViewportError::DivisionByZero {
                width: self.width,
                height: self.height,
            });
        }

        Ok(f64::from(self.width) / f64::from(self.height))
    }

    #[must_use]
    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    #[must_use]
    pub fn contains(&self, position: ScreenPoint) -> bool {
        position.x >= 0.0
            && position.y >= 0.0
            && position.x < f64::from(self.width)
            && position.y < f64::from(self.height)
    }

    #[must_use]
    pub fn contains_pixel(&self, pixel: Point) -> bool {
        self.contains(ScreenPoint::from(pixel))
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Both dimensions multiplied by `factor`, `None` on overflow.
    #[must_use]
    pub fn scaled(&self, factor: u32) -> Option<Self> {
        Some(Self {
            width: self.width.checked_mul(factor)?,
            height: self.height.checked_mul(factor)?,
        })
    }
}
