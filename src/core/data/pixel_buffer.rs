use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use thiserror::Error;

const BYTES_PER_PIXEL: usize = 3;

fn viewport_to_buffer_size(viewport: Viewport) -> usize {
    viewport.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error(
        "pixel at x:{}, y:{} outside of {}x{} viewport",
        .pixel.x, .pixel.y, .viewport.width(), .viewport.height()
    )]
    PixelOutsideBounds { pixel: Point, viewport: Viewport },
    #[error("viewport needs {viewport_size} bytes but buffer has {buffer_size}")]
    BoundsMismatch {
        viewport_size: usize,
        buffer_size: usize,
    },
}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGB8 framebuffer covering a whole viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    viewport: Viewport,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            buffer: vec![0; viewport_to_buffer_size(viewport)],
        }
    }

    pub fn from_data(viewport: Viewport, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let viewport_size = viewport_to_buffer_size(viewport);

        if viewport_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                viewport_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { viewport, buffer })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if !self.viewport.contains_pixel(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                viewport: self.viewport,
            });
        }

        let row = pixel.y as usize * self.viewport.width() as usize;
        Ok((row + pixel.x as usize) * BYTES_PER_PIXEL)
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(pixel)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    /// Box-filters each `factor x factor` block into one pixel, rounding to
    /// nearest. Trailing rows and columns that do not fill a block are dropped.
    #[must_use]
    pub fn downsample(self, factor: u32) -> Self {
        if factor <= 1 {
            return self;
        }

        let out = Viewport::new(self.viewport.width() / factor, self.viewport.height() / factor);
        let src_row_bytes = self.viewport.width() as usize * BYTES_PER_PIXEL;
        let block = factor as usize;
        let samples = (block * block) as u32;
        let mut buffer = Vec::with_capacity(viewport_to_buffer_size(out));

        for y in 0..out.height() as usize {
            for x in 0..out.width() as usize {
                let mut sum = [0u32; BYTES_PER_PIXEL];

                for sy in y * block..(y + 1) * block {
                    let row = sy * src_row_bytes;
                    for sx in x * block..(x + 1) * block {
                        let index = row + sx * BYTES_PER_PIXEL;
                        for (channel, total) in sum.iter_mut().enumerate() {
                            *total += u32::from(self.buffer[index + channel]);
                        }
                    }
                }

                // sum / samples <= 255, so the narrowing is lossless
                buffer.extend(sum.map(|total| ((total + samples / 2) / samples) as u8));
            }
        }

        Self {
            viewport: out,
            buffer,
        }
    }

    /// Copies the frame into an RGBA8 surface of the same size, alpha opaque.
    pub fn copy_into_rgba(&self, dest: &mut [u8]) -> Result<(), PixelBufferError> {
        let expected = self.viewport.pixel_count() * 4;

        if dest.len() != expected {
            return Err(PixelBufferError::BoundsMismatch {
                viewport_size: expected,
                buffer_size: dest.len(),
            });
        }

        for (src_pixel, dst_pixel) in self
            .buffer
            .chunks_exact(BYTES_PER_PIXEL)
            .zip(dest.chunks_exact_mut(4))
        {
            dst_pixel[..3].copy_from_slice(src_pixel);
            dst_pixel[3] = 255;
        }

        Ok(())
    }
}
