use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use crate::core::data::viewport::Viewport;
use std::error::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratePixelBufferError<E: Error + 'static> {
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error("colour map error: {0}")]
    ColourMap(#[source] E),
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[source] PixelBufferError),
}

/// Colours `input` (row-major, one value per pixel) into a buffer for `viewport`.
///
/// For cancel-aware generation, use [`generate_pixel_buffer_cancelable`].
pub fn generate_pixel_buffer<T, CMap>(
    input: Vec<T>,
    mapper: &CMap,
    viewport: Viewport,
) -> Result<PixelBuffer, GeneratePixelBufferError<CMap::Failure>>
where
    CMap: ColourMap<T>,
{
    generate_pixel_buffer_cancelable(input, mapper, viewport, &NeverCancel)
}

/// Streams RGB bytes into a preallocated buffer, checking `cancel` every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels.
pub fn generate_pixel_buffer_cancelable<T, CMap, C>(
    input: Vec<T>,
    mapper: &CMap,
    viewport: Viewport,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferError<CMap::Failure>>
where
    CMap: ColourMap<T>,
    C: CancelToken,
{
    let mut buffer: PixelBufferData = Vec::with_capacity(input.len() * 3);

    for (i, value) in input.into_iter().enumerate() {
        if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(GeneratePixelBufferError::Cancelled(Cancelled));
        }

        let Colour { r, g, b } = mapper
            .map(value)
            .map_err(GeneratePixelBufferError::ColourMap)?;

        buffer.extend_from_slice(&[r, g, b]);
    }

    PixelBuffer::from_data(viewport, buffer).map_err(GeneratePixelBufferError::PixelBuffer)
}
