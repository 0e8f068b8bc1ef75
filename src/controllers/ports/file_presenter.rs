use crate::core::data::pixel_buffer::PixelBuffer;
use std::io;
use std::path::Path;

/// Persists a finished frame.
pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> io::Result<()>;
}
