use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use log::info;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes `buffer` as a binary (`P6`) PPM image.
pub fn encode_ppm<W: Write>(buffer: &PixelBuffer, mut out: W) -> io::Result<()> {
    let viewport = buffer.viewport();

    // magic, dimensions, max channel value
    writeln!(out, "P6")?;
    writeln!(out, "{} {}", viewport.width(), viewport.height())?;
    writeln!(out, "255")?;
    out.write_all(buffer.buffer())?;
    out.flush()
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PpmFilePresenter;

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> io::Result<()> {
        if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let file = File::create(filepath)?;
        encode_ppm(buffer, BufWriter::new(file))?;

        info!("wrote {}", filepath.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;
    use crate::core::data::viewport::Viewport;

    #[test]
    fn test_header_and_payload() {
        let mut buffer = PixelBuffer::new(Viewport::new(2, 1));
        buffer
            .set_pixel(Point { x: 1, y: 0 }, Colour { r: 1, g: 2, b: 3 })
            .unwrap();
        let mut out = Vec::new();

        encode_ppm(&buffer, &mut out).unwrap();

        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[0, 0, 0, 1, 2, 3]);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_present_creates_missing_directories() {
        let root = std::env::temp_dir().join(format!("mandelbrot_ppm_{}", std::process::id()));
        let path = root.join("nested").join("frame.ppm");
        let buffer = PixelBuffer::new(Viewport::new(3, 2));

        PpmFilePresenter::new().present(&buffer, &path).unwrap();

        let written = fs::read(&path).unwrap();
        assert!(written.starts_with(b"P6\n3 2\n255\n"));
        assert_eq!(written.len(), "P6\n3 2\n255\n".len() + 3 * 2 * 3);

        fs::remove_dir_all(root).unwrap();
    }
}
