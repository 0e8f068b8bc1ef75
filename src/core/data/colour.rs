/// An 8-bit display colour, as stored in a [`PixelBuffer`](super::pixel_buffer::PixelBuffer).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
}

/// A linear colour with channels nominally in `[0, 1]`.
///
/// Channels may leave that range after interpolation; they are only clamped
/// when quantised into a [`Colour`].
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct RgbColour {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl RgbColour {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub fn channels(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// `self + t * (other - self)`, per channel and without clamping.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            r: self.r + t * (other.r - self.r),
            g: self.g + t * (other.g - self.g),
            b: self.b + t * (other.b - self.b),
        }
    }

    #[must_use]
    pub fn to_f32(self) -> [f32; 3] {
        [self.r as f32, self.g as f32, self.b as f32]
    }
}

fn quantise_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }

    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl From<RgbColour> for Colour {
    fn from(colour: RgbColour) -> Self {
        Self {
            r: quantise_channel(colour.r),
            g: quantise_channel(colour.g),
            b: quantise_channel(colour.b),
        }
    }
}
