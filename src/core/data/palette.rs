use crate::core::data::colour::RgbColour;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum PaletteError {
    #[error("palette must contain at least one colour")]
    Empty,
    #[error("foreground palette has {foreground} entries but background has {background}")]
    LengthMismatch { foreground: usize, background: usize },
    #[error("palette entry {index} has channel value {value} outside [0, 1]")]
    ChannelOutOfRange { index: usize, value: f64 },
}

/// Direction of a discrete cycling or stepping command.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Step {
    Forward,
    Backward,
}

/// The foreground/background colour pair a view can select from.
///
/// Both lists always have the same, non-zero length, so one index range is
/// valid for either.
#[derive(Debug, Clone, PartialEq)]
pub struct Palettes {
    foreground: Vec<RgbColour>,
    background: Vec<RgbColour>,
}

impl Palettes {
    pub fn new(
        foreground: Vec<RgbColour>,
        background: Vec<RgbColour>,
    ) -> Result<Self, PaletteError> {
        if foreground.is_empty() || background.is_empty() {
            return Err(PaletteError::Empty);
        }

        if foreground.len() != background.len() {
            return Err(PaletteError::LengthMismatch {
                foreground: foreground.len(),
                background: background.len(),
            });
        }

        for (index, colour) in foreground.iter().chain(background.iter()).enumerate() {
            for value in colour.channels() {
                if !(0.0..=1.0).contains(&value) {
                    return Err(PaletteError::ChannelOutOfRange {
                        index: index % foreground.len(),
                        value,
                    });
                }
            }
        }

        Ok(Self {
            foreground,
            background,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.foreground.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Foreground entry at `index`, wrapping out-of-range indices.
    #[must_use]
    pub fn foreground(&self, index: usize) -> RgbColour {
        self.foreground[index % self.len()]
    }

    /// Background entry at `index`, wrapping out-of-range indices.
    #[must_use]
    pub fn background(&self, index: usize) -> RgbColour {
        self.background[index % self.len()]
    }
}

impl Default for Palettes {
    fn default() -> Self {
        Self {
            foreground: vec![
                RgbColour::new(1.0, 1.0, 1.0),
                RgbColour::new(1.0, 0.0, 0.0),
                RgbColour::new(0.0, 1.0, 0.0),
                RgbColour::new(0.0, 0.0, 1.0),
                RgbColour::new(1.0, 1.0, 0.0),
                RgbColour::new(1.0, 0.0, 1.0),
                RgbColour::new(0.0, 1.0, 1.0),
            ],
            background: vec![
                RgbColour::new(0.0, 0.0, 0.0),
                RgbColour::new(0.5, 0.0, 0.0),
                RgbColour::new(0.0, 0.5, 0.0),
                RgbColour::new(0.0, 0.0, 0.5),
                RgbColour::new(0.5, 0.5, 0.0),
                RgbColour::new(0.5, 0.0, 0.5),
                RgbColour::new(0.0, 0.5, 0.5),
            ],
        }
    }
}

/// Moves `index` one step in `step`'s direction, wrapping within `[0, len)`.
#[must_use]
pub fn cycle_index(index: usize, len: usize, step: Step) -> usize {
    if len == 0 {
        return 0;
    }

    let index = index % len;
    match step {
        Step::Forward => (index + 1) % len,
        Step::Backward => (index + len - 1) % len,
    }
}
