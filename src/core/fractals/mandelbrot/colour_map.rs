use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::{Colour, RgbColour};
use crate::core::data::palette::Palettes;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::mandelbrot::escape_result::EscapeResult;
use std::convert::Infallible;

/// What to do with escape fractions above `1.0`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OvershootPolicy {
    /// Extrapolate past the foreground; quantisation clamps the channels.
    #[default]
    Preserve,
    /// Clamp the fraction to `[0, 1]` before interpolating.
    Clamp,
}

/// `Bounded` is black, `Escaped(t)` blends from `background` towards
/// `foreground`. The result is not clamped.
#[must_use]
pub fn map_escape(result: EscapeResult, foreground: RgbColour, background: RgbColour) -> RgbColour {
    match result {
        EscapeResult::Bounded => RgbColour::BLACK,
        EscapeResult::Escaped(t) => background.lerp(foreground, t),
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TwoToneColourMap {
    foreground: RgbColour,
    background: RgbColour,
    overshoot: OvershootPolicy,
}

impl TwoToneColourMap {
    #[must_use]
    pub fn new(foreground: RgbColour, background: RgbColour, overshoot: OvershootPolicy) -> Self {
        Self {
            foreground,
            background,
            overshoot,
        }
    }

    /// Picks the pair selected by `view`'s palette indices.
    #[must_use]
    pub fn for_view(view: &ViewState, palettes: &Palettes, overshoot: OvershootPolicy) -> Self {
        Self::new(
            palettes.foreground(view.foreground_index()),
            palettes.background(view.background_index()),
            overshoot,
        )
    }

    #[must_use]
    pub fn foreground(&self) -> RgbColour {
        self.foreground
    }

    #[must_use]
    pub fn background(&self) -> RgbColour {
        self.background
    }

    #[must_use]
    pub fn overshoot(&self) -> OvershootPolicy {
        self.overshoot
    }

    #[must_use]
    pub fn shade(&self, result: EscapeResult) -> RgbColour {
        let result = match (self.overshoot, result) {
            (OvershootPolicy::Clamp, EscapeResult::Escaped(t)) => {
                EscapeResult::Escaped(t.clamp(0.0, 1.0))
            }
            (_, result) => result,
        };

        map_escape(result, self.foreground, self.background)
    }
}

impl ColourMap<EscapeResult> for TwoToneColourMap {
    type Failure = Infallible;

    fn map(&self, value: EscapeResult) -> Result<Colour, Self::Failure> {
        Ok(Colour::from(self.shade(value)))
    }

    fn display_name(&self) -> &str {
        match self.overshoot {
            OvershootPolicy::Preserve => "Two-tone",
            OvershootPolicy::Clamp => "Two-tone (clamped)",
        }
    }
}
