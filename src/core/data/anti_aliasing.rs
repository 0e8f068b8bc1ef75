use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum AntiAliasingError {
    #[error("anti-aliasing level must be between 0 and {max}, got {level}", max = AntiAliasing::MAX_LEVEL)]
    LevelOutOfRange { level: u8 },
}

/// Requested anti-aliasing level, rendered as an `n x n` supersample grid.
///
/// `n` is the smallest square holding `level` samples, so 0 and 1 take a
/// single sample at the pixel's top-left corner, 2..=4 a 2x2 grid and
/// 10..=16 a 4x4 grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct AntiAliasing {
    level: u8,
}

impl AntiAliasing {
    pub const MAX_LEVEL: u8 = 16;
    pub const OFF: Self = Self { level: 0 };

    pub fn new(level: u8) -> Result<Self, AntiAliasingError> {
        if level > Self::MAX_LEVEL {
            return Err(AntiAliasingError::LevelOutOfRange { level });
        }

        Ok(Self { level })
    }

    #[must_use]
    pub fn level(&self) -> u8 {
        self.level
    }

    #[must_use]
    pub fn samples_per_axis(&self) -> u32 {
        let mut side = 1;
        while side * side < u32::from(self.level) {
            side += 1;
        }
        side
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.samples_per_axis() > 1
    }
}
