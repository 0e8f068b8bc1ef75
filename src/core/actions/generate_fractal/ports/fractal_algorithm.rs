use crate::core::data::point::Point;
use std::error::Error;

/// Per-pixel computation run by the fractal generators.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error + 'static;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
