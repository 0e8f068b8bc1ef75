use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_fractal::errors::GenerateFractalError;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// Evaluates every pixel of `viewport` on the calling thread, row-major.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(
    viewport: Viewport,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    generate_fractal_serial_cancelable(viewport, algorithm, &NeverCancel).map_err(|e| match e {
        GenerateFractalError::Algorithm(err) => err,
        GenerateFractalError::Cancelled(_) => {
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

/// Like [`generate_fractal_serial`], polling `cancel` at the same points as
/// the parallel generator.
pub fn generate_fractal_serial_cancelable<Alg, C>(
    viewport: Viewport,
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm,
    C: CancelToken,
{
    let width = viewport.width() as i32;
    let height = viewport.height() as i32;
    let mut results = Vec::with_capacity(viewport.pixel_count());

    for y in 0..height {
        for (i, x) in (0..width).enumerate() {
            if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                return Err(GenerateFractalError::Cancelled(Cancelled));
            }

            let result = algorithm
                .compute(Point { x, y })
                .map_err(GenerateFractalError::Algorithm)?;
            results.push(result);
        }
    }

    Ok(results)
}
