use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_fractal::errors::GenerateFractalError;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use rayon::prelude::*;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// For cancel-aware generation, use [`generate_fractal_parallel_rayon_cancelable`].
pub fn generate_fractal_parallel_rayon<Alg>(
    viewport: Viewport,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    generate_fractal_parallel_rayon_cancelable(viewport, algorithm, &NeverCancel).map_err(|e| {
        match e {
            GenerateFractalError::Algorithm(err) => err,
            GenerateFractalError::Cancelled(_) => {
                unreachable!("NeverCancel token should never signal cancellation")
            }
        }
    })
}

/// Generates fractal data in parallel with cancellation support.
///
/// Rows are processed in parallel; each checks the token at its start and
/// every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels. Results come back in the
/// same row-major order as [`generate_fractal_serial`].
///
/// [`generate_fractal_serial`]: super::generate_fractal_serial::generate_fractal_serial
pub fn generate_fractal_parallel_rayon_cancelable<Alg, C>(
    viewport: Viewport,
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
    C: CancelToken,
{
    let width = viewport.width() as i32;
    let height = viewport.height() as i32;

    let rows: Result<Vec<Vec<Alg::Success>>, GenerateFractalError<Alg::Failure>> = (0..height)
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(width as usize);

            for (i, x) in (0..width).enumerate() {
                if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                    return Err(GenerateFractalError::Cancelled(Cancelled));
                }

                let result = algorithm
                    .compute(Point { x, y })
                    .map_err(GenerateFractalError::Algorithm)?;
                row.push(result);
            }

            Ok(row)
        })
        .collect();

    rows.map(|r| r.into_iter().flatten().collect())
}
