//! Property-based invariants for the view model and its screen mapping.
//!
//! 1. Mapped pixels are finite for every positive zoom.
//! 2. The mapping is injective for a fixed view.
//! 3. Zooming keeps the complex point under the cursor on the same pixel.
//! 4. Dragging moves the grabbed point with the pointer horizontally and
//!    mirrors it vertically.
//! 5. The adaptive budget never grows with zoom and respects its ceiling.
//! 6. Reset is idempotent.
//! 7. Cycling a palette index through every entry returns to the start.

use mandelbrot_explorer::core::data::complex::Complex;
use mandelbrot_explorer::core::data::palette::{Palettes, Step};
use mandelbrot_explorer::core::data::point::ScreenPoint;
use mandelbrot_explorer::core::data::view_state::{MAX_ITERATIONS, MIN_ITERATIONS, ViewState};
use mandelbrot_explorer::core::data::viewport::Viewport;
use mandelbrot_explorer::core::fractals::mandelbrot::adaptive_iterations::{
    AdaptiveIterationPolicy, DEFAULT_ITERATION_CEILING,
};
use mandelbrot_explorer::core::interaction::navigation::{pan_by_pixels, zoom_to_cursor};
use mandelbrot_explorer::core::util::pixel_to_complex_coords::{
    complex_to_pixel_coords, pixel_to_complex_coords,
};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn view_strategy() -> impl Strategy<Value = ViewState> {
    (1e-9f64..10.0, -2.0f64..2.0, -2.0f64..2.0, MIN_ITERATIONS..=MAX_ITERATIONS).prop_map(
        |(zoom, re, im, iterations)| ViewState::new(zoom, Complex::new(re, im), iterations).unwrap(),
    )
}

fn viewport_strategy() -> impl Strategy<Value = Viewport> {
    (1u32..=2000, 1u32..=2000).prop_map(|(w, h)| Viewport::new(w, h))
}

/// A viewport together with a cursor inside it.
fn cursor_strategy() -> impl Strategy<Value = (Viewport, ScreenPoint)> {
    viewport_strategy().prop_flat_map(|viewport| {
        let w = f64::from(viewport.width());
        let h = f64::from(viewport.height());
        (Just(viewport), 0.0..w, 0.0..h).prop_map(|(v, x, y)| (v, ScreenPoint::new(x, y)))
    })
}

/// Pixel-space tolerance scaled to how finely the view resolves the plane.
fn tolerance(view: &ViewState, viewport: Viewport) -> f64 {
    let magnitude = view.center().real.abs().max(view.center().imag.abs()) + view.zoom() * 4.0;
    let pixels_per_unit = f64::from(viewport.height()) / (2.0 * view.zoom());
    (magnitude * 1e-13 * pixels_per_unit).max(1e-6)
}

// ═════════════════════════════════════════════════════════════════════════
// Mapping
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn mapped_pixels_are_finite(view in view_strategy(), (viewport, cursor) in cursor_strategy()) {
        let c = pixel_to_complex_coords(cursor, viewport, &view).unwrap();

        prop_assert!(c.is_finite(), "{:?} mapped to {:?}", cursor, c);
    }

    #[test]
    fn distinct_pixels_map_to_distinct_points(
        view in view_strategy(),
        viewport in viewport_strategy(),
        a in (0u32..2000, 0u32..2000),
        b in (0u32..2000, 0u32..2000),
    ) {
        let clamp = |(x, y): (u32, u32)| ScreenPoint::new(
            f64::from(x % viewport.width()),
            f64::from(y % viewport.height()),
        );
        let (pa, pb) = (clamp(a), clamp(b));
        prop_assume!(pa != pb);

        let ca = pixel_to_complex_coords(pa, viewport, &view).unwrap();
        let cb = pixel_to_complex_coords(pb, viewport, &view).unwrap();

        prop_assert_ne!(ca, cb);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Navigation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn zoom_keeps_point_under_cursor(
        view in view_strategy(),
        (viewport, cursor) in cursor_strategy(),
        zoom_in in any::<bool>(),
    ) {
        let factor = if zoom_in { 0.85 } else { 1.176 };
        let anchor = pixel_to_complex_coords(cursor, viewport, &view).unwrap();

        let next = zoom_to_cursor(&view, viewport, cursor, factor).unwrap();
        let after = complex_to_pixel_coords(anchor, viewport, &next).unwrap();

        let tol = tolerance(&next, viewport);
        prop_assert!((after.x - cursor.x).abs() <= tol, "x drifted {} -> {}", cursor.x, after.x);
        prop_assert!((after.y - cursor.y).abs() <= tol, "y drifted {} -> {}", cursor.y, after.y);
    }

    #[test]
    fn drag_moves_grabbed_point_by_the_pointer_delta(
        view in view_strategy(),
        (viewport, grab) in cursor_strategy(),
        dx in -500.0f64..500.0,
        dy in -500.0f64..500.0,
    ) {
        let grabbed = pixel_to_complex_coords(grab, viewport, &view).unwrap();

        let next = pan_by_pixels(&view, viewport, dx, dy).unwrap();
        let pointer = complex_to_pixel_coords(grabbed, viewport, &next).unwrap();

        let tol = tolerance(&next, viewport);
        prop_assert!((pointer.x - (grab.x + dx)).abs() <= tol);
        prop_assert!((pointer.y - (grab.y - dy)).abs() <= tol);
        prop_assert_eq!(next.zoom(), view.zoom());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Adaptive iteration budget
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn adaptive_budget_is_non_increasing_in_zoom(
        a in 1e-300f64..1e3,
        b in 1e-300f64..1e3,
        max in MIN_ITERATIONS..=MAX_ITERATIONS,
    ) {
        let policy = AdaptiveIterationPolicy::default();
        let (small, large) = if a <= b { (a, b) } else { (b, a) };

        let deep = policy.effective_max_iterations(small, max, true).unwrap();
        let shallow = policy.effective_max_iterations(large, max, true).unwrap();

        prop_assert!(deep >= shallow, "zoom {small} gave {deep}, zoom {large} gave {shallow}");
        prop_assert!(deep <= DEFAULT_ITERATION_CEILING);
        prop_assert!(shallow >= max.min(DEFAULT_ITERATION_CEILING));
    }

    #[test]
    fn adaptive_budget_is_identity_when_zoomed_out(
        zoom in 1.0f64..1e6,
        max in MIN_ITERATIONS..=MAX_ITERATIONS,
        adaptive in any::<bool>(),
    ) {
        let policy = AdaptiveIterationPolicy::default();

        prop_assert_eq!(policy.effective_max_iterations(zoom, max, adaptive).unwrap(), max);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// View state commands
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn reset_is_idempotent(view in view_strategy(), fg in 0usize..7, bg in 0usize..7) {
        let mut once = view;
        once.select_colours(fg, bg, 7);
        once.reset();
        let mut twice = once;
        twice.reset();

        prop_assert_eq!(once, twice);
        prop_assert_eq!(once.zoom(), 2.0);
        prop_assert_eq!(once.background_index(), bg);
    }

    #[test]
    fn full_palette_cycle_returns_to_start(
        start in 0usize..7,
        forward in any::<bool>(),
    ) {
        let len = Palettes::default().len();
        let step = if forward { Step::Forward } else { Step::Backward };
        let mut view = ViewState::default();
        view.select_colours(start, start, len);

        for _ in 0..len {
            view.cycle_foreground(step, len);
            view.cycle_background(step, len);
            prop_assert!(view.foreground_index() < len);
        }

        prop_assert_eq!(view.foreground_index(), start);
        prop_assert_eq!(view.background_index(), start);
    }
}
