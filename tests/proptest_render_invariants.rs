//! Property-based invariants for the escape-time pipeline.
//!
//! 1. Serial and rayon renders of the same request are byte-identical.
//! 2. Points inside the main cardioid never escape.
//! 3. Escape fractions are non-negative and scale with the base budget only.
//! 4. Clamped colours always lie between background and foreground.

use mandelbrot_explorer::core::actions::cancellation::NeverCancel;
use mandelbrot_explorer::core::actions::render_frame::{RenderMode, render_frame};
use mandelbrot_explorer::core::data::colour::RgbColour;
use mandelbrot_explorer::core::data::complex::Complex;
use mandelbrot_explorer::core::data::view_state::ViewState;
use mandelbrot_explorer::core::data::viewport::Viewport;
use mandelbrot_explorer::core::fractals::mandelbrot::{
    EscapeResult, ExplorerConfig, OvershootPolicy, TwoToneColourMap, escape_time,
};
use proptest::prelude::*;

fn unit_colour() -> impl Strategy<Value = RgbColour> {
    (0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0).prop_map(|(r, g, b)| RgbColour::new(r, g, b))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn serial_and_parallel_renders_match(
        zoom in 1e-6f64..3.0,
        re in -2.0f64..1.0,
        im in -1.5f64..1.5,
        iterations in 10i32..300,
        width in 1u32..48,
        height in 1u32..48,
        fg in 0usize..7,
        bg in 0usize..7,
        adaptive in any::<bool>(),
    ) {
        let config = ExplorerConfig::default();
        let mut view = ViewState::new(zoom, Complex::new(re, im), iterations).unwrap();
        view.select_colours(fg, bg, config.palettes.len());
        view.set_adaptive_enabled(adaptive);
        let request = config.build_frame_request(&view, Viewport::new(width, height)).unwrap();

        let serial = render_frame(&request.clone().with_mode(RenderMode::Serial), &NeverCancel).unwrap();
        let parallel = render_frame(&request.with_mode(RenderMode::Parallel), &NeverCancel).unwrap();

        prop_assert_eq!(serial, parallel);
    }
}

proptest! {
    #[test]
    fn cardioid_interior_is_bounded(theta in 0.0f64..std::f64::consts::TAU, r in 0.0f64..0.9) {
        // c = w/2 - w^2/4 with |w| < 1 lies strictly inside the main cardioid
        let w = Complex::new(r * theta.cos(), r * theta.sin());
        let w_squared = Complex::new(w.real * w.real - w.imag * w.imag, 2.0 * w.real * w.imag);
        let c = w * 0.5 - w_squared * 0.25;

        prop_assert_eq!(escape_time(c, 2000, 100), EscapeResult::Bounded);
    }

    #[test]
    fn escape_fraction_uses_base_budget(
        re in -3.0f64..3.0,
        im in -3.0f64..3.0,
        base in 10i32..1000,
        extra in 0i32..1000,
    ) {
        let c = Complex::new(re, im);

        match (escape_time(c, base + extra, base), escape_time(c, base + extra, base + extra)) {
            (EscapeResult::Escaped(t_base), EscapeResult::Escaped(t_cap)) => {
                prop_assert!(t_base >= 0.0);
                prop_assert!(t_base >= t_cap);
                prop_assert!((t_base * f64::from(base) - t_cap * f64::from(base + extra)).abs() < 1e-6);
            }
            (EscapeResult::Bounded, EscapeResult::Bounded) => {}
            other => prop_assert!(false, "reference budget changed the outcome: {:?}", other),
        }
    }

    #[test]
    fn clamped_shading_stays_between_endpoints(
        fg in unit_colour(),
        bg in unit_colour(),
        t in 0.0f64..10.0,
    ) {
        let map = TwoToneColourMap::new(fg, bg, OvershootPolicy::Clamp);

        let shaded = map.shade(EscapeResult::Escaped(t));

        for ((s, f), b) in shaded.channels().into_iter().zip(fg.channels()).zip(bg.channels()) {
            prop_assert!(s >= f.min(b) - 1e-12 && s <= f.max(b) + 1e-12);
        }
    }
}
