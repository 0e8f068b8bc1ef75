use crate::core::data::point::ScreenPoint;
use crate::core::data::view_state::ViewState;
use crate::core::data::viewport::Viewport;
use crate::core::interaction::errors::InteractionError;
use crate::core::interaction::input_event::{InputEvent, PointerButton};
use crate::core::interaction::limits::InteractionLimits;
use crate::core::interaction::navigation::{pan_by_pixels, zoom_to_cursor};
use log::{debug, info, warn};

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        last: ScreenPoint,
    },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct InteractionReport {
    pub view_changed: bool,
    pub dragging: bool,
}

/// Applies [`InputEvent`]s to a [`ViewState`] one at a time.
///
/// The controller owns only the drag state; the view is passed in so the
/// caller decides when a new snapshot is handed to the renderer. On error the
/// view and the drag state are left exactly as they were.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionController {
    drag: DragState,
    limits: InteractionLimits,
    palette_len: usize,
}

impl InteractionController {
    #[must_use]
    pub fn new(limits: InteractionLimits, palette_len: usize) -> Self {
        Self {
            drag: DragState::Idle,
            limits,
            palette_len,
        }
    }

    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    #[must_use]
    pub fn limits(&self) -> InteractionLimits {
        self.limits
    }

    pub fn apply(
        &mut self,
        view: &mut ViewState,
        viewport: Viewport,
        event: InputEvent,
    ) -> Result<InteractionReport, InteractionError> {
        let before = *view;

        match self.transition(view, viewport, event) {
            Ok(()) => {
                let report = InteractionReport {
                    view_changed: *view != before,
                    dragging: matches!(self.drag, DragState::Dragging { .. }),
                };
                debug!("{:?} -> {:?}", event, report);
                Ok(report)
            }
            Err(err) => {
                *view = before;
                warn!("rejected {:?}: {}", event, err);
                Err(err)
            }
        }
    }

    fn transition(
        &mut self,
        view: &mut ViewState,
        viewport: Viewport,
        event: InputEvent,
    ) -> Result<(), InteractionError> {
        match (self.drag, event) {
            (
                DragState::Idle,
                InputEvent::Press {
                    button: PointerButton::Primary,
                    position,
                },
            ) => {
                self.drag = DragState::Dragging { last: position };
            }
            (DragState::Dragging { last }, InputEvent::Move { position }) => {
                *view = pan_by_pixels(view, viewport, position.x - last.x, position.y - last.y)?;
                self.drag = DragState::Dragging { last: position };
            }
            (
                DragState::Dragging { .. },
                InputEvent::Release {
                    button: PointerButton::Primary,
                },
            ) => {
                self.drag = DragState::Idle;
            }
            (_, InputEvent::Wheel { delta, position }) => {
                if let Some(factor) = self.limits.zoom_factor_for(delta) {
                    *view = zoom_to_cursor(view, viewport, position, factor)?;
                }
            }
            (_, InputEvent::Reset) => {
                view.reset();
                info!("view reset to defaults");
            }
            (_, InputEvent::AdjustIterations(step)) => {
                view.adjust_max_iterations(step, self.limits.iteration_step);
            }
            (_, InputEvent::CycleForeground(step)) => {
                view.cycle_foreground(step, self.palette_len);
            }
            (_, InputEvent::CycleBackground(step)) => {
                view.cycle_background(step, self.palette_len);
            }
            (_, InputEvent::ToggleAdaptive) => {
                view.toggle_adaptive();
            }
            _ => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::data::palette::Step;
    use crate::core::data::view_state::{MAX_ITERATIONS, MIN_ITERATIONS};

    const VIEWPORT: Viewport = Viewport::new(1200, 800);

    fn controller() -> InteractionController {
        InteractionController::new(InteractionLimits::default(), 7)
    }

    fn press(x: f64, y: f64) -> InputEvent {
        InputEvent::Press {
            button: PointerButton::Primary,
            position: ScreenPoint::new(x, y),
        }
    }

    fn move_to(x: f64, y: f64) -> InputEvent {
        InputEvent::Move {
            position: ScreenPoint::new(x, y),
        }
    }

    fn release() -> InputEvent {
        InputEvent::Release {
            button: PointerButton::Primary,
        }
    }

    #[test]
    fn primary_press_starts_drag() {
        let mut controller = controller();
        let mut view = ViewState::default();

        let report = controller.apply(&mut view, VIEWPORT, press(10.0, 20.0)).unwrap();

        assert_eq!(
            controller.drag_state(),
            DragState::Dragging {
                last: ScreenPoint::new(10.0, 20.0)
            }
        );
        assert!(report.dragging);
        assert!(!report.view_changed);
    }

    #[test]
    fn other_buttons_are_ignored() {
        let mut controller = controller();
        let mut view = ViewState::default();

        for button in [PointerButton::Secondary, PointerButton::Middle] {
            let event = InputEvent::Press {
                button,
                position: ScreenPoint::new(1.0, 1.0),
            };
            controller.apply(&mut view, VIEWPORT, event).unwrap();
        }

        assert_eq!(controller.drag_state(), DragState::Idle);
    }

    #[test]
    fn move_while_idle_is_noop() {
        let mut controller = controller();
        let mut view = ViewState::default();

        let report = controller.apply(&mut view, VIEWPORT, move_to(300.0, 300.0)).unwrap();

        assert_eq!(view, ViewState::default());
        assert_eq!(report, InteractionReport::default());
    }

    #[test]
    fn drag_pans_and_tracks_last_position() {
        let mut controller = controller();
        let mut view = ViewState::default();

        controller.apply(&mut view, VIEWPORT, press(600.0, 400.0)).unwrap();
        let report = controller.apply(&mut view, VIEWPORT, move_to(660.0, 400.0)).unwrap();

        assert!(report.view_changed);
        // 60 / 1200 * 2 * 1.5 * 2
        assert!((view.center().real + 0.3).abs() < 1e-12);
        assert_eq!(
            controller.drag_state(),
            DragState::Dragging {
                last: ScreenPoint::new(660.0, 400.0)
            }
        );

        controller.apply(&mut view, VIEWPORT, release()).unwrap();
        assert_eq!(controller.drag_state(), DragState::Idle);
    }

    #[test]
    fn vertical_drag_subtracts_from_imaginary_centre() {
        let mut controller = controller();
        let mut view = ViewState::default();
        let viewport = Viewport::new(100, 100);

        controller.apply(&mut view, viewport, press(50.0, 50.0)).unwrap();
        controller.apply(&mut view, viewport, move_to(50.0, 75.0)).unwrap();

        // 25 / 100 * 2 * 2
        assert_eq!(view.center(), Complex::new(0.0, -1.0));
    }

    #[test]
    fn release_while_idle_is_noop() {
        let mut controller = controller();
        let mut view = ViewState::default();

        controller.apply(&mut view, VIEWPORT, release()).unwrap();

        assert_eq!(controller.drag_state(), DragState::Idle);
    }

    #[test]
    fn wheel_forward_at_centre_from_defaults() {
        let mut controller = controller();
        let mut view = ViewState::default();
        let event = InputEvent::Wheel {
            delta: 1.0,
            position: VIEWPORT.center(),
        };

        controller.apply(&mut view, VIEWPORT, event).unwrap();

        assert!((view.zoom() - 1.7).abs() < 1e-12);
        assert_eq!(view.center(), Complex::ZERO);
    }

    #[test]
    fn wheel_during_drag_keeps_drag_state() {
        let mut controller = controller();
        let mut view = ViewState::default();
        controller.apply(&mut view, VIEWPORT, press(5.0, 5.0)).unwrap();

        let event = InputEvent::Wheel {
            delta: -1.0,
            position: ScreenPoint::new(100.0, 100.0),
        };
        controller.apply(&mut view, VIEWPORT, event).unwrap();

        assert!((view.zoom() - 2.352).abs() < 1e-12);
        assert!(matches!(controller.drag_state(), DragState::Dragging { .. }));
    }

    #[test]
    fn zero_wheel_delta_changes_nothing() {
        let mut controller = controller();
        let mut view = ViewState::default();
        let event = InputEvent::Wheel {
            delta: 0.0,
            position: ScreenPoint::new(10.0, 10.0),
        };

        let report = controller.apply(&mut view, VIEWPORT, event).unwrap();

        assert!(!report.view_changed);
    }

    #[test]
    fn rejected_zoom_leaves_state_unchanged() {
        let mut controller = controller();
        let mut view = ViewState::default();
        let event = InputEvent::Wheel {
            delta: 1.0,
            position: ScreenPoint::new(10.0, 10.0),
        };

        let result = controller.apply(&mut view, Viewport::new(1200, 0), event);

        assert!(matches!(result, Err(InteractionError::Viewport(_))));
        assert_eq!(view, ViewState::default());
    }

    #[test]
    fn rejected_move_keeps_last_position() {
        let mut controller = controller();
        let mut view = ViewState::default();
        controller.apply(&mut view, VIEWPORT, press(5.0, 5.0)).unwrap();

        let result = controller.apply(&mut view, Viewport::new(0, 0), move_to(50.0, 50.0));

        assert!(result.is_err());
        assert_eq!(
            controller.drag_state(),
            DragState::Dragging {
                last: ScreenPoint::new(5.0, 5.0)
            }
        );
    }

    #[test]
    fn reset_restores_defaults_and_keeps_drag() {
        let mut controller = controller();
        let mut view = ViewState::new(0.01, Complex::new(-1.0, 0.3), 500).unwrap();
        controller.apply(&mut view, VIEWPORT, press(5.0, 5.0)).unwrap();

        controller.apply(&mut view, VIEWPORT, InputEvent::Reset).unwrap();

        assert_eq!(view, ViewState::default());
        assert!(matches!(controller.drag_state(), DragState::Dragging { .. }));
    }

    #[test]
    fn iteration_adjustments_saturate() {
        let mut controller = controller();
        let mut view = ViewState::default();

        for _ in 0..150 {
            controller
                .apply(&mut view, VIEWPORT, InputEvent::AdjustIterations(Step::Forward))
                .unwrap();
        }
        assert_eq!(view.max_iterations(), MAX_ITERATIONS);

        for _ in 0..150 {
            controller
                .apply(&mut view, VIEWPORT, InputEvent::AdjustIterations(Step::Backward))
                .unwrap();
        }
        assert_eq!(view.max_iterations(), MIN_ITERATIONS);
    }

    #[test]
    fn colour_cycling_wraps() {
        let mut controller = controller();
        let mut view = ViewState::default();

        controller
            .apply(&mut view, VIEWPORT, InputEvent::CycleBackground(Step::Backward))
            .unwrap();
        assert_eq!(view.background_index(), 6);

        for _ in 0..7 {
            controller
                .apply(&mut view, VIEWPORT, InputEvent::CycleForeground(Step::Forward))
                .unwrap();
        }
        assert_eq!(view.foreground_index(), 0);
    }

    #[test]
    fn toggle_adaptive_flips_flag() {
        let mut controller = controller();
        let mut view = ViewState::default();

        let report = controller.apply(&mut view, VIEWPORT, InputEvent::ToggleAdaptive).unwrap();

        assert!(report.view_changed);
        assert!(!view.adaptive_enabled());
    }

    #[test]
    fn commands_work_on_degenerate_viewport() {
        let mut controller = controller();
        let mut view = ViewState::default();

        let result = controller.apply(
            &mut view,
            Viewport::new(0, 0),
            InputEvent::AdjustIterations(Step::Forward),
        );

        assert!(result.is_ok());
        assert_eq!(view.max_iterations(), 110);
    }
}
