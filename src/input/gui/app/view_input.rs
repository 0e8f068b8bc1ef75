use crate::core::data::palette::Step;
use crate::core::data::point::ScreenPoint;
use crate::core::interaction::input_event::{InputEvent, PointerButton};
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Pixel-precise scroll deltas are divided by this to approximate wheel lines.
const PIXELS_PER_LINE: f64 = 40.0;

/// What the app should do with a window event after translation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GuiCommand {
    Quit,
    Input(InputEvent),
}

pub const CONTROLS_HELP: &str = "left drag: pan | wheel: zoom to cursor | R: reset | C/V: foreground | \
B/N: background | +/-: iterations | A: adaptive iterations | Esc: quit";

#[must_use]
pub fn key_command(key: KeyCode) -> Option<GuiCommand> {
    let input = match key {
        KeyCode::Escape => return Some(GuiCommand::Quit),
        KeyCode::KeyR => InputEvent::Reset,
        KeyCode::KeyC => InputEvent::CycleForeground(Step::Forward),
        KeyCode::KeyV => InputEvent::CycleForeground(Step::Backward),
        KeyCode::KeyB => InputEvent::CycleBackground(Step::Forward),
        KeyCode::KeyN => InputEvent::CycleBackground(Step::Backward),
        KeyCode::Equal | KeyCode::NumpadAdd => InputEvent::AdjustIterations(Step::Forward),
        KeyCode::Minus | KeyCode::NumpadSubtract => InputEvent::AdjustIterations(Step::Backward),
        KeyCode::KeyA => InputEvent::ToggleAdaptive,
        _ => return None,
    };

    Some(GuiCommand::Input(input))
}

#[must_use]
pub fn pointer_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Primary),
        MouseButton::Right => Some(PointerButton::Secondary),
        MouseButton::Middle => Some(PointerButton::Middle),
        _ => None,
    }
}

/// Wheel movement in lines, positive when scrolling forward.
#[must_use]
pub fn wheel_delta(delta: MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y / PIXELS_PER_LINE,
    }
}

/// Tracks the cursor so button and wheel events, which carry no position,
/// can be anchored to it.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ViewInput {
    cursor: ScreenPoint,
}

impl ViewInput {
    #[must_use]
    pub fn cursor(&self) -> ScreenPoint {
        self.cursor
    }

    pub fn translate(&mut self, event: &WindowEvent) -> Option<GuiCommand> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = ScreenPoint::new(position.x, position.y);
                Some(GuiCommand::Input(InputEvent::Move {
                    position: self.cursor,
                }))
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = pointer_button(*button)?;
                let input = match state {
                    ElementState::Pressed => InputEvent::Press {
                        button,
                        position: self.cursor,
                    },
                    ElementState::Released => InputEvent::Release { button },
                };
                Some(GuiCommand::Input(input))
            }
            WindowEvent::MouseWheel { delta, .. } => Some(GuiCommand::Input(InputEvent::Wheel {
                delta: wheel_delta(*delta),
                position: self.cursor,
            })),
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                match event.physical_key {
                    PhysicalKey::Code(code) => key_command(code),
                    PhysicalKey::Unidentified(_) => None,
                }
            }
            _ => None,
        }
    }
}
