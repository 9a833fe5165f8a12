use testbed_engine::debug_draw::DrawFlags;
use winit::keyboard::KeyCode;

/// Keyboard command of the testbed window.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Action {
    Quit,
    TogglePause,
    SingleStep,
    /// Fractions of the visible half extents.
    Pan(f32, f32),
    Zoom(f32),
    ResetView,
    ToggleFlag(DrawFlags),
    Restart,
    NextScenario,
    PrevScenario,
}

const PAN_STEP: f32 = 0.1;

pub fn action_for(code: KeyCode) -> Option<Action> {
    let action = match code {
        KeyCode::Escape => Action::Quit,
        KeyCode::KeyP => Action::TogglePause,
        KeyCode::KeyO => Action::SingleStep,
        KeyCode::ArrowLeft => Action::Pan(-PAN_STEP, 0.0),
        KeyCode::ArrowRight => Action::Pan(PAN_STEP, 0.0),
        KeyCode::ArrowUp => Action::Pan(0.0, PAN_STEP),
        KeyCode::ArrowDown => Action::Pan(0.0, -PAN_STEP),
        KeyCode::KeyZ => Action::Zoom(0.9),
        KeyCode::KeyX => Action::Zoom(1.1),
        KeyCode::Home => Action::ResetView,
        KeyCode::Digit1 => Action::ToggleFlag(DrawFlags::SHAPE),
        KeyCode::Digit2 => Action::ToggleFlag(DrawFlags::JOINT),
        KeyCode::Digit3 => Action::ToggleFlag(DrawFlags::AABB),
        KeyCode::Digit4 => Action::ToggleFlag(DrawFlags::PAIR),
        KeyCode::Digit5 => Action::ToggleFlag(DrawFlags::CENTER_OF_MASS),
        KeyCode::KeyR => Action::Restart,
        KeyCode::KeyN => Action::NextScenario,
        KeyCode::KeyB => Action::PrevScenario,
        _ => return None,
    };
    Some(action)
}
