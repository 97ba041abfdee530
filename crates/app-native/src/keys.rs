// Keyboard bindings.

use app_core::{Param, SourceKind};
use winit::keyboard::{Key, NamedKey};

/// Rows/cols move faster than one cell per press.
pub const GRID_KEY_STEPS: i32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Select(SourceKind),
    Nudge(Param, i32),
    ToggleGround,
    ToggleRadial,
    ResetCamera,
    Quit,
}

pub fn action_for(key: &Key) -> Option<Action> {
    match key {
        Key::Named(named) => match named {
            NamedKey::ArrowUp => Some(Action::Nudge(Param::Rows, GRID_KEY_STEPS)),
            NamedKey::ArrowDown => Some(Action::Nudge(Param::Rows, -GRID_KEY_STEPS)),
            NamedKey::ArrowRight => Some(Action::Nudge(Param::Cols, GRID_KEY_STEPS)),
            NamedKey::ArrowLeft => Some(Action::Nudge(Param::Cols, -GRID_KEY_STEPS)),
            NamedKey::Escape => Some(Action::Quit),
            _ => None,
        },
        Key::Character(s) => match s.to_lowercase().as_str() {
            "1" => Some(Action::Select(SourceKind::Generated)),
            "2" => Some(Action::Select(SourceKind::Microphone)),
            "3" => Some(Action::Select(SourceKind::LiveStream)),
            "]" => Some(Action::Nudge(Param::Amplitude, 1)),
            "[" => Some(Action::Nudge(Param::Amplitude, -1)),
            "=" | "+" => Some(Action::Nudge(Param::FrequencyHz, 1)),
            "-" => Some(Action::Nudge(Param::FrequencyHz, -1)),
            "g" => Some(Action::ToggleGround),
            "m" => Some(Action::ToggleRadial),
            "r" => Some(Action::ResetCamera),
            _ => None,
        },
        _ => None,
    }
}
