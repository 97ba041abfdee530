// Host-side tests for keyboard bindings; the binary's modules aren't a library.

#![allow(dead_code)]
mod keys {
    include!("../src/keys.rs");
}

use app_core::{Param, SourceKind};
use keys::{action_for, Action, GRID_KEY_STEPS};
use winit::keyboard::{Key, NamedKey};

fn ch(s: &str) -> Key {
    Key::Character(s.into())
}

#[test]
fn number_keys_select_sources() {
    assert_eq!(action_for(&ch("1")), Some(Action::Select(SourceKind::Generated)));
    assert_eq!(action_for(&ch("2")), Some(Action::Select(SourceKind::Microphone)));
    assert_eq!(action_for(&ch("3")), Some(Action::Select(SourceKind::LiveStream)));
}

#[test]
fn arrows_resize_the_grid() {
    let up = action_for(&Key::Named(NamedKey::ArrowUp));
    let left = action_for(&Key::Named(NamedKey::ArrowLeft));
    assert_eq!(up, Some(Action::Nudge(Param::Rows, GRID_KEY_STEPS)));
    assert_eq!(left, Some(Action::Nudge(Param::Cols, -GRID_KEY_STEPS)));
}

#[test]
fn bracket_and_equals_keys_step_the_wave() {
    assert_eq!(action_for(&ch("]")), Some(Action::Nudge(Param::Amplitude, 1)));
    assert_eq!(action_for(&ch("[")), Some(Action::Nudge(Param::Amplitude, -1)));
    assert_eq!(action_for(&ch("+")), action_for(&ch("=")));
    assert_eq!(action_for(&ch("-")), Some(Action::Nudge(Param::FrequencyHz, -1)));
}

#[test]
fn letters_ignore_case() {
    assert_eq!(action_for(&ch("G")), Some(Action::ToggleGround));
    assert_eq!(action_for(&ch("m")), Some(Action::ToggleRadial));
    assert_eq!(action_for(&ch("R")), Some(Action::ResetCamera));
}

#[test]
fn escape_quits_and_others_are_unbound() {
    assert_eq!(action_for(&Key::Named(NamedKey::Escape)), Some(Action::Quit));
    assert_eq!(action_for(&Key::Named(NamedKey::Space)), None);
    assert_eq!(action_for(&ch("q")), None);
}
