use crossterm::event::KeyCode;
use side_shooter::input::*;

// ── Key mapping ───────────────────────────────────────────────────────────────

#[test]
fn keycodes_map_to_logical_keys() {
    assert_eq!(Key::from(KeyCode::Up), Key::ArrowUp);
    assert_eq!(Key::from(KeyCode::Char('w')), Key::ArrowUp);
    assert_eq!(Key::from(KeyCode::Down), Key::ArrowDown);
    assert_eq!(Key::from(KeyCode::Char('S')), Key::ArrowDown);
    assert_eq!(Key::from(KeyCode::Char(' ')), Key::Space);
    assert_eq!(Key::from(KeyCode::Left), Key::Other);
    assert_eq!(Key::from(KeyCode::Enter), Key::Other);
}

// ── Held keys ─────────────────────────────────────────────────────────────────

#[test]
fn movement_key_recorded_once() {
    let mut input = InputHandler::new();
    assert_eq!(input.key_down(Key::ArrowUp, 1), None);
    assert_eq!(input.key_down(Key::ArrowUp, 2), None);
    assert_eq!(input.snapshot().len(), 1);
    assert!(input.is_held(Key::ArrowUp));
}

#[test]
fn key_up_releases_only_that_key() {
    let mut input = InputHandler::new();
    input.key_down(Key::ArrowUp, 1);
    input.key_down(Key::ArrowDown, 1);
    input.key_up(Key::ArrowUp);
    let keys = input.snapshot();
    assert!(!keys.contains(Key::ArrowUp));
    assert!(keys.contains(Key::ArrowDown));
}

#[test]
fn releasing_unheld_key_is_no_op() {
    let mut input = InputHandler::new();
    input.key_down(Key::ArrowDown, 1);
    input.key_up(Key::ArrowUp);
    input.key_up(Key::Other);
    assert_eq!(input.snapshot(), HeldKeys::new([Key::ArrowDown]));
}

#[test]
fn unknown_keys_are_ignored() {
    let mut input = InputHandler::new();
    assert_eq!(input.key_down(Key::Other, 1), None);
    input.key_repeat(Key::Other, 2);
    assert!(input.snapshot().is_empty());
}

// ── Fire ──────────────────────────────────────────────────────────────────────

#[test]
fn every_fire_press_raises_a_command() {
    let mut input = InputHandler::new();
    let fired = (0..3)
        .filter_map(|frame| input.key_down(Key::Space, frame))
        .count();
    assert_eq!(fired, 3);
    // Fire is an action, not a held key
    assert!(input.snapshot().is_empty());
}

#[test]
fn fire_command_is_fire() {
    let mut input = InputHandler::new();
    assert_eq!(input.key_down(Key::Space, 1), Some(Command::Fire));
}

// ── Expiry (terminals without release events) ─────────────────────────────────

#[test]
fn stale_keys_expire_after_window() {
    let mut input = InputHandler::new();
    input.key_down(Key::ArrowUp, 10);
    input.expire(14, 4);
    assert!(input.is_held(Key::ArrowUp));
    input.expire(15, 4);
    assert!(!input.is_held(Key::ArrowUp));
}

#[test]
fn repeat_refreshes_held_key() {
    let mut input = InputHandler::new();
    input.key_down(Key::ArrowDown, 10);
    input.key_repeat(Key::ArrowDown, 13);
    input.expire(17, 4);
    assert!(input.is_held(Key::ArrowDown));
}

#[test]
fn snapshot_ignores_later_changes() {
    let mut input = InputHandler::new();
    input.key_down(Key::ArrowUp, 1);
    let keys = input.snapshot();
    input.key_up(Key::ArrowUp);
    assert!(keys.contains(Key::ArrowUp));
}

#[test]
fn held_keys_drop_duplicates_and_non_movement() {
    let keys = HeldKeys::new([Key::ArrowUp, Key::Space, Key::ArrowUp, Key::Other]);
    assert_eq!(keys.len(), 1);
}
