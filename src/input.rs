//! Keyboard state.
//!
//! The host feeds raw key events through `key_down` / `key_repeat` /
//! `key_up`; the game loop reads one `HeldKeys` snapshot per tick.  Firing is
//! edge-triggered: `key_down` on the fire key hands back a `Command::Fire`
//! which the caller applies right away with `compute::player_shoot`.

use crossterm::event::KeyCode;

/// Logical keys the game distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Space,
    Other,
}

impl Key {
    pub fn is_movement(self) -> bool {
        matches!(self, Key::ArrowUp | Key::ArrowDown)
    }
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Key::ArrowUp,
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Key::ArrowDown,
            KeyCode::Char(' ') => Key::Space,
            _ => Key::Other,
        }
    }
}

/// One-shot actions raised by a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Fire,
}

/// Read-only view of the held movement keys, in press order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeldKeys(Vec<Key>);

impl HeldKeys {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        let mut held = Vec::new();
        for key in keys {
            if key.is_movement() && !held.contains(&key) {
                held.push(key);
            }
        }
        Self(held)
    }

    pub fn contains(&self, key: Key) -> bool {
        self.0.contains(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct HeldKey {
    key: Key,
    /// Frame of the last press/repeat event for this key.
    last_seen: u64,
}

#[derive(Clone, Debug, Default)]
pub struct InputHandler {
    held: Vec<HeldKey>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press.  Movement keys join the held set once; the fire key
    /// yields `Command::Fire` on every press.
    pub fn key_down(&mut self, key: Key, frame: u64) -> Option<Command> {
        if key.is_movement() {
            self.touch(key, frame);
            None
        } else if key == Key::Space {
            Some(Command::Fire)
        } else {
            None
        }
    }

    /// Auto-repeat keeps a movement key alive but never fires.
    pub fn key_repeat(&mut self, key: Key, frame: u64) {
        if key.is_movement() {
            self.touch(key, frame);
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.retain(|h| h.key != key);
    }

    /// Drop keys that have not been refreshed within `window` frames.  Only
    /// needed on terminals that never report key releases: OS auto-repeat
    /// refreshes a genuinely held key well inside the window.
    pub fn expire(&mut self, frame: u64, window: u64) {
        self.held
            .retain(|h| frame.saturating_sub(h.last_seen) <= window);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.iter().any(|h| h.key == key)
    }

    pub fn snapshot(&self) -> HeldKeys {
        HeldKeys::new(self.held.iter().map(|h| h.key))
    }

    fn touch(&mut self, key: Key, frame: u64) {
        match self.held.iter_mut().find(|h| h.key == key) {
            Some(held) => held.last_seen = frame,
            None => self.held.push(HeldKey {
                key,
                last_seen: frame,
            }),
        }
    }
}
