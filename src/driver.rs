//! Frame driver: turns repaint timestamps into frame deltas and runs one
//! update + draw pass per tick.

use std::io;

use rand::Rng;

use crate::compute;
use crate::display;
use crate::entities::GameState;
use crate::input::HeldKeys;
use crate::surface::Surface;

/// Tracks the previous repaint timestamp (milliseconds).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameClock {
    last_timestamp: f64,
}

impl FrameClock {
    /// The first frame is measured against timestamp 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds since the previous call.
    pub fn advance(&mut self, timestamp: f64) -> f64 {
        let delta = timestamp - self.last_timestamp;
        self.last_timestamp = timestamp;
        delta
    }

    pub fn last_timestamp(&self) -> f64 {
        self.last_timestamp
    }
}

/// One tick: measure the delta, clear, update, draw, present.
pub fn animate<S: Surface>(
    state: &mut GameState,
    clock: &mut FrameClock,
    timestamp: f64,
    keys: &HeldKeys,
    surface: &mut S,
    rng: &mut impl Rng,
) -> io::Result<()> {
    let delta = clock.advance(timestamp);
    surface.clear()?;
    compute::update(state, delta, keys, rng);
    display::draw_game(surface, state)?;
    surface.present()
}
