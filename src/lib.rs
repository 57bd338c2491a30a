//! Side-scrolling shooter: a player ship fires at procedurally spawned
//! enemies against the clock, with a regenerating ammo supply.
//!
//! `compute` holds the game rules, `entities` the data they act on,
//! `display` the drawing over an abstract `surface::Surface`, and `driver`
//! the per-repaint tick.

pub mod compute;
pub mod config;
pub mod display;
pub mod driver;
pub mod entities;
pub mod error;
pub mod input;
pub mod surface;
