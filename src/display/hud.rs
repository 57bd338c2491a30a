//! Heads-up display: score, ammo pips, timer and the end-of-game message.

use std::io;

use crossterm::style::Color;

use crate::entities::{GameState, Outcome, Rect};
use crate::surface::{Font, Shadow, Surface, TextAlign};

const C_TEXT: Color = Color::White;
const C_SHADOW: Color = Color::Black;

const FONT_FAMILY: &str = "Helvetica";
const HUD_FONT: Font = Font::new(25.0, FONT_FAMILY);
const HEADLINE_FONT: Font = Font::new(50.0, FONT_FAMILY);

const MARGIN_X: f64 = 20.0;
const SCORE_Y: f64 = 40.0;
const PIPS_Y: f64 = 50.0;
const PIP_SPACING: f64 = 5.0;
const PIP_WIDTH: f64 = 3.0;
const PIP_HEIGHT: f64 = 20.0;
const TIMER_Y: f64 = 100.0;
/// Vertical distance of each message line from the playfield centre.
const MESSAGE_OFFSET_Y: f64 = 40.0;

/// Elapsed session time in seconds with one decimal.
pub fn format_timer(game_time_ms: f64) -> String {
    format!("{:.1}", game_time_ms * 0.001)
}

/// Headline and sub-line shown once the session is over.
pub fn end_messages(outcome: Outcome) -> (&'static str, &'static str) {
    match outcome {
        Outcome::Win => ("You Win!", "Well done!"),
        Outcome::Lose => ("You Lose!", "Try again!"),
    }
}

pub fn draw<S: Surface>(surface: &mut S, state: &GameState) -> io::Result<()> {
    surface.save();
    surface.set_shadow(Some(Shadow {
        offset_x: 2.0,
        offset_y: 2.0,
        color: C_SHADOW,
    }));
    let result = draw_scoped(surface, state);
    surface.restore();
    result
}

fn draw_scoped<S: Surface>(surface: &mut S, state: &GameState) -> io::Result<()> {
    surface.fill_text(
        &format!("Score: {}", state.score),
        MARGIN_X,
        SCORE_Y,
        &HUD_FONT,
        C_TEXT,
    )?;

    for i in 0..state.ammo {
        let pip = Rect::new(
            MARGIN_X + PIP_SPACING * f64::from(i),
            PIPS_Y,
            PIP_WIDTH,
            PIP_HEIGHT,
        );
        surface.fill_rect(pip, C_TEXT)?;
    }

    surface.fill_text(
        &format!("Timer: {}", format_timer(state.game_time)),
        MARGIN_X,
        TIMER_Y,
        &HUD_FONT,
        C_TEXT,
    )?;

    if state.is_over() {
        let (headline, subline) = end_messages(state.outcome());
        let cx = state.width * 0.5;
        let cy = state.height * 0.5;
        surface.set_text_align(TextAlign::Center);
        surface.fill_text(headline, cx, cy - MESSAGE_OFFSET_Y, &HEADLINE_FONT, C_TEXT)?;
        surface.fill_text(subline, cx, cy + MESSAGE_OFFSET_Y, &HUD_FONT, C_TEXT)?;
    }

    Ok(())
}
