//! Abstract 2D drawing surface.
//!
//! Game and HUD drawing only talk to `Surface`; the terminal renderer and
//! the recording surface used by tests are interchangeable behind it.

use std::io;

use crossterm::style::Color;

use crate::entities::Rect;

#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    /// Pixel size in playfield units.
    pub size: f64,
    pub family: &'static str,
}

impl Font {
    pub const fn new(size: f64, family: &'static str) -> Self {
        Self { size, family }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub offset_x: f64,
    pub offset_y: f64,
    pub color: Color,
}

/// Style state captured by `save` and reinstated by `restore`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DrawStyle {
    pub shadow: Option<Shadow>,
    pub align: TextAlign,
}

pub trait Surface {
    /// Wipe the whole surface ahead of a new frame.
    fn clear(&mut self) -> io::Result<()>;

    fn fill_rect(&mut self, rect: Rect, color: Color) -> io::Result<()>;

    /// Draw `text` with its baseline at `y`; `x` is interpreted through the
    /// current text alignment.
    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &Font, color: Color)
        -> io::Result<()>;

    fn save(&mut self);

    /// Pop the last saved style; unbalanced calls are ignored.
    fn restore(&mut self);

    fn set_shadow(&mut self, shadow: Option<Shadow>);

    fn set_text_align(&mut self, align: TextAlign);

    /// Push the finished frame to the output.
    fn present(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// ── Recording surface ─────────────────────────────────────────────────────────

/// One recorded drawing operation, with the style in effect at the time.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear,
    Rect {
        rect: Rect,
        color: Color,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        font: Font,
        color: Color,
        style: DrawStyle,
    },
}

/// Surface that keeps every call in order instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
    style: DrawStyle,
    saved: Vec<DrawStyle>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = (&Rect, Color)> {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Rect { rect, color } => Some((rect, *color)),
            _ => None,
        })
    }

    pub fn style(&self) -> DrawStyle {
        self.style
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) -> io::Result<()> {
        self.calls.clear();
        self.calls.push(DrawCall::Clear);
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> io::Result<()> {
        self.calls.push(DrawCall::Rect { rect, color });
        Ok(())
    }

    fn fill_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        font: &Font,
        color: Color,
    ) -> io::Result<()> {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
            font: font.clone(),
            color,
            style: self.style,
        });
        Ok(())
    }

    fn save(&mut self) {
        self.saved.push(self.style);
    }

    fn restore(&mut self) {
        if let Some(style) = self.saved.pop() {
            self.style = style;
        }
    }

    fn set_shadow(&mut self, shadow: Option<Shadow>) {
        self.style.shadow = shadow;
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.style.align = align;
    }
}
