//! Terminal backend for `Surface`. All terminal I/O lives here.
//!
//! The playfield is scaled onto the character grid: every cell covers
//! `width / cols` by `height / rows` playfield units.  The bottom row is kept
//! free for the controls hint.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{self, Attribute, Color, Print},
    terminal, QueueableCommand,
};

use crate::entities::Rect;
use crate::surface::{DrawStyle, Font, Shadow, Surface, TextAlign};

const C_HINT: Color = Color::DarkGrey;
const BLOCK: &str = "█";
/// Fonts at least this large are rendered bold.
const BOLD_FONT_SIZE: f64 = 40.0;

pub struct TerminalSurface<'a, W: Write> {
    out: &'a mut W,
    cols: u16,
    /// Rows available to the playfield (terminal height minus the hint row).
    rows: u16,
    scale_x: f64,
    scale_y: f64,
    hint: Option<&'static str>,
    style: DrawStyle,
    saved: Vec<DrawStyle>,
}

impl<'a, W: Write> TerminalSurface<'a, W> {
    pub fn new(
        out: &'a mut W,
        (cols, rows): (u16, u16),
        (playfield_width, playfield_height): (f64, f64),
    ) -> Self {
        let rows = rows.saturating_sub(1);
        Self {
            out,
            cols,
            rows,
            scale_x: f64::from(cols) / playfield_width,
            scale_y: f64::from(rows) / playfield_height,
            hint: None,
            style: DrawStyle::default(),
            saved: Vec::new(),
        }
    }

    /// Text printed on the bottom row when the frame is presented.
    pub fn with_hint(mut self, hint: &'static str) -> Self {
        self.hint = Some(hint);
        self
    }

    /// Half-open cell span covered by `[start, start + len)` along one axis,
    /// clipped to `[0, cells)`.  Anything visible covers at least one cell.
    fn span(start: f64, len: f64, scale: f64, cells: u16) -> Option<(u16, u16)> {
        let lo = (start * scale).floor();
        let hi = ((start + len) * scale).ceil().max(lo + 1.0);
        let lo = lo.max(0.0);
        let hi = hi.min(f64::from(cells));
        if hi <= lo {
            return None;
        }
        Some((lo as u16, hi as u16))
    }

    /// Cell holding a text baseline at playfield `(x, y)`.
    fn text_cell(&self, x: f64, y: f64) -> (i32, i32) {
        let col = (x * self.scale_x).floor() as i32;
        let row = (y * self.scale_y).ceil() as i32 - 1;
        (col, row)
    }

    fn print_clipped(&mut self, text: &str, col: i32, row: i32, color: Color) -> io::Result<()> {
        if row < 0 || row >= i32::from(self.rows) {
            return Ok(());
        }
        let skip = usize::try_from(-col).unwrap_or(0);
        let col = col.max(0);
        let room = usize::try_from(i32::from(self.cols) - col).unwrap_or(0);
        let visible: String = text.chars().skip(skip).take(room).collect();
        if visible.is_empty() {
            return Ok(());
        }
        self.out.queue(cursor::MoveTo(col as u16, row as u16))?;
        self.out.queue(style::SetForegroundColor(color))?;
        self.out.queue(Print(visible))?;
        Ok(())
    }
}

impl<W: Write> Surface for TerminalSurface<'_, W> {
    fn clear(&mut self) -> io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> io::Result<()> {
        let Some((c0, c1)) = Self::span(rect.x, rect.width, self.scale_x, self.cols) else {
            return Ok(());
        };
        let Some((r0, r1)) = Self::span(rect.y, rect.height, self.scale_y, self.rows) else {
            return Ok(());
        };
        let line = BLOCK.repeat(usize::from(c1 - c0));
        self.out.queue(style::SetForegroundColor(color))?;
        for row in r0..r1 {
            self.out.queue(cursor::MoveTo(c0, row))?;
            self.out.queue(Print(&line))?;
        }
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
        let (mut col, row) = self.text_cell(x, y);
        if self.style.align == TextAlign::Center {
            col -= text.chars().count() as i32 / 2;
        }

        // Shadows narrower than a cell would just overprint the text.
        if let Some(shadow) = self.style.shadow {
            let dx = (shadow.offset_x * self.scale_x).round() as i32;
            let dy = (shadow.offset_y * self.scale_y).round() as i32;
            if dx != 0 || dy != 0 {
                self.print_clipped(text, col + dx, row + dy, shadow.color)?;
            }
        }

        let bold = font.size >= BOLD_FONT_SIZE;
        if bold {
            self.out.queue(style::SetAttribute(Attribute::Bold))?;
        }
        self.print_clipped(text, col, row, color)?;
        if bold {
            self.out.queue(style::SetAttribute(Attribute::NormalIntensity))?;
        }
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

    fn present(&mut self) -> io::Result<()> {
        if let Some(hint) = self.hint {
            self.out.queue(cursor::MoveTo(1, self.rows))?;
            self.out.queue(style::SetForegroundColor(C_HINT))?;
            self.out.queue(Print(hint))?;
        }
        // Park cursor in a harmless spot and flush
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, self.rows))?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface(buf: &mut Vec<u8>) -> TerminalSurface<'_, Vec<u8>> {
        // 50 x 26 terminal → 50 x 25 playfield cells, 10 units per cell
        TerminalSurface::new(buf, (50, 26), (500.0, 250.0))
    }

    #[test]
    fn span_covers_partial_cells() {
        let mut buf = Vec::new();
        let s = surface(&mut buf);
        assert_eq!(
            TerminalSurface::<Vec<u8>>::span(15.0, 10.0, s.scale_x, s.cols),
            Some((1, 3))
        );
    }

    #[test]
    fn tiny_rect_still_covers_one_cell() {
        assert_eq!(
            TerminalSurface::<Vec<u8>>::span(100.0, 0.5, 0.1, 50),
            Some((10, 11))
        );
    }

    #[test]
    fn offscreen_rect_is_clipped_away() {
        assert_eq!(TerminalSurface::<Vec<u8>>::span(-50.0, 20.0, 0.1, 50), None);
        assert_eq!(TerminalSurface::<Vec<u8>>::span(600.0, 20.0, 0.1, 50), None);
    }

    #[test]
    fn partially_offscreen_rect_is_clipped() {
        assert_eq!(
            TerminalSurface::<Vec<u8>>::span(-15.0, 30.0, 0.1, 50),
            Some((0, 2))
        );
    }

    #[test]
    fn fill_text_writes_visible_text() {
        let mut buf = Vec::new();
        {
            let mut s = surface(&mut buf);
            s.fill_text("Score: 3", 20.0, 40.0, &Font::new(25.0, "Helvetica"), Color::White)
                .unwrap();
            s.present().unwrap();
        }
        let written = String::from_utf8_lossy(&buf);
        assert!(written.contains("Score: 3"));
    }

    #[test]
    fn text_outside_playfield_is_dropped() {
        let mut buf = Vec::new();
        {
            let mut s = surface(&mut buf);
            s.fill_text("gone", 20.0, -40.0, &Font::new(25.0, "Helvetica"), Color::White)
                .unwrap();
        }
        assert!(!String::from_utf8_lossy(&buf).contains("gone"));
    }

    #[test]
    fn restore_reinstates_saved_alignment() {
        let mut buf = Vec::new();
        let mut s = surface(&mut buf);
        s.save();
        s.set_text_align(TextAlign::Center);
        s.restore();
        assert_eq!(s.style.align, TextAlign::Left);
    }
}
