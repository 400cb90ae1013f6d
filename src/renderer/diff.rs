//! Differential renderer.
//!
//! Compares the current frame to the previous one and only emits cells
//! that changed, inside a synchronized update block, flushed in a single
//! write. Color and attribute escapes are deduplicated across runs of
//! cells.

use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{
    BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate, EnterAlternateScreen,
    LeaveAlternateScreen,
};

use crate::types::{Attr, Cell, Rgba};

use super::frame::FrameBuffer;

fn to_color(rgba: Rgba) -> Color {
    if rgba.is_terminal_default() {
        Color::Reset
    } else {
        Color::Rgb {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
        }
    }
}

// =============================================================================
// STATEFUL CELL OUTPUT
// =============================================================================

/// Tracks the terminal's current colors/attributes/cursor so unchanged
/// state is never re-emitted.
#[derive(Default)]
struct CellWriter {
    fg: Option<Rgba>,
    bg: Option<Rgba>,
    attrs: Option<Attr>,
    cursor: Option<(u16, u16)>,
}

impl CellWriter {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn write_cell(&mut self, out: &mut Stdout, x: u16, y: u16, cell: &Cell) -> io::Result<()> {
        if self.cursor != Some((x, y)) {
            queue!(out, MoveTo(x, y))?;
        }

        if self.attrs != Some(cell.attrs) {
            // Attributes only reset wholesale, which also clears colors.
            queue!(out, SetAttribute(Attribute::Reset))?;
            if cell.attrs.contains(Attr::BOLD) {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            if cell.attrs.contains(Attr::ITALIC) {
                queue!(out, SetAttribute(Attribute::Italic))?;
            }
            if cell.attrs.contains(Attr::UNDERLINE) {
                queue!(out, SetAttribute(Attribute::Underlined))?;
            }
            if cell.attrs.contains(Attr::DIM) {
                queue!(out, SetAttribute(Attribute::Dim))?;
            }
            self.attrs = Some(cell.attrs);
            self.fg = None;
            self.bg = None;
        }

        if self.fg != Some(cell.fg) {
            queue!(out, SetForegroundColor(to_color(cell.fg)))?;
            self.fg = Some(cell.fg);
        }
        if self.bg != Some(cell.bg) {
            queue!(out, SetBackgroundColor(to_color(cell.bg)))?;
            self.bg = Some(cell.bg);
        }

        queue!(out, Print(cell.ch))?;
        self.cursor = Some((x + 1, y));
        Ok(())
    }
}

// =============================================================================
// DIFF RENDERER
// =============================================================================

/// Renders frames to the terminal, diffing against the previous frame.
pub struct DiffRenderer {
    out: Stdout,
    writer: CellWriter,
    previous: Option<FrameBuffer>,
}

impl DiffRenderer {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            writer: CellWriter::default(),
            previous: None,
        }
    }

    /// Render a frame, emitting only changed cells.
    ///
    /// Returns true if anything changed.
    pub fn render(&mut self, buffer: &FrameBuffer) -> io::Result<bool> {
        let mut has_changes = false;

        queue!(self.out, BeginSynchronizedUpdate)?;
        self.writer.reset();

        let width = buffer.width();
        let height = buffer.height();
        let same_size = self
            .previous
            .as_ref()
            .is_some_and(|prev| prev.width() == width && prev.height() == height);

        for y in 0..height {
            for x in 0..width {
                let Some(cell) = buffer.get(x, y) else { continue };
                let changed = if same_size {
                    self.previous
                        .as_ref()
                        .and_then(|prev| prev.get(x, y))
                        .is_none_or(|prev_cell| prev_cell != cell)
                } else {
                    true
                };
                if changed {
                    has_changes = true;
                    self.writer.write_cell(&mut self.out, x, y, cell)?;
                }
            }
        }

        queue!(self.out, EndSynchronizedUpdate)?;
        self.out.flush()?;

        self.previous = Some(buffer.clone());
        Ok(has_changes)
    }

    /// Drop the previous frame; the next render redraws everything.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Enter the alternate screen and hide the cursor.
    pub fn enter_fullscreen(&mut self) -> io::Result<()> {
        queue!(self.out, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        self.out.flush()?;
        self.invalidate();
        Ok(())
    }

    /// Restore the main screen.
    pub fn exit_fullscreen(&mut self) -> io::Result<()> {
        queue!(
            self.out,
            SetAttribute(Attribute::Reset),
            ResetColor,
            Show,
            LeaveAlternateScreen
        )?;
        self.out.flush()
    }
}

impl Default for DiffRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderer_starts_without_previous() {
        let renderer = DiffRenderer::new();
        assert!(!renderer.has_previous());
    }

    #[test]
    fn test_invalidate_drops_previous() {
        let mut renderer = DiffRenderer::new();
        renderer.previous = Some(FrameBuffer::new(4, 2, Rgba::BLACK));
        assert!(renderer.has_previous());

        renderer.invalidate();
        assert!(!renderer.has_previous());
    }

    #[test]
    fn test_to_color_mapping() {
        assert_eq!(to_color(Rgba::TERMINAL_DEFAULT), Color::Reset);
        assert_eq!(
            to_color(Rgba::rgb(1, 2, 3)),
            Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}
