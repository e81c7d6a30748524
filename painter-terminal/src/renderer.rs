/// Half-block cell renderer for terminal output
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use painter_core::{Framebuffer, Rgb};
use std::io::Write;

/// Upper half block: the foreground paints the top pixel, the background the
/// bottom one, so each cell carries two vertical pixels.
const HALF_BLOCK: char = '▀';

/// Owns a pixel grid twice as tall as the terminal and prints it as cells
pub struct HalfBlockRenderer {
    columns: usize,
    rows: usize,
    framebuffer: Framebuffer,
}

impl HalfBlockRenderer {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            framebuffer: Framebuffer::new(columns, rows * 2),
        }
    }

    pub fn resize(&mut self, columns: usize, rows: usize) {
        self.columns = columns;
        self.rows = rows;
        self.framebuffer.resize(columns, rows * 2);
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer {
        &mut self.framebuffer
    }

    /// Queue the whole grid. Colour changes are only emitted when needed.
    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let mut current: Option<(Rgb, Rgb)> = None;

        for row in 0..self.rows {
            writer.queue(cursor::MoveTo(0, row as u16))?;
            let (Some(top), Some(bottom)) = (
                self.framebuffer.row(row * 2),
                self.framebuffer.row(row * 2 + 1),
            ) else {
                break;
            };

            for (&upper, &lower) in top.iter().zip(bottom) {
                if current != Some((upper, lower)) {
                    writer.queue(SetForegroundColor(to_color(upper)))?;
                    writer.queue(SetBackgroundColor(to_color(lower)))?;
                    current = Some((upper, lower));
                }
                writer.queue(Print(HALF_BLOCK))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
