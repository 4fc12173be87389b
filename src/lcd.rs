use anyhow::{Context, Result};
use reflex_core::DisplaySink;
use std::io::Write;

pub const ROWS: usize = 2;

/// Character LCD emulation redrawn in place on a single terminal line.
///
/// Writing past the end of a row continues on the next row and wraps from the
/// last row back to the first, like the HD44780-style modules it stands in for.
pub struct LcdEmulator<W: Write> {
    columns: usize,
    cells: Vec<u8>,
    out: W,
}

impl<W: Write> LcdEmulator<W> {
    pub fn new(columns: usize, out: W) -> Self {
        Self {
            columns,
            cells: vec![b' '; ROWS * columns],
            out,
        }
    }

    pub fn row(&self, row: usize) -> String {
        let start = row * self.columns;
        self.cells[start..start + self.columns]
            .iter()
            .map(|&b| b as char)
            .collect()
    }

    fn redraw(&mut self) -> Result<()> {
        let frame = format!("\r\x1b[2K[{}|{}]", self.row(0), self.row(1));
        self.out
            .write_all(frame.as_bytes())
            .and_then(|_| self.out.flush())
            .context("drawing display")
    }
}

impl<W: Write> DisplaySink for LcdEmulator<W> {
    fn show(&mut self, text: &str, row: usize, col: usize) -> Result<()> {
        let cells = ROWS * self.columns;
        let mut pos = ((row % ROWS) * self.columns + col) % cells;
        for byte in text.bytes() {
            if byte == b'\n' || byte == b'\r' {
                continue;
            }
            self.cells[pos] = byte;
            pos = (pos + 1) % cells;
        }
        self.redraw()
    }

    fn clear(&mut self) -> Result<()> {
        self.cells.fill(b' ');
        self.redraw()
    }
}
