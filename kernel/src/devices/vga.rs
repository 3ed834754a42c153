//! Text-mode character grid.
//!
//! The console draws through [`TextScreen`], which is either the memory-mapped
//! VGA buffer or an in-memory grid for tests and the hosted runner.

use arrayvec::ArrayString;
use core::ptr::{read_volatile, write_volatile};
use x86_64::instructions::port::PortWriteOnly;

use crate::constants::console::{COLOR_DEFAULT, SCREEN_CELLS, SCREEN_WIDTH};
use crate::constants::ports::{CRTC_CURSOR_HIGH, CRTC_CURSOR_LOW, CRTC_DATA_PORT, CRTC_INDEX_PORT};

/// Packs a character and its attribute into one grid cell
pub const fn cell(ch: u8, attr: u8) -> u16 {
    (ch as u16) | ((attr as u16) << 8)
}

pub const BLANK_CELL: u16 = cell(b' ', COLOR_DEFAULT);

/// An 80x25 grid of 16-bit cells addressed in row-major order.
pub trait TextScreen {
    fn write_cell(&mut self, index: usize, value: u16);
    fn read_cell(&self, index: usize) -> u16;

    /// Programs the blinking hardware cursor to a row-major cell index
    fn move_cursor(&mut self, position: usize);
}

/// The legacy VGA text buffer.
pub struct VgaTextBuffer {
    base: *mut u16,
    crtc_index: PortWriteOnly<u8>,
    crtc_data: PortWriteOnly<u8>,
}

// The buffer is only ever reached through the kernel's single shell.
unsafe impl Send for VgaTextBuffer {}

impl VgaTextBuffer {
    /// # Safety
    /// `base` must point at a mapped, writable text buffer of `SCREEN_CELLS`
    /// cells that nothing else writes to.
    pub unsafe fn new(base: *mut u16) -> Self {
        Self {
            base,
            crtc_index: PortWriteOnly::new(CRTC_INDEX_PORT),
            crtc_data: PortWriteOnly::new(CRTC_DATA_PORT),
        }
    }
}

impl TextScreen for VgaTextBuffer {
    fn write_cell(&mut self, index: usize, value: u16) {
        if index < SCREEN_CELLS {
            unsafe { write_volatile(self.base.add(index), value) };
        }
    }

    fn read_cell(&self, index: usize) -> u16 {
        if index < SCREEN_CELLS {
            unsafe { read_volatile(self.base.add(index)) }
        } else {
            BLANK_CELL
        }
    }

    fn move_cursor(&mut self, position: usize) {
        let position = position as u16;
        unsafe {
            self.crtc_index.write(CRTC_CURSOR_LOW);
            self.crtc_data.write((position & 0xFF) as u8);
            self.crtc_index.write(CRTC_CURSOR_HIGH);
            self.crtc_data.write((position >> 8) as u8);
        }
    }
}

/// Off-screen grid with the same geometry as the VGA buffer.
pub struct MemoryScreen {
    cells: [u16; SCREEN_CELLS],
    cursor: usize,
}

impl MemoryScreen {
    pub const fn new() -> Self {
        Self {
            cells: [BLANK_CELL; SCREEN_CELLS],
            cursor: 0,
        }
    }

    /// Last position given to `move_cursor`
    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Characters of one row, trailing blanks removed
    pub fn row_text(&self, row: usize) -> ArrayString<SCREEN_WIDTH> {
        let mut text = ArrayString::new();
        let start = row * SCREEN_WIDTH;
        if let Some(cells) = self.cells.get(start..start + SCREEN_WIDTH) {
            for &value in cells {
                let ch = (value & 0xFF) as u8;
                let ch = if ch.is_ascii_graphic() { ch as char } else { ' ' };
                text.push(ch);
            }
        }
        let trimmed = text.trim_end().len();
        text.truncate(trimmed);
        text
    }

    #[cfg(test)]
    pub fn attribute_at(&self, index: usize) -> Option<u8> {
        self.cells.get(index).map(|value| (value >> 8) as u8)
    }
}

impl Default for MemoryScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl TextScreen for MemoryScreen {
    fn write_cell(&mut self, index: usize, value: u16) {
        if let Some(slot) = self.cells.get_mut(index) {
            *slot = value;
        }
    }

    fn read_cell(&self, index: usize) -> u16 {
        self.cells.get(index).copied().unwrap_or(BLANK_CELL)
    }

    fn move_cursor(&mut self, position: usize) {
        self.cursor = position;
    }
}
