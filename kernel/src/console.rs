//! Cursor-tracking text output on top of a [`TextScreen`].
//!
//! Every write lands in the grid immediately. The cursor never leaves the
//! grid: reaching column 80 wraps to the next row, and reaching row 25
//! scrolls the grid up one row and pins the cursor to the last row.

use crate::constants::console::{SCREEN_CELLS, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::devices::vga::{cell, TextScreen, BLANK_CELL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub x: usize,
    pub y: usize,
}

impl Cursor {
    pub const ORIGIN: Cursor = Cursor { x: 0, y: 0 };

    fn index(&self) -> usize {
        self.y * SCREEN_WIDTH + self.x
    }
}

pub struct Console<S: TextScreen> {
    screen: S,
    cursor: Cursor,
}

impl<S: TextScreen> Console<S> {
    pub fn new(screen: S) -> Self {
        Self {
            screen,
            cursor: Cursor::ORIGIN,
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Moves the cursor, clamped to the grid
    #[cfg(test)]
    pub fn set_cursor(&mut self, x: usize, y: usize) {
        self.cursor = Cursor {
            x: x.min(SCREEN_WIDTH - 1),
            y: y.min(SCREEN_HEIGHT - 1),
        };
        self.sync_hardware_cursor();
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    /// Writes one cell without touching the cursor. Off-grid positions are dropped.
    pub fn write_char(&mut self, x: usize, y: usize, ch: u8, attr: u8) {
        if x < SCREEN_WIDTH && y < SCREEN_HEIGHT {
            self.screen.write_cell(y * SCREEN_WIDTH + x, cell(ch, attr));
        }
    }

    pub fn erase(&mut self, x: usize, y: usize) {
        if x < SCREEN_WIDTH && y < SCREEN_HEIGHT {
            self.screen.write_cell(y * SCREEN_WIDTH + x, BLANK_CELL);
        }
    }

    /// Draws at the cursor and advances it
    pub fn put_char(&mut self, ch: u8, attr: u8) {
        self.write_char(self.cursor.x, self.cursor.y, ch, attr);
        self.cursor.x += 1;
        self.settle();
    }

    pub fn newline(&mut self) {
        self.cursor.x = 0;
        self.line_feed();
    }

    fn line_feed(&mut self) {
        self.cursor.y += 1;
        if self.cursor.y >= SCREEN_HEIGHT {
            self.scroll();
            self.cursor.y = SCREEN_HEIGHT - 1;
        }
    }

    pub fn print(&mut self, text: &str, attr: u8) {
        self.print_bytes(text.as_bytes(), attr);
    }

    pub fn print_bytes(&mut self, bytes: &[u8], attr: u8) {
        for &byte in bytes {
            match byte {
                b'\n' => self.newline(),
                _ => self.put_char(byte, attr),
            }
        }
        self.sync_hardware_cursor();
    }

    pub fn clear_screen(&mut self) {
        for index in 0..SCREEN_CELLS {
            self.screen.write_cell(index, BLANK_CELL);
        }
        self.cursor = Cursor::ORIGIN;
        self.sync_hardware_cursor();
    }

    /// Shifts every row up by one and blanks the last row
    pub fn scroll(&mut self) {
        for index in SCREEN_WIDTH..SCREEN_CELLS {
            let value = self.screen.read_cell(index);
            self.screen.write_cell(index - SCREEN_WIDTH, value);
        }
        for index in SCREEN_CELLS - SCREEN_WIDTH..SCREEN_CELLS {
            self.screen.write_cell(index, BLANK_CELL);
        }
    }

    /// Steps the cursor back one cell, crossing to the end of the previous
    /// row at column 0 but never above `top_row`. Returns whether it moved.
    ///
    /// Only the grid is considered: stepping back over a newline the editor
    /// stored lands on column 79 of the row above, not where the line ended.
    pub fn step_back(&mut self, top_row: usize) -> bool {
        if self.cursor.x > 0 {
            self.cursor.x -= 1;
        } else if self.cursor.y > top_row {
            self.cursor.y -= 1;
            self.cursor.x = SCREEN_WIDTH - 1;
        } else {
            return false;
        }
        true
    }

    /// Restores the cursor invariants after a mutation and reprograms the
    /// hardware cursor to match.
    pub fn settle(&mut self) {
        if self.cursor.x >= SCREEN_WIDTH {
            self.cursor.x = 0;
            self.line_feed();
        }
        if self.cursor.y >= SCREEN_HEIGHT {
            self.scroll();
            self.cursor.y = SCREEN_HEIGHT - 1;
        }
        self.sync_hardware_cursor();
    }

    pub fn sync_hardware_cursor(&mut self) {
        let position = self.cursor.index();
        self.screen.move_cursor(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::vga::MemoryScreen;

    fn console() -> Console<MemoryScreen> {
        Console::new(MemoryScreen::new())
    }

    #[test]
    fn test_print_wraps_at_last_column() {
        let mut console = console();
        for _ in 0..SCREEN_WIDTH {
            console.put_char(b'x', 0x07);
            assert!(console.cursor().x < SCREEN_WIDTH);
        }
        assert_eq!(console.cursor(), Cursor { x: 0, y: 1 });
    }

    #[test]
    fn test_scroll_pins_last_row() {
        let mut console = console();
        console.print("top\n", 0x07);
        for _ in 0..SCREEN_HEIGHT {
            console.print("line\n", 0x07);
            assert!(console.cursor().y < SCREEN_HEIGHT);
        }
        assert_eq!(console.cursor().y, SCREEN_HEIGHT - 1);
        assert_eq!(console.screen().row_text(0).as_str(), "line");
        assert_eq!(console.screen().row_text(SCREEN_HEIGHT - 1).as_str(), "");
    }

    #[test]
    fn test_filling_the_grid_scrolls_once_per_row() {
        let mut console = console();
        for _ in 0..SCREEN_CELLS {
            console.put_char(b'#', 0x07);
        }
        assert_eq!(console.cursor(), Cursor { x: 0, y: SCREEN_HEIGHT - 1 });
        assert_eq!(console.screen().row_text(SCREEN_HEIGHT - 2).len(), SCREEN_WIDTH);
        assert_eq!(console.screen().row_text(SCREEN_HEIGHT - 1).as_str(), "");
    }

    #[test]
    fn test_hardware_cursor_follows_print() {
        let mut console = console();
        console.print("ab\ncd", 0x07);
        assert_eq!(console.screen().cursor_position(), SCREEN_WIDTH + 2);
    }

    #[test]
    fn test_clear_screen_resets_cursor() {
        let mut console = console();
        console.print("hello\nworld", 0x0A);
        console.clear_screen();
        assert_eq!(console.cursor(), Cursor::ORIGIN);
        assert_eq!(console.screen().row_text(0).as_str(), "");
        assert_eq!(console.screen().cursor_position(), 0);
    }

    #[test]
    fn test_step_back_respects_top_row() {
        let mut console = console();
        console.set_cursor(0, 4);
        assert!(console.step_back(3));
        assert_eq!(console.cursor(), Cursor { x: SCREEN_WIDTH - 1, y: 3 });

        console.set_cursor(0, 3);
        assert!(!console.step_back(3));
        assert_eq!(console.cursor(), Cursor { x: 0, y: 3 });
    }
}
