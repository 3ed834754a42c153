//! Text console geometry and colour attributes.

pub const SCREEN_WIDTH: usize = 80;
pub const SCREEN_HEIGHT: usize = 25;
pub const SCREEN_CELLS: usize = SCREEN_WIDTH * SCREEN_HEIGHT;

/// Physical address of the VGA text buffer.
pub const VGA_BUFFER_PHYS: u64 = 0xB8000;

// Attribute bytes: high nibble background, low nibble foreground.
pub const COLOR_TEXT: u8 = 0x07;
pub const COLOR_SUCCESS: u8 = 0x0A;
pub const COLOR_INFO: u8 = 0x0B;
pub const COLOR_ERROR: u8 = 0x0C;
pub const COLOR_PROMPT: u8 = 0x0E;
pub const COLOR_BRIGHT: u8 = 0x0F;

/// Attribute used for blanked cells and keyboard echo.
pub const COLOR_DEFAULT: u8 = COLOR_BRIGHT;
