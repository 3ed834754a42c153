//! I/O port definitions.

/// Base I/O port address for the first serial port (COM1).
pub const SERIAL_PORT: u16 = 0x3F8;

/// PS/2 controller data port, where keyboard scancodes are read.
pub const KEYBOARD_DATA_PORT: u16 = 0x60;
/// PS/2 controller command port.
pub const KEYBOARD_COMMAND_PORT: u16 = 0x64;
/// Controller command that pulses the CPU reset line.
pub const KEYBOARD_RESET_COMMAND: u8 = 0xFE;

/// VGA CRT controller index register.
pub const CRTC_INDEX_PORT: u16 = 0x3D4;
/// VGA CRT controller data register.
pub const CRTC_DATA_PORT: u16 = 0x3D5;
/// CRTC register holding the high byte of the cursor location.
pub const CRTC_CURSOR_HIGH: u8 = 0x0E;
/// CRTC register holding the low byte of the cursor location.
pub const CRTC_CURSOR_LOW: u8 = 0x0F;

// Primary ATA bus
pub const ATA_DATA: u16 = 0x1F0;
pub const ATA_SECTOR_COUNT: u16 = 0x1F2;
pub const ATA_LBA_LOW: u16 = 0x1F3;
pub const ATA_LBA_MID: u16 = 0x1F4;
pub const ATA_LBA_HIGH: u16 = 0x1F5;
pub const ATA_DRIVE_HEAD: u16 = 0x1F6;
/// Status when read, command when written.
pub const ATA_STATUS: u16 = 0x1F7;
pub const ATA_COMMAND: u16 = 0x1F7;
