//! ATA PIO protocol values.

/// Size of a disk sector in bytes
pub const SECTOR_SIZE: usize = 512;

/// A sector moves across the data port as this many 16-bit words
pub const WORDS_PER_SECTOR: usize = SECTOR_SIZE / 2;

/// Drive/head value selecting the master device in LBA mode.
/// The low nibble carries LBA bits 24..28.
pub const DRIVE_MASTER_LBA: u8 = 0xE0;

pub const CMD_READ_SECTORS: u8 = 0x20;
pub const CMD_WRITE_SECTORS: u8 = 0x30;
pub const CMD_CACHE_FLUSH: u8 = 0xE7;

pub const STATUS_ERR: u8 = 0x01;
pub const STATUS_DRQ: u8 = 0x08;
pub const STATUS_BSY: u8 = 0x80;
