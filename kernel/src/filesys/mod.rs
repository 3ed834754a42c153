use core::fmt;
use core::result::Result;

pub mod block;
pub mod slotfs;

pub use crate::constants::disk::SECTOR_SIZE;

/// Logical block number; the disk's only addressable unit is one sector
pub type SectorAddress = u32;

/// One sector worth of bytes
pub type Sector = [u8; SECTOR_SIZE];

// Define error types for the filesystem operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsError {
    NotFound,
    DirectoryFull,
    InvalidName,
    IOError,
}

impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            FsError::NotFound => "file not found",
            FsError::DirectoryFull => "directory full",
            FsError::InvalidName => "invalid file name",
            FsError::IOError => "disk I/O error",
        };
        f.write_str(msg)
    }
}

/// Represents a block device that can be read from and written to
/// one whole sector at a time
pub trait BlockDevice {
    fn read_block(&mut self, sector: SectorAddress, buf: &mut Sector) -> Result<(), FsError>;
    fn write_block(&mut self, sector: SectorAddress, buf: &Sector) -> Result<(), FsError>;
}
