//! Slot file system layout.

/// Sector holding the packed directory table
pub const DIRECTORY_SECTOR: u32 = 2;

/// Number of directory slots, and therefore the maximum file count
pub const DIRECTORY_SLOTS: usize = 25;

/// Slot `i` stores its data in sector `DATA_SECTOR_BASE + i`
pub const DATA_SECTOR_BASE: u32 = 10;

/// Packed record size: name[12] + sector u32 + active u32
pub const ENTRY_SIZE: usize = 20;

/// Width of the on-disk name field, terminator included
pub const NAME_FIELD_LEN: usize = 12;

/// Longest storable name
pub const MAX_NAME_LEN: usize = NAME_FIELD_LEN - 1;

/// Usable content bytes of a file; the rest of the sector is the terminator
pub const MAX_FILE_LEN: usize = 510;

/// On-disk value of the active flag for a live entry
pub const ENTRY_ACTIVE: u32 = 1;
