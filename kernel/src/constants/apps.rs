//! App image placement.

/// Physical address apps are copied to and entered at.
pub const APP_LOAD_ADDRESS: u64 = 0x20000;

/// Sectors read for every launch, regardless of the image's real size.
pub const APP_IMAGE_SECTORS: usize = 12;

pub const APP_IMAGE_SIZE: usize = APP_IMAGE_SECTORS * super::disk::SECTOR_SIZE;
