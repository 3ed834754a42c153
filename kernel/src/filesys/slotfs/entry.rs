//! Directory record and its packed on-disk form

use crate::constants::filesys::{ENTRY_ACTIVE, ENTRY_SIZE, MAX_NAME_LEN, NAME_FIELD_LEN};
use crate::filesys::{FsError, SectorAddress};

const SECTOR_FIELD: usize = NAME_FIELD_LEN;
const ACTIVE_FIELD: usize = NAME_FIELD_LEN + 4;

/// One slot of the directory table.
///
/// On disk this is 20 packed little-endian bytes: a NUL-padded name,
/// the data sector, and the active flag as a `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileEntry {
    /// NUL-padded name, at most `MAX_NAME_LEN` bytes before the terminator
    name: [u8; NAME_FIELD_LEN],

    /// Sector holding the file's content
    pub sector: SectorAddress,

    /// Inactive slots are free for reuse; their other fields are stale
    pub active: bool,
}

impl FileEntry {
    pub const EMPTY: FileEntry = FileEntry {
        name: [0; NAME_FIELD_LEN],
        sector: 0,
        active: false,
    };

    /// Creates an active entry, truncating `name` to `MAX_NAME_LEN` bytes
    pub fn new(name: &str, sector: SectorAddress) -> Result<Self, FsError> {
        validate_name(name)?;

        let mut entry = Self {
            name: [0; NAME_FIELD_LEN],
            sector,
            active: true,
        };
        let name_bytes = name.as_bytes();
        let len = name_bytes.len().min(MAX_NAME_LEN);
        entry.name[..len].copy_from_slice(&name_bytes[..len]);
        Ok(entry)
    }

    /// Name bytes up to the first terminator
    pub fn name_bytes(&self) -> &[u8] {
        let end = self
            .name
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(NAME_FIELD_LEN);
        &self.name[..end]
    }

    /// Returns the name as a string, or an empty string for garbage bytes
    pub fn name(&self) -> &str {
        core::str::from_utf8(self.name_bytes()).unwrap_or("")
    }

    /// Exact, length-sensitive comparison
    pub fn matches(&self, name: &str) -> bool {
        self.name_bytes() == name.as_bytes()
    }

    pub fn decode(raw: &[u8; ENTRY_SIZE]) -> Self {
        let mut name = [0; NAME_FIELD_LEN];
        name.copy_from_slice(&raw[..NAME_FIELD_LEN]);

        let sector = u32::from_le_bytes([
            raw[SECTOR_FIELD],
            raw[SECTOR_FIELD + 1],
            raw[SECTOR_FIELD + 2],
            raw[SECTOR_FIELD + 3],
        ]);
        let active = u32::from_le_bytes([
            raw[ACTIVE_FIELD],
            raw[ACTIVE_FIELD + 1],
            raw[ACTIVE_FIELD + 2],
            raw[ACTIVE_FIELD + 3],
        ]);

        Self {
            name,
            sector,
            active: active == ENTRY_ACTIVE,
        }
    }

    pub fn encode(&self, raw: &mut [u8; ENTRY_SIZE]) {
        raw[..NAME_FIELD_LEN].copy_from_slice(&self.name);
        raw[SECTOR_FIELD..ACTIVE_FIELD].copy_from_slice(&self.sector.to_le_bytes());
        let active = if self.active { ENTRY_ACTIVE } else { 0 };
        raw[ACTIVE_FIELD..].copy_from_slice(&active.to_le_bytes());
    }
}

impl Default for FileEntry {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Names are a single printable token.
pub fn validate_name(name: &str) -> Result<(), FsError> {
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_graphic()) {
        return Err(FsError::InvalidName);
    }
    Ok(())
}
