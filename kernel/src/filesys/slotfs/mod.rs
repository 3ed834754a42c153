//! Slot file system
//!
//! A fixed table of `DIRECTORY_SLOTS` named files, each exactly one sector
//! long. Slot `i` always stores its data in sector `DATA_SECTOR_BASE + i`, so
//! there is no allocator and no free list.
//!
//! Nothing here caches the table between calls. Every operation starts from
//! [`Directory::load`] and writes the whole table back before returning.

mod entry;

pub use entry::{validate_name, FileEntry};

use crate::constants::filesys::{
    DATA_SECTOR_BASE, DIRECTORY_SECTOR, DIRECTORY_SLOTS, ENTRY_SIZE,
};
use crate::filesys::{BlockDevice, FsError, Sector, SectorAddress, SECTOR_SIZE};
use crate::{debug, trace};

const TABLE_BYTES: usize = DIRECTORY_SLOTS * ENTRY_SIZE;

/// In-memory copy of the directory sector
#[derive(Debug, Clone)]
pub struct Directory {
    entries: [FileEntry; DIRECTORY_SLOTS],

    /// Bytes after the last record, written back untouched
    tail: [u8; SECTOR_SIZE - TABLE_BYTES],
}

impl Directory {
    /// Reads the directory sector into a fresh table
    pub fn load<D: BlockDevice>(device: &mut D) -> Result<Self, FsError> {
        let mut sector = [0u8; SECTOR_SIZE];
        device.read_block(DIRECTORY_SECTOR, &mut sector)?;

        let mut entries = [FileEntry::EMPTY; DIRECTORY_SLOTS];
        for (i, entry) in entries.iter_mut().enumerate() {
            let start = i * ENTRY_SIZE;
            let mut raw = [0u8; ENTRY_SIZE];
            raw.copy_from_slice(&sector[start..start + ENTRY_SIZE]);
            *entry = FileEntry::decode(&raw);
        }

        let mut tail = [0u8; SECTOR_SIZE - TABLE_BYTES];
        tail.copy_from_slice(&sector[TABLE_BYTES..]);

        trace!("Directory loaded from sector {}", DIRECTORY_SECTOR);
        Ok(Self { entries, tail })
    }

    /// Writes the table back to the directory sector
    pub fn save<D: BlockDevice>(&self, device: &mut D) -> Result<(), FsError> {
        let mut sector = [0u8; SECTOR_SIZE];
        for (i, entry) in self.entries.iter().enumerate() {
            let start = i * ENTRY_SIZE;
            let mut raw = [0u8; ENTRY_SIZE];
            entry.encode(&mut raw);
            sector[start..start + ENTRY_SIZE].copy_from_slice(&raw);
        }
        sector[TABLE_BYTES..].copy_from_slice(&self.tail);

        device.write_block(DIRECTORY_SECTOR, &sector)?;
        trace!("Directory saved to sector {}", DIRECTORY_SECTOR);
        Ok(())
    }

    pub fn entry(&self, index: usize) -> Option<&FileEntry> {
        self.entries.get(index)
    }

    /// Active entries in slot order
    pub fn active_entries(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter().filter(|entry| entry.active)
    }

    /// Linear scan; the first active entry with exactly this name wins.
    /// Duplicate names are possible and only the first one is reachable.
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.active && entry.matches(name))
    }

    /// Claims the first inactive slot for `name` and persists the table.
    ///
    /// The slot's data sector is zero-filled so the new file starts empty.
    pub fn allocate<D: BlockDevice>(&mut self, device: &mut D, name: &str) -> Result<usize, FsError> {
        let index = self
            .entries
            .iter()
            .position(|entry| !entry.active)
            .ok_or(FsError::DirectoryFull)?;

        let entry = FileEntry::new(name, DATA_SECTOR_BASE + index as SectorAddress)?;
        self.entries[index] = entry;
        self.save(device)?;
        device.write_block(entry.sector, &[0u8; SECTOR_SIZE])?;

        debug!(
            "Allocated slot {} for {:?} at sector {}",
            index,
            entry.name(),
            entry.sector
        );
        Ok(index)
    }

    /// Clears the active flag of slot `index` and persists the table
    pub fn free<D: BlockDevice>(&mut self, device: &mut D, index: usize) -> Result<(), FsError> {
        let entry = self.entries.get_mut(index).ok_or(FsError::NotFound)?;
        entry.active = false;
        self.save(device)?;
        debug!("Freed slot {}", index);
        Ok(())
    }

    /// Deactivates every slot and persists the table
    pub fn format<D: BlockDevice>(&mut self, device: &mut D) -> Result<(), FsError> {
        for entry in self.entries.iter_mut() {
            entry.active = false;
        }
        self.save(device)?;
        debug!("Directory formatted");
        Ok(())
    }
}

/// Loads the directory and returns the entry named `name`
pub fn lookup<D: BlockDevice>(device: &mut D, name: &str) -> Result<FileEntry, FsError> {
    let directory = Directory::load(device)?;
    directory
        .find_by_name(name)
        .and_then(|index| directory.entry(index))
        .copied()
        .ok_or(FsError::NotFound)
}

/// Reads the data sector of the file named `name`
pub fn read_file<D: BlockDevice>(device: &mut D, name: &str) -> Result<Sector, FsError> {
    let entry = lookup(device, name)?;
    let mut content = [0u8; SECTOR_SIZE];
    device.read_block(entry.sector, &mut content)?;
    Ok(content)
}

/// Creates a file, returning its slot
pub fn create<D: BlockDevice>(device: &mut D, name: &str) -> Result<usize, FsError> {
    validate_name(name)?;
    Directory::load(device)?.allocate(device, name)
}

/// Deactivates the first file named `name`
pub fn remove<D: BlockDevice>(device: &mut D, name: &str) -> Result<(), FsError> {
    let mut directory = Directory::load(device)?;
    let index = directory.find_by_name(name).ok_or(FsError::NotFound)?;
    directory.free(device, index)
}

/// Deactivates every file
pub fn format<D: BlockDevice>(device: &mut D) -> Result<(), FsError> {
    Directory::load(device)?.format(device)
}

/// File content: the bytes before the first terminator
pub fn file_text(content: &[u8]) -> &[u8] {
    let end = content.iter().position(|&b| b == 0).unwrap_or(content.len());
    &content[..end]
}
