//! In-memory block device implementation

use crate::filesys::{BlockDevice, FsError, Sector, SectorAddress, SECTOR_SIZE};
use core::result::Result;

/// Block device that stores `N` sectors in a fixed array
pub struct MemoryBlockDevice<const N: usize> {
    blocks: [Sector; N],

    /// Completed sector writes, for callers that care about disk traffic
    writes: usize,
}

impl<const N: usize> MemoryBlockDevice<N> {
    /// Creates a zero-filled device
    pub const fn new() -> Self {
        Self {
            blocks: [[0; SECTOR_SIZE]; N],
            writes: 0,
        }
    }

    /// Validates block number is within bounds
    fn validate_block(sector: SectorAddress) -> Result<usize, FsError> {
        let index = sector as usize;
        if index >= N {
            return Err(FsError::IOError);
        }
        Ok(index)
    }

    /// Raw view of a sector, bypassing the counters
    #[cfg(test)]
    pub fn sector(&self, sector: SectorAddress) -> Option<&Sector> {
        self.blocks.get(sector as usize)
    }

    /// Overwrites part of the image starting at `sector`, spilling into the
    /// following sectors. Used to place app images and seed test disks.
    #[cfg(test)]
    pub fn install(&mut self, sector: SectorAddress, data: &[u8]) -> Result<(), FsError> {
        for (i, chunk) in data.chunks(SECTOR_SIZE).enumerate() {
            let index = Self::validate_block(sector + i as SectorAddress)?;
            self.blocks[index][..chunk.len()].copy_from_slice(chunk);
        }
        Ok(())
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl<const N: usize> Default for MemoryBlockDevice<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> BlockDevice for MemoryBlockDevice<N> {
    /// Reads block into buffer
    fn read_block(&mut self, sector: SectorAddress, buf: &mut Sector) -> Result<(), FsError> {
        let index = Self::validate_block(sector)?;
        buf.copy_from_slice(&self.blocks[index]);
        Ok(())
    }

    /// Writes buffer to block
    fn write_block(&mut self, sector: SectorAddress, buf: &Sector) -> Result<(), FsError> {
        let index = Self::validate_block(sector)?;
        self.blocks[index].copy_from_slice(buf);
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_back_written_sector() {
        let mut device = MemoryBlockDevice::<4>::new();
        let mut data = [0u8; SECTOR_SIZE];
        data[0] = 0xAB;
        data[511] = 0xCD;
        device.write_block(3, &data).unwrap();

        let mut out = [0u8; SECTOR_SIZE];
        device.read_block(3, &mut out).unwrap();
        assert_eq!(out, data);
        assert_eq!(device.writes(), 1);
    }

    #[test]
    fn test_out_of_range_sector_is_io_error() {
        let mut device = MemoryBlockDevice::<4>::new();
        let mut buf = [0u8; SECTOR_SIZE];
        assert_eq!(device.read_block(4, &mut buf), Err(FsError::IOError));
        assert_eq!(device.write_block(100, &buf), Err(FsError::IOError));
    }

    #[test]
    fn test_install_spans_sectors() {
        let mut device = MemoryBlockDevice::<4>::new();
        let image = [0x5Au8; SECTOR_SIZE + 10];
        device.install(1, &image).unwrap();

        assert!(device.sector(1).unwrap().iter().all(|&b| b == 0x5A));
        assert_eq!(&device.sector(2).unwrap()[..10], &[0x5A; 10]);
        assert_eq!(device.sector(2).unwrap()[10], 0);
        assert_eq!(device.install(3, &image), Err(FsError::IOError));
    }
}
