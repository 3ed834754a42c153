//! App loader.
//!
//! An app is whatever bytes start at a file's data sector. The loader copies
//! a fixed window of `APP_IMAGE_SECTORS` consecutive sectors, which runs past
//! the file into its neighbours' sectors, and jumps to the first byte. No
//! header, no checksum, no bounds on what the image does.

use crate::console::Console;
use crate::constants::apps::APP_IMAGE_SECTORS;
use crate::constants::console::{COLOR_BRIGHT, COLOR_PROMPT, COLOR_SUCCESS};
use crate::devices::vga::TextScreen;
use crate::filesys::slotfs::{self, FileEntry};
use crate::filesys::{BlockDevice, FsError, SectorAddress, SECTOR_SIZE};
use crate::platform::Platform;
use crate::{debug, info};

/// Copies the image starting at `entry`'s sector into `region`.
///
/// Returns the number of bytes loaded, which is the smaller of the image
/// window and the region.
pub fn load_image<D: BlockDevice>(
    disk: &mut D,
    entry: &FileEntry,
    region: &mut [u8],
) -> Result<usize, FsError> {
    let mut sector = [0u8; SECTOR_SIZE];
    let mut loaded = 0;

    for (i, chunk) in region
        .chunks_mut(SECTOR_SIZE)
        .take(APP_IMAGE_SECTORS)
        .enumerate()
    {
        let lba = entry
            .sector
            .checked_add(i as SectorAddress)
            .ok_or(FsError::IOError)?;
        disk.read_block(lba, &mut sector)?;
        chunk.copy_from_slice(&sector[..chunk.len()]);
        loaded += chunk.len();
    }

    debug!("Loaded {} bytes from sector {}", loaded, entry.sector);
    Ok(loaded)
}

/// Loads the app stored under `name` and runs it to completion.
///
/// Nothing is printed and nothing runs if the file does not exist.
pub fn launch<D, S, P>(
    disk: &mut D,
    console: &mut Console<S>,
    platform: &mut P,
    name: &str,
) -> Result<(), FsError>
where
    D: BlockDevice,
    S: TextScreen,
    P: Platform,
{
    let entry = slotfs::lookup(disk, name)?;

    let region = platform.app_region();
    load_image(disk, &entry, region)?;
    let entry_point = region.as_ptr() as u64;

    console.print("Launching ", COLOR_SUCCESS);
    console.print(name, COLOR_BRIGHT);
    console.print("...\n", COLOR_SUCCESS);

    info!("Entering app {:?} at {:#x}", name, entry_point);
    unsafe { platform.execute_foreign_code(entry_point) };
    info!("App {:?} returned", name);

    console.print("\nExited.\n", COLOR_PROMPT);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::apps::APP_IMAGE_SIZE;
    use crate::constants::filesys::DATA_SECTOR_BASE;
    use crate::devices::vga::MemoryScreen;
    use crate::filesys::block::MemoryBlockDevice;
    use crate::platform::testing::RecordingPlatform;

    type Disk = MemoryBlockDevice<64>;

    #[test]
    fn test_load_image_reads_fixed_window() {
        let mut disk = Disk::new();
        let mut image = vec![0u8; APP_IMAGE_SIZE + SECTOR_SIZE];
        for (i, byte) in image.iter_mut().enumerate() {
            *byte = (i / SECTOR_SIZE) as u8 + 1;
        }
        disk.install(DATA_SECTOR_BASE, &image).unwrap();
        let entry = FileEntry::new("game", DATA_SECTOR_BASE).unwrap();

        let mut region = [0u8; APP_IMAGE_SIZE];
        assert_eq!(load_image(&mut disk, &entry, &mut region), Ok(APP_IMAGE_SIZE));
        assert_eq!(region[0], 1);
        assert_eq!(region[APP_IMAGE_SIZE - 1], APP_IMAGE_SECTORS as u8);
    }

    #[test]
    fn test_load_image_past_end_of_disk_fails() {
        let mut disk = MemoryBlockDevice::<16>::new();
        let entry = FileEntry::new("late", 10).unwrap();
        let mut region = [0u8; APP_IMAGE_SIZE];
        assert_eq!(load_image(&mut disk, &entry, &mut region), Err(FsError::IOError));
    }

    #[test]
    fn test_launch_runs_loaded_image() {
        let mut disk = Disk::new();
        slotfs::create(&mut disk, "game.link").unwrap();
        disk.install(DATA_SECTOR_BASE, &[0x90, 0xC3]).unwrap();
        let mut console = Console::new(MemoryScreen::new());
        let mut platform = RecordingPlatform::new();

        launch(&mut disk, &mut console, &mut platform, "game.link").unwrap();

        assert_eq!(platform.launches.len(), 1);
        assert_eq!(&platform.images[0][..2], &[0x90, 0xC3]);
        let screen = console.screen();
        assert_eq!(screen.row_text(0).as_str(), "Launching game.link...");
        assert_eq!(screen.row_text(2).as_str(), "Exited.");
    }

    #[test]
    fn test_missing_app_never_runs() {
        let mut disk = Disk::new();
        let mut console = Console::new(MemoryScreen::new());
        let mut platform = RecordingPlatform::new();

        assert_eq!(
            launch(&mut disk, &mut console, &mut platform, "nope.link"),
            Err(FsError::NotFound)
        );
        assert!(platform.launches.is_empty());
        assert_eq!(console.screen().row_text(0).as_str(), "");
    }
}
