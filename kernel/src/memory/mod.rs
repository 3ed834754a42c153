//! Physical memory access through the bootloader's direct map.

#[cfg(target_os = "none")]
pub mod heap;

#[cfg(target_os = "none")]
pub use boot::*;

/// Whether `start..start + len` lies entirely inside one `(base, length)` region
pub fn range_within<I>(regions: I, start: u64, len: u64) -> bool
where
    I: IntoIterator<Item = (u64, u64)>,
{
    let Some(end) = start.checked_add(len) else {
        return false;
    };
    regions.into_iter().any(|(base, length)| {
        base <= start && base.checked_add(length).is_some_and(|top| end <= top)
    })
}

#[cfg(target_os = "none")]
mod boot {
    use lazy_static::lazy_static;
    use limine::memory_map::EntryType;
    use limine::request::{HhdmRequest, MemoryMapRequest};
    use x86_64::VirtAddr;

    use crate::constants::apps::{APP_IMAGE_SIZE, APP_LOAD_ADDRESS};

    #[used]
    #[link_section = ".requests"]
    pub static HHDM_REQUEST: HhdmRequest = HhdmRequest::new();

    #[used]
    #[link_section = ".requests"]
    pub static MEMORY_MAP_REQUEST: MemoryMapRequest = MemoryMapRequest::new();

    lazy_static! {
        pub static ref HHDM_OFFSET: VirtAddr = VirtAddr::new(
            HHDM_REQUEST
                .get_response()
                .expect("HHDM request failed")
                .offset()
        );
    }

    /// Virtual address of physical address `phys` in the higher-half direct map
    pub fn phys_to_virt(phys: u64) -> VirtAddr {
        *HHDM_OFFSET + phys
    }

    /// Whether the app load window is RAM the bootloader handed over as usable.
    /// Reclaimable bootloader memory still holds the boot stack, so it does
    /// not count.
    pub fn app_window_is_usable() -> bool {
        let memory_map = MEMORY_MAP_REQUEST
            .get_response()
            .expect("Memory map request failed");
        let usable = memory_map
            .entries()
            .iter()
            .filter(|entry| entry.entry_type == EntryType::USABLE)
            .map(|entry| (entry.base, entry.length));
        super::range_within(usable, APP_LOAD_ADDRESS, APP_IMAGE_SIZE as u64)
    }
}
