//! Boot-time bring-up for the single core.

use limine::{
    request::{RequestsEndMarker, RequestsStartMarker},
    BaseRevision,
};

use crate::{devices::keyboard, info, interrupts, logging, memory};

#[used]
#[link_section = ".requests"]
static BASE_REVISION: BaseRevision = BaseRevision::new();

#[used]
#[link_section = ".requests_start_marker"]
static _START_MARKER: RequestsStartMarker = RequestsStartMarker::new();

#[used]
#[link_section = ".requests_end_marker"]
static _END_MARKER: RequestsEndMarker = RequestsEndMarker::new();

/// Status lines shown under the boot banner, one per finished phase
pub const BOOT_STATUS: [&str; 3] = [
    "Interrupt tables loaded.",
    "PIC remapped, keyboard line open.",
    "ATA disk driver ready.",
];

/// Prepares everything the shell needs. Interrupts are left disabled; the
/// caller enables them once the shell is drawn.
pub fn init() {
    assert!(BASE_REVISION.is_supported());

    logging::init();
    info!("Booting...");

    interrupts::init();
    info!("GDT, IDT and PICs initialized");

    keyboard::init_queue();
    info!("Scancode queue allocated");

    assert!(
        memory::app_window_is_usable(),
        "App load window is not usable RAM"
    );
}
