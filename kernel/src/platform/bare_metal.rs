use core::slice;

use x86_64::instructions::port::Port;

use crate::apps::call_gate::call_with_saved_registers;
use crate::constants::apps::{APP_IMAGE_SIZE, APP_LOAD_ADDRESS};
use crate::constants::ports::{KEYBOARD_COMMAND_PORT, KEYBOARD_RESET_COMMAND};
use crate::interrupts::pic;
use crate::memory::phys_to_virt;
use crate::platform::Platform;
use crate::{idle_loop, info};

/// The real machine: physical load window, direct calls, controller reset.
pub struct BareMetal {
    _private: (),
}

impl BareMetal {
    /// # Safety
    /// Only one instance may exist, and the physical range
    /// `APP_LOAD_ADDRESS..APP_LOAD_ADDRESS + APP_IMAGE_SIZE` must be usable
    /// RAM owned by nobody else.
    pub unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl Platform for BareMetal {
    fn app_region(&mut self) -> &mut [u8] {
        let base = phys_to_virt(APP_LOAD_ADDRESS).as_mut_ptr::<u8>();
        unsafe { slice::from_raw_parts_mut(base, APP_IMAGE_SIZE) }
    }

    unsafe fn execute_foreign_code(&mut self, entry_point: u64) {
        // The app owns the keyboard while it runs and polls the controller
        // itself, so IRQ1 stays closed until it returns.
        let saved = pic::mask_keyboard();
        call_with_saved_registers(entry_point);
        pic::restore_masks(saved);
    }

    fn reset(&mut self) {
        info!("Pulsing reset line through the keyboard controller");
        unsafe { Port::<u8>::new(KEYBOARD_COMMAND_PORT).write(KEYBOARD_RESET_COMMAND) };
        idle_loop();
    }
}
