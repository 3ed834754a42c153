//! Chained 8259 PICs, remapped above the CPU exception vectors.

use pic8259::ChainedPics;
use spin::Mutex;
use x86_64::instructions::interrupts::without_interrupts;

use crate::constants::idt::{PIC_1_KEYBOARD_ONLY, PIC_1_OFFSET, PIC_2_ALL_MASKED, PIC_2_OFFSET};

pub static PICS: Mutex<ChainedPics> =
    Mutex::new(unsafe { ChainedPics::new(PIC_1_OFFSET, PIC_2_OFFSET) });

const IRQ1_MASK_BIT: u8 = 1 << 1;

/// Remaps both controllers and opens only the keyboard line
pub fn init() {
    let mut pics = PICS.lock();
    unsafe {
        pics.initialize();
        pics.write_masks(PIC_1_KEYBOARD_ONLY, PIC_2_ALL_MASKED);
    }
}

pub fn notify_end_of_interrupt(vector: u8) {
    unsafe { PICS.lock().notify_end_of_interrupt(vector) };
}

// The keyboard handler takes this lock too, so the main loop only holds it
// with interrupts off.

/// Closes IRQ1 and returns the masks it replaced
pub fn mask_keyboard() -> [u8; 2] {
    without_interrupts(|| {
        let mut pics = PICS.lock();
        unsafe {
            let saved = pics.read_masks();
            pics.write_masks(saved[0] | IRQ1_MASK_BIT, saved[1]);
            saved
        }
    })
}

pub fn restore_masks(saved: [u8; 2]) {
    without_interrupts(|| unsafe { PICS.lock().write_masks(saved[0], saved[1]) });
}
