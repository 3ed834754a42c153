//! CPU tables and the legacy interrupt controller.
//!
//! One core, one routinely armed interrupt line (the keyboard on IRQ1).

pub mod gdt;
pub mod idt;
pub mod pic;

use x86_64::instructions::interrupts;

use crate::devices::keyboard;

/// Loads the GDT and IDT and remaps the PICs. Interrupts stay disabled.
pub fn init() {
    gdt::init();
    idt::init_idt();
    pic::init();
}

/// Enables interrupts on the current CPU.
pub fn enable() {
    interrupts::enable();
}

/// Halts until the next interrupt unless a scancode is already waiting.
///
/// The check and the halt happen with interrupts disabled, and `sti; hlt`
/// takes effect atomically, so a scancode queued in between still wakes us.
pub fn idle() {
    interrupts::disable();
    if keyboard::has_pending() {
        interrupts::enable();
    } else {
        interrupts::enable_and_hlt();
    }
}
