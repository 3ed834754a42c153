//! Interrupt Descriptor Table (IDT) setup
//!
//! This module provides:
//! - Exception handlers (breakpoint, page fault, double fault)
//! - The keyboard interrupt handler

use lazy_static::lazy_static;
use x86_64::{
    instructions::port::Port,
    structures::idt::{InterruptDescriptorTable, InterruptStackFrame, PageFaultErrorCode},
};

use crate::{
    constants::{gdt::DOUBLE_FAULT_IST_INDEX, idt::KEYBOARD_VECTOR, ports::KEYBOARD_DATA_PORT},
    devices::keyboard,
    interrupts::pic,
    prelude::*,
};

lazy_static! {
    /// The system's Interrupt Descriptor Table.
    static ref IDT: InterruptDescriptorTable = {
        let mut idt = InterruptDescriptorTable::new();
        idt.breakpoint.set_handler_fn(breakpoint_handler);
        idt.page_fault.set_handler_fn(page_fault_handler);
        unsafe {
            idt.double_fault
                .set_handler_fn(double_fault_handler)
                .set_stack_index(DOUBLE_FAULT_IST_INDEX);
        }
        idt[KEYBOARD_VECTOR].set_handler_fn(keyboard_handler);
        idt
    };
}

pub fn init_idt() {
    IDT.load();
}

/// Handles breakpoint exceptions by printing debug information.
extern "x86-interrupt" fn breakpoint_handler(stack_frame: InterruptStackFrame) {
    serial_println!("EXCEPTION: BREAKPOINT\n{:#?}", stack_frame);
}

/// Handles double fault exceptions by panicking with debug information.
extern "x86-interrupt" fn double_fault_handler(
    stack_frame: InterruptStackFrame,
    _error_code: u64,
) -> ! {
    panic!("EXCEPTION: DOUBLE FAULT\n{:#?}", stack_frame);
}

/// Page faults are fatal; there is no paging policy to recover with.
extern "x86-interrupt" fn page_fault_handler(
    stack_frame: InterruptStackFrame,
    error_code: PageFaultErrorCode,
) {
    use x86_64::registers::control::Cr2;

    serial_println!(
        "EXCEPTION: PAGE FAULT\nFaulting Address: {:?}\nError Code: {:?}\n{:#?}",
        Cr2::read(),
        error_code,
        stack_frame
    );
    panic!("PAGE FAULT!");
}

/// Acknowledges the controller before queueing, then returns at once.
/// Everything else about the key happens in the main loop.
extern "x86-interrupt" fn keyboard_handler(_stack_frame: InterruptStackFrame) {
    let scancode = unsafe { Port::<u8>::new(KEYBOARD_DATA_PORT).read() };
    pic::notify_end_of_interrupt(KEYBOARD_VECTOR);
    keyboard::push_scancode(scancode);
}
