//! Port-mapped I/O primitives.
//!
//! Drivers that speak a register protocol take a [`PortIo`] rather than
//! touching ports directly, which lets tests stand a simulated device behind
//! the same calls.

use x86_64::instructions::{interrupts, port::Port};

pub trait PortIo {
    fn read_u8(&mut self, port: u16) -> u8;
    fn write_u8(&mut self, port: u16, value: u8);
    fn read_u16(&mut self, port: u16) -> u16;
    fn write_u16(&mut self, port: u16, value: u16);

    /// Masks maskable interrupts on the current CPU.
    fn mask_interrupts(&mut self);

    /// Unmasks maskable interrupts, whatever their state was before.
    fn unmask_interrupts(&mut self);
}

/// The real port space of the machine.
#[derive(Debug, Default, Clone, Copy)]
pub struct HardwarePorts;

impl PortIo for HardwarePorts {
    fn read_u8(&mut self, port: u16) -> u8 {
        unsafe { Port::<u8>::new(port).read() }
    }

    fn write_u8(&mut self, port: u16, value: u8) {
        unsafe { Port::<u8>::new(port).write(value) }
    }

    fn read_u16(&mut self, port: u16) -> u16 {
        unsafe { Port::<u16>::new(port).read() }
    }

    fn write_u16(&mut self, port: u16, value: u16) {
        unsafe { Port::<u16>::new(port).write(value) }
    }

    fn mask_interrupts(&mut self) {
        interrupts::disable();
    }

    fn unmask_interrupts(&mut self) {
        interrupts::enable();
    }
}
