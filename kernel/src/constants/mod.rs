//! System-wide constants and hardware-specific values.

pub mod apps;
pub mod console;
pub mod disk;
pub mod filesys;
pub mod gdt;
pub mod idt;
pub mod memory;
pub mod ports;
pub mod shell;
