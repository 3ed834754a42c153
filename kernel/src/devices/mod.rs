//! Hardware device drivers.
//!
//! - `port`: port I/O primitives shared by the register-level drivers
//! - `ata`: polled ATA PIO disk on the primary master
//! - `vga`: text-mode character grid and hardware cursor
//! - `keyboard`: scancode translation and the interrupt queue
//! - `serial`: COM1, used for logging

pub mod ata;
pub mod keyboard;
pub mod port;
pub mod serial;
pub mod vga;
