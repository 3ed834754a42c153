//! Block device backends other than the ATA driver

pub mod memory;

pub use memory::MemoryBlockDevice;
