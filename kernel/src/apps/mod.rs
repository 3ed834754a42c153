//! Flat-binary apps: loading an image from the slot file system and running it.

#[cfg(target_os = "none")]
pub mod call_gate;
pub mod loader;

pub use loader::{launch, load_image};
