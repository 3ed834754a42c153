//! Platform for running the kernel as an ordinary host process.

use crate::constants::apps::APP_IMAGE_SIZE;
use crate::platform::Platform;
use crate::warn;

/// Apps are loaded but never run; a reset only raises a flag for the runner.
pub struct HostedPlatform {
    region: [u8; APP_IMAGE_SIZE],
    reset_requested: bool,
}

impl HostedPlatform {
    pub const fn new() -> Self {
        Self {
            region: [0; APP_IMAGE_SIZE],
            reset_requested: false,
        }
    }

    pub fn reset_requested(&self) -> bool {
        self.reset_requested
    }
}

impl Default for HostedPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for HostedPlatform {
    fn app_region(&mut self) -> &mut [u8] {
        &mut self.region
    }

    unsafe fn execute_foreign_code(&mut self, entry_point: u64) {
        warn!("Not executing foreign code at {:#x} on a hosted build", entry_point);
    }

    fn reset(&mut self) {
        self.reset_requested = true;
    }
}
