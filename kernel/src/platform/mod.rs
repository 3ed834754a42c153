//! Machine-level capabilities the shell needs but cannot express portably:
//! the app load window, transferring control into it, and rebooting.

#[cfg(target_os = "none")]
pub mod bare_metal;
#[cfg(not(target_os = "none"))]
pub mod hosted;

pub trait Platform {
    /// Memory apps are loaded into; its first byte is the entry point
    fn app_region(&mut self) -> &mut [u8];

    /// Calls `entry_point` as a routine taking no arguments and returning
    /// nothing, with every general-purpose register saved around the call.
    ///
    /// # Safety
    /// The code at `entry_point` runs with full hardware access and no
    /// isolation. It may corrupt any kernel state and may never return.
    unsafe fn execute_foreign_code(&mut self, entry_point: u64);

    /// Resets the machine. Returns only where a reset cannot take effect
    /// immediately.
    fn reset(&mut self);
}
