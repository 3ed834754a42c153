//! Raw control transfer into a loaded image.

use core::arch::asm;

/// Calls `entry` with the System V callee-saved registers pushed beforehand and
/// popped afterwards, and the stack realigned to 16 bytes for the call.
///
/// Caller-saved registers are declared clobbered, so together every
/// general-purpose register the kernel cares about survives the call.
///
/// # Safety
/// `entry` must point at executable code that eventually returns with `ret`
/// and leaves `rsp` as it found it. Nothing else about the callee is checked.
pub unsafe fn call_with_saved_registers(entry: u64) {
    asm!(
        "push rbx",
        "push rbp",
        "push r12",
        "push r13",
        "push r14",
        "push r15",
        "mov rax, rsp",
        "and rsp, -16",
        "sub rsp, 8",
        "push rax",
        "call r11",
        "pop rsp",
        "pop r15",
        "pop r14",
        "pop r13",
        "pop r12",
        "pop rbp",
        "pop rbx",
        in("r11") entry,
        clobber_abi("C"),
    );
}
