//! Interrupt vector layout.

/// Vector base of the primary PIC (IRQ 0-7).
pub const PIC_1_OFFSET: u8 = 32;
/// Vector base of the secondary PIC (IRQ 8-15).
pub const PIC_2_OFFSET: u8 = PIC_1_OFFSET + 8;

/// Vector number assigned to the keyboard interrupt (IRQ1).
pub const KEYBOARD_VECTOR: u8 = PIC_1_OFFSET + 1;

/// Primary PIC mask with only IRQ1 open.
pub const PIC_1_KEYBOARD_ONLY: u8 = 0xFD;
/// Secondary PIC mask with every line closed.
pub const PIC_2_ALL_MASKED: u8 = 0xFF;
