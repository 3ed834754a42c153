//! PS/2 keyboard: set-1 scancode translation and the interrupt-to-shell queue.
//!
//! The interrupt handler only pushes raw scancodes. Everything that interprets
//! them runs in the main loop, one scancode at a time.

use crossbeam_queue::ArrayQueue;
use lazy_static::lazy_static;

use crate::constants::shell::SCANCODE_QUEUE_CAPACITY;

pub const SCANCODE_ESCAPE: u8 = 0x01;

/// High bit set on break (key release) codes
pub const KEY_RELEASE: u8 = 0x80;

const LAYOUT: &[u8] =
    b"\0\x1b1234567890-=\x08\tqwertyuiop[]\n\0asdfghjkl;'`\0\\zxcvbnm,./\0*\0 ";

const fn build_table() -> [u8; 128] {
    let mut table = [0u8; 128];
    let mut i = 0;
    while i < LAYOUT.len() {
        table[i] = LAYOUT[i];
        i += 1;
    }
    table
}

/// US layout, unshifted. Unmapped codes are 0.
static SCANCODE_TABLE: [u8; 128] = build_table();

pub fn is_release(scancode: u8) -> bool {
    scancode & KEY_RELEASE != 0
}

/// Maps a make code to ASCII; release and unmapped codes give `None`
pub fn translate(scancode: u8) -> Option<u8> {
    if is_release(scancode) {
        return None;
    }
    match SCANCODE_TABLE[scancode as usize] {
        0 => None,
        ascii => Some(ascii),
    }
}

/// Reverse lookup, used to feed text into the state machine off hardware
pub fn make_code(ascii: u8) -> Option<u8> {
    if ascii == 0 {
        return None;
    }
    SCANCODE_TABLE
        .iter()
        .position(|&entry| entry == ascii)
        .map(|code| code as u8)
}

lazy_static! {
    static ref SCANCODES: ArrayQueue<u8> = ArrayQueue::new(SCANCODE_QUEUE_CAPACITY);
}

/// Allocates the queue. Must run before the keyboard line is unmasked so the
/// interrupt handler never allocates.
pub fn init_queue() {
    lazy_static::initialize(&SCANCODES);
}

/// Called from the interrupt handler; drops the scancode when the queue is full
pub fn push_scancode(scancode: u8) {
    let _ = SCANCODES.push(scancode);
}

pub fn pop_scancode() -> Option<u8> {
    SCANCODES.pop()
}

pub fn has_pending() -> bool {
    !SCANCODES.is_empty()
}
