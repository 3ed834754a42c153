//! The Kernel Heap
//!
//! A Talc allocator over a static arena. The kernel allocates once at boot,
//! for the scancode queue; nothing else reaches for the heap.

use crate::constants::memory::HEAP_SIZE;
use talc::{ClaimOnOom, Span, Talc, Talck};

static mut ARENA: [u8; HEAP_SIZE] = [0; HEAP_SIZE];

#[global_allocator]
static ALLOCATOR: Talck<spin::Mutex<()>, ClaimOnOom> = Talc::new(unsafe {
    ClaimOnOom::new(Span::from_array(core::ptr::addr_of!(ARENA).cast_mut()))
})
.lock();
