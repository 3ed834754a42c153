/// Size of the boot heap arena. It only has to hold the scancode queue.
pub const HEAP_SIZE: usize = 64 * 1024;
