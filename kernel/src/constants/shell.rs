//! Shell and editor limits.

/// Longest command line the shell accepts
pub const MAX_COMMAND_LEN: usize = 70;

pub const PROMPT: &str = "> ";

/// Command lines ending with this suffix launch an app
pub const LINK_SUFFIX: &str = ".link";

/// First editor row available for content; backspace never climbs above it
pub const EDITOR_TOP_ROW: usize = 3;

/// Capacity of the interrupt-to-shell scancode queue
pub const SCANCODE_QUEUE_CAPACITY: usize = 128;
