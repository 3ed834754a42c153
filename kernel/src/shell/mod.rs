//! The interactive shell: a keyboard-driven state machine with two mutually
//! exclusive modes.
//!
//! In command mode keystrokes build a command line that is dispatched on
//! Enter. In editor mode they edit one file's sector in memory until ESC
//! writes it back. [`Shell`] owns every piece of state the two modes touch,
//! so a scancode is always handled to completion against a single owner.

mod commands;
mod editor;
mod input;

pub use commands::Command;
pub use editor::EditorState;

use arrayvec::ArrayString;

use crate::console::Console;
use crate::constants::console::{COLOR_ERROR, COLOR_INFO, COLOR_PROMPT, COLOR_SUCCESS, COLOR_TEXT};
use crate::constants::shell::{MAX_COMMAND_LEN, PROMPT};
use crate::devices::vga::TextScreen;
use crate::filesys::{BlockDevice, FsError};
use crate::platform::Platform;
use crate::{error, warn};

pub type CommandLine = ArrayString<MAX_COMMAND_LEN>;

pub enum Mode {
    Command(CommandLine),
    Editor(EditorState),
}

pub struct Shell<D: BlockDevice, S: TextScreen, P: Platform> {
    disk: D,
    console: Console<S>,
    platform: P,
    mode: Mode,
}

impl<D: BlockDevice, S: TextScreen, P: Platform> Shell<D, S, P> {
    /// Starts in command mode with an empty line and the cursor at the origin
    pub fn new(disk: D, screen: S, platform: P) -> Self {
        Self {
            disk,
            console: Console::new(screen),
            platform,
            mode: Mode::Command(CommandLine::new()),
        }
    }

    /// Draws the boot screen and the first prompt
    pub fn start(&mut self, status: &[&str]) {
        self.draw_banner();
        for line in status {
            self.console.print(line, COLOR_SUCCESS);
            self.console.newline();
        }
        self.console
            .print("Keyboard Enabled. System Ready.\n\n", COLOR_SUCCESS);
        self.print_prompt();
    }

    pub fn disk(&self) -> &D {
        &self.disk
    }

    #[cfg(test)]
    pub fn disk_mut(&mut self) -> &mut D {
        &mut self.disk
    }

    pub fn console(&self) -> &Console<S> {
        &self.console
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, Mode::Editor(_))
    }

    #[cfg(test)]
    pub fn command_line(&self) -> Option<&str> {
        match &self.mode {
            Mode::Command(line) => Some(line.as_str()),
            Mode::Editor(_) => None,
        }
    }

    #[cfg(test)]
    pub fn editor(&self) -> Option<&EditorState> {
        match &self.mode {
            Mode::Editor(state) => Some(state),
            Mode::Command(_) => None,
        }
    }

    fn print_prompt(&mut self) {
        self.console.print(PROMPT, COLOR_PROMPT);
    }

    fn draw_banner(&mut self) {
        self.console.clear_screen();
        self.console.print("Cadence\n", COLOR_INFO);
        self.console
            .print("Type 'help' for a list of commands.\n", COLOR_TEXT);
        self.console
            .print("----------------------------------------\n", COLOR_INFO);
    }

    /// Prints the generic message for errors no command handles itself
    fn report(&mut self, err: FsError) {
        match err {
            FsError::InvalidName => {
                warn!("Rejected file name");
                self.console.print("Invalid file name.\n", COLOR_ERROR);
            }
            FsError::IOError => {
                error!("Disk operation failed");
                self.console.print("Disk error.\n", COLOR_ERROR);
            }
            FsError::NotFound | FsError::DirectoryFull => {
                warn!("Unreported file system error: {}", err);
            }
        }
    }
}
