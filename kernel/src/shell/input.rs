//! Scancode handling for both shell modes.

use core::mem;

use super::{Mode, Shell};
use crate::constants::console::{COLOR_DEFAULT, COLOR_SUCCESS};
use crate::constants::shell::EDITOR_TOP_ROW;
use crate::devices::keyboard::{is_release, translate, SCANCODE_ESCAPE};
use crate::devices::vga::TextScreen;
use crate::filesys::BlockDevice;
use crate::platform::Platform;
use crate::{info, trace};

const BACKSPACE: u8 = 0x08;
const ESCAPE: u8 = 0x1b;

impl<D: BlockDevice, S: TextScreen, P: Platform> Shell<D, S, P> {
    /// Runs one scancode through the state machine to completion
    pub fn handle_scancode(&mut self, scancode: u8) {
        if is_release(scancode) {
            return;
        }
        trace!("Scancode {:#04x}", scancode);

        if scancode == SCANCODE_ESCAPE {
            if self.is_editing() {
                self.leave_editor();
            }
            return;
        }

        let Some(ascii) = translate(scancode) else {
            return;
        };

        if self.is_editing() {
            self.editor_key(ascii);
        } else {
            self.command_key(ascii);
        }
        self.console.settle();
    }

    fn command_key(&mut self, ascii: u8) {
        let Mode::Command(line) = &mut self.mode else {
            return;
        };

        match ascii {
            b'\n' => {
                let line = mem::take(line);
                self.console.newline();
                self.dispatch(&line);
                if !self.is_editing() {
                    self.print_prompt();
                }
            }
            BACKSPACE => {
                if line.pop().is_some() && self.console.step_back(0) {
                    let cursor = self.console.cursor();
                    self.console.erase(cursor.x, cursor.y);
                }
            }
            ESCAPE => {}
            _ => {
                if line.try_push(ascii as char).is_ok() {
                    self.console.put_char(ascii, COLOR_DEFAULT);
                }
            }
        }
    }

    fn editor_key(&mut self, ascii: u8) {
        let Mode::Editor(state) = &mut self.mode else {
            return;
        };

        match ascii {
            BACKSPACE => {
                if state.pop() && self.console.step_back(EDITOR_TOP_ROW) {
                    let cursor = self.console.cursor();
                    self.console.erase(cursor.x, cursor.y);
                }
            }
            b'\n' => {
                if state.push(b'\n') {
                    self.console.newline();
                }
            }
            _ => {
                if state.push(ascii) {
                    self.console.put_char(ascii, COLOR_DEFAULT);
                }
            }
        }
    }

    /// Writes the buffer back and returns to command mode
    fn leave_editor(&mut self) {
        let Mode::Editor(state) = mem::replace(&mut self.mode, Mode::Command(Default::default()))
        else {
            return;
        };
        let (sector, content) = state.finish();
        let saved = self.disk.write_block(sector, &content);
        info!("Leaving editor for sector {}", sector);

        self.draw_banner();
        match saved {
            Ok(()) => self.console.print("Changes saved.\n", COLOR_SUCCESS),
            Err(err) => self.report(err),
        }
        self.print_prompt();
    }
}
