//! Command parsing and execution.
//!
//! Parsing is a pure function of the line. Keyword rules are checked in a
//! fixed order after the `.link` suffix rule, so a line naming an app always
//! launches it no matter which keyword it starts with.

use super::{EditorState, Mode, Shell};
use crate::apps;
use crate::constants::console::{
    COLOR_DEFAULT, COLOR_ERROR, COLOR_INFO, COLOR_SUCCESS, COLOR_TEXT,
};
use crate::constants::shell::LINK_SUFFIX;
use crate::devices::vga::TextScreen;
use crate::filesys::slotfs::{self, file_text};
use crate::filesys::{BlockDevice, FsError, SECTOR_SIZE};
use crate::platform::Platform;
use crate::{debug, info, warn};

const HELP_TEXT: &str = "\
Commands:
  help          show this list
  ls            list files
  touch <file>  create an empty file
  sing <file>   edit a file, ESC saves
  cat <file>    print a file
  rm <file>     delete a file
  format        delete every file
  clear         clear the screen
  reboot        restart the machine
  <file>.link   run an app
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Empty,
    Launch(&'a str),
    Help,
    List,
    Edit(&'a str),
    Show(&'a str),
    Remove(&'a str),
    Format,
    Touch(&'a str),
    Clear,
    Reboot,
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    pub fn parse(line: &'a str) -> Self {
        if line.is_empty() {
            return Command::Empty;
        }
        if line.len() > LINK_SUFFIX.len() && line.ends_with(LINK_SUFFIX) {
            return Command::Launch(line);
        }

        match line {
            "help" => return Command::Help,
            "ls" => return Command::List,
            "format" => return Command::Format,
            "clear" => return Command::Clear,
            "reboot" => return Command::Reboot,
            _ => {}
        }

        if let Some(name) = line.strip_prefix("sing ") {
            Command::Edit(name)
        } else if let Some(name) = line.strip_prefix("cat ") {
            Command::Show(name)
        } else if let Some(name) = line.strip_prefix("rm ") {
            Command::Remove(name)
        } else if let Some(name) = line.strip_prefix("touch ") {
            Command::Touch(name)
        } else {
            Command::Unknown(line)
        }
    }
}

impl<D: BlockDevice, S: TextScreen, P: Platform> Shell<D, S, P> {
    pub(super) fn dispatch(&mut self, line: &str) {
        let command = Command::parse(line);
        debug!("Dispatching {:?}", command);
        self.execute(command);
    }

    pub fn execute(&mut self, command: Command<'_>) {
        match command {
            Command::Empty => {}
            Command::Launch(name) => {
                let launched =
                    apps::launch(&mut self.disk, &mut self.console, &mut self.platform, name);
                match launched {
                    Ok(()) => {}
                    Err(FsError::NotFound) => {
                        warn!("No app named {:?}", name);
                        self.console.print("Error: App not found.\n", COLOR_ERROR);
                    }
                    Err(err) => self.report(err),
                }
            }
            Command::Help => self.console.print(HELP_TEXT, COLOR_INFO),
            Command::List => self.list_files(),
            Command::Edit(name) => self.open_editor(name),
            Command::Show(name) => match slotfs::read_file(&mut self.disk, name) {
                Ok(content) => {
                    self.console.print_bytes(file_text(&content), COLOR_TEXT);
                    self.console.newline();
                }
                Err(FsError::NotFound) => {
                    warn!("cat: no file named {:?}", name);
                    self.console.print("File not found.\n", COLOR_ERROR);
                }
                Err(err) => self.report(err),
            },
            Command::Remove(name) => match slotfs::remove(&mut self.disk, name) {
                Ok(()) => self.console.print("Removed.\n", COLOR_SUCCESS),
                Err(FsError::NotFound) => debug!("rm: no file named {:?}", name),
                Err(err) => self.report(err),
            },
            Command::Format => match slotfs::format(&mut self.disk) {
                Ok(()) => self.console.print("Disk Formatted.\n", COLOR_SUCCESS),
                Err(err) => self.report(err),
            },
            Command::Touch(name) => match slotfs::create(&mut self.disk, name) {
                Ok(_) => self.console.print("Touched file.\n", COLOR_SUCCESS),
                Err(FsError::DirectoryFull) => debug!("touch: directory full"),
                Err(err) => self.report(err),
            },
            Command::Clear => self.console.clear_screen(),
            Command::Reboot => self.platform.reset(),
            Command::Unknown(line) => {
                debug!("Unknown command {:?}", line);
                self.console.print("Unknown Command.\n", COLOR_ERROR);
            }
        }
    }

    fn list_files(&mut self) {
        let directory = match slotfs::Directory::load(&mut self.disk) {
            Ok(directory) => directory,
            Err(err) => return self.report(err),
        };

        self.console.print("Files on Disk:\n", COLOR_INFO);
        for entry in directory.active_entries() {
            self.console.print("- ", COLOR_TEXT);
            self.console.print_bytes(entry.name_bytes(), COLOR_DEFAULT);
            self.console.newline();
        }
    }

    fn open_editor(&mut self, name: &str) {
        let entry = match slotfs::lookup(&mut self.disk, name) {
            Ok(entry) => entry,
            Err(FsError::NotFound) => {
                warn!("sing: no file named {:?}", name);
                self.console.print("Error: File not found.\n", COLOR_ERROR);
                return;
            }
            Err(err) => return self.report(err),
        };

        let mut content = [0u8; SECTOR_SIZE];
        if let Err(err) = self.disk.read_block(entry.sector, &mut content) {
            return self.report(err);
        }
        let state = EditorState::open(entry.sector, content);

        self.console.clear_screen();
        self.console.print("Editing ", COLOR_INFO);
        self.console.print(name, COLOR_DEFAULT);
        self.console.print(" (ESC to save and exit)\n", COLOR_INFO);
        self.console
            .print("----------------------------------------\n\n", COLOR_INFO);
        self.console.print_bytes(state.text(), COLOR_DEFAULT);

        info!("Editing {:?} at sector {}", name, entry.sector);
        self.mode = Mode::Editor(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keywords() {
        assert_eq!(Command::parse(""), Command::Empty);
        assert_eq!(Command::parse("help"), Command::Help);
        assert_eq!(Command::parse("ls"), Command::List);
        assert_eq!(Command::parse("format"), Command::Format);
        assert_eq!(Command::parse("clear"), Command::Clear);
        assert_eq!(Command::parse("reboot"), Command::Reboot);
        assert_eq!(Command::parse("sing a"), Command::Edit("a"));
        assert_eq!(Command::parse("cat a"), Command::Show("a"));
        assert_eq!(Command::parse("rm a"), Command::Remove("a"));
        assert_eq!(Command::parse("touch a"), Command::Touch("a"));
    }

    #[test]
    fn test_parse_is_exact_and_case_sensitive() {
        assert_eq!(Command::parse("ls "), Command::Unknown("ls "));
        assert_eq!(Command::parse("LS"), Command::Unknown("LS"));
        assert_eq!(Command::parse("helpme"), Command::Unknown("helpme"));
        assert_eq!(Command::parse("cat"), Command::Unknown("cat"));
        assert_eq!(Command::parse("touchy"), Command::Unknown("touchy"));
    }

    #[test]
    fn test_link_suffix_wins() {
        assert_eq!(Command::parse("game.link"), Command::Launch("game.link"));
        assert_eq!(Command::parse("cat a.link"), Command::Launch("cat a.link"));
        assert_eq!(Command::parse("help.link"), Command::Launch("help.link"));
        assert_eq!(Command::parse(".link"), Command::Unknown(".link"));
    }
}
