use crate::constants::filesys::MAX_FILE_LEN;
use crate::filesys::slotfs::file_text;
use crate::filesys::{Sector, SectorAddress};

/// In-memory copy of the file being edited.
///
/// `content[..write_index]` is the text; every byte after it is zero, so the
/// sector written back is always terminated.
#[derive(Debug, Clone)]
pub struct EditorState {
    target_sector: SectorAddress,
    content: Sector,
    write_index: usize,
}

impl EditorState {
    /// Resumes editing after the existing text, which is cut to the content cap
    pub fn open(target_sector: SectorAddress, mut content: Sector) -> Self {
        let write_index = file_text(&content).len().min(MAX_FILE_LEN);
        content[write_index..].fill(0);
        Self {
            target_sector,
            content,
            write_index,
        }
    }

    pub fn text(&self) -> &[u8] {
        &self.content[..self.write_index]
    }

    /// Appends a byte; returns false once the file is full
    pub fn push(&mut self, byte: u8) -> bool {
        if self.write_index >= MAX_FILE_LEN {
            return false;
        }
        self.content[self.write_index] = byte;
        self.write_index += 1;
        true
    }

    /// Removes the last byte; returns false if there was none
    pub fn pop(&mut self) -> bool {
        if self.write_index == 0 {
            return false;
        }
        self.write_index -= 1;
        self.content[self.write_index] = 0;
        true
    }

    /// The sector to write back and its new content
    pub fn finish(self) -> (SectorAddress, Sector) {
        (self.target_sector, self.content)
    }
}
