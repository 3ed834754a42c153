//! Polled ATA PIO driver for the master device on the primary bus.
//!
//! Transfers are one sector at a time, LBA28, with interrupts masked for the
//! whole register sequence. The driver busy-polls the status register with no
//! timeout: a device that never becomes ready hangs the kernel here. There is
//! no recovery path below this layer, so that is accepted rather than
//! reported.

use core::hint::spin_loop;

use crate::constants::disk::{
    CMD_CACHE_FLUSH, CMD_READ_SECTORS, CMD_WRITE_SECTORS, DRIVE_MASTER_LBA, STATUS_BSY,
    STATUS_DRQ, STATUS_ERR,
};
use crate::constants::ports::{
    ATA_COMMAND, ATA_DATA, ATA_DRIVE_HEAD, ATA_LBA_HIGH, ATA_LBA_LOW, ATA_LBA_MID,
    ATA_SECTOR_COUNT, ATA_STATUS,
};
use crate::devices::port::PortIo;
use crate::filesys::{BlockDevice, FsError, Sector, SectorAddress};
use crate::trace;

pub struct AtaPio<P: PortIo> {
    ports: P,
}

impl<P: PortIo> AtaPio<P> {
    pub const fn new(ports: P) -> Self {
        Self { ports }
    }

    #[cfg(test)]
    pub fn ports(&self) -> &P {
        &self.ports
    }

    /// Programs drive, count and address, then issues `command`
    fn issue(&mut self, lba: SectorAddress, command: u8) {
        self.ports
            .write_u8(ATA_DRIVE_HEAD, DRIVE_MASTER_LBA | ((lba >> 24) & 0x0F) as u8);
        self.ports.write_u8(ATA_SECTOR_COUNT, 1);
        self.ports.write_u8(ATA_LBA_LOW, lba as u8);
        self.ports.write_u8(ATA_LBA_MID, (lba >> 8) as u8);
        self.ports.write_u8(ATA_LBA_HIGH, (lba >> 16) as u8);
        self.ports.write_u8(ATA_COMMAND, command);
    }

    fn wait_not_busy(&mut self) -> u8 {
        loop {
            let status = self.ports.read_u8(ATA_STATUS);
            if status & STATUS_BSY == 0 {
                return status;
            }
            spin_loop();
        }
    }

    /// Waits until the device wants data moved. ERR also ends the wait; the
    /// transfer then goes ahead since this driver has no error path.
    fn wait_data_ready(&mut self) {
        let mut status = self.wait_not_busy();
        while status & (STATUS_DRQ | STATUS_ERR) == 0 {
            spin_loop();
            status = self.ports.read_u8(ATA_STATUS);
        }
    }

    pub fn read_sector(&mut self, lba: SectorAddress, buf: &mut Sector) {
        self.ports.mask_interrupts();

        self.issue(lba, CMD_READ_SECTORS);
        self.wait_data_ready();
        for bytes in buf.chunks_exact_mut(2) {
            let word = self.ports.read_u16(ATA_DATA);
            bytes.copy_from_slice(&word.to_le_bytes());
        }
        self.ports.read_u8(ATA_STATUS);

        self.ports.unmask_interrupts();
        trace!("ATA read sector {}", lba);
    }

    pub fn write_sector(&mut self, lba: SectorAddress, buf: &Sector) {
        self.ports.mask_interrupts();

        self.issue(lba, CMD_WRITE_SECTORS);
        self.wait_data_ready();
        for bytes in buf.chunks_exact(2) {
            self.ports
                .write_u16(ATA_DATA, u16::from_le_bytes([bytes[0], bytes[1]]));
        }
        self.ports.write_u8(ATA_COMMAND, CMD_CACHE_FLUSH);
        self.wait_not_busy();

        self.ports.unmask_interrupts();
        trace!("ATA wrote sector {}", lba);
    }
}

impl<P: PortIo> BlockDevice for AtaPio<P> {
    fn read_block(&mut self, sector: SectorAddress, buf: &mut Sector) -> Result<(), FsError> {
        self.read_sector(sector, buf);
        Ok(())
    }

    fn write_block(&mut self, sector: SectorAddress, buf: &Sector) -> Result<(), FsError> {
        self.write_sector(sector, buf);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::disk::{SECTOR_SIZE, WORDS_PER_SECTOR};

    const SIM_SECTORS: usize = 16;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Transfer {
        Idle,
        Reading,
        Writing,
    }

    /// Register-level model of a single ATA disk.
    ///
    /// The device stays busy for a few status polls after every command, and
    /// records any data-port access made while interrupts were open.
    struct SimulatedAta {
        disk: [[u8; SECTOR_SIZE]; SIM_SECTORS],
        drive_head: u8,
        count: u8,
        lba: [u8; 3],
        transfer: Transfer,
        words: [u16; WORDS_PER_SECTOR],
        word_index: usize,
        busy_polls: u32,
        interrupts_enabled: bool,
        unmasked_data_accesses: usize,
        commands: Vec<u8>,
        flushes: usize,
    }

    impl SimulatedAta {
        fn new() -> Self {
            Self {
                disk: [[0; SECTOR_SIZE]; SIM_SECTORS],
                drive_head: 0,
                count: 0,
                lba: [0; 3],
                transfer: Transfer::Idle,
                words: [0; WORDS_PER_SECTOR],
                word_index: 0,
                busy_polls: 0,
                interrupts_enabled: true,
                unmasked_data_accesses: 0,
                commands: Vec::new(),
                flushes: 0,
            }
        }

        fn current_lba(&self) -> usize {
            (((self.drive_head & 0x0F) as usize) << 24)
                | ((self.lba[2] as usize) << 16)
                | ((self.lba[1] as usize) << 8)
                | self.lba[0] as usize
        }

        fn note_data_access(&mut self) {
            if self.interrupts_enabled {
                self.unmasked_data_accesses += 1;
            }
        }
    }

    impl PortIo for SimulatedAta {
        fn read_u8(&mut self, port: u16) -> u8 {
            assert_eq!(port, ATA_STATUS, "unexpected register read");
            if self.busy_polls > 0 {
                self.busy_polls -= 1;
                return STATUS_BSY;
            }
            match self.transfer {
                Transfer::Idle => 0,
                _ => STATUS_DRQ,
            }
        }

        fn write_u8(&mut self, port: u16, value: u8) {
            match port {
                ATA_DRIVE_HEAD => self.drive_head = value,
                ATA_SECTOR_COUNT => self.count = value,
                ATA_LBA_LOW => self.lba[0] = value,
                ATA_LBA_MID => self.lba[1] = value,
                ATA_LBA_HIGH => self.lba[2] = value,
                ATA_COMMAND => {
                    self.commands.push(value);
                    self.busy_polls = 3;
                    self.word_index = 0;
                    match value {
                        CMD_READ_SECTORS => {
                            let sector = self
                                .disk
                                .get(self.current_lba())
                                .copied()
                                .unwrap_or([0; SECTOR_SIZE]);
                            for (word, bytes) in self.words.iter_mut().zip(sector.chunks_exact(2)) {
                                *word = u16::from_le_bytes([bytes[0], bytes[1]]);
                            }
                            self.transfer = Transfer::Reading;
                        }
                        CMD_WRITE_SECTORS => self.transfer = Transfer::Writing,
                        CMD_CACHE_FLUSH => {
                            self.flushes += 1;
                            self.transfer = Transfer::Idle;
                        }
                        other => panic!("unsupported command {:#x}", other),
                    }
                }
                other => panic!("unexpected register write {:#x}", other),
            }
        }

        fn read_u16(&mut self, port: u16) -> u16 {
            assert_eq!(port, ATA_DATA);
            assert_eq!(self.transfer, Transfer::Reading);
            assert_eq!(self.busy_polls, 0, "data read while busy");
            self.note_data_access();

            let word = self.words[self.word_index];
            self.word_index += 1;
            if self.word_index == WORDS_PER_SECTOR {
                self.transfer = Transfer::Idle;
            }
            word
        }

        fn write_u16(&mut self, port: u16, value: u16) {
            assert_eq!(port, ATA_DATA);
            assert_eq!(self.transfer, Transfer::Writing);
            self.note_data_access();

            self.words[self.word_index] = value;
            self.word_index += 1;
            if self.word_index == WORDS_PER_SECTOR {
                let lba = self.current_lba();
                for (i, word) in self.words.iter().enumerate() {
                    self.disk[lba][2 * i..2 * i + 2].copy_from_slice(&word.to_le_bytes());
                }
                self.transfer = Transfer::Idle;
            }
        }

        fn mask_interrupts(&mut self) {
            self.interrupts_enabled = false;
        }

        fn unmask_interrupts(&mut self) {
            self.interrupts_enabled = true;
        }
    }

    #[test]
    fn test_read_sector_assembles_little_endian_words() {
        let mut sim = SimulatedAta::new();
        sim.disk[5][0] = 0x34;
        sim.disk[5][1] = 0x12;
        sim.disk[5][511] = 0xEE;
        let mut ata = AtaPio::new(sim);

        let mut buf = [0u8; SECTOR_SIZE];
        ata.read_block(5, &mut buf).unwrap();

        assert_eq!(&buf[..2], &[0x34, 0x12]);
        assert_eq!(buf[511], 0xEE);
        assert_eq!(ata.ports().commands, vec![CMD_READ_SECTORS]);
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let mut ata = AtaPio::new(SimulatedAta::new());
        let mut data = [0u8; SECTOR_SIZE];
        for (i, byte) in data.iter_mut().enumerate() {
            *byte = (i % 251) as u8;
        }

        ata.write_block(9, &data).unwrap();
        let mut out = [0u8; SECTOR_SIZE];
        ata.read_block(9, &mut out).unwrap();

        assert_eq!(out, data);
        assert_eq!(
            ata.ports().commands,
            vec![CMD_WRITE_SECTORS, CMD_CACHE_FLUSH, CMD_READ_SECTORS]
        );
        assert_eq!(ata.ports().flushes, 1);
    }

    #[test]
    fn test_transfers_run_with_interrupts_masked() {
        let mut ata = AtaPio::new(SimulatedAta::new());
        let mut buf = [0u8; SECTOR_SIZE];
        ata.read_block(1, &mut buf).unwrap();
        ata.write_block(1, &buf).unwrap();

        assert_eq!(ata.ports().unmasked_data_accesses, 0);
        assert!(ata.ports().interrupts_enabled);
    }

    #[test]
    fn test_interrupts_reenabled_even_if_masked_before() {
        let mut sim = SimulatedAta::new();
        sim.interrupts_enabled = false;
        let mut ata = AtaPio::new(sim);
        let mut buf = [0u8; SECTOR_SIZE];
        ata.read_block(0, &mut buf).unwrap();
        assert!(ata.ports().interrupts_enabled);
    }

    #[test]
    fn test_lba28_register_split() {
        let mut ata = AtaPio::new(SimulatedAta::new());
        let mut buf = [0u8; SECTOR_SIZE];
        ata.read_block(0x0123_4567, &mut buf).unwrap();

        let sim = ata.ports();
        assert_eq!(sim.drive_head, 0xE1);
        assert_eq!(sim.count, 1);
        assert_eq!(sim.lba, [0x67, 0x45, 0x23]);
    }
}
