//! Runs the shell as an ordinary process against an in-memory disk and screen.
//!
//! Each stdin line is typed as keystrokes followed by Enter; a line reading
//! `^[` presses ESC instead. The screen is printed after every line.

use std::io::{self, BufRead, Write};

use cadence::{
    constants::console::{SCREEN_HEIGHT, SCREEN_WIDTH},
    devices::{
        keyboard::{make_code, KEY_RELEASE, SCANCODE_ESCAPE},
        vga::MemoryScreen,
    },
    filesys::block::MemoryBlockDevice,
    platform::hosted::HostedPlatform,
    shell::Shell,
};

type HostedShell = Shell<MemoryBlockDevice<64>, MemoryScreen, HostedPlatform>;

const ESCAPE_LINE: &str = "^[";

fn press(shell: &mut HostedShell, scancode: u8) {
    shell.handle_scancode(scancode);
    shell.handle_scancode(scancode | KEY_RELEASE);
}

fn render(shell: &HostedShell, out: &mut impl Write) -> io::Result<()> {
    let screen = shell.console().screen();
    writeln!(out, "{}", "=".repeat(SCREEN_WIDTH))?;
    for row in 0..SCREEN_HEIGHT {
        writeln!(out, "{}", screen.row_text(row))?;
    }
    let cursor = screen.cursor_position();
    writeln!(
        out,
        "-- cursor {},{}  sector writes {}",
        cursor / SCREEN_WIDTH,
        cursor % SCREEN_WIDTH,
        shell.disk().writes()
    )?;
    out.flush()
}

pub fn run() {
    let mut shell = Shell::new(
        MemoryBlockDevice::new(),
        MemoryScreen::new(),
        HostedPlatform::new(),
    );
    shell.start(&["Hosted build, disk held in memory."]);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if render(&shell, &mut out).is_err() {
        return;
    }

    for line in io::stdin().lock().lines() {
        let Ok(line) = line else { break };

        if line == ESCAPE_LINE {
            press(&mut shell, SCANCODE_ESCAPE);
        } else {
            for byte in line.bytes().chain(Some(b'\n')) {
                if let Some(code) = make_code(byte) {
                    press(&mut shell, code);
                }
            }
        }

        if render(&shell, &mut out).is_err() || shell.platform().reset_requested() {
            break;
        }
    }
}
