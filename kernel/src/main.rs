#![cfg_attr(target_os = "none", no_std, no_main)]

#[cfg(not(target_os = "none"))]
mod hosted;

#[cfg(target_os = "none")]
mod kernel {
    use cadence::{
        constants::console::VGA_BUFFER_PHYS,
        devices::{ata::AtaPio, keyboard, port::HardwarePorts, vga::VgaTextBuffer},
        idle_loop, info,
        init::{self, BOOT_STATUS},
        interrupts,
        memory::phys_to_virt,
        platform::bare_metal::BareMetal,
        serial_println,
        shell::Shell,
    };

    #[no_mangle]
    extern "C" fn kmain() -> ! {
        init::init();

        let screen = unsafe { VgaTextBuffer::new(phys_to_virt(VGA_BUFFER_PHYS).as_mut_ptr()) };
        let disk = AtaPio::new(HardwarePorts);
        let platform = unsafe { BareMetal::new() };

        let mut shell = Shell::new(disk, screen, platform);
        shell.start(&BOOT_STATUS);

        info!("Entering shell loop");
        interrupts::enable();
        loop {
            match keyboard::pop_scancode() {
                Some(scancode) => shell.handle_scancode(scancode),
                None => interrupts::idle(),
            }
        }
    }

    #[panic_handler]
    fn rust_panic(info: &core::panic::PanicInfo) -> ! {
        serial_println!("Kernel panic: {}", info);
        idle_loop();
    }
}

#[cfg(not(target_os = "none"))]
fn main() {
    hosted::run();
}
