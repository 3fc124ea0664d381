use std::io;
use std::process::ExitCode;

use picones::{Machine, MachineConfig, WriterTracer};

const HEADER_SIZE: usize = 0x10;
const PRG_SIZE: usize = 0x8000;

fn build_demo_image() -> Vec<u8> {
    // Header: magic + PRG size in 16 KiB units, rest zero.
    let mut image = Vec::with_capacity(HEADER_SIZE + PRG_SIZE);
    image.extend_from_slice(b"NES\x1A");
    image.push(2);
    image.resize(HEADER_SIZE, 0);

    let mut prg = vec![0u8; PRG_SIZE];

    // Program at $8000
    let program: &[u8] = &[
        0xA9, 0x05, // LDA #$05
        0x8D, 0x00, 0x02, // STA $0200
        0xA2, 0x03, // LDX #$03
        0x20, 0x00, 0x90, // JSR $9000
        0xCA, // DEX
        0xD0, 0xFA, // BNE -6 -> JSR
        0x02, // BRK (halt)
    ];
    prg[..program.len()].copy_from_slice(program);

    // Subroutine at $9000: shift the stored value left.
    let subroutine: &[u8] = &[
        0x0E, 0x00, 0x02, // ASL $0200
        0x60, // RTS
    ];
    prg[0x1000..0x1000 + subroutine.len()].copy_from_slice(subroutine);

    // RESET vector -> $8000
    prg[0x7FFC] = 0x00;
    prg[0x7FFD] = 0x80;

    image.extend_from_slice(&prg);
    image
}

fn main() -> ExitCode {
    let config = MachineConfig::new(build_demo_image()).with_instruction_budget(10_000);
    let mut machine = match Machine::from_config(config) {
        Ok(m) => m,
        Err(err) => {
            eprintln!("failed to load image: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(header) = machine.bus().header() {
        println!("image header: {:02X?}", &header[..4]);
    }
    machine.set_tracer(WriterTracer::new(io::stdout()));

    if let Err(err) = machine.reset() {
        eprintln!("reset failed: {err}");
        return ExitCode::FAILURE;
    }

    match machine.run() {
        Ok(summary) => {
            let cpu = machine.cpu();
            println!(
                "stopped: {:?} after {} instructions ({} cycles, {} video ticks)",
                summary.reason,
                summary.instructions,
                machine.clock().cpu_cycles(),
                machine.clock().ppu_cycles()
            );
            println!(
                "A={:02X} X={:02X} Y={:02X} SP={:02X} PC={:04X} P={:08b} [$0200]={:02X}",
                cpu.a,
                cpu.x,
                cpu.y,
                cpu.sp,
                cpu.pc,
                cpu.status_byte(),
                machine.bus().read(0x0200)
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("run failed: {err}");
            ExitCode::FAILURE
        }
    }
}
