#![doc = r#"
picones library crate.

A small NES-style 6502 core: a mirrored 2 KiB RAM and a read-only 32 KiB
cartridge window behind one bus, a table-driven instruction dispatcher, and
an execution loop that reports every instruction's timing to a video clock.

Modules:
- bus: CPU address space (mirrored RAM + cartridge PRG window)
- cartridge: splits a raw image into header + PRG window
- clock: `VideoClock` timing collaborator and the default `CycleCounter`
- config: `MachineConfig`
- cpu: 6502 CPU core (facade + state + table + dispatch + execute modules)
- error: `EmuError` and the crate `Result` alias
- machine: execution loop and machine lifecycle
- trace: optional per-instruction trace sinks

In tests, shared image builders are available under `crate::test_utils`.
"#]

// Core emulator modules
pub mod bus;
pub mod cartridge;
pub mod clock;
pub mod config;
pub mod cpu;
pub mod error;
pub mod machine;
pub mod trace;

// Re-export commonly used types at the crate root for convenience.
pub use bus::Bus;
pub use cartridge::Cartridge;
pub use clock::{CycleCounter, VideoClock};
pub use config::MachineConfig;
pub use cpu::core::Cpu;
pub use error::{EmuError, Result};
pub use machine::{Machine, MachineState, RunSummary, StopHandle, StopReason};
pub use trace::{LogTracer, TraceEntry, TraceError, TraceLog, TraceSink, WriterTracer};

// Shared test utilities (only compiled for tests)
#[cfg(test)]
pub mod test_utils;
