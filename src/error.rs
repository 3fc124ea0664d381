/*!
error.rs - Error taxonomy for the emulator core.

Only conditions that stop an operation outright are represented here.
Stack wraparound, mirrored RAM access and register overflow are defined
hardware behavior and never surface as errors.
*/

use thiserror::Error;

/// Errors produced by image loading, reset, and instruction execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmuError {
    /// The supplied cartridge image is smaller than header + 32 KiB PRG.
    #[error("cartridge image too short: got {len} bytes, need at least {required}")]
    ImageTooShort { len: usize, required: usize },

    /// `reset()` was called before any image was loaded.
    #[error("no cartridge image loaded")]
    NoImageLoaded,

    /// Execution was requested on a machine that has an image but was never reset.
    #[error("machine has not been reset")]
    NotReset,

    /// The decoder met a byte with no entry in the opcode table.
    #[error("unimplemented opcode ${opcode:02X} at ${pc:04X}")]
    UnimplementedOpcode { opcode: u8, pc: u16 },
}

pub type Result<T> = std::result::Result<T, EmuError>;
