/*!
core::Cpu - 6502 CPU facade wrapping `CpuState`.

`Cpu` owns one `CpuState` and forwards stepping to the generic dispatcher.
Handlers never see `Cpu`; they operate on `CpuState` through `CpuRegs`.
*/

use crate::bus::Bus;
use crate::cpu::dispatch::{self, Executed};
use crate::cpu::state::CpuState;
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct Cpu {
    state: CpuState,
}

impl Cpu {
    /// Construct a new CPU with power-up defaults.
    pub fn new() -> Self {
        Self {
            state: CpuState::new(),
        }
    }

    /// Return immutable reference to internal state (for inspection / testing).
    pub fn state(&self) -> &CpuState {
        &self.state
    }

    /// Reset internal state and load PC from the reset vector.
    pub fn reset(&mut self, bus: &Bus) {
        self.state.reset(bus);
    }

    /// True once BRK ran or an unimplemented opcode was fetched.
    pub fn is_halted(&self) -> bool {
        self.state.halted
    }

    pub fn set_halted(&mut self, h: bool) {
        self.state.halted = h;
    }

    // ---------------------------------------------------------------------
    // Register accessors (read)
    // ---------------------------------------------------------------------
    pub fn a(&self) -> u8 {
        self.state.a
    }
    pub fn x(&self) -> u8 {
        self.state.x
    }
    pub fn y(&self) -> u8 {
        self.state.y
    }
    pub fn sp(&self) -> u8 {
        self.state.sp
    }
    pub fn pc(&self) -> u16 {
        self.state.pc
    }
    /// Packed status as PHP would push it.
    pub fn status_byte(&self) -> u8 {
        self.state.status_byte()
    }

    pub fn get_flag(&self, mask: u8) -> bool {
        self.state.is_flag_set(mask)
    }

    /// Execute one instruction.
    pub fn step(&mut self, bus: &mut Bus) -> Result<Executed> {
        dispatch::step(&mut self.state, bus)
    }
}
