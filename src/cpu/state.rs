/*!
state.rs - 6502 architectural state (registers + flags).

Overview
========
`CpuState` owns every architecturally visible register plus the halted
latch. It does not know about decoding, timing, or tracing; those live in
the dispatch and machine layers.

Status Register Bit Layout
==========================
Bit: 7 6 5 4 3 2 1 0
     N V 1 1 D I Z C

Only the six real flags are stored. Bits 4 and 5 carry no emulated state:
`status_byte` always reports them set and `load_status_byte` drops them.
*/

use crate::bus::Bus;
use crate::cpu::regs::CpuRegs;

/// Processor status flag bit masks.
pub const CARRY: u8 = 0b0000_0001;
pub const ZERO: u8 = 0b0000_0010;
pub const IRQ_DISABLE: u8 = 0b0000_0100;
pub const DECIMAL: u8 = 0b0000_1000; // Not used by NES hardware, still part of 6502.
pub const BREAK: u8 = 0b0001_0000;
pub const UNUSED: u8 = 0b0010_0000;
pub const OVERFLOW: u8 = 0b0100_0000;
pub const NEGATIVE: u8 = 0b1000_0000;

/// Bits that hold real flag state.
pub const FLAG_BITS: u8 = CARRY | ZERO | IRQ_DISABLE | DECIMAL | OVERFLOW | NEGATIVE;

/// Base address of the one-page hardware stack.
pub const STACK_BASE: u16 = 0x0100;

/// Address of the little-endian RESET vector.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Stack pointer value after reset.
pub const SP_AFTER_RESET: u8 = 0xFD;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuState {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    /// Six flag bits only (see `FLAG_BITS`).
    pub status: u8,
    pub halted: bool,
}

impl Default for CpuState {
    fn default() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: SP_AFTER_RESET,
            pc: 0x0000,
            status: IRQ_DISABLE,
            halted: false,
        }
    }
}

impl CpuState {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reinitialize registers and load PC from the reset vector at $FFFC/$FFFD.
    ///
    /// RAM is untouched; only register state is rebuilt.
    pub fn reset(&mut self, bus: &Bus) {
        *self = Self::default();
        self.pc = bus.read_word(RESET_VECTOR);
    }

    // ---------------------------------------------------------------------
    // Flag Operations (the packing rule lives in `CpuRegs`)
    // ---------------------------------------------------------------------

    #[inline]
    pub fn is_flag_set(&self, mask: u8) -> bool {
        CpuRegs::is_flag_set(self, mask)
    }

    #[inline]
    pub fn assign_flag(&mut self, mask: u8, value: bool) {
        CpuRegs::assign_flag(self, mask, value);
    }

    /// Pack the flags for a stack push; bits 4 and 5 always read as 1.
    #[inline]
    pub fn status_byte(&self) -> u8 {
        CpuRegs::status_byte(self)
    }

    /// Unpack the six flags from `v`; bits 4 and 5 are ignored.
    #[inline]
    pub fn load_status_byte(&mut self, v: u8) {
        CpuRegs::load_status_byte(self, v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::build_image;

    #[test]
    fn default_power_up() {
        let s = CpuState::new();
        assert_eq!(s.a, 0);
        assert_eq!(s.x, 0);
        assert_eq!(s.y, 0);
        assert_eq!(s.sp, 0xFD);
        assert!(s.is_flag_set(IRQ_DISABLE));
        assert!(!s.is_flag_set(CARRY));
        assert!(!s.halted);
    }

    #[test]
    fn reset_sets_pc_from_vector() {
        let mut bus = Bus::new();
        bus.load_image(&build_image(&[0xEA], 0x9000)).expect("load");
        let mut s = CpuState::new();
        s.a = 0x44;
        s.sp = 0x10;
        s.halted = true;
        s.reset(&bus);
        assert_eq!(s.pc, 0x9000);
        assert_eq!(s.a, 0);
        assert_eq!(s.sp, 0xFD);
        assert!(!s.halted);
    }

    #[test]
    fn flag_assignment() {
        let mut s = CpuState::new();
        s.assign_flag(IRQ_DISABLE, false);
        assert!(!s.is_flag_set(IRQ_DISABLE));
        s.assign_flag(DECIMAL, true);
        assert!(s.is_flag_set(DECIMAL));
        s.assign_flag(DECIMAL, false);
        assert!(!s.is_flag_set(DECIMAL));
    }

    #[test]
    fn status_byte_packs_flags_with_bits_4_and_5_set() {
        let mut s = CpuState::new();
        s.status = 0;
        assert_eq!(s.status_byte(), 0b0011_0000);
        s.assign_flag(CARRY, true);
        s.assign_flag(NEGATIVE, true);
        assert_eq!(s.status_byte(), 0b1011_0001);
    }

    #[test]
    fn load_status_byte_ignores_bits_4_and_5() {
        let mut s = CpuState::new();
        s.load_status_byte(0xFF);
        assert_eq!(s.status, FLAG_BITS);
        assert_eq!(s.status_byte(), 0xFF);
        s.load_status_byte(0b0011_0000);
        assert_eq!(s.status, 0);
    }

    #[test]
    fn unused_bits_cannot_be_assigned() {
        let mut s = CpuState::new();
        s.assign_flag(BREAK | UNUSED, true);
        assert_eq!(s.status & (BREAK | UNUSED), 0);
    }
}
