/*!
regs.rs - `CpuRegs` trait: the register + flag interface instruction
handlers are written against.

The trait has no bus access, stack helpers, or instruction fetch; memory
traffic stays explicit at call sites via `&Bus` / `&mut Bus`.

Handlers are generic (`fn op<C: CpuRegs>(cpu: &mut C, ...)`) so they
monomorphize against `CpuState` with no dynamic dispatch.
*/

use crate::cpu::state::{BREAK, CpuState, FLAG_BITS, NEGATIVE, UNUSED, ZERO};

pub trait CpuRegs {
    // ---------------------------------------------------------------------
    // Read accessors
    // ---------------------------------------------------------------------
    fn a(&self) -> u8;
    fn x(&self) -> u8;
    fn y(&self) -> u8;
    fn sp(&self) -> u8;
    fn pc(&self) -> u16;
    /// Raw flag bits (only `FLAG_BITS` are meaningful).
    fn status(&self) -> u8;
    fn halted(&self) -> bool;

    // ---------------------------------------------------------------------
    // Mutators
    // ---------------------------------------------------------------------
    fn set_a(&mut self, v: u8);
    fn set_x(&mut self, v: u8);
    fn set_y(&mut self, v: u8);
    fn set_sp(&mut self, v: u8);
    fn set_pc(&mut self, v: u16);
    fn set_status(&mut self, v: u8);
    fn set_halted(&mut self, h: bool);

    /// Advance PC by `delta` (wrapping at 16 bits).
    #[inline]
    fn advance_pc(&mut self, delta: u16) {
        let pc = self.pc().wrapping_add(delta);
        self.set_pc(pc);
    }

    // ---------------------------------------------------------------------
    // Flag operations
    // ---------------------------------------------------------------------

    #[inline]
    fn is_flag_set(&self, mask: u8) -> bool {
        (self.status() & mask) != 0
    }

    #[inline]
    fn assign_flag(&mut self, mask: u8, value: bool) {
        let s = self.status();
        let s = if value { s | (mask & FLAG_BITS) } else { s & !mask };
        self.set_status(s);
    }

    /// ZERO and NEGATIVE from an 8-bit result. Every N/Z-affecting opcode goes
    /// through here; the two flags are always written as a pair.
    #[inline]
    fn set_zero_negative(&mut self, value: u8) {
        self.assign_flag(ZERO, value == 0);
        self.assign_flag(NEGATIVE, (value & 0x80) != 0);
    }

    /// Packed status for PHP: flags plus bits 4 and 5 forced to 1.
    #[inline]
    fn status_byte(&self) -> u8 {
        (self.status() & FLAG_BITS) | BREAK | UNUSED
    }

    /// Unpack a status byte pulled by PLP; bits 4 and 5 are dropped.
    #[inline]
    fn load_status_byte(&mut self, v: u8) {
        self.set_status(v & FLAG_BITS);
    }
}

impl CpuRegs for CpuState {
    #[inline]
    fn a(&self) -> u8 {
        self.a
    }
    #[inline]
    fn x(&self) -> u8 {
        self.x
    }
    #[inline]
    fn y(&self) -> u8 {
        self.y
    }
    #[inline]
    fn sp(&self) -> u8 {
        self.sp
    }
    #[inline]
    fn pc(&self) -> u16 {
        self.pc
    }
    #[inline]
    fn status(&self) -> u8 {
        self.status
    }
    #[inline]
    fn halted(&self) -> bool {
        self.halted
    }

    #[inline]
    fn set_a(&mut self, v: u8) {
        self.a = v;
    }
    #[inline]
    fn set_x(&mut self, v: u8) {
        self.x = v;
    }
    #[inline]
    fn set_y(&mut self, v: u8) {
        self.y = v;
    }
    #[inline]
    fn set_sp(&mut self, v: u8) {
        self.sp = v;
    }
    #[inline]
    fn set_pc(&mut self, v: u16) {
        self.pc = v;
    }
    #[inline]
    fn set_status(&mut self, v: u8) {
        self.status = v;
    }
    #[inline]
    fn set_halted(&mut self, h: bool) {
        self.halted = h;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::state::CARRY;

    #[test]
    fn set_zero_negative_pairs() {
        let mut s = CpuState::new();
        s.set_zero_negative(0x00);
        assert!(s.is_flag_set(ZERO));
        assert!(!s.is_flag_set(NEGATIVE));
        s.set_zero_negative(0x80);
        assert!(!s.is_flag_set(ZERO));
        assert!(s.is_flag_set(NEGATIVE));
        s.set_zero_negative(0x7F);
        assert!(!s.is_flag_set(ZERO));
        assert!(!s.is_flag_set(NEGATIVE));
    }

    #[test]
    fn pc_advance_wraps() {
        let mut s = CpuState::new();
        s.set_pc(0xFFFF);
        CpuRegs::advance_pc(&mut s, 1);
        assert_eq!(s.pc(), 0x0000);
    }

    #[test]
    fn status_byte_forces_bits_four_and_five() {
        let mut s = CpuState::new();
        CpuRegs::assign_flag(&mut s, CARRY, true);
        assert_eq!(CpuRegs::status_byte(&s), 0b0011_0101);
        // The inherent method is the same rule.
        assert_eq!(s.status_byte(), 0b0011_0101);
        CpuRegs::load_status_byte(&mut s, 0b1111_0000);
        assert_eq!(s.status, NEGATIVE | 0b0100_0000);
    }
}
