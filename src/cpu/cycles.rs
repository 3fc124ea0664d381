/*!
cycles.rs - Dynamic cycle rules for the 6502 core.

Base costs live in the opcode table. This module holds the rules that
depend on runtime values:
  - `page_crossed(a, b)`: true when two addresses sit in different 256-byte pages.
  - `branch_cycles(taken, crossed)`: extra cycles for a resolved branch.

Branch page-cross reference point: the address of the instruction that
follows the complete branch (PC after the offset byte), compared against
the branch target.
*/

/// Video clock ticks per CPU cycle.
pub const PPU_CYCLES_PER_CPU_CYCLE: u64 = 3;

#[inline]
pub fn page_crossed(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

/// Extra cycles on top of the 2-cycle branch base: +1 if taken, +1 more if
/// the taken branch lands on another page.
#[inline]
pub fn branch_cycles(taken: bool, crossed: bool) -> u32 {
    match (taken, crossed) {
        (false, _) => 0,
        (true, false) => 1,
        (true, true) => 2,
    }
}

/// Convert a CPU cycle count into video clock ticks.
#[inline]
pub fn ppu_cycles(cpu_cycles: u32) -> u64 {
    cpu_cycles as u64 * PPU_CYCLES_PER_CPU_CYCLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_cross_detection() {
        assert!(!page_crossed(0x80FE, 0x80FF));
        assert!(page_crossed(0x80FF, 0x8100));
        assert!(page_crossed(0x0000, 0xFFFF));
    }

    #[test]
    fn branch_penalties() {
        assert_eq!(branch_cycles(false, false), 0);
        assert_eq!(branch_cycles(false, true), 0);
        assert_eq!(branch_cycles(true, false), 1);
        assert_eq!(branch_cycles(true, true), 2);
    }

    #[test]
    fn ppu_runs_three_times_cpu() {
        assert_eq!(ppu_cycles(1), 3);
        assert_eq!(ppu_cycles(7), 21);
    }
}
