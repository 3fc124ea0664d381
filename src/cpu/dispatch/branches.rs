/*!
branches.rs - Relative branch opcode handler (BPL/BMI/BVC/BVS/BCC/BCS/BNE/BEQ)

Cycle Rules
===========
Base cost: 2 cycles (from the table).
If branch is taken: +1 cycle.
If branch is taken and the target is on a different page than the
instruction following the branch: +2 total.

Return Contract
===============
`handle` returns true when the mnemonic is a branch with a relative
operand; extra cycles are already added to *cycles.
*/

use crate::bus::Bus;
use crate::cpu::addressing::Operand;
use crate::cpu::execute::branch;
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{CARRY, NEGATIVE, OVERFLOW, ZERO};
use crate::cpu::table::Mnemonic;

pub(super) fn handle<C: CpuRegs>(
    mnemonic: Mnemonic,
    operand: Operand,
    cpu: &mut C,
    _bus: &mut Bus,
    cycles: &mut u32,
) -> bool {
    let take = match mnemonic {
        Mnemonic::Bpl => !cpu.is_flag_set(NEGATIVE),
        Mnemonic::Bmi => cpu.is_flag_set(NEGATIVE),
        Mnemonic::Bvc => !cpu.is_flag_set(OVERFLOW),
        Mnemonic::Bvs => cpu.is_flag_set(OVERFLOW),
        Mnemonic::Bcc => !cpu.is_flag_set(CARRY),
        Mnemonic::Bcs => cpu.is_flag_set(CARRY),
        Mnemonic::Bne => !cpu.is_flag_set(ZERO),
        Mnemonic::Beq => cpu.is_flag_set(ZERO),
        _ => return false,
    };
    let Operand::Relative { target, .. } = operand else {
        return false;
    };
    *cycles += branch(cpu, target, take);
    true
}
