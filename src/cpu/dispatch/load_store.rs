/*!
load_store.rs - Load / Store opcode family handler

Overview
========
Loads (set Z/N flags):
    LDA: A9, A5, AD
    LDX: A2, A6, AE
    LDY: A0, A4, AC

Stores (no flags changed):
    STA: 85, 8D
    STX: 86, 8E
    STY: 84, 8C

Cycle Accounting
================
Base cycles come from the opcode table; no family member adds penalties.
*/

use crate::bus::Bus;
use crate::cpu::addressing::Operand;
use crate::cpu::execute::{lda, ldx, ldy, operand_value};
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Mnemonic;

/// Attempt to execute a load/store instruction.
///
/// Returns true if `mnemonic` belongs to this family and `operand` has a
/// shape it accepts. The operand has already been resolved (PC points at
/// the next instruction).
pub(super) fn handle<C: CpuRegs>(
    mnemonic: Mnemonic,
    operand: Operand,
    cpu: &mut C,
    bus: &mut Bus,
    _cycles: &mut u32,
) -> bool {
    match (mnemonic, operand) {
        (Mnemonic::Lda | Mnemonic::Ldx | Mnemonic::Ldy, _) => {
            let Some(v) = operand_value(cpu, bus, operand) else {
                return false;
            };
            match mnemonic {
                Mnemonic::Lda => lda(cpu, v),
                Mnemonic::Ldx => ldx(cpu, v),
                _ => ldy(cpu, v),
            }
        }
        (Mnemonic::Sta, Operand::Address(addr)) => bus.write(addr, cpu.a()),
        (Mnemonic::Stx, Operand::Address(addr)) => bus.write(addr, cpu.x()),
        (Mnemonic::Sty, Operand::Address(addr)) => bus.write(addr, cpu.y()),
        _ => return false,
    }
    true
}
