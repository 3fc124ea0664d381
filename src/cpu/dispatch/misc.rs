/*!
misc.rs - Transfers / Stack / Flag / Register inc-dec opcode family handler

Transfers:
  TAX (0xAA), TAY (0xA8), TXA (0x8A), TYA (0x98), TSX (0xBA), TXS (0x9A)

Stack:
  PHA (0x48), PLA (0x68), PHP (0x08), PLP (0x28)

Register increment / decrement:
  INX (0xE8), DEX (0xCA), INY (0xC8), DEY (0x88)

Flag operations:
  CLC (0x18), SEC (0x38),
  CLI (0x58), SEI (0x78),
  CLD (0xD8), SED (0xF8),
  CLV (0xB8)

NOP (0xEA)

All members have fixed base cycles; this handler never alters *cycles.
*/

use crate::bus::Bus;
use crate::cpu::addressing::Operand;
use crate::cpu::execute::{dex, dey, inx, iny, pha, php, pla, plp, tax, tay, tsx, txa, txs, tya};
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{CARRY, DECIMAL, IRQ_DISABLE, OVERFLOW};
use crate::cpu::table::Mnemonic;

pub(super) fn handle<C: CpuRegs>(
    mnemonic: Mnemonic,
    operand: Operand,
    cpu: &mut C,
    bus: &mut Bus,
    _cycles: &mut u32,
) -> bool {
    if operand != Operand::Implied {
        return false;
    }
    match mnemonic {
        // Transfers
        Mnemonic::Tax => tax(cpu),
        Mnemonic::Tay => tay(cpu),
        Mnemonic::Txa => txa(cpu),
        Mnemonic::Tya => tya(cpu),
        Mnemonic::Tsx => tsx(cpu),
        Mnemonic::Txs => txs(cpu),

        // Stack
        Mnemonic::Pha => pha(cpu, bus),
        Mnemonic::Pla => pla(cpu, bus),
        Mnemonic::Php => php(cpu, bus),
        Mnemonic::Plp => plp(cpu, bus),

        Mnemonic::Inx => inx(cpu),
        Mnemonic::Dex => dex(cpu),
        Mnemonic::Iny => iny(cpu),
        Mnemonic::Dey => dey(cpu),

        // Flags
        Mnemonic::Clc => cpu.assign_flag(CARRY, false),
        Mnemonic::Sec => cpu.assign_flag(CARRY, true),
        Mnemonic::Cli => cpu.assign_flag(IRQ_DISABLE, false),
        Mnemonic::Sei => cpu.assign_flag(IRQ_DISABLE, true),
        Mnemonic::Cld => cpu.assign_flag(DECIMAL, false),
        Mnemonic::Sed => cpu.assign_flag(DECIMAL, true),
        Mnemonic::Clv => cpu.assign_flag(OVERFLOW, false),

        Mnemonic::Nop => {}
        _ => return false,
    }
    true
}
