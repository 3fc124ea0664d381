/*!
addressing.rs - 6502 addressing modes and operand resolution.

Overview
========
`resolve` consumes the operand bytes of one instruction (starting at the
current PC) and produces an `Operand`: an immediate value, an effective
address, a branch target, or nothing.

Caller Assumptions
==================
- PC points at the first operand byte (the opcode has already been fetched).
- Handlers never touch PC for operand consumption; only this module does.
- Multi-byte operands are always read low byte first, then high byte.

Supported Modes
===============
```text
    Implied      no operand
    Accumulator  no operand; the operation targets A
    Immediate    1 byte value
    ZeroPage     1 byte address ($0000-$00FF)
    Absolute     2 byte little-endian address
    Relative     1 signed byte, offset from the address after the operand
```
*/

use crate::bus::Bus;
use crate::cpu::regs::CpuRegs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    Absolute,
    Relative,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_len(self) -> u16 {
        match self {
            AddressingMode::Implied | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate | AddressingMode::ZeroPage | AddressingMode::Relative => 1,
            AddressingMode::Absolute => 2,
        }
    }
}

/// A resolved operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Implied,
    Accumulator,
    Immediate(u8),
    Address(u16),
    /// `target` is already computed from the PC following the offset byte.
    Relative { offset: i8, target: u16 },
}

impl Operand {
    /// Render the operand the way a disassembler listing would.
    pub fn text(&self, mode: AddressingMode) -> String {
        match (*self, mode) {
            (Operand::Implied, _) => String::new(),
            (Operand::Accumulator, _) => "A".to_string(),
            (Operand::Immediate(v), _) => format!("#${v:02X}"),
            (Operand::Address(a), AddressingMode::ZeroPage) => format!("${a:02X}"),
            (Operand::Address(a), _) => format!("${a:04X}"),
            (Operand::Relative { target, .. }, _) => format!("${target:04X}"),
        }
    }
}

/// Fetch next byte from the instruction stream, incrementing PC.
pub(crate) fn fetch_byte<C: CpuRegs>(cpu: &mut C, bus: &Bus) -> u8 {
    let v = bus.read(cpu.pc());
    cpu.advance_pc(1);
    v
}

/// Fetch next little-endian word (low, then high), incrementing PC twice.
pub(crate) fn fetch_word<C: CpuRegs>(cpu: &mut C, bus: &Bus) -> u16 {
    let lo = fetch_byte(cpu, bus) as u16;
    let hi = fetch_byte(cpu, bus) as u16;
    (hi << 8) | lo
}

#[inline]
pub(crate) fn addr_zp<C: CpuRegs>(cpu: &mut C, bus: &Bus) -> u16 {
    fetch_byte(cpu, bus) as u16
}

#[inline]
pub(crate) fn addr_abs<C: CpuRegs>(cpu: &mut C, bus: &Bus) -> u16 {
    fetch_word(cpu, bus)
}

/// Read the signed offset and compute the branch target relative to the
/// address immediately after the offset byte.
#[inline]
pub(crate) fn addr_rel<C: CpuRegs>(cpu: &mut C, bus: &Bus) -> (i8, u16) {
    let offset = fetch_byte(cpu, bus) as i8;
    let target = cpu.pc().wrapping_add(offset as i16 as u16);
    (offset, target)
}

/// Consume the operand bytes for `mode` and return the resolved operand.
pub(crate) fn resolve<C: CpuRegs>(mode: AddressingMode, cpu: &mut C, bus: &Bus) -> Operand {
    match mode {
        AddressingMode::Implied => Operand::Implied,
        AddressingMode::Accumulator => Operand::Accumulator,
        AddressingMode::Immediate => Operand::Immediate(fetch_byte(cpu, bus)),
        AddressingMode::ZeroPage => Operand::Address(addr_zp(cpu, bus)),
        AddressingMode::Absolute => Operand::Address(addr_abs(cpu, bus)),
        AddressingMode::Relative => {
            let (offset, target) = addr_rel(cpu, bus);
            Operand::Relative { offset, target }
        }
    }
}
