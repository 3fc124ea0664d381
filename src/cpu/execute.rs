/*!
execute.rs - 6502 instruction semantic helpers (stack, loads, shifts, branches)

Purpose
=======
Side-effect logic shared by the dispatch family handlers. Every helper is
generic over `CpuRegs`, so handlers never poke `CpuState` fields directly.

Inventory
---------
Operands:
    operand_value
Stack:
    push, pop, push_word, pop_word, php, plp, pha, pla
Loads / transfers:
    lda/ldx/ldy, tax/tay/txa/tya, tsx/txs
Increment / decrement (register):
    inx/iny/dex/dey
Shift:
    asl_acc, asl_mem
Branch:
    branch

Stack discipline
================
Push writes at $0100 | SP then decrements SP; pull increments SP then
reads. SP wraps in both directions.
*/

use crate::bus::Bus;
use crate::cpu::addressing::Operand;
use crate::cpu::cycles::{branch_cycles, page_crossed};
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{CARRY, STACK_BASE};

// ---------------------------------------------------------------------------
// Operands
// ---------------------------------------------------------------------------

/// The 8-bit value an operand designates (immediate byte, memory byte, or A).
/// `None` for operands that carry no value.
#[inline]
pub(crate) fn operand_value<C: CpuRegs>(cpu: &C, bus: &Bus, operand: Operand) -> Option<u8> {
    match operand {
        Operand::Immediate(v) => Some(v),
        Operand::Address(addr) => Some(bus.read(addr)),
        Operand::Accumulator => Some(cpu.a()),
        Operand::Implied | Operand::Relative { .. } => None,
    }
}

// ---------------------------------------------------------------------------
// Stack helpers
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn push<C: CpuRegs>(cpu: &mut C, bus: &mut Bus, v: u8) {
    let sp = cpu.sp();
    bus.write(STACK_BASE | sp as u16, v);
    cpu.set_sp(sp.wrapping_sub(1));
}

#[inline]
pub(crate) fn pop<C: CpuRegs>(cpu: &mut C, bus: &Bus) -> u8 {
    let sp = cpu.sp().wrapping_add(1);
    cpu.set_sp(sp);
    bus.read(STACK_BASE | sp as u16)
}

/// Push high byte first, then low byte (JSR order).
#[inline]
pub(crate) fn push_word<C: CpuRegs>(cpu: &mut C, bus: &mut Bus, v: u16) {
    push(cpu, bus, (v >> 8) as u8);
    push(cpu, bus, (v & 0xFF) as u8);
}

/// Pull low byte first, then high byte (RTS order).
#[inline]
pub(crate) fn pop_word<C: CpuRegs>(cpu: &mut C, bus: &Bus) -> u16 {
    let lo = pop(cpu, bus) as u16;
    let hi = pop(cpu, bus) as u16;
    (hi << 8) | lo
}

#[inline]
pub(crate) fn php<C: CpuRegs>(cpu: &mut C, bus: &mut Bus) {
    let v = cpu.status_byte();
    push(cpu, bus, v);
}

#[inline]
pub(crate) fn plp<C: CpuRegs>(cpu: &mut C, bus: &Bus) {
    let v = pop(cpu, bus);
    cpu.load_status_byte(v);
}

#[inline]
pub(crate) fn pha<C: CpuRegs>(cpu: &mut C, bus: &mut Bus) {
    // Avoid simultaneous immutable + mutable borrow of cpu in one expression.
    let a = cpu.a();
    push(cpu, bus, a);
}

#[inline]
pub(crate) fn pla<C: CpuRegs>(cpu: &mut C, bus: &Bus) {
    let val = pop(cpu, bus);
    cpu.set_a(val);
    cpu.set_zero_negative(val);
}

// ---------------------------------------------------------------------------
// Loads / Transfers
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn lda<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_a(v);
    cpu.set_zero_negative(v);
}

#[inline]
pub(crate) fn ldx<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_x(v);
    cpu.set_zero_negative(v);
}

#[inline]
pub(crate) fn ldy<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_y(v);
    cpu.set_zero_negative(v);
}

#[inline]
pub(crate) fn tax<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.a();
    ldx(cpu, v);
}

#[inline]
pub(crate) fn tay<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.a();
    ldy(cpu, v);
}

#[inline]
pub(crate) fn txa<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.x();
    lda(cpu, v);
}

#[inline]
pub(crate) fn tya<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.y();
    lda(cpu, v);
}

#[inline]
pub(crate) fn tsx<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.sp();
    ldx(cpu, v);
}

/// TXS is the one transfer that leaves N/Z alone.
#[inline]
pub(crate) fn txs<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.x();
    cpu.set_sp(v);
}

// ---------------------------------------------------------------------------
// Increment / Decrement (register)
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn inx<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.x().wrapping_add(1);
    ldx(cpu, v);
}

#[inline]
pub(crate) fn iny<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.y().wrapping_add(1);
    ldy(cpu, v);
}

#[inline]
pub(crate) fn dex<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.x().wrapping_sub(1);
    ldx(cpu, v);
}

#[inline]
pub(crate) fn dey<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.y().wrapping_sub(1);
    ldy(cpu, v);
}

// ---------------------------------------------------------------------------
// ASL
// ---------------------------------------------------------------------------

#[inline]
fn asl_value<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    cpu.assign_flag(CARRY, (v & 0x80) != 0);
    let r = v << 1;
    cpu.set_zero_negative(r);
    r
}

#[inline]
pub(crate) fn asl_acc<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.a();
    let r = asl_value(cpu, v);
    cpu.set_a(r);
}

#[inline]
pub(crate) fn asl_mem<C: CpuRegs>(cpu: &mut C, bus: &mut Bus, addr: u16) {
    let old = bus.read(addr);
    let r = asl_value(cpu, old);
    bus.write(addr, r);
}

// ---------------------------------------------------------------------------
// Branch
// ---------------------------------------------------------------------------

/// Apply a resolved branch. PC already points past the offset byte.
/// Returns the extra cycles (0 not taken, 1 taken, 2 taken across a page).
pub(crate) fn branch<C: CpuRegs>(cpu: &mut C, target: u16, take: bool) -> u32 {
    if !take {
        return branch_cycles(false, false);
    }
    let next = cpu.pc();
    cpu.set_pc(target);
    branch_cycles(true, page_crossed(next, target))
}
