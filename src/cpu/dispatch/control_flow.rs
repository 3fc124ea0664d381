/*!
control_flow.rs - Control-flow / system opcode family handler

Overview
========
  JMP abs   (0x4C)
  JSR abs   (0x20)
  RTS       (0x60)
  BRK       (0x02)  halt instruction of this machine

Behavior Details
================
- JSR pushes (PC - 1), high byte then low byte, where PC is the address of
  the instruction following the JSR.
- RTS pulls low then high and adds 1 (wrap-safe) to produce the next PC.
- BRK latches the halted flag. It pushes nothing and loads no vector; the
  execution loop stops at the next instruction boundary.

Return Contract
===============
  true  => opcode recognized and executed
  false => not a control-flow opcode; caller continues dispatch chain
*/

use crate::bus::Bus;
use crate::cpu::addressing::Operand;
use crate::cpu::execute::{pop_word, push_word};
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Mnemonic;

#[inline]
fn op_jsr<C: CpuRegs>(cpu: &mut C, bus: &mut Bus, target: u16) {
    let ret = cpu.pc().wrapping_sub(1);
    push_word(cpu, bus, ret);
    cpu.set_pc(target);
}

#[inline]
fn op_rts<C: CpuRegs>(cpu: &mut C, bus: &Bus) {
    let ret = pop_word(cpu, bus);
    cpu.set_pc(ret.wrapping_add(1));
}

pub(super) fn handle<C: CpuRegs>(
    mnemonic: Mnemonic,
    operand: Operand,
    cpu: &mut C,
    bus: &mut Bus,
    _cycles: &mut u32,
) -> bool {
    match (mnemonic, operand) {
        (Mnemonic::Jmp, Operand::Address(target)) => cpu.set_pc(target),
        (Mnemonic::Jsr, Operand::Address(target)) => op_jsr(cpu, bus, target),
        (Mnemonic::Rts, Operand::Implied) => op_rts(cpu, bus),
        (Mnemonic::Brk, Operand::Implied) => cpu.set_halted(true),
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use crate::bus::Bus;
    use crate::cpu::core::Cpu;
    use crate::test_utils::{build_image, build_image_at};

    fn setup_image(image: &[u8]) -> (Cpu, Bus) {
        let mut bus = Bus::new();
        bus.load_image(image).expect("load");
        let mut cpu = Cpu::new();
        cpu.reset(&bus);
        (cpu, bus)
    }

    #[test]
    fn jmp_absolute() {
        let image = build_image_at(&[(0x8000, &[0x4C, 0x34, 0x92]), (0x9234, &[0x02])], 0x8000);
        let (mut cpu, mut bus) = setup_image(&image);
        let ex = cpu.step(&mut bus).expect("jmp");
        assert_eq!(ex.cycles, 3);
        assert_eq!(cpu.pc(), 0x9234);
    }

    #[test]
    fn jsr_pushes_return_minus_one() {
        let image = build_image_at(&[(0x8000, &[0x20, 0x00, 0x90]), (0x9000, &[0x60])], 0x8000);
        let (mut cpu, mut bus) = setup_image(&image);
        let ex = cpu.step(&mut bus).expect("jsr");
        assert_eq!(ex.cycles, 6);
        assert_eq!(cpu.pc(), 0x9000);
        assert_eq!(cpu.sp(), 0xFB);
        // $8002 stored high byte first
        assert_eq!(bus.read(0x01FD), 0x80);
        assert_eq!(bus.read(0x01FC), 0x02);
    }

    #[test]
    fn jsr_rts_round_trip() {
        let image = build_image_at(
            &[(0x8000, &[0x20, 0x00, 0x90, 0x02]), (0x9000, &[0x60])],
            0x8000,
        );
        let (mut cpu, mut bus) = setup_image(&image);
        let sp_before = cpu.sp();
        cpu.step(&mut bus).expect("jsr");
        let ex = cpu.step(&mut bus).expect("rts");
        assert_eq!(ex.cycles, 6);
        assert_eq!(cpu.pc(), 0x8003);
        assert_eq!(cpu.sp(), sp_before);
    }

    #[test]
    fn brk_halts_in_one_cycle() {
        let (mut cpu, mut bus) = setup_image(&build_image(&[0x02], 0x8000));
        let sp_before = cpu.sp();
        let ex = cpu.step(&mut bus).expect("brk");
        assert_eq!(ex.cycles, 1);
        assert!(cpu.is_halted());
        assert_eq!(cpu.pc(), 0x8001);
        assert_eq!(cpu.sp(), sp_before);
    }
}
