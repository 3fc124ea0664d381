/*!
rmw.rs - Read-Modify-Write / shift opcode family handler

Handles ASL in its three forms:
    0x0A  ASL A        (2 cycles)
    0x06  ASL zp       (5 cycles)
    0x0E  ASL abs      (6 cycles)

Carry receives the old bit 7; Z/N follow the shifted result.
*/

use crate::bus::Bus;
use crate::cpu::addressing::Operand;
use crate::cpu::execute::{asl_acc, asl_mem};
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Mnemonic;

pub(super) fn handle<C: CpuRegs>(
    mnemonic: Mnemonic,
    operand: Operand,
    cpu: &mut C,
    bus: &mut Bus,
    _cycles: &mut u32,
) -> bool {
    match (mnemonic, operand) {
        (Mnemonic::Asl, Operand::Accumulator) => asl_acc(cpu),
        (Mnemonic::Asl, Operand::Address(addr)) => asl_mem(cpu, bus, addr),
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use crate::bus::Bus;
    use crate::cpu::core::Cpu;
    use crate::cpu::state::{CARRY, NEGATIVE, ZERO};
    use crate::test_utils::build_image;

    fn setup(prg: &[u8]) -> (Cpu, Bus) {
        let mut bus = Bus::new();
        bus.load_image(&build_image(prg, 0x8000)).expect("load");
        let mut cpu = Cpu::new();
        cpu.reset(&bus);
        (cpu, bus)
    }

    #[test]
    fn asl_accumulator() {
        // LDA #$C0; ASL A
        let (mut cpu, mut bus) = setup(&[0xA9, 0xC0, 0x0A]);
        cpu.step(&mut bus).expect("step");
        let ex = cpu.step(&mut bus).expect("step");
        assert_eq!(ex.cycles, 2);
        assert_eq!(cpu.a(), 0x80);
        assert!(cpu.get_flag(CARRY));
        assert!(cpu.get_flag(NEGATIVE));
    }

    #[test]
    fn asl_zero_page_and_absolute() {
        // LDA #$80; STA $10; ASL $10; LDA #$01; STA $0300; ASL $0300
        let (mut cpu, mut bus) = setup(&[
            0xA9, 0x80, 0x85, 0x10, 0x06, 0x10, 0xA9, 0x01, 0x8D, 0x00, 0x03, 0x0E, 0x00, 0x03,
        ]);
        cpu.step(&mut bus).expect("step");
        cpu.step(&mut bus).expect("step");
        let zp = cpu.step(&mut bus).expect("step");
        assert_eq!(zp.cycles, 5);
        assert_eq!(bus.read(0x0010), 0x00);
        assert!(cpu.get_flag(CARRY));
        assert!(cpu.get_flag(ZERO));

        cpu.step(&mut bus).expect("step");
        cpu.step(&mut bus).expect("step");
        let abs = cpu.step(&mut bus).expect("step");
        assert_eq!(abs.cycles, 6);
        assert_eq!(bus.read(0x0300), 0x02);
        assert!(!cpu.get_flag(CARRY));
        assert!(!cpu.get_flag(ZERO));
    }
}
