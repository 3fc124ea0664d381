/*!
table.rs - 256-entry opcode table.

Purpose
=======
Maps every opcode byte to `Option<OpcodeInfo>`: the operation, its
addressing mode, and its base cycle cost. A `None` entry means the byte is
not implemented; the dispatcher turns that into `UnimplementedOpcode`.

Design
------
- The table is built in a `const` block so it lives in static memory.
- Base cycles never include dynamic penalties; branch penalties are added
  by the branch handler.
- Opcode $02 is the halt instruction of this machine (reported as BRK).
*/

use std::fmt;

use crate::cpu::addressing::AddressingMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    // Load / store
    Lda,
    Ldx,
    Ldy,
    Sta,
    Stx,
    Sty,
    // Shift
    Asl,
    // Stack
    Pha,
    Pla,
    Php,
    Plp,
    // Control flow
    Jsr,
    Rts,
    Jmp,
    // Branches
    Bpl,
    Bmi,
    Bvc,
    Bvs,
    Bcc,
    Bcs,
    Bne,
    Beq,
    // Increment / decrement
    Inx,
    Dex,
    Iny,
    Dey,
    // Transfers
    Tax,
    Txa,
    Tay,
    Tya,
    Txs,
    Tsx,
    // Flags
    Sec,
    Clc,
    Clv,
    Sei,
    Cli,
    Sed,
    Cld,
    // Misc
    Nop,
    Brk,
}

impl Mnemonic {
    pub const fn as_str(self) -> &'static str {
        match self {
            Mnemonic::Lda => "LDA",
            Mnemonic::Ldx => "LDX",
            Mnemonic::Ldy => "LDY",
            Mnemonic::Sta => "STA",
            Mnemonic::Stx => "STX",
            Mnemonic::Sty => "STY",
            Mnemonic::Asl => "ASL",
            Mnemonic::Pha => "PHA",
            Mnemonic::Pla => "PLA",
            Mnemonic::Php => "PHP",
            Mnemonic::Plp => "PLP",
            Mnemonic::Jsr => "JSR",
            Mnemonic::Rts => "RTS",
            Mnemonic::Jmp => "JMP",
            Mnemonic::Bpl => "BPL",
            Mnemonic::Bmi => "BMI",
            Mnemonic::Bvc => "BVC",
            Mnemonic::Bvs => "BVS",
            Mnemonic::Bcc => "BCC",
            Mnemonic::Bcs => "BCS",
            Mnemonic::Bne => "BNE",
            Mnemonic::Beq => "BEQ",
            Mnemonic::Inx => "INX",
            Mnemonic::Dex => "DEX",
            Mnemonic::Iny => "INY",
            Mnemonic::Dey => "DEY",
            Mnemonic::Tax => "TAX",
            Mnemonic::Txa => "TXA",
            Mnemonic::Tay => "TAY",
            Mnemonic::Tya => "TYA",
            Mnemonic::Txs => "TXS",
            Mnemonic::Tsx => "TSX",
            Mnemonic::Sec => "SEC",
            Mnemonic::Clc => "CLC",
            Mnemonic::Clv => "CLV",
            Mnemonic::Sei => "SEI",
            Mnemonic::Cli => "CLI",
            Mnemonic::Sed => "SED",
            Mnemonic::Cld => "CLD",
            Mnemonic::Nop => "NOP",
            Mnemonic::Brk => "BRK",
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static metadata for one opcode byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeInfo {
    pub mnemonic: Mnemonic,
    pub mode: AddressingMode,
    pub cycles: u32,
}

const fn op(mnemonic: Mnemonic, mode: AddressingMode, cycles: u32) -> Option<OpcodeInfo> {
    Some(OpcodeInfo {
        mnemonic,
        mode,
        cycles,
    })
}

/// Look up the table entry for `opcode`.
#[inline]
pub fn decode(opcode: u8) -> Option<&'static OpcodeInfo> {
    OPCODE_TABLE[opcode as usize].as_ref()
}

pub static OPCODE_TABLE: [Option<OpcodeInfo>; 256] = {
    use AddressingMode::*;
    use Mnemonic::*;

    let mut t: [Option<OpcodeInfo>; 256] = [None; 256];

    // Loads
    t[0xA9] = op(Lda, Immediate, 2);
    t[0xA5] = op(Lda, ZeroPage, 3);
    t[0xAD] = op(Lda, Absolute, 4);
    t[0xA2] = op(Ldx, Immediate, 2);
    t[0xA6] = op(Ldx, ZeroPage, 3);
    t[0xAE] = op(Ldx, Absolute, 4);
    t[0xA0] = op(Ldy, Immediate, 2);
    t[0xA4] = op(Ldy, ZeroPage, 3);
    t[0xAC] = op(Ldy, Absolute, 4);

    // Stores
    t[0x85] = op(Sta, ZeroPage, 3);
    t[0x8D] = op(Sta, Absolute, 4);
    t[0x86] = op(Stx, ZeroPage, 3);
    t[0x8E] = op(Stx, Absolute, 4);
    t[0x84] = op(Sty, ZeroPage, 3);
    t[0x8C] = op(Sty, Absolute, 4);

    // ASL
    t[0x0A] = op(Asl, Accumulator, 2);
    t[0x06] = op(Asl, ZeroPage, 5);
    t[0x0E] = op(Asl, Absolute, 6);

    // Stack
    t[0x48] = op(Pha, Implied, 3);
    t[0x68] = op(Pla, Implied, 4);
    t[0x08] = op(Php, Implied, 3);
    t[0x28] = op(Plp, Implied, 4);

    // Subroutine / jump
    t[0x20] = op(Jsr, Absolute, 6);
    t[0x60] = op(Rts, Implied, 6);
    t[0x4C] = op(Jmp, Absolute, 3);

    // Branches (base cost; taken / page-cross penalties added at runtime)
    t[0x10] = op(Bpl, Relative, 2);
    t[0x30] = op(Bmi, Relative, 2);
    t[0x50] = op(Bvc, Relative, 2);
    t[0x70] = op(Bvs, Relative, 2);
    t[0x90] = op(Bcc, Relative, 2);
    t[0xB0] = op(Bcs, Relative, 2);
    t[0xD0] = op(Bne, Relative, 2);
    t[0xF0] = op(Beq, Relative, 2);

    // Increment / decrement
    t[0xE8] = op(Inx, Implied, 2);
    t[0xCA] = op(Dex, Implied, 2);
    t[0xC8] = op(Iny, Implied, 2);
    t[0x88] = op(Dey, Implied, 2);

    // Transfers
    t[0xAA] = op(Tax, Implied, 2);
    t[0x8A] = op(Txa, Implied, 2);
    t[0xA8] = op(Tay, Implied, 2);
    t[0x98] = op(Tya, Implied, 2);
    t[0x9A] = op(Txs, Implied, 2);
    t[0xBA] = op(Tsx, Implied, 2);

    // Flags
    t[0x38] = op(Sec, Implied, 2);
    t[0x18] = op(Clc, Implied, 2);
    t[0xB8] = op(Clv, Implied, 2);
    t[0x78] = op(Sei, Implied, 2);
    t[0x58] = op(Cli, Implied, 2);
    t[0xF8] = op(Sed, Implied, 2);
    t[0xD8] = op(Cld, Implied, 2);

    t[0xEA] = op(Nop, Implied, 2);
    t[0x02] = op(Brk, Implied, 1);

    t
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_expected_population() {
        let count = OPCODE_TABLE.iter().filter(|e| e.is_some()).count();
        assert_eq!(count, 52);
    }

    #[test]
    fn cycles_basic_examples() {
        assert_eq!(decode(0xA9).map(|o| o.cycles), Some(2));
        assert_eq!(decode(0x0E).map(|o| o.cycles), Some(6));
        assert_eq!(decode(0x4C).map(|o| o.cycles), Some(3));
        assert_eq!(decode(0x20).map(|o| o.cycles), Some(6));
        assert_eq!(decode(0x02).map(|o| o.cycles), Some(1));
    }

    #[test]
    fn only_halt_costs_less_than_two() {
        for (byte, entry) in OPCODE_TABLE.iter().enumerate() {
            if let Some(info) = entry {
                if info.mnemonic == Mnemonic::Brk {
                    assert_eq!(info.cycles, 1);
                } else {
                    assert!(info.cycles >= 2, "opcode {byte:02X} below 2 cycles");
                }
            }
        }
    }

    #[test]
    fn real_brk_and_illegal_bytes_are_absent() {
        assert!(decode(0x00).is_none());
        assert!(decode(0xFF).is_none());
        assert!(decode(0x69).is_none()); // ADC not part of this core
    }

    #[test]
    fn branches_are_relative() {
        for b in [0x10u8, 0x30, 0x50, 0x70, 0x90, 0xB0, 0xD0, 0xF0] {
            let info = decode(b).expect("branch");
            assert_eq!(info.mode, AddressingMode::Relative);
            assert_eq!(info.cycles, 2);
        }
    }

    #[test]
    fn mnemonic_display() {
        assert_eq!(Mnemonic::Lda.to_string(), "LDA");
        assert_eq!(decode(0x02).map(|o| o.mnemonic.as_str()), Some("BRK"));
    }
}
