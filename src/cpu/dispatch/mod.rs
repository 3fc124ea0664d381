/*!
dispatch - Orchestrator for a single 6502 CPU step

Overview
========
Coordinates one instruction:
1. Fetch the opcode at PC and advance PC by one.
2. Decode through the static opcode table. A missing entry latches the
   halted flag and yields `EmuError::UnimplementedOpcode`.
3. Resolve the operand for the entry's addressing mode (advances PC past
   the operand bytes).
4. Run the family handler chain. The first handler that recognizes the
   mnemonic and accepts the operand shape executes it and may add dynamic
   cycles (branches only). If none does, the step halts with
   `EmuError::UnimplementedOpcode`, the same as a missing table entry.

Family Handlers
===============
  load_store    LDA/LDX/LDY/STA/STX/STY
  rmw           ASL
  branches      BPL/BMI/BVC/BVS/BCC/BCS/BNE/BEQ
  control_flow  JMP/JSR/RTS/BRK
  misc          transfers, stack, register inc/dec, flags, NOP

Every handler shares one signature:
```text
fn handle<C: CpuRegs>(Mnemonic, Operand, &mut C, &mut Bus, &mut u32) -> bool
```

Cycle Ticking
=============
The dispatcher never ticks a clock. It returns the instruction's cycle
count inside `Executed`; the machine forwards it to the video clock.
*/

mod branches;
mod control_flow;
mod load_store;
mod misc;
mod rmw;

use log::{error, trace};

use crate::bus::Bus;
use crate::cpu::addressing::{Operand, fetch_byte, resolve};
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::{Mnemonic, OpcodeInfo, decode};
use crate::error::{EmuError, Result};

type FamilyHandler<C> = fn(Mnemonic, Operand, &mut C, &mut Bus, &mut u32) -> bool;

/// Outcome of one executed instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Executed {
    /// Address the opcode was fetched from.
    pub pc: u16,
    pub opcode: u8,
    pub info: &'static OpcodeInfo,
    pub operand: Operand,
    /// Base cycles plus any branch penalty.
    pub cycles: u32,
}

impl Executed {
    /// Operand rendered for listings and traces.
    pub fn operand_text(&self) -> String {
        self.operand.text(self.info.mode)
    }
}

/// Execute one instruction and report what ran.
pub(crate) fn step<C: CpuRegs>(cpu: &mut C, bus: &mut Bus) -> Result<Executed> {
    let pc = cpu.pc();
    let opcode = fetch_byte(cpu, bus);

    let Some(info) = decode(opcode) else {
        error!("unimplemented opcode ${opcode:02X} at ${pc:04X}");
        cpu.set_halted(true);
        return Err(EmuError::UnimplementedOpcode { opcode, pc });
    };

    let operand = resolve(info.mode, cpu, bus);
    let mut cycles = info.cycles;

    if !run_family(info.mnemonic, operand, cpu, bus, &mut cycles) {
        // Table entry with no executing family, or a mode its family rejects.
        error!("opcode ${opcode:02X} ({} {:?}) has no handler", info.mnemonic, info.mode);
        cpu.set_halted(true);
        return Err(EmuError::UnimplementedOpcode { opcode, pc });
    }

    trace!(
        "${pc:04X} {:02X} {} {} cycles={cycles}",
        opcode,
        info.mnemonic,
        operand.text(info.mode)
    );

    Ok(Executed {
        pc,
        opcode,
        info,
        operand,
        cycles,
    })
}

/// Offer the instruction to each family in turn; false if none executed it.
fn run_family<C: CpuRegs>(
    mnemonic: Mnemonic,
    operand: Operand,
    cpu: &mut C,
    bus: &mut Bus,
    cycles: &mut u32,
) -> bool {
    let chain: [FamilyHandler<C>; 5] = [
        load_store::handle,
        rmw::handle,
        branches::handle,
        control_flow::handle,
        misc::handle,
    ];
    chain.iter().any(|handle| handle(mnemonic, operand, cpu, bus, cycles))
}
