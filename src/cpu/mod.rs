/*!
cpu::mod - Public facade for the 6502 CPU core.

```text
    state.rs        - Registers, flags, reset.
    regs.rs         - `CpuRegs` trait the handlers are generic over.
    addressing.rs   - Addressing modes & operand resolution.
    table.rs        - 256-entry opcode table (mnemonic, mode, base cycles).
    cycles.rs       - Page-cross / branch timing rules.
    execute.rs      - Instruction semantic helpers (stack, loads, ASL, branch).
    dispatch/       - Single-instruction orchestrator + family handlers.
    core.rs         - `Cpu` facade over `CpuState`.
```

Usage:
```rust
use picones::bus::Bus;
use picones::cpu::Cpu;

let mut bus = Bus::new();
# let mut image = vec![0u8; 0x10 + 0x8000];
# image[0x10] = 0xEA;
# image[0x10 + 0x7FFD] = 0x80;
bus.load_image(&image).unwrap();
let mut cpu = Cpu::new();
cpu.reset(&bus);
let executed = cpu.step(&mut bus).unwrap();
assert_eq!(executed.cycles, 2);
```
*/

pub mod addressing;
pub mod core;
pub mod cycles;
pub mod dispatch;
pub mod execute;
pub mod regs;
pub mod state;
pub mod table;

pub use crate::cpu::core::Cpu;
pub use crate::cpu::dispatch::Executed;
pub use crate::cpu::regs::CpuRegs;
pub use crate::cpu::state::{
    BREAK, CARRY, CpuState, DECIMAL, IRQ_DISABLE, NEGATIVE, OVERFLOW, UNUSED, ZERO,
};
pub use crate::cpu::table::{Mnemonic, OpcodeInfo};
