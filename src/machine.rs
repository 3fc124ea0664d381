/*!
machine.rs - Execution loop and lifecycle of one emulated machine.

Lifecycle
=========
```text
    Uninitialized --load_image--> Ready --reset--> Running --BRK/error/stop--> Halted
                                                      ^                          |
                                                      +----------reset-----------+
```

- `run()` requires `Running`. It returns `NoImageLoaded` before any image
  was loaded and `NotReset` when an image is loaded but `reset()` was never
  called. A `Halted` machine returns immediately with zero instructions.
- Loading a new image always lands in `Ready`; RAM is kept.
- `reset()` rebuilds registers from the reset vector. RAM persists.

Timing
======
Every executed instruction (including BRK) produces exactly one
`VideoClock::advance(cycles * 3)` call. A failing decode advances nothing.

Cancellation
============
`StopHandle` is a cloneable, `Send` flag. The loop polls it once per
instruction boundary; a stop halts the machine after the in-flight
instruction completes. `reset()` clears it.
*/

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info, warn};

use crate::bus::Bus;
use crate::clock::{CycleCounter, VideoClock};
use crate::config::MachineConfig;
use crate::cpu::cycles::ppu_cycles;
use crate::cpu::{Cpu, CpuState};
use crate::error::{EmuError, Result};
use crate::trace::{TraceEntry, TraceSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineState {
    Uninitialized,
    Ready,
    Running,
    Halted,
}

/// Why a `run()` call returned without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// BRK executed, or the machine was already halted.
    Halted,
    /// A `StopHandle` requested a stop.
    Stopped,
    /// The configured instruction budget ran out; the machine is still `Running`.
    BudgetExhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub instructions: u64,
    /// CPU cycles executed during this call.
    pub cycles: u64,
    pub reason: StopReason,
}

/// Cooperative stop request shared with other threads.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn request_stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stop_requested(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn clear(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

pub struct Machine<V: VideoClock = CycleCounter> {
    cpu: Cpu,
    bus: Bus,
    clock: V,
    state: MachineState,
    tracer: Option<Box<dyn TraceSink + Send>>,
    stop: StopHandle,
    instruction_budget: Option<u64>,
}

impl Machine<CycleCounter> {
    pub fn new() -> Self {
        Self::with_clock(CycleCounter::new())
    }

    /// Build a machine and load `config.image` (state `Ready`).
    pub fn from_config(config: MachineConfig) -> Result<Self> {
        let mut machine = Self::new();
        machine.load_image(&config.image)?;
        machine.instruction_budget = config.instruction_budget;
        Ok(machine)
    }
}

impl Default for Machine<CycleCounter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VideoClock> Machine<V> {
    pub fn with_clock(clock: V) -> Self {
        Self {
            cpu: Cpu::new(),
            bus: Bus::new(),
            clock,
            state: MachineState::Uninitialized,
            tracer: None,
            stop: StopHandle::default(),
            instruction_budget: None,
        }
    }

    /// Install a cartridge image. On failure the previous image and state are kept.
    pub fn load_image(&mut self, image: &[u8]) -> Result<()> {
        self.bus.load_image(image)?;
        self.state = MachineState::Ready;
        Ok(())
    }

    /// Reinitialize registers from the reset vector and enter `Running`.
    pub fn reset(&mut self) -> Result<()> {
        if !self.bus.has_image() {
            return Err(EmuError::NoImageLoaded);
        }
        self.cpu.reset(&self.bus);
        self.stop.clear();
        self.state = MachineState::Running;
        debug!("reset: pc=${:04X}", self.cpu.pc());
        Ok(())
    }

    /// Execute a single instruction and return its CPU cycle count.
    /// A halted machine executes nothing and reports 0.
    pub fn step(&mut self) -> Result<u32> {
        match self.state {
            MachineState::Uninitialized => Err(EmuError::NoImageLoaded),
            MachineState::Ready => Err(EmuError::NotReset),
            MachineState::Halted => Ok(0),
            MachineState::Running => self.execute_one(),
        }
    }

    /// Run until BRK, a stop request, the instruction budget, or an error.
    pub fn run(&mut self) -> Result<RunSummary> {
        match self.state {
            MachineState::Uninitialized => return Err(EmuError::NoImageLoaded),
            MachineState::Ready => return Err(EmuError::NotReset),
            MachineState::Halted => {
                return Ok(RunSummary {
                    instructions: 0,
                    cycles: 0,
                    reason: StopReason::Halted,
                });
            }
            MachineState::Running => {}
        }

        let mut instructions = 0u64;
        let mut cycles = 0u64;
        let reason = loop {
            if self.state == MachineState::Halted {
                break StopReason::Halted;
            }
            if self.stop.is_stop_requested() {
                self.cpu.set_halted(true);
                self.state = MachineState::Halted;
                break StopReason::Stopped;
            }
            if self
                .instruction_budget
                .is_some_and(|budget| instructions >= budget)
            {
                break StopReason::BudgetExhausted;
            }
            cycles += self.execute_one()? as u64;
            instructions += 1;
        };

        info!(
            "run stopped ({reason:?}): {instructions} instructions, {cycles} cycles, pc=${:04X}",
            self.cpu.pc()
        );
        Ok(RunSummary {
            instructions,
            cycles,
            reason,
        })
    }

    fn execute_one(&mut self) -> Result<u32> {
        let executed = match self.cpu.step(&mut self.bus) {
            Ok(executed) => executed,
            Err(err) => {
                self.cpu.set_halted(true);
                self.state = MachineState::Halted;
                return Err(err);
            }
        };

        self.clock.advance(ppu_cycles(executed.cycles));

        if let Some(tracer) = self.tracer.as_mut() {
            let entry = TraceEntry::new(&executed, self.cpu.state());
            if let Err(err) = tracer.record(&entry) {
                warn!("trace sink failed at ${:04X}: {err}", executed.pc);
            }
        }

        if self.cpu.is_halted() {
            self.state = MachineState::Halted;
        }
        Ok(executed.cycles)
    }

    pub fn set_tracer<T: TraceSink + Send + 'static>(&mut self, tracer: T) {
        self.tracer = Some(Box::new(tracer));
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn state(&self) -> MachineState {
        self.state
    }

    pub fn cpu(&self) -> &CpuState {
        self.cpu.state()
    }

    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Host access for poking RAM between runs.
    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    pub fn clock(&self) -> &V {
        &self.clock
    }
}
