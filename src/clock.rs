/*!
Video clock collaborator.

Purpose
- Receive the timing fan-out of the execution loop. After every executed
  instruction the machine calls `advance` once with that instruction's
  cycle count converted to video clock ticks (3 per CPU cycle).
- A real picture unit would implement `VideoClock`; the core ships
  `CycleCounter`, which only records what it was told.
*/

pub use crate::cpu::cycles::PPU_CYCLES_PER_CPU_CYCLE;

/// Sink for video clock ticks produced by the CPU.
pub trait VideoClock {
    fn advance(&mut self, ppu_cycles: u64);
}

/// Default clock: accumulates ticks and counts `advance` calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleCounter {
    ppu_cycles: u64,
    advances: u64,
}

impl CycleCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total video clock ticks received.
    pub fn ppu_cycles(&self) -> u64 {
        self.ppu_cycles
    }

    /// CPU cycles implied by the ticks received.
    pub fn cpu_cycles(&self) -> u64 {
        self.ppu_cycles / PPU_CYCLES_PER_CPU_CYCLE
    }

    /// Number of `advance` calls (one per executed instruction).
    pub fn advances(&self) -> u64 {
        self.advances
    }
}

impl VideoClock for CycleCounter {
    fn advance(&mut self, ppu_cycles: u64) {
        self.ppu_cycles = self.ppu_cycles.wrapping_add(ppu_cycles);
        self.advances += 1;
    }
}

impl<V: VideoClock + ?Sized> VideoClock for &mut V {
    fn advance(&mut self, ppu_cycles: u64) {
        (**self).advance(ppu_cycles);
    }
}

impl<V: VideoClock + ?Sized> VideoClock for Box<V> {
    fn advance(&mut self, ppu_cycles: u64) {
        (**self).advance(ppu_cycles);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_accumulates() {
        let mut c = CycleCounter::new();
        c.advance(6);
        c.advance(3);
        assert_eq!(c.ppu_cycles(), 9);
        assert_eq!(c.cpu_cycles(), 3);
        assert_eq!(c.advances(), 2);
    }

    #[test]
    fn boxed_clock_forwards() {
        let mut boxed: Box<dyn VideoClock> = Box::new(CycleCounter::new());
        boxed.advance(3);
        let mut counter = CycleCounter::new();
        {
            let mut by_ref = &mut counter;
            VideoClock::advance(&mut by_ref, 12);
        }
        assert_eq!(counter.ppu_cycles(), 12);
    }
}
