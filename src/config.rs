//! Machine configuration.

/// Everything needed to bring a machine to the `Ready` state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MachineConfig {
    /// Raw cartridge image: 16-byte header followed by the 32 KiB PRG window.
    pub image: Vec<u8>,
    /// Upper bound on instructions executed by a single `run()` call.
    /// `None` runs until halt or stop.
    pub instruction_budget: Option<u64>,
}

impl MachineConfig {
    pub fn new(image: Vec<u8>) -> Self {
        Self {
            image,
            instruction_budget: None,
        }
    }

    pub fn with_instruction_budget(mut self, budget: u64) -> Self {
        self.instruction_budget = Some(budget);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_budget() {
        let cfg = MachineConfig::new(vec![0u8; 4]).with_instruction_budget(10);
        assert_eq!(cfg.image.len(), 4);
        assert_eq!(cfg.instruction_budget, Some(10));
        assert_eq!(MachineConfig::default().instruction_budget, None);
    }
}
