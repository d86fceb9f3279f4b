use crate::tape::DEFAULT_TAPE_LEN;

/// Settings for a [`crate::Machine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineConfig {
    /// Number of tape cells. Values below 1 are raised to 1.
    pub tape_len: usize,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            tape_len: DEFAULT_TAPE_LEN,
        }
    }
}

impl MachineConfig {
    pub fn with_tape_len(mut self, tape_len: usize) -> Self {
        self.tape_len = tape_len;
        self
    }
}
