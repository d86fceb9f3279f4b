//! The machine's byte memory and its data pointer.

/// Number of cells on a default tape.
pub const DEFAULT_TAPE_LEN: usize = 30_000;

/// A fixed-length tape of zero-initialized `u8` cells with a data pointer.
///
/// Pointer moves are checked: stepping off either end leaves the tape
/// untouched and reports failure to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: Vec<u8>,
    pointer: usize,
}

impl Default for Tape {
    fn default() -> Self {
        Self::new(DEFAULT_TAPE_LEN)
    }
}

impl Tape {
    /// Create a zeroed tape of `len` cells. A tape always has at least one cell.
    pub fn new(len: usize) -> Self {
        Self {
            cells: vec![0; len.max(1)],
            pointer: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn pointer(&self) -> usize {
        self.pointer
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Value of the cell under the pointer.
    pub fn get(&self) -> u8 {
        self.cells[self.pointer]
    }

    pub fn set(&mut self, value: u8) {
        self.cells[self.pointer] = value;
    }

    pub fn increment(&mut self) {
        let cell = &mut self.cells[self.pointer];
        *cell = cell.wrapping_add(1);
    }

    pub fn decrement(&mut self) {
        let cell = &mut self.cells[self.pointer];
        *cell = cell.wrapping_sub(1);
    }

    /// Move right. Returns `false` without moving when already on the last cell.
    #[must_use]
    pub fn move_right(&mut self) -> bool {
        if self.pointer + 1 >= self.cells.len() {
            return false;
        }
        self.pointer += 1;
        true
    }

    /// Move left. Returns `false` without moving when already on cell 0.
    #[must_use]
    pub fn move_left(&mut self) -> bool {
        match self.pointer.checked_sub(1) {
            Some(p) => {
                self.pointer = p;
                true
            }
            None => false,
        }
    }
}
