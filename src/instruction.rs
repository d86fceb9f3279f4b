//! The fixed instruction set.

/// Operation tag of a compiled instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// `>` move the tape pointer right.
    Next,
    /// `<` move the tape pointer left.
    Prev,
    /// `+` increment the current cell (wrapping).
    Incr,
    /// `-` decrement the current cell (wrapping).
    Decr,
    /// `.` write the current cell to the output stream.
    Output,
    /// `,` read one byte into the current cell; unchanged on end of input.
    Input,
    /// `[` jump onto the matching `]` when the current cell is zero.
    JumpIfZero,
    /// `]` jump onto the matching `[` when the current cell is non-zero.
    JumpIfNotZero,
    /// `#` print the diagnostic tape dump.
    Dump,
    /// Any other character. Keeps addresses aligned with source positions.
    NoOp,
    /// Sentinel appended after the last source character.
    EndOfProgram,
}

impl Opcode {
    /// Map one source character to its opcode.
    pub fn from_char(c: char) -> Self {
        match c {
            '>' => Opcode::Next,
            '<' => Opcode::Prev,
            '+' => Opcode::Incr,
            '-' => Opcode::Decr,
            '.' => Opcode::Output,
            ',' => Opcode::Input,
            '[' => Opcode::JumpIfZero,
            ']' => Opcode::JumpIfNotZero,
            '#' => Opcode::Dump,
            _ => Opcode::NoOp,
        }
    }

    /// Source character for this opcode, if it has one.
    pub fn symbol(self) -> Option<char> {
        match self {
            Opcode::Next => Some('>'),
            Opcode::Prev => Some('<'),
            Opcode::Incr => Some('+'),
            Opcode::Decr => Some('-'),
            Opcode::Output => Some('.'),
            Opcode::Input => Some(','),
            Opcode::JumpIfZero => Some('['),
            Opcode::JumpIfNotZero => Some(']'),
            Opcode::Dump => Some('#'),
            Opcode::NoOp | Opcode::EndOfProgram => None,
        }
    }

    pub fn is_jump(self) -> bool {
        matches!(self, Opcode::JumpIfZero | Opcode::JumpIfNotZero)
    }
}

/// One compiled instruction.
///
/// `addr` is only meaningful for the two jump opcodes, where it holds the
/// position of the partner bracket. It is zero for everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: Opcode,
    pub addr: usize,
}

impl Instruction {
    pub fn new(opcode: Opcode) -> Self {
        Self { opcode, addr: 0 }
    }

    pub fn jump(opcode: Opcode, addr: usize) -> Self {
        Self { opcode, addr }
    }
}
