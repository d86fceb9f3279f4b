//! Compiled programs and their human-readable listing.

use std::fmt;
use std::ops::Index;

use crate::instruction::{Instruction, Opcode};

/// An immutable, compiled instruction sequence.
///
/// Produced only by [`crate::compile`]. It always ends with a single
/// [`Opcode::EndOfProgram`] and every jump's `addr` points at its partner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    pub(crate) fn from_instructions(instructions: Vec<Instruction>) -> Self {
        debug_assert_eq!(
            instructions.last().map(|i| i.opcode),
            Some(Opcode::EndOfProgram)
        );
        Self { instructions }
    }

    /// Number of instructions, including the end-of-program sentinel.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Always false: a program holds at least the sentinel.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }

    /// Indented listing of the program, one line per operator.
    pub fn listing(&self) -> Listing<'_> {
        Listing { program: self }
    }
}

impl Index<usize> for Program {
    type Output = Instruction;

    fn index(&self, index: usize) -> &Self::Output {
        &self.instructions[index]
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}

/// Display adapter returned by [`Program::listing`].
///
/// Comments are skipped, loop bodies are indented two spaces per level and
/// brackets show their partner's address in hex:
///
/// ```text
/// incr
/// [ (0x0004)
///   decr
/// ] (0x0001)
/// ```
pub struct Listing<'a> {
    program: &'a Program,
}

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut indent = 0usize;
        for ins in self.program {
            match ins.opcode {
                Opcode::EndOfProgram => break,
                Opcode::NoOp => {}
                Opcode::JumpIfZero => {
                    writeln!(f, "{:indent$}[ (0x{:04x})", "", ins.addr)?;
                    indent += 2;
                }
                Opcode::JumpIfNotZero => {
                    indent = indent.saturating_sub(2);
                    writeln!(f, "{:indent$}] (0x{:04x})", "", ins.addr)?;
                }
                op => writeln!(f, "{:indent$}{}", "", mnemonic(op))?,
            }
        }
        Ok(())
    }
}

fn mnemonic(op: Opcode) -> &'static str {
    match op {
        Opcode::Next => "next",
        Opcode::Prev => "prev",
        Opcode::Incr => "incr",
        Opcode::Decr => "decr",
        Opcode::Output => "out",
        Opcode::Input => "inp",
        Opcode::Dump => "dump",
        Opcode::JumpIfZero => "jz",
        Opcode::JumpIfNotZero => "jnz",
        Opcode::NoOp => "nop",
        Opcode::EndOfProgram => "eop",
    }
}
