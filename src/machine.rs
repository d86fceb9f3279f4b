//! The virtual machine that executes compiled programs.

use std::io::{self, Read, Write};

use tracing::{debug, trace, warn};

use crate::config::MachineConfig;
use crate::dump::write_dump;
use crate::error::RuntimeError;
use crate::instruction::Opcode;
use crate::program::Program;
use crate::tape::Tape;

/// Where a [`Machine`] is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// About to execute the instruction at this position.
    Running(usize),
    /// The end-of-program sentinel was reached.
    Halted,
}

/// Execution context for one run of a [`Program`].
///
/// Owns the tape and the instruction pointer; borrows the program, which is
/// never modified. Loops are plain index transfers between the two bracket
/// instructions of a pair, so nesting depth costs nothing at runtime.
pub struct Machine<'p> {
    program: &'p Program,
    tape: Tape,
    ip: usize,
    steps: u64,
}

impl<'p> Machine<'p> {
    /// Create a machine with a default 30,000-cell tape.
    pub fn new(program: &'p Program) -> Self {
        Self::with_config(program, MachineConfig::default())
    }

    pub fn with_config(program: &'p Program, config: MachineConfig) -> Self {
        Self::with_tape(program, Tape::new(config.tape_len))
    }

    /// Create a machine that starts from an existing tape, pointer included.
    pub fn with_tape(program: &'p Program, tape: Tape) -> Self {
        Self {
            program,
            tape,
            ip: 0,
            steps: 0,
        }
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Consume the machine, returning its tape.
    pub fn into_tape(self) -> Tape {
        self.tape
    }

    pub fn ip(&self) -> usize {
        self.ip
    }

    /// Number of instructions executed so far, not counting the sentinel.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn state(&self) -> State {
        match self.program.get(self.ip) {
            Some(ins) if ins.opcode != Opcode::EndOfProgram => State::Running(self.ip),
            _ => State::Halted,
        }
    }

    /// Execute one instruction.
    ///
    /// `[` on a zero cell lands *on* its `]`, which then sees the same zero
    /// and falls through; `]` on a non-zero cell lands on its `[`, which sees
    /// the same non-zero and enters the body again.
    pub fn step<R, W>(&mut self, input: &mut R, output: &mut W) -> Result<State, RuntimeError>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        let ip = self.ip;
        let Some(&ins) = self.program.get(ip) else {
            return Ok(State::Halted);
        };

        trace!(
            ip,
            pointer = self.tape.pointer(),
            cell = self.tape.get(),
            opcode = ?ins.opcode,
            "step"
        );

        let mut next = ip + 1;
        match ins.opcode {
            Opcode::EndOfProgram => return Ok(State::Halted),
            Opcode::Next => {
                if !self.tape.move_right() {
                    return Err(self.out_of_bounds(ip, '>'));
                }
            }
            Opcode::Prev => {
                if !self.tape.move_left() {
                    return Err(self.out_of_bounds(ip, '<'));
                }
            }
            Opcode::Incr => self.tape.increment(),
            Opcode::Decr => self.tape.decrement(),
            Opcode::Output => {
                output
                    .write_all(&[self.tape.get()])
                    .map_err(|source| RuntimeError::Io { ip, source })?;
            }
            Opcode::Input => {
                // End of input leaves the cell as it was.
                let byte = read_byte(input).map_err(|source| RuntimeError::Io { ip, source })?;
                if let Some(byte) = byte {
                    self.tape.set(byte);
                }
            }
            Opcode::Dump => {
                write_dump(&self.tape, output)
                    .map_err(|source| RuntimeError::Io { ip, source })?;
            }
            Opcode::JumpIfZero => {
                if self.tape.get() == 0 {
                    next = ins.addr;
                }
            }
            Opcode::JumpIfNotZero => {
                if self.tape.get() != 0 {
                    next = ins.addr;
                }
            }
            Opcode::NoOp => {}
        }

        self.ip = next;
        self.steps += 1;
        Ok(self.state())
    }

    /// Run until the end-of-program sentinel.
    ///
    /// `output` is flushed when the machine halts and before an error is
    /// returned.
    pub fn run<R, W>(&mut self, input: &mut R, output: &mut W) -> Result<(), RuntimeError>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        loop {
            match self.step(input, output) {
                Ok(State::Running(_)) => {}
                Ok(State::Halted) => {
                    debug!(steps = self.steps, "halted");
                    return output
                        .flush()
                        .map_err(|source| RuntimeError::Io { ip: self.ip, source });
                }
                Err(err) => {
                    warn!(error = %err, steps = self.steps, "execution failed");
                    let _ = output.flush();
                    return Err(err);
                }
            }
        }
    }

    fn out_of_bounds(&self, ip: usize, op: char) -> RuntimeError {
        RuntimeError::PointerOutOfBounds {
            ip,
            pointer: self.tape.pointer(),
            op,
        }
    }
}

fn read_byte<R: Read + ?Sized>(input: &mut R) -> io::Result<Option<u8>> {
    let mut buf = [0u8; 1];
    loop {
        match input.read(&mut buf) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(buf[0])),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}
