//! A Brainfuck compiler and bytecode virtual machine.
//!
//! Source text is compiled once into a flat [`Program`] in which every
//! bracket already knows where its partner is. The [`Machine`] then runs
//! that program with direct indexed jumps instead of scanning the source
//! for matching brackets at each loop test.
//!
//! Features and behaviors:
//! - Memory tape of 30,000 zeroed cells by default, cells wrap at 256.
//! - Strict pointer bounds: moving left from cell 0 or right past the end
//!   returns [`RuntimeError::PointerOutOfBounds`].
//! - Input `,` reads a single byte; on end of input the current cell is left unchanged.
//! - `#` writes a dump of the first 16 cells and the pointer to the output stream.
//! - Every other character is a comment and compiles to a no-op in its own slot.
//! - Unmatched brackets are reported by [`compile`] as a [`CompileError`].
//!
//! Quick start:
//!
//! ```
//! use rust_bf_vm::{compile, Machine};
//!
//! let program = compile("+++++++[>++++++++++<-]>+++.").expect("balanced brackets");
//! let mut output = Vec::new();
//! Machine::new(&program)
//!     .run(&mut std::io::empty(), &mut output)
//!     .expect("program should run");
//! assert_eq!(output, b"I");
//! ```

pub mod cli_util;
pub mod compiler;
pub mod config;
pub mod dump;
pub mod error;
pub mod instruction;
pub mod logging;
pub mod machine;
pub mod program;
pub mod tape;

pub use compiler::compile;
pub use config::MachineConfig;
pub use error::{BracketKind, CompileError, ExitStatus, RuntimeError};
pub use instruction::{Instruction, Opcode};
pub use machine::{Machine, State};
pub use program::{Listing, Program};
pub use tape::{Tape, DEFAULT_TAPE_LEN};
