//! Error types for compilation and execution.

use std::fmt;

/// Which side of a loop was left without a partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketKind {
    Open,
    Close,
}

impl fmt::Display for BracketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BracketKind::Open => write!(f, "opening bracket '['"),
            BracketKind::Close => write!(f, "closing bracket ']'"),
        }
    }
}

/// Errors raised while resolving brackets. No program is produced when one occurs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// A `[` or `]` has no matching partner.
    ///
    /// For [`BracketKind::Close`] `position` is the stray `]` itself. For
    /// [`BracketKind::Open`] it is the innermost `[` still pending when the
    /// source ran out, and `unclosed` counts every pending `[`.
    #[error("unmatched {kind} at position {position}")]
    UnmatchedBracket {
        position: usize,
        kind: BracketKind,
        unclosed: usize,
    },
}

impl CompileError {
    /// Position of the offending bracket in the source.
    pub fn position(&self) -> usize {
        match self {
            CompileError::UnmatchedBracket { position, .. } => *position,
        }
    }
}

/// Errors raised by the machine while executing a compiled program.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// The tape pointer attempted to move left of cell 0 or beyond the last cell.
    #[error("pointer out of bounds at instruction {ip} (pointer={pointer}, op='{op}')")]
    PointerOutOfBounds { ip: usize, pointer: usize, op: char },

    /// Reading input or writing output failed.
    #[error("I/O error at instruction {ip}: {source}")]
    Io {
        ip: usize,
        #[source]
        source: std::io::Error,
    },
}

impl RuntimeError {
    /// Instruction position where execution stopped.
    pub fn ip(&self) -> usize {
        match self {
            RuntimeError::PointerOutOfBounds { ip, .. } | RuntimeError::Io { ip, .. } => *ip,
        }
    }
}

/// Process exit statuses used by the command-line front ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success = 0,
    Runtime = 1,
    /// Mirrors the status clap exits with on bad arguments; never returned directly.
    Usage = 2,
    SourceIo = 3,
    Compile = 4,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        self as i32
    }
}
