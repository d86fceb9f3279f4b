//! Bracket resolution: turns source text into a [`Program`].

use tracing::debug;

use crate::error::{BracketKind, CompileError};
use crate::instruction::{Instruction, Opcode};
use crate::program::Program;

/// Compile `source` into a program of `source.chars().count() + 1` instructions.
///
/// Every character occupies exactly one slot, so comments keep positions
/// aligned with the source. Matching brackets record each other's position:
/// the `[` holds the index of its `]` and the `]` holds the index of its `[`.
///
/// A stray `]` fails as soon as it is seen; any `[` still pending once the
/// source is exhausted fails after the pass.
///
/// Positions count Unicode chars, not bytes, so a multibyte comment takes a
/// single slot and listing addresses differ from a byte-indexed compiler.
pub fn compile(source: &str) -> Result<Program, CompileError> {
    let mut instructions: Vec<Instruction> = Vec::with_capacity(source.len() + 1);
    // Positions of `[` waiting for their `]`.
    let mut pending: Vec<usize> = Vec::new();
    let mut max_depth = 0usize;

    for (i, c) in source.chars().enumerate() {
        let opcode = Opcode::from_char(c);
        match opcode {
            Opcode::JumpIfZero => {
                pending.push(i);
                max_depth = max_depth.max(pending.len());
                // Patched once the matching `]` is found.
                instructions.push(Instruction::new(opcode));
            }
            Opcode::JumpIfNotZero => {
                let Some(open) = pending.pop() else {
                    return Err(CompileError::UnmatchedBracket {
                        position: i,
                        kind: BracketKind::Close,
                        unclosed: 0,
                    });
                };
                instructions[open].addr = i;
                instructions.push(Instruction::jump(opcode, open));
            }
            _ => instructions.push(Instruction::new(opcode)),
        }
    }

    if let Some(&innermost) = pending.last() {
        return Err(CompileError::UnmatchedBracket {
            position: innermost,
            kind: BracketKind::Open,
            unclosed: pending.len(),
        });
    }

    instructions.push(Instruction::new(Opcode::EndOfProgram));
    debug!(
        instructions = instructions.len(),
        max_depth, "compiled program"
    );
    Ok(Program::from_instructions(instructions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ops(program: &Program) -> Vec<Opcode> {
        program.iter().map(|i| i.opcode).collect()
    }

    #[test]
    fn one_instruction_per_character_plus_sentinel() {
        let program = compile("+a>").expect("valid");
        assert_eq!(
            ops(&program),
            vec![Opcode::Incr, Opcode::NoOp, Opcode::Next, Opcode::EndOfProgram]
        );
    }

    #[test]
    fn brackets_point_at_each_other() {
        let program = compile("+[-]").expect("valid");
        assert_eq!(program[1], Instruction::jump(Opcode::JumpIfZero, 3));
        assert_eq!(program[3], Instruction::jump(Opcode::JumpIfNotZero, 1));
    }

    #[test]
    fn nested_pairs_are_resolved_independently() {
        let program = compile("[[-]>]").expect("valid");
        assert_eq!(program[0].addr, 5);
        assert_eq!(program[5].addr, 0);
        assert_eq!(program[1].addr, 3);
        assert_eq!(program[3].addr, 1);
        assert_eq!(program.len(), 7);
    }

    #[test]
    fn comments_between_brackets_keep_addresses_aligned() {
        let program = compile("[ loop ]").expect("valid");
        assert_eq!(program[0].addr, 7);
        assert_eq!(program[7].addr, 0);
    }

    #[test]
    fn stray_close_is_reported_at_its_position() {
        let err = compile("+]").unwrap_err();
        assert_eq!(
            err,
            CompileError::UnmatchedBracket { position: 1, kind: BracketKind::Close, unclosed: 0 }
        );
    }

    #[test]
    fn close_before_open_is_an_error_even_when_counts_balance() {
        let err = compile("][").unwrap_err();
        assert!(matches!(
            err,
            CompileError::UnmatchedBracket { kind: BracketKind::Close, position: 0, .. }
        ));
    }

    #[test]
    fn unclosed_opens_are_counted() {
        let err = compile("[[+[]").unwrap_err();
        assert_eq!(
            err,
            CompileError::UnmatchedBracket { position: 1, kind: BracketKind::Open, unclosed: 2 }
        );
    }

    #[test]
    fn multibyte_comments_take_one_slot_each() {
        let program = compile("é[ü]").expect("valid");
        assert_eq!(program.len(), 5);
        assert_eq!(program[1].addr, 3);
    }

    fn balanced_source() -> impl Strategy<Value = String> {
        let leaf = "[-+<>.,#a-z ]{0,6}";
        leaf.prop_recursive(4, 64, 4, |inner| {
            prop::collection::vec(inner, 1..4).prop_map(|parts| format!("[{}]", parts.concat()))
        })
    }

    proptest! {
        #[test]
        fn balanced_sources_compile_to_len_plus_one(
            parts in prop::collection::vec(balanced_source(), 0..4)
        ) {
            let source = parts.concat();
            let program = compile(&source).expect("balanced source must compile");
            prop_assert_eq!(program.len(), source.chars().count() + 1);
            prop_assert_eq!(program[program.len() - 1].opcode, Opcode::EndOfProgram);

            for (i, ins) in program.iter().enumerate() {
                match ins.opcode {
                    Opcode::JumpIfZero => {
                        prop_assert_eq!(program[ins.addr].opcode, Opcode::JumpIfNotZero);
                        prop_assert_eq!(program[ins.addr].addr, i);
                        prop_assert!(ins.addr > i);
                    }
                    Opcode::JumpIfNotZero => {
                        prop_assert_eq!(program[ins.addr].opcode, Opcode::JumpIfZero);
                        prop_assert_eq!(program[ins.addr].addr, i);
                    }
                    _ => {}
                }
            }
        }

        #[test]
        fn an_extra_bracket_always_fails(body in balanced_source(), at_start in any::<bool>()) {
            let opened = format!("[{body}");
            let unmatched_open = matches!(
                compile(&opened),
                Err(CompileError::UnmatchedBracket { kind: BracketKind::Open, .. })
            );
            prop_assert!(unmatched_open);

            let closed = if at_start { format!("]{body}") } else { format!("{body}]") };
            let unmatched_close = matches!(
                compile(&closed),
                Err(CompileError::UnmatchedBracket { kind: BracketKind::Close, .. })
            );
            prop_assert!(unmatched_close);
        }
    }
}
