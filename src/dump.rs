//! The `#` diagnostic: a fixed view of the start of the tape.

use std::io::{self, Write};

use crate::tape::Tape;

/// Number of leading cells shown by a dump.
pub const DUMP_CELLS: usize = 16;
const PER_ROW: usize = 16;
const RULE: &str = "---- DUMP ----";

/// Write the dump of `tape` to `out`.
///
/// Shows the first [`DUMP_CELLS`] cells in hex followed by the pointer
/// position and the value under it. The tape is not modified.
pub fn write_dump<W: Write + ?Sized>(tape: &Tape, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{RULE}")?;

    let shown = &tape.cells()[..tape.len().min(DUMP_CELLS)];
    for (i, cell) in shown.iter().enumerate() {
        let sep = if i % PER_ROW == PER_ROW - 1 || i + 1 == shown.len() { "\n" } else { " " };
        write!(out, "0x{cell:02x}{sep}")?;
    }

    writeln!(
        out,
        "pointer at cell {} with value: 0x{:02x}",
        tape.pointer(),
        tape.get()
    )?;
    writeln!(out, "{RULE}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(tape: &Tape) -> String {
        let mut buf = Vec::new();
        write_dump(tape, &mut buf).expect("writing to a Vec cannot fail");
        String::from_utf8(buf).expect("dump is ascii")
    }

    #[test]
    fn dump_of_fresh_tape() {
        let tape = Tape::default();
        let zeros = vec!["0x00"; 16].join(" ");
        let expected = format!(
            "\n---- DUMP ----\n{zeros}\npointer at cell 0 with value: 0x00\n---- DUMP ----\n"
        );
        assert_eq!(render(&tape), expected);
    }

    #[test]
    fn dump_shows_pointer_and_value() {
        let mut tape = Tape::default();
        tape.set(0xab);
        assert!(tape.move_right());
        tape.set(1);
        let out = render(&tape);
        assert!(out.contains("\n0xab 0x01 0x00"));
        assert!(out.contains("pointer at cell 1 with value: 0x01\n"));
    }

    #[test]
    fn short_tape_shows_only_existing_cells() {
        let mut tape = Tape::new(3);
        tape.set(7);
        let out = render(&tape);
        assert!(out.contains("\n0x07 0x00 0x00\npointer at cell 0"));
    }
}
