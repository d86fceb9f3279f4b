use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::time::Duration;

fn cargo_bin() -> Command { Command::cargo_bin("bf").unwrap() }

fn source_file(content: &str) -> tempfile::NamedTempFile {
    let mut tf = tempfile::NamedTempFile::new().expect("tempfile");
    write!(tf, "{}", content).unwrap();
    tf
}

#[test]
fn test_plus_plus_plus_dot_writes_exactly_one_byte() {
    let tf = source_file("+++.");
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg(tf.path())
        .assert()
        .success()
        .stdout(predicate::eq(&[3u8][..]))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_hello_world_with_comments() {
    let tf = source_file(
        "Hello World program\n\
         ++++++++++[>+++++++>++++++++++>+++>+<<<<-]\n\
         >++.>+.+++++++..+++.>++.<<+++++++++++++++.>.+++.------.--------.>+.>.\n",
    );
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg(tf.path())
        .assert()
        .success()
        .stdout("Hello World!\n");
}

#[test]
fn test_clear_loop_terminates() {
    let tf = source_file("+[-]");
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg(tf.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_dump_goes_to_stdout() {
    let tf = source_file("++>+#");
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg(tf.path())
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("\n---- DUMP ----\n0x02 0x01 0x00")
                .and(predicate::str::contains(
                    "pointer at cell 1 with value: 0x01\n---- DUMP ----\n",
                )),
        )
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_dump_inside_skipped_loop_does_not_run() {
    let tf = source_file("[#]");
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg(tf.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_logs_stay_off_stdout() {
    let tf = source_file("+++.");
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .env("RUST_LOG", "debug")
        .arg(tf.path())
        .assert()
        .success()
        .stdout(predicate::eq(&[3u8][..]))
        .stderr(predicate::str::contains("halted"));
}
