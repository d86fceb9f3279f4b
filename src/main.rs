use clap::Parser;
use rust_bf_vm::cli_util::{print_compile_error, print_runtime_error, read_source};
use rust_bf_vm::logging::init_logging;
use rust_bf_vm::{compile, ExitStatus, Machine};
use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Compile a Brainfuck source file and run it on stdin/stdout.
///
/// Exit status: 0 success, 1 runtime error, 2 usage error,
/// 3 source file unreadable, 4 unmatched brackets.
#[derive(Parser, Debug)]
#[command(name = "bf", disable_help_flag = true)]
struct Cli {
    /// Path to the Brainfuck source file
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

fn run_file(program: &str, path: &Path) -> ExitStatus {
    let source = match read_source(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{program}: failed to read {}: {e}", path.display());
            let _ = io::stderr().flush();
            return ExitStatus::SourceIo;
        }
    };

    let compiled = match compile(&source) {
        Ok(p) => p,
        Err(err) => {
            print_compile_error(program, &source, &err);
            return ExitStatus::Compile;
        }
    };
    debug!(path = %path.display(), instructions = compiled.len(), "running");

    let mut machine = Machine::new(&compiled);
    let result = {
        let mut input = io::stdin().lock();
        let mut output = io::stdout().lock();
        machine.run(&mut input, &mut output)
    };

    match result {
        Ok(()) => ExitStatus::Success,
        Err(err) => {
            print_runtime_error(program, &source, &err);
            ExitStatus::Runtime
        }
    }
}

fn main() {
    init_logging();

    // Program name for diagnostics, matching how we were invoked
    let program = env::args().next().unwrap_or_else(|| String::from("bf"));

    let cli = Cli::parse();
    let status = run_file(&program, &cli.file);

    std::process::exit(status.code());
}
