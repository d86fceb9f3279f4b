use clap::Parser;
use rust_bf_vm::cli_util::{print_compile_error, read_source};
use rust_bf_vm::logging::init_logging;
use rust_bf_vm::{compile, ExitStatus};
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

/// Compile a Brainfuck source file and print its instruction listing without running it.
#[derive(Parser, Debug)]
#[command(name = "bf_listing", disable_help_flag = true)]
struct Cli {
    /// Path to the Brainfuck source file
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

fn main() {
    init_logging();

    let program = env::args().next().unwrap_or_else(|| "bf_listing".to_string());
    let cli = Cli::parse();

    let source = match read_source(&cli.file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{program}: failed to read {}: {e}", cli.file.display());
            std::process::exit(ExitStatus::SourceIo.code());
        }
    };

    let compiled = match compile(&source) {
        Ok(p) => p,
        Err(err) => {
            print_compile_error(&program, &source, &err);
            std::process::exit(ExitStatus::Compile.code());
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = write!(stdout, "{}", compiled.listing()).and_then(|_| stdout.flush()) {
        eprintln!("{program}: failed to write listing: {e}");
        std::process::exit(ExitStatus::Runtime.code());
    }
}
