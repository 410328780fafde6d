//! `cmmc` — the C-- front-end CLI.
//!
//! Thin wrapper over the `cmmc` library: one subcommand per pipeline stage
//! a caller might want to inspect.

use clap::{CommandFactory, Parser as ClapParser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use std::process;

use cmmc::{compile_file, scan_str, unparse, CompilerConfig};

#[derive(ClapParser)]
#[command(name = "cmmc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "C-- front end: scan, parse, resolve and unparse", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dump the token stream for a source file
    Tokens {
        /// Input .cmm source file
        input: PathBuf,
    },

    /// Scan, parse and resolve a source file, printing diagnostics
    Check {
        /// Input .cmm source file
        input: PathBuf,

        /// Stop recording diagnostics after this many entries
        #[arg(long)]
        max_diagnostics: Option<usize>,
    },

    /// Print the canonical unparse of a source file
    Unparse {
        /// Input .cmm source file
        input: PathBuf,

        /// Omit resolved-symbol annotations from identifier uses
        #[arg(long)]
        no_annotate: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tokens { input } => run_tokens(&input),
        Commands::Check {
            input,
            max_diagnostics,
        } => run_check(&input, max_diagnostics),
        Commands::Unparse { input, no_annotate } => run_unparse(&input, !no_annotate),
        Commands::Completions { shell } => run_completions(shell),
    }
}

fn run_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "cmmc", &mut io::stdout());
}

fn read_source(input: &PathBuf) -> String {
    std::fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("error reading {}: {e}", input.display());
        process::exit(1);
    })
}

fn run_tokens(input: &PathBuf) {
    let source = read_source(input);
    let (tokens, diagnostics) = scan_str(&source);
    for token in &tokens {
        println!("{} {}", token.position, token.kind);
    }
    eprint!("{}", diagnostics.render());
    if diagnostics.had_errors() {
        process::exit(1);
    }
}

fn run_check(input: &PathBuf, max_diagnostics: Option<usize>) {
    let source = read_source(input);
    let mut config = CompilerConfig::new();
    if let Some(max) = max_diagnostics {
        config = config.with_max_diagnostics(max);
    }
    let result = cmmc::compile_str(&source, &config);
    eprint!("{}", result.diagnostics.render());
    if result.failed() {
        process::exit(1);
    }
}

fn run_unparse(input: &PathBuf, annotate_symbols: bool) {
    let config = CompilerConfig::new().with_annotate_symbols(annotate_symbols);
    let result = compile_file(input, &config).unwrap_or_else(|e| {
        eprintln!("error reading {}: {e}", input.display());
        process::exit(1);
    });
    eprint!("{}", result.diagnostics.render());
    if result.failed() {
        process::exit(1);
    }
    print!("{}", unparse(&result, &config));
}
