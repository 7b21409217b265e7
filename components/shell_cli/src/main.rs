//! qsh CLI
//!
//! Entry point for the shell scripting language. Parses CLI arguments
//! and delegates to the Runtime for execution.

use clap::Parser as ClapParser;
use shell_cli::{Cli, CliError, Runtime};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with_writer(std::io::stderr)
        .init();

    let mut runtime = Runtime::new();

    if let Some(file) = cli.file {
        match runtime.execute_file(&file) {
            Ok(()) => {}
            Err(CliError::IoError(e)) => {
                eprintln!("error: could not read file '{}': {}", file, e);
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
    } else if let Some(source) = cli.eval {
        if let Err(e) = runtime.execute_source(&source) {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    } else if cli.repl {
        runtime.repl()?;
    } else {
        println!("qsh {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Usage:");
        println!("  qsh <FILE>           Run a script file");
        println!("  qsh --eval <SOURCE>  Evaluate inline script source");
        println!("  qsh --repl           Start the interactive REPL");
        println!();
        println!("Run 'qsh --help' for more options.");
    }

    Ok(())
}
