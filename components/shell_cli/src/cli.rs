//! Command line argument definitions

use clap::Parser;

/// Command line arguments for the qsh binary.
#[derive(Debug, Parser)]
#[command(name = "qsh", version, about = "A small shell scripting language")]
pub struct Cli {
    /// Script file to run
    pub file: Option<String>,

    /// Evaluate inline script source
    #[arg(short, long, value_name = "SOURCE")]
    pub eval: Option<String>,

    /// Start the interactive REPL
    #[arg(long)]
    pub repl: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_file_argument() {
        let cli = Cli::parse_from(["qsh", "script.qs"]);
        assert_eq!(cli.file.as_deref(), Some("script.qs"));
        assert!(!cli.repl);
    }

    #[test]
    fn test_parses_eval_argument() {
        let cli = Cli::parse_from(["qsh", "--eval", "int x = 1;"]);
        assert_eq!(cli.eval.as_deref(), Some("int x = 1;"));
    }
}
