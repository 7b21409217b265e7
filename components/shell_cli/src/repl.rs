//! REPL (Read-Eval-Print Loop) implementation

use crate::error::{CliError, CliResult};
use crate::runtime::Runtime;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Run the interactive REPL until the user exits.
pub fn run_repl(runtime: &mut Runtime) -> CliResult<()> {
    let mut editor = DefaultEditor::new()
        .map_err(|e| CliError::ReplError(format!("failed to initialize editor: {}", e)))?;

    println!("qsh {}", env!("CARGO_PKG_VERSION"));
    println!("Type script statements, or 'exit' to quit.");
    println!();

    let mut line_buffer = String::new();
    let mut in_multiline = false;

    loop {
        let prompt = if in_multiline { "... " } else { "> " };

        match editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if !in_multiline && (trimmed == "exit" || trimmed == "quit") {
                    break;
                }

                if in_multiline {
                    line_buffer.push('\n');
                }
                line_buffer.push_str(&line);

                if !is_input_complete(&line_buffer) {
                    in_multiline = true;
                    continue;
                }
                in_multiline = false;

                let _ = editor.add_history_entry(&line_buffer);

                if let Err(error) = runtime.execute_source(&line_buffer) {
                    eprintln!("{}", error);
                }

                line_buffer.clear();
            }
            Err(ReadlineError::Interrupted) => {
                if in_multiline {
                    println!("^C");
                    line_buffer.clear();
                    in_multiline = false;
                } else {
                    println!("Press Ctrl-D or type 'exit' to quit");
                }
            }
            Err(ReadlineError::Eof) => {
                println!();
                break;
            }
            Err(err) => {
                return Err(CliError::ReplError(format!("readline error: {}", err)));
            }
        }
    }

    Ok(())
}

/// Whether the buffered input looks like a complete script.
///
/// A brace/paren balance heuristic; string literals are skipped, with
/// `""` treated as the escaped quote it is in script strings.
fn is_input_complete(input: &str) -> bool {
    let mut brace_count = 0i32;
    let mut paren_count = 0i32;
    let mut in_string = false;

    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if in_string {
            if c == '"' {
                // "" stays inside the string
                if chars.peek() == Some(&'"') {
                    chars.next();
                } else {
                    in_string = false;
                }
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => brace_count += 1,
            '}' => brace_count -= 1,
            '(' => paren_count += 1,
            ')' => paren_count -= 1,
            _ => {}
        }
    }

    brace_count <= 0 && paren_count <= 0 && !in_string
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_input_complete_simple() {
        assert!(is_input_complete("int x = 42;"));
        assert!(is_input_complete("@echo hi"));
    }

    #[test]
    fn test_is_input_complete_incomplete_brace() {
        assert!(!is_input_complete("void f() {"));
        assert!(!is_input_complete("for (int i = 0; i < 3; i++) {"));
    }

    #[test]
    fn test_is_input_complete_with_blocks() {
        assert!(is_input_complete("void f() { return; }"));
        assert!(is_input_complete("if (true) { @echo yes }"));
    }

    #[test]
    fn test_is_input_complete_with_strings() {
        assert!(is_input_complete("string s = \"hello {\";"));
        assert!(!is_input_complete("string s = \"unclosed"));
    }

    #[test]
    fn test_doubled_quote_stays_in_string() {
        assert!(is_input_complete("string s = \"say \"\"hi\"\"\";"));
        assert!(!is_input_complete("string s = \"say \"\""));
    }
}
