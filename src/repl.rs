use std::io::{BufRead, Write};

use crate::{execute, interpreter::value::environment::Environment};

/// The prompt printed before each line is read.
pub const PROMPT: &str = ">>> ";

/// Runs the read-evaluate-print loop until end of input.
///
/// Every line runs against the same environment, so `let` bindings and
/// the closures that captured them persist for the whole session. A
/// line that fails to parse prints the parser's error list and leaves
/// the environment untouched.
///
/// # Errors
/// Returns any I/O error raised while reading input or writing output.
pub fn start(input: &mut impl BufRead, output: &mut impl Write) -> std::io::Result<()> {
    let mut env = Environment::new().into_ref();
    let mut line = String::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        match execute(&line, &mut env) {
            Ok(value) => writeln!(output, "{value}")?,
            Err(errors) => {
                writeln!(output, "parser errors:")?;
                for error in errors {
                    writeln!(output, "\t{error}")?;
                }
            },
        }
    }
}
