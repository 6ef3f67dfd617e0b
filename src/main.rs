use std::{fs, io};

use clap::Parser;
use wisp::{interpreter::value::environment::Environment, repl};

/// wisp is a small, dynamically-typed scripting language with
/// first-class functions and closures.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells wisp to treat the input as a file path instead of source
    /// text.
    #[arg(short, long)]
    file: bool,

    /// Prints the value of the last statement after the script runs.
    #[arg(short, long)]
    print_result: bool,

    /// Source text, or a path with --file. Starts the REPL when
    /// omitted.
    source: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.source else {
        let stdin = io::stdin();
        if let Err(e) = repl::start(&mut stdin.lock(), &mut io::stdout()) {
            eprintln!("{e}");
        }
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    let mut env = Environment::new().into_ref();
    match wisp::execute(&script, &mut env) {
        Ok(value) => {
            if value.is_error() {
                eprintln!("{value}");
            } else if args.print_result {
                println!("{value}");
            }
        },
        Err(errors) => {
            eprintln!("parser errors:");
            for error in errors {
                eprintln!("\t{error}");
            }
        },
    }
}
