//! # wisp
//!
//! wisp is a small, dynamically-typed scripting language written in
//! Rust. It has C-like surface syntax with first-class functions,
//! lexical closures, integers, booleans, strings, arrays, hashes,
//! `let` bindings, `if`/`else` expressions, and early `return`.
//!
//! The interpreter is a strictly feed-forward pipeline per input:
//! source text is tokenized, parsed into an AST by a Pratt parser, and
//! walked by a recursive evaluator against a lexically-scoped
//! environment.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::eval_program,
        lexer::Lexer,
        parser::Parser,
        value::{core::Value, environment::EnvRef},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression types that
/// represent the syntactic structure of source code as a tree. The AST
/// is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language
///   constructs.
/// - Renders every node back to a fully-parenthesised source form for
///   diagnostics and tests.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating code. Parse errors are accumulated by the parser; runtime
/// errors travel through evaluation as in-band values. Both render to
/// fixed, user-facing message templates.
///
/// # Responsibilities
/// - Defines error enums for the parse and evaluation phases.
/// - Keeps the exact message wording in one place.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and environments to provide a complete runtime for
/// source code execution. It exposes the building blocks [`execute`]
/// drives.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and
///   value types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of values and errors between phases.
pub mod interpreter;
/// The interactive read-evaluate-print loop.
///
/// Reads one line at a time, runs it through the pipeline against a
/// persistent environment so `let` bindings survive across lines, and
/// prints either the parser's error list or the result's inspect form.
pub mod repl;

/// Runs a source string against an environment and returns the result.
///
/// This is the single entry point the REPL, the CLI and the tests all
/// share: lex, parse, gate on parse errors, evaluate.
///
/// Runtime failures are not `Err`s; they come back as an error value,
/// exactly as programs observe them.
///
/// # Errors
/// Returns the parser's accumulated errors if the source does not
/// parse. Nothing is evaluated in that case.
///
/// The environment handle is taken mutably because a `let` that
/// re-binds an existing name opens a fresh enclosed frame; callers
/// that evaluate several inputs against one environment observe the
/// shadowing on later calls.
///
/// # Examples
/// ```
/// use wisp::{execute, interpreter::value::environment::Environment};
///
/// let mut env = Environment::new().into_ref();
/// let result = execute("let x = 2; x * 3", &mut env).unwrap();
///
/// assert_eq!(result.to_string(), "6");
/// ```
pub fn execute(source: &str, env: &mut EnvRef) -> Result<Value, Vec<ParseError>> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    if parser.errors().is_empty() {
        Ok(eval_program(&program, env))
    } else {
        Err(parser.into_errors())
    }
}
