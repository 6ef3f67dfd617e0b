/// Parsing errors.
///
/// Defines all error types that can occur while parsing source code.
/// Parse errors are accumulated by the parser rather than raised; callers
/// inspect the collected list before evaluating anything.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be produced during evaluation.
/// Runtime errors travel in-band as values and halt the program the first
/// time they reach a sequencing point.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
