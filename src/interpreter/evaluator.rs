/// Builtin functions.
///
/// The process-wide registry of native functions programs can call by
/// name when no binding shadows them.
pub mod builtin;

/// Array and hash evaluation.
///
/// Builds array and hash values from their literals and implements the
/// index operator.
pub mod collections;

/// Core evaluation logic.
///
/// Contains the recursive dispatch over AST nodes, program and block
/// sequencing, identifier resolution and function application.
pub mod core;

/// Binary operator evaluation.
///
/// Implements the arithmetic, comparison and concatenation rules,
/// including the type mismatch and unknown operator failures.
pub mod infix;

/// Prefix operator evaluation.
///
/// Implements logical negation and arithmetic negation.
pub mod prefix;
