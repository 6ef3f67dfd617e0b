/// Parser state, precedence levels and the Pratt expression loop.
///
/// Contains the `Parser` struct with its two-token lookahead, the
/// dispatch tables mapping token kinds to prefix and infix handlers, and
/// the error-accumulating program loop.
pub mod core;

/// Expression construct parsing.
///
/// Implements the prefix and infix handlers the dispatch tables point
/// at: literals, operators, grouping, conditionals, function literals,
/// calls and index accesses.
pub mod expression;

/// Statement parsing.
///
/// Implements `let`, `return`, expression statements and brace-delimited
/// blocks.
pub mod statement;

pub use self::core::Parser;
