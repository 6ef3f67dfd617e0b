#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing.
///
/// The parser never aborts on an error. Each failed construct records one
/// of these in the parser's error list and parsing resumes with the next
/// statement, so a single pass reports every broken statement in the
/// input.
pub enum ParseError {
    /// A specific token kind was required but something else appeared.
    UnexpectedToken {
        /// The display name of the expected token kind.
        expected: &'static str,
        /// The display name of the token actually found.
        actual:   &'static str,
    },
    /// No expression can start with the current token.
    NoPrefixParseFn {
        /// The display name of the offending token kind.
        kind: &'static str,
    },
    /// An integer literal does not fit in a signed 64-bit integer.
    InvalidInteger {
        /// The offending lexeme.
        literal: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, actual } => {
                write!(f, "expected next token to be {expected}, got {actual} instead")
            },
            Self::NoPrefixParseFn { kind } => {
                write!(f, "no prefix parse function for {kind} found")
            },
            Self::InvalidInteger { literal } => {
                write!(f, "could not parse {literal:?} as integer")
            },
        }
    }
}

impl std::error::Error for ParseError {}
