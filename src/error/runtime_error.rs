use crate::ast::{InfixOperator, PrefixOperator};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// A runtime error is itself a value. The evaluator wraps one of these in
/// an error value at the point of failure and every enclosing form passes
/// it through unchanged, so the first failure becomes the result of the
/// whole program.
pub enum RuntimeError {
    /// A binary operator was applied to operands of different types.
    TypeMismatch {
        /// Type name of the left operand.
        left:     &'static str,
        /// The applied operator.
        operator: InfixOperator,
        /// Type name of the right operand.
        right:    &'static str,
    },
    /// A prefix operator was applied to an unsupported operand.
    UnknownPrefixOperator {
        /// The applied operator.
        operator: PrefixOperator,
        /// Type name of the operand.
        right:    &'static str,
    },
    /// A binary operator was applied to same-typed but unsupported
    /// operands.
    UnknownInfixOperator {
        /// Type name of the left operand.
        left:     &'static str,
        /// The applied operator.
        operator: InfixOperator,
        /// Type name of the right operand.
        right:    &'static str,
    },
    /// Division with a zero divisor.
    DivisionByZero,
    /// A name is bound neither in the environment chain nor as a builtin.
    IdentifierNotFound {
        /// The unresolved name.
        name: String,
    },
    /// The callee of a call expression is not callable.
    NotAFunction {
        /// Type name of the value in call position.
        type_name: &'static str,
    },
    /// The index operator was applied to an unsupported collection.
    IndexNotSupported {
        /// Type name of the indexed value.
        type_name: &'static str,
    },
    /// A hash key expression evaluated to an unhashable value.
    UnusableHashKey {
        /// Type name of the offending key.
        type_name: &'static str,
    },
    /// A builtin received an argument of a type it does not handle.
    UnsupportedArgument {
        /// Name of the builtin.
        builtin:   &'static str,
        /// Type name of the offending argument.
        type_name: &'static str,
    },
    /// A call supplied the wrong number of arguments.
    WrongArgumentCount {
        /// How many arguments were supplied.
        got:  usize,
        /// How many the callee declares.
        want: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { left, operator, right } => {
                write!(f, "type mismatch: {left} {operator} {right}")
            },
            Self::UnknownPrefixOperator { operator, right } => {
                write!(f, "unknown operator: {operator}{right}")
            },
            Self::UnknownInfixOperator { left, operator, right } => {
                write!(f, "unknown operator: {left} {operator} {right}")
            },
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {name}"),
            Self::NotAFunction { type_name } => write!(f, "not a function: {type_name}"),
            Self::IndexNotSupported { type_name } => {
                write!(f, "index operator not supported: {type_name}")
            },
            Self::UnusableHashKey { type_name } => {
                write!(f, "unusable as hash key: {type_name}")
            },
            Self::UnsupportedArgument { builtin, type_name } => {
                write!(f, "argument to `{builtin}` not supported, got type {type_name}")
            },
            Self::WrongArgumentCount { got, want } => {
                write!(f, "wrong number of arguments. got={got}, want={want}")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
