use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::value::core::Value,
};

/// Applies a prefix operator to an evaluated operand.
pub fn eval(operator: PrefixOperator, right: Value) -> Value {
    match operator {
        PrefixOperator::Bang => eval_bang(&right),
        PrefixOperator::Minus => eval_minus(right),
    }
}

/// Logical negation.
///
/// `!` inverts the two booleans, turns null into true, and collapses
/// every other value to false. This is the truthiness rule seen from
/// the other side: `!!x` is the boolean version of `x`.
fn eval_bang(right: &Value) -> Value {
    match right {
        Value::Boolean(b) => Value::Boolean(!b),
        Value::Null => Value::Boolean(true),
        _ => Value::Boolean(false),
    }
}

/// Arithmetic negation, integers only.
///
/// Negation wraps on the most negative value, matching the rest of the
/// integer arithmetic.
fn eval_minus(right: Value) -> Value {
    match right {
        Value::Integer(value) => Value::Integer(value.wrapping_neg()),
        other => Value::Error(RuntimeError::UnknownPrefixOperator {
            operator: PrefixOperator::Minus,
            right:    other.type_name(),
        }),
    }
}
