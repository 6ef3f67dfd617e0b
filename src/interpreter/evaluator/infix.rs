use std::rc::Rc;

use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::value::core::Value,
};

/// Applies a binary operator to two evaluated operands.
///
/// Dispatch order matters and is observable:
/// two integers use value arithmetic and comparison; two strings use
/// contents-based `+`, `==` and `!=`; any other same-typed pair supports
/// only `==`/`!=` by identity; operands of different types are a type
/// mismatch regardless of operator.
pub fn eval(operator: InfixOperator, left: Value, right: Value) -> Value {
    match (&left, &right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer(operator, *l, *r),
        (Value::Str(l), Value::Str(r)) => eval_string(operator, l, r),
        _ => {
            if left.type_name() != right.type_name() {
                return Value::Error(RuntimeError::TypeMismatch { left: left.type_name(),
                                                                 operator,
                                                                 right: right.type_name() });
            }

            match operator {
                InfixOperator::Eq => Value::Boolean(identical(&left, &right)),
                InfixOperator::NotEq => Value::Boolean(!identical(&left, &right)),
                _ => Value::Error(RuntimeError::UnknownInfixOperator { left: left.type_name(),
                                                                       operator,
                                                                       right:
                                                                           right.type_name() }),
            }
        },
    }
}

/// Integer arithmetic and comparison.
///
/// Arithmetic wraps in two's complement. Division truncates toward zero
/// and reports a zero divisor as a runtime error.
fn eval_integer(operator: InfixOperator, left: i64, right: i64) -> Value {
    match operator {
        InfixOperator::Add => Value::Integer(left.wrapping_add(right)),
        InfixOperator::Sub => Value::Integer(left.wrapping_sub(right)),
        InfixOperator::Mul => Value::Integer(left.wrapping_mul(right)),
        InfixOperator::Div => {
            if right == 0 {
                Value::Error(RuntimeError::DivisionByZero)
            } else {
                Value::Integer(left.wrapping_div(right))
            }
        },
        InfixOperator::Lt => Value::Boolean(left < right),
        InfixOperator::Gt => Value::Boolean(left > right),
        InfixOperator::Eq => Value::Boolean(left == right),
        InfixOperator::NotEq => Value::Boolean(left != right),
    }
}

/// String concatenation and contents equality.
///
/// Two independently built strings with the same contents compare
/// equal; every operator other than `+`, `==` and `!=` is unknown for
/// strings.
fn eval_string(operator: InfixOperator, left: &str, right: &str) -> Value {
    match operator {
        InfixOperator::Add => Value::from([left, right].concat()),
        InfixOperator::Eq => Value::Boolean(left == right),
        InfixOperator::NotEq => Value::Boolean(left != right),
        _ => Value::Error(RuntimeError::UnknownInfixOperator { left: "STRING",
                                                               operator,
                                                               right: "STRING" }),
    }
}

/// Identity comparison for the non-integer, non-string cases.
///
/// Booleans and null compare by tag, which is equivalent to comparing
/// the canonical singletons. Arrays, hashes and functions compare as
/// handles: two names for the same value are equal, equal-looking
/// values built separately are not.
fn identical(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Boolean(l), Value::Boolean(r)) => l == r,
        (Value::Str(l), Value::Str(r)) => Rc::ptr_eq(l, r),
        (Value::Array(l), Value::Array(r)) => Rc::ptr_eq(l, r),
        (Value::Hash(l), Value::Hash(r)) => Rc::ptr_eq(l, r),
        (Value::Function(l), Value::Function(r)) => Rc::ptr_eq(l, r),
        (Value::Builtin(l), Value::Builtin(r)) => l.name == r.name,
        _ => false,
    }
}
