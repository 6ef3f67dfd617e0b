use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::Expression,
    error::RuntimeError,
    interpreter::{
        evaluator::core::eval_expression,
        value::{
            core::{HashPair, Value},
            environment::EnvRef,
        },
    },
};

/// Applies the index operator to evaluated operands.
///
/// Arrays indexed by integers are the only supported combination. An
/// index outside `0..len` is not an error; it evaluates to null, so
/// probing past the end of an array is always safe.
pub fn eval_index(left: &Value, index: &Value) -> Value {
    match (left, index) {
        (Value::Array(elements), Value::Integer(position)) => {
            usize::try_from(*position).ok()
                                      .and_then(|position| elements.get(position))
                                      .cloned()
                                      .unwrap_or(Value::Null)
        },
        _ => Value::Error(RuntimeError::IndexNotSupported { type_name: left.type_name() }),
    }
}

/// Builds a hash value from a literal's key/value pairs.
///
/// For each pair the key is evaluated, checked for hashability, and
/// then the value is evaluated; the first error anywhere becomes the
/// whole literal's result. A later pair with an equal key overwrites
/// the earlier entry.
pub fn eval_hash_literal(pairs: &[(Expression, Expression)], env: &EnvRef) -> Value {
    let mut entries = HashMap::with_capacity(pairs.len());

    for (key_expression, value_expression) in pairs {
        let key = eval_expression(key_expression, env);
        if key.is_error() {
            return key;
        }

        let Some(hash_key) = key.hash_key() else {
            return Value::Error(RuntimeError::UnusableHashKey { type_name: key.type_name() });
        };

        let value = eval_expression(value_expression, env);
        if value.is_error() {
            return value;
        }

        entries.insert(hash_key, HashPair { key, value });
    }

    Value::Hash(Rc::new(entries))
}
