use crate::{
    error::RuntimeError,
    interpreter::value::core::{Builtin, Value},
};

/// Resolves a builtin function by name.
///
/// Consulted only after identifier resolution misses the whole
/// environment chain, so a user binding named `len` shadows the builtin
/// for as long as it exists.
#[must_use]
pub fn lookup(name: &str) -> Option<Builtin> {
    match name {
        "len" => Some(Builtin::new("len", len)),
        _ => None,
    }
}

/// `len(s)` returns the length of a string in bytes.
fn len(args: &[Value]) -> Value {
    if args.len() != 1 {
        return Value::Error(RuntimeError::WrongArgumentCount { got:  args.len(),
                                                               want: 1, });
    }

    match &args[0] {
        Value::Str(s) => Value::Integer(i64::try_from(s.len()).unwrap_or(i64::MAX)),
        other => Value::Error(RuntimeError::UnsupportedArgument { builtin:   "len",
                                                                  type_name: other.type_name(), }),
    }
}
