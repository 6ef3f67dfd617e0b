use std::{collections::HashMap, fmt, rc::Rc};

use crate::{
    ast::Block,
    error::RuntimeError,
    interpreter::value::{environment::EnvRef, hash_key::HashKey},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every type a program can produce, along with the two
/// control-flow sentinels: `Return`, which carries a value out of nested
/// blocks to the nearest function boundary, and `Error`, which carries a
/// runtime failure to the nearest sequencing point.
///
/// Strings, arrays, hashes and functions are reference-counted so that a
/// clone of the value is another handle on the same underlying data.
/// Equality of arrays, hashes and functions is identity of that data.
#[derive(Debug, Clone)]
pub enum Value {
    /// The absent value. Conditions treat it as false.
    Null,
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean, `true` or `false`.
    Boolean(bool),
    /// An immutable string.
    Str(Rc<str>),
    /// An ordered sequence of values.
    Array(Rc<Vec<Value>>),
    /// A map from hash keys to their original key/value pair.
    Hash(Rc<HashMap<HashKey, HashPair>>),
    /// A user-defined function together with its captured environment.
    Function(Rc<Function>),
    /// A native function provided by the interpreter.
    Builtin(Builtin),
    /// A value travelling out of a `return` statement. Blocks pass it
    /// through untouched; program and function boundaries unwrap it.
    Return(Box<Value>),
    /// An in-band runtime failure.
    Error(RuntimeError),
}

/// A key/value pair stored in a hash.
///
/// The original key value is kept alongside the stored value so hashes
/// can render their entries.
#[derive(Debug, Clone)]
pub struct HashPair {
    /// The key as written, before hash key derivation.
    pub key:   Value,
    /// The stored value.
    pub value: Value,
}

/// A user-defined function value.
///
/// The environment captured here is the one the `fn` literal was
/// evaluated in, not the caller's. Applying the function extends this
/// environment, which is what makes closures work.
#[derive(Clone)]
pub struct Function {
    /// Parameter names in declaration order.
    pub parameters: Vec<String>,
    /// The function body.
    pub body:       Block,
    /// The defining environment.
    pub env:        EnvRef,
}

/// A native function exposed to programs by name.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    /// The name programs call it by.
    pub name: &'static str,
    function: BuiltinFn,
}

/// The signature shared by all native functions.
pub type BuiltinFn = fn(&[Value]) -> Value;

impl Builtin {
    /// Wraps a native function under its public name.
    #[must_use]
    pub const fn new(name: &'static str, function: BuiltinFn) -> Self {
        Self { name, function }
    }

    /// Invokes the native function on already-evaluated arguments.
    #[must_use]
    pub fn apply(&self, args: &[Value]) -> Value {
        (self.function)(args)
    }
}

impl Value {
    /// Returns the uppercase type name used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Integer(_) => "INTEGER",
            Self::Boolean(_) => "BOOLEAN",
            Self::Str(_) => "STRING",
            Self::Array(_) => "ARRAY",
            Self::Hash(_) => "HASH",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::Return(_) => "RETURN_VALUE",
            Self::Error(_) => "ERROR",
        }
    }

    /// Returns `true` if the value is an in-band runtime error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(..))
    }

    /// Applies the language's truthiness rule: `null` and `false` are
    /// falsy, every other value is truthy, including `0` and `""`.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Boolean(false))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl From<RuntimeError> for Value {
    fn from(e: RuntimeError) -> Self {
        Self::Error(e)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Array(elements) => {
                write!(f, "[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            },
            Self::Hash(pairs) => {
                write!(f, "{{")?;
                for (index, pair) in pairs.values().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", pair.key, pair.value)?;
                }
                write!(f, "}}")
            },
            Self::Function(function) => write!(f, "{function}"),
            Self::Builtin(_) => write!(f, "builtin function"),
            Self::Return(value) => write!(f, "{value}"),
            Self::Error(e) => write!(f, "ERROR: {e}"),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fn(")?;
        for (index, parameter) in self.parameters.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{parameter}")?;
        }
        write!(f, ") {{\n{}\n}}", self.body)
    }
}

// Functions close over their defining environment, and that environment
// may hold the function itself. Debug output stops at the parameter list
// and body to keep the representation finite.
impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
         .field("parameters", &self.parameters)
         .field("body", &self.body)
         .finish_non_exhaustive()
    }
}
