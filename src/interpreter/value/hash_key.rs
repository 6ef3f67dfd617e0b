use std::hash::Hasher;

use fnv::FnvHasher;

use crate::interpreter::value::core::Value;

/// The fixed-width key a hashable value is stored under.
///
/// A key pairs the value's type name with a 64-bit digest, so equal
/// source values collide exactly and values of different types never do.
/// Integers use their two's-complement bit pattern, booleans use one and
/// zero, and strings use a 64-bit FNV-1a over their bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashKey {
    type_name: &'static str,
    value:     u64,
}

impl Value {
    /// Derives the hash key for this value.
    ///
    /// Only integers, booleans and strings are hashable; every other
    /// type returns `None` and the evaluator reports it as unusable.
    #[must_use]
    pub fn hash_key(&self) -> Option<HashKey> {
        let value = match self {
            Self::Integer(n) => *n as u64,
            Self::Boolean(b) => u64::from(*b),
            Self::Str(s) => {
                let mut hasher = FnvHasher::default();
                hasher.write(s.as_bytes());
                hasher.finish()
            },
            _ => return None,
        };

        Some(HashKey { type_name: self.type_name(),
                       value })
    }
}
