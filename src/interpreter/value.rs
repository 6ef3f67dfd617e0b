/// Core value types.
///
/// Defines the `Value` enum with all runtime variants, their type names,
/// and their printable inspect forms.
pub mod core;
/// Lexical environments.
///
/// Defines the environment frames that hold name bindings, including the
/// enclosing-frame link that gives closures their lexical scope.
pub mod environment;
/// Hash key derivation.
///
/// Derives the fixed-width keys under which hashable values are stored in
/// hash literals.
pub mod hash_key;
