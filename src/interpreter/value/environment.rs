use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A shared handle on an environment frame.
///
/// Environments are shared, not copied: every closure that captured a
/// frame sees bindings added to it later. The interpreter is
/// single-threaded, so a reference-counted cell is all the sharing
/// needed. Closure cycles (a frame holding a function that captured the
/// same frame) are accepted and live until the interpreter exits.
pub type EnvRef = Rc<RefCell<Environment>>;

/// A single lexical scope frame.
///
/// Holds name bindings plus an optional link to the enclosing frame.
/// Lookups walk the chain outward; new bindings always land in this
/// frame, which is how an inner `let` shadows an outer one.
#[derive(Default)]
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<EnvRef>,
}

impl Environment {
    /// Creates an empty top-level frame with no enclosing link.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps the frame in a shared handle.
    #[must_use]
    pub fn into_ref(self) -> EnvRef {
        Rc::new(RefCell::new(self))
    }

    /// Creates an empty frame enclosed by `outer`.
    ///
    /// This is the frame a function application evaluates its body in;
    /// `outer` is the function's captured environment, not the caller's.
    #[must_use]
    pub fn new_enclosed(outer: &EnvRef) -> EnvRef {
        Rc::new(RefCell::new(Self { store: HashMap::new(),
                                    outer: Some(Rc::clone(outer)), }))
    }

    /// Resolves a name, innermost frame first.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer
                        .as_ref()
                        .and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds a name in this frame, shadowing any outer binding.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.store.insert(name.into(), value);
    }

    /// Reports whether this frame itself binds `name`, ignoring the
    /// enclosing chain.
    ///
    /// A frame never overwrites one of its own bindings: re-binding a
    /// name opens a fresh enclosed frame instead, so closures that
    /// captured this one keep seeing the original value.
    #[must_use]
    pub fn binds(&self, name: &str) -> bool {
        self.store.contains_key(name)
    }
}
