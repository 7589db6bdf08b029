//! Lexical environments for variable scoping in the interpreter.
//!
//! An [`Environment`] is a handle to one scope frame; frames link to their
//! parent. Closures keep the handle of the frame they were created in, so a
//! frame lives as long as any function that can still see it.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use kiwi_ir::Name;

use crate::Value;

/// Error returned by [`Environment::assign`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AssignError {
    /// No frame on the chain binds the name.
    #[error("assignment to an unbound identifier")]
    Unbound,
}

/// A single-threaded scope wrapper for reference-counted interior mutability.
///
/// All scope allocations go through [`LocalScope::new`]. The scopes are
/// never shared across threads.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// `true` if both handles point at the same scope.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

/// A single scope frame.
#[derive(Debug, Default)]
pub struct Scope {
    /// Bindings made directly in this frame.
    bindings: FxHashMap<Name, Value>,
    /// Lexically enclosing frame. `None` only for the program's root frame.
    parent: Option<Environment>,
}

impl Scope {
    pub fn with_parent(parent: Environment) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Bind `name` in this frame, replacing any earlier binding here.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        self.bindings.insert(name, value);
    }

    #[inline]
    pub fn lookup(&self, name: Name) -> Option<Value> {
        if let Some(value) = self.bindings.get(&name) {
            return Some(value.clone());
        }
        if let Some(parent) = &self.parent {
            return parent.lookup(name);
        }
        None
    }

    #[inline]
    pub fn contains(&self, name: Name) -> bool {
        if self.bindings.contains_key(&name) {
            return true;
        }
        self.parent
            .as_ref()
            .is_some_and(|parent| parent.contains(name))
    }

    /// Replace the binding in the nearest frame that holds `name`.
    #[inline]
    pub fn assign(&mut self, name: Name, value: Value) -> Result<(), AssignError> {
        if let Some(slot) = self.bindings.get_mut(&name) {
            *slot = value;
            return Ok(());
        }
        if let Some(parent) = &self.parent {
            return parent.assign(name, value);
        }
        Err(AssignError::Unbound)
    }
}

/// Handle to a scope frame.
///
/// Cloning the handle shares the frame; mutations through one handle are
/// visible through every other handle and every child frame.
#[derive(Clone, Debug)]
pub struct Environment {
    scope: LocalScope<Scope>,
}

impl Environment {
    /// A fresh parentless frame.
    pub fn root() -> Self {
        Environment {
            scope: LocalScope::new(Scope::default()),
        }
    }

    /// A fresh empty frame whose parent is `self`.
    pub fn child(&self) -> Self {
        Environment {
            scope: LocalScope::new(Scope::with_parent(self.clone())),
        }
    }

    /// `true` for a frame without a parent.
    pub fn is_root(&self) -> bool {
        self.scope.borrow().parent.is_none()
    }

    /// Bind `name` in this frame. Redeclaring shadows nothing: it overwrites.
    #[inline]
    pub fn declare(&self, name: Name, value: Value) {
        self.scope.borrow_mut().define(name, value);
    }

    /// Search this frame, then its ancestors.
    #[inline]
    pub fn lookup(&self, name: Name) -> Option<Value> {
        self.scope.borrow().lookup(name)
    }

    /// `true` if `name` is bound in this frame or an ancestor.
    #[inline]
    pub fn contains(&self, name: Name) -> bool {
        self.scope.borrow().contains(name)
    }

    /// Mutate the nearest existing binding of `name`. Never creates one.
    #[inline]
    pub fn assign(&self, name: Name, value: Value) -> Result<(), AssignError> {
        self.scope.borrow_mut().assign(name, value)
    }

    /// `true` if both handles refer to the same frame.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.scope.ptr_eq(&other.scope)
    }
}
