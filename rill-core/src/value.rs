// rill-core - Value types for the Rill programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Core value type for Rill.
//!
//! `Value` is the central enum representing all Rill runtime values. Heap
//! contents sit behind `Rc` (and `im`'s persistent collections), so cloning
//! a value is cheap and the stack can shuffle values freely.

use std::fmt;
use std::rc::Rc;

use im::{OrdMap, Vector};

use crate::builtins::Builtin;
use crate::code::Instructions;

/// A Rill runtime value.
#[derive(Debug, Clone)]
pub enum Value {
    /// 64-bit signed integer.
    Integer(i64),
    /// Boolean. All producers share the canonical `true`/`false` by
    /// construction; equality on the variant is identity.
    Boolean(bool),
    /// The canonical null.
    Null,
    /// UTF-8 string.
    Str(Rc<str>),
    /// Ordered sequence of values.
    Array(Rc<Vector<Value>>),
    /// Mapping from hashable key to its original key/value pair.
    Hash(Rc<OrdMap<HashKey, HashPair>>),
    /// Compiled bytecode function.
    CompiledFunction(Rc<CompiledFunction>),
    /// Host-provided built-in function.
    Builtin(&'static Builtin),
    /// Error produced by a built-in; an ordinary value, not a propagated
    /// failure.
    Error(Rc<str>),
}

/// A key derived from a hashable value (integer, boolean, or string).
///
/// The kind is tagged into the key, so equal content of different kinds
/// never collides: `HashKey` from `1` and from `true` are distinct.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HashKey {
    Integer(i64),
    Boolean(bool),
    Str(Rc<str>),
}

/// A hash entry: the original key value alongside the stored value, so the
/// hash can be rendered back with its real keys.
#[derive(Debug, Clone)]
pub struct HashPair {
    pub key: Value,
    pub value: Value,
}

/// A compiled function: its bytecode plus the frame-layout counts the VM
/// needs to reserve local slots and check call arity.
#[derive(Debug, Clone)]
pub struct CompiledFunction {
    pub instructions: Instructions,
    pub num_locals: usize,
    pub num_parameters: usize,
}

impl Value {
    /// The type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Boolean(_) => "BOOLEAN",
            Value::Null => "NULL",
            Value::Str(_) => "STRING",
            Value::Array(_) => "ARRAY",
            Value::Hash(_) => "HASH",
            Value::CompiledFunction(_) => "COMPILED_FUNCTION_OBJ",
            Value::Builtin(_) => "BUILTIN",
            Value::Error(_) => "ERROR",
        }
    }

    /// Derive a hash key. Returns `None` for non-hashable values.
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Value::Integer(value) => Some(HashKey::Integer(*value)),
            Value::Boolean(value) => Some(HashKey::Boolean(*value)),
            Value::Str(value) => Some(HashKey::Str(Rc::clone(value))),
            _ => None,
        }
    }

    /// Boolean context: `false` and `null` are falsy, everything else is
    /// truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Boolean(false) | Value::Null)
    }

    /// Identity comparison: the fallback for `==`/`!=` on non-integers.
    ///
    /// Booleans and null compare by their canonical instance; heap values
    /// compare by reference (two structurally equal arrays built separately
    /// are *not* identical, but clones of one binding are).
    pub fn identical_to(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Str(a), Value::Str(b)) => Rc::ptr_eq(a, b),
            (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b),
            (Value::Hash(a), Value::Hash(b)) => Rc::ptr_eq(a, b),
            (Value::CompiledFunction(a), Value::CompiledFunction(b)) => Rc::ptr_eq(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => std::ptr::eq(*a, *b),
            _ => false,
        }
    }

    /// The REPL-facing rendering of this value.
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(value) => write!(f, "{}", value),
            Value::Boolean(value) => write!(f, "{}", value),
            Value::Null => write!(f, "null"),
            Value::Str(value) => write!(f, "{}", value),
            Value::Array(elements) => {
                let rendered: Vec<String> = elements.iter().map(|e| e.to_string()).collect();
                write!(f, "[{}]", rendered.join(", "))
            }
            Value::Hash(pairs) => {
                let rendered: Vec<String> = pairs
                    .values()
                    .map(|pair| format!("{}: {}", pair.key, pair.value))
                    .collect();
                write!(f, "{{{}}}", rendered.join(", "))
            }
            Value::CompiledFunction(func) => {
                write!(f, "CompiledFunction[{:p}]", Rc::as_ptr(func))
            }
            Value::Builtin(_) => write!(f, "builtin function"),
            Value::Error(message) => write!(f, "ERROR: {}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_hash_keys_compare_by_content() {
        let hello1 = Value::Str("Hello World".into());
        let hello2 = Value::Str("Hello World".into());
        let diff = Value::Str("My name is johnny".into());

        assert_eq!(hello1.hash_key(), hello2.hash_key());
        assert_ne!(hello1.hash_key(), diff.hash_key());
    }

    #[test]
    fn hash_keys_of_different_kinds_never_collide() {
        let one = Value::Integer(1).hash_key();
        let truth = Value::Boolean(true).hash_key();
        let text = Value::Str("1".into()).hash_key();

        assert_ne!(one, truth);
        assert_ne!(one, text);
        assert_ne!(truth, text);
    }

    #[test]
    fn non_hashable_values_have_no_key() {
        let array = Value::Array(Rc::new(Vector::new()));
        assert!(array.hash_key().is_none());
    }

    #[test]
    fn truthiness() {
        assert!(Value::Integer(0).is_truthy());
        assert!(Value::Str("".into()).is_truthy());
        assert!(Value::Boolean(true).is_truthy());
        assert!(!Value::Boolean(false).is_truthy());
        assert!(!Value::Null.is_truthy());
    }

    #[test]
    fn identity_for_heap_values_is_by_reference() {
        let a = Value::Array(Rc::new(Vector::from(vec![Value::Integer(1)])));
        let b = Value::Array(Rc::new(Vector::from(vec![Value::Integer(1)])));
        let a2 = a.clone();

        assert!(a.identical_to(&a2));
        assert!(!a.identical_to(&b));
    }

    #[test]
    fn inspect_renderings() {
        assert_eq!(Value::Integer(42).inspect(), "42");
        assert_eq!(Value::Boolean(true).inspect(), "true");
        assert_eq!(Value::Null.inspect(), "null");
        assert_eq!(Value::Str("foo".into()).inspect(), "foo");
        assert_eq!(Value::Error("boom".into()).inspect(), "ERROR: boom");

        let array = Value::Array(Rc::new(Vector::from(vec![
            Value::Integer(1),
            Value::Str("two".into()),
        ])));
        assert_eq!(array.inspect(), "[1, two]");
    }
}
