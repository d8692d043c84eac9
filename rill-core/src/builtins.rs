// rill-core - Built-in functions for the Rill programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Built-in functions, available by name in every program.
//!
//! The registry is an ordered slice so the compiler can address a built-in
//! by its stable index. Argument-count and type mismatches produce
//! `Value::Error` results rather than runtime failures; the program keeps
//! running with the error value on the stack.

use std::rc::Rc;

use im::Vector;

use crate::value::Value;

/// Signature of a built-in function.
pub type BuiltinFn = fn(&[Value]) -> Value;

/// A named built-in function.
#[derive(Debug)]
pub struct Builtin {
    pub name: &'static str,
    pub func: BuiltinFn,
}

/// The built-in registry, in index order. Indices are stable: the compiler
/// records them into bytecode.
pub static BUILTINS: &[Builtin] = &[
    Builtin { name: "len", func: builtin_len },
    Builtin { name: "puts", func: builtin_puts },
    Builtin { name: "first", func: builtin_first },
    Builtin { name: "last", func: builtin_last },
    Builtin { name: "rest", func: builtin_rest },
    Builtin { name: "push", func: builtin_push },
];

/// Look up a built-in by name.
pub fn lookup(name: &str) -> Option<&'static Builtin> {
    BUILTINS.iter().find(|b| b.name == name)
}

fn new_error(message: String) -> Value {
    Value::Error(message.into())
}

fn builtin_len(args: &[Value]) -> Value {
    if args.len() != 1 {
        return new_error(format!(
            "wrong number of arguments. got={}, want=1",
            args.len()
        ));
    }
    match &args[0] {
        Value::Array(elements) => Value::Integer(elements.len() as i64),
        Value::Str(value) => Value::Integer(value.len() as i64),
        other => new_error(format!(
            "argument to `len` not supported, got {}",
            other.type_name()
        )),
    }
}

fn builtin_puts(args: &[Value]) -> Value {
    for arg in args {
        println!("{}", arg);
    }
    Value::Null
}

fn builtin_first(args: &[Value]) -> Value {
    if args.len() != 1 {
        return new_error(format!(
            "wrong number of arguments. got={}, want=1",
            args.len()
        ));
    }
    match &args[0] {
        Value::Array(elements) => elements.front().cloned().unwrap_or(Value::Null),
        other => new_error(format!(
            "argument to `first` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

fn builtin_last(args: &[Value]) -> Value {
    if args.len() != 1 {
        return new_error(format!(
            "wrong number of arguments. got={}, want=1",
            args.len()
        ));
    }
    match &args[0] {
        Value::Array(elements) => elements.back().cloned().unwrap_or(Value::Null),
        other => new_error(format!(
            "argument to `last` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

fn builtin_rest(args: &[Value]) -> Value {
    if args.len() != 1 {
        return new_error(format!(
            "wrong number of arguments. got={}, want=1",
            args.len()
        ));
    }
    match &args[0] {
        Value::Array(elements) => {
            if elements.is_empty() {
                Value::Null
            } else {
                let rest: Vector<Value> = elements.iter().skip(1).cloned().collect();
                Value::Array(Rc::new(rest))
            }
        }
        other => new_error(format!(
            "argument to `rest` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

/// Functional append: returns a new array, the original is untouched.
fn builtin_push(args: &[Value]) -> Value {
    if args.len() != 2 {
        return new_error(format!(
            "wrong number of arguments. got={}, want=2",
            args.len()
        ));
    }
    match &args[0] {
        Value::Array(elements) => {
            let mut appended = (**elements).clone();
            appended.push_back(args[1].clone());
            Value::Array(Rc::new(appended))
        }
        other => new_error(format!(
            "argument to `push` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}
