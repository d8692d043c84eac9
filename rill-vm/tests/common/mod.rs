// rill-vm - Common test utilities
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Shared helpers for compiler and VM integration tests.
//!
//! In your test file, add:
//! ```ignore
//! mod common;
//! use common::*;
//! ```

#[allow(unused_imports)]
pub use rill_core::value::Value;
use rill_parser::{Parser, Program};
use rill_vm::compiler::{Bytecode, Compiler};
use rill_vm::vm::Vm;

/// Parse a source string, panicking on parse errors.
pub fn parse(source: &str) -> Program {
    match Parser::parse_source(source) {
        Ok(program) => program,
        Err(errors) => panic!("parse errors for {:?}: {:?}", source, errors),
    }
}

/// Compile a source string, panicking on parse or compile errors.
#[allow(dead_code)]
pub fn compile(source: &str) -> Bytecode {
    let program = parse(source);
    let mut compiler = Compiler::new();
    if let Err(e) = compiler.compile(&program) {
        panic!("compile error for {:?}: {}", source, e);
    }
    compiler.bytecode()
}

/// Compile and run a source string, returning the last popped stack
/// element. Compile and runtime errors come back as their display strings.
#[allow(dead_code)]
pub fn run(source: &str) -> Result<Value, String> {
    let program = parse(source);
    let mut compiler = Compiler::new();
    compiler
        .compile(&program)
        .map_err(|e| e.to_string())?;

    let mut machine = Vm::new(compiler.bytecode());
    machine.run().map_err(|e| e.to_string())?;
    Ok(machine.last_popped_stack_elem().clone())
}

/// Assert that a program produces the given integer.
#[allow(dead_code)]
pub fn expect_integer(source: &str, want: i64) {
    match run(source) {
        Ok(Value::Integer(got)) => assert_eq!(got, want, "source: {}", source),
        other => panic!("expected integer {} for {:?}, got {:?}", want, source, other),
    }
}

/// Assert that a program produces the given boolean.
#[allow(dead_code)]
pub fn expect_boolean(source: &str, want: bool) {
    match run(source) {
        Ok(Value::Boolean(got)) => assert_eq!(got, want, "source: {}", source),
        other => panic!("expected boolean {} for {:?}, got {:?}", want, source, other),
    }
}

/// Assert that a program produces null.
#[allow(dead_code)]
pub fn expect_null(source: &str) {
    match run(source) {
        Ok(Value::Null) => {}
        other => panic!("expected null for {:?}, got {:?}", source, other),
    }
}

/// Assert that a program produces the given string.
#[allow(dead_code)]
pub fn expect_string(source: &str, want: &str) {
    match run(source) {
        Ok(Value::Str(got)) => assert_eq!(&*got, want, "source: {}", source),
        other => panic!("expected string {:?} for {:?}, got {:?}", want, source, other),
    }
}

/// Assert that a program produces an array of the given integers.
#[allow(dead_code)]
pub fn expect_integer_array(source: &str, want: &[i64]) {
    match run(source) {
        Ok(Value::Array(elements)) => {
            let got: Vec<i64> = elements
                .iter()
                .map(|e| match e {
                    Value::Integer(n) => *n,
                    other => panic!("expected integer element, got {:?}", other),
                })
                .collect();
            assert_eq!(got, want, "source: {}", source);
        }
        other => panic!("expected array for {:?}, got {:?}", source, other),
    }
}

/// Assert that a program fails (at compile time or run time) with exactly
/// the given message.
#[allow(dead_code)]
pub fn expect_failure(source: &str, want: &str) {
    match run(source) {
        Err(got) => assert_eq!(got, want, "source: {}", source),
        Ok(value) => panic!(
            "expected failure {:?} for {:?}, got value {:?}",
            want, source, value
        ),
    }
}

/// Assert that a program produces a built-in Error value (not a failure)
/// with exactly the given message.
#[allow(dead_code)]
pub fn expect_error_value(source: &str, want: &str) {
    match run(source) {
        Ok(Value::Error(message)) => assert_eq!(&*message, want, "source: {}", source),
        other => panic!(
            "expected error value {:?} for {:?}, got {:?}",
            want, source, other
        ),
    }
}
