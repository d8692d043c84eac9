// rill-core - Values, bytecode encoding, and built-ins for the Rill programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # rill-core
//!
//! Runtime support for the Rill programming language: the tagged [`value::Value`]
//! model, the bytecode instruction set with its byte-level encoding and
//! disassembler, and the built-in function registry.

pub mod builtins;
pub mod code;
pub mod value;

pub use builtins::{Builtin, BuiltinFn, BUILTINS};
pub use code::{Instructions, Opcode};
pub use value::{CompiledFunction, HashKey, HashPair, Value};
