// rill-parser - Lexer and parser for the Rill programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # rill-parser
//!
//! Lexer and recursive-descent Pratt parser for the Rill programming
//! language. Produces the [`ast::Program`] tree consumed by the bytecode
//! compiler in `rill-vm`.

pub mod ast;
pub mod lexer;
pub mod parser;

pub use ast::{BlockStatement, Expression, Program, Statement};
pub use lexer::{Lexer, Token};
pub use parser::Parser;
