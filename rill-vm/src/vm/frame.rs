// rill-vm - Bytecode compiler and virtual machine for the Rill programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Call frames for the VM.

use std::rc::Rc;

use rill_core::code::Instructions;
use rill_core::value::CompiledFunction;

/// A call frame: the function being executed, its instruction pointer, and
/// the stack slot where its locals start.
///
/// The instruction pointer starts at −1 so the dispatch loop can
/// pre-increment before every fetch.
#[derive(Debug, Clone)]
pub struct Frame {
    func: Rc<CompiledFunction>,
    pub ip: isize,
    pub base_pointer: usize,
}

impl Frame {
    /// Create a frame for `func` whose locals begin at `base_pointer`.
    pub fn new(func: Rc<CompiledFunction>, base_pointer: usize) -> Self {
        Frame {
            func,
            ip: -1,
            base_pointer,
        }
    }

    /// The instructions of the function this frame executes.
    pub fn instructions(&self) -> &Instructions {
        &self.func.instructions
    }
}
