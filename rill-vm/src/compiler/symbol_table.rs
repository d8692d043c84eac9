// rill-vm - Bytecode compiler and virtual machine for the Rill programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Lexically scoped symbol table for the compiler.
//!
//! Tables chain through an `outer` reference, forming a stack of scopes.
//! Entering a function scope moves the current table into the new table's
//! `outer`; leaving moves it back out.

use std::collections::HashMap;

/// Where a symbol lives at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolScope {
    /// Slot in the globals vector.
    Global,
    /// Slot in the current frame, relative to its base pointer.
    Local,
    /// Entry in the built-in registry.
    Builtin,
}

/// A resolved identifier: its name, scope, and slot index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub scope: SymbolScope,
    pub index: usize,
}

/// One scope's worth of name-to-symbol mappings.
#[derive(Debug, Default)]
pub struct SymbolTable {
    outer: Option<Box<SymbolTable>>,
    store: HashMap<String, Symbol>,
    num_definitions: usize,
}

impl SymbolTable {
    /// Create a new top-level (global) symbol table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table enclosed in `outer`. Symbols defined here are Local.
    pub fn new_enclosed(outer: SymbolTable) -> Self {
        SymbolTable {
            outer: Some(Box::new(outer)),
            store: HashMap::new(),
            num_definitions: 0,
        }
    }

    /// Unwrap the enclosing table, if any.
    pub fn into_outer(self) -> Option<SymbolTable> {
        self.outer.map(|outer| *outer)
    }

    /// Number of symbols defined directly in this table. For a function
    /// scope this is the local-slot count.
    pub fn num_definitions(&self) -> usize {
        self.num_definitions
    }

    /// Define `name` in this table, allocating the next index.
    ///
    /// Redefining an existing name allocates a fresh index; the old slot is
    /// abandoned.
    pub fn define(&mut self, name: &str) -> Symbol {
        let scope = if self.outer.is_none() {
            SymbolScope::Global
        } else {
            SymbolScope::Local
        };
        let symbol = Symbol {
            name: name.to_string(),
            scope,
            index: self.num_definitions,
        };
        self.store.insert(name.to_string(), symbol.clone());
        self.num_definitions += 1;
        symbol
    }

    /// Define a built-in at its registry index. Does not consume a
    /// definition slot.
    pub fn define_builtin(&mut self, index: usize, name: &str) -> Symbol {
        let symbol = Symbol {
            name: name.to_string(),
            scope: SymbolScope::Builtin,
            index,
        };
        self.store.insert(name.to_string(), symbol.clone());
        symbol
    }

    /// Look up `name`, searching inner-to-outer. The first hit wins.
    pub fn resolve(&self, name: &str) -> Option<&Symbol> {
        self.store
            .get(name)
            .or_else(|| self.outer.as_deref().and_then(|outer| outer.resolve(name)))
    }
}
