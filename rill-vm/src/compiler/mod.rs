// rill-vm - Bytecode compiler and virtual machine for the Rill programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! One-pass bytecode compiler: transforms the Rill AST into an instruction
//! stream and a constant pool.
//!
//! Forward jumps are emitted with a placeholder operand and patched in
//! place once the target offset is known. The compiler also remembers the
//! last two emitted instructions per scope, so an `if` branch can drop its
//! trailing `OpPop` and leave the branch value on the stack.

pub mod symbol_table;

use std::fmt;
use std::rc::Rc;

use rill_core::builtins::BUILTINS;
use rill_core::code::{self, Instructions, Opcode};
use rill_core::value::{CompiledFunction, Value};
use rill_parser::ast::{BlockStatement, Expression, Program, Statement};

pub use symbol_table::{Symbol, SymbolScope, SymbolTable};

/// Error during compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// Infix operator the compiler has no opcode for.
    UnknownOperator(String),
    /// Identifier that resolves to nothing.
    UndefinedVariable(String),
    /// Prefix operator the compiler has no opcode for.
    InvalidOperation(String),
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::UnknownOperator(op) => write!(f, "unknown operator {}", op),
            CompileError::UndefinedVariable(name) => write!(f, "undefined variable: {}", name),
            CompileError::InvalidOperation(op) => write!(f, "invalid operation: {}", op),
        }
    }
}

impl std::error::Error for CompileError {}

/// Result type for compilation.
pub type Result<T> = std::result::Result<T, CompileError>;

/// A compiled program: the instruction stream plus its constant pool.
#[derive(Debug, Clone)]
pub struct Bytecode {
    pub instructions: Instructions,
    pub constants: Vec<Value>,
}

/// Opcode and offset of an already-emitted instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EmittedInstruction {
    opcode: Opcode,
    position: usize,
}

/// Per-function compilation state: the growing instruction stream and the
/// two most recently emitted instructions.
#[derive(Debug, Default)]
struct CompilationScope {
    instructions: Instructions,
    last_instruction: Option<EmittedInstruction>,
    previous_instruction: Option<EmittedInstruction>,
}

/// The bytecode compiler.
pub struct Compiler {
    constants: Vec<Value>,
    symbol_table: SymbolTable,
    scopes: Vec<CompilationScope>,
}

impl Compiler {
    /// Create a compiler with a fresh symbol table. The built-in registry
    /// is pre-defined so built-ins resolve by name everywhere.
    pub fn new() -> Self {
        let mut symbol_table = SymbolTable::new();
        for (index, builtin) in BUILTINS.iter().enumerate() {
            symbol_table.define_builtin(index, builtin.name);
        }
        Compiler {
            constants: Vec::new(),
            symbol_table,
            scopes: vec![CompilationScope::default()],
        }
    }

    /// Resume compilation with prior symbol assignments and constants, for
    /// REPL continuity across lines.
    pub fn new_with_state(symbol_table: SymbolTable, constants: Vec<Value>) -> Self {
        Compiler {
            constants,
            symbol_table,
            scopes: vec![CompilationScope::default()],
        }
    }

    /// Hand the symbol table and constant pool back to the caller, so the
    /// next line of a session can resume from them.
    pub fn into_state(self) -> (SymbolTable, Vec<Value>) {
        (self.symbol_table, self.constants)
    }

    /// Compile a program into the current instruction stream.
    pub fn compile(&mut self, program: &Program) -> Result<()> {
        for statement in &program.statements {
            self.compile_statement(statement)?;
        }
        Ok(())
    }

    /// Snapshot the compiled instructions and constants for the VM.
    pub fn bytecode(&self) -> Bytecode {
        Bytecode {
            instructions: self.current_scope().instructions.clone(),
            constants: self.constants.clone(),
        }
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn compile_statement(&mut self, statement: &Statement) -> Result<()> {
        match statement {
            Statement::Expression(expression) => {
                self.compile_expression(expression)?;
                self.emit(Opcode::Pop, &[]);
            }
            Statement::Let { name, value } => {
                self.compile_expression(value)?;
                let symbol = self.symbol_table.define(name);
                match symbol.scope {
                    SymbolScope::Global => self.emit(Opcode::SetGlobal, &[symbol.index]),
                    _ => self.emit(Opcode::SetLocal, &[symbol.index]),
                };
            }
            Statement::Return(value) => {
                self.compile_expression(value)?;
                self.emit(Opcode::ReturnValue, &[]);
            }
        }
        Ok(())
    }

    fn compile_block(&mut self, block: &BlockStatement) -> Result<()> {
        for statement in &block.statements {
            self.compile_statement(statement)?;
        }
        Ok(())
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn compile_expression(&mut self, expression: &Expression) -> Result<()> {
        match expression {
            Expression::Identifier(name) => {
                let symbol = self
                    .symbol_table
                    .resolve(name)
                    .cloned()
                    .ok_or_else(|| CompileError::UndefinedVariable(name.clone()))?;
                self.load_symbol(&symbol);
            }
            Expression::IntegerLiteral(value) => {
                let index = self.add_constant(Value::Integer(*value));
                self.emit(Opcode::Constant, &[index]);
            }
            Expression::StringLiteral(value) => {
                let index = self.add_constant(Value::Str(value.as_str().into()));
                self.emit(Opcode::Constant, &[index]);
            }
            Expression::Boolean(true) => {
                self.emit(Opcode::True, &[]);
            }
            Expression::Boolean(false) => {
                self.emit(Opcode::False, &[]);
            }
            Expression::Prefix { operator, right } => {
                self.compile_expression(right)?;
                match operator.as_str() {
                    "!" => self.emit(Opcode::Bang, &[]),
                    "-" => self.emit(Opcode::Minus, &[]),
                    _ => return Err(CompileError::InvalidOperation(operator.clone())),
                };
            }
            Expression::Infix {
                operator,
                left,
                right,
            } => {
                // `a < b` compiles as `b > a`: swapping the operand order
                // saves a dedicated less-than opcode.
                if operator == "<" {
                    self.compile_expression(right)?;
                    self.compile_expression(left)?;
                    self.emit(Opcode::GreaterThan, &[]);
                    return Ok(());
                }
                self.compile_expression(left)?;
                self.compile_expression(right)?;
                let opcode = match operator.as_str() {
                    "+" => Opcode::Add,
                    "-" => Opcode::Sub,
                    "*" => Opcode::Mul,
                    "/" => Opcode::Div,
                    ">" => Opcode::GreaterThan,
                    "==" => Opcode::Equal,
                    "!=" => Opcode::NotEqual,
                    _ => return Err(CompileError::UnknownOperator(operator.clone())),
                };
                self.emit(opcode, &[]);
            }
            Expression::If {
                condition,
                consequence,
                alternative,
            } => self.compile_if(condition, consequence, alternative.as_ref())?,
            Expression::FunctionLiteral { parameters, body } => {
                self.compile_function_literal(parameters, body)?;
            }
            Expression::Call {
                function,
                arguments,
            } => {
                self.compile_expression(function)?;
                for argument in arguments {
                    self.compile_expression(argument)?;
                }
                self.emit(Opcode::Call, &[arguments.len()]);
            }
            Expression::ArrayLiteral(elements) => {
                for element in elements {
                    self.compile_expression(element)?;
                }
                self.emit(Opcode::Array, &[elements.len()]);
            }
            Expression::HashLiteral(pairs) => {
                for (key, value) in pairs {
                    self.compile_expression(key)?;
                    self.compile_expression(value)?;
                }
                self.emit(Opcode::Hash, &[pairs.len() * 2]);
            }
            Expression::Index { left, index } => {
                self.compile_expression(left)?;
                self.compile_expression(index)?;
                self.emit(Opcode::Index, &[]);
            }
        }
        Ok(())
    }

    fn compile_if(
        &mut self,
        condition: &Expression,
        consequence: &BlockStatement,
        alternative: Option<&BlockStatement>,
    ) -> Result<()> {
        self.compile_expression(condition)?;

        // Placeholder operand, patched once the consequence length is known.
        let jump_not_truthy_pos = self.emit(Opcode::JumpNotTruthy, &[9999]);

        self.compile_block(consequence)?;
        if self.last_instruction_is(Opcode::Pop) {
            self.remove_last_pop();
        }

        let jump_pos = self.emit(Opcode::Jump, &[9999]);

        let after_consequence = self.current_scope().instructions.0.len();
        self.change_operand(jump_not_truthy_pos, after_consequence);

        match alternative {
            None => {
                self.emit(Opcode::Null, &[]);
            }
            Some(alternative) => {
                self.compile_block(alternative)?;
                if self.last_instruction_is(Opcode::Pop) {
                    self.remove_last_pop();
                }
            }
        }

        let after_alternative = self.current_scope().instructions.0.len();
        self.change_operand(jump_pos, after_alternative);
        Ok(())
    }

    fn compile_function_literal(
        &mut self,
        parameters: &[String],
        body: &BlockStatement,
    ) -> Result<()> {
        self.enter_scope();
        for parameter in parameters {
            self.symbol_table.define(parameter);
        }

        self.compile_block(body)?;
        // A body ending in an expression statement leaves its value as the
        // return value; an empty body returns null.
        if self.last_instruction_is(Opcode::Pop) {
            self.replace_last_pop_with_return();
        }
        if !self.last_instruction_is(Opcode::ReturnValue) {
            self.emit(Opcode::Return, &[]);
        }

        let num_locals = self.symbol_table.num_definitions();
        let instructions = self.leave_scope();

        let function = CompiledFunction {
            instructions,
            num_locals,
            num_parameters: parameters.len(),
        };
        let index = self.add_constant(Value::CompiledFunction(Rc::new(function)));
        self.emit(Opcode::Constant, &[index]);
        Ok(())
    }

    fn load_symbol(&mut self, symbol: &Symbol) {
        match symbol.scope {
            SymbolScope::Global => self.emit(Opcode::GetGlobal, &[symbol.index]),
            SymbolScope::Local => self.emit(Opcode::GetLocal, &[symbol.index]),
            SymbolScope::Builtin => self.emit(Opcode::GetBuiltin, &[symbol.index]),
        };
    }

    // ========================================================================
    // Emission
    // ========================================================================

    /// Append `value` to the constant pool and return its index. Indices
    /// never change once assigned.
    fn add_constant(&mut self, value: Value) -> usize {
        self.constants.push(value);
        self.constants.len() - 1
    }

    /// Emit an instruction and return its byte offset.
    fn emit(&mut self, op: Opcode, operands: &[usize]) -> usize {
        let instruction = code::make(op, operands);
        let position = self.add_instruction(instruction);
        self.set_last_instruction(op, position);
        position
    }

    fn add_instruction(&mut self, instruction: Vec<u8>) -> usize {
        let scope = self.current_scope_mut();
        let position = scope.instructions.0.len();
        scope.instructions.0.extend(instruction);
        position
    }

    fn set_last_instruction(&mut self, opcode: Opcode, position: usize) {
        let scope = self.current_scope_mut();
        scope.previous_instruction = scope.last_instruction;
        scope.last_instruction = Some(EmittedInstruction { opcode, position });
    }

    fn last_instruction_is(&self, opcode: Opcode) -> bool {
        self.current_scope()
            .last_instruction
            .is_some_and(|last| last.opcode == opcode)
    }

    /// Truncate the stream to drop the trailing `OpPop` and restore the
    /// previous instruction as `last`.
    fn remove_last_pop(&mut self) {
        let scope = self.current_scope_mut();
        if let Some(last) = scope.last_instruction {
            scope.instructions.0.truncate(last.position);
            scope.last_instruction = scope.previous_instruction;
        }
    }

    /// Overwrite the instruction at `position` in place. The replacement
    /// must have the same length.
    fn replace_instruction(&mut self, position: usize, new_instruction: Vec<u8>) {
        let instructions = &mut self.current_scope_mut().instructions.0;
        instructions[position..position + new_instruction.len()]
            .copy_from_slice(&new_instruction);
    }

    fn replace_last_pop_with_return(&mut self) {
        let last_position = match self.current_scope().last_instruction {
            Some(last) => last.position,
            None => return,
        };
        self.replace_instruction(last_position, code::make(Opcode::ReturnValue, &[]));
        if let Some(last) = &mut self.current_scope_mut().last_instruction {
            last.opcode = Opcode::ReturnValue;
        }
    }

    /// Rewrite the operand of the instruction at `position`, keeping the
    /// opcode and instruction length unchanged.
    fn change_operand(&mut self, position: usize, operand: usize) {
        let byte = self.current_scope().instructions.0[position];
        let op = Opcode::from_byte(byte).expect("change_operand at a non-opcode offset");
        self.replace_instruction(position, code::make(op, &[operand]));
    }

    // ========================================================================
    // Scopes
    // ========================================================================

    fn current_scope(&self) -> &CompilationScope {
        self.scopes.last().expect("compiler has no scope")
    }

    fn current_scope_mut(&mut self) -> &mut CompilationScope {
        self.scopes.last_mut().expect("compiler has no scope")
    }

    fn enter_scope(&mut self) {
        self.scopes.push(CompilationScope::default());
        let outer = std::mem::take(&mut self.symbol_table);
        self.symbol_table = SymbolTable::new_enclosed(outer);
    }

    fn leave_scope(&mut self) -> Instructions {
        let scope = self.scopes.pop().expect("compiler has no scope");
        let table = std::mem::take(&mut self.symbol_table);
        self.symbol_table = table
            .into_outer()
            .expect("left a scope without an enclosing symbol table");
        scope.instructions
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}
