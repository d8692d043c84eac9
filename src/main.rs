// rill - A small scripting language with a bytecode VM, written in Rust
// Copyright (c) 2025 Tom Waddington. MIT licensed.

use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;

use rill_core::builtins::BUILTINS;
use rill_core::value::Value;
use rill_parser::{Lexer, Parser};
use rill_vm::compiler::{Compiler, SymbolTable};
use rill_vm::vm::{Vm, GLOBALS_SIZE};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() == 2 && (args[1] == "--version" || args[1] == "-v") {
        println!("Rill v0.1.0");
        return;
    }

    // If files provided, run them; otherwise start the REPL
    if args.len() > 1 {
        run_files(&args[1..]);
    } else {
        run_repl();
    }
}

/// Run a sequence of source files
fn run_files(files: &[String]) {
    for file_path in files {
        if let Err(e) = run_file(file_path) {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

/// Compile and execute a single source file
fn run_file(file_path: &str) -> Result<(), String> {
    let path = Path::new(file_path);

    match path.extension().and_then(|e| e.to_str()) {
        Some("rill") => {}
        Some(ext) => {
            return Err(format!(
                "Error: unsupported file extension '.{}' for '{}'",
                ext, file_path
            ));
        }
        None => {
            return Err(format!(
                "Error: file '{}' has no extension (expected .rill)",
                file_path
            ));
        }
    }

    let source =
        fs::read_to_string(path).map_err(|e| format!("Error reading '{}': {}", file_path, e))?;

    let program = Parser::parse_source(&source)
        .map_err(|errors| format!("Parse errors in '{}':\n\t{}", file_path, errors.join("\n\t")))?;

    let mut compiler = Compiler::new();
    compiler
        .compile(&program)
        .map_err(|e| format!("Compilation failed in '{}': {}", file_path, e))?;

    let mut machine = Vm::new(compiler.bytecode());
    machine
        .run()
        .map_err(|e| format!("Executing '{}' failed: {}", file_path, e))?;

    Ok(())
}

/// Run the interactive REPL
fn run_repl() {
    println!("Rill v0.1.0");

    // Session state: later lines see symbols, constants, and globals
    // defined by earlier ones.
    let mut symbol_table = SymbolTable::new();
    for (index, builtin) in BUILTINS.iter().enumerate() {
        symbol_table.define_builtin(index, builtin.name);
    }
    let mut constants: Vec<Value> = Vec::new();
    let mut globals: Vec<Value> = vec![Value::Null; GLOBALS_SIZE];

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!(">> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("Read error: {}", e);
                break;
            }
            None => {
                println!();
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let mut parser = Parser::new(Lexer::new(&line));
        let program = parser.parse_program();
        if !parser.errors().is_empty() {
            print_parser_errors(parser.errors());
            continue;
        }

        let mut compiler = Compiler::new_with_state(symbol_table, constants);
        match compiler.compile(&program) {
            Ok(()) => {}
            Err(e) => {
                println!("Compilation failed:\n {}", e);
                (symbol_table, constants) = compiler.into_state();
                continue;
            }
        }
        let bytecode = compiler.bytecode();
        (symbol_table, constants) = compiler.into_state();

        let mut machine = Vm::with_globals_store(bytecode, globals);
        match machine.run() {
            Ok(()) => println!("{}", machine.last_popped_stack_elem()),
            Err(e) => println!("Executing bytecode failed:\n {}", e),
        }
        globals = machine.into_globals();
    }
}

fn print_parser_errors(errors: &[String]) {
    println!("Parser ERROR::");
    for error in errors {
        println!("\t{}", error);
    }
}
