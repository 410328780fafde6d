//! A front end for C--: scanner, parser, name resolver and unparser,
//! wired into one `compile_str`/`compile_file` pipeline.
//!
//! Type-checking, code generation and the process driver live outside this
//! crate (the driver is the thin `cmmc` binary in `main.rs`). Everything
//! here is synchronous, single-threaded, and allocates fresh state per
//! call — no process-wide globals (see `CompileResult` and DESIGN.md).

pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod position;
pub mod resolver;
pub mod scanner;
pub mod symtab;
pub mod token;
pub mod unparser;

mod parser;

pub use ast::Program;
pub use config::CompilerConfig;
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use position::Position;
pub use resolver::StructMemberTables;
pub use symtab::{StructId, Symbol, SymbolKind, SymbolTable, SymbolTableError};
pub use token::{Token, TokenKind};

use parser::Parser;
use scanner::Scanner;
use std::fs;
use std::io;
use std::path::Path;

/// Everything a single compile produces: the resolved (and annotated) AST
/// if parsing succeeded, the struct member-table arena name resolution
/// built, and the diagnostics collected along the way. `program` is `None`
/// exactly when a syntax error stopped the parser.
pub struct CompileResult {
    pub program: Option<Program>,
    pub struct_tables: StructMemberTables,
    pub diagnostics: Diagnostics,
}

impl CompileResult {
    /// `true` if this compile should cause a nonzero process exit: any
    /// error diagnostic, or a syntax error (`program` is `None`).
    pub fn failed(&self) -> bool {
        self.program.is_none() || self.diagnostics.had_errors()
    }
}

/// Scan, parse and resolve `source`. Always returns a token stream's worth
/// of diagnostics even on early syntax errors; `program` is absent exactly
/// when the parser hit its first syntax error (parsing does not recover).
pub fn compile_str(source: &str, config: &CompilerConfig) -> CompileResult {
    let mut diagnostics = match config.max_diagnostics {
        Some(max) => Diagnostics::with_max(max),
        None => Diagnostics::new(),
    };

    let tokens = Scanner::new(source, &mut diagnostics).scan();
    let parsed = Parser::new(tokens, &mut diagnostics).parse();

    let mut struct_tables = StructMemberTables::new();
    let program = parsed.map(|mut program| {
        struct_tables = resolver::resolve(&mut program, &mut diagnostics);
        program
    });

    CompileResult {
        program,
        struct_tables,
        diagnostics,
    }
}

/// Read `path` and compile its contents. The only I/O-facing entry point in
/// the library; everything downstream of the read is infallible.
pub fn compile_file(path: impl AsRef<Path>, config: &CompilerConfig) -> io::Result<CompileResult> {
    let source = fs::read_to_string(path)?;
    Ok(compile_str(&source, config))
}

/// Render the token stream alone, without parsing or resolving. Used by the
/// CLI's `tokens` subcommand and by tests that just want to see lexing.
pub fn scan_str(source: &str) -> (Vec<Token>, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let tokens = Scanner::new(source, &mut diagnostics).scan();
    (tokens, diagnostics)
}

/// Unparse a successfully-compiled program. Panics if `result.program` is
/// `None` — callers should check `failed()`/`program.is_some()` first, the
/// same way the CLI does before calling this.
pub fn unparse(result: &CompileResult, config: &CompilerConfig) -> String {
    let program = result
        .program
        .as_ref()
        .expect("unparse called on a program that failed to parse");
    unparser::unparse(program, config.annotate_symbols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_declaration_round_trips_with_no_diagnostics() {
        let config = CompilerConfig::default();
        let result = compile_str("int x;", &config);
        assert!(!result.failed());
        assert_eq!(unparse(&result, &config), "int x(int);\n");
    }

    #[test]
    fn duplicate_declaration_is_reported_at_the_second_occurrence() {
        let config = CompilerConfig::default();
        let result = compile_str("int x;\nint x;", &config);
        assert!(result.failed());
        assert_eq!(
            result.diagnostics.entries()[0].to_string(),
            "2:5 ***ERROR*** Multiply declared identifier"
        );
    }

    #[test]
    fn void_variable_is_rejected() {
        let config = CompilerConfig::default();
        let result = compile_str("void y;", &config);
        assert!(result.failed());
        assert_eq!(
            result.diagnostics.entries()[0].to_string(),
            "1:6 ***ERROR*** Non-function declared void"
        );
    }

    #[test]
    fn bad_field_name_is_reported_at_the_fields_column() {
        let config = CompilerConfig::default();
        let result = compile_str(
            "struct S { int a; } s; S x; int main() { cout << x.b; }",
            &config,
        );
        assert!(result.failed());
        assert!(result
            .diagnostics
            .entries()
            .iter()
            .any(|d| d.message == "Invalid struct field name"));
    }

    #[test]
    fn bad_escape_resumes_scanning_on_the_next_line() {
        let (tokens, diagnostics) = scan_str("\"hello\\q\"\nint x;");
        assert!(diagnostics
            .entries()
            .iter()
            .any(|d| d.message.starts_with("string literal with bad escaped character")));
        assert!(tokens
            .iter()
            .any(|t| matches!(&t.kind, TokenKind::Id(name) if name == "x")));
    }

    #[test]
    fn overflowing_literal_saturates() {
        let (tokens, diagnostics) = scan_str("2147483648");
        assert!(diagnostics
            .entries()
            .iter()
            .any(|d| d.message == "integer literal too large; using max value"));
        assert!(matches!(tokens[0].kind, TokenKind::IntLit(i32::MAX)));
    }

    #[test]
    fn a_syntax_error_leaves_program_absent_and_marks_the_compile_failed() {
        let config = CompilerConfig::default();
        let result = compile_str("int x", &config);
        assert!(result.program.is_none());
        assert!(result.failed());
    }

    #[test]
    fn unparse_reparse_idempotence_modulo_annotations() {
        let config = CompilerConfig::default();
        let source = "struct S { int a; } s; int f(int n) { if (n) { return n; } else { return 0; } }";
        let first = compile_str(source, &config);
        assert!(!first.failed());
        let unparsed_once = unparse(&first, &config);

        let second = compile_str(&unparsed_once, &config);
        assert!(!second.failed());
        let unparsed_twice = unparse(&second, &config);

        assert_eq!(unparsed_once, unparsed_twice);
    }

    #[test]
    fn compile_file_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"int x;").unwrap();
        let config = CompilerConfig::default();
        let result = compile_file(file.path(), &config).unwrap();
        assert!(!result.failed());
    }

    #[test]
    fn every_error_free_identifier_has_a_symbol_after_resolution() {
        let config = CompilerConfig::default();
        let result = compile_str("int f(int a) { return a; }", &config);
        assert!(!result.failed());
        let program = result.program.unwrap();
        match &program.decls[0] {
            ast::Decl::Fn(f) => {
                assert!(f.id.sym.is_some());
                assert!(f.formals[0].id.sym.is_some());
            }
            _ => panic!("expected FnDecl"),
        }
    }
}
