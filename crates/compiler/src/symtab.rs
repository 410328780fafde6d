//! Scoped symbol table.
//!
//! A stack of scopes (innermost last) plus, separately, one persistent
//! one-scope member table per struct declaration, addressed by [`StructId`]
//! rather than by name or pointer so [`Symbol`] and AST `Id` nodes can
//! reference a struct's members without owning them (see DESIGN.md).

use std::collections::HashMap;
use std::fmt;

/// Stable index into the resolver's struct member-table arena.
pub type StructId = usize;

#[derive(Debug, Clone, PartialEq)]
pub enum SymbolKind {
    Var { ty: String },
    Function { ret: String, params: Vec<String> },
    StructDecl,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub kind: SymbolKind,
    /// Set for a struct-typed variable (points at its defining struct), and
    /// for a `structdecl` symbol (points at itself), so dot-access never has
    /// to re-resolve a struct name to find its member table.
    pub struct_id: Option<StructId>,
}

impl Symbol {
    pub fn var(ty: impl Into<String>) -> Self {
        Symbol {
            kind: SymbolKind::Var { ty: ty.into() },
            struct_id: None,
        }
    }

    pub fn struct_var(ty: impl Into<String>, struct_id: StructId) -> Self {
        Symbol {
            kind: SymbolKind::Var { ty: ty.into() },
            struct_id: Some(struct_id),
        }
    }

    pub fn function(ret: impl Into<String>, params: Vec<String>) -> Self {
        Symbol {
            kind: SymbolKind::Function {
                ret: ret.into(),
                params,
            },
            struct_id: None,
        }
    }

    pub fn struct_decl(struct_id: StructId) -> Self {
        Symbol {
            kind: SymbolKind::StructDecl,
            struct_id: Some(struct_id),
        }
    }

    pub fn is_struct_decl(&self) -> bool {
        matches!(self.kind, SymbolKind::StructDecl)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            SymbolKind::Var { ty } => write!(f, "{ty}"),
            SymbolKind::Function { ret, params } => {
                if params.is_empty() {
                    write!(f, "->{ret}")
                } else {
                    write!(f, "{} -> {ret}", params.join(", "))
                }
            }
            SymbolKind::StructDecl => write!(f, "structdecl"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolTableError {
    /// No scope to operate on.
    Empty,
    /// `add` found the name already present in the innermost scope.
    Duplicate,
    /// `add` was given an empty name.
    IllegalArgument,
}

impl fmt::Display for SymbolTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolTableError::Empty => write!(f, "symbol table has no scope"),
            SymbolTableError::Duplicate => write!(f, "name already declared in this scope"),
            SymbolTableError::IllegalArgument => write!(f, "illegal argument"),
        }
    }
}

impl std::error::Error for SymbolTableError {}

#[derive(Debug, Default)]
struct Scope {
    entries: HashMap<String, Symbol>,
}

/// A stack of scopes. `new()` starts with one (the global) scope already
/// pushed: the table always starts with one empty (global) scope.
#[derive(Debug)]
pub struct SymbolTable {
    scopes: Vec<Scope>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        SymbolTable::new()
    }
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            scopes: vec![Scope::default()],
        }
    }

    pub fn push_scope(&mut self) {
        self.scopes.push(Scope::default());
    }

    pub fn pop_scope(&mut self) -> Result<(), SymbolTableError> {
        if self.scopes.pop().is_none() {
            Err(SymbolTableError::Empty)
        } else {
            Ok(())
        }
    }

    pub fn add(&mut self, name: &str, sym: Symbol) -> Result<(), SymbolTableError> {
        if name.is_empty() {
            return Err(SymbolTableError::IllegalArgument);
        }
        let scope = self.scopes.last_mut().ok_or(SymbolTableError::Empty)?;
        if scope.entries.contains_key(name) {
            return Err(SymbolTableError::Duplicate);
        }
        scope.entries.insert(name.to_string(), sym);
        Ok(())
    }

    pub fn lookup_local(&self, name: &str) -> Result<Option<&Symbol>, SymbolTableError> {
        let scope = self.scopes.last().ok_or(SymbolTableError::Empty)?;
        Ok(scope.entries.get(name))
    }

    pub fn lookup_global(&self, name: &str) -> Result<Option<&Symbol>, SymbolTableError> {
        if self.scopes.is_empty() {
            return Err(SymbolTableError::Empty);
        }
        for scope in self.scopes.iter().rev() {
            if let Some(sym) = scope.entries.get(name) {
                return Ok(Some(sym));
            }
        }
        Ok(None)
    }

    /// Debug dump to the given writer, innermost scope first. Not used by
    /// the compiler proper; mirrors the source's `print()` escape hatch.
    pub fn print(&self, out: &mut impl fmt::Write) -> fmt::Result {
        for (depth, scope) in self.scopes.iter().rev().enumerate() {
            writeln!(out, "-- scope {depth} --")?;
            for (name, sym) in &scope.entries {
                writeln!(out, "{name}: {sym}")?;
            }
        }
        Ok(())
    }
}
