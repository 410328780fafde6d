//! Name resolver.
//!
//! A single post-order walk over the AST that installs declarations,
//! resolves identifier uses against a scope stack, and links each
//! identifier use to its declaration in place — mutating the `sym` and
//! `struct_decl` fields on [`Id`] nodes as it goes.

use crate::ast::{
    CallExpr, Decl, Expr, FnDecl, FormalDecl, Id, Program, Stmt, StructDecl, Type, VarDecl,
};
use crate::diagnostics::Diagnostics;
use crate::position::Position;
use crate::symtab::{Symbol, SymbolTable, SymbolTableError};
use std::collections::HashMap;

/// One persistent one-scope member table per struct declaration, indexed by
/// the `StructId` stored on struct-typed `Symbol`s and on `Id::struct_decl`.
pub type StructMemberTables = Vec<HashMap<String, Symbol>>;

pub struct Resolver<'a> {
    diags: &'a mut Diagnostics,
    table: SymbolTable,
    struct_tables: StructMemberTables,
}

/// Resolve `program` in place. Returns the struct member-table arena a
/// later pass (e.g. a type checker) would need to look up fields by
/// `StructId` without re-walking the AST.
pub fn resolve(program: &mut Program, diags: &mut Diagnostics) -> StructMemberTables {
    let mut resolver = Resolver {
        diags,
        table: SymbolTable::new(),
        struct_tables: Vec::new(),
    };
    for decl in &mut program.decls {
        resolver.resolve_top_decl(decl);
    }
    resolver.struct_tables
}

impl<'a> Resolver<'a> {
    fn resolve_top_decl(&mut self, decl: &mut Decl) {
        match decl {
            Decl::Var(v) => self.resolve_var_decl(v),
            Decl::Fn(f) => self.resolve_fn_decl(f),
            Decl::Formal(f) => self.resolve_formal_decl(f),
            Decl::Struct(s) => self.resolve_struct_decl(s),
        }
    }

    /// Builds the `Symbol` a `VarDecl`/`FormalDecl` of type `ty` would
    /// install, or reports the diagnostic and returns `None` without
    /// installing anything. Shared by top-level vars, formals, local vars
    /// and struct members — they all follow the same type-validation rule.
    fn build_var_symbol(&mut self, ty: &Type, pos: Position) -> Option<Symbol> {
        match ty {
            Type::Void => {
                self.diags.fatal(pos, "Non-function declared void");
                None
            }
            Type::Int => Some(Symbol::var("int")),
            Type::Bool => Some(Symbol::var("bool")),
            Type::Struct(type_id) => match self.table.lookup_global(&type_id.name) {
                Ok(Some(sym)) if sym.is_struct_decl() => {
                    let struct_id = sym
                        .struct_id
                        .expect("a structdecl symbol always carries its own struct id");
                    Some(Symbol::struct_var(type_id.name.clone(), struct_id))
                }
                _ => {
                    self.diags
                        .fatal(type_id.position, "Invalid name of struct type");
                    None
                }
            },
        }
    }

    fn resolve_var_decl(&mut self, v: &mut VarDecl) {
        let Some(sym) = self.build_var_symbol(&v.ty, v.id.position) else {
            return;
        };
        match self.table.add(&v.id.name, sym.clone()) {
            Ok(()) => {
                v.id.struct_decl = sym.struct_id;
                v.id.sym = Some(sym);
            }
            Err(SymbolTableError::Duplicate) => {
                self.diags
                    .fatal(v.id.position, "Multiply declared identifier");
            }
            Err(_) => {}
        }
    }

    fn resolve_formal_decl(&mut self, f: &mut FormalDecl) {
        let Some(sym) = self.build_var_symbol(&f.ty, f.id.position) else {
            return;
        };
        match self.table.add(&f.id.name, sym.clone()) {
            Ok(()) => {
                f.id.struct_decl = sym.struct_id;
                f.id.sym = Some(sym);
            }
            Err(SymbolTableError::Duplicate) => {
                self.diags
                    .fatal(f.id.position, "Multiply declared identifier");
            }
            Err(_) => {}
        }
    }

    fn resolve_fn_decl(&mut self, f: &mut FnDecl) {
        let params: Vec<String> = f.formals.iter().map(|p| p.ty.spelling()).collect();
        let sym = Symbol::function(f.ret_ty.spelling(), params);
        match self.table.add(&f.id.name, sym.clone()) {
            Ok(()) => f.id.sym = Some(sym),
            Err(SymbolTableError::Duplicate) => {
                self.diags
                    .fatal(f.id.position, "Multiply declared identifier");
            }
            Err(_) => {}
        }

        // The body does not get its own scope: formals and locals share one
        // frame.
        self.table.push_scope();
        for formal in &mut f.formals {
            self.resolve_formal_decl(formal);
        }
        for decl in &mut f.body.decls {
            self.resolve_var_decl(decl);
        }
        for stmt in &mut f.body.stmts {
            self.resolve_stmt(stmt);
        }
        self.table
            .pop_scope()
            .expect("function scope push/pop is always balanced");
    }

    fn resolve_struct_decl(&mut self, s: &mut StructDecl) {
        let candidate_id = self.struct_tables.len();
        let sym = Symbol::struct_decl(candidate_id);
        match self.table.add(&s.id.name, sym.clone()) {
            Ok(()) => {
                self.struct_tables.push(HashMap::new());
                s.id.sym = Some(sym);
                s.id.struct_decl = Some(candidate_id);
                let mut members = HashMap::new();
                for member in &mut s.members {
                    self.resolve_struct_member(member, &mut members);
                }
                self.struct_tables[candidate_id] = members;
            }
            Err(SymbolTableError::Duplicate) => {
                self.diags
                    .fatal(s.id.position, "Multiply declared identifier");
            }
            Err(_) => {}
        }
    }

    /// Like `resolve_var_decl`, but installs into the struct's own member
    /// table instead of the current scope. A struct-typed member still
    /// resolves its type name against the outer (global) scope, so struct
    /// types must be declared before use.
    fn resolve_struct_member(&mut self, v: &mut VarDecl, members: &mut HashMap<String, Symbol>) {
        let Some(sym) = self.build_var_symbol(&v.ty, v.id.position) else {
            return;
        };
        if members.contains_key(&v.id.name) {
            self.diags
                .fatal(v.id.position, "Multiply declared identifier");
            return;
        }
        v.id.struct_decl = sym.struct_id;
        v.id.sym = Some(sym.clone());
        members.insert(v.id.name.clone(), sym);
    }

    fn resolve_stmt(&mut self, stmt: &mut Stmt) {
        match stmt {
            Stmt::Assign(a) => {
                self.resolve_expr(&mut a.lhs);
                self.resolve_expr(&mut a.rhs);
            }
            Stmt::PostInc(e) | Stmt::PostDec(e) | Stmt::Read(e) | Stmt::Write(e) => {
                self.resolve_expr(e);
            }
            Stmt::If { cond, decls, stmts } => {
                self.resolve_expr(cond);
                self.resolve_block(decls, stmts);
            }
            Stmt::While { cond, decls, stmts } | Stmt::Repeat { cond, decls, stmts } => {
                self.resolve_expr(cond);
                self.resolve_block(decls, stmts);
            }
            Stmt::IfElse {
                cond,
                then_decls,
                then_stmts,
                else_decls,
                else_stmts,
            } => {
                self.resolve_expr(cond);
                self.resolve_block(then_decls, then_stmts);
                self.resolve_block(else_decls, else_stmts);
            }
            Stmt::Call(c) => self.resolve_call(c),
            Stmt::Return(value) => {
                if let Some(e) = value {
                    self.resolve_expr(e);
                }
            }
        }
    }

    fn resolve_block(&mut self, decls: &mut [VarDecl], stmts: &mut [Stmt]) {
        self.table.push_scope();
        for decl in decls.iter_mut() {
            self.resolve_var_decl(decl);
        }
        for stmt in stmts.iter_mut() {
            self.resolve_stmt(stmt);
        }
        self.table
            .pop_scope()
            .expect("block scope push/pop is always balanced");
    }

    fn resolve_expr(&mut self, expr: &mut Expr) {
        match expr {
            Expr::IntLit(_) | Expr::StrLit(_) | Expr::True | Expr::False => {}
            Expr::Id(id) => self.resolve_id_use(id),
            Expr::DotAccess { target, field } => self.resolve_dot_access(target, field),
            Expr::Assign(a) => {
                self.resolve_expr(&mut a.lhs);
                self.resolve_expr(&mut a.rhs);
            }
            Expr::Call(c) => self.resolve_call(c),
            Expr::UnaryMinus(operand) | Expr::Not(operand) => self.resolve_expr(operand),
            Expr::Binary { lhs, rhs, .. } => {
                self.resolve_expr(lhs);
                self.resolve_expr(rhs);
            }
        }
    }

    fn resolve_call(&mut self, call: &mut CallExpr) {
        self.resolve_id_use(&mut call.callee);
        for arg in &mut call.args {
            self.resolve_expr(arg);
        }
    }

    fn resolve_id_use(&mut self, id: &mut Id) {
        match self.table.lookup_global(&id.name) {
            Ok(Some(sym)) => {
                id.struct_decl = sym.struct_id;
                id.sym = Some(sym.clone());
            }
            Ok(None) => self.diags.fatal(id.position, "Undeclared identifier"),
            Err(SymbolTableError::Empty) => {
                unreachable!("the global scope is never popped during resolution")
            }
            Err(_) => {}
        }
    }

    /// Resolves `target . field`. `target` is resolved first; if it names
    /// (directly or through its own dot chain) a struct-typed entity, `field`
    /// is looked up in that struct's member table.
    fn resolve_dot_access(&mut self, target: &mut Expr, field: &mut Id) {
        self.resolve_expr(target);
        let Some(struct_id) = self.struct_id_of(target, field.position) else {
            return; // the failure, if any, was already reported below us
        };
        match self.struct_tables[struct_id].get(&field.name) {
            Some(sym) => {
                field.struct_decl = sym.struct_id;
                field.sym = Some(sym.clone());
            }
            None => self.diags.fatal(field.position, "Invalid struct field name"),
        }
    }

    /// The struct a resolved `loc` expression refers to, if any.
    /// `fallback_position` is used only for the (grammatically unusual) case
    /// of a dot applied to something that isn't an identifier or a dot
    /// chain.
    fn struct_id_of(&mut self, expr: &Expr, fallback_position: Position) -> Option<usize> {
        match expr {
            Expr::Id(id) => match &id.sym {
                Some(sym) => sym.struct_id.or_else(|| {
                    self.diags
                        .fatal(id.position, "Dot-access of non-struct type");
                    None
                }),
                None => None,
            },
            Expr::DotAccess { field, .. } => match &field.sym {
                Some(sym) => sym.struct_id.or_else(|| {
                    self.diags
                        .fatal(field.position, "Dot-access of non-struct type");
                    None
                }),
                None => None,
            },
            _ => {
                self.diags
                    .fatal(fallback_position, "Dot-access of non-struct type");
                None
            }
        }
    }
}
