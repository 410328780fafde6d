//! Abstract syntax tree for C--.
//!
//! One tagged enum per family (`Decl`, `Type`, `Stmt`, `Expr`) rather than a
//! class hierarchy: traversal throughout the resolver and unparser is plain
//! pattern matching.

use crate::position::Position;
use crate::symtab::{StructId, Symbol};

/// An identifier use or binding. `sym`/`struct_decl` are late-bound: `None`
/// until the name resolver runs, then set for every successfully resolved
/// occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct Id {
    pub position: Position,
    pub name: String,
    pub sym: Option<Symbol>,
    pub struct_decl: Option<StructId>,
}

impl Id {
    pub fn new(position: Position, name: impl Into<String>) -> Self {
        Id {
            position,
            name: name.into(),
            sym: None,
            struct_decl: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Int,
    Bool,
    Void,
    /// The struct type named by this identifier, e.g. `S` in `struct S x;`.
    Struct(Id),
}

impl Type {
    /// The spelling stored on `Symbol`s and printed by the unparser.
    pub fn spelling(&self) -> String {
        match self {
            Type::Int => "int".to_string(),
            Type::Bool => "bool".to_string(),
            Type::Void => "void".to_string(),
            Type::Struct(id) => id.name.clone(),
        }
    }
}

/// Mirrors the source grammar's `structSize` discriminator (`NOT_STRUCT`
/// sentinel vs. `1`), expressed as an enum instead of a magic int.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructSize {
    NotStruct,
    Struct,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub ty: Type,
    pub id: Id,
    pub struct_size: StructSize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormalDecl {
    pub ty: Type,
    pub id: Id,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FnBody {
    pub decls: Vec<VarDecl>,
    pub stmts: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FnDecl {
    pub ret_ty: Type,
    pub id: Id,
    pub formals: Vec<FormalDecl>,
    pub body: FnBody,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructDecl {
    pub id: Id,
    pub members: Vec<VarDecl>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Var(VarDecl),
    Fn(FnDecl),
    Formal(FormalDecl),
    Struct(StructDecl),
}

#[derive(Debug, Clone, PartialEq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    And,
    Or,
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignExpr {
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Id,
    pub args: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    IntLit(i32),
    StrLit(String),
    True,
    False,
    Id(Id),
    DotAccess { target: Box<Expr>, field: Id },
    Assign(AssignExpr),
    Call(CallExpr),
    UnaryMinus(Box<Expr>),
    Not(Box<Expr>),
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Assign(AssignExpr),
    PostInc(Expr),
    PostDec(Expr),
    Read(Expr),
    Write(Expr),
    If {
        cond: Expr,
        decls: Vec<VarDecl>,
        stmts: Vec<Stmt>,
    },
    IfElse {
        cond: Expr,
        then_decls: Vec<VarDecl>,
        then_stmts: Vec<Stmt>,
        else_decls: Vec<VarDecl>,
        else_stmts: Vec<Stmt>,
    },
    While {
        cond: Expr,
        decls: Vec<VarDecl>,
        stmts: Vec<Stmt>,
    },
    Repeat {
        cond: Expr,
        decls: Vec<VarDecl>,
        stmts: Vec<Stmt>,
    },
    Call(CallExpr),
    Return(Option<Expr>),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub decls: Vec<Decl>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_spelling_for_struct_uses_the_type_ids_name() {
        let ty = Type::Struct(Id::new(Position::new(1, 1), "Point"));
        assert_eq!(ty.spelling(), "Point");
    }

    #[test]
    fn fresh_id_has_no_late_bound_annotations() {
        let id = Id::new(Position::new(3, 4), "x");
        assert!(id.sym.is_none());
        assert!(id.struct_decl.is_none());
    }
}
