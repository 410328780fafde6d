//! Canonical pretty-printer.
//!
//! A pure reader of the post-resolution AST: it never mutates anything and
//! never reports diagnostics. The four family dispatchers (`decl`, `stmt`,
//! `expr`, `type_spelling`) mirror the AST's own tagged-enum shape rather
//! than one big recursive match.

use crate::ast::{BinOp, Decl, Expr, FnDecl, Id, Program, Stmt, StructDecl, Type, VarDecl};

const INDENT: &str = "    ";

/// Render `program` as canonical C-- source. When `annotate_symbols` is
/// true (the default), every identifier use prints as `name(symbol)` once
/// resolution has run; with it false, the output is just re-indented
/// source with no symbol information, e.g. for a tool that only wants a
/// normalized diff.
pub fn unparse(program: &Program, annotate_symbols: bool) -> String {
    let mut u = Unparser {
        out: String::new(),
        depth: 0,
        annotate: annotate_symbols,
    };
    for decl in &program.decls {
        u.top_decl(decl);
    }
    u.out
}

struct Unparser {
    out: String,
    depth: usize,
    annotate: bool,
}

impl Unparser {
    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
    }

    fn render_id(&self, id: &Id) -> String {
        match (&id.sym, self.annotate) {
            (Some(sym), true) => format!("{}({sym})", id.name),
            _ => id.name.clone(),
        }
    }

    fn type_spelling(&self, ty: &Type) -> String {
        match ty {
            Type::Struct(id) => format!("struct {}", id.name),
            other => other.spelling(),
        }
    }

    fn top_decl(&mut self, decl: &Decl) {
        match decl {
            Decl::Var(v) => self.var_decl(v),
            Decl::Fn(f) => self.fn_decl(f),
            Decl::Formal(f) => {
                let header = format!("{} {}", self.type_spelling(&f.ty), self.render_id(&f.id));
                self.indent();
                self.out.push_str(&header);
                self.out.push_str(";\n");
            }
            Decl::Struct(s) => self.struct_decl(s),
        }
    }

    fn var_decl(&mut self, v: &VarDecl) {
        let header = format!("{} {}", self.type_spelling(&v.ty), self.render_id(&v.id));
        self.indent();
        self.out.push_str(&header);
        self.out.push_str(";\n");
    }

    fn struct_decl(&mut self, s: &StructDecl) {
        let header = format!("struct {}", self.render_id(&s.id));
        self.indent();
        self.out.push_str(&header);
        self.out.push_str(" {\n");
        self.depth += 1;
        for member in &s.members {
            self.var_decl(member);
        }
        self.depth -= 1;
        self.indent();
        self.out.push_str("};\n");
    }

    fn fn_decl(&mut self, f: &FnDecl) {
        let mut header = format!("{} {}(", self.type_spelling(&f.ret_ty), self.render_id(&f.id));
        for (i, formal) in f.formals.iter().enumerate() {
            if i > 0 {
                header.push_str(", ");
            }
            header.push_str(&self.type_spelling(&formal.ty));
            header.push(' ');
            header.push_str(&self.render_id(&formal.id));
        }
        header.push_str(") {\n");
        self.indent();
        self.out.push_str(&header);
        self.depth += 1;
        for decl in &f.body.decls {
            self.var_decl(decl);
        }
        for stmt in &f.body.stmts {
            self.stmt(stmt);
        }
        self.depth -= 1;
        self.indent();
        self.out.push_str("}\n");
    }

    fn block(&mut self, decls: &[VarDecl], stmts: &[Stmt]) {
        self.out.push_str("{\n");
        self.depth += 1;
        for decl in decls {
            self.var_decl(decl);
        }
        for stmt in stmts {
            self.stmt(stmt);
        }
        self.depth -= 1;
        self.indent();
        self.out.push('}');
    }

    fn stmt(&mut self, s: &Stmt) {
        self.indent();
        match s {
            // Assignment used as a statement: no outer parens, unlike an
            // assignment appearing inside another expression.
            Stmt::Assign(a) => {
                let line = format!("{} = {};\n", self.expr(&a.lhs), self.expr(&a.rhs));
                self.out.push_str(&line);
            }
            Stmt::PostInc(e) => {
                let line = format!("{}++;\n", self.expr(e));
                self.out.push_str(&line);
            }
            Stmt::PostDec(e) => {
                let line = format!("{}--;\n", self.expr(e));
                self.out.push_str(&line);
            }
            Stmt::Read(e) => {
                let line = format!("cin >> {};\n", self.expr(e));
                self.out.push_str(&line);
            }
            Stmt::Write(e) => {
                let line = format!("cout << {};\n", self.expr(e));
                self.out.push_str(&line);
            }
            Stmt::If { cond, decls, stmts } => {
                let header = format!("if ({}) ", self.expr(cond));
                self.out.push_str(&header);
                self.block(decls, stmts);
                self.out.push('\n');
            }
            Stmt::IfElse {
                cond,
                then_decls,
                then_stmts,
                else_decls,
                else_stmts,
            } => {
                let header = format!("if ({}) ", self.expr(cond));
                self.out.push_str(&header);
                self.block(then_decls, then_stmts);
                self.out.push_str(" else ");
                self.block(else_decls, else_stmts);
                self.out.push('\n');
            }
            Stmt::While { cond, decls, stmts } => {
                let header = format!("while ({}) ", self.expr(cond));
                self.out.push_str(&header);
                self.block(decls, stmts);
                self.out.push('\n');
            }
            Stmt::Repeat { cond, decls, stmts } => {
                let header = format!("repeat ({}) ", self.expr(cond));
                self.out.push_str(&header);
                self.block(decls, stmts);
                self.out.push('\n');
            }
            Stmt::Call(c) => {
                let line = format!("{};\n", self.call(&c.callee, &c.args));
                self.out.push_str(&line);
            }
            Stmt::Return(value) => {
                let line = match value {
                    Some(e) => format!("return {};\n", self.expr(e)),
                    None => "return;\n".to_string(),
                };
                self.out.push_str(&line);
            }
        }
    }

    fn call(&self, callee: &Id, args: &[Expr]) -> String {
        let rendered_args: Vec<String> = args.iter().map(|a| self.expr(a)).collect();
        format!("{}({})", self.render_id(callee), rendered_args.join(", "))
    }

    fn expr(&self, e: &Expr) -> String {
        match e {
            Expr::IntLit(v) => v.to_string(),
            Expr::StrLit(raw) => raw.clone(),
            Expr::True => "true".to_string(),
            Expr::False => "false".to_string(),
            Expr::Id(id) => self.render_id(id),
            Expr::DotAccess { target, field } => {
                format!("{}.{}", self.expr(target), self.render_id(field))
            }
            Expr::Assign(a) => format!("({} = {})", self.expr(&a.lhs), self.expr(&a.rhs)),
            Expr::Call(c) => self.call(&c.callee, &c.args),
            Expr::UnaryMinus(operand) => format!("(-{})", self.expr(operand)),
            Expr::Not(operand) => format!("(!{})", self.expr(operand)),
            Expr::Binary { op, lhs, rhs } => {
                format!("({} {} {})", self.expr(lhs), op_symbol(op), self.expr(rhs))
            }
        }
    }
}

fn op_symbol(op: &BinOp) -> &'static str {
    match op {
        BinOp::Add => "+",
        BinOp::Sub => "-",
        BinOp::Mul => "*",
        BinOp::Div => "/",
        BinOp::And => "&&",
        BinOp::Or => "||",
        BinOp::Eq => "==",
        BinOp::Ne => "!=",
        BinOp::Lt => "<",
        BinOp::Gt => ">",
        BinOp::Le => "<=",
        BinOp::Ge => ">=",
    }
}
