//! Recursive-descent parser for C--.
//!
//! Hand-written rather than table-driven, but it implements an
//! LALR(1)-equivalent grammar and precedence lattice: each
//! precedence level gets its own parse function, from `parse_assign` (level
//! 1, lowest) down to `parse_postfix` (level 7, dot-access). On the first
//! syntax error, parsing stops and `parse()` returns `None` — there is no
//! error recovery, matching the "first error halts compilation" contract.

use crate::ast::{
    AssignExpr, BinOp, CallExpr, Decl, Expr, FnBody, FnDecl, FormalDecl, Id, Program, Stmt,
    StructDecl, StructSize, Type, VarDecl,
};
use crate::diagnostics::Diagnostics;
use crate::token::{Token, TokenKind};

pub struct Parser<'a> {
    tokens: Vec<Token>,
    pos: usize,
    diags: &'a mut Diagnostics,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token>, diags: &'a mut Diagnostics) -> Self {
        assert!(
            matches!(tokens.last().map(|t| &t.kind), Some(TokenKind::Eof)),
            "token stream must be Eof-terminated"
        );
        Parser {
            tokens,
            pos: 0,
            diags,
        }
    }

    pub fn parse(mut self) -> Option<Program> {
        let mut decls = Vec::new();
        while !self.check(&TokenKind::Eof) {
            decls.push(self.parse_top_decl()?);
        }
        Some(Program { decls })
    }

    // ---- token stream helpers -------------------------------------------

    fn peek(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn peek_kind(&self) -> &TokenKind {
        &self.peek().kind
    }

    fn kind_at(&self, offset: usize) -> &TokenKind {
        let idx = (self.pos + offset).min(self.tokens.len() - 1);
        &self.tokens[idx].kind
    }

    fn advance(&mut self) -> Token {
        let tok = self.peek().clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        tok
    }

    fn check(&self, kind: &TokenKind) -> bool {
        self.peek_kind() == kind
    }

    fn expect(&mut self, kind: &TokenKind) -> Option<Token> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            self.syntax_error();
            None
        }
    }

    fn syntax_error(&mut self) {
        let tok = self.peek().clone();
        if matches!(tok.kind, TokenKind::Eof) {
            self.diags.fatal(tok.position, "Syntax error at end of file");
        } else {
            self.diags.fatal(tok.position, "Syntax error");
        }
    }

    fn parse_id(&mut self) -> Option<Id> {
        let tok = self.peek().clone();
        if let TokenKind::Id(name) = tok.kind {
            self.advance();
            Some(Id::new(tok.position, name))
        } else {
            self.syntax_error();
            None
        }
    }

    fn parse_type_keyword(&mut self) -> Option<Type> {
        let ty = match self.peek_kind() {
            TokenKind::Int => Type::Int,
            TokenKind::Bool => Type::Bool,
            TokenKind::Void => Type::Void,
            _ => {
                self.syntax_error();
                return None;
            }
        };
        self.advance();
        Some(ty)
    }

    // ---- declarations ------------------------------------------------

    fn at_var_decl_start(&self) -> bool {
        match self.peek_kind() {
            TokenKind::Int | TokenKind::Bool | TokenKind::Void => {
                self.kind_at(2) != &TokenKind::LParen
            }
            TokenKind::Struct => self.kind_at(2) != &TokenKind::LBrace,
            _ => false,
        }
    }

    fn parse_top_decl(&mut self) -> Option<Decl> {
        match self.peek_kind() {
            TokenKind::Struct => {
                if self.kind_at(2) == &TokenKind::LBrace {
                    self.parse_struct_decl().map(Decl::Struct)
                } else {
                    self.parse_var_decl().map(Decl::Var)
                }
            }
            TokenKind::Int | TokenKind::Bool | TokenKind::Void => {
                if self.kind_at(2) == &TokenKind::LParen {
                    self.parse_fn_decl().map(Decl::Fn)
                } else {
                    self.parse_var_decl().map(Decl::Var)
                }
            }
            _ => {
                self.syntax_error();
                None
            }
        }
    }

    fn parse_var_decl(&mut self) -> Option<VarDecl> {
        if self.check(&TokenKind::Struct) {
            self.advance();
            let type_id = self.parse_id()?;
            let id = self.parse_id()?;
            self.expect(&TokenKind::Semi)?;
            Some(VarDecl {
                ty: Type::Struct(type_id),
                id,
                struct_size: StructSize::Struct,
            })
        } else {
            let ty = self.parse_type_keyword()?;
            let id = self.parse_id()?;
            self.expect(&TokenKind::Semi)?;
            Some(VarDecl {
                ty,
                id,
                struct_size: StructSize::NotStruct,
            })
        }
    }

    fn parse_var_decl_list(&mut self) -> Option<Vec<VarDecl>> {
        let mut decls = Vec::new();
        while self.at_var_decl_start() {
            decls.push(self.parse_var_decl()?);
        }
        Some(decls)
    }

    fn parse_struct_decl(&mut self) -> Option<StructDecl> {
        self.expect(&TokenKind::Struct)?;
        let id = self.parse_id()?;
        self.expect(&TokenKind::LBrace)?;
        let mut members = vec![self.parse_var_decl()?];
        while self.at_var_decl_start() {
            members.push(self.parse_var_decl()?);
        }
        self.expect(&TokenKind::RBrace)?;
        self.expect(&TokenKind::Semi)?;
        Some(StructDecl { id, members })
    }

    fn parse_fn_decl(&mut self) -> Option<FnDecl> {
        let ret_ty = self.parse_type_keyword()?;
        let id = self.parse_id()?;
        let formals = self.parse_formals()?;
        let body = self.parse_fn_body()?;
        Some(FnDecl {
            ret_ty,
            id,
            formals,
            body,
        })
    }

    fn parse_formals(&mut self) -> Option<Vec<FormalDecl>> {
        self.expect(&TokenKind::LParen)?;
        let mut formals = Vec::new();
        if !self.check(&TokenKind::RParen) {
            formals.push(self.parse_formal_decl()?);
            while self.check(&TokenKind::Comma) {
                self.advance();
                formals.push(self.parse_formal_decl()?);
            }
        }
        self.expect(&TokenKind::RParen)?;
        Some(formals)
    }

    fn parse_formal_decl(&mut self) -> Option<FormalDecl> {
        let ty = self.parse_type_keyword()?;
        let id = self.parse_id()?;
        Some(FormalDecl { ty, id })
    }

    fn parse_fn_body(&mut self) -> Option<FnBody> {
        self.expect(&TokenKind::LBrace)?;
        let decls = self.parse_var_decl_list()?;
        let stmts = self.parse_stmt_list()?;
        self.expect(&TokenKind::RBrace)?;
        Some(FnBody { decls, stmts })
    }

    // ---- statements ----------------------------------------------------

    fn at_stmt_start(&self) -> bool {
        matches!(
            self.peek_kind(),
            TokenKind::Id(_)
                | TokenKind::Cin
                | TokenKind::Cout
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Repeat
                | TokenKind::Return
        )
    }

    fn parse_stmt_list(&mut self) -> Option<Vec<Stmt>> {
        let mut stmts = Vec::new();
        while self.at_stmt_start() {
            stmts.push(self.parse_stmt()?);
        }
        Some(stmts)
    }

    fn parse_block(&mut self) -> Option<(Vec<VarDecl>, Vec<Stmt>)> {
        self.expect(&TokenKind::LBrace)?;
        let decls = self.parse_var_decl_list()?;
        let stmts = self.parse_stmt_list()?;
        self.expect(&TokenKind::RBrace)?;
        Some((decls, stmts))
    }

    fn parse_stmt(&mut self) -> Option<Stmt> {
        match self.peek_kind() {
            TokenKind::Cin => {
                self.advance();
                self.expect(&TokenKind::Shr)?;
                let loc = self.parse_loc()?;
                self.expect(&TokenKind::Semi)?;
                Some(Stmt::Read(loc))
            }
            TokenKind::Cout => {
                self.advance();
                self.expect(&TokenKind::Shl)?;
                let exp = self.parse_exp()?;
                self.expect(&TokenKind::Semi)?;
                Some(Stmt::Write(exp))
            }
            TokenKind::If => self.parse_if(),
            TokenKind::While => {
                self.advance();
                self.expect(&TokenKind::LParen)?;
                let cond = self.parse_exp()?;
                self.expect(&TokenKind::RParen)?;
                let (decls, stmts) = self.parse_block()?;
                Some(Stmt::While { cond, decls, stmts })
            }
            TokenKind::Repeat => {
                self.advance();
                self.expect(&TokenKind::LParen)?;
                let cond = self.parse_exp()?;
                self.expect(&TokenKind::RParen)?;
                let (decls, stmts) = self.parse_block()?;
                Some(Stmt::Repeat { cond, decls, stmts })
            }
            TokenKind::Return => {
                self.advance();
                let value = if self.check(&TokenKind::Semi) {
                    None
                } else {
                    Some(self.parse_exp()?)
                };
                self.expect(&TokenKind::Semi)?;
                Some(Stmt::Return(value))
            }
            TokenKind::Id(_) => {
                if self.kind_at(1) == &TokenKind::LParen {
                    let call = self.parse_fncall()?;
                    self.expect(&TokenKind::Semi)?;
                    Some(Stmt::Call(call))
                } else {
                    let loc = self.parse_loc()?;
                    match self.peek_kind() {
                        TokenKind::Assign => {
                            self.advance();
                            let rhs = self.parse_exp()?;
                            self.expect(&TokenKind::Semi)?;
                            Some(Stmt::Assign(AssignExpr {
                                lhs: Box::new(loc),
                                rhs: Box::new(rhs),
                            }))
                        }
                        TokenKind::PlusPlus => {
                            self.advance();
                            self.expect(&TokenKind::Semi)?;
                            Some(Stmt::PostInc(loc))
                        }
                        TokenKind::MinusMinus => {
                            self.advance();
                            self.expect(&TokenKind::Semi)?;
                            Some(Stmt::PostDec(loc))
                        }
                        _ => {
                            self.syntax_error();
                            None
                        }
                    }
                }
            }
            _ => {
                self.syntax_error();
                None
            }
        }
    }

    fn parse_if(&mut self) -> Option<Stmt> {
        self.expect(&TokenKind::If)?;
        self.expect(&TokenKind::LParen)?;
        let cond = self.parse_exp()?;
        self.expect(&TokenKind::RParen)?;
        let (then_decls, then_stmts) = self.parse_block()?;
        if self.check(&TokenKind::Else) {
            self.advance();
            let (else_decls, else_stmts) = self.parse_block()?;
            Some(Stmt::IfElse {
                cond,
                then_decls,
                then_stmts,
                else_decls,
                else_stmts,
            })
        } else {
            Some(Stmt::If {
                cond,
                decls: then_decls,
                stmts: then_stmts,
            })
        }
    }

    fn parse_fncall(&mut self) -> Option<CallExpr> {
        let callee = self.parse_id()?;
        self.expect(&TokenKind::LParen)?;
        let mut args = Vec::new();
        if !self.check(&TokenKind::RParen) {
            args.push(self.parse_exp()?);
            while self.check(&TokenKind::Comma) {
                self.advance();
                args.push(self.parse_exp()?);
            }
        }
        self.expect(&TokenKind::RParen)?;
        Some(CallExpr { callee, args })
    }

    // ---- expressions, by precedence level (1 lowest, 7 highest) --------

    fn parse_loc(&mut self) -> Option<Expr> {
        let id = self.parse_id()?;
        self.parse_dot_chain(Expr::Id(id))
    }

    fn parse_dot_chain(&mut self, mut expr: Expr) -> Option<Expr> {
        while self.check(&TokenKind::Dot) {
            self.advance();
            let field = self.parse_id()?;
            expr = Expr::DotAccess {
                target: Box::new(expr),
                field,
            };
        }
        Some(expr)
    }

    fn parse_exp(&mut self) -> Option<Expr> {
        self.parse_assign()
    }

    /// Level 1: `=`, right-associative. Only a `loc` (an identifier or a
    /// dot-access chain) may appear on the left of `=`.
    fn parse_assign(&mut self) -> Option<Expr> {
        let left = self.parse_or_and()?;
        if self.check(&TokenKind::Assign) {
            if !matches!(left, Expr::Id(_) | Expr::DotAccess { .. }) {
                self.syntax_error();
                return None;
            }
            self.advance();
            let rhs = self.parse_assign()?;
            return Some(Expr::Assign(AssignExpr {
                lhs: Box::new(left),
                rhs: Box::new(rhs),
            }));
        }
        Some(left)
    }

    /// Level 2: `||` and `&&` share one precedence, left-associative. This
    /// is deliberate, not a bug to "fix" toward `&&` binding tighter.
    fn parse_or_and(&mut self) -> Option<Expr> {
        let mut left = self.parse_relational()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Or => BinOp::Or,
                TokenKind::And => BinOp::And,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_relational()?;
            left = Expr::Binary {
                op,
                lhs: Box::new(left),
                rhs: Box::new(rhs),
            };
        }
        Some(left)
    }

    /// Level 3: `== != < > <= >=`, non-associative — a second relational
    /// operator at this level is a syntax error, not left-to-right chaining.
    fn parse_relational(&mut self) -> Option<Expr> {
        let left = self.parse_additive()?;
        let op = match self.peek_kind() {
            TokenKind::Eq => BinOp::Eq,
            TokenKind::Ne => BinOp::Ne,
            TokenKind::Lt => BinOp::Lt,
            TokenKind::Gt => BinOp::Gt,
            TokenKind::Le => BinOp::Le,
            TokenKind::Ge => BinOp::Ge,
            _ => return Some(left),
        };
        self.advance();
        let right = self.parse_additive()?;
        if self.is_relational_op() {
            self.syntax_error();
            return None;
        }
        Some(Expr::Binary {
            op,
            lhs: Box::new(left),
            rhs: Box::new(right),
        })
    }

    fn is_relational_op(&self) -> bool {
        matches!(
            self.peek_kind(),
            TokenKind::Eq
                | TokenKind::Ne
                | TokenKind::Lt
                | TokenKind::Gt
                | TokenKind::Le
                | TokenKind::Ge
        )
    }

    /// Level 4: `+ -`, left-associative.
    fn parse_additive(&mut self) -> Option<Expr> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_multiplicative()?;
            left = Expr::Binary {
                op,
                lhs: Box::new(left),
                rhs: Box::new(rhs),
            };
        }
        Some(left)
    }

    /// Level 5: `* /`, left-associative.
    fn parse_multiplicative(&mut self) -> Option<Expr> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Star => BinOp::Mul,
                TokenKind::Slash => BinOp::Div,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_unary()?;
            left = Expr::Binary {
                op,
                lhs: Box::new(left),
                rhs: Box::new(rhs),
            };
        }
        Some(left)
    }

    /// Level 6: unary `!` and unary `-`, non-associative (operand is parsed
    /// one level down, so `!!x`/`- -x` — each already a single token — can't
    /// stack).
    fn parse_unary(&mut self) -> Option<Expr> {
        match self.peek_kind() {
            TokenKind::Minus => {
                self.advance();
                let operand = self.parse_postfix()?;
                Some(Expr::UnaryMinus(Box::new(operand)))
            }
            TokenKind::Not => {
                self.advance();
                let operand = self.parse_postfix()?;
                Some(Expr::Not(Box::new(operand)))
            }
            _ => self.parse_postfix(),
        }
    }

    /// Level 7: `.`, left-associative, tightest.
    fn parse_postfix(&mut self) -> Option<Expr> {
        let base = self.parse_primary()?;
        self.parse_dot_chain(base)
    }

    fn parse_primary(&mut self) -> Option<Expr> {
        match self.peek_kind().clone() {
            TokenKind::IntLit(v) => {
                self.advance();
                Some(Expr::IntLit(v))
            }
            TokenKind::StrLit(s) => {
                self.advance();
                Some(Expr::StrLit(s))
            }
            TokenKind::True => {
                self.advance();
                Some(Expr::True)
            }
            TokenKind::False => {
                self.advance();
                Some(Expr::False)
            }
            TokenKind::LParen => {
                self.advance();
                let e = self.parse_exp()?;
                self.expect(&TokenKind::RParen)?;
                Some(e)
            }
            TokenKind::Id(_) => {
                if self.kind_at(1) == &TokenKind::LParen {
                    self.parse_fncall().map(Expr::Call)
                } else {
                    self.parse_id().map(Expr::Id)
                }
            }
            _ => {
                self.syntax_error();
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::Scanner;

    fn parse(src: &str) -> (Option<Program>, Diagnostics) {
        let mut diags = Diagnostics::new();
        let program = {
            let tokens = Scanner::new(src, &mut diags).scan();
            Parser::new(tokens, &mut diags).parse()
        };
        (program, diags)
    }

    #[test]
    fn parses_simple_var_decl() {
        let (program, diags) = parse("int x;");
        assert!(!diags.had_errors());
        let program = program.unwrap();
        assert_eq!(program.decls.len(), 1);
        match &program.decls[0] {
            Decl::Var(v) => {
                assert_eq!(v.ty, Type::Int);
                assert_eq!(v.id.name, "x");
                assert_eq!(v.struct_size, StructSize::NotStruct);
            }
            _ => panic!("expected VarDecl"),
        }
    }

    #[test]
    fn parses_struct_typed_var_decl() {
        let (program, diags) = parse("struct S s;");
        assert!(!diags.had_errors());
        let program = program.unwrap();
        match &program.decls[0] {
            Decl::Var(v) => {
                assert!(matches!(&v.ty, Type::Struct(id) if id.name == "S"));
                assert_eq!(v.struct_size, StructSize::Struct);
            }
            _ => panic!("expected VarDecl"),
        }
    }

    #[test]
    fn parses_struct_decl_with_members() {
        let (program, diags) = parse("struct S { int a; bool b; };");
        assert!(!diags.had_errors());
        match &program.unwrap().decls[0] {
            Decl::Struct(s) => {
                assert_eq!(s.id.name, "S");
                assert_eq!(s.members.len(), 2);
            }
            _ => panic!("expected StructDecl"),
        }
    }

    #[test]
    fn parses_fn_decl_with_formals_and_return() {
        let (program, diags) = parse("int add(int a, int b) { return a + b; }");
        assert!(!diags.had_errors());
        match &program.unwrap().decls[0] {
            Decl::Fn(f) => {
                assert_eq!(f.id.name, "add");
                assert_eq!(f.formals.len(), 2);
                assert_eq!(f.body.stmts.len(), 1);
            }
            _ => panic!("expected FnDecl"),
        }
    }

    #[test]
    fn cin_cout_statements() {
        let (program, diags) = parse("int main() { int x; cin >> x; cout << x; }");
        assert!(!diags.had_errors());
        match &program.unwrap().decls[0] {
            Decl::Fn(f) => {
                assert!(matches!(f.body.stmts[0], Stmt::Read(_)));
                assert!(matches!(f.body.stmts[1], Stmt::Write(_)));
            }
            _ => panic!("expected FnDecl"),
        }
    }

    #[test]
    fn postinc_and_postdec() {
        let (program, diags) = parse("int main() { int x; x++; x--; }");
        assert!(!diags.had_errors());
        match &program.unwrap().decls[0] {
            Decl::Fn(f) => {
                assert!(matches!(f.body.stmts[0], Stmt::PostInc(_)));
                assert!(matches!(f.body.stmts[1], Stmt::PostDec(_)));
            }
            _ => panic!("expected FnDecl"),
        }
    }

    #[test]
    fn if_else_each_get_their_own_block() {
        let (program, diags) = parse("int main() { if (true) { int x; } else { int y; } }");
        assert!(!diags.had_errors());
        match &program.unwrap().decls[0] {
            Decl::Fn(f) => match &f.body.stmts[0] {
                Stmt::IfElse { then_decls, else_decls, .. } => {
                    assert_eq!(then_decls[0].id.name, "x");
                    assert_eq!(else_decls[0].id.name, "y");
                }
                _ => panic!("expected IfElse"),
            },
            _ => panic!("expected FnDecl"),
        }
    }

    #[test]
    fn bare_dot_chain_is_not_a_valid_statement() {
        let (program, diags) = parse("int main() { x.a.b; }");
        assert!(diags.had_errors()); // `x.a.b;` alone is not a valid statement (no assign/++/--)
        let _ = program;
    }

    #[test]
    fn dot_access_chain_nests_left_associatively() {
        let (program, diags) = parse("int main() { x.a.b = 1; }");
        assert!(!diags.had_errors());
        match &program.unwrap().decls[0] {
            Decl::Fn(f) => match &f.body.stmts[0] {
                Stmt::Assign(AssignExpr { lhs, .. }) => match &**lhs {
                    Expr::DotAccess { target, field } => {
                        assert_eq!(field.name, "b");
                        match &**target {
                            Expr::DotAccess { target, field } => {
                                assert_eq!(field.name, "a");
                                assert!(matches!(&**target, Expr::Id(id) if id.name == "x"));
                            }
                            other => panic!("unexpected: {other:?}"),
                        }
                    }
                    other => panic!("unexpected: {other:?}"),
                },
                _ => panic!("expected Assign"),
            },
            _ => panic!("expected FnDecl"),
        }
    }

    #[test]
    fn call_statement_is_not_a_dot_chain() {
        let (program, diags) = parse("int main() { f(); }");
        assert!(!diags.had_errors());
        match &program.unwrap().decls[0] {
            Decl::Fn(f) => assert!(matches!(f.body.stmts[0], Stmt::Call(_))),
            _ => panic!("expected FnDecl"),
        }
    }

    #[test]
    fn and_or_share_precedence_left_associative() {
        // (true || false) && true -- NOT true || (false && true), per the
        // spec's confirmed (non-C-like) equal-precedence decision.
        let (program, diags) = parse("int main() { return true || false && true; }");
        assert!(!diags.had_errors());
        match &program.unwrap().decls[0] {
            Decl::Fn(f) => match &f.body.stmts[0] {
                Stmt::Return(Some(Expr::Binary { op: BinOp::And, lhs, .. })) => {
                    assert!(matches!(**lhs, Expr::Binary { op: BinOp::Or, .. }));
                }
                other => panic!("unexpected: {other:?}"),
            },
            _ => panic!("expected FnDecl"),
        }
    }

    #[test]
    fn relational_operators_do_not_chain() {
        let (_, diags) = parse("int main() { return 1 < 2 < 3; }");
        assert!(diags.had_errors());
    }

    #[test]
    fn additive_binds_looser_than_multiplicative() {
        let (program, _) = parse("int main() { return 1 + 2 * 3; }");
        match &program.unwrap().decls[0] {
            Decl::Fn(f) => match &f.body.stmts[0] {
                Stmt::Return(Some(Expr::Binary { op: BinOp::Add, rhs, .. })) => {
                    assert!(matches!(**rhs, Expr::Binary { op: BinOp::Mul, .. }));
                }
                other => panic!("unexpected: {other:?}"),
            },
            _ => panic!("expected FnDecl"),
        }
    }

    #[test]
    fn assignment_is_right_associative_and_usable_as_expression() {
        let (program, diags) = parse("int main() { int x; int y; x = y = 1; }");
        assert!(!diags.had_errors());
        match &program.unwrap().decls[0] {
            Decl::Fn(f) => match &f.body.stmts[2] {
                Stmt::Assign(AssignExpr { rhs, .. }) => {
                    assert!(matches!(**rhs, Expr::Assign(_)));
                }
                _ => panic!("expected Assign"),
            },
            _ => panic!("expected FnDecl"),
        }
    }

    #[test]
    fn reserved_word_as_identifier_is_a_syntax_error() {
        let (_, diags) = parse("int int;");
        assert!(diags.had_errors());
        assert_eq!(diags.entries()[0].message, "Syntax error");
    }

    #[test]
    fn syntax_error_at_eof_has_dedicated_message() {
        let (_, diags) = parse("int x");
        assert!(diags.had_errors());
        assert_eq!(diags.entries()[0].message, "Syntax error at end of file");
    }
}
