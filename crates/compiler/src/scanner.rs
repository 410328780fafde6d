//! Lexical scanner.
//!
//! Hand-rolled, character-at-a-time, matching the grammar's longest-match /
//! rule-priority scheme rather than a generated DFA.
//! `scan()` drains the whole input into a `Vec<Token>` up front (the parser
//! then drives off that vector by index) — simpler than a pull API and
//! observably identical, since nothing about the pipeline can "pull" two
//! tokens' worth of lookahead across a mutable borrow anyway.

use crate::diagnostics::Diagnostics;
use crate::position::Position;
use crate::token::{keyword, Token, TokenKind};

pub struct Scanner<'a> {
    chars: Vec<char>,
    idx: usize,
    line: usize,
    column: usize,
    diags: &'a mut Diagnostics,
}

const ESCAPABLE: [char; 6] = ['n', 't', '\'', '"', '?', '\\'];

impl<'a> Scanner<'a> {
    pub fn new(source: &str, diags: &'a mut Diagnostics) -> Self {
        Scanner {
            chars: source.chars().collect(),
            idx: 0,
            line: 1,
            column: 1,
            diags,
        }
    }

    /// Scan the whole input, terminated by a single trailing `Eof` token.
    pub fn scan(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token();
            let is_eof = matches!(tok.kind, TokenKind::Eof);
            tokens.push(tok);
            if is_eof {
                return tokens;
            }
        }
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.idx).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.idx + offset).copied()
    }

    /// Consume exactly one character, advancing line/column by its width.
    fn bump(&mut self) -> char {
        let c = self.chars[self.idx];
        self.idx += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    fn at_eof(&self) -> bool {
        self.idx >= self.chars.len()
    }

    fn next_token(&mut self) -> Token {
        loop {
            if self.at_eof() {
                return Token::new(TokenKind::Eof, self.position());
            }
            let c = self.peek().unwrap();
            match c {
                ' ' | '\t' | '\n' => {
                    self.bump();
                    continue;
                }
                '/' if self.peek_at(1) == Some('/') => {
                    self.skip_line_comment();
                    continue;
                }
                '#' if self.peek_at(1) == Some('#') => {
                    self.skip_line_comment();
                    continue;
                }
                '"' => {
                    if let Some(tok) = self.scan_string() {
                        return tok;
                    }
                    continue;
                }
                c if c.is_ascii_digit() => return self.scan_number(),
                c if c == '_' || c.is_ascii_alphabetic() => return self.scan_word(),
                _ => {
                    if let Some(tok) = self.scan_operator() {
                        return tok;
                    }
                    let pos = self.position();
                    let ch = self.bump();
                    self.diags
                        .fatal(pos, format!("illegal character ignored: {ch}"));
                    continue;
                }
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.bump();
        }
    }

    fn scan_word(&mut self) -> Token {
        let pos = self.position();
        let mut s = String::new();
        while let Some(c) = self.peek() {
            if c == '_' || c.is_ascii_alphanumeric() {
                s.push(self.bump());
            } else {
                break;
            }
        }
        let kind = keyword(&s).unwrap_or(TokenKind::Id(s));
        Token::new(kind, pos)
    }

    fn scan_number(&mut self) -> Token {
        let pos = self.position();
        let col_before = self.column;
        let mut digits = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                digits.push(self.bump());
            } else {
                break;
            }
        }
        // Parsed as a real number first, per spec, so that an arbitrarily
        // long digit run never panics/overflows while checking the bound.
        let value: f64 = digits.parse().unwrap_or(f64::INFINITY);
        if value > i32::MAX as f64 {
            self.diags.warn(
                pos,
                "integer literal too large; using max value".to_string(),
            );
            // Observed bug: the column counter is not advanced
            // past the overflowing literal, so whatever follows on this
            // line reports a drifted column.
            self.column = col_before;
            Token::new(TokenKind::IntLit(i32::MAX), pos)
        } else {
            Token::new(TokenKind::IntLit(value as i32), pos)
        }
    }

    /// Scans a string literal, handling all four shapes at once:
    /// well-formed, unterminated, bad-escape, and unterminated-with-bad-escape.
    /// Returns `None` when no token is produced (the three error shapes).
    fn scan_string(&mut self) -> Option<Token> {
        let pos = self.position();
        let mut raw = String::new();
        raw.push(self.bump()); // opening quote

        let mut bad_escape = false;
        let mut closed = false;
        loop {
            match self.peek() {
                None => break,
                Some('\n') => break,
                Some('"') => {
                    raw.push(self.bump());
                    closed = true;
                    break;
                }
                Some('\\') => {
                    raw.push(self.bump());
                    match self.peek() {
                        Some(c) if ESCAPABLE.contains(&c) => {
                            raw.push(self.bump());
                        }
                        Some('\n') | None => {
                            bad_escape = true;
                        }
                        Some(_) => {
                            bad_escape = true;
                            raw.push(self.bump());
                        }
                    }
                }
                Some(_) => {
                    raw.push(self.bump());
                }
            }
        }

        match (closed, bad_escape) {
            (true, false) => Some(Token::new(TokenKind::StrLit(raw), pos)),
            (true, true) => {
                self.diags.fatal(
                    pos,
                    format!("string literal with bad escaped character ignored {raw}"),
                );
                None
            }
            (false, false) => {
                self.diags
                    .fatal(pos, format!("unterminated string literal ignored {raw}"));
                None
            }
            (false, true) => {
                self.diags.fatal(
                    pos,
                    format!("unterminated string literal with bad escaped character ignored {raw}"),
                );
                None
            }
        }
    }

    fn scan_operator(&mut self) -> Option<Token> {
        let pos = self.position();
        let two = (self.peek(), self.peek_at(1));
        let kind = match two {
            (Some('+'), Some('+')) => Some(TokenKind::PlusPlus),
            (Some('-'), Some('-')) => Some(TokenKind::MinusMinus),
            (Some('='), Some('=')) => Some(TokenKind::Eq),
            (Some('!'), Some('=')) => Some(TokenKind::Ne),
            (Some('&'), Some('&')) => Some(TokenKind::And),
            (Some('|'), Some('|')) => Some(TokenKind::Or),
            (Some('<'), Some('=')) => Some(TokenKind::Le),
            (Some('>'), Some('=')) => Some(TokenKind::Ge),
            (Some('<'), Some('<')) => Some(TokenKind::Shl),
            (Some('>'), Some('>')) => Some(TokenKind::Shr),
            _ => None,
        };
        if let Some(kind) = kind {
            self.bump();
            self.bump();
            return Some(Token::new(kind, pos));
        }
        let kind = match self.peek()? {
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ';' => TokenKind::Semi,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '=' => TokenKind::Assign,
            '!' => TokenKind::Not,
            '<' => TokenKind::Lt,
            '>' => TokenKind::Gt,
            _ => return None,
        };
        self.bump();
        Some(Token::new(kind, pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(src: &str) -> (Vec<Token>, Diagnostics) {
        let mut diags = Diagnostics::new();
        let tokens = {
            let scanner = Scanner::new(src, &mut diags);
            scanner.scan()
        };
        (tokens, diags)
    }

    #[test]
    fn scans_int_x_semi() {
        let (tokens, diags) = scan("int x;");
        assert!(diags.is_empty());
        assert_eq!(tokens[0], Token::new(TokenKind::Int, Position::new(1, 1)));
        assert_eq!(
            tokens[1],
            Token::new(TokenKind::Id("x".to_string()), Position::new(1, 5))
        );
        assert_eq!(tokens[2], Token::new(TokenKind::Semi, Position::new(1, 6)));
        assert_eq!(tokens[3].kind, TokenKind::Eof);
    }

    #[test]
    fn reserved_word_never_scans_as_identifier() {
        let (tokens, _) = scan("int");
        assert_eq!(tokens[0].kind, TokenKind::Int);
    }

    #[test]
    fn max_int_literal_is_accepted_without_warning() {
        let (tokens, diags) = scan("2147483647");
        assert!(diags.is_empty());
        assert_eq!(tokens[0].kind, TokenKind::IntLit(i32::MAX));
    }

    #[test]
    fn overflowing_literal_warns_and_saturates_and_drifts_column() {
        let (tokens, diags) = scan("2147483648 x");
        assert_eq!(diags.entries().len(), 1);
        assert_eq!(
            diags.entries()[0].message,
            "integer literal too large; using max value"
        );
        assert_eq!(tokens[0].kind, TokenKind::IntLit(i32::MAX));
        // Column not advanced past the overflowing literal: "x" reports the
        // column right after the literal's *start*, not its real position.
        assert_eq!(tokens[1].position, Position::new(1, 2));
    }

    #[test]
    fn well_formed_escapes_are_accepted() {
        let (tokens, diags) = scan(r#""a\n\t\'\"\?\\b""#);
        assert!(diags.is_empty());
        assert!(matches!(tokens[0].kind, TokenKind::StrLit(_)));
    }

    #[test]
    fn bad_escape_on_terminated_string_is_flagged() {
        let (_, diags) = scan(r#""hello\q""#);
        assert_eq!(diags.entries().len(), 1);
        assert_eq!(
            diags.entries()[0].message,
            r#"string literal with bad escaped character ignored "hello\q""#
        );
    }

    #[test]
    fn unterminated_string_is_flagged() {
        let (_, diags) = scan("\"hello\nworld");
        assert_eq!(diags.entries()[0].message, "unterminated string literal ignored \"hello");
    }

    #[test]
    fn unterminated_with_bad_escape_is_flagged() {
        let (_, diags) = scan("\"hello\\q\nworld");
        assert_eq!(
            diags.entries()[0].message,
            "unterminated string literal with bad escaped character ignored \"hello\\q"
        );
    }

    #[test]
    fn comments_are_silently_consumed() {
        let (tokens, diags) = scan("// a comment\nint x;");
        assert!(diags.is_empty());
        assert_eq!(tokens[0].kind, TokenKind::Int);
        assert_eq!(tokens[0].position, Position::new(2, 1));
    }

    #[test]
    fn hash_comment_requires_two_hashes() {
        let (_, diags) = scan("# not a comment");
        assert!(diags.had_errors());
    }

    #[test]
    fn multi_char_operators_take_precedence() {
        let (tokens, _) = scan("<= >= == != && || << >> ++ --");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Le,
                TokenKind::Ge,
                TokenKind::Eq,
                TokenKind::Ne,
                TokenKind::And,
                TokenKind::Or,
                TokenKind::Shl,
                TokenKind::Shr,
                TokenKind::PlusPlus,
                TokenKind::MinusMinus,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn illegal_character_is_flagged_and_scanning_continues() {
        let (tokens, diags) = scan("x @ y");
        assert_eq!(diags.entries()[0].message, "illegal character ignored: @");
        assert_eq!(tokens[0].kind, TokenKind::Id("x".to_string()));
        assert_eq!(tokens[1].kind, TokenKind::Id("y".to_string()));
    }

    #[test]
    fn two_scans_of_same_input_are_identical() {
        let src = "int x; bool y; struct S { int a; };";
        let (t1, _) = scan(src);
        let (t2, _) = scan(src);
        assert_eq!(t1, t2);
    }
}
