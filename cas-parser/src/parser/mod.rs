pub mod ast;
pub mod error;
pub mod token;

use error::{Error, ExpectedEof, UnexpectedEof};
use super::tokenizer::{tokenize_complete, Token};
use std::ops::Range;

/// A high-level parser for equation steps. This is the type to use to parse a piece of step text
/// into an abstract syntax tree.
///
/// ```
/// use cas_parser::parser::{ast::Root, Parser};
///
/// let mut parser = Parser::new("2x + 3 = 7");
/// let root = parser.try_parse_full::<Root>().unwrap();
/// assert!(matches!(root, Root::Equation(_)));
/// ```
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
        }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl cas_error::ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Advances the cursor past any whitespace tokens.
    pub fn skip_whitespace(&mut self) {
        while self.current_token().is_some_and(Token::is_whitespace) {
            self.cursor += 1;
        }
    }

    /// Returns the next non-whitespace token without moving the cursor.
    pub fn peek_token(&self) -> Option<&Token<'source>> {
        self.tokens[self.cursor.min(self.tokens.len())..]
            .iter()
            .find(|token| !token.is_whitespace())
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        self.skip_whitespace();
        match self.tokens.get(self.cursor) {
            Some(token) => {
                self.cursor += 1;
                // cloning is cheap: only Range<_> is cloned
                Ok(token.clone())
            },
            None => Err(self.error(UnexpectedEof)),
        }
    }

    /// Speculatively parses a value from the given stream of tokens. This function can be used
    /// in the [`Parse::parse`] implementation of a type with the given [`Parser`], as it will
    /// automatically backtrack the cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse<'source>>(&mut self) -> Result<T, Error> {
        self.try_parse_with_fn(T::parse)
    }

    /// Speculatively parses a value from the given stream of tokens, using a custom parsing
    /// function to parse the value.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_with_fn<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser<'source>) -> Result<T, Error>,
    {
        let start = self.cursor;
        match f(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse<'source>>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        self.skip_whitespace();
        if self.cursor == self.tokens.len() {
            Ok(value)
        } else {
            Err(self.error(ExpectedEof))
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse<'source>: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    ///
    /// This function should be used by consumers of the library.
    fn parse(input: &mut Parser<'source>) -> Result<Self, Error>;
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Any precedence.
    Any,

    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`, or implicit) and division (`/`), which separate
    /// factors.
    Factor,

    /// Precedence of unary subtraction (`-`).
    Neg,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use ast::{
        binary::Binary,
        equation::{Equation, Root},
        expr::Expr,
        literal::{LitNum, LitSym, Literal},
        paren::Paren,
        unary::Unary,
    };
    use token::op::{BinOp, BinOpKind, UnaryOp, UnaryOpKind};

    fn num(value: &str, span: Range<usize>) -> Expr {
        Expr::Literal(Literal::Number(LitNum { value: value.to_string(), span }))
    }

    fn sym(name: &str, span: Range<usize>) -> Expr {
        Expr::Literal(Literal::Symbol(LitSym { name: name.to_string(), span }))
    }

    fn bin(lhs: Expr, kind: BinOpKind, implicit: bool, op_span: Range<usize>, rhs: Expr) -> Expr {
        let span = lhs.span().start..rhs.span().end;
        Expr::Binary(Binary {
            lhs: Box::new(lhs),
            op: BinOp { kind, implicit, span: op_span },
            rhs: Box::new(rhs),
            span,
        })
    }

    #[test]
    fn literal_int() {
        let mut parser = Parser::new("16");
        let expr = parser.try_parse_full::<Expr>().unwrap();
        assert_eq!(expr, num("16", 0..2));
    }

    #[test]
    fn literal_float() {
        let mut parser = Parser::new("3.14");
        let expr = parser.try_parse_full::<Expr>().unwrap();
        assert_eq!(expr, num("3.14", 0..4));
    }

    #[test]
    fn left_associative_terms() {
        let mut parser = Parser::new("x + 2 - 3");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, bin(
            bin(sym("x", 0..1), BinOpKind::Add, false, 2..3, num("2", 4..5)),
            BinOpKind::Sub,
            false,
            6..7,
            num("3", 8..9),
        ));
    }

    #[test]
    fn factors_bind_tighter_than_terms() {
        let mut parser = Parser::new("1 + 2*x");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, bin(
            num("1", 0..1),
            BinOpKind::Add,
            false,
            2..3,
            bin(num("2", 4..5), BinOpKind::Mul, false, 5..6, sym("x", 6..7)),
        ));
    }

    #[test]
    fn implicit_multiplication() {
        let mut parser = Parser::new("2x(y)");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, bin(
            bin(num("2", 0..1), BinOpKind::Mul, true, 1..1, sym("x", 1..2)),
            BinOpKind::Mul,
            true,
            2..2,
            Expr::Paren(Paren {
                expr: Box::new(sym("y", 3..4)),
                span: 2..5,
            }),
        ));
    }

    #[test]
    fn division_after_product() {
        let mut parser = Parser::new("2*x/2");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, bin(
            bin(num("2", 0..1), BinOpKind::Mul, false, 1..2, sym("x", 2..3)),
            BinOpKind::Div,
            false,
            3..4,
            num("2", 4..5),
        ));
    }

    #[test]
    fn unary_negation() {
        let mut parser = Parser::new("-3x");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, bin(
            Expr::Unary(Unary {
                operand: Box::new(num("3", 1..2)),
                op: UnaryOp { kind: UnaryOpKind::Neg, span: 0..1 },
                span: 0..2,
            }),
            BinOpKind::Mul,
            true,
            2..2,
            sym("x", 2..3),
        ));
    }

    #[test]
    fn equation_root() {
        let mut parser = Parser::new("x = 5");
        let root = parser.try_parse_full::<Root>().unwrap();

        assert_eq!(root, Root::Equation(Equation {
            lhs: sym("x", 0..1),
            rhs: num("5", 4..5),
            span: 0..5,
        }));
    }

    #[test]
    fn expression_root() {
        let mut parser = Parser::new("x + 1");
        let root = parser.try_parse_full::<Root>().unwrap();
        assert!(matches!(root, Root::Expr(_)));
    }

    #[test]
    fn error_unexpected_eof() {
        let mut parser = Parser::new("x + ");
        let err = parser.try_parse_full::<Root>().unwrap_err();
        assert_eq!(err.spans, vec![4..4]);
    }

    #[test]
    fn error_chained_equation() {
        let mut parser = Parser::new("x = 1 = 2");
        let err = parser.try_parse_full::<Root>().unwrap_err();
        assert_eq!(err.spans, vec![2..3, 6..7]);
    }

    #[test]
    fn error_unclosed_paren() {
        let mut parser = Parser::new("(x + 1 = 2");
        let err = parser.try_parse_full::<Root>().unwrap_err();
        assert_eq!(err.spans, vec![0..1]);
    }

    #[test]
    fn error_stray_close_paren() {
        let mut parser = Parser::new("x + 1) = 2");
        let err = parser.try_parse_full::<Root>().unwrap_err();
        assert_eq!(err.spans, vec![5..6]);
    }

    #[test]
    fn error_empty_paren() {
        let mut parser = Parser::new("2() = 1");
        let err = parser.try_parse_full::<Root>().unwrap_err();
        assert_eq!(err.spans, vec![1..3]);
    }

    #[test]
    fn error_exponent() {
        let mut parser = Parser::new("x^2 = 4");
        let err = parser.try_parse_full::<Root>().unwrap_err();
        assert_eq!(err.spans, vec![1..2]);
    }

    #[test]
    fn error_unknown_symbol() {
        let mut parser = Parser::new("x $ 1 = 2");
        let err = parser.try_parse_full::<Root>().unwrap_err();
        assert_eq!(err.spans, vec![2..3]);
    }
}
