use crate::{
    parser::{
        ast::expr::Expr,
        error::{ChainedEquation, Error, UnclosedParenthesis},
        token::Eq,
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An equation with exactly one `=` sign, such as `2x + 3 = 7`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Equation {
    /// The left-hand side of the equation.
    pub lhs: Expr,

    /// The right-hand side of the equation.
    pub rhs: Expr,

    /// The region of the source code that this equation was parsed from.
    pub span: Range<usize>,
}

impl Equation {
    /// Returns the span of the equation.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.lhs, self.rhs)
    }
}

/// The root of a parsed step: either an equation, or a bare expression.
///
/// Only equations can be diagnosed, but bare expressions are still parsed so that the caller can
/// tell the learner what is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Root {
    /// A bare expression, such as `x + 1`.
    Expr(Expr),

    /// An equation, such as `x + 1 = 2`.
    Equation(Equation),
}

impl Root {
    /// Returns the span of the root.
    pub fn span(&self) -> Range<usize> {
        match self {
            Root::Expr(expr) => expr.span(),
            Root::Equation(equation) => equation.span(),
        }
    }
}

impl<'source> Parse<'source> for Root {
    fn parse(input: &mut Parser<'source>) -> Result<Self, Error> {
        let lhs = input.try_parse::<Expr>()?;

        let Some(token) = input.peek_token() else {
            return Ok(Root::Expr(lhs));
        };
        match token.kind {
            TokenKind::Eq => (),
            TokenKind::CloseParen => return Err(Error::new(
                vec![token.span.clone()],
                UnclosedParenthesis { opening: false },
            )),
            _ => return Ok(Root::Expr(lhs)),
        }

        let eq = input.try_parse::<Eq>()?;
        let rhs = input.try_parse::<Expr>()?;

        if let Some(token) = input.peek_token() {
            match token.kind {
                TokenKind::Eq => return Err(Error::new(
                    vec![eq.span, token.span.clone()],
                    ChainedEquation,
                )),
                TokenKind::CloseParen => return Err(Error::new(
                    vec![token.span.clone()],
                    UnclosedParenthesis { opening: false },
                )),
                _ => (),
            }
        }

        let span = lhs.span().start..rhs.span().end;
        Ok(Root::Equation(Equation { lhs, rhs, span }))
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Root::Expr(expr) => expr.fmt(f),
            Root::Equation(equation) => equation.fmt(f),
        }
    }
}
