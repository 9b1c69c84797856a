use crate::parser::{
    ast::{expr::Expr, unary::Unary},
    error::Error,
    token::op::BinOp,
    Parser,
    Precedence,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary expression, such as `1 + 2`. Binary expressions can include nested expressions.
///
/// Implicit multiplication, such as `2x`, is also represented as a binary expression, with
/// [`BinOp::implicit`] set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,

    /// The region of the source code that this binary expression was parsed from.
    pub span: Range<usize>,
}

impl Binary {
    /// Returns the span of the binary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses the operators and operands following `lhs`, as long as each operator has at least
    /// the given precedence.
    ///
    /// Before the node `lhs op rhs` is built, the operator after `rhs` is checked. If it binds
    /// tighter than `op` (as `*` does in `1 + 2 * 3`), the expression starting with `rhs` is
    /// parsed first, so that `2 * 3` becomes the right-hand side of `1 +`. Otherwise (as in
    /// `3 * 2 + 1`), `3 * 2` is built, and the next iteration picks up `+ 1`. Operators of equal
    /// precedence are therefore left-associative.
    ///
    /// Implicit multiplication is found by [`BinOp::peek`] when an operand is followed directly
    /// by a variable or an opening parenthesis. No token is consumed for it, and its span is the
    /// gap between the two operands.
    pub fn parse_expr(
        input: &mut Parser,
        mut lhs: Expr,
        precedence: Precedence,
    ) -> Result<Expr, Error> {
        loop {
            let Some(mut op) = BinOp::peek(input)? else {
                break;
            };
            if op.precedence() < precedence {
                break;
            }

            if !op.implicit {
                input.next_token()?;
            }

            let mut rhs = Unary::parse_or_lower(input)?;
            while let Some(next_op) = BinOp::peek(input)? {
                if next_op.precedence() > op.precedence() {
                    rhs = Self::parse_expr(input, rhs, next_op.precedence())?;
                } else {
                    break;
                }
            }

            if op.implicit {
                op.span = lhs.span().end..rhs.span().start;
            }

            let span = lhs.span().start..rhs.span().end;
            lhs = Expr::Binary(Binary {
                lhs: Box::new(lhs),
                op,
                rhs: Box::new(rhs),
                span,
            });
        }

        Ok(lhs)
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.lhs.fmt(f)?;
        self.op.fmt(f)?;
        self.rhs.fmt(f)
    }
}
