//! Structs to help parse binary and unary operators.

use crate::{
    parser::{
        error::{Error, UnexpectedToken, UnsupportedOperator},
        Parse,
        Parser,
        Precedence,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The unary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOpKind {
    Neg,
}

impl UnaryOpKind {
    /// Returns the precedence of the unary operation.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Neg => Precedence::Neg,
        }
    }
}

/// A unary operator that takes one operand.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnaryOp {
    /// The kind of unary operator.
    pub kind: UnaryOpKind,

    /// The region of the source code that this operator was parsed from.
    pub span: Range<usize>,
}

impl UnaryOp {
    /// Returns the precedence of the unary operator.
    pub fn precedence(&self) -> Precedence {
        self.kind.precedence()
    }
}

impl<'source> Parse<'source> for UnaryOp {
    fn parse(input: &mut Parser<'source>) -> Result<Self, Error> {
        let token = input.next_token()?;
        match token.kind {
            TokenKind::Sub => Ok(Self {
                kind: UnaryOpKind::Neg,
                span: token.span,
            }),
            _ => Err(Error::new(vec![token.span], UnexpectedToken {
                expected: &[TokenKind::Sub],
                found: token.kind,
            })),
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            UnaryOpKind::Neg => write!(f, "-"),
        }
    }
}

/// The binary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOpKind {
    Mul,
    Div,
    Add,
    Sub,
}

impl BinOpKind {
    /// Returns the precedence of the binary operation. All binary operations are
    /// left-associative.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Mul | Self::Div => Precedence::Factor,
            Self::Add | Self::Sub => Precedence::Term,
        }
    }
}

/// A binary operator that takes two operands.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinOp {
    /// The kind of binary operator.
    pub kind: BinOpKind,

    /// Whether this binary operator was implicitly inserted by the parser, as in `2x`.
    pub implicit: bool,

    /// The region of the source code that this operator was parsed from. For implicit
    /// multiplication, this is the (usually empty) gap between the two operands.
    pub span: Range<usize>,
}

impl BinOp {
    /// Returns the precedence of the binary operation.
    pub fn precedence(&self) -> Precedence {
        self.kind.precedence()
    }

    /// Looks at the upcoming tokens to find the binary operator that follows an operand, without
    /// moving the cursor.
    ///
    /// Returns [`None`] if the operand is not followed by an operator. If the operand is followed
    /// by a variable or an opening parenthesis, an implicit multiplication operator is returned,
    /// with an empty span at the start of the next token.
    ///
    /// Operators that are not allowed in a step, such as `^`, produce an error.
    pub fn peek(input: &Parser) -> Result<Option<Self>, Error> {
        let Some(token) = input.peek_token() else {
            return Ok(None);
        };

        let explicit = |kind: BinOpKind| -> Result<Option<Self>, Error> {
            Ok(Some(Self {
                kind,
                implicit: false,
                span: token.span.clone(),
            }))
        };

        match token.kind {
            TokenKind::Add => explicit(BinOpKind::Add),
            TokenKind::Sub => explicit(BinOpKind::Sub),
            TokenKind::Mul => explicit(BinOpKind::Mul),
            TokenKind::Div => explicit(BinOpKind::Div),
            TokenKind::Exp => Err(Error::new(vec![token.span.clone()], UnsupportedOperator {
                op: token.lexeme.to_string(),
            })),
            TokenKind::Name | TokenKind::OpenParen => Ok(Some(Self {
                kind: BinOpKind::Mul,
                implicit: true,
                span: token.span.start..token.span.start,
            })),
            _ => Ok(None),
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.implicit {
            return Ok(());
        }

        match self.kind {
            BinOpKind::Mul => write!(f, " * "),
            BinOpKind::Div => write!(f, " / "),
            BinOpKind::Add => write!(f, " + "),
            BinOpKind::Sub => write!(f, " - "),
        }
    }
}
