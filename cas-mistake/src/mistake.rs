//! The mistakes the engine can diagnose.

use cas_compute::tree::Node;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A side of an equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    /// The left-hand side.
    LHS,

    /// The right-hand side.
    RHS,
}

impl Side {
    /// Returns the other side of the equation.
    pub fn opposite(self) -> Self {
        match self {
            Self::LHS => Self::RHS,
            Self::RHS => Self::LHS,
        }
    }

    /// Selects this side from a pair of `(lhs, rhs)` values.
    pub fn of<T>(self, lhs: T, rhs: T) -> T {
        match self {
            Self::LHS => lhs,
            Self::RHS => rhs,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::LHS => write!(f, "left"),
            Self::RHS => write!(f, "right"),
        }
    }
}

/// An arithmetic operation applied to a side of an equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Operation {
    /// Returns the placeholder that stands for the operand in the messages about this operation.
    pub fn placeholder(self) -> Placeholder {
        match self {
            Self::Addition | Self::Subtraction => Placeholder::Term,
            Self::Multiplication | Self::Division => Placeholder::Factor,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Addition => write!(f, "addition"),
            Self::Subtraction => write!(f, "subtraction"),
            Self::Multiplication => write!(f, "multiplication"),
            Self::Division => write!(f, "division"),
        }
    }
}

/// The placeholder token in a message template, replaced by the rendered operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// `<term>`, used by addition and subtraction.
    Term,

    /// `<factor>`, used by multiplication and division.
    Factor,
}

impl Placeholder {
    /// Returns the token as it appears in a message template.
    pub fn token(self) -> &'static str {
        match self {
            Self::Term => "<term>",
            Self::Factor => "<factor>",
        }
    }
}

/// An operation that was applied to only one side of an equation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OneSided {
    /// The side the operation was applied to.
    pub side: Side,

    /// The operation that was applied.
    pub operation: Operation,

    /// The term added or subtracted, or the factor multiplied or divided by.
    pub operand: Node,
}

/// The kind of a [`Mistake`], without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MistakeKind {
    /// See [`Mistake::OneSidedOperation`].
    OneSidedOperation,
}

impl fmt::Display for MistakeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::OneSidedOperation => write!(f, "operation applied to one side only"),
        }
    }
}

/// A mistake found between two steps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mistake {
    /// An operation was applied to one side of the equation, but not the other.
    OneSidedOperation(OneSided),
}

impl Mistake {
    /// Creates a [`Mistake::OneSidedOperation`].
    pub fn one_sided(side: Side, operation: Operation, operand: Node) -> Self {
        Self::OneSidedOperation(OneSided { side, operation, operand })
    }

    /// Returns the kind of mistake.
    pub fn kind(&self) -> MistakeKind {
        match self {
            Self::OneSidedOperation(_) => MistakeKind::OneSidedOperation,
        }
    }

    /// Returns the side of the equation the mistake was made on.
    pub fn side(&self) -> Side {
        match self {
            Self::OneSidedOperation(one_sided) => one_sided.side,
        }
    }

    /// Returns the operation involved in the mistake.
    pub fn operation(&self) -> Operation {
        match self {
            Self::OneSidedOperation(one_sided) => one_sided.operation,
        }
    }

    /// Returns the operand involved in the mistake.
    pub fn operand(&self) -> &Node {
        match self {
            Self::OneSidedOperation(one_sided) => &one_sided.operand,
        }
    }
}

impl fmt::Display for Mistake {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::OneSidedOperation(OneSided { side, operation, operand }) => write!(
                f,
                "{} of `{}` applied to the {} side only",
                operation,
                operand,
                side,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let mistake = Mistake::one_sided(Side::RHS, Operation::Division, Node::num("2"));
        assert_eq!(mistake.kind(), MistakeKind::OneSidedOperation);
        assert_eq!(mistake.side(), Side::RHS);
        assert_eq!(mistake.operation(), Operation::Division);
        assert_eq!(mistake.operand(), &Node::num("2"));
        assert_eq!(mistake.to_string(), "division of `2` applied to the right side only");
    }

    #[test]
    fn opposite_side() {
        assert_eq!(Side::LHS.opposite(), Side::RHS);
        assert_eq!(Side::RHS.opposite(), Side::LHS);
        assert_eq!(Side::RHS.of("l", "r"), "r");
    }

    #[test]
    fn placeholders() {
        assert_eq!(Operation::Addition.placeholder().token(), "<term>");
        assert_eq!(Operation::Subtraction.placeholder().token(), "<term>");
        assert_eq!(Operation::Multiplication.placeholder().token(), "<factor>");
        assert_eq!(Operation::Division.placeholder().token(), "<factor>");
    }
}
