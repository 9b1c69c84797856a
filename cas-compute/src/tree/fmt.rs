//! Plain-text and LaTeX rendering of [`Node`]s.
//!
//! The plain-text form re-parses to the same tree. Parentheses are only inserted where the tree
//! nests a node in a position that the flat notation would otherwise absorb into the enclosing
//! sum, product, or quotient.

use std::fmt::{Display, Formatter, Result};
use super::Node;

/// A trait for types that can be formatted as LaTeX.
pub trait Latex {
    /// Format the value as LaTeX.
    fn fmt_latex(&self, f: &mut Formatter) -> Result;

    /// Wraps the value in a [`LatexFormatter`], which implements [`Display`].
    fn as_display(&self) -> LatexFormatter<'_, Self> {
        LatexFormatter(self)
    }
}

/// A wrapper type that implements [`Display`] for any type that implements [`Latex`].
pub struct LatexFormatter<'a, T: ?Sized>(&'a T);

impl<T: ?Sized> Display for LatexFormatter<'_, T>
where
    T: Latex,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        self.0.fmt_latex(f)
    }
}

/// The position a node is rendered in, relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    /// The first term of a sum.
    FirstTerm,

    /// A term of a sum after the first, or the argument of a subtraction.
    LaterTerm,

    /// The argument of a negation.
    Negated,

    /// The first factor of a product.
    FirstFactor,

    /// A factor of a product after the first.
    LaterFactor,

    /// The numerator of a quotient.
    Numerator,

    /// The denominator of a quotient.
    Denominator,
}

impl Node {
    /// Returns true if the node must be wrapped in parentheses when rendered in the given
    /// position.
    fn needs_parens(&self, position: Position) -> bool {
        use Position::*;

        match self {
            Node::Number(_) | Node::Variable(_) => false,
            Node::Equation(..) => true,
            Node::Add(_) => true,
            Node::Neg { .. } => matches!(position, Negated | LaterFactor | Denominator),
            Node::Mul { .. } => matches!(position, Negated | FirstFactor | LaterFactor | Denominator),
            Node::Div(..) => matches!(position, Negated | LaterFactor | Denominator),
        }
    }

    /// Renders the node in the given position, adding parentheses if needed.
    fn fmt_in(&self, f: &mut Formatter, position: Position) -> Result {
        if self.needs_parens(position) {
            write!(f, "({})", self)
        } else {
            write!(f, "{}", self)
        }
    }

    /// Renders the node as LaTeX in the given position, adding parentheses if needed.
    fn fmt_latex_in(&self, f: &mut Formatter, position: Position) -> Result {
        if self.needs_parens(position) {
            write!(f, "\\left(")?;
            self.fmt_latex(f)?;
            write!(f, "\\right)")
        } else {
            self.fmt_latex(f)
        }
    }

    /// Returns true if the node, rendered as a later factor of a product, begins with a letter
    /// or an opening parenthesis, so that it can follow the previous factor by juxtaposition.
    fn juxtaposes(&self) -> bool {
        matches!(self, Node::Variable(_)) || self.needs_parens(Position::LaterFactor)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Self::Number(value) => write!(f, "{}", value),
            Self::Variable(name) => write!(f, "{}", name),
            Self::Neg { arg, .. } => {
                write!(f, "-")?;
                arg.fmt_in(f, Position::Negated)
            },
            Self::Add(terms) => {
                let mut iter = terms.iter();
                if let Some(term) = iter.next() {
                    term.fmt_in(f, Position::FirstTerm)?;
                    for term in iter {
                        match term {
                            Self::Neg { arg, subtraction: true } => {
                                write!(f, " - ")?;
                                arg.fmt_in(f, Position::LaterTerm)?;
                            },
                            _ => {
                                write!(f, " + ")?;
                                term.fmt_in(f, Position::LaterTerm)?;
                            },
                        }
                    }
                }
                Ok(())
            },
            Self::Mul { args, implicit } => {
                let mut iter = args.iter();
                if let Some(factor) = iter.next() {
                    factor.fmt_in(f, Position::FirstFactor)?;
                    for factor in iter {
                        if !*implicit || !factor.juxtaposes() {
                            write!(f, "*")?;
                        }
                        factor.fmt_in(f, Position::LaterFactor)?;
                    }
                }
                Ok(())
            },
            Self::Div(numerator, denominator) => {
                numerator.fmt_in(f, Position::Numerator)?;
                write!(f, "/")?;
                denominator.fmt_in(f, Position::Denominator)
            },
            Self::Equation(lhs, rhs) => write!(f, "{} = {}", lhs, rhs),
        }
    }
}

impl Latex for Node {
    fn fmt_latex(&self, f: &mut Formatter) -> Result {
        match self {
            Self::Number(value) => write!(f, "{}", value),
            Self::Variable(name) => write!(f, "{}", name),
            Self::Neg { arg, .. } => {
                write!(f, "-")?;
                arg.fmt_latex_in(f, Position::Negated)
            },
            Self::Add(terms) => {
                let mut iter = terms.iter();
                if let Some(term) = iter.next() {
                    term.fmt_latex_in(f, Position::FirstTerm)?;
                    for term in iter {
                        match term {
                            Self::Neg { arg, subtraction: true } => {
                                write!(f, " - ")?;
                                arg.fmt_latex_in(f, Position::LaterTerm)?;
                            },
                            _ => {
                                write!(f, " + ")?;
                                term.fmt_latex_in(f, Position::LaterTerm)?;
                            },
                        }
                    }
                }
                Ok(())
            },
            Self::Mul { args, implicit } => {
                let mut iter = args.iter();
                if let Some(factor) = iter.next() {
                    factor.fmt_latex_in(f, Position::FirstFactor)?;
                    for factor in iter {
                        if !*implicit || !factor.juxtaposes() {
                            write!(f, " \\cdot ")?;
                        }
                        factor.fmt_latex_in(f, Position::LaterFactor)?;
                    }
                }
                Ok(())
            },
            // the fraction bar groups both operands
            Self::Div(numerator, denominator) => {
                write!(f, "\\frac{{")?;
                numerator.fmt_latex(f)?;
                write!(f, "}}{{")?;
                denominator.fmt_latex(f)?;
                write!(f, "}}")
            },
            Self::Equation(lhs, rhs) => {
                lhs.fmt_latex(f)?;
                write!(f, " = ")?;
                rhs.fmt_latex(f)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use cas_parser::parser::{ast::Root, Parser};
    use pretty_assertions::assert_eq;
    use super::*;

    /// Parses the given step into a [`Node`].
    fn parse(input: &str) -> Node {
        let mut parser = Parser::new(input);
        parser.try_parse_full::<Root>().unwrap().into()
    }

    #[test]
    fn display_reparses() {
        let cases = [
            "x + 2 + 3 = 5",
            "x - 3 = 5",
            "2*x/2 = 10/2",
            "3xy",
            "2x(x + 1)",
            "x + (2 + 3)",
            "x - (y - 1)",
            "-3x",
            "-(2*x)",
            "x/(2*y)",
            "x/(y/z)",
            "(x + 1)/2",
            "2*(x/3)",
            "x*(-2)",
            "x + -3",
        ];

        for case in cases {
            let node = parse(case);
            let printed = node.to_string();
            assert_eq!(parse(&printed), node, "{} printed as {}", case, printed);
        }
    }

    #[test]
    fn display_exact() {
        assert_eq!(parse("x+2+3=5").to_string(), "x + 2 + 3 = 5");
        assert_eq!(parse("2 * x / 2 = 10").to_string(), "2*x/2 = 10");
        assert_eq!(parse("3xy").to_string(), "3xy");
        assert_eq!(parse("2x(x+1)").to_string(), "2x(x + 1)");
        assert_eq!(parse("x - (y - 1)").to_string(), "x - (y - 1)");
        assert_eq!(parse("x/(2*y)").to_string(), "x/(2*y)");
    }

    #[test]
    fn implicit_product_of_numbers() {
        let node = Node::implicit_mul(vec![Node::num("2"), Node::num("3"), Node::var("x")]);
        assert_eq!(node.to_string(), "2*3x");
    }

    #[test]
    fn latex() {
        assert_eq!(parse("2x/3 = 4").as_display().to_string(), "\\frac{2x}{3} = 4");
        assert_eq!(parse("2*(x - 1)").as_display().to_string(), "2 \\cdot \\left(x - 1\\right)");
        assert_eq!(parse("-x + 1").as_display().to_string(), "-x + 1");
    }
}
