//! The expression tree that the diagnosis engine works on.
//!
//! The [`Expr`](cas_parser::parser::ast::expr::Expr) type from `cas_parser` is a binary tree that
//! records every operator the learner wrote, with spans into the source. It's convenient for
//! parsing and reporting errors, but not so much for asking questions like "which terms are on
//! the left side?".
//!
//! This module defines [`Node`], which **flattens** chains of the same operator into a single
//! node with a list of children. `x + 2 + 3` becomes a single [`Node::Add`] with three terms,
//! and `x - 3` becomes `Add([x, Neg(3)])`, where the [`Node::Neg`] remembers that it was written
//! as a subtraction.
//!
//! Unlike a simplifier's representation, a [`Node`] keeps the shape the learner wrote:
//! parentheses are never flattened into the enclosing sum or product, and terms and factors are
//! never reordered. `x + (2 + 3)` has two terms, the second being a nested sum.
//!
//! ```
//! use cas_compute::tree::Node;
//! use cas_parser::parser::{ast::Root, Parser};
//!
//! let mut parser = Parser::new("x + 2 - 3 = 5");
//! let root = parser.try_parse_full::<Root>().unwrap();
//!
//! let node: Node = root.into();
//! assert_eq!(node, Node::equation(
//!     Node::Add(vec![Node::var("x"), Node::num("2"), Node::sub(Node::num("3"))]),
//!     Node::num("5"),
//! ));
//! ```
//!
//! # Strict equality
//!
//! The [`PartialEq`], [`Eq`], and [`Hash`] implementations for [`Node`] implement **strict
//! equality**: two nodes are equal if they are the same variant, with equal values and
//! pairwise-equal children **in the same order**. Strict equality is not mathematical
//! equivalence; `x + 2` and `2 + x` are not strictly equal.
//!
//! The only information ignored by strict equality is [`Node::Mul`]'s `implicit` flag, which
//! records how a product was written and only matters when the product is printed again.

mod fmt;
mod iter;

use cas_parser::parser::{
    ast::{equation::Root, expr::Expr as AstExpr, literal::Literal},
    token::op::{BinOpKind, UnaryOpKind},
};
use crate::primitive::canonical_decimal;
use std::{collections::BTreeSet, hash::{Hash, Hasher}};

pub use fmt::{Latex, LatexFormatter};
pub use iter::NodeIter;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node of an expression tree.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Node {
    /// A number, stored as its canonical decimal text, such as `2` or `0.5`.
    Number(String),

    /// A variable, such as `x`.
    Variable(String),

    /// The negation of a node.
    Neg {
        /// The negated node.
        arg: Box<Node>,

        /// Whether the negation was written as a subtraction (`x - 3`), rather than as a unary
        /// minus (`x + -3`).
        subtraction: bool,
    },

    /// Terms added together.
    Add(Vec<Node>),

    /// Factors multiplied together.
    Mul {
        /// The factors of the product.
        args: Vec<Node>,

        /// Whether every multiplication in the product was written without an operator, as in
        /// `2xy`.
        implicit: bool,
    },

    /// A numerator divided by a denominator.
    Div(Box<Node>, Box<Node>),

    /// An equation, with its left and right sides.
    Equation(Box<Node>, Box<Node>),
}

impl Node {
    /// Creates a [`Node::Number`] from decimal text, in canonical form.
    pub fn num(value: &str) -> Self {
        Self::Number(canonical_decimal(value))
    }

    /// Creates a [`Node::Variable`].
    pub fn var(name: &str) -> Self {
        Self::Variable(name.to_string())
    }

    /// Creates a unary negation of the given node.
    pub fn neg(arg: Node) -> Self {
        Self::Neg { arg: Box::new(arg), subtraction: false }
    }

    /// Creates a negation of the given node that was written as a subtraction. It should only
    /// appear as a term of a [`Node::Add`].
    pub fn sub(arg: Node) -> Self {
        Self::Neg { arg: Box::new(arg), subtraction: true }
    }

    /// Creates a product written with explicit operators.
    pub fn mul(args: Vec<Node>) -> Self {
        Self::Mul { args, implicit: false }
    }

    /// Creates a product written by juxtaposition.
    pub fn implicit_mul(args: Vec<Node>) -> Self {
        Self::Mul { args, implicit: true }
    }

    /// Creates a quotient.
    pub fn div(numerator: Node, denominator: Node) -> Self {
        Self::Div(Box::new(numerator), Box::new(denominator))
    }

    /// Creates an equation.
    pub fn equation(lhs: Node, rhs: Node) -> Self {
        Self::Equation(Box::new(lhs), Box::new(rhs))
    }

    /// If the node is a [`Node::Equation`], returns references to its two sides.
    pub fn as_equation(&self) -> Option<(&Node, &Node)> {
        match self {
            Self::Equation(lhs, rhs) => Some((lhs, rhs)),
            _ => None,
        }
    }

    /// Returns true if the node is a [`Node::Equation`].
    pub fn is_equation(&self) -> bool {
        matches!(self, Self::Equation(..))
    }

    /// If the node is a [`Node::Neg`] that was written as a subtraction, returns the subtracted
    /// node.
    pub fn subtracted(&self) -> Option<&Node> {
        match self {
            Self::Neg { arg, subtraction: true } => Some(&**arg),
            _ => None,
        }
    }

    /// Returns an iterator that traverses the tree in left-to-right post-order (i.e.
    /// depth-first).
    pub fn post_order_iter(&self) -> NodeIter {
        NodeIter::new(self)
    }

    /// Returns the names of all variables in the tree, in sorted order.
    pub fn variables(&self) -> BTreeSet<&str> {
        self.post_order_iter()
            .filter_map(|node| match node {
                Self::Variable(name) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Checks if two nodes are **strictly** equal. See the [module-level documentation](self) for
/// more information.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(lhs), Self::Number(rhs)) => lhs == rhs,
            (Self::Variable(lhs), Self::Variable(rhs)) => lhs == rhs,
            (
                Self::Neg { arg: lhs, subtraction: lhs_sub },
                Self::Neg { arg: rhs, subtraction: rhs_sub },
            ) => lhs_sub == rhs_sub && lhs == rhs,
            (Self::Add(lhs), Self::Add(rhs)) => lhs == rhs,
            (Self::Mul { args: lhs, .. }, Self::Mul { args: rhs, .. }) => lhs == rhs,
            (Self::Div(lhs_num, lhs_den), Self::Div(rhs_num, rhs_den)) => {
                lhs_num == rhs_num && lhs_den == rhs_den
            },
            (Self::Equation(lhs_l, lhs_r), Self::Equation(rhs_l, rhs_r)) => {
                lhs_l == rhs_l && lhs_r == rhs_r
            },
            _ => false,
        }
    }
}

impl Eq for Node {}

/// [`Hash`] is implemented manually to stay consistent with strict equality, which ignores the
/// `implicit` flag of [`Node::Mul`].
impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Number(value) => value.hash(state),
            Self::Variable(name) => name.hash(state),
            Self::Neg { arg, subtraction } => {
                subtraction.hash(state);
                arg.hash(state);
            },
            Self::Add(args) | Self::Mul { args, .. } => args.hash(state),
            Self::Div(lhs, rhs) | Self::Equation(lhs, rhs) => {
                lhs.hash(state);
                rhs.hash(state);
            },
        }
    }
}

/// Flattens a left-leaning chain of binary expressions whose operators satisfy `in_chain`.
///
/// Returns the leftmost operand that is not part of the chain, followed by each operator and its
/// right-hand side, in source order.
fn unchain(expr: AstExpr, in_chain: impl Fn(BinOpKind) -> bool) -> (AstExpr, Vec<(BinOpKind, bool, AstExpr)>) {
    let mut links = Vec::new();
    let mut current = expr;
    loop {
        match current {
            AstExpr::Binary(bin) if in_chain(bin.op.kind) => {
                links.push((bin.op.kind, bin.op.implicit, *bin.rhs));
                current = *bin.lhs;
            },
            other => {
                links.reverse();
                return (other, links);
            },
        }
    }
}

impl From<AstExpr> for Node {
    fn from(expr: AstExpr) -> Self {
        match expr {
            AstExpr::Literal(literal) => match literal {
                Literal::Number(num) => Self::num(&num.value),
                Literal::Symbol(sym) => Self::Variable(sym.name),
            },
            AstExpr::Paren(paren) => Self::from(paren.into_innermost()),
            AstExpr::Unary(unary) => match unary.op.kind {
                UnaryOpKind::Neg => Self::neg(Self::from(*unary.operand)),
            },
            AstExpr::Binary(bin) => match bin.op.kind {
                BinOpKind::Add | BinOpKind::Sub => {
                    let (first, links) = unchain(
                        AstExpr::Binary(bin),
                        |kind| matches!(kind, BinOpKind::Add | BinOpKind::Sub),
                    );
                    let mut terms = Vec::with_capacity(links.len() + 1);
                    terms.push(Self::from(first));
                    for (kind, _, rhs) in links {
                        let term = Self::from(rhs);
                        if kind == BinOpKind::Sub {
                            terms.push(Self::sub(term));
                        } else {
                            terms.push(term);
                        }
                    }
                    Self::Add(terms)
                },
                BinOpKind::Mul => {
                    let (first, links) = unchain(
                        AstExpr::Binary(bin),
                        |kind| kind == BinOpKind::Mul,
                    );
                    let implicit = links.iter().all(|(_, implicit, _)| *implicit);
                    let mut factors = Vec::with_capacity(links.len() + 1);
                    factors.push(Self::from(first));
                    factors.extend(links.into_iter().map(|(_, _, rhs)| Self::from(rhs)));
                    Self::Mul { args: factors, implicit }
                },
                BinOpKind::Div => Self::div(Self::from(*bin.lhs), Self::from(*bin.rhs)),
            },
        }
    }
}

impl From<Root> for Node {
    fn from(root: Root) -> Self {
        match root {
            Root::Expr(expr) => Self::from(expr),
            Root::Equation(equation) => Self::equation(
                Self::from(equation.lhs),
                Self::from(equation.rhs),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use cas_parser::parser::Parser;
    use pretty_assertions::assert_eq;
    use std::collections::hash_map::DefaultHasher;
    use super::*;

    /// Parses the given step into a [`Node`].
    fn parse(input: &str) -> Node {
        let mut parser = Parser::new(input);
        parser.try_parse_full::<Root>().unwrap().into()
    }

    fn hash(node: &Node) -> u64 {
        let mut hasher = DefaultHasher::new();
        node.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn flatten_sum() {
        assert_eq!(parse("x + 2 + 3"), Node::Add(vec![
            Node::var("x"),
            Node::num("2"),
            Node::num("3"),
        ]));
    }

    #[test]
    fn subtraction_is_marked() {
        assert_eq!(parse("x - 3 + -y"), Node::Add(vec![
            Node::var("x"),
            Node::sub(Node::num("3")),
            Node::neg(Node::var("y")),
        ]));
    }

    #[test]
    fn subtracted_only_for_subtraction() {
        assert_eq!(Node::sub(Node::num("3")).subtracted(), Some(&Node::num("3")));
        assert_eq!(Node::neg(Node::num("3")).subtracted(), None);
        assert_eq!(Node::num("3").subtracted(), None);
    }

    #[test]
    fn parens_are_kept() {
        assert_eq!(parse("x + (2 + 3)"), Node::Add(vec![
            Node::var("x"),
            Node::Add(vec![Node::num("2"), Node::num("3")]),
        ]));
        assert_eq!(parse("((x))"), Node::var("x"));
    }

    #[test]
    fn product_then_quotient() {
        assert_eq!(parse("2*x/2"), Node::div(
            Node::mul(vec![Node::num("2"), Node::var("x")]),
            Node::num("2"),
        ));
    }

    #[test]
    fn implicit_product() {
        let node = parse("3xy");
        assert_eq!(node, Node::implicit_mul(vec![
            Node::num("3"),
            Node::var("x"),
            Node::var("y"),
        ]));
        assert!(matches!(node, Node::Mul { implicit: true, .. }));

        // mixed operators make the product explicit
        assert!(matches!(parse("3x*y"), Node::Mul { implicit: false, .. }));
    }

    #[test]
    fn negated_coefficient() {
        assert_eq!(parse("-3x"), Node::implicit_mul(vec![
            Node::neg(Node::num("3")),
            Node::var("x"),
        ]));
    }

    #[test]
    fn numbers_are_canonical() {
        assert_eq!(parse("2.50"), Node::Number("2.5".to_string()));
        assert_eq!(parse("007"), Node::Number("7".to_string()));
    }

    #[test]
    fn equation_root() {
        let node = parse("2x = 10");
        let (lhs, rhs) = node.as_equation().unwrap();
        assert_eq!(lhs, &Node::implicit_mul(vec![Node::num("2"), Node::var("x")]));
        assert_eq!(rhs, &Node::num("10"));
        assert!(!parse("2x").is_equation());
    }

    #[test]
    fn strict_equality_ignores_implicit() {
        let a = parse("2x");
        let b = parse("2*x");
        assert_eq!(a, b);
        assert_eq!(hash(&a), hash(&b));
    }

    #[test]
    fn strict_equality_is_ordered() {
        assert_ne!(parse("x + 2"), parse("2 + x"));
        assert_ne!(parse("x - 3"), parse("x + -3"));
    }

    #[test]
    fn variables_sorted() {
        let node = parse("y + 2x = x / z");
        assert_eq!(node.variables().into_iter().collect::<Vec<_>>(), vec!["x", "y", "z"]);
    }
}
