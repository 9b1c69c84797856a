//! Abstract syntax tree of a step.
//!
//! The tree mirrors the text the learner wrote: parentheses are kept as [`Paren`] nodes, and
//! every binary operator (including implicit multiplication) is its own [`Binary`] node with
//! spans into the source. Flattening into sums and products happens later, when the tree is
//! converted for algebraic work.
//!
//! [`Paren`]: paren::Paren
//! [`Binary`]: binary::Binary

pub mod binary;
pub mod equation;
pub mod expr;
pub mod literal;
pub mod paren;
pub mod unary;

pub use binary::Binary;
pub use equation::{Equation, Root};
pub use expr::{Expr, Primary};
pub use literal::{LitNum, LitSym, Literal};
pub use paren::Paren;
pub use unary::Unary;
