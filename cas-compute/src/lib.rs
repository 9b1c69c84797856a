//! Expression trees for equation steps, and the checks the diagnosis engine runs on them.
//!
//! - [`tree`] defines [`Node`](tree::Node), the flattened tree built from a parsed step, along
//!   with its strict equality and its plain-text and LaTeX rendering.
//! - [`equiv`] decides symbolic-equivalence questions (is an expression always zero, always one,
//!   do two equations have the same solutions) by exact evaluation at random points.
//! - [`primitive`] builds exact numbers from the literals in a step.

pub mod equiv;
pub mod primitive;
pub mod tree;
