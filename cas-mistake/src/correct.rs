//! Applying the missing half of a one-sided operation.

use cas_compute::tree::Node;
use crate::{
    decompose::{factors, terms},
    mistake::{Mistake, OneSided, Operation, Side},
};

/// Adds a term to the node.
fn add(existing: &Node, term: Node) -> Node {
    let mut terms = terms(existing).to_vec();
    terms.push(term);
    Node::Add(terms)
}

/// Subtracts a term from the node.
fn subtract(existing: &Node, term: Node) -> Node {
    add(existing, Node::sub(term))
}

/// Multiplies the node by a factor.
fn multiply(existing: &Node, factor: Node) -> Node {
    let mut factors = factors(existing).to_vec();
    factors.push(factor);
    Node::implicit_mul(factors)
}

/// Divides the node by a factor. If the node is already a quotient, its denominator is
/// multiplied by the factor instead.
fn divide(existing: &Node, factor: Node) -> Node {
    match existing {
        Node::Div(numerator, denominator) => Node::div(
            (**numerator).clone(),
            multiply(denominator, factor),
        ),
        _ => Node::div(existing.clone(), factor),
    }
}

/// Returns the function that applies the given operation to a side.
fn fixer(operation: Operation) -> fn(&Node, Node) -> Node {
    match operation {
        Operation::Addition => add,
        Operation::Subtraction => subtract,
        Operation::Multiplication => multiply,
        Operation::Division => divide,
    }
}

/// Applies the mistake's operation to the side of the equation opposite the mistake, returning
/// the new equation. The side the mistake was made on is left as-is.
///
/// The sides are given separately, as `(lhs, rhs)`.
pub fn correct_sides(lhs: &Node, rhs: &Node, mistake: &Mistake) -> Node {
    match mistake {
        Mistake::OneSidedOperation(OneSided { side, operation, operand }) => {
            let fix = fixer(*operation);
            match side {
                Side::LHS => Node::equation(lhs.clone(), fix(rhs, operand.clone())),
                Side::RHS => Node::equation(fix(lhs, operand.clone()), rhs.clone()),
            }
        },
    }
}
