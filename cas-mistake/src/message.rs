//! Explanations of mistakes, for the learner.

use crate::mistake::{Mistake, OneSided, Operation, Side};

/// The reminder shown before the explanation of a one-sided operation.
pub const BALANCE: &str = "When working with equations you need to do the same operation to both sides to keep the equation balanced.";

/// Returns the explanation of a one-sided operation, with the operand left as a placeholder
/// (see [`Operation::placeholder`]).
fn one_sided(side: Side, operation: Operation) -> &'static str {
    match (operation, side) {
        (Operation::Addition, Side::LHS) => "You added <term> to the left side.  In order to keep the equation balanced, you also need to add <term> to the right side.",
        (Operation::Addition, Side::RHS) => "You added <term> to the right side.  In order to keep the equation balanced, you also need to add <term> to the left side.",
        (Operation::Subtraction, Side::LHS) => "You subtracted <term> from the left side.  In order to keep the equation balanced, you also need to subtract <term> from the right side.",
        (Operation::Subtraction, Side::RHS) => "You subtracted <term> from the right side.  In order to keep the equation balanced, you also need to subtract <term> from the left side.",
        (Operation::Multiplication, Side::LHS) => "You multiplied the left side by <factor>.  In order to keep the equation balanced, you also need to multiply the right side by <factor>.",
        (Operation::Multiplication, Side::RHS) => "You multiplied the right side by <factor>.  In order to keep the equation balanced, you also need to multiply the left side by <factor>.",
        (Operation::Division, Side::LHS) => "You divided the left side by <factor>.  In order to keep the equation balanced, you also need to divide the right side by <factor>.",
        (Operation::Division, Side::RHS) => "You divided the right side by <factor>.  In order to keep the equation balanced, you also need to divide the left side by <factor>.",
    }
}

/// Returns the messages that explain the mistake, in the order they should be shown.
///
/// Each message may contain the placeholder of the mistake's operation, which the caller
/// replaces with the rendered operand (see [`fill_placeholder`]).
pub fn explain(mistake: &Mistake) -> Vec<&'static str> {
    match mistake {
        Mistake::OneSidedOperation(OneSided { side, operation, .. }) => {
            vec![BALANCE, one_sided(*side, *operation)]
        },
    }
}

/// Replaces every occurrence of the operation's placeholder in the message with the rendered
/// operand.
pub fn fill_placeholder(message: &str, operation: Operation, operand: &str) -> String {
    message.replace(operation.placeholder().token(), operand)
}
