//! Finds one side of an equation divided by a new denominator.

use crate::{
    collab::{Equivalence, Structure},
    decompose::divisor_of,
    mistake::{Mistake, Operation, Side},
    trace::{Collector, Detector, Trace},
};
use super::Edit;

/// Reports a side that became itself divided by something, when the other side did not.
///
/// Nothing is reported if both sides or neither side were divided, or if the divisor is equal to
/// one.
pub fn detect(
    edit: &Edit,
    structure: &impl Structure,
    equivalence: &impl Equivalence,
    collector: &mut impl Collector,
) -> Vec<Mistake> {
    let divisor = |side: Side| divisor_of(edit.before(side), edit.after(side), structure);

    let (side, divisor) = match (divisor(Side::LHS), divisor(Side::RHS)) {
        (Some(divisor), None) => (Side::LHS, divisor),
        (None, Some(divisor)) => (Side::RHS, divisor),
        (Some(_), Some(_)) | (None, None) => return Vec::new(),
    };

    if equivalence.is_one(divisor) {
        collector.push(Trace::DegenerateFiltered {
            detector: Detector::Div,
            side,
            operand: divisor.clone(),
        });
        return Vec::new();
    }

    collector.push(Trace::Found {
        detector: Detector::Div,
        side,
        operation: Operation::Division,
        operand: divisor.clone(),
    });
    vec![Mistake::one_sided(side, Operation::Division, divisor.clone())]
}
