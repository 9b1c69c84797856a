//! Finds factors multiplied into one side of an equation.

use crate::{
    collab::{Equivalence, Structure},
    decompose::factors,
    mistake::{Mistake, Operation, Side},
    trace::{Collector, Detector, Trace},
};
use super::{grown, Edit};

/// Reports every factor that one side gained while the other side stayed the same.
///
/// New factors that are equal to zero are dropped. Every other new factor is reported as
/// [`Operation::Multiplication`]. As with new terms, a factor written as a subtraction is
/// reported by its subtracted node.
pub fn detect(
    edit: &Edit,
    structure: &impl Structure,
    equivalence: &impl Equivalence,
    collector: &mut impl Collector,
) -> Vec<Mistake> {
    let mut mistakes = Vec::new();

    for side in [Side::LHS, Side::RHS] {
        let Some(new_factors) = grown(Detector::Mul, side, edit, factors, structure, collector) else {
            continue;
        };

        for factor in new_factors {
            if equivalence.is_zero(factor) {
                collector.push(Trace::DegenerateFiltered {
                    detector: Detector::Mul,
                    side,
                    operand: factor.clone(),
                });
                continue;
            }

            let operand = factor.subtracted().unwrap_or(factor).clone();
            collector.push(Trace::Found {
                detector: Detector::Mul,
                side,
                operation: Operation::Multiplication,
                operand: operand.clone(),
            });
            mistakes.push(Mistake::one_sided(side, Operation::Multiplication, operand));
        }
    }

    mistakes
}
