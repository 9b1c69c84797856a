//! Finds terms added to or subtracted from one side of an equation.

use crate::{
    collab::Structure,
    decompose::terms,
    mistake::{Mistake, Operation, Side},
    trace::{Collector, Detector, Trace},
};
use super::{grown, Edit};

/// Reports every term that one side gained while the other side stayed the same.
///
/// A new term written as a subtraction (`x - 3`) is reported as [`Operation::Subtraction`] of the
/// subtracted node; any other new term is reported as [`Operation::Addition`] of the term itself.
///
/// If both sides changed, nothing is reported, even when the same term was correctly added to
/// both.
pub fn detect(
    edit: &Edit,
    structure: &impl Structure,
    collector: &mut impl Collector,
) -> Vec<Mistake> {
    let mut mistakes = Vec::new();

    for side in [Side::LHS, Side::RHS] {
        let Some(new_terms) = grown(Detector::AddSub, side, edit, terms, structure, collector) else {
            continue;
        };

        for term in new_terms {
            let (operation, operand) = match term.subtracted() {
                Some(arg) => (Operation::Subtraction, arg.clone()),
                None => (Operation::Addition, term.clone()),
            };

            collector.push(Trace::Found {
                detector: Detector::AddSub,
                side,
                operation,
                operand: operand.clone(),
            });
            mistakes.push(Mistake::one_sided(side, operation, operand));
        }
    }

    mistakes
}

#[cfg(test)]
mod tests {
    use cas_compute::tree::Node;
    use crate::collab::{EquationParser, StepParser, Strict};
    use pretty_assertions::assert_eq;
    use super::*;

    /// Runs the detector on the two steps.
    fn run(prev: &str, curr: &str) -> (Vec<Mistake>, Vec<Trace>) {
        let prev = EquationParser.parse_step(prev).unwrap();
        let curr = EquationParser.parse_step(curr).unwrap();
        let edit = Edit::new(&prev, &curr).unwrap();
        let mut traces = Vec::new();
        let mistakes = detect(&edit, &Strict, &mut traces);
        (mistakes, traces)
    }

    #[test]
    fn added_to_left() {
        let (mistakes, _) = run("x + 2 = 5", "x + 2 + 3 = 5");
        assert_eq!(mistakes, vec![Mistake::one_sided(Side::LHS, Operation::Addition, Node::num("3"))]);
    }

    #[test]
    fn subtracted_from_left() {
        let (mistakes, _) = run("x = 5", "x - 3 = 5");
        assert_eq!(mistakes, vec![Mistake::one_sided(Side::LHS, Operation::Subtraction, Node::num("3"))]);
    }

    #[test]
    fn added_negative_is_addition() {
        let (mistakes, _) = run("x = 5", "x + -3 = 5");
        assert_eq!(mistakes, vec![Mistake::one_sided(
            Side::LHS,
            Operation::Addition,
            Node::neg(Node::num("3")),
        )]);
    }

    #[test]
    fn subtracted_from_right() {
        let (mistakes, _) = run("2x + 1 = 7", "2x + 1 = 7 - 1");
        assert_eq!(mistakes, vec![Mistake::one_sided(Side::RHS, Operation::Subtraction, Node::num("1"))]);
    }

    #[test]
    fn several_new_terms() {
        let (mistakes, _) = run("x = 5", "x + y - 2 = 5");
        assert_eq!(mistakes, vec![
            Mistake::one_sided(Side::LHS, Operation::Addition, Node::var("y")),
            Mistake::one_sided(Side::LHS, Operation::Subtraction, Node::num("2")),
        ]);
    }

    #[test]
    fn both_sides_changed() {
        let (mistakes, traces) = run("x = 5", "x + 3 = 5 + 3");
        assert_eq!(mistakes, vec![]);
        assert_eq!(traces, vec![]);
    }

    #[test]
    fn previous_term_missing() {
        let (mistakes, traces) = run("x + 2 = 5", "x + 4 + 1 = 5");
        assert_eq!(mistakes, vec![]);
        assert_eq!(traces, vec![
            Trace::SideGrew { detector: Detector::AddSub, side: Side::LHS, before: 2, after: 3 },
            Trace::UnableToDiagnose { detector: Detector::AddSub, side: Side::LHS },
        ]);
    }

    #[test]
    fn repeated_term_is_not_new() {
        // presence, not count: the second `2` matches the first
        let (mistakes, _) = run("x + 2 = 5", "x + 2 + 2 = 5");
        assert_eq!(mistakes, vec![]);
    }

    #[test]
    fn unchanged() {
        let (mistakes, traces) = run("x + 2 = 5", "x + 2 = 5");
        assert_eq!(mistakes, vec![]);
        assert_eq!(traces, vec![]);
    }
}
