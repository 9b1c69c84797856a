use cas_compute::{equiv::Sampler, tree::Node};
use crate::{
    collab::{EquationParser, Equivalence, StepParser, Strict, Structure},
    correct::correct_sides,
    detect::{add_sub, div, mul, Edit},
    error::Error,
    message,
    mistake::Mistake,
    step::Step,
    trace::{Collector, Trace},
};

/// Diagnoses, corrects, and explains one-sided operations between equation steps.
///
/// A [`Diagnoser`] holds no state besides its three collaborators: the [`StepParser`] that turns
/// step text into trees, the [`Structure`] that compares trees, and the [`Equivalence`] that
/// answers symbolic questions. Every call is independent of every other call.
///
/// ```
/// use cas_mistake::{Diagnoser, Operation, Side, Step};
///
/// let diagnoser = Diagnoser::new();
/// let prev = Step::new("x + 2 = 5");
/// let curr = Step::new("x + 2 + 3 = 5");
///
/// let mistakes = diagnoser.diagnose(&prev, &curr).unwrap();
/// assert_eq!(mistakes.len(), 1);
/// assert_eq!(mistakes[0].side(), Side::LHS);
/// assert_eq!(mistakes[0].operation(), Operation::Addition);
///
/// let corrected = diagnoser.correct(&curr, &mistakes[0]).unwrap();
/// assert_eq!(corrected.to_string(), "x + 2 + 3 = 5 + 3");
/// ```
#[derive(Debug, Default, Clone)]
pub struct Diagnoser<P = EquationParser, S = Strict, E = Sampler> {
    parser: P,
    structure: S,
    equivalence: E,
}

impl Diagnoser {
    /// Creates a diagnoser with the default collaborators.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P, S, E> Diagnoser<P, S, E>
where
    P: StepParser,
    S: Structure,
    E: Equivalence,
{
    /// Creates a diagnoser with the given collaborators.
    pub fn with_collaborators(parser: P, structure: S, equivalence: E) -> Self {
        Self { parser, structure, equivalence }
    }

    /// Parses the step with the diagnoser's [`StepParser`], requiring it to be an equation.
    ///
    /// Returns [`Error::Parse`] if the step cannot be parsed, and [`Error::InvalidEquation`] if it
    /// is an expression.
    pub fn parse_equation(&self, step: &Step) -> Result<Node, Error> {
        let node = self.parser.parse_step(&step.value)?;
        if node.is_equation() {
            Ok(node)
        } else {
            Err(Error::invalid_equation(&step.value))
        }
    }

    /// Finds the operations that were applied to one side only, going from `prev` to `curr`.
    ///
    /// The detectors run in a fixed order (addition / subtraction, multiplication, division), and
    /// their findings are returned in that order. An empty list means the edit could not be
    /// explained as a one-sided operation, **not** that the step is correct.
    pub fn diagnose(&self, prev: &Step, curr: &Step) -> Result<Vec<Mistake>, Error> {
        self.diagnose_with(prev, curr, &mut ())
    }

    /// Same as [`Diagnoser::diagnose`], reporting what the detectors find to the given
    /// [`Collector`].
    pub fn diagnose_with(
        &self,
        prev: &Step,
        curr: &Step,
        collector: &mut impl Collector,
    ) -> Result<Vec<Mistake>, Error> {
        collector.push(Trace::Diagnosing {
            prev: prev.value.clone(),
            curr: curr.value.clone(),
        });

        let prev_node = self.parse_equation(prev)?;
        let curr_node = self.parse_equation(curr)?;
        let edit = Edit::new(&prev_node, &curr_node)
            .ok_or_else(|| Error::invalid_equation(&curr.value))?;

        let mut mistakes = add_sub::detect(&edit, &self.structure, collector);
        mistakes.extend(mul::detect(&edit, &self.structure, &self.equivalence, collector));
        mistakes.extend(div::detect(&edit, &self.structure, &self.equivalence, collector));
        Ok(mistakes)
    }

    /// Returns the equation the learner would have written had they applied the mistake's
    /// operation to both sides of `step`.
    ///
    /// The result is not checked against the step before the mistake; use
    /// [`Diagnoser::verify_correction`] for that.
    pub fn correct(&self, step: &Step, mistake: &Mistake) -> Result<Node, Error> {
        self.correct_with(step, mistake, &mut ())
    }

    /// Same as [`Diagnoser::correct`], reporting the correction to the given [`Collector`].
    pub fn correct_with(
        &self,
        step: &Step,
        mistake: &Mistake,
        collector: &mut impl Collector,
    ) -> Result<Node, Error> {
        let node = self.parse_equation(step)?;
        let (lhs, rhs) = node.as_equation()
            .ok_or_else(|| Error::invalid_equation(&step.value))?;

        let corrected = correct_sides(lhs, rhs, mistake);
        collector.push(Trace::Corrected {
            side: mistake.side(),
            operation: mistake.operation(),
            corrected: corrected.clone(),
        });
        Ok(corrected)
    }

    /// Returns the messages that explain the mistake. See [`message::explain`].
    pub fn explain(&self, mistake: &Mistake) -> Vec<&'static str> {
        message::explain(mistake)
    }

    /// Returns true if the corrected equation has the same solutions as `prev`, the step before
    /// the mistake.
    ///
    /// A correction can fail this check when the mistake's operand contains a variable, for
    /// example when both sides are multiplied by `x`.
    pub fn verify_correction(&self, prev: &Step, corrected: &Node) -> Result<bool, Error> {
        let prev_node = self.parse_equation(prev)?;
        Ok(self.equivalence.same_solutions(&prev_node, corrected))
    }
}

#[cfg(test)]
mod tests {
    use cas_compute::tree::Node;
    use crate::{mistake::{Operation, Side}, trace::Detector};
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use super::*;

    #[test]
    fn parse_error_is_propagated() {
        let diagnoser = Diagnoser::new();
        let err = diagnoser.diagnose(&Step::new("x + = 5"), &Step::new("x = 5")).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
        assert_eq!(err.inner().spans, vec![4..5]);
    }

    #[test]
    fn expression_is_not_a_step() {
        let diagnoser = Diagnoser::new();
        let err = diagnoser.diagnose(&Step::new("x = 5"), &Step::new("x + 3")).unwrap_err();
        assert!(matches!(err, Error::InvalidEquation(_)));
        assert_eq!(err.to_string(), "steps must be equations");
        assert_eq!(err.inner().spans, vec![0..5]);

        let mistake = Mistake::one_sided(Side::LHS, Operation::Addition, Node::num("3"));
        let err = diagnoser.correct(&Step::new("x + 3"), &mistake).unwrap_err();
        assert!(matches!(err, Error::InvalidEquation(_)));
    }

    #[test]
    fn parse_equation_requires_equals_sign() {
        let diagnoser = Diagnoser::new();
        let node = diagnoser.parse_equation(&Step::new("2x + 3 = 7")).unwrap();
        assert!(node.is_equation());

        let err = diagnoser.parse_equation(&Step::new("2x + 3")).unwrap_err();
        assert!(matches!(err, Error::InvalidEquation(_)));
        assert_eq!(err.inner().spans, vec![0..6]);

        let err = diagnoser.parse_equation(&Step::new("2x + = 7")).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn traces_found_mistake() {
        let diagnoser = Diagnoser::new();
        let mut traces = Vec::new();
        diagnoser.diagnose_with(&Step::new("x = 5"), &Step::new("x - 3 = 5"), &mut traces).unwrap();

        assert_eq!(traces, vec![
            Trace::Diagnosing { prev: "x = 5".to_string(), curr: "x - 3 = 5".to_string() },
            Trace::SideGrew { detector: Detector::AddSub, side: Side::LHS, before: 1, after: 2 },
            Trace::Found {
                detector: Detector::AddSub,
                side: Side::LHS,
                operation: Operation::Subtraction,
                operand: Node::num("3"),
            },
        ]);
    }

    /// An equivalence that treats nothing as degenerate, and counts its calls.
    #[derive(Default)]
    struct Counting {
        calls: Cell<usize>,
    }

    impl Equivalence for Counting {
        fn is_zero(&self, _: &Node) -> bool {
            self.calls.set(self.calls.get() + 1);
            false
        }

        fn is_one(&self, _: &Node) -> bool {
            self.calls.set(self.calls.get() + 1);
            false
        }

        fn same_solutions(&self, _: &Node, _: &Node) -> bool {
            true
        }
    }

    #[test]
    fn injected_equivalence() {
        let counting = Counting::default();
        let diagnoser = Diagnoser::with_collaborators(EquationParser, Strict, &counting);

        // the default sampler would drop the zero factor
        let mistakes = diagnoser.diagnose(&Step::new("x = 5"), &Step::new("0x = 5")).unwrap();
        assert_eq!(mistakes, vec![Mistake::one_sided(Side::LHS, Operation::Multiplication, Node::num("0"))]);
        assert_eq!(counting.calls.get(), 1);
    }

    #[test]
    fn verify() {
        let diagnoser = Diagnoser::new();
        let prev = Step::new("x = 5");
        let curr = Step::new("x*y = 5");
        let mistakes = diagnoser.diagnose(&prev, &curr).unwrap();
        let corrected = diagnoser.correct(&curr, &mistakes[0]).unwrap();

        assert_eq!(corrected.to_string(), "x*y = 5y");
        assert!(!diagnoser.verify_correction(&prev, &corrected).unwrap());
    }
}
