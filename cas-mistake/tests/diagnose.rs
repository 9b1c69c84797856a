use cas_compute::{equiv::{SampleOptions, Sampler}, tree::Node};
use cas_mistake::{
    collab::{EquationParser, Strict},
    message::{fill_placeholder, BALANCE},
    Diagnoser,
    Error,
    LogCollector,
    Mistake,
    Operation,
    Side,
    Step,
};
use pretty_assertions::assert_eq;

/// Diagnoses the edit from `prev` to `curr` with the default collaborators.
fn diagnose(prev: &str, curr: &str) -> Vec<Mistake> {
    Diagnoser::new().diagnose(&Step::new(prev), &Step::new(curr)).unwrap()
}

/// Diagnoses the edit, and returns the corrected form of `curr` for the first mistake, and
/// whether the correction has the same solutions as `prev`.
fn correct_first(prev: &str, curr: &str) -> (String, bool) {
    let diagnoser = Diagnoser::new();
    let (prev, curr) = (Step::new(prev), Step::new(curr));
    let mistakes = diagnoser.diagnose(&prev, &curr).unwrap();
    let corrected = diagnoser.correct(&curr, &mistakes[0]).unwrap();
    let verified = diagnoser.verify_correction(&prev, &corrected).unwrap();
    (corrected.to_string(), verified)
}

#[test]
fn unchanged_step() {
    assert_eq!(diagnose("2x + 3 = 7", "2x + 3 = 7"), vec![]);
    assert_eq!(diagnose("x = 5", "x = 5"), vec![]);
    assert_eq!(diagnose("3x = 6", "3x = 6"), vec![]);
    assert_eq!(diagnose("x/2 = 5", "x/2 = 5"), vec![]);
    assert_eq!(diagnose("x/2 = 5/3", "x/2 = 5/3"), vec![]);
    assert_eq!(diagnose("2(x + (3 - y)) = 10/(4 - 2x)", "2(x + (3 - y)) = 10/(4 - 2x)"), vec![]);
}

#[test]
fn unchanged_step_traces_nothing_found() {
    let mut traces = Vec::new();
    let mistakes = Diagnoser::new()
        .diagnose_with(&Step::new("-3x/(x - 1) = 2x"), &Step::new("-3x/(x - 1) = 2x"), &mut traces)
        .unwrap();

    assert_eq!(mistakes, vec![]);
    assert_eq!(traces.len(), 1, "only the start of the diagnosis is traced: {:?}", traces);
}

#[test]
fn added_to_one_side() {
    assert_eq!(
        diagnose("x + 2 = 5", "x + 2 + 3 = 5"),
        vec![Mistake::one_sided(Side::LHS, Operation::Addition, Node::num("3"))],
    );
    assert_eq!(correct_first("x + 2 = 5", "x + 2 + 3 = 5"), ("x + 2 + 3 = 5 + 3".to_string(), true));
}

#[test]
fn subtracted_from_one_side() {
    assert_eq!(
        diagnose("x + 2 = 5", "x + 2 - 3 = 5"),
        vec![Mistake::one_sided(Side::LHS, Operation::Subtraction, Node::num("3"))],
    );
    assert_eq!(
        diagnose("x = 5", "x = 5 - 2"),
        vec![Mistake::one_sided(Side::RHS, Operation::Subtraction, Node::num("2"))],
    );
    assert_eq!(correct_first("x = 5", "x = 5 - 2"), ("x - 2 = 5 - 2".to_string(), true));
}

#[test]
fn several_terms_at_once() {
    assert_eq!(diagnose("x = 5", "x + 1 + 2 = 5"), vec![
        Mistake::one_sided(Side::LHS, Operation::Addition, Node::num("1")),
        Mistake::one_sided(Side::LHS, Operation::Addition, Node::num("2")),
    ]);
}

#[test]
fn multiplied_one_side() {
    assert_eq!(
        diagnose("x = 5", "3x = 5"),
        vec![Mistake::one_sided(Side::LHS, Operation::Multiplication, Node::num("3"))],
    );
    assert_eq!(correct_first("x = 5", "3x = 5"), ("3x = 5*3".to_string(), true));
}

#[test]
fn divided_one_side() {
    assert_eq!(
        diagnose("2*x = 10", "2*x/2 = 10"),
        vec![Mistake::one_sided(Side::LHS, Operation::Division, Node::num("2"))],
    );
    assert_eq!(correct_first("2*x = 10", "2*x/2 = 10"), ("2*x/2 = 10/2".to_string(), true));
}

#[test]
fn degenerate_operands_are_ignored() {
    assert_eq!(diagnose("x = 5", "x*0 = 5"), vec![]);
    assert_eq!(diagnose("x = 5", "x/1 = 5"), vec![]);
    assert_eq!(diagnose("x = 5", "x/(3 - 2) = 5"), vec![]);
}

#[test]
fn degenerate_operands_with_out_of_range_options() {
    let steps = (Step::new("x = 5"), Step::new("x(y - y) = 5"));
    for options in [
        SampleOptions { bound: -1, ..Default::default() },
        SampleOptions { samples: 0, ..Default::default() },
        SampleOptions { max_attempts: 0, ..Default::default() },
    ] {
        let diagnoser = Diagnoser::with_collaborators(EquationParser, Strict, Sampler::new(options));
        assert_eq!(diagnoser.diagnose(&steps.0, &steps.1).unwrap(), vec![], "{:?}", options);
    }
}

#[test]
fn both_sides_changed() {
    assert_eq!(diagnose("x + 2 = 5", "x + 2 - 2 = 5 - 2"), vec![]);
    assert_eq!(diagnose("2x = 10", "2x/2 = 10/2"), vec![]);
    assert_eq!(diagnose("x = 5", "3x = 5*3"), vec![]);
}

#[test]
fn rewritten_side_is_not_diagnosed() {
    // `2` is gone from the left side, so this is not a single operation
    assert_eq!(diagnose("x + 2 = 5", "x + 3 + 4 = 5"), vec![]);
}

#[test]
fn correction_by_variable_is_not_verified() {
    let (corrected, verified) = correct_first("x + 1 = 5", "(x + 1)x = 5");
    assert_eq!(corrected, "(x + 1)x = 5x");
    assert!(!verified);
}

#[test]
fn correction_keeps_mistaken_side() {
    let diagnoser = Diagnoser::new();
    let curr = Step::new("x = 5 + y");
    let mistakes = diagnoser.diagnose(&Step::new("x = 5"), &curr).unwrap();
    let corrected = diagnoser.correct(&curr, &mistakes[0]).unwrap();
    let (lhs, rhs) = corrected.as_equation().unwrap();

    assert_eq!(lhs.to_string(), "x + y");
    assert_eq!(rhs.to_string(), "5 + y");
}

#[test]
fn explain_and_fill() {
    let diagnoser = Diagnoser::new();
    let mistakes = diagnoser.diagnose(&Step::new("x = 5"), &Step::new("x = 5 + 2y")).unwrap();
    let mistake = &mistakes[0];
    let operand = mistake.operand().to_string();
    let messages = diagnoser.explain(mistake)
        .into_iter()
        .map(|message| fill_placeholder(message, mistake.operation(), &operand))
        .collect::<Vec<_>>();

    assert_eq!(messages, vec![
        BALANCE.to_string(),
        "You added 2y to the right side.  In order to keep the equation balanced, you also need to add 2y to the left side.".to_string(),
    ]);
}

#[test]
fn expression_steps_are_rejected() {
    let diagnoser = Diagnoser::new();
    let err = diagnoser.diagnose(&Step::new("x + 1"), &Step::new("x + 1 = 2")).unwrap_err();
    assert!(matches!(err, Error::InvalidEquation(_)));

    let err = diagnoser.verify_correction(&Step::new("x + 1"), &Node::num("1")).unwrap_err();
    assert!(matches!(err, Error::InvalidEquation(_)));
}

#[test]
fn malformed_steps_are_rejected() {
    let diagnoser = Diagnoser::new();
    for text in ["x + = 5", "x = 1 = 2", "(x = 5", "x^2 = 4", ""] {
        let err = diagnoser.diagnose(&Step::new("x = 5"), &Step::new(text)).unwrap_err();
        assert!(matches!(err, Error::Parse(_)), "{} should not parse", text);
    }
}

#[test]
fn log_collector() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();

    let mistakes = Diagnoser::new()
        .diagnose_with(&Step::new("x = 5"), &Step::new("x/2 = 5"), &mut LogCollector)
        .unwrap();
    assert_eq!(mistakes.len(), 1);
}
