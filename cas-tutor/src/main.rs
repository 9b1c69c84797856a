mod error;

use cas_compute::tree::Node;
use cas_mistake::{
    collab::{Strict, Structure},
    message::fill_placeholder,
    Diagnoser,
    Error as StepError,
    LogCollector,
    Step,
};
use error::Error;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fs::File, io::{self, BufReader, IsTerminal, Read}};
use tracing_subscriber::EnvFilter;

/// Printed when a step changed, but not by a single one-sided operation.
const NO_DIAGNOSIS: &str = "Couldn't determine the mistake analytically.";

/// The steps of the problem being solved.
#[derive(Default)]
struct Session {
    diagnoser: Diagnoser,

    /// The last step that was accepted, along with its tree.
    prev: Option<(Step, Node)>,
}

impl Session {
    /// Starts a new problem.
    fn reset(&mut self) {
        self.prev = None;
    }

    /// Checks the step against the previous step, printing the diagnosis.
    fn check(&mut self, input: &str) {
        let step = Step::new(input.trim());
        let node = match self.diagnoser.parse_equation(&step) {
            Ok(node) => node,
            Err(err) => {
                report(&err, &step);
                return;
            },
        };

        if let Some((prev, prev_node)) = &self.prev {
            if Strict.equal(prev_node, &node) {
                return;
            }

            match self.diagnose(prev, &step, &node) {
                Ok(()) => (),
                Err(err) => report(&err, &step),
            }
        }

        self.prev = Some((step, node));
    }

    /// Grades the edit from `prev` to `curr`. If the step is wrong, prints the explanation and
    /// correction of the first mistake.
    fn diagnose(&self, prev: &Step, curr: &Step, node: &Node) -> Result<(), StepError> {
        if self.diagnoser.verify_correction(prev, node)? {
            println!("correct");
            return Ok(());
        }

        let mistakes = self.diagnoser.diagnose_with(prev, curr, &mut LogCollector)?;
        let Some(mistake) = mistakes.first() else {
            println!("{}", NO_DIAGNOSIS);
            return Ok(());
        };

        let operand = mistake.operand().to_string();
        for message in self.diagnoser.explain(mistake) {
            println!("{}", fill_placeholder(message, mistake.operation(), &operand));
        }

        let corrected = self.diagnoser.correct_with(curr, mistake, &mut LogCollector)?;
        let verified = self.diagnoser.verify_correction(prev, &corrected)?;
        println!(
            "correction: {} ({})",
            corrected,
            if verified { "verified" } else { "not verified" },
        );
        Ok(())
    }
}

/// Reports an error in a step to stderr.
fn report(err: &StepError, step: &Step) {
    if let Err(io_err) = err.report_to_stderr("step", &step.value) {
        tracing::warn!(%io_err, "could not render the report for `{}`", step);
        eprintln!("{}", err);
    }
}

/// Checks every line of the input as a step of one problem.
fn check_all(input: &str, session: &mut Session) {
    for line in input.lines().filter(|line| !line.trim().is_empty()) {
        process_line(line, session);
    }
}

/// Handles one line of input: a command, or a step.
fn process_line(line: &str, session: &mut Session) {
    match line.trim() {
        ":reset" => session.reset(),
        step => session.check(step),
    }
}

fn run() -> Result<(), Error> {
    let mut args = std::env::args();
    args.next();

    let mut session = Session::default();

    if let Some(filename) = args.next() {
        // check steps in a file
        let mut file = BufReader::new(File::open(filename)?);
        let mut input = String::new();
        file.read_to_string(&mut input)?;

        check_all(&input, &mut session);
    } else if !io::stdin().is_terminal() {
        // read steps from stdin
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;

        check_all(&input, &mut session);
    } else {
        // run the interactive mode
        let mut rl = DefaultEditor::new()?;

        fn read_line(rl: &mut DefaultEditor, session: &mut Session) -> Result<(), ReadlineError> {
            let input = rl.readline("> ")?;
            if input.trim().is_empty() {
                return Ok(());
            }

            rl.add_history_entry(&input)?;

            process_line(&input, session);
            Ok(())
        }

        loop {
            if let Err(err) = read_line(&mut rl, &mut session) {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => break,
                    err => return Err(err.into()),
                }
            }
        }
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
