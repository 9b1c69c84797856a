//! Diagnosis of one-sided operations in the steps a learner writes while solving a linear
//! equation.
//!
//! Given two consecutive [`Step`]s, the [`Diagnoser`] finds terms added or subtracted, factors
//! multiplied in, or divisors introduced on one side of the equation only. For each such
//! [`Mistake`], it can produce the corrected equation and the messages that explain the mistake
//! to the learner.
//!
//! ```
//! use cas_mistake::{message::fill_placeholder, Diagnoser, Step};
//!
//! let diagnoser = Diagnoser::new();
//! let prev = Step::new("2x = 10");
//! let curr = Step::new("2x/2 = 10");
//!
//! let mistakes = diagnoser.diagnose(&prev, &curr).unwrap();
//! let mistake = &mistakes[0];
//! let operand = mistake.operand().to_string();
//! let messages = diagnoser.explain(mistake)
//!     .into_iter()
//!     .map(|message| fill_placeholder(message, mistake.operation(), &operand))
//!     .collect::<Vec<_>>();
//! assert_eq!(
//!     messages[1],
//!     "You divided the left side by 2.  In order to keep the equation balanced, you also need to divide the right side by 2.",
//! );
//!
//! let corrected = diagnoser.correct(&curr, mistake).unwrap();
//! assert_eq!(corrected.to_string(), "2x/2 = 10/2");
//! assert!(diagnoser.verify_correction(&prev, &corrected).unwrap());
//! ```
//!
//! An empty diagnosis does not mean the step is correct: the engine only recognizes edits that
//! are a single one-sided operation.

pub mod collab;
pub mod correct;
pub mod decompose;
pub mod detect;
mod diagnoser;
pub mod error;
pub mod message;
pub mod mistake;
pub mod step;
pub mod trace;

pub use diagnoser::Diagnoser;
pub use error::Error;
pub use mistake::{Mistake, MistakeKind, OneSided, Operation, Placeholder, Side};
pub use step::{Step, StepStatus};
pub use trace::{Collector, LogCollector, Trace};
