use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether a step has been checked, and the result of the check.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StepStatus {
    /// The step has not been checked yet.
    #[default]
    Ungraded,

    /// The step follows from the previous one.
    Correct,

    /// The step does not follow from the previous one.
    Wrong,
}

/// One snapshot of the equation a learner is solving, as the text they typed.
///
/// The engine only reads steps; it never changes their status.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Step {
    /// The text of the step, such as `2x + 3 = 7`.
    pub value: String,

    /// Whether the step has been checked.
    pub status: StepStatus,
}

impl Step {
    /// Creates an ungraded step with the given text.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            status: StepStatus::Ungraded,
        }
    }
}

impl From<&str> for Step {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Step {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
