//! Observing what the engine does.
//!
//! The detectors and the corrector never print. Instead, they report what they find as [`Trace`]
//! events to a [`Collector`] passed in by the caller. Use `()` to ignore the events, a
//! [`Vec<Trace>`] to inspect them, or [`LogCollector`] to forward them to [`tracing`].

use cas_compute::tree::Node;
use crate::mistake::{Operation, Side};
use std::fmt;

/// One of the three one-sided operation detectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Detector {
    /// Finds terms added to or subtracted from one side.
    AddSub,

    /// Finds factors multiplied into one side.
    Mul,

    /// Finds one side divided by a new denominator.
    Div,
}

impl fmt::Display for Detector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::AddSub => write!(f, "addition / subtraction"),
            Self::Mul => write!(f, "multiplication"),
            Self::Div => write!(f, "division"),
        }
    }
}

/// An event reported by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trace {
    /// A diagnosis started.
    Diagnosing {
        /// The text of the previous step.
        prev: String,

        /// The text of the current step.
        curr: String,
    },

    /// One side gained terms or factors while the other side was unchanged.
    SideGrew {
        detector: Detector,
        side: Side,

        /// The number of terms / factors before the edit.
        before: usize,

        /// The number of terms / factors after the edit.
        after: usize,
    },

    /// A side grew, but some of its previous terms / factors are gone, so the edit is more than a
    /// single operation.
    UnableToDiagnose {
        detector: Detector,
        side: Side,
    },

    /// A new factor or divisor was dropped because it has no effect on the equation.
    DegenerateFiltered {
        detector: Detector,
        side: Side,
        operand: Node,
    },

    /// A detector found a mistake.
    Found {
        detector: Detector,
        side: Side,
        operation: Operation,
        operand: Node,
    },

    /// A mistake was corrected by applying its operation to the other side.
    Corrected {
        side: Side,
        operation: Operation,
        corrected: Node,
    },
}

/// A type that collects the events reported by the engine.
///
/// [`Collector`] is also implemented for the unit type `()`. This is useful when you don't want
/// to know the events.
pub trait Collector {
    /// Adds an event to the collector.
    fn push(&mut self, trace: Trace);
}

impl Collector for () {
    #[inline]
    fn push(&mut self, _: Trace) {}
}

impl Collector for Vec<Trace> {
    #[inline]
    fn push(&mut self, trace: Trace) {
        Vec::push(self, trace);
    }
}

/// A [`Collector`] that emits every event as a [`tracing`] debug event with target
/// `cas_mistake`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LogCollector;

impl Collector for LogCollector {
    fn push(&mut self, trace: Trace) {
        match trace {
            Trace::Diagnosing { prev, curr } => tracing::debug!(
                target: "cas_mistake",
                %prev,
                %curr,
                "diagnosing"
            ),
            Trace::SideGrew { detector, side, before, after } => tracing::debug!(
                target: "cas_mistake",
                %detector,
                ?side,
                before,
                after,
                "side_grew"
            ),
            Trace::UnableToDiagnose { detector, side } => tracing::debug!(
                target: "cas_mistake",
                %detector,
                ?side,
                "unable to diagnose the mistake"
            ),
            Trace::DegenerateFiltered { detector, side, operand } => tracing::debug!(
                target: "cas_mistake",
                %detector,
                ?side,
                %operand,
                "degenerate_filtered"
            ),
            Trace::Found { detector, side, operation, operand } => tracing::debug!(
                target: "cas_mistake",
                %detector,
                ?side,
                ?operation,
                %operand,
                "found"
            ),
            Trace::Corrected { side, operation, corrected } => tracing::debug!(
                target: "cas_mistake",
                ?side,
                ?operation,
                %corrected,
                "corrected"
            ),
        }
    }
}
