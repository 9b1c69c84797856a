//! The one-sided operation detectors.
//!
//! Each detector compares the equation before and after an edit, and reports an operation that
//! was applied to one side only. A detector that cannot explain an edit reports nothing; this is
//! not an error.
//!
//! - [`add_sub`] finds new terms on one side.
//! - [`mul`] finds new factors on one side.
//! - [`div`] finds one side divided by a new denominator.

pub mod add_sub;
pub mod div;
pub mod mul;

use cas_compute::tree::Node;
use crate::{
    collab::Structure,
    decompose::Index,
    mistake::Side,
    trace::{Collector, Detector, Trace},
};

/// The two sides of the equations before and after an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edit<'a> {
    prev: (&'a Node, &'a Node),
    curr: (&'a Node, &'a Node),
}

impl<'a> Edit<'a> {
    /// Creates an edit from the previous and current equations. Returns [`None`] if either node
    /// is not a [`Node::Equation`].
    pub fn new(prev: &'a Node, curr: &'a Node) -> Option<Self> {
        Some(Self {
            prev: prev.as_equation()?,
            curr: curr.as_equation()?,
        })
    }

    /// Returns the given side of the equation before the edit.
    pub fn before(&self, side: Side) -> &'a Node {
        side.of(self.prev.0, self.prev.1)
    }

    /// Returns the given side of the equation after the edit.
    pub fn after(&self, side: Side) -> &'a Node {
        side.of(self.curr.0, self.curr.1)
    }

    /// Returns true if the given side is structurally the same before and after the edit.
    pub fn unchanged(&self, side: Side, structure: &impl Structure) -> bool {
        structure.equal(self.before(side), self.after(side))
    }
}

/// Finds the elements that the given side gained in the edit, splitting each version of the
/// side into elements with `split`.
///
/// Returns [`None`] unless the side has more elements after the edit than before, and the other
/// side is unchanged. Also returns [`None`] if any element from before the edit is missing after
/// it, since the edit is then more than one operation.
///
/// Elements are compared by presence, not by count: an element is new only if no structurally
/// equal element existed before the edit.
fn grown<'a>(
    detector: Detector,
    side: Side,
    edit: &Edit<'a>,
    split: fn(&Node) -> &[Node],
    structure: &impl Structure,
    collector: &mut impl Collector,
) -> Option<Vec<&'a Node>> {
    let before = split(edit.before(side));
    let after = split(edit.after(side));

    if before.len() >= after.len() || !edit.unchanged(side.opposite(), structure) {
        return None;
    }

    collector.push(Trace::SideGrew {
        detector,
        side,
        before: before.len(),
        after: after.len(),
    });

    let after_index = Index::new(after, structure);
    if !before.iter().all(|element| after_index.contains(element)) {
        collector.push(Trace::UnableToDiagnose { detector, side });
        return None;
    }

    let before_index = Index::new(before, structure);
    Some(after.iter().filter(|element| !before_index.contains(element)).collect())
}
