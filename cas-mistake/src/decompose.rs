//! Splitting a side of an equation into its terms or factors.

use cas_compute::tree::Node;
use crate::collab::Structure;
use std::collections::HashMap;

/// Returns the terms of the node: the arguments of a [`Node::Add`], or the node itself.
pub fn terms(node: &Node) -> &[Node] {
    match node {
        Node::Add(args) => args,
        _ => std::slice::from_ref(node),
    }
}

/// Returns the factors of the node: the arguments of a [`Node::Mul`], or the node itself.
pub fn factors(node: &Node) -> &[Node] {
    match node {
        Node::Mul { args, .. } => args,
        _ => std::slice::from_ref(node),
    }
}

/// If `curr` is `prev` divided by something, returns the denominator.
pub fn divisor_of<'a>(prev: &Node, curr: &'a Node, structure: &impl Structure) -> Option<&'a Node> {
    match curr {
        Node::Div(numerator, denominator) if structure.equal(prev, numerator) => Some(&**denominator),
        _ => None,
    }
}

/// A set of nodes that answers "is a structurally equal node in the set?" with a hash lookup.
///
/// Nodes are bucketed by [`Structure::fingerprint`], and a lookup only compares the query against
/// the nodes in its bucket with [`Structure::equal`].
pub struct Index<'a, S> {
    structure: &'a S,
    buckets: HashMap<u64, Vec<&'a Node>>,
}

impl<'a, S: Structure> Index<'a, S> {
    /// Creates an index of the given nodes.
    pub fn new(nodes: &'a [Node], structure: &'a S) -> Self {
        let mut buckets: HashMap<u64, Vec<&'a Node>> = HashMap::new();
        for node in nodes {
            buckets.entry(structure.fingerprint(node)).or_default().push(node);
        }
        Self { structure, buckets }
    }

    /// Returns true if a node structurally equal to `node` is in the index.
    pub fn contains(&self, node: &Node) -> bool {
        self.buckets
            .get(&self.structure.fingerprint(node))
            .is_some_and(|bucket| bucket.iter().any(|candidate| self.structure.equal(candidate, node)))
    }
}

#[cfg(test)]
mod tests {
    use crate::collab::{EquationParser, StepParser, Strict};
    use super::*;

    fn parse(input: &str) -> Node {
        EquationParser.parse_step(input).unwrap()
    }

    #[test]
    fn terms_of_sum() {
        let node = parse("x + 2 - 3");
        assert_eq!(terms(&node), &[Node::var("x"), Node::num("2"), Node::sub(Node::num("3"))]);
    }

    #[test]
    fn singleton_terms() {
        let node = parse("2x");
        assert_eq!(terms(&node), std::slice::from_ref(&node));
        let node = parse("(x + 1)");
        assert_eq!(terms(&node).len(), 2);
    }

    #[test]
    fn factors_of_product() {
        let node = parse("2x(y + 1)");
        assert_eq!(factors(&node).len(), 3);
        let node = parse("x/2");
        assert_eq!(factors(&node), std::slice::from_ref(&node));
    }

    #[test]
    fn divisor() {
        let prev = parse("2*x");
        let curr = parse("2*x/2");
        assert_eq!(divisor_of(&prev, &curr, &Strict), Some(&Node::num("2")));

        let curr = parse("x/2");
        assert_eq!(divisor_of(&prev, &curr, &Strict), None);
        assert_eq!(divisor_of(&prev, &prev, &Strict), None);
    }

    #[test]
    fn index_lookup() {
        let nodes = [parse("x"), parse("2y"), parse("-3")];
        let index = Index::new(&nodes, &Strict);
        assert!(index.contains(&parse("2*y")));
        assert!(index.contains(&parse("-3")));
        assert!(!index.contains(&parse("3")));
        assert!(!index.contains(&parse("y")));
    }
}
