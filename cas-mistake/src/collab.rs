//! The collaborators the engine relies on, and their default implementations.
//!
//! The engine reaches the parser, structural equality, and symbolic equivalence only through the
//! traits in this module, so any of them can be replaced, for example by test doubles.

use cas_compute::{equiv::Sampler, tree::Node};
use cas_parser::parser::{ast::Root, Parser};
use std::{collections::hash_map::DefaultHasher, hash::{Hash, Hasher}};

/// Parses the text of a step into an expression tree.
pub trait StepParser {
    /// Parses the given text. The returned node is not required to be an equation.
    fn parse_step(&self, text: &str) -> Result<Node, cas_error::Error>;
}

/// Compares expression trees by their structure.
pub trait Structure {
    /// Returns true if the two trees are structurally equal.
    fn equal(&self, a: &Node, b: &Node) -> bool;

    /// Returns a hash of the tree. Structurally equal trees must have the same fingerprint.
    fn fingerprint(&self, node: &Node) -> u64;
}

/// Answers symbolic-equivalence questions about expression trees.
pub trait Equivalence {
    /// Returns true if the expression is equal to zero for every value of its variables.
    fn is_zero(&self, node: &Node) -> bool;

    /// Returns true if the expression is equal to one for every value of its variables.
    fn is_one(&self, node: &Node) -> bool;

    /// Returns true if the two equations have the same solutions.
    fn same_solutions(&self, a: &Node, b: &Node) -> bool;
}

/// The default [`StepParser`], using `cas_parser`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EquationParser;

impl StepParser for EquationParser {
    fn parse_step(&self, text: &str) -> Result<Node, cas_error::Error> {
        let root = Parser::new(text).try_parse_full::<Root>()?;
        Ok(root.into())
    }
}

/// The default [`Structure`], using the strict equality of [`Node`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Strict;

impl Structure for Strict {
    fn equal(&self, a: &Node, b: &Node) -> bool {
        a == b
    }

    fn fingerprint(&self, node: &Node) -> u64 {
        let mut hasher = DefaultHasher::new();
        node.hash(&mut hasher);
        hasher.finish()
    }
}

impl Equivalence for Sampler {
    fn is_zero(&self, node: &Node) -> bool {
        Sampler::is_zero(self, node)
    }

    fn is_one(&self, node: &Node) -> bool {
        Sampler::is_one(self, node)
    }

    fn same_solutions(&self, a: &Node, b: &Node) -> bool {
        Sampler::same_solutions(self, a, b)
    }
}

impl<T: StepParser + ?Sized> StepParser for &T {
    fn parse_step(&self, text: &str) -> Result<Node, cas_error::Error> {
        (**self).parse_step(text)
    }
}

impl<T: Structure + ?Sized> Structure for &T {
    fn equal(&self, a: &Node, b: &Node) -> bool {
        (**self).equal(a, b)
    }

    fn fingerprint(&self, node: &Node) -> u64 {
        (**self).fingerprint(node)
    }
}

impl<T: Equivalence + ?Sized> Equivalence for &T {
    fn is_zero(&self, node: &Node) -> bool {
        (**self).is_zero(node)
    }

    fn is_one(&self, node: &Node) -> bool {
        (**self).is_one(node)
    }

    fn same_solutions(&self, a: &Node, b: &Node) -> bool {
        (**self).same_solutions(a, b)
    }
}
