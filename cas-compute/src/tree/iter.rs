use super::Node;

/// An iterator that iteratively traverses a tree of nodes in left-to-right post-order (i.e.
/// depth-first).
///
/// This iterator is created by [`Node::post_order_iter`].
pub struct NodeIter<'a> {
    stack: Vec<&'a Node>,
    last_visited: Option<&'a Node>,
}

impl<'a> NodeIter<'a> {
    /// Creates a new iterator that traverses the tree in left-to-right post-order (i.e.
    /// depth-first).
    pub fn new(node: &'a Node) -> Self {
        Self {
            stack: vec![node],
            last_visited: None,
        }
    }

    /// Pops the current node in the stack and marks it as the last visited node.
    fn visit(&mut self) -> Option<&'a Node> {
        self.last_visited = Some(self.stack.pop()?);
        self.last_visited
    }

    /// Returns true if the given node matches the last visited node.
    fn is_last_visited(&self, node: &'a Node) -> bool {
        match self.last_visited {
            Some(last_visited) => std::ptr::eq(last_visited, node),
            None => false,
        }
    }
}

impl<'a> Iterator for NodeIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = *self.stack.last()?;
            match node {
                Node::Number(_) | Node::Variable(_) => return self.visit(),
                Node::Neg { arg, .. } => {
                    if self.is_last_visited(arg) {
                        return self.visit();
                    }
                    self.stack.push(arg);
                },
                Node::Add(args) | Node::Mul { args, .. } => {
                    match args.last() {
                        Some(last) if !self.is_last_visited(last) => {
                            for arg in args.iter().rev() {
                                self.stack.push(arg);
                            }
                        },
                        _ => return self.visit(),
                    }
                },
                Node::Div(lhs, rhs) | Node::Equation(lhs, rhs) => {
                    if self.is_last_visited(rhs) {
                        return self.visit();
                    }
                    self.stack.push(rhs);
                    self.stack.push(lhs);
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_order() {
        let node = Node::equation(
            Node::Add(vec![Node::var("x"), Node::sub(Node::num("3"))]),
            Node::div(Node::num("5"), Node::var("y")),
        );
        let visited = node.post_order_iter()
            .map(|node| node.to_string())
            .collect::<Vec<_>>();

        assert_eq!(visited, vec![
            "x",
            "3",
            "-3",
            "x - 3",
            "5",
            "y",
            "5/y",
            "x - 3 = 5/y",
        ]);
    }
}
