use std::collections::VecDeque;

use crate::network::FlowNetwork;
use crate::node::{Node, NodeLayout};

/// Predecessor of each node on the breadth-first search tree, keyed densely by node index.
///
/// Rebuilt from scratch by every search.
pub(crate) struct ParentMap {
    layout: NodeLayout,
    visited: Vec<bool>,
    // the source is visited but has no parent
    parents: Vec<Option<Node>>,
}

impl ParentMap {
    fn new(layout: NodeLayout) -> Self {
        Self {
            layout,
            visited: vec![false; layout.node_count()],
            parents: vec![None; layout.node_count()],
        }
    }

    #[inline]
    fn is_visited(&self, node: Node) -> bool {
        self.visited[self.layout.index(node)]
    }

    fn visit(&mut self, node: Node, parent: Option<Node>) {
        let index = self.layout.index(node);
        self.visited[index] = true;
        self.parents[index] = parent;
    }

    fn parent(&self, node: Node) -> Option<Node> {
        self.parents[self.layout.index(node)]
    }

    /// Walk back from `end` to the root of the tree, returning the nodes in root-to-`end` order.
    fn path_to(&self, end: Node) -> Vec<Node> {
        let mut path = vec![end];
        let mut current = end;
        while let Some(parent) = self.parent(current) {
            path.push(parent);
            current = parent;
        }

        path.reverse();
        path
    }
}

/// A source-to-sink path over arcs that all have positive residual capacity.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AugmentingPath {
    nodes: Vec<Node>,
}

impl AugmentingPath {
    /// The nodes on this path, starting at [`Node::Source`] and ending at [`Node::Sink`].
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Consecutive `(from, to)` pairs along this path.
    pub fn arcs(&self) -> impl Iterator<Item=(Node, Node)> + '_ {
        self.nodes.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

/// Breadth-first search for a shortest (fewest-arc) augmenting path through `network`.
///
/// Ties between paths of equal length go to whichever the neighbour enumeration of [`FlowNetwork`] reaches first, so
/// the same network always yields the same path. Returns `None` once the sink is unreachable, i.e. the flow is maximal.
pub fn shortest_augmenting_path(network: &FlowNetwork) -> Option<AugmentingPath> {
    let mut parents = ParentMap::new(network.layout);
    let mut queue = VecDeque::with_capacity(network.layout.node_count());

    parents.visit(Node::Source, None);
    queue.push_back(Node::Source);

    while let Some(node) = queue.pop_front() {
        for next in network.neighbours(node) {
            if parents.is_visited(next) || network.residual(node, next) == 0 {
                continue;
            }

            parents.visit(next, Some(node));
            if next == Node::Sink {
                return Some(AugmentingPath { nodes: parents.path_to(Node::Sink) });
            }
            queue.push_back(next);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use crate::builder::DiceBuilder;
    use crate::network::FlowNetwork;
    use crate::node::Node;

    use super::shortest_augmenting_path;

    #[test]
    fn first_path_uses_lowest_die() {
        let pool = DiceBuilder::new().add_dice(["xa", "a"]).build().unwrap();
        let network = FlowNetwork::build(&pool, "a");

        let path = shortest_augmenting_path(&network).unwrap();
        assert_eq!(path.nodes(), &[Node::Source, Node::Die(0), Node::Letter(0), Node::Sink]);
    }

    #[test]
    fn no_path_when_nothing_matches() {
        let pool = DiceBuilder::new().add_dice(["abc", "def"]).build().unwrap();
        let network = FlowNetwork::build(&pool, "z");

        assert_eq!(shortest_augmenting_path(&network), None);
    }

    #[test]
    fn no_path_without_dice() {
        let pool = DiceBuilder::new().build().unwrap();
        let network = FlowNetwork::build(&pool, "a");

        assert_eq!(shortest_augmenting_path(&network), None);
    }

    #[test]
    fn saturated_edges_are_skipped() {
        let pool = DiceBuilder::new().add_dice(["a", "a"]).build().unwrap();
        let mut network = FlowNetwork::build(&pool, "a");
        network.push(Node::Source, Node::Die(0), 1);

        let path = shortest_augmenting_path(&network).unwrap();
        assert_eq!(path.nodes(), &[Node::Source, Node::Die(1), Node::Letter(0), Node::Sink]);
    }
}
