use std::fmt::{Display, Formatter};

use itertools::Itertools;
use ndarray::Array2;
use petgraph::graphmap::DiGraphMap;

use crate::dice::DicePool;
use crate::node::{Node, NodeLayout};

/// Orientation of an arc relative to the edge it belongs to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub(crate) enum Edge {
    Forward,
    // residual twin; starts with no capacity
    Reverse,
}

/// The layered network `source -> dice -> letters -> sink` for one word against one pool, with residual capacities.
///
/// Every edge is inserted together with its reverse arc, so a search over [`Self::neighbours`] can also walk flow
/// backward. Neighbours are enumerated in insertion order: dice ascending, then letter positions ascending.
pub struct FlowNetwork<'a> {
    pool: &'a DicePool,
    word: Vec<char>,
    pub(crate) layout: NodeLayout,
    graph: DiGraphMap<Node, Edge>,
    // residual capacity, indexed by (layout.index(u), layout.index(v))
    capacity: Array2<u32>,
}

impl<'a> FlowNetwork<'a> {
    /// Build the network spelling `word` with the dice in `pool`.
    ///
    /// Every edge has capacity 1: `source -> die` for every die, `die -> letter` whenever the die shows the letter at
    /// that position, and `letter -> sink` for every position.
    pub fn build(pool: &'a DicePool, word: &str) -> Self {
        let word = word.chars().collect_vec();
        let layout = NodeLayout::new(pool.len(), word.len());

        let mut network = Self {
            pool,
            layout,
            graph: DiGraphMap::with_capacity(
                layout.node_count(),
                // worst case, every die shows every letter; each edge comes with its reverse arc
                2 * (pool.len() + pool.len() * word.len() + word.len()),
            ),
            capacity: Array2::zeros((layout.node_count(), layout.node_count())),
            word,
        };

        for node in layout.nodes() {
            network.graph.add_node(node);
        }

        for (die, _) in pool.iter() {
            network.add_edge(Node::Source, Node::Die(die), 1);
        }

        for (die_index, die) in pool.iter() {
            let reachable = network.word.iter()
                .positions(|letter| die.contains(*letter))
                .collect_vec();
            for pos in reachable {
                network.add_edge(Node::Die(die_index), Node::Letter(pos), 1);
            }
        }

        for pos in 0..network.word.len() {
            network.add_edge(Node::Letter(pos), Node::Sink, 1);
        }

        network
    }

    fn add_edge(&mut self, from: Node, to: Node, capacity: u32) {
        self.graph.add_edge(from, to, Edge::Forward);
        self.graph.add_edge(to, from, Edge::Reverse);

        let (from_index, to_index) = (self.layout.index(from), self.layout.index(to));
        self.capacity[[from_index, to_index]] = capacity;
        self.capacity[[to_index, from_index]] = 0;
    }

    /// Number of letters in the word this network was built for.
    pub fn word_len(&self) -> usize {
        self.word.len()
    }

    /// Remaining capacity on the arc `from -> to`. Pairs with no arc between them have none.
    #[inline]
    pub fn residual(&self, from: Node, to: Node) -> u32 {
        self.capacity[[self.layout.index(from), self.layout.index(to)]]
    }

    /// Nodes reachable from `node` over a single arc, forward or reverse, regardless of remaining capacity.
    pub fn neighbours(&self, node: Node) -> impl Iterator<Item=Node> + '_ {
        self.graph.neighbors(node)
    }

    /// Whether `from -> to` is an edge of the network as built, as opposed to a reverse arc or no arc at all.
    pub(crate) fn is_forward(&self, from: Node, to: Node) -> bool {
        self.graph.edge_weight(from, to) == Some(&Edge::Forward)
    }

    /// All forward edges as built, in insertion order.
    pub(crate) fn edges(&self) -> impl Iterator<Item=(Node, Node)> + '_ {
        self.graph.all_edges()
            .filter(|(_, _, edge)| **edge == Edge::Forward)
            .map(|(from, to, _)| (from, to))
    }

    /// Push `amount` units of flow along `from -> to`, shifting that much capacity onto the reverse arc.
    pub(crate) fn push(&mut self, from: Node, to: Node, amount: u32) {
        let (from_index, to_index) = (self.layout.index(from), self.layout.index(to));
        debug_assert!(self.capacity[[from_index, to_index]] >= amount, "pushed past capacity on {} -> {}", from, to);

        self.capacity[[from_index, to_index]] -= amount;
        self.capacity[[to_index, from_index]] += amount;
    }
}

impl Display for FlowNetwork<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for node in self.layout.nodes() {
            let label = match node {
                Node::Source => "SOURCE".to_owned(),
                Node::Die(die) => self.pool[die].to_string(),
                Node::Letter(pos) => self.word[pos].to_string(),
                Node::Sink => "SINK".to_owned(),
            };

            write!(f, "Node {}: {} Edges to", self.layout.index(node), label)?;
            for target in self.graph.edges(node).filter(|(_, _, edge)| **edge == Edge::Forward) {
                write!(f, " {}", self.layout.index(target.1))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
