use std::fmt::{Display, Formatter};

/// 0-based index of a die in the order the pool was built.
pub type DieIndex = usize;
/// 0-based position of a letter within a word.
pub type Position = usize;

/// A vertex of the layered flow network.
///
/// Variants order the same way as their dense indices, so sorting nodes and sorting their indices agree.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Ord, PartialOrd)]
pub enum Node {
    /// Where all flow starts.
    Source,
    /// One node per die in the pool.
    Die(DieIndex),
    /// One node per letter position in the word.
    Letter(Position),
    /// Where all flow ends.
    Sink,
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Source => write!(f, "source"),
            Node::Die(die) => write!(f, "die {}", die),
            Node::Letter(pos) => write!(f, "letter {}", pos),
            Node::Sink => write!(f, "sink"),
        }
    }
}

/// Injective mapping from [`Node`] to a dense index, sized for one word against one pool.
///
/// Source is 0, dice follow, then one slot per letter position, and the sink comes last.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct NodeLayout {
    pub(crate) dice: usize,
    pub(crate) letters: usize,
}

impl NodeLayout {
    pub(crate) fn new(dice: usize, letters: usize) -> Self {
        Self { dice, letters }
    }

    #[inline]
    pub(crate) fn node_count(&self) -> usize {
        self.dice + self.letters + 2
    }

    #[inline]
    pub(crate) fn index(&self, node: Node) -> usize {
        match node {
            Node::Source => 0,
            Node::Die(die) => {
                debug_assert!(die < self.dice);
                1 + die
            }
            Node::Letter(pos) => {
                debug_assert!(pos < self.letters);
                1 + self.dice + pos
            }
            Node::Sink => 1 + self.dice + self.letters,
        }
    }

    /// Inverse of [`Self::index`]; `None` for indices outside the layout.
    pub(crate) fn node_at(&self, index: usize) -> Option<Node> {
        let first_letter = 1 + self.dice;
        let sink = first_letter + self.letters;

        match index {
            0 => Some(Node::Source),
            i if i < first_letter => Some(Node::Die(i - 1)),
            i if i < sink => Some(Node::Letter(i - first_letter)),
            i if i == sink => Some(Node::Sink),
            _ => None,
        }
    }

    pub(crate) fn nodes(&self) -> impl Iterator<Item=Node> + '_ {
        (0..self.node_count()).filter_map(|index| self.node_at(index))
    }
}
