#![warn(missing_docs)]

//! # `worddice`
//!
//! Decide whether a word can be spelled with a pool of lettered dice, using each die at most once, and if so, which
//! die supplies which letter.
//! Begin by building a [`DicePool`] with a [`DiceBuilder`], then call [`spell()`](DicePool::spell) once per word.
//!
//! # Internals
//! Spelling a word is a bipartite matching between dice and letter positions, which we solve as a maximum flow
//! problem on a small layered network:
//!
//! ```text
//! source --1--> die j --1--> letter i --1--> sink
//! ```
//!
//! There is one edge from the source to every die, one edge from die `j` to letter position `i` whenever die `j`
//! shows the letter at position `i`, and one edge from every letter position to the sink.
//! The capacity of 1 on source edges means a die is used at most once; the capacity of 1 on sink edges means every
//! letter needs exactly one die.
//! The word is spellable exactly when the maximum flow equals its length.
//!
//! The flow is found with Edmonds-Karp: repeatedly find a shortest augmenting path by breadth-first search and push
//! flow along it.
//! A greedy letter-by-letter choice can strand a later letter (dice `ab`, `a` and the word `ab`: handing die 0 to the
//! `a` leaves nothing to show the `b`); augmenting paths fix that by sending flow back through a reverse arc,
//! releasing an earlier binding in favour of a better one.
//! Ties between equally short paths are broken by die index, then letter position, so results are deterministic.

pub use builder::{BuilderInvalidReason, DiceBuilder};
pub use dice::{DicePool, Die};
pub use network::FlowNetwork;
pub use node::{DieIndex, Node, Position};
pub use search::{shortest_augmenting_path, AugmentingPath};
pub use solver::{Assignment, EdmondsKarp, FlowOutcome};
pub use spelling::Spelling;

pub mod builder;
pub(crate) mod dice;
pub(crate) mod network;
pub(crate) mod node;
pub(crate) mod search;
pub(crate) mod solver;
pub mod spelling;
