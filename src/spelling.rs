//! Turning a converged flow into a verdict for one word.

use log::debug;

use crate::dice::DicePool;
use crate::network::FlowNetwork;
use crate::node::DieIndex;
use crate::solver::{EdmondsKarp, FlowOutcome};

/// The verdict for one word.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Spelling {
    /// The die used for each letter, left to right. No die appears twice.
    Spelled(Vec<DieIndex>),
    /// No assignment of distinct dice covers every letter.
    Unspellable,
}

impl Spelling {
    /// Whether the word could be spelled.
    pub fn is_spelled(&self) -> bool {
        matches!(self, Spelling::Spelled(_))
    }

    /// Interpret a converged flow for a word of `word_len` letters.
    ///
    /// Only a flow saturating every letter counts; a partial assignment is discarded.
    pub fn from_outcome(outcome: FlowOutcome, word_len: usize) -> Self {
        if outcome.flow as usize != word_len {
            return Spelling::Unspellable;
        }

        // full flow crosses every letter node, so each slot was written at least once
        debug_assert!(outcome.assignment.iter().all(Option::is_some), "saturating flow left a letter unassigned");
        Spelling::Spelled(outcome.assignment.into_iter().flatten().collect())
    }
}

impl DicePool {
    /// Spell `word` with this pool, using each die at most once.
    ///
    /// A fresh [`FlowNetwork`] is built for every call; nothing carries over between words.
    pub fn spell(&self, word: &str) -> Spelling {
        let network = FlowNetwork::build(self, word);
        let word_len = network.word_len();
        let spelling = Spelling::from_outcome(EdmondsKarp::from(network).run(), word_len);

        debug!("{:?}: {:?}", word, spelling);
        spelling
    }

    /// [`Self::spell`] each of `words`, in order.
    pub fn spell_all<'w>(&self, words: impl IntoIterator<Item=&'w str>) -> Vec<Spelling> {
        words.into_iter().map(|word| self.spell(word)).collect()
    }
}
