//! Construction of a [`DicePool`](crate::DicePool).

use crate::dice::{DicePool, Die};
use crate::node::DieIndex;

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum BuilderInvalidReason {
    /// A die was added with no letters on it.
    #[error("die {0} has no letters")]
    EmptyDie(DieIndex),
}

/// Accumulates dice in order; each die's index is its insertion order.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
#[derive(Clone, Default)]
pub struct DiceBuilder {
    dice: Vec<Die>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl DiceBuilder {
    /// Construct an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a die showing each character of `letters`. Repeated characters are accepted and collapse into one face.
    ///
    /// May cause the builder to enter an [`EmptyDie`](BuilderInvalidReason::EmptyDie) invalid state if `letters` is empty.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_die(&mut self, letters: &str) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if letters.is_empty() {
            self.invalid_reasons.push(BuilderInvalidReason::EmptyDie(self.dice.len()));
            return self;
        }

        self.dice.push(Die::from(letters));
        self
    }

    /// Shorthand for multiple calls to [`Self::add_die`], with the same conditions.
    pub fn add_dice<'a>(&mut self, dice: impl IntoIterator<Item=&'a str>) -> &mut Self {
        for letters in dice {
            self.add_die(letters);
        }

        self
    }

    /// Remove the most recently added die.
    ///
    /// If the builder is in an invalid state or no dice are present, this function does nothing.
    pub fn pop_die(&mut self) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        self.dice.pop();
        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`DicePool`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<DicePool, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        Ok(DicePool::from(self.dice.clone()))
    }
}
