use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::ops::Index;

use crate::node::DieIndex;

/// One die: the set of letters it can show.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Die {
    // as given, for display
    faces: String,
    letters: BTreeSet<char>,
}

impl Die {
    /// Whether this die can supply `letter`.
    #[inline]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }
}

impl From<&str> for Die {
    fn from(faces: &str) -> Self {
        Self {
            faces: faces.to_owned(),
            letters: faces.chars().collect(),
        }
    }
}

impl Display for Die {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.faces)
    }
}

/// An ordered, immutable pool of dice. Build one with a [`DiceBuilder`](crate::builder::DiceBuilder).
///
/// Words are spelled against the pool with [`Self::spell`]; see the [`spelling`](crate::spelling) module.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DicePool {
    dice: Vec<Die>,
}

impl DicePool {
    /// Number of dice in the pool.
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    /// Whether the pool holds no dice at all.
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Dice paired with their indices, in pool order.
    pub fn iter(&self) -> impl Iterator<Item=(DieIndex, &Die)> + '_ {
        self.dice.iter().enumerate()
    }

    /// The die at `index`, if there is one.
    pub fn get(&self, index: DieIndex) -> Option<&Die> {
        self.dice.get(index)
    }
}

impl From<Vec<Die>> for DicePool {
    fn from(dice: Vec<Die>) -> Self {
        Self { dice }
    }
}

impl Index<DieIndex> for DicePool {
    type Output = Die;

    fn index(&self, index: DieIndex) -> &Self::Output {
        &self.dice[index]
    }
}
