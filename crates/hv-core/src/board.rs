//! Named quest boards and the insertion-ordered set that holds them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::quest::QuestId;

/// A named board: an ordered sequence of quest handles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Board name, unique within a [`BoardSet`].
    pub name: String,
    /// Quests posted on the board, in posting order.
    pub quests: Vec<QuestId>,
}

/// An insertion-ordered map of board name to board.
///
/// Keys are unique; inserting under an existing name appends to that
/// board's quest list instead of creating a duplicate entry. Iteration
/// yields boards in the order their names were first seen, which makes
/// the assembler's flatten step deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Board>", into = "Vec<Board>")]
pub struct BoardSet {
    entries: Vec<Board>,
    index: HashMap<String, usize>,
}

impl From<Vec<Board>> for BoardSet {
    fn from(entries: Vec<Board>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(pos, board)| (board.name.clone(), pos))
            .collect();
        Self { entries, index }
    }
}

impl From<BoardSet> for Vec<Board> {
    fn from(set: BoardSet) -> Self {
        set.entries
    }
}

impl BoardSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure a board exists under `name`, appending `quests` to it.
    ///
    /// Merge-by-append: an existing board keeps its quests and gains the
    /// new ones at the end; an absent name creates a fresh board.
    pub fn ensure(&mut self, name: impl Into<String>, quests: Vec<QuestId>) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&pos) => self.entries[pos].quests.extend(quests),
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push(Board { name, quests });
            }
        }
    }

    /// Returns true if a board with this exact name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Look up a board by name.
    pub fn get(&self, name: &str) -> Option<&Board> {
        self.index.get(name).map(|&pos| &self.entries[pos])
    }

    /// Number of boards.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the set holds no boards.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over boards in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Board> {
        self.entries.iter()
    }
}
