//! Quest definitions and the arena that owns them.
//!
//! Boards never own quests directly: they hold [`QuestId`] handles into a
//! per-location [`QuestArena`]. A quest posted on two boards (the patrol
//! quest appears on both the plaza and city-gate boards) is one arena slot
//! referenced twice, so an edit through [`QuestArena::get_mut`] is visible
//! on every board that lists it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Handle to a quest slot in a [`QuestArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestId(pub u32);

impl fmt::Display for QuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// A single quest definition with a fully normalized shape.
///
/// Every optional field is explicitly present: [`Quest::new`] fills them
/// with `None` or an empty collection, and the builder methods set the
/// rest. However sparsely a quest is authored, consumers never see a
/// partially shaped value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    /// Short quest title, unique within a board by convention.
    pub title: String,
    /// Free-text description shown on the board.
    pub description: String,
    /// Name of the place the quest points at, if any.
    pub location: Option<String>,
    /// Prerequisites a character must meet before accepting.
    pub requirements: Vec<String>,
    /// Completion conditions checked on turn-in.
    pub conditions: Vec<String>,
    /// Expected timeline, e.g. "within three days".
    pub timeline: Option<String>,
    /// Known dangers called out on the posting.
    pub risks: Vec<String>,
    /// Reward text, e.g. "12 silver and guild credit".
    pub reward: Option<String>,
    /// Guild that sponsors the posting, if any.
    pub guild: Option<String>,
    /// Reputation granted on completion.
    pub reputation_reward: i32,
    /// Whether the quest can be taken repeatedly.
    pub repeatable: bool,
    /// Whether the board flags the posting as urgent.
    pub high_priority: bool,
    /// Whether the poster requires a check-in before starting.
    pub check_in_required: bool,
}

impl Quest {
    /// The single normalizing constructor: title and description are
    /// required, every other field starts explicitly absent.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            location: None,
            requirements: Vec::new(),
            conditions: Vec::new(),
            timeline: None,
            risks: Vec::new(),
            reward: None,
            guild: None,
            reputation_reward: 0,
            repeatable: false,
            high_priority: false,
            check_in_required: false,
        }
    }

    /// Set the target location name.
    #[must_use]
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Add a prerequisite.
    #[must_use]
    pub fn requires(mut self, requirement: impl Into<String>) -> Self {
        self.requirements.push(requirement.into());
        self
    }

    /// Add a completion condition.
    #[must_use]
    pub fn on_condition(mut self, condition: impl Into<String>) -> Self {
        self.conditions.push(condition.into());
        self
    }

    /// Set the expected timeline.
    #[must_use]
    pub fn within(mut self, timeline: impl Into<String>) -> Self {
        self.timeline = Some(timeline.into());
        self
    }

    /// Add a known risk.
    #[must_use]
    pub fn risk(mut self, risk: impl Into<String>) -> Self {
        self.risks.push(risk.into());
        self
    }

    /// Set the reward text.
    #[must_use]
    pub fn rewarding(mut self, reward: impl Into<String>) -> Self {
        self.reward = Some(reward.into());
        self
    }

    /// Set the sponsoring guild and reputation payout.
    #[must_use]
    pub fn sponsored_by(mut self, guild: impl Into<String>, reputation: i32) -> Self {
        self.guild = Some(guild.into());
        self.reputation_reward = reputation;
        self
    }

    /// Mark the quest repeatable.
    #[must_use]
    pub fn repeatable(mut self) -> Self {
        self.repeatable = true;
        self
    }

    /// Mark the posting urgent.
    #[must_use]
    pub fn urgent(mut self) -> Self {
        self.high_priority = true;
        self
    }

    /// Require a check-in with the poster before starting.
    #[must_use]
    pub fn check_in(mut self) -> Self {
        self.check_in_required = true;
        self
    }
}

/// Owns every quest definition for one location.
///
/// Slots are never freed; a [`QuestId`] stays valid for the arena's
/// lifetime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestArena {
    quests: Vec<Quest>,
}

impl QuestArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move a quest into the arena and return its handle.
    pub fn insert(&mut self, quest: Quest) -> QuestId {
        let id = QuestId(u32::try_from(self.quests.len()).unwrap_or(u32::MAX));
        self.quests.push(quest);
        id
    }

    /// Look up a quest by handle.
    pub fn get(&self, id: QuestId) -> Option<&Quest> {
        self.quests.get(id.0 as usize)
    }

    /// Look up a quest mutably. Edits are seen by every board holding `id`.
    pub fn get_mut(&mut self, id: QuestId) -> Option<&mut Quest> {
        self.quests.get_mut(id.0 as usize)
    }

    /// Number of quest slots allocated.
    pub fn len(&self) -> usize {
        self.quests.len()
    }

    /// Returns true if no quests have been allocated.
    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }

    /// Iterate over all allocated quests with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (QuestId, &Quest)> {
        self.quests
            .iter()
            .enumerate()
            .map(|(i, q)| (QuestId(i as u32), q))
    }
}
