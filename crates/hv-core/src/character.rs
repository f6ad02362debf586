//! Characters as consumed by the mechanics layer.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The six core attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// Raw physical power.
    Strength,
    /// Agility and fine motor control.
    Dexterity,
    /// Endurance and resilience.
    Constitution,
    /// Reasoning and learned knowledge.
    Intelligence,
    /// Perception and judgment.
    Wisdom,
    /// Presence and persuasion.
    Charisma,
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strength => write!(f, "STR"),
            Self::Dexterity => write!(f, "DEX"),
            Self::Constitution => write!(f, "CON"),
            Self::Intelligence => write!(f, "INT"),
            Self::Wisdom => write!(f, "WIS"),
            Self::Charisma => write!(f, "CHA"),
        }
    }
}

/// A character's mechanical state, owned by the host application.
///
/// This crate only defines the shape; the mechanics layer reads the
/// attribute block and mutates per-skill proficiency in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    /// Display name.
    pub name: String,
    /// Character level, at least 1.
    pub level: u32,
    /// Per-skill proficiency scores; absent means untrained (0).
    pub proficiencies: HashMap<String, f64>,
    /// Current attribute block; absent attributes read as 0.
    pub attributes: HashMap<Attribute, f64>,
}

impl Character {
    /// Create a level-1 character with no attributes or proficiencies.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: 1,
            proficiencies: HashMap::new(),
            attributes: HashMap::new(),
        }
    }

    /// Set an attribute score.
    #[must_use]
    pub fn attribute(mut self, attribute: Attribute, value: f64) -> Self {
        self.attributes.insert(attribute, value);
        self
    }

    /// Set the character level.
    #[must_use]
    pub fn at_level(mut self, level: u32) -> Self {
        self.level = level.max(1);
        self
    }

    /// Read an attribute, treating absence as 0.
    pub fn attribute_score(&self, attribute: Attribute) -> f64 {
        self.attributes.get(&attribute).copied().unwrap_or(0.0)
    }

    /// Read a proficiency score, treating absence as untrained (0).
    pub fn proficiency(&self, skill: &str) -> f64 {
        self.proficiencies.get(skill).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_attribute_reads_as_zero() {
        let character = Character::new("Maren").attribute(Attribute::Strength, 14.0);
        assert_eq!(character.attribute_score(Attribute::Strength), 14.0);
        assert_eq!(character.attribute_score(Attribute::Constitution), 0.0);
    }

    #[test]
    fn absent_proficiency_reads_as_untrained() {
        let character = Character::new("Maren");
        assert_eq!(character.proficiency("mining"), 0.0);
    }

    #[test]
    fn level_floor_is_one() {
        let character = Character::new("Maren").at_level(0);
        assert_eq!(character.level, 1);
    }
}
