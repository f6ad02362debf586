//! Locations: the top-level unit of world content.

use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardSet};
use crate::business::Business;
use crate::error::{HvError, HvResult};
use crate::quest::{Quest, QuestArena, QuestId};
use crate::vendor::VendorType;

/// Population information for one district of a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    /// Resident head count.
    pub population: u32,
    /// Authored flavor notes about the district.
    pub notes: String,
}

impl District {
    /// Create a district record.
    pub fn new(population: u32, notes: impl Into<String>) -> Self {
        Self {
            population,
            notes: notes.into(),
        }
    }
}

/// A place in the world: a town, ward, or landmark.
///
/// Created once at load time from the content tables, then mutated exactly
/// once by each derivation pass: vendor resolution writes `vendor`, board
/// assembly fills `boards` and `quests` and sets `boards_assembled`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    /// Display name of the location.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Building names, in authored order.
    pub buildings: Vec<String>,
    /// District name and population info, in authored order.
    pub districts: Vec<(String, District)>,
    /// Named quest boards; keys unique, insertion-ordered.
    pub boards: BoardSet,
    /// Flat list of every posted quest, filled by board assembly.
    pub quests: Vec<QuestId>,
    /// Businesses operating here.
    pub businesses: Vec<Business>,
    /// Resolved vendor tag; `None` until the resolution pass runs.
    pub vendor: Option<VendorType>,
    /// Owns every quest definition referenced by this location's boards.
    pub arena: QuestArena,
    /// Set by the assembler; guards against a second assembly pass.
    pub boards_assembled: bool,
}

impl Location {
    /// Create a location with empty boards, arena, and business list.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            buildings: Vec::new(),
            districts: Vec::new(),
            boards: BoardSet::new(),
            quests: Vec::new(),
            businesses: Vec::new(),
            vendor: None,
            arena: QuestArena::new(),
            boards_assembled: false,
        }
    }

    /// Add a building name.
    #[must_use]
    pub fn building(mut self, name: impl Into<String>) -> Self {
        self.buildings.push(name.into());
        self
    }

    /// Add a district record.
    #[must_use]
    pub fn district(mut self, name: impl Into<String>, district: District) -> Self {
        self.districts.push((name.into(), district));
        self
    }

    /// Add a business.
    #[must_use]
    pub fn with_business(mut self, business: Business) -> Self {
        self.businesses.push(business);
        self
    }

    /// Look up a board by exact name.
    pub fn board(&self, name: &str) -> HvResult<&Board> {
        self.boards
            .get(name)
            .ok_or_else(|| HvError::BoardNotFound(name.to_string()))
    }

    /// Find a posted quest by title, case-insensitively.
    ///
    /// Scans the flat quest list, so only quests already placed by board
    /// assembly are found.
    pub fn posted_quest(&self, title: &str) -> HvResult<&Quest> {
        let lower = title.to_lowercase();
        self.quests
            .iter()
            .filter_map(|&id| self.arena.get(id))
            .find(|quest| quest.title.to_lowercase() == lower)
            .ok_or_else(|| HvError::QuestNotFound(title.to_string()))
    }
}

/// Case-insensitive location lookup over a loaded world.
pub fn find_location<'a>(world: &'a [Location], name: &str) -> HvResult<&'a Location> {
    let lower = name.to_lowercase();
    world
        .iter()
        .find(|location| location.name.to_lowercase() == lower)
        .ok_or_else(|| HvError::LocationNotFound(name.to_string()))
}
