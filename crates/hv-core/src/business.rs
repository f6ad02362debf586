//! Businesses: named establishments attached to a location.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::quest::Quest;
use crate::vendor::VendorType;

/// The fixed category set for businesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessCategory {
    /// Food, drink, and lodging.
    Tavern,
    /// General goods and supplies.
    Provisioner,
    /// Smithies, carpenters, and other makers.
    Crafthall,
    /// Herbs, remedies, and alchemical wares.
    Apothecary,
    /// Shipping, warehousing, and caravans.
    Logistics,
    /// Guards, wardens, and escorts for hire.
    Security,
}

impl fmt::Display for BusinessCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tavern => write!(f, "tavern"),
            Self::Provisioner => write!(f, "provisioner"),
            Self::Crafthall => write!(f, "crafthall"),
            Self::Apothecary => write!(f, "apothecary"),
            Self::Logistics => write!(f, "logistics"),
            Self::Security => write!(f, "security"),
        }
    }
}

/// A named establishment within a location.
///
/// Business quests are authored directly by the content tables, never
/// generated; the world-init pass moves them into the owning location's
/// arena and posts them on a board named after the business.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Business {
    /// Display name of the business.
    pub name: String,
    /// Which trade the business belongs to.
    pub category: BusinessCategory,
    /// Resolved vendor tag; `None` until the resolution pass runs.
    pub vendor: Option<VendorType>,
    /// Quests authored alongside the business.
    pub quests: Vec<Quest>,
}

impl Business {
    /// Create a business with no vendor tag and no quests.
    pub fn new(name: impl Into<String>, category: BusinessCategory) -> Self {
        Self {
            name: name.into(),
            category,
            vendor: None,
            quests: Vec::new(),
        }
    }

    /// Author a quest on this business's own board.
    #[must_use]
    pub fn posting(mut self, quest: Quest) -> Self {
        self.quests.push(quest);
        self
    }
}
