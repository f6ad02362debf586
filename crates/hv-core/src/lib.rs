//! Core types for Hearthvale: the static world-content data model.
//!
//! A world is a list of [`Location`]s. Each location owns a [`QuestArena`]
//! of quest definitions, a [`BoardSet`] of named quest boards that reference
//! arena slots by [`QuestId`], a list of [`Business`]es, and a resolved
//! [`VendorType`]. Characters carry attribute blocks and per-skill
//! proficiency scores consumed by the mechanics layer.

pub mod board;
pub mod business;
pub mod character;
pub mod error;
pub mod location;
pub mod quest;
pub mod vendor;

pub use board::{Board, BoardSet};
pub use business::{Business, BusinessCategory};
pub use character::{Attribute, Character};
pub use error::{HvError, HvResult};
pub use location::{District, Location, find_location};
pub use quest::{Quest, QuestArena, QuestId};
pub use vendor::VendorType;
