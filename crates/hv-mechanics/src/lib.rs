//! Gathering mechanics for Hearthvale.
//!
//! Maps a character's attribute block to a bounded progression factor,
//! and advances per-skill proficiency through a pluggable
//! [`ProgressionCurve`]. Every function here is deterministic and total:
//! unknown skills degrade to a neutral factor instead of failing.

pub mod curve;
pub mod engine;
pub mod factor;

pub use curve::{ProgressionCurve, StandardCurve};
pub use engine::{GainOptions, ProficiencyGainEngine};
pub use factor::{FACTOR_MAX, FACTOR_MIN, FACTOR_SLOPE, attribute_factor, attribute_pair};
