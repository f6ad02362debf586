//! The proficiency gain engine.

use hv_core::Character;

use crate::curve::{ProgressionCurve, StandardCurve};
use crate::factor::attribute_factor;

/// Options for a single gathering attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GainOptions {
    /// Whether the attempt succeeded. Defaults to true.
    pub success: bool,
}

impl Default for GainOptions {
    fn default() -> Self {
        Self { success: true }
    }
}

/// Advances a character's per-skill proficiency after an activity attempt.
///
/// Reads the character's current proficiency (untrained skills read as 0)
/// and level, computes the attribute factor, runs the configured
/// [`ProgressionCurve`], and writes the result back on the character.
///
/// Calls against the same character's same skill race on read-modify-write
/// and must be serialized by the caller; distinct characters are
/// independent.
#[derive(Debug, Clone, Default)]
pub struct ProficiencyGainEngine<C: ProgressionCurve = StandardCurve> {
    curve: C,
}

impl<C: ProgressionCurve> ProficiencyGainEngine<C> {
    /// Create an engine around a progression curve.
    pub fn new(curve: C) -> Self {
        Self { curve }
    }

    /// Run one attempt and return the updated proficiency value.
    ///
    /// Total over its domain: an unknown skill key still advances, with a
    /// neutral attribute factor, rather than failing.
    pub fn gain(&self, character: &mut Character, skill: &str, options: GainOptions) -> f64 {
        let current = character.proficiency(skill);
        let factor = attribute_factor(skill, &character.attributes);
        let next = self
            .curve
            .advance(current, character.level.max(1), factor, options.success);
        character.proficiencies.insert(skill.to_string(), next);
        next
    }
}
