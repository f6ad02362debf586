//! The attribute factor model.
//!
//! Each gathering skill draws on a fixed primary/secondary attribute
//! pair. The factor is a linear function of the pair's average, clamped
//! to `[FACTOR_MIN, FACTOR_MAX]`, so zero-attribute characters still
//! progress and very high attributes cannot scale without bound.

use std::collections::HashMap;

use hv_core::Attribute;

/// Floor of the attribute factor; also the value at an all-zero block.
pub const FACTOR_MIN: f64 = 0.5;

/// Ceiling of the attribute factor.
pub const FACTOR_MAX: f64 = 1.5;

/// Factor gained per point of averaged attribute score.
pub const FACTOR_SLOPE: f64 = 0.05;

/// Primary/secondary attribute pair for every known gathering skill.
const SKILL_ATTRIBUTES: &[(&str, Attribute, Attribute)] = &[
    ("mining", Attribute::Strength, Attribute::Constitution),
    ("logging", Attribute::Strength, Attribute::Dexterity),
    ("herbalism", Attribute::Intelligence, Attribute::Wisdom),
    ("fishing", Attribute::Dexterity, Attribute::Wisdom),
    ("skinning", Attribute::Dexterity, Attribute::Constitution),
    ("quarrying", Attribute::Strength, Attribute::Constitution),
];

/// Look up the attribute pair a skill draws on.
pub fn attribute_pair(skill: &str) -> Option<(Attribute, Attribute)> {
    SKILL_ATTRIBUTES
        .iter()
        .find(|(name, _, _)| *name == skill)
        .map(|&(_, primary, secondary)| (primary, secondary))
}

/// Compute the bounded progression factor for a skill.
///
/// Missing attributes are treated as 0. An unknown skill yields a neutral
/// factor of exactly 1.
pub fn attribute_factor(skill: &str, attributes: &HashMap<Attribute, f64>) -> f64 {
    let Some((primary, secondary)) = attribute_pair(skill) else {
        return 1.0;
    };
    let score = |attribute: Attribute| attributes.get(&attribute).copied().unwrap_or(0.0);
    let avg = (score(primary) + score(secondary)) / 2.0;
    (FACTOR_MIN + FACTOR_SLOPE * avg).clamp(FACTOR_MIN, FACTOR_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(pairs: &[(Attribute, f64)]) -> HashMap<Attribute, f64> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn mining_factor_matches_formula() {
        let attrs = block(&[
            (Attribute::Strength, 20.0),
            (Attribute::Constitution, 10.0),
        ]);
        // avg 15, raw 0.5 + 0.05 * 15 = 1.25, inside the bounds
        assert_eq!(attribute_factor("mining", &attrs), 1.25);
        // pure function: same inputs, same output
        assert_eq!(attribute_factor("mining", &attrs), 1.25);
    }

    #[test]
    fn missing_attributes_read_as_zero() {
        let attrs = block(&[(Attribute::Strength, 10.0)]);
        // CON absent: avg 5, raw 0.75
        assert_eq!(attribute_factor("mining", &attrs), 0.75);
        assert_eq!(attribute_factor("mining", &HashMap::new()), FACTOR_MIN);
    }

    #[test]
    fn factor_is_capped() {
        let attrs = block(&[
            (Attribute::Strength, 90.0),
            (Attribute::Constitution, 90.0),
        ]);
        assert_eq!(attribute_factor("mining", &attrs), FACTOR_MAX);
    }

    #[test]
    fn unknown_skill_is_neutral() {
        let attrs = block(&[(Attribute::Strength, 20.0)]);
        assert_eq!(attribute_factor("basket_weaving", &attrs), 1.0);
    }

    #[test]
    fn every_known_skill_has_a_pair() {
        for &(skill, _, _) in SKILL_ATTRIBUTES {
            assert!(attribute_pair(skill).is_some());
        }
        assert!(attribute_pair("").is_none());
    }

    proptest::proptest! {
        #[test]
        fn factor_stays_in_bounds(
            str_score in 0.0f64..200.0,
            con_score in 0.0f64..200.0,
        ) {
            let attrs = block(&[
                (Attribute::Strength, str_score),
                (Attribute::Constitution, con_score),
            ]);
            let factor = attribute_factor("mining", &attrs);
            proptest::prop_assert!((FACTOR_MIN..=FACTOR_MAX).contains(&factor));
        }
    }
}
