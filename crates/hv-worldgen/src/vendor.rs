//! Vendor type resolution.
//!
//! Each record is matched against an explicit ordered rule list; the
//! first matching rule wins and the resulting tag is written back. Rule
//! zero on both paths is "an explicit tag is kept as-is", which makes
//! repeated resolution a no-op.

use hv_core::{Business, BusinessCategory, Location, VendorType};

/// Name terms that mark a business as street-trade only.
const STREET_ONLY_TERMS: &[&str] = &[
    "market",
    "plaza",
    "square",
    "row",
    "arcade",
    "promenade",
    "roadside",
    "boardwalk",
    "bazaar",
    "stall",
];

/// Name terms that mark a business as having no vendors at all.
const NO_VENDOR_TERMS: &[&str] = &[
    "wharf",
    "warehouse",
    "yard",
    "naval",
    "barracks",
    "guard",
    "temple",
    "shrine",
    "monastery",
    "academy",
    "keep",
    "hall",
    "exchange",
    "office",
    "arena",
    "court",
];

/// Location name terms for high-security grounds with no trade.
const HIGH_SECURITY_TERMS: &[&str] = &[
    "keep",
    "citadel",
    "fort",
    "barracks",
    "naval",
    "guard",
    "temple",
    "shrine",
    "monastery",
    "academy",
];

/// Location name terms for market, civic, and transit areas.
const OPEN_AIR_TERMS: &[&str] = &[
    "market", "plaza", "ward", "district", "farmland", "docks", "harbor", "port", "road",
];

/// Case-insensitive substring scan. Empty names match nothing.
fn matches_any(name: &str, terms: &[&str]) -> bool {
    let lower = name.to_lowercase();
    terms.iter().any(|term| lower.contains(term))
}

fn name_is_street_only(business: &Business) -> bool {
    matches_any(&business.name, STREET_ONLY_TERMS)
}

fn name_is_no_vendor(business: &Business) -> bool {
    matches_any(&business.name, NO_VENDOR_TERMS)
}

fn category_forbids_vendors(business: &Business) -> bool {
    matches!(
        business.category,
        BusinessCategory::Logistics | BusinessCategory::Security
    )
}

fn name_is_high_security(location: &Location) -> bool {
    matches_any(&location.name, HIGH_SECURITY_TERMS)
}

fn name_is_open_air(location: &Location) -> bool {
    matches_any(&location.name, OPEN_AIR_TERMS)
}

/// Ordered business rules; evaluated in sequence, first match wins.
const BUSINESS_RULES: &[(fn(&Business) -> bool, VendorType)] = &[
    (name_is_street_only, VendorType::Street),
    (name_is_no_vendor, VendorType::None),
    (category_forbids_vendors, VendorType::None),
];

/// Every business not caught by a rule is a proper storefront.
const BUSINESS_DEFAULT: VendorType = VendorType::Shop;

/// Ordered location rules; evaluated in sequence, first match wins.
const LOCATION_RULES: &[(fn(&Location) -> bool, VendorType)] = &[
    (name_is_high_security, VendorType::None),
    (name_is_open_air, VendorType::Street),
];

/// Unmatched locations default to informal street trade.
const LOCATION_DEFAULT: VendorType = VendorType::Street;

fn first_match<T>(record: &T, rules: &[(fn(&T) -> bool, VendorType)], default: VendorType) -> VendorType {
    rules
        .iter()
        .find(|(predicate, _)| predicate(record))
        .map(|&(_, tag)| tag)
        .unwrap_or(default)
}

/// Resolve a business's vendor tag, writing it back on the record.
///
/// An already-tagged record is returned unchanged, so resolution is
/// idempotent. Total: every business receives one of the three tags.
pub fn resolve_business(business: &mut Business) -> VendorType {
    if let Some(tag) = business.vendor {
        return tag;
    }
    let tag = first_match(business, BUSINESS_RULES, BUSINESS_DEFAULT);
    business.vendor = Some(tag);
    tag
}

/// Resolve a location's vendor tag, writing it back on the record.
///
/// Same shape as [`resolve_business`]: explicit tags are kept, unmatched
/// names fall to the street default.
pub fn resolve_location(location: &mut Location) -> VendorType {
    if let Some(tag) = location.vendor {
        return tag;
    }
    let tag = first_match(location, LOCATION_RULES, LOCATION_DEFAULT);
    location.vendor = Some(tag);
    tag
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn street_name_beats_category() {
        let mut business = Business::new("Quayside Greens Market", BusinessCategory::Logistics);
        assert_eq!(resolve_business(&mut business), VendorType::Street);
        assert_eq!(business.vendor, Some(VendorType::Street));
    }

    #[test]
    fn category_fallback_forces_none() {
        // Name matches neither term list; logistics category applies.
        let mut business = Business::new("Harborwatch Trading House", BusinessCategory::Logistics);
        assert_eq!(resolve_business(&mut business), VendorType::None);
    }

    #[test]
    fn no_vendor_name_wins_over_shop_default() {
        let mut business = Business::new("Grain Exchange", BusinessCategory::Provisioner);
        assert_eq!(resolve_business(&mut business), VendorType::None);
    }

    #[test]
    fn unmatched_business_defaults_to_shop() {
        let mut business = Business::new("The Gilded Anvil", BusinessCategory::Crafthall);
        assert_eq!(resolve_business(&mut business), VendorType::Shop);
    }

    #[test]
    fn explicit_tag_is_kept() {
        let mut business = Business::new("Quayside Greens Market", BusinessCategory::Provisioner);
        business.vendor = Some(VendorType::None);
        assert_eq!(resolve_business(&mut business), VendorType::None);
    }

    #[test]
    fn resolution_is_idempotent() {
        let mut business = Business::new("Harborwatch Trading House", BusinessCategory::Logistics);
        let first = resolve_business(&mut business);
        let second = resolve_business(&mut business);
        assert_eq!(first, second);

        let mut location = Location::new("Greyfall Keep", "");
        let first = resolve_location(&mut location);
        let second = resolve_location(&mut location);
        assert_eq!(first, second);
    }

    #[test]
    fn high_security_location_gets_none() {
        let mut location = Location::new("Greyfall Keep", "");
        assert_eq!(resolve_location(&mut location), VendorType::None);
    }

    #[test]
    fn open_air_location_gets_street() {
        let mut location = Location::new("Saltmere Harbor Ward", "");
        assert_eq!(resolve_location(&mut location), VendorType::Street);
    }

    #[test]
    fn unmatched_location_defaults_to_street() {
        let mut location = Location::new("Stonecrest Town", "");
        assert_eq!(resolve_location(&mut location), VendorType::Street);
    }

    #[test]
    fn empty_name_falls_to_default() {
        let mut business = Business::new("", BusinessCategory::Tavern);
        assert_eq!(resolve_business(&mut business), VendorType::Shop);
        let mut location = Location::new("", "");
        assert_eq!(resolve_location(&mut location), VendorType::Street);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let mut business = Business::new("NIGHT BAZAAR", BusinessCategory::Provisioner);
        assert_eq!(resolve_business(&mut business), VendorType::Street);
    }
}
