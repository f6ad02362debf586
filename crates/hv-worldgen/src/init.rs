//! The world-initialization pass.

use hv_core::{Location, QuestId};

use crate::boards::assemble_boards;
use crate::error::WorldGenResult;
use crate::vendor::{resolve_business, resolve_location};

/// Install each business's authored quests as a board on its location.
///
/// Quests are copied into the location's arena and posted on a board named
/// "`<business>` Quest Board"; the business keeps its authored list. Runs
/// before board assembly so the assembler's skip-if-present rule protects
/// these boards.
fn install_business_boards(location: &mut Location) {
    let mut businesses = std::mem::take(&mut location.businesses);
    for business in &mut businesses {
        resolve_business(business);
        if business.quests.is_empty() {
            continue;
        }
        let ids: Vec<QuestId> = business
            .quests
            .iter()
            .cloned()
            .map(|quest| location.arena.insert(quest))
            .collect();
        location
            .boards
            .ensure(format!("{} Quest Board", business.name), ids);
    }
    location.businesses = businesses;
}

/// Run both derivation passes over every location, once, at load time.
///
/// Per location: resolve the location's vendor tag, resolve and install
/// each business, then assemble the quest boards. After this returns, every
/// location and business carries a vendor tag and every location's board
/// set and flat quest list are final.
pub fn initialize(world: &mut [Location]) -> WorldGenResult<()> {
    for location in world.iter_mut() {
        resolve_location(location);
        install_business_boards(location);
        assemble_boards(location)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hv_core::{Business, BusinessCategory, District, Quest, VendorType};

    fn port_ward() -> Location {
        Location::new("Saltmere Harbor Ward", "Wharves and fish markets.")
            .building("Tidewood Carvers' Hall")
            .district("Netting Row", District::new(310, "rope-walks and drying racks"))
            .with_business(
                Business::new("Harborwatch Trading House", BusinessCategory::Logistics)
                    .posting(Quest::new(
                        "Tally the night manifests",
                        "Three ships came in after dark; the ledgers are behind.",
                    )),
            )
            .with_business(Business::new(
                "Quayside Greens Market",
                BusinessCategory::Provisioner,
            ))
    }

    #[test]
    fn initialize_resolves_every_record() {
        let mut world = vec![port_ward(), Location::new("Greyfall Keep", "")];
        initialize(&mut world).unwrap();
        for location in &world {
            assert!(location.vendor.is_some());
            assert!(location.boards_assembled);
            for business in &location.businesses {
                assert!(business.vendor.is_some());
            }
        }
        assert_eq!(world[0].vendor, Some(VendorType::Street));
        assert_eq!(world[1].vendor, Some(VendorType::None));
    }

    #[test]
    fn business_board_is_installed_and_protected() {
        let mut world = vec![port_ward()];
        initialize(&mut world).unwrap();
        let ward = &world[0];

        let board = ward
            .boards
            .get("Harborwatch Trading House Quest Board")
            .unwrap();
        assert_eq!(board.quests.len(), 1);
        assert_eq!(
            ward.arena.get(board.quests[0]).unwrap().title,
            "Tally the night manifests"
        );
        // A business without postings gets no board.
        assert!(!ward.boards.contains("Quayside Greens Market Quest Board"));
    }

    #[test]
    fn business_vendor_tags_follow_the_rules() {
        let mut world = vec![port_ward()];
        initialize(&mut world).unwrap();
        let ward = &world[0];
        assert_eq!(ward.businesses[0].vendor, Some(VendorType::None));
        assert_eq!(ward.businesses[1].vendor, Some(VendorType::Street));
    }

    #[test]
    fn authored_business_quests_survive_on_the_business() {
        let mut world = vec![port_ward()];
        initialize(&mut world).unwrap();
        assert_eq!(world[0].businesses[0].quests.len(), 1);
    }

    #[test]
    fn flat_quests_include_business_postings() {
        let mut world = vec![port_ward()];
        initialize(&mut world).unwrap();
        let ward = &world[0];
        let titles: Vec<&str> = ward
            .quests
            .iter()
            .map(|&id| ward.arena.get(id).unwrap().title.as_str())
            .collect();
        assert!(titles.contains(&"Tally the night manifests"));
        assert!(titles.contains(&"Patrol the main road"));
        assert!(titles.contains(&"Assist Netting Row locals"));
        assert!(titles.contains(&"Harvest straight timber"));
    }

    #[test]
    fn second_initialize_is_rejected() {
        let mut world = vec![port_ward()];
        initialize(&mut world).unwrap();
        assert!(initialize(&mut world).is_err());
    }
}
