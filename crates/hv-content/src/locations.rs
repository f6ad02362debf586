//! The authored location tables.

use hv_core::{Business, BusinessCategory, District, Location, Quest};

/// Stonecrest Town: a quarry town in the hills.
pub fn stonecrest_town() -> Location {
    Location::new(
        "Stonecrest Town",
        "A quarry town strung along a switchback road, grey stone and slate \
         roofs, dust on everything by noon.",
    )
    .building("Crystal Court Plaza")
    .building("Iron Key Smithy")
    .building("The Split Shingle Sawyers")
    .building("Cartographers' Guild")
    .district(
        "Old Quarter",
        District::new(420, "the original settlement around the first quarry head"),
    )
    .district(
        "Terrace Row",
        District::new(610, "stepped housing cut into the hillside"),
    )
    .with_business(
        Business::new("The Gilded Anvil", BusinessCategory::Crafthall)
            .posting(
                Quest::new(
                    "Sharpen stock",
                    "A crate of dull blades came back from the quarry crews.",
                )
                .rewarding("5 silver"),
            )
            .posting(
                Quest::new(
                    "Mind the forge",
                    "One evening shift while the smith attends the assay office.",
                )
                .requires("steady hands around heat"),
            ),
    )
    .with_business(Business::new("Stonecrest Provisioners", BusinessCategory::Provisioner))
    .with_business(Business::new("The Dusty Flagon", BusinessCategory::Tavern))
}

/// Saltmere Harbor Ward: wharves, fish markets, and warehouses.
pub fn saltmere_harbor_ward() -> Location {
    Location::new(
        "Saltmere Harbor Ward",
        "Wharves, drying racks, and fish markets pressed between the sea \
         wall and the customs houses.",
    )
    .building("Tidewood Carvers' Hall")
    .building("The Brine Alchemist")
    .building("Seawatch Enchantery")
    .district(
        "Netting Row",
        District::new(310, "rope-walks and net-menders' sheds"),
    )
    .district(
        "The Shambles",
        District::new(840, "close-built lodging for crews between sailings"),
    )
    .with_business(
        Business::new("Harborwatch Trading House", BusinessCategory::Logistics).posting(
            Quest::new(
                "Tally the night manifests",
                "Three ships came in after dark; the ledgers are behind.",
            )
            .rewarding("6 silver")
            .within("before the morning tide"),
        ),
    )
    .with_business(Business::new("Quayside Greens Market", BusinessCategory::Provisioner))
    .with_business(
        Business::new("Mooring Chain Escorts", BusinessCategory::Security).posting(
            Quest::new(
                "Walk a purser home",
                "A purser carrying wages wants company past the Shambles.",
            )
            .risk("cutpurses work the fog")
            .rewarding("8 silver"),
        ),
    )
}

/// Lantern Hill: a temple precinct above the town.
pub fn lantern_hill() -> Location {
    Location::new(
        "Lantern Hill Temple Rise",
        "A stepped precinct of shrines and bell towers above the lowland \
         fog, lamps lit from dusk to dawn.",
    )
    .building("Votive Carvers' Workshop")
    .building("Lantern Wardens' Guild")
    .district(
        "Pilgrim Terrace",
        District::new(150, "rest-houses for walkers of the lamp road"),
    )
    .with_business(Business::new("Wick and Wax Provisioners", BusinessCategory::Provisioner))
}

/// The full authored world, in load order.
pub fn world() -> Vec<Location> {
    vec![stonecrest_town(), saltmere_harbor_ward(), lantern_hill()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use hv_core::VendorType;
    use hv_worldgen::initialize;

    #[test]
    fn authored_world_initializes_cleanly() {
        let mut world = world();
        initialize(&mut world).unwrap();
        for location in &world {
            assert!(location.vendor.is_some());
            assert!(location.boards_assembled);
            assert!(!location.quests.is_empty());
            for business in &location.businesses {
                assert!(business.vendor.is_some());
            }
        }
    }

    #[test]
    fn vendor_tags_are_as_authored_names_imply() {
        let mut world = world();
        initialize(&mut world).unwrap();
        // "Temple" in the name: high-security, no trade.
        let temple = &world[2];
        assert_eq!(temple.vendor, Some(VendorType::None));
        // "Harbor Ward": open-air street trade.
        assert_eq!(world[1].vendor, Some(VendorType::Street));
    }

    #[test]
    fn authored_business_boards_survive_assembly() {
        let mut world = world();
        initialize(&mut world).unwrap();
        let town = &world[0];
        let board = town.boards.get("The Gilded Anvil Quest Board").unwrap();
        assert_eq!(board.quests.len(), 2);
    }

    #[test]
    fn building_scan_matches_expected_trades() {
        let mut world = world();
        initialize(&mut world).unwrap();
        let town = &world[0];
        assert!(town.boards.contains("Iron Key Smithy Quest Board"));
        assert!(town.boards.contains("The Split Shingle Sawyers Quest Board"));
        assert!(town.boards.contains("Cartographers' Guild Quest Board"));
        assert!(!town.boards.contains("Crystal Court Plaza Quest Board"));

        let ward = &world[1];
        assert!(ward.boards.contains("The Brine Alchemist Quest Board"));
        assert!(ward.boards.contains("Seawatch Enchantery Quest Board"));
    }
}
