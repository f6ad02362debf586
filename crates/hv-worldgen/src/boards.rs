//! Quest board assembly.
//!
//! Folds a location's pre-existing boards (per-business boards installed
//! by the init pass) together with three canonical boards, one board per
//! district, and keyword-matched building boards, then flattens the whole
//! board set into the location's flat quest list.
//!
//! Canonical and district boards merge-by-append when a board with the
//! same name already exists; building boards instead skip the building
//! entirely on a name collision. The asymmetry is deliberate: a building
//! board that already exists was authored by a business and keeps its
//! authored content.

use hv_core::{Location, Quest, QuestId};

use crate::error::{WorldGenError, WorldGenResult};

/// A trade recognized by the building-name scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trade {
    Smith,
    Woodwright,
    Alchemist,
    Enchanter,
    Guild,
}

/// Keyword groups in priority order; the first group containing a term of
/// the building name decides its trade.
const TRADE_GROUPS: &[(&[&str], Trade)] = &[
    (&["smith", "forge", "anvil", "ironwork"], Trade::Smith),
    (
        &["carpenter", "carver", "fletcher", "sawyer", "woodwork"],
        Trade::Woodwright,
    ),
    (&["alchem", "apothecary", "elixir"], Trade::Alchemist),
    (&["enchant", "arcan", "rune"], Trade::Enchanter),
    (&["guild"], Trade::Guild),
];

fn trade_of(building: &str) -> Option<Trade> {
    let lower = building.to_lowercase();
    TRADE_GROUPS
        .iter()
        .find(|(terms, _)| terms.iter().any(|term| lower.contains(term)))
        .map(|&(_, trade)| trade)
}

fn stall_setup_quest(location: &str) -> Quest {
    Quest::new(
        "Set up a market stall",
        "Raise and stock a stall before the morning crowd arrives.",
    )
    .at(location)
    .rewarding("8 silver")
}

fn patrol_quest() -> Quest {
    Quest::new(
        "Patrol the main road",
        "Walk the main road at dusk and report anything out of place.",
    )
    .repeatable()
    .urgent()
    .rewarding("5 silver per circuit")
}

fn prototype_blade_quest() -> Quest {
    Quest::new(
        "Test a prototype blade",
        "Field-test a newly forged blade and note how the edge holds.",
    )
    .check_in()
    .requires("some skill at arms")
}

fn herb_collection_quest() -> Quest {
    Quest::new(
        "Gather chapel herbs",
        "Collect a basket of feverleaf for the infirmary stores.",
    )
    .rewarding("the church's gratitude and 4 silver")
}

fn escort_quest() -> Quest {
    Quest::new(
        "Escort a departing caravan",
        "See a merchant caravan safely past the far milestone.",
    )
    .risk("bandits on the high road")
    .rewarding("12 silver")
}

fn district_quest(district: &str) -> Quest {
    Quest::new(
        format!("Assist {district} locals"),
        format!("Lend a hand with odd jobs around {district} for a day."),
    )
    .rewarding("6 silver")
}

fn iron_ore_quest() -> Quest {
    Quest::new(
        "Gather iron ore",
        "Bring a sack of workable ore up from the near seam.",
    )
    .on_condition("ore assayed at the counter")
    .rewarding("10 silver")
}

fn timber_quest() -> Quest {
    Quest::new(
        "Harvest straight timber",
        "Fell and trim a load of straight-grained timber.",
    )
    .rewarding("9 silver")
}

fn rare_herb_quest() -> Quest {
    Quest::new(
        "Collect rare herbs",
        "Gather moonpetal from the shaded banks upstream.",
    )
    .risk("the banks are slick after rain")
    .rewarding("11 silver")
}

fn arcane_crystal_quest() -> Quest {
    Quest::new(
        "Recover arcane crystals",
        "Pry loose a handful of charged crystals from the old workings.",
    )
    .risk("residual wards")
    .rewarding("14 silver")
}

fn building_assist_quest(building: &str) -> Quest {
    Quest::new(
        format!("Assist {building}"),
        format!("The members of {building} need a spare pair of hands."),
    )
    .rewarding("7 silver")
}

/// Assemble a location's quest boards, mutating it in place.
///
/// Runs exactly once per location: a second call returns
/// [`WorldGenError::AlreadyAssembled`] and leaves the location untouched.
/// After the pass, board keys are unique, the patrol quest is the same
/// arena slot on the plaza and city-gate boards, and the flat quest list
/// holds every posted quest in board insertion order.
pub fn assemble_boards(location: &mut Location) -> WorldGenResult<()> {
    if location.boards_assembled {
        return Err(WorldGenError::AlreadyAssembled(location.name.clone()));
    }

    // Canonical boards. The patrol and prototype-blade quests are single
    // arena slots shared across boards, not copies.
    let stall = location.arena.insert(stall_setup_quest(&location.name));
    let patrol = location.arena.insert(patrol_quest());
    let blade = location.arena.insert(prototype_blade_quest());
    let herbs = location.arena.insert(herb_collection_quest());
    let escort = location.arena.insert(escort_quest());

    location
        .boards
        .ensure("Town Plaza Quest Board", vec![stall, patrol, blade]);
    location.boards.ensure("Church Quest Board", vec![herbs]);
    location
        .boards
        .ensure("City Gate Quest Board", vec![escort, patrol]);

    // One board per district, in authored order.
    let districts: Vec<String> = location.districts.iter().map(|(name, _)| name.clone()).collect();
    for district in &districts {
        let assist = location.arena.insert(district_quest(district));
        location
            .boards
            .ensure(format!("{district} Quest Board"), vec![assist]);
    }

    // Keyword-matched building boards. Skip-if-present, no merge.
    let buildings = location.buildings.clone();
    for building in &buildings {
        let Some(trade) = trade_of(building) else {
            continue;
        };
        let board_name = format!("{building} Quest Board");
        if location.boards.contains(&board_name) {
            continue;
        }
        let quests: Vec<QuestId> = match trade {
            Trade::Smith => vec![location.arena.insert(iron_ore_quest()), blade],
            Trade::Woodwright => vec![location.arena.insert(timber_quest())],
            Trade::Alchemist => vec![location.arena.insert(rare_herb_quest())],
            Trade::Enchanter => vec![location.arena.insert(arcane_crystal_quest())],
            Trade::Guild => vec![location.arena.insert(building_assist_quest(building))],
        };
        location.boards.ensure(board_name, quests);
    }

    // Flatten the full board set, pre-existing boards included.
    let flat: Vec<QuestId> = location
        .boards
        .iter()
        .flat_map(|board| board.quests.iter().copied())
        .collect();
    location.quests.extend(flat);
    location.boards_assembled = true;
    Ok(())
}
