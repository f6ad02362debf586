use colored::Colorize;

pub fn run(location_name: &str) -> Result<(), String> {
    let world = super::load_world()?;
    let location = super::find_location(&world, location_name)?;

    println!(
        "  {} [{}]",
        location.name.bold(),
        location
            .vendor
            .map(|v| v.to_string())
            .unwrap_or_else(|| "unresolved".to_string())
            .dimmed()
    );
    println!();

    for board in location.boards.iter() {
        println!("  {}", board.name.bold());
        for &id in &board.quests {
            let Some(quest) = location.arena.get(id) else {
                continue;
            };
            let mut flags = Vec::new();
            if quest.repeatable {
                flags.push("repeatable");
            }
            if quest.high_priority {
                flags.push("urgent");
            }
            if quest.check_in_required {
                flags.push("check-in");
            }
            if flags.is_empty() {
                println!("    - {}", quest.title);
            } else {
                println!("    - {} ({})", quest.title, flags.join(", ").dimmed());
            }
        }
        println!();
    }

    println!(
        "  {} boards, {} posted quests",
        location.boards.len(),
        location.quests.len()
    );

    Ok(())
}
