use colored::Colorize;

pub fn run(location_name: &str, title: &str) -> Result<(), String> {
    let world = super::load_world()?;
    let location = super::find_location(&world, location_name)?;

    let quest = location.posted_quest(title).map_err(|e| e.to_string())?;
    let lower = title.to_lowercase();

    println!("  {}", quest.title.bold());
    println!();
    for line in quest.description.lines() {
        println!("  {}", line.trim());
    }
    println!();

    if let Some(ref place) = quest.location {
        println!("  location:     {place}");
    }
    if !quest.requirements.is_empty() {
        println!("  requirements: {}", quest.requirements.join("; "));
    }
    if !quest.conditions.is_empty() {
        println!("  conditions:   {}", quest.conditions.join("; "));
    }
    if let Some(ref timeline) = quest.timeline {
        println!("  timeline:     {timeline}");
    }
    if !quest.risks.is_empty() {
        println!("  risks:        {}", quest.risks.join("; "));
    }
    if let Some(ref reward) = quest.reward {
        println!("  reward:       {reward}");
    }
    if let Some(ref guild) = quest.guild {
        println!("  guild:        {guild} (+{} rep)", quest.reputation_reward);
    }

    let boards: Vec<&str> = location
        .boards
        .iter()
        .filter(|board| {
            board
                .quests
                .iter()
                .any(|&id| location.arena.get(id).is_some_and(|q| q.title.to_lowercase() == lower))
        })
        .map(|board| board.name.as_str())
        .collect();
    if !boards.is_empty() {
        println!("  posted on:    {}", boards.join(", "));
    }

    Ok(())
}
