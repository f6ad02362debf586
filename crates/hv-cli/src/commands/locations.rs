use comfy_table::{ContentArrangement, Table};

pub fn run() -> Result<(), String> {
    let world = super::load_world()?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Vendor", "Boards", "Quests", "Businesses"]);

    for location in &world {
        let vendor = location
            .vendor
            .map(|v| v.to_string())
            .unwrap_or_else(|| "—".to_string());
        table.add_row(vec![
            location.name.clone(),
            vendor,
            location.boards.len().to_string(),
            location.quests.len().to_string(),
            location.businesses.len().to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} locations", world.len());

    Ok(())
}
