use comfy_table::{ContentArrangement, Table};

pub fn run() -> Result<(), String> {
    let world = super::load_world()?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Place", "Kind", "Category", "Vendor"]);

    for location in &world {
        let vendor = location
            .vendor
            .map(|v| v.to_string())
            .unwrap_or_else(|| "—".to_string());
        table.add_row(vec![location.name.clone(), "location".into(), "—".into(), vendor]);

        for business in &location.businesses {
            let vendor = business
                .vendor
                .map(|v| v.to_string())
                .unwrap_or_else(|| "—".to_string());
            table.add_row(vec![
                format!("  {}", business.name),
                "business".into(),
                business.category.to_string(),
                vendor,
            ]);
        }
    }

    println!("{table}");

    Ok(())
}
