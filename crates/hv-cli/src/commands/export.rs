pub fn run() -> Result<(), String> {
    let world = super::load_world()?;
    let json = serde_json::to_string_pretty(&world).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}
