pub mod boards;
pub mod export;
pub mod locations;
pub mod quest;
pub mod train;
pub mod vendors;

use hv_core::Location;

/// Build the authored world and run the derivation passes.
fn load_world() -> Result<Vec<Location>, String> {
    let mut world = hv_content::world();
    hv_worldgen::initialize(&mut world).map_err(|e| e.to_string())?;
    Ok(world)
}

/// Case-insensitive location lookup within the derived world.
fn find_location<'a>(world: &'a [Location], name: &str) -> Result<&'a Location, String> {
    hv_core::find_location(world, name).map_err(|e| e.to_string())
}
