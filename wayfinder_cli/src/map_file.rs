use std::path::Path;

use wayfinder_core::navigator::Navigator;
use wayfinder_map_client::payload::MapPayload;

pub fn load_payload(path: &Path) -> Result<MapPayload, anyhow::Error> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

pub fn load_navigator(path: &Path) -> Result<Navigator, anyhow::Error> {
    Ok(load_payload(path)?.into_navigator())
}
