use std::path::Path;

use serde_json::json;

use crate::map_file;

pub fn run(map: &Path, query: &str, limit: usize) -> Result<(), anyhow::Error> {
    let navigator = map_file::load_navigator(map)?;

    let suggestions = navigator.suggest(query, limit);
    println!(
        "{}",
        serde_json::to_string_pretty(&json!({ "suggestions": suggestions }))?
    );

    Ok(())
}
