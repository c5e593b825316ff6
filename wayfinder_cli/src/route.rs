use std::path::Path;

use serde_json::json;
use tracing::debug;

use wayfinder_core::error::RoutingError;
use wayfinder_core::navigator::RouteRequest;

use crate::map_file;

pub fn run(map: &Path, from: &str, to: &str) -> Result<(), anyhow::Error> {
    let navigator = map_file::load_navigator(map)?;

    debug!(from, to, "Calculating route");

    let request = RouteRequest {
        startpoint: String::from(from),
        endpoint: String::from(to),
    };

    match navigator.route(&request) {
        Ok(result) => println!("{}", serde_json::to_string_pretty(&result)?),
        Err(error @ (RoutingError::CityNotFound(_) | RoutingError::NoPathFound { .. })) => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({ "error": error.to_string() }))?
            )
        }
        Err(error) => return Err(error.into()),
    }

    Ok(())
}
