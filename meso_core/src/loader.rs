//! Mesocycle payload loading.
//!
//! Payloads are the JSON documents served by the training API. A literal
//! `null` stands for "no active mesocycle".

use crate::{Mesocycle, Result};
use std::path::Path;

/// Parse a mesocycle payload
pub fn parse_mesocycle(contents: &str) -> Result<Option<Mesocycle>> {
    let meso: Option<Mesocycle> = serde_json::from_str(contents)?;
    match &meso {
        Some(m) => tracing::debug!(
            "Parsed mesocycle {} ({} weeks, {} days)",
            m.key,
            m.weeks.len(),
            m.days().count()
        ),
        None => tracing::debug!("Payload holds no mesocycle"),
    }
    Ok(meso)
}

/// Load a mesocycle payload from a JSON file
pub fn load_mesocycle(path: &Path) -> Result<Option<Mesocycle>> {
    let contents = std::fs::read_to_string(path)?;
    let meso = parse_mesocycle(&contents)?;
    tracing::info!("Loaded mesocycle payload from {:?}", path);
    Ok(meso)
}
