use std::{fs, path::Path};

use crate::{core::scenario::ScenarioSnapshot, errors::Result};

/// Writes the snapshot as pretty JSON, staging through a temporary file.
pub fn export_snapshot(snapshot: &ScenarioSnapshot, path: &Path) -> Result<()> {
    let tmp = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    Ok(())
}
