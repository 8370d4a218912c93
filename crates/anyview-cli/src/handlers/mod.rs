pub mod chart;
pub mod render;

use anyhow::{Context, Result};
use anyview_types::Value;
use std::path::Path;

/// Load a document as a value: JSON first, YAML as the fallback
pub fn load_value(file: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(&text) {
        return Ok(Value::from(json));
    }
    let yaml: serde_json::Value = serde_yaml::from_str(&text)
        .with_context(|| format!("parsing {} as JSON or YAML", file.display()))?;
    Ok(Value::from(yaml))
}
