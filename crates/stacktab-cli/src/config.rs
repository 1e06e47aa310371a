use anyhow::{Context, Result};
use serde::Deserialize;
use stacktab_core::StackTable;
use std::collections::HashMap;
use std::path::Path;

/// On-disk stack-size overrides, applied over the built-in vanilla table:
///
/// ```toml
/// default = 64
///
/// [stack-sizes]
/// "ender pearl" = 16
/// "obsidian" = 32
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StackSizeConfig {
    #[serde(default)]
    pub default: Option<u64>,
    #[serde(default, rename = "stack-sizes")]
    pub stack_sizes: HashMap<String, u64>,
}

impl StackSizeConfig {
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read stack-size config {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Invalid stack-size config {}", path.display()))?;
        Ok(config)
    }

    /// Merge these overrides into the vanilla table.
    pub fn into_table(self) -> Result<StackTable> {
        let table = StackTable::default().extended(self.default, self.stack_sizes)?;
        Ok(table)
    }
}
