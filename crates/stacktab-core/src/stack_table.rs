use crate::error::{Error, Result};
use std::collections::HashMap;

/// Stack size applied to any item without an override.
pub const DEFAULT_STACK_SIZE: u64 = 64;

/// Items that do not stack to 64 in vanilla. Keys must be lowercase.
const VANILLA_OVERRIDES: &[(&str, u64)] = &[
    ("armor stand", 16),
    ("banner", 16),
    ("bed", 1),
    ("boat", 1),
    ("bucket", 16),
    ("cake", 1),
    ("egg", 16),
    ("ender pearl", 16),
    ("honey bottle", 16),
    ("minecart", 1),
    ("music disc", 1),
    ("potion", 1),
    ("saddle", 1),
    ("shulker box", 1),
    ("sign", 16),
    ("snowball", 16),
    ("totem of undying", 1),
    ("water bucket", 1),
    ("written book", 16),
];

/// Immutable item-name to stack-capacity table with a guaranteed default.
///
/// Lookups are case-insensitive and total: unknown items resolve to the
/// default capacity, so every capacity this table hands out is positive.
#[derive(Debug, Clone)]
pub struct StackTable {
    default: u64,
    overrides: HashMap<String, u64>,
}

impl StackTable {
    /// Build a table from scratch. Every capacity, the default included,
    /// must be positive.
    pub fn new(default: u64, overrides: HashMap<String, u64>) -> Result<Self> {
        if default == 0 {
            return Err(Error::InvalidCapacity("default".to_string()));
        }

        let mut normalized = HashMap::with_capacity(overrides.len());
        for (name, capacity) in overrides {
            if capacity == 0 {
                return Err(Error::InvalidCapacity(name));
            }
            normalized.insert(name.to_lowercase(), capacity);
        }

        Ok(Self {
            default,
            overrides: normalized,
        })
    }

    /// Copy of this table with the given default and overrides layered on
    /// top. Used to apply a user config over the vanilla table.
    pub fn extended(&self, default: Option<u64>, extra: HashMap<String, u64>) -> Result<Self> {
        let default = default.unwrap_or(self.default);
        if default == 0 {
            return Err(Error::InvalidCapacity("default".to_string()));
        }

        let mut overrides = self.overrides.clone();
        for (name, capacity) in extra {
            if capacity == 0 {
                return Err(Error::InvalidCapacity(name));
            }
            overrides.insert(name.to_lowercase(), capacity);
        }

        Ok(Self { default, overrides })
    }

    /// Stack capacity for an item, falling back to the default for
    /// unknown names.
    pub fn lookup(&self, item_name: &str) -> u64 {
        self.overrides
            .get(&item_name.to_lowercase())
            .copied()
            .unwrap_or(self.default)
    }

    pub fn default_capacity(&self) -> u64 {
        self.default
    }
}

impl Default for StackTable {
    /// The vanilla table: 64 per stack plus the built-in override set.
    fn default() -> Self {
        Self {
            default: DEFAULT_STACK_SIZE,
            overrides: VANILLA_OVERRIDES
                .iter()
                .map(|(name, capacity)| (name.to_string(), *capacity))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_item_falls_back_to_default() {
        let table = StackTable::default();
        assert_eq!(table.lookup("suspicious stew of weirdness"), 64);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let table = StackTable::default();
        assert_eq!(table.lookup("Stone"), table.lookup("stone"));
        assert_eq!(table.lookup("Ender Pearl"), 16);
        assert_eq!(table.lookup("ender pearl"), 16);
    }

    #[test]
    fn new_normalizes_override_keys() {
        let overrides = HashMap::from([("Oak Sign".to_string(), 16)]);
        let table = StackTable::new(64, overrides).unwrap();
        assert_eq!(table.lookup("oak sign"), 16);
    }

    #[test]
    fn zero_default_is_rejected() {
        let err = StackTable::new(0, HashMap::new()).unwrap_err();
        assert_eq!(err, Error::InvalidCapacity("default".to_string()));
    }

    #[test]
    fn zero_override_is_rejected() {
        let overrides = HashMap::from([("cursed item".to_string(), 0)]);
        let err = StackTable::new(64, overrides).unwrap_err();
        assert_eq!(err, Error::InvalidCapacity("cursed item".to_string()));
    }

    #[test]
    fn extended_layers_overrides_over_vanilla() {
        let extra = HashMap::from([("Obsidian".to_string(), 32)]);
        let table = StackTable::default().extended(Some(48), extra).unwrap();

        assert_eq!(table.lookup("obsidian"), 32);
        // Vanilla overrides survive the merge
        assert_eq!(table.lookup("ender pearl"), 16);
        // New default applies to unlisted items
        assert_eq!(table.lookup("stone"), 48);
    }

    #[test]
    fn extended_rejects_zero_capacity() {
        let extra = HashMap::from([("obsidian".to_string(), 0)]);
        assert!(StackTable::default().extended(None, extra).is_err());
    }
}
