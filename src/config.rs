#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What `register` does when an item's key is already in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DuplicatePolicy {
    /// Fail with `Error::Duplicate`.
    #[default]
    Reject,
    /// Keep the existing slot and report it back.
    Reuse,
    /// Allocate a fresh slot and point the key at it. The old slot stays
    /// allocated but can no longer be reached by any item.
    Overwrite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    pub capacity: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub on_duplicate: DuplicatePolicy,
}

impl Config {
    pub fn new(capacity: usize) -> Config {
        Config { capacity, on_duplicate: DuplicatePolicy::default() }
    }

    pub fn on_duplicate(mut self, policy: DuplicatePolicy) -> Config {
        self.on_duplicate = policy;
        self
    }
}
