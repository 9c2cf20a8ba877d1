use crate::canon::Canonicalize;
use crate::config::{Config, DuplicatePolicy};
use crate::error::{Error, Result};
use crate::uf::Forest;
use std::collections::HashMap;
use std::marker::PhantomData;

#[cfg(feature = "serde")]
use crate::canon::Json;

/// A fixed-capacity union-find over items of type `T`.
///
/// Items are mapped to dense slots through the key produced by `C`. Slots
/// are handed out in registration order and are never freed.
///
/// Every operation takes `&mut self`, including `same_group`, since lookups
/// compress paths in the forest.
pub struct Registry<T: ?Sized, C> {
    config: Config,
    canon: C,
    index: HashMap<String, usize>,
    forest: Forest,
    _items: PhantomData<fn(&T)>,
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize + ?Sized> Registry<T, Json> {
    /// Registry keyed on each item's JSON serialization.
    pub fn new(capacity: usize) -> Registry<T, Json> {
        Registry::with_config(Config::new(capacity), Json)
    }
}

impl<T: ?Sized, C: Canonicalize<T>> Registry<T, C> {
    pub fn with_canonicalizer(capacity: usize, canon: C) -> Registry<T, C> {
        Registry::with_config(Config::new(capacity), canon)
    }

    pub fn with_config(config: Config, canon: C) -> Registry<T, C> {
        Registry {
            config,
            canon,
            index: HashMap::new(),
            forest: Forest::new(),
            _items: PhantomData,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Number of allocated slots, including any orphaned by
    /// `DuplicatePolicy::Overwrite`.
    pub fn len(&self) -> usize {
        self.forest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forest.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }

    pub fn remaining(&self) -> usize {
        self.capacity().saturating_sub(self.len())
    }

    /// Adds `item` as a group of its own and returns its slot.
    ///
    /// A full registry refuses every item, including one whose key is
    /// already registered.
    pub fn register(&mut self, item: &T) -> Result<usize> {
        let key = self.canon.canonicalize(item)?;
        if self.is_full() {
            return Err(Error::CapacityExceeded { capacity: self.capacity() });
        }
        if let Some(&slot) = self.index.get(&key) {
            match self.config.on_duplicate {
                DuplicatePolicy::Reject => return Err(Error::Duplicate { key }),
                DuplicatePolicy::Reuse => return Ok(slot),
                DuplicatePolicy::Overwrite => (),
            }
        }
        let slot = self.forest.push();
        if let Some(old) = self.index.insert(key, slot) {
            log::warn!("register: key remapped from slot {} to {}; slot {} is orphaned",
                       old, slot, old);
        }
        log::debug!("register: slot {} of {}", slot, self.capacity());
        Ok(slot)
    }

    pub fn contains(&self, item: &T) -> Result<bool> {
        let key = self.canon.canonicalize(item)?;
        Ok(self.index.contains_key(&key))
    }

    /// Slot currently bound to `item`'s key.
    pub fn slot(&self, item: &T) -> Result<usize> {
        let key = self.canon.canonicalize(item)?;
        match self.index.get(&key) {
            Some(&slot) => Ok(slot),
            None => Err(Error::Unregistered { key }),
        }
    }

    /// Merges the groups of `a` and `b`. If the groups are the same size,
    /// `b`'s group is attached under `a`'s root.
    pub fn union(&mut self, a: &T, b: &T) -> Result<()> {
        let x = self.slot(a)?;
        let y = self.slot(b)?;
        self.forest.union(x, y);
        Ok(())
    }

    pub fn same_group(&mut self, a: &T, b: &T) -> Result<bool> {
        let x = self.slot(a)?;
        let y = self.slot(b)?;
        Ok(self.forest.find(x) == self.forest.find(y))
    }

    /// Number of items in `item`'s group.
    pub fn group_size(&mut self, item: &T) -> Result<usize> {
        let slot = self.slot(item)?;
        Ok(self.forest.group_size(slot))
    }

    /// Number of distinct groups. Orphaned slots each count as their own.
    pub fn group_count(&self) -> usize {
        self.forest.group_count()
    }

    #[cfg(test)]
    pub(crate) fn forest(&self) -> &Forest {
        &self.forest
    }
}
