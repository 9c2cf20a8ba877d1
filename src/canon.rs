//! Canonical keys for registry items.
//!
//! Two items with the same key are the same entity as far as a registry is
//! concerned; items with different keys are always distinct. A key function
//! must therefore be deterministic and injective over whatever notion of
//! item equality the caller cares about.

use crate::error::Result;
use std::fmt::Display;

pub trait Canonicalize<T: ?Sized> {
    fn canonicalize(&self, item: &T) -> Result<String>;
}

/// Any `Fn(&T) -> String` is a key function.
impl<T: ?Sized, F: Fn(&T) -> String> Canonicalize<T> for F {
    fn canonicalize(&self, item: &T) -> Result<String> {
        Ok(self(item))
    }
}

/// Keys items by their `Display` output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Displayed;

impl<T: Display + ?Sized> Canonicalize<T> for Displayed {
    fn canonicalize(&self, item: &T) -> Result<String> {
        Ok(item.to_string())
    }
}

/// Keys items by their compact JSON serialization.
///
/// Struct fields serialize in declaration order, so this is stable for
/// derived `Serialize` impls. Maps with unordered iteration (`HashMap`) are
/// not; use a `BTreeMap` or a custom key function for those.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

#[cfg(feature = "serde")]
impl<T: serde::Serialize + ?Sized> Canonicalize<T> for Json {
    fn canonicalize(&self, item: &T) -> Result<String> {
        serde_json::to_string(item).map_err(|e| crate::error::Error::Canonicalize(e.to_string()))
    }
}
