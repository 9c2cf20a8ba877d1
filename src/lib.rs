//! A fixed-capacity disjoint-set registry over arbitrary items.
//!
//! Items are identified by a canonical string key (see [`canon`]) and
//! mapped to dense slots in a union-by-size forest with full path
//! compression (see [`uf`]).

pub mod canon;
pub mod config;
pub mod error;
pub mod registry;
pub mod uf;

pub use crate::canon::{Canonicalize, Displayed};
#[cfg(feature = "serde")]
pub use crate::canon::Json;
pub use crate::config::{Config, DuplicatePolicy};
pub use crate::error::{Error, Result};
pub use crate::registry::Registry;
