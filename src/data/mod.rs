//! Data layer module
//!
//! Flat JSON persistence for the three collections:
//! - accounts (credentials)
//! - image posts
//! - comments keyed by image source link

mod json_file;
mod models;
mod store;

pub use json_file::JsonFileStore;
pub use models::*;
pub use store::{PhotoStore, StoreError};

#[cfg(test)]
mod memory;
#[cfg(test)]
pub use memory::MemoryStore;
