//! Back-office data contracts
//!
//! Shapes the data-fetching layer must produce: organizational structure
//! items (flattened with parent references) and countries. Nothing here
//! fetches, caches or validates; [`StructureIndex`] only answers lookups
//! over the list as delivered.

mod country;
mod error;
mod hierarchy;
mod structure;

pub use country::{Country, CountryResponse};
pub use error::ModelError;
pub use hierarchy::StructureIndex;
pub use structure::{FlatStructureItem, StructureType};

pub type Result<T> = std::result::Result<T, ModelError>;
