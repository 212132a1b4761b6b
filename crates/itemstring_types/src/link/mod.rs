//! Link string support for the `itemstring-rs` project.

mod encode;
mod error;

pub mod catalog;
pub mod fields;
pub mod level;
pub mod record;
pub mod registry;
pub mod scan;


/// Type tag of the fully field-named `item` encoding family
pub const ITEM_LINK_TYPE: &str = "item";

// Re-export error types
pub use error::{CatalogError, RegistryError};

// Re-export main link types
pub use catalog::{ItemCatalog, ItemInfo, ItemRarity};
pub use fields::{BONUS_COUNT_INDEX, FieldName, FieldPos};
pub use level::{adjusted_item_level, adjusted_item_level_via};
pub use record::{FieldKey, ItemString};
pub use registry::{Registry, initialize, loaded_revision};
pub use scan::{SCAN_LINE_LIMIT, Scanner, TooltipSurface};
