//! This module is separated into its own crate to keep the facade crate thin, and should not be used directly.

/// `use itemstring_rs::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export itemstring_types for convenience
pub use itemstring_types;

// Re-export commonly used types at crate root
pub use itemstring_types::link::{
	FieldKey, FieldName, ItemCatalog, ItemInfo, ItemString, RegistryError, Scanner, TooltipSurface,
};
