//! Prelude module for `itemstring_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```
//! use itemstring_types::prelude::*;
//!
//! // Now you can use all common types directly
//! let record = ItemString::parse("item:6948");
//! assert_eq!(record.get("itemID"), Some(6948));
//! ```

// Link module types
#[doc(inline)]
pub use crate::link::{
	// Constants
	BONUS_COUNT_INDEX,

	// Error types
	CatalogError,

	// Accessor types
	FieldKey,
	FieldName,
	FieldPos,

	ITEM_LINK_TYPE,

	// Collaborator seams
	ItemCatalog,
	ItemInfo,
	ItemRarity,

	// Record type
	ItemString,

	// Registry types
	Registry,
	RegistryError,

	SCAN_LINE_LIMIT,
	// Scan types
	Scanner,
	TooltipSurface,

	adjusted_item_level,
	adjusted_item_level_via,
};

// Re-export the link module for advanced usage
#[doc(inline)]
pub use crate::link;
