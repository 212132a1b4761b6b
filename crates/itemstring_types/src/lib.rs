//! This crate provides the core data types and link-string support for the `itemstring-rs` project.
//!
//! # Link Strings
//!
//! A link string is a compact, colon-delimited encoding of an item and its
//! modifiers, either bare (`item:128955:...`) or embedded in decorated chat
//! markup (`|cff...|Hitem:128955:...|h[Name]|h|r`). Only the `item` family is
//! fully field-named; other families decode positionally.
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```
//! use itemstring_types::prelude::*;
//!
//! let record = ItemString::parse("item:128955::::::::99:577::11:2:69:96:3");
//! assert_eq!(record.get("itemID"), Some(128955));
//! assert_eq!(record.get("bonusID1"), Some(69));
//! assert_eq!(record.get("upgradeValue"), Some(3));
//! ```
//!
//! Or use explicit paths:
//!
//! ```
//! use itemstring_types::link::ItemString;
//!
//! let record = ItemString::parse("item:6948");
//! assert_eq!(record.encode(), "item:6948");
//! ```

pub mod link;

/// `use itemstring_types::prelude::*;` to import commonly used items.
pub mod prelude;
