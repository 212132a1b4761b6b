//! Prelude module for `itemstring_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use itemstring_internal::prelude::*;
//!
//! // Now you can use all common types directly
//! let record = ItemString::parse("item:6948");
//! let encoded = record.encode();
//! assert_eq!(encoded, "item:6948");
//! ```

// Re-export everything from itemstring_types::prelude
#[doc(inline)]
pub use itemstring_types::prelude::*;

// Re-export the entire itemstring_types module for advanced usage
#[doc(inline)]
pub use itemstring_types;
