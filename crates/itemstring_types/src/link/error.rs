//! Error types for link string support.
//!
//! Decoding itself never errors: absent payloads become empty records,
//! non-numeric segments coerce to zero, and unknown field names answer
//! `None`. Errors are reserved for genuine precondition violations.

use thiserror::Error;

/// Errors from the process-wide library registry
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
	/// Registration with a revision that is not newer than the loaded one
	#[error("stale revision: {offered} is not newer than loaded revision {loaded}")]
	StaleRevision {
		/// Revision already loaded in this process
		loaded: u32,
		/// Revision offered for registration
		offered: u32,
	},
}

/// Errors from catalog attribute conversion
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
	/// Rarity grade outside the known range
	#[error("invalid rarity grade: {0}")]
	InvalidRarity(u8),
}
