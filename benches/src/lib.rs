//! Benchmark helper utilities for itemstring-rs
//!
//! This module provides utilities for generating synthetic link strings for
//! the benchmark suite: bare `item` payloads with a configurable bonus run,
//! and the decorated chat-markup form the decoder has to strip first.

/// Generates a bare `item` payload with the given bonus run.
///
/// The layout matches the wire format: twelve leading fields, the bonus
/// count, the bonus run, and a trailing upgrade value.
pub fn generate_link(item_id: i64, bonus_ids: &[i64]) -> String {
	let mut segments = vec![item_id.to_string()];

	// enchant, four gems, suffix, unique, link level, specialization,
	// upgrade type, difficulty: all left empty
	segments.extend(std::iter::repeat_n(String::new(), 11));

	segments.push(bonus_ids.len().to_string());
	segments.extend(bonus_ids.iter().map(ToString::to_string));

	// upgrade value
	segments.push("529".to_string());

	format!("item:{}", segments.join(":"))
}

/// Wraps a bare payload in decorated chat markup.
pub fn generate_markup_link(payload: &str) -> String {
	format!("|cffa335ee|H{payload}|h[Benchmark Item]|h|r")
}

/// Common bonus runs for synthetic link strings
pub mod runs {
	/// No bonus entries
	pub const NONE: &[i64] = &[];
	/// Typical drop: two bonus entries
	pub const TYPICAL: &[i64] = &[69, 96];
	/// Heavily modified item: eight bonus entries
	pub const HEAVY: &[i64] = &[40, 41, 42, 43, 44, 45, 46, 47];
}

#[cfg(test)]
mod tests {
	use super::*;
	use itemstring_types::prelude::*;

	#[test]
	fn test_generated_link_decodes() {
		let record = ItemString::parse(&generate_link(128955, runs::TYPICAL));

		assert_eq!(record.get("itemID"), Some(128955));
		assert_eq!(record.num_bonus_ids(), 2);
		assert_eq!(record.get("bonusID1"), Some(69));
		assert_eq!(record.get("upgradeValue"), Some(529));
	}

	#[test]
	fn test_generated_markup_link_decodes() {
		let link = generate_markup_link(&generate_link(128955, runs::NONE));
		let record = ItemString::parse(&link);

		assert_eq!(record.get("itemID"), Some(128955));
		assert_eq!(record.num_bonus_ids(), 0);
		assert_eq!(record.get("upgradeValue"), Some(529));
	}
}
