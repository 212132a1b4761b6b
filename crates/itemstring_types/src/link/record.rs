//! Link string record: decoding and field access.
//!
//! # Wire Format
//!
//! ```text
//! <typeTag>:<f1>:<f2>:...:<fN>
//! ```
//!
//! - `typeTag` is an alphanumeric token naming the encoding family
//! - each field is either empty or a signed base-10 integer
//! - an empty field is the wire form of the value `0`
//!
//! The payload may arrive bare, or embedded in decorated chat markup of the
//! form `...|H<payload>|h...`. Decoding is deliberately lenient: an input
//! with no recognizable payload decodes to an empty record (a valid "no
//! data" state), and non-numeric fields coerce to `0`.
//!
//! # Usage Examples
//!
//! ## Decoding a link
//!
//! ```
//! use itemstring_types::link::ItemString;
//!
//! let record = ItemString::parse("|cffa335ee|Hitem:124382::::::::110|h[Thing]|h|r");
//! assert_eq!(record.link_type(), "item");
//! assert_eq!(record.get("itemID"), Some(124382));
//! ```
//!
//! ## Recycling a record across decodes
//!
//! ```
//! use itemstring_types::link::ItemString;
//!
//! let mut record = ItemString::new();
//! record.parse_into("item:6948");
//! record.parse_into("item:128955");
//! assert_eq!(record.get("itemID"), Some(128955));
//! ```

use std::{
	fmt::{self, Display, Formatter},
	sync::LazyLock,
};

use log::trace;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{
	ITEM_LINK_TYPE,
	fields::{self, FieldName, FieldPos},
};

/// Captures the payload embedded in decorated link markup (`|H<payload>|h`)
static MARKUP_PAYLOAD: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\|H([^|]+)\|h").expect("hard-coded pattern"));

/// Full-string match for the bare item-encoding grammar.
///
/// Segments are looser than base-10 integers here on purpose: decode
/// coerces anything non-numeric to zero rather than rejecting the payload.
static BARE_PAYLOAD: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[A-Za-z0-9]+(?::[A-Za-z0-9-]*)+$").expect("hard-coded pattern")
});

/// Isolates the colon-delimited payload from a raw input string.
///
/// Decorated markup is stripped first; otherwise the trimmed input itself
/// must match the encoding grammar.
fn extract_payload(input: &str) -> Option<&str> {
	if let Some(caps) = MARKUP_PAYLOAD.captures(input) {
		let payload = caps.get(1).map_or("", |m| m.as_str());
		return BARE_PAYLOAD.is_match(payload).then_some(payload);
	}

	let trimmed = input.trim();
	BARE_PAYLOAD.is_match(trimmed).then_some(trimmed)
}

/// Key addressing one field of a decoded record.
///
/// Both forms resolve through the same rules; attribute-style and indexed
/// access are one capability, not two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey<'a> {
	/// Direct 0-based index; negative values address relative to the end of
	/// the bonus run (`-1` is the first field after it)
	Index(i64),

	/// Field name from the metadata table, or a synthesized `bonusID<k>`
	Name(&'a str),
}

impl From<i64> for FieldKey<'static> {
	fn from(index: i64) -> Self {
		Self::Index(index)
	}
}

impl<'a> From<&'a str> for FieldKey<'a> {
	fn from(name: &'a str) -> Self {
		Self::Name(name)
	}
}

/// A decoded link string.
///
/// Holds the encoding-family tag, the ordered field sequence and the
/// original input. Only the `item` family answers named lookups; other
/// families are preserved positionally and round-trip through
/// [`encode`](ItemString::encode) unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemString {
	/// Encoding-family tag (empty for the "no data" state)
	link_type: String,

	/// One integer per colon-delimited segment after the tag, in wire order
	fields: Vec<i64>,

	/// Original input, retained for traceability
	source: String,
}

impl ItemString {
	/// Creates a new empty record.
	pub fn new() -> Self {
		Self::default()
	}

	/// Decodes an input string into a fresh record.
	///
	/// Never fails: an input with no recognizable payload yields an empty
	/// record, which every accessor degrades over gracefully.
	pub fn parse(input: &str) -> Self {
		let mut record = Self::new();
		record.parse_into(input);
		record
	}

	/// Decodes an input string into this record, reusing its storage.
	///
	/// The record is fully reset first, so recycling one record across many
	/// decodes leaves no residue from earlier inputs.
	pub fn parse_into(&mut self, input: &str) {
		self.link_type.clear();
		self.fields.clear();
		self.source.clear();
		self.source.push_str(input);

		let Some(payload) = extract_payload(input) else {
			trace!("no encoding payload in input, leaving record empty");
			return;
		};

		let mut segments = payload.split(':');
		if let Some(tag) = segments.next() {
			self.link_type.push_str(tag);
		}

		// empty or non-numeric segments coerce to zero by contract
		self.fields
			.extend(segments.map(|segment| segment.parse::<i64>().unwrap_or(0)));

		// a trailing colon yields one dangling empty segment, an artifact of
		// the split rather than a field
		if payload.ends_with(':') {
			self.fields.pop();
		}
	}

	/// Returns the encoding-family tag, empty when the record holds no data.
	pub fn link_type(&self) -> &str {
		&self.link_type
	}

	/// Returns the decoded field sequence in wire order.
	pub fn fields(&self) -> &[i64] {
		&self.fields
	}

	/// Returns the original input string.
	pub fn source(&self) -> &str {
		&self.source
	}

	/// Returns `true` when the record holds no decoded data.
	pub fn is_empty(&self) -> bool {
		self.link_type.is_empty() && self.fields.is_empty()
	}

	/// Returns the number of bonus entries in this record.
	///
	/// The declared count is clamped to the fields actually present, so a
	/// truncated record degrades instead of addressing past its end.
	pub fn num_bonus_ids(&self) -> usize {
		let declared = self
			.fields
			.get(fields::BONUS_COUNT_INDEX)
			.copied()
			.unwrap_or(0);
		let declared = usize::try_from(declared).unwrap_or(0);
		declared.min(
			self.fields
				.len()
				.saturating_sub(fields::BONUS_COUNT_INDEX + 1),
		)
	}

	/// Returns the bonus run as a slice.
	pub fn bonus_ids(&self) -> &[i64] {
		let start = (fields::BONUS_COUNT_INDEX + 1).min(self.fields.len());
		let end = (start + self.num_bonus_ids()).min(self.fields.len());
		&self.fields[start..end]
	}

	/// Looks up one field by name or index.
	///
	/// Returns `Some(0)` for a named field whose segment was empty and
	/// `None` for anything absent: unknown names, bonus slots past this
	/// record's bonus count, and out-of-range indices. Callers that care
	/// whether a field exists at all must check for `None` rather than `0`.
	///
	/// # Examples
	///
	/// ```
	/// use itemstring_types::link::ItemString;
	///
	/// let record = ItemString::parse("item:128955::::::::::::2:69:96:3");
	/// assert_eq!(record.get("bonusID2"), Some(96));
	/// assert_eq!(record.get("bonusID3"), None);
	/// assert_eq!(record.get(-1), Some(3));
	/// ```
	pub fn get<'k>(&self, key: impl Into<FieldKey<'k>>) -> Option<i64> {
		match key.into() {
			FieldKey::Index(index) => self.field_at(index),
			FieldKey::Name(name) => self.field_named(name),
		}
	}

	/// Returns the canonical name of an absolute field index in this record.
	pub fn field_name(&self, index: usize) -> FieldName {
		fields::name_of(index, self.num_bonus_ids())
	}

	fn field_at(&self, index: i64) -> Option<i64> {
		let absolute = if index < 0 {
			fields::resolve(
				FieldPos::FromEnd(index.unsigned_abs() as usize),
				self.num_bonus_ids(),
			)
		} else {
			usize::try_from(index).ok()?
		};
		self.fields.get(absolute).copied()
	}

	fn field_named(&self, name: &str) -> Option<i64> {
		// only the `item` family carries field names
		if self.link_type != ITEM_LINK_TYPE {
			return None;
		}

		if let Some(pos) = fields::position_of(name) {
			let absolute = fields::resolve(pos, self.num_bonus_ids());
			return Some(self.fields.get(absolute).copied().unwrap_or(0));
		}

		let slot = fields::bonus_slot(name)?;
		if slot > self.num_bonus_ids() {
			return None;
		}
		Some(
			self.fields
				.get(fields::BONUS_COUNT_INDEX + slot)
				.copied()
				.unwrap_or(0),
		)
	}
}

impl From<&str> for ItemString {
	fn from(input: &str) -> Self {
		Self::parse(input)
	}
}

impl From<String> for ItemString {
	fn from(input: String) -> Self {
		Self::parse(&input)
	}
}

impl From<&ItemString> for String {
	fn from(record: &ItemString) -> Self {
		record.encode()
	}
}

impl From<ItemString> for String {
	fn from(record: ItemString) -> Self {
		record.encode()
	}
}

impl Display for ItemString {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if self.is_empty() {
			return write!(f, "Item String: empty");
		}
		write!(
			f,
			"Item String: {} with {} fields ({} bonus)",
			self.link_type,
			self.fields.len(),
			self.num_bonus_ids()
		)
	}
}
