//! Field-index metadata for the `item` encoding family.
//!
//! Positions are 0-based indices into a decoded record's field sequence.
//! Fixed positions address the leading fields; relative positions address
//! fields that trail the variable-length bonus run, so their absolute index
//! shifts with the record's bonus count.

use std::fmt::{self, Display, Formatter};

/// 0-based position of the bonus-count field (`numBonusIDs`)
pub const BONUS_COUNT_INDEX: usize = 12;

/// Position of a named field within a decoded record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPos {
	/// Fixed 0-based position among the leading fields
	Fixed(usize),

	/// Offset past the end of the bonus run, resolved as
	/// `BONUS_COUNT_INDEX + num_bonus_ids + offset`
	FromEnd(usize),
}

/// Name/position table for the `item` family, in wire order.
///
/// `upgradeValue` trails the variable-length bonus run and is therefore
/// addressed relative to its end.
pub const ITEM_FIELDS: &[(&str, FieldPos)] = &[
	("itemID", FieldPos::Fixed(0)),
	("enchantID", FieldPos::Fixed(1)),
	("gemID1", FieldPos::Fixed(2)),
	("gemID2", FieldPos::Fixed(3)),
	("gemID3", FieldPos::Fixed(4)),
	("gemID4", FieldPos::Fixed(5)),
	("suffixID", FieldPos::Fixed(6)),
	("uniqueID", FieldPos::Fixed(7)),
	("linkLevel", FieldPos::Fixed(8)),
	("specializationID", FieldPos::Fixed(9)),
	("upgradeTypeID", FieldPos::Fixed(10)),
	("instanceDifficultyID", FieldPos::Fixed(11)),
	("numBonusIDs", FieldPos::Fixed(BONUS_COUNT_INDEX)),
	("upgradeValue", FieldPos::FromEnd(1)),
];

/// Looks up the configured position for a field name.
pub fn position_of(name: &str) -> Option<FieldPos> {
	ITEM_FIELDS
		.iter()
		.find(|(field, _)| *field == name)
		.map(|(_, pos)| *pos)
}

/// Resolves a position to an absolute 0-based index for a record carrying
/// `num_bonus_ids` bonus entries.
pub fn resolve(pos: FieldPos, num_bonus_ids: usize) -> usize {
	match pos {
		FieldPos::Fixed(index) => index,
		FieldPos::FromEnd(offset) => BONUS_COUNT_INDEX + num_bonus_ids + offset,
	}
}

/// Parses a synthesized bonus-slot name (`bonusID<k>`, `k >= 1`).
pub(crate) fn bonus_slot(name: &str) -> Option<usize> {
	name.strip_prefix("bonusID")?
		.parse::<usize>()
		.ok()
		.filter(|slot| *slot >= 1)
}

/// Canonical name of an absolute field position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldName {
	/// A fixed-position or relative-to-end field from [`ITEM_FIELDS`]
	Fixed(&'static str),

	/// The `k`-th entry of the bonus run (1-based), rendered as `bonusID<k>`
	Bonus(usize),

	/// No defined name and not inside the bonus run
	Unknown,
}

impl Display for FieldName {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::Fixed(name) => write!(f, "{name}"),
			Self::Bonus(slot) => write!(f, "bonusID{slot}"),
			Self::Unknown => write!(f, "unknown"),
		}
	}
}

/// Maps an absolute 0-based index back to its canonical name.
///
/// Indices inside the bonus run synthesize `bonusID<k>` names; anything with
/// no defined name answers [`FieldName::Unknown`].
pub fn name_of(index: usize, num_bonus_ids: usize) -> FieldName {
	if index > BONUS_COUNT_INDEX && index <= BONUS_COUNT_INDEX + num_bonus_ids {
		return FieldName::Bonus(index - BONUS_COUNT_INDEX);
	}

	ITEM_FIELDS
		.iter()
		.find(|(_, pos)| resolve(*pos, num_bonus_ids) == index)
		.map_or(FieldName::Unknown, |(name, _)| FieldName::Fixed(name))
}
