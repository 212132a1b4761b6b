//! Heuristic item-level adjustment over static lookup tables.
//!
//! Content updates add new upgrade encodings faster than these tables are
//! maintained, so the result is a best-effort guess. The authoritative value
//! comes from scanning rendered tooltip text, see [`super::scan`].

use super::{catalog::ItemCatalog, record::ItemString};

/// Level delta keyed by the `upgradeValue` field, added to the base level.
/// Entries are added as new upgrade encodings are identified.
const UPGRADED_LEVEL_ADJUST: &[(i64, i64)] = &[];

/// Absolute level keyed by the timewarped bonus ID
const TIMEWARPED_LEVEL_ADJUST: &[(i64, i64)] = &[(615, 660)];

/// Absolute level keyed by the timewarped warforged bonus ID
const TIMEWARPED_WARFORGED_LEVEL_ADJUST: &[(i64, i64)] = &[(656, 675)];

/// The three independent adjustment tables, bundled so tests can substitute
/// their own entries.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AdjustTables<'a> {
	pub upgraded: &'a [(i64, i64)],
	pub timewarped: &'a [(i64, i64)],
	pub timewarped_warforged: &'a [(i64, i64)],
}

impl AdjustTables<'static> {
	pub(crate) const STATIC: Self = Self {
		upgraded: UPGRADED_LEVEL_ADJUST,
		timewarped: TIMEWARPED_LEVEL_ADJUST,
		timewarped_warforged: TIMEWARPED_WARFORGED_LEVEL_ADJUST,
	};
}

fn lookup(table: &[(i64, i64)], key: i64) -> Option<i64> {
	table
		.iter()
		.find(|(entry, _)| *entry == key)
		.map(|(_, level)| *level)
}

pub(crate) fn adjusted_with_tables(
	record: &ItemString,
	base_level: Option<i64>,
	tables: &AdjustTables<'_>,
) -> Option<i64> {
	let base = base_level?;

	// the warforged-specific table wins over the plain timewarped one
	for &bonus_id in record.bonus_ids() {
		if let Some(level) = lookup(tables.timewarped_warforged, bonus_id) {
			return Some(level);
		}
	}
	for &bonus_id in record.bonus_ids() {
		if let Some(level) = lookup(tables.timewarped, bonus_id) {
			return Some(level);
		}
	}

	let upgrade = record.get("upgradeValue").unwrap_or(0);
	Some(base + lookup(tables.upgraded, upgrade).unwrap_or(0))
}

/// Computes the heuristic item level of a decoded record.
///
/// `base_level` is the unmodified level obtained elsewhere (an item
/// catalog); without it there is no result. Precedence: timewarped
/// warforged table, then timewarped table, then the base level plus any
/// upgrade-value delta.
pub fn adjusted_item_level(record: &ItemString, base_level: Option<i64>) -> Option<i64> {
	adjusted_with_tables(record, base_level, &AdjustTables::STATIC)
}

/// Like [`adjusted_item_level`], pulling the base level from a catalog.
pub fn adjusted_item_level_via<C: ItemCatalog>(record: &ItemString, catalog: &C) -> Option<i64> {
	let base_level = catalog.item_info(record.source()).and_then(|info| info.base_level);
	adjusted_item_level(record, base_level)
}
