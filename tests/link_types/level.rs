//! Level heuristic and tooltip scan through the public facade

use itemstring_rs::prelude::*;

struct StaticCatalog;

impl ItemCatalog for StaticCatalog {
	fn item_info(&self, link: &str) -> Option<ItemInfo> {
		link.contains("128955").then(|| ItemInfo {
			name: "Edict of Argus".to_string(),
			rarity: ItemRarity::Epic,
			base_level: Some(705),
			stack_count: 1,
			icon: Some("inv_sword_101".to_string()),
			vendor_price: Some(123_456),
		})
	}
}

#[derive(Default)]
struct RecordingSurface {
	rendered: Option<String>,
	lines: Vec<String>,
}

impl TooltipSurface for RecordingSurface {
	fn clear(&mut self) {
		self.rendered = None;
		self.lines.clear();
	}

	fn render_link(&mut self, link: &str) {
		self.rendered = Some(link.to_string());
		self.lines = vec!["Edict of Argus".to_string(), "Item Level 715".to_string()];
	}

	fn line(&self, index: usize) -> Option<&str> {
		self.lines.get(index).map(String::as_str)
	}
}

#[test]
fn heuristic_level_through_catalog() {
	let record = ItemString::parse("item:128955");
	assert_eq!(adjusted_item_level_via(&record, &StaticCatalog), Some(705));

	// unknown item: no base level, no result
	let record = ItemString::parse("item:1");
	assert_eq!(adjusted_item_level_via(&record, &StaticCatalog), None);
}

#[test]
fn heuristic_level_without_base_is_absent() {
	let record = ItemString::parse("item:128955");
	assert_eq!(adjusted_item_level(&record, None), None);
	assert_eq!(adjusted_item_level(&record, Some(705)), Some(705));
}

#[test]
fn scan_beats_heuristic_when_available() {
	let record = ItemString::parse("item:128955");
	let mut scanner = Scanner::new(RecordingSurface::default());

	// the authoritative scan may disagree with the table heuristic
	let scanned = scanner.true_item_level(record.source());
	assert_eq!(scanned, Some(715));
	assert_ne!(scanned, adjusted_item_level_via(&record, &StaticCatalog));

	// the surface comes back cleared
	let surface = scanner.into_inner();
	assert!(surface.rendered.is_none());
	assert!(surface.lines.is_empty());
}
