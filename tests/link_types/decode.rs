//! Decode and round-trip coverage through the public facade

use itemstring_rs::prelude::*;

#[test]
fn decode_through_facade() {
	let record = ItemString::parse("|cffa335ee|Hitem:128955::::::::::::2:69:96:529|h[Edict of Argus]|h|r");

	assert_eq!(record.link_type(), ITEM_LINK_TYPE);
	assert_eq!(record.get("itemID"), Some(128955));
	assert_eq!(record.get("bonusID1"), Some(69));
	assert_eq!(record.get("bonusID2"), Some(96));
	assert_eq!(record.get("upgradeValue"), Some(529));
}

#[test]
fn roundtrip_through_facade() {
	let record = ItemString::parse("item:124382::::::::110::::1:42");
	let reencoded = ItemString::parse(&record.encode());

	assert_eq!(reencoded.fields(), record.fields());
	assert_eq!(reencoded.link_type(), record.link_type());
}

#[test]
fn conversions_match_methods() {
	let record: ItemString = "item:6948".into();
	let encoded: String = (&record).into();

	assert_eq!(encoded, record.encode());
	assert_eq!(encoded, "item:6948");
}

#[test]
fn serde_roundtrip() {
	let record = ItemString::parse("item:6948::2");
	let json = serde_json::to_string(&record).unwrap();
	let back: ItemString = serde_json::from_str(&json).unwrap();

	assert_eq!(back, record);
}
