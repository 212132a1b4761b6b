//! Item catalog collaborator seam.
//!
//! The catalog supplies base attributes for an item link (rarity, base
//! level, stack count, icon, vendor price). The core consumes its base
//! level for the adjustment heuristic but does not implement the catalog;
//! the host provides one.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::error::CatalogError;

/// Item rarity grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ItemRarity {
	/// Grey
	Poor = 0,
	/// White
	Common = 1,
	/// Green
	Uncommon = 2,
	/// Blue
	Rare = 3,
	/// Purple
	Epic = 4,
	/// Orange
	Legendary = 5,
}

impl ItemRarity {
	/// Converts a u8 value to `ItemRarity`
	pub fn from_u8(value: u8) -> Result<Self, CatalogError> {
		match value {
			0 => Ok(Self::Poor),
			1 => Ok(Self::Common),
			2 => Ok(Self::Uncommon),
			3 => Ok(Self::Rare),
			4 => Ok(Self::Epic),
			5 => Ok(Self::Legendary),
			_ => Err(CatalogError::InvalidRarity(value)),
		}
	}

	/// Converts `ItemRarity` to u8
	pub fn to_u8(self) -> u8 {
		self as u8
	}
}

impl Default for ItemRarity {
	fn default() -> Self {
		Self::Common
	}
}

impl Display for ItemRarity {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::Poor => write!(f, "Poor"),
			Self::Common => write!(f, "Common"),
			Self::Uncommon => write!(f, "Uncommon"),
			Self::Rare => write!(f, "Rare"),
			Self::Epic => write!(f, "Epic"),
			Self::Legendary => write!(f, "Legendary"),
		}
	}
}

/// Base attributes the catalog supplies for one item.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemInfo {
	/// Display name
	pub name: String,

	/// Rarity grade
	pub rarity: ItemRarity,

	/// Unmodified item level, when the catalog knows it
	pub base_level: Option<i64>,

	/// Maximum stack size
	pub stack_count: u32,

	/// Icon identifier, when available
	pub icon: Option<String>,

	/// Vendor sell price in copper, when the item is sellable
	pub vendor_price: Option<u64>,
}

/// Source of base item attributes, implemented by the host.
pub trait ItemCatalog {
	/// Resolves base attributes for an item link; `None` when unknown.
	fn item_info(&self, link: &str) -> Option<ItemInfo>;
}
