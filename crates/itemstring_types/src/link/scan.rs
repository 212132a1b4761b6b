//! Tooltip scan support.
//!
//! The host UI owns a tooltip-like render surface that can be populated from
//! an item link; the level printed in its rendered text is authoritative
//! where the static tables of [`super::level`] are guesswork. This module
//! defines the collaborator seam ([`TooltipSurface`]) and [`Scanner`], the
//! exclusively-owned resource that drives a scan.

use std::sync::LazyLock;

use log::trace;
use regex::Regex;

/// Upper bound on rendered lines inspected per scan
pub const SCAN_LINE_LIMIT: usize = 5;

/// Matches the rendered item-level line
static ITEM_LEVEL_LINE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"Item Level (\d+)").expect("hard-coded pattern"));

/// A tooltip-like render surface managed by the host UI.
///
/// The core only needs three capabilities: clear the content, populate it
/// from an item link, and enumerate the rendered text lines.
pub trait TooltipSurface {
	/// Clears all rendered content.
	fn clear(&mut self);

	/// Populates the surface from an item link.
	fn render_link(&mut self, link: &str);

	/// Returns the rendered text line at `index`, if present.
	fn line(&self, index: usize) -> Option<&str>;
}

/// Exclusive owner of a scan surface.
///
/// Exactly one scan is in flight at a time: `&mut self` serializes access,
/// and the surface is reset on every exit path before the scanner can be
/// used again. Callers hand the surface over once and get it back with
/// [`into_inner`](Scanner::into_inner).
#[derive(Debug)]
pub struct Scanner<S: TooltipSurface> {
	surface: S,
}

impl<S: TooltipSurface> Scanner<S> {
	/// Takes ownership of a surface.
	pub fn new(surface: S) -> Self {
		Self { surface }
	}

	/// Releases the surface back to the caller.
	pub fn into_inner(self) -> S {
		self.surface
	}

	/// Scans the rendered tooltip of `link` for its true item level.
	///
	/// Clears the surface, renders the link, and matches the item-level
	/// pattern over at most [`SCAN_LINE_LIMIT`] lines. `None` when no line
	/// carries a level.
	pub fn true_item_level(&mut self, link: &str) -> Option<i64> {
		let lease = ScanLease {
			surface: &mut self.surface,
		};
		lease.surface.clear();
		lease.surface.render_link(link);

		for index in 0..SCAN_LINE_LIMIT {
			let Some(line) = lease.surface.line(index) else {
				break;
			};
			if let Some(caps) = ITEM_LEVEL_LINE.captures(line) {
				let level = caps.get(1).and_then(|m| m.as_str().parse::<i64>().ok());
				if level.is_some() {
					trace!("item level found on tooltip line {index}");
					return level;
				}
			}
		}

		trace!("no item level within the first {SCAN_LINE_LIMIT} tooltip lines");
		None
	}
}

/// Scoped hold on the surface; clearing on drop covers every exit path.
struct ScanLease<'a, S: TooltipSurface> {
	surface: &'a mut S,
}

impl<S: TooltipSurface> Drop for ScanLease<'_, S> {
	fn drop(&mut self) {
		self.surface.clear();
	}
}
