//! Link string serialization.

use super::record::ItemString;

impl ItemString {
	/// Re-serializes the record to wire form.
	///
	/// Zero-valued fields render as empty segments: an originally empty
	/// segment and an explicit `0` share one on-the-wire representation, the
	/// exact inverse of the decode coercion. Everything else round-trips
	/// field for field.
	///
	/// # Examples
	///
	/// ```
	/// use itemstring_types::link::ItemString;
	///
	/// let record = ItemString::parse("item:6948:0:2");
	/// assert_eq!(record.encode(), "item:6948::2");
	/// ```
	pub fn encode(&self) -> String {
		if self.is_empty() {
			return String::new();
		}

		let mut out = String::with_capacity(self.link_type().len() + self.fields().len() * 4);
		out.push_str(self.link_type());
		for &field in self.fields() {
			out.push(':');
			if field != 0 {
				out.push_str(&field.to_string());
			}
		}
		out
	}
}
