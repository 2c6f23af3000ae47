//! RGBA colors in `#RRGGBB` / `#RRGGBBAA` hex form.

use crate::ConfigValue;

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: u8,
}

impl Color {
	/// Creates an opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 0xff }
	}

	/// Parses `#RRGGBB` or `#RRGGBBAA`.
	pub fn from_hex(s: &str) -> Option<Self> {
		let hex = s.strip_prefix('#')?;
		if !matches!(hex.len(), 6 | 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
			return None;
		}
		let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
		Some(Self {
			r: channel(0)?,
			g: channel(2)?,
			b: channel(4)?,
			a: if hex.len() == 8 { channel(6)? } else { 0xff },
		})
	}
}

impl ConfigValue for Color {
	fn from_config(s: &str) -> Option<Self> {
		Self::from_hex(s.trim())
	}

	fn to_config(&self) -> String {
		if self.a == 0xff {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
		}
	}
}
