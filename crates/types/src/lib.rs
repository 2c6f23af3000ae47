//! Primitive value types for stratum configuration options.
//!
//! Every option value is backed by a string in the config file. This crate
//! defines [`ConfigValue`], the parse/format capability that turns those
//! strings into typed values and back, together with impls for the
//! primitive kinds the config system understands.

mod color;
#[cfg(test)]
mod tests;

pub use color::Color;

/// A value that can live in a configuration option.
///
/// `from_config` is partial (foreign text may not parse); `to_config` is
/// total and produces a string that `from_config` accepts back unchanged.
pub trait ConfigValue: Clone {
	/// Parses a configuration string into a typed value.
	fn from_config(s: &str) -> Option<Self>;

	/// Formats the value back into its configuration string form.
	fn to_config(&self) -> String;
}

/// Parses a boolean from the common config spellings.
pub fn parse_bool(value: &str) -> Result<bool, String> {
	match value.to_lowercase().as_str() {
		"true" | "1" | "yes" | "on" => Ok(true),
		"false" | "0" | "no" | "off" => Ok(false),
		_ => Err(format!(
			"invalid boolean: '{value}' (expected true/false, yes/no, on/off, 1/0)"
		)),
	}
}

/// Parses an integer value.
pub fn parse_int(value: &str) -> Result<i64, String> {
	value
		.trim()
		.parse::<i64>()
		.map_err(|_| format!("invalid integer: '{value}'"))
}

impl ConfigValue for bool {
	fn from_config(s: &str) -> Option<Self> {
		parse_bool(s.trim()).ok()
	}

	fn to_config(&self) -> String {
		self.to_string()
	}
}

macro_rules! impl_config_int {
	($($ty:ty),+) => {
		$(impl ConfigValue for $ty {
			fn from_config(s: &str) -> Option<Self> {
				s.trim().parse::<$ty>().ok()
			}

			fn to_config(&self) -> String {
				self.to_string()
			}
		})+
	};
}

impl_config_int!(i32, i64, u32);

impl ConfigValue for f64 {
	fn from_config(s: &str) -> Option<Self> {
		// NaN and infinities have no config spelling.
		s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
	}

	fn to_config(&self) -> String {
		self.to_string()
	}
}

impl ConfigValue for String {
	fn from_config(s: &str) -> Option<Self> {
		Some(s.to_string())
	}

	fn to_config(&self) -> String {
		self.clone()
	}
}
