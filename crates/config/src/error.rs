//! Error types for option value updates.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, OptionError>;

/// Errors from the data paths of an option.
///
/// These cover untrusted input only (serialized value strings, untyped row
/// updates); on any of them the previously stored value is left unchanged.
/// Schema mismatches in the typed accessors are programming errors and
/// panic instead.
#[derive(Debug, Error)]
pub enum OptionError {
	/// The serialized value string is not valid row data.
	#[error("option '{option}': malformed value string: {reason}")]
	Malformed {
		/// Name of the option being updated.
		option: String,
		/// What the deserializer objected to.
		reason: String,
	},

	/// A row does not consist of a name plus one cell per column.
	#[error("option '{option}': row {row} has {got} fields, expected {expected}")]
	RowWidth {
		/// Name of the option being updated.
		option: String,
		/// Index of the offending row.
		row: usize,
		/// Field count found in the row.
		got: usize,
		/// Schema column count plus the name field.
		expected: usize,
	},

	/// A cell was rejected by its column's declared type.
	#[error("option '{option}': row {row}, column '{column}': unparsable value '{value}'")]
	Unparsable {
		/// Name of the option being updated.
		option: String,
		/// Index of the offending row.
		row: usize,
		/// Prefix of the column whose type rejected the cell.
		column: String,
		/// The rejected cell content.
		value: String,
	},
}
