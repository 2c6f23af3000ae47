//! Compound options: ordered lists of named, multi-field records.
//!
//! The backing store is rows of strings (`[name, v1, .., vn]`); the schema
//! is a fixed list of per-column descriptors declared at construction.
//! Typed reads and writes go through [`CompoundTuple`], implemented for
//! tuples of [`ConfigValue`] fields up to six columns.

use std::marker::PhantomData;
use std::rc::Rc;

use stratum_types::ConfigValue;
use tracing::{debug, trace};

use crate::error::{OptionError, Result};
use crate::option::{OptionBase, UpdatedHandler};


/// Untyped row data: `[name, value_1, .., value_n]` per row.
///
/// Row order is the option's value order, not a lookup index.
pub type Rows = Vec<Vec<String>>;

/// Schema of a compound option: one descriptor per value column.
pub type Entries = Vec<Box<dyn CompoundEntry>>;

/// Per-column descriptor: labels plus the type-erased parse check for the
/// column's declared type.
pub trait CompoundEntry {
	/// Grouping prefix used by the config layer.
	fn prefix(&self) -> &str;

	/// Display name (may be empty).
	fn name(&self) -> &str;

	/// Whether the column's type accepts `value`.
	fn is_parsable(&self, value: &str) -> bool;

	/// Copies the descriptor, preserving labels and type behavior.
	fn clone_entry(&self) -> Box<dyn CompoundEntry>;
}

/// [`CompoundEntry`] for one concrete value type.
pub struct TypedEntry<T: ConfigValue> {
	prefix: String,
	name: String,
	_marker: PhantomData<fn() -> T>,
}

impl<T: ConfigValue + 'static> TypedEntry<T> {
	/// Creates a descriptor with an empty display name.
	pub fn new(prefix: impl Into<String>) -> Self {
		Self::named(prefix, "")
	}

	/// Creates a descriptor with a display name.
	pub fn named(prefix: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			prefix: prefix.into(),
			name: name.into(),
			_marker: PhantomData,
		}
	}

	/// [`Self::new`], boxed for direct use in an [`Entries`] list.
	pub fn boxed(prefix: impl Into<String>) -> Box<dyn CompoundEntry> {
		Box::new(Self::new(prefix))
	}
}

impl<T: ConfigValue + 'static> CompoundEntry for TypedEntry<T> {
	fn prefix(&self) -> &str {
		&self.prefix
	}

	fn name(&self) -> &str {
		&self.name
	}

	fn is_parsable(&self, value: &str) -> bool {
		T::from_config(value).is_some()
	}

	fn clone_entry(&self) -> Box<dyn CompoundEntry> {
		Box::new(Self::named(self.prefix.clone(), self.name.clone()))
	}
}

/// Advisory serialization-style hint for a compound option.
///
/// Config formats use it to pick a "pretty" on-disk shape and are free to
/// ignore it; it is never validated against the actual row structure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListTypeHint {
	/// Plain list; row names are positional.
	Plain,
	/// Dictionary keyed by row name.
	Dict,
	/// Named tuples.
	#[default]
	Tuple,
}

/// Typed view over one row's value columns.
///
/// Implemented for tuples of one to six [`ConfigValue`] fields. `WIDTH`
/// is the field count and must equal the option's descriptor count for
/// any typed access.
pub trait CompoundTuple: Sized {
	/// Number of value columns this tuple covers.
	const WIDTH: usize;

	/// Parses one row's value cells (name excluded).
	fn parse_fields(fields: &[String]) -> Option<Self>;

	/// Appends this tuple's formatted cells to a row.
	fn push_fields(&self, row: &mut Vec<String>);
}

macro_rules! impl_compound_tuple {
	($width:expr, $($ty:ident $idx:tt),+) => {
		impl<$($ty: ConfigValue),+> CompoundTuple for ($($ty,)+) {
			const WIDTH: usize = $width;

			fn parse_fields(fields: &[String]) -> Option<Self> {
				if fields.len() != $width {
					return None;
				}
				Some(($($ty::from_config(&fields[$idx])?,)+))
			}

			fn push_fields(&self, row: &mut Vec<String>) {
				$(row.push(self.$idx.to_config());)+
			}
		}
	};
}

impl_compound_tuple!(1, A 0);
impl_compound_tuple!(2, A 0, B 1);
impl_compound_tuple!(3, A 0, B 1, C 2);
impl_compound_tuple!(4, A 0, B 1, C 2, D 3);
impl_compound_tuple!(5, A 0, B 1, C 2, D 3, E 4);
impl_compound_tuple!(6, A 0, B 1, C 2, D 3, E 4, F 5);

/// A configuration option holding multiple named, multi-field records.
///
/// The value and the default value are stored untyped; every write path
/// validates rows against the schema before replacing the store, so every
/// stored row is `[name, v1, .., vn]` with each cell parsable as its
/// column's type.
pub struct CompoundOption {
	name: String,
	value: Rows,
	default_value: Rows,
	entries: Entries,
	type_hint: ListTypeHint,
	updated_handlers: Vec<UpdatedHandler>,
}

impl CompoundOption {
	/// Creates an option with the given column schema.
	///
	/// `entries` fixes the column count and per-column types for the
	/// option's lifetime. Both the current and the default value start
	/// empty.
	pub fn new(name: impl Into<String>, entries: Entries, type_hint: ListTypeHint) -> Self {
		Self {
			name: name.into(),
			value: Rows::new(),
			default_value: Rows::new(),
			entries,
			type_hint,
			updated_handlers: Vec::new(),
		}
	}

	/// Returns the column descriptors the option was created with.
	pub fn entries(&self) -> &Entries {
		&self.entries
	}

	/// Returns the advisory list-style hint.
	pub fn type_hint(&self) -> ListTypeHint {
		self.type_hint
	}

	/// Returns a copy of the untyped row data, safe for the caller to
	/// mutate.
	pub fn get_value_untyped(&self) -> Rows {
		self.value.clone()
	}

	/// Replaces the row data after validating it against the schema.
	///
	/// Validation is all-or-nothing: on any error the stored value is
	/// unchanged.
	///
	/// # Errors
	///
	/// [`OptionError::RowWidth`] when a row is not a name plus one cell
	/// per column; [`OptionError::Unparsable`] when a cell is rejected by
	/// its column's type.
	pub fn set_value_untyped(&mut self, rows: Rows) -> Result<()> {
		self.validate_rows(&rows)?;
		self.value = rows;
		self.notify_updated();
		Ok(())
	}

	/// Reads the rows as typed tuples `(name, fields)`.
	///
	/// # Panics
	///
	/// Panics when `T::WIDTH` differs from the declared column count, or
	/// when a stored cell does not parse as its column's type; both mean
	/// the caller's type arguments do not match the schema the option was
	/// constructed with.
	pub fn get_value<T: CompoundTuple>(&self) -> Vec<(String, T)> {
		self.check_width(T::WIDTH);
		self.value
			.iter()
			.map(|row| {
				let fields = T::parse_fields(&row[1..]).unwrap_or_else(|| {
					panic!(
						"option '{}': stored row '{}' does not match the requested tuple types",
						self.name, row[0],
					)
				});
				(row[0].clone(), fields)
			})
			.collect()
	}

	/// [`Self::get_value`] without the name column, for options whose row
	/// names are purely positional.
	pub fn get_value_simple<T: CompoundTuple>(&self) -> Vec<T> {
		self.get_value::<T>()
			.into_iter()
			.map(|(_, fields)| fields)
			.collect()
	}

	/// Replaces the rows from typed tuples `(name, fields)`.
	///
	/// Formatting is total, so unlike the untyped setter this cannot fail
	/// on the data.
	///
	/// # Panics
	///
	/// Panics when `T::WIDTH` differs from the declared column count.
	pub fn set_value<T: CompoundTuple>(&mut self, rows: Vec<(String, T)>) {
		self.check_width(T::WIDTH);
		self.value = rows
			.into_iter()
			.map(|(name, fields)| {
				let mut row = Vec::with_capacity(T::WIDTH + 1);
				row.push(name);
				fields.push_fields(&mut row);
				row
			})
			.collect();
		self.notify_updated();
	}

	/// [`Self::set_value`] with row names synthesized as the row index
	/// (`"0"`, `"1"`, ...).
	pub fn set_value_simple<T: CompoundTuple>(&mut self, rows: Vec<T>) {
		let named = rows
			.into_iter()
			.enumerate()
			.map(|(i, fields)| (i.to_string(), fields))
			.collect();
		self.set_value(named);
	}

	/// Deep copy with the same schema, value and default. Updated handlers
	/// are not carried over.
	pub fn clone_compound(&self) -> CompoundOption {
		CompoundOption {
			name: self.name.clone(),
			value: self.value.clone(),
			default_value: self.default_value.clone(),
			entries: self.entries.iter().map(|e| e.clone_entry()).collect(),
			type_hint: self.type_hint,
			updated_handlers: Vec::new(),
		}
	}

	fn check_width(&self, width: usize) {
		assert_eq!(
			width,
			self.entries.len(),
			"option '{}': typed access with {} columns, schema has {}",
			self.name,
			width,
			self.entries.len(),
		);
	}

	fn validate_rows(&self, rows: &Rows) -> Result<()> {
		let expected = self.entries.len() + 1;
		for (i, row) in rows.iter().enumerate() {
			if row.len() != expected {
				debug!(option = %self.name, row = i, "rejected update: wrong row width");
				return Err(OptionError::RowWidth {
					option: self.name.clone(),
					row: i,
					got: row.len(),
					expected,
				});
			}
			for (entry, cell) in self.entries.iter().zip(&row[1..]) {
				if !entry.is_parsable(cell) {
					debug!(
						option = %self.name,
						row = i,
						column = entry.prefix(),
						"rejected update: unparsable cell"
					);
					return Err(OptionError::Unparsable {
						option: self.name.clone(),
						row: i,
						column: entry.prefix().to_string(),
						value: cell.clone(),
					});
				}
			}
		}
		Ok(())
	}

	fn parse_rows(&self, s: &str) -> Result<Rows> {
		let rows: Rows = serde_json::from_str(s).map_err(|e| OptionError::Malformed {
			option: self.name.clone(),
			reason: e.to_string(),
		})?;
		self.validate_rows(&rows)?;
		Ok(rows)
	}

	fn serialize_rows(rows: &Rows) -> String {
		serde_json::to_string(rows).expect("string rows always serialize")
	}

	fn notify_updated(&self) {
		trace!(option = %self.name, rows = self.value.len(), "option updated");
		for handler in &self.updated_handlers {
			handler();
		}
	}
}

impl OptionBase for CompoundOption {
	fn name(&self) -> &str {
		&self.name
	}

	fn set_value_str(&mut self, value: &str) -> Result<()> {
		self.value = self.parse_rows(value)?;
		self.notify_updated();
		Ok(())
	}

	fn get_value_str(&self) -> String {
		Self::serialize_rows(&self.value)
	}

	fn set_default_value_str(&mut self, value: &str) -> Result<()> {
		self.default_value = self.parse_rows(value)?;
		Ok(())
	}

	fn get_default_value_str(&self) -> String {
		Self::serialize_rows(&self.default_value)
	}

	fn reset_to_default(&mut self) {
		// Default rows were validated when they were stored; no re-check.
		self.value = self.default_value.clone();
		self.notify_updated();
	}

	fn clone_option(&self) -> Box<dyn OptionBase> {
		Box::new(self.clone_compound())
	}

	fn add_updated_handler(&mut self, handler: UpdatedHandler) {
		self.updated_handlers.push(handler);
	}

	fn rem_updated_handler(&mut self, handler: &UpdatedHandler) {
		self.updated_handlers.retain(|h| !Rc::ptr_eq(h, handler));
	}
}
