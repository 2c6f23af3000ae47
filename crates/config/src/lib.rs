//! Compound configuration options for stratum.
//!
//! A compound option holds an ordered list of named, multi-field records
//! instead of one scalar. The backing store is untyped rows of strings
//! (so the whole option serializes to a flat config format), while callers
//! read and write the same rows as strongly typed tuples
//! `(name, T1, .., Tn)`.
//!
//! The column schema is declared once, at construction, as an ordered list
//! of [`CompoundEntry`] descriptors; typed access happens later through
//! [`CompoundOption::get_value`] / [`CompoundOption::set_value`] with a
//! tuple type whose arity and element types match that schema. In the
//! config file the columns are grouped by prefix: a schema with prefixes
//! `{"prefix1_", "prefix2_"}` maps entries `prefix1_key1` and
//! `prefix2_key1` onto the row named `key1`. That grouping is the config
//! reader's job; this crate owns the in-memory abstraction only.
//!
//! ```
//! use stratum_config::{CompoundOption, ListTypeHint, TypedEntry};
//!
//! let mut opt = CompoundOption::new(
//! 	"bindings",
//! 	vec![
//! 		TypedEntry::<i32>::boxed("priority_"),
//! 		TypedEntry::<String>::boxed("command_"),
//! 	],
//! 	ListTypeHint::Tuple,
//! );
//!
//! opt.set_value(vec![("terminal".to_string(), (1_i32, "alacritty".to_string()))]);
//! assert_eq!(
//! 	opt.get_value::<(i32, String)>(),
//! 	vec![("terminal".to_string(), (1, "alacritty".to_string()))],
//! );
//! ```

pub mod compound;
pub mod error;
pub mod option;

pub use compound::{
	CompoundEntry, CompoundOption, CompoundTuple, Entries, ListTypeHint, Rows, TypedEntry,
};
pub use error::{OptionError, Result};
pub use option::{OptionBase, UpdatedHandler};
pub use stratum_types::ConfigValue;
