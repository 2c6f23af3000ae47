//! The generic option lifecycle contract.

use std::rc::Rc;

use crate::error::Result;

/// Observer invoked after every successful value mutation.
pub type UpdatedHandler = Rc<dyn Fn()>;

/// Lifecycle surface every configuration option offers to the config layer:
/// cloning, defaults and whole-option string (de)serialization.
///
/// Updated handlers fire synchronously, carry no payload, and are not
/// copied by [`OptionBase::clone_option`].
pub trait OptionBase {
	/// Returns the option identifier.
	fn name(&self) -> &str;

	/// Replaces the current value from its serialized string form.
	///
	/// # Errors
	///
	/// Returns an error (and leaves the stored value untouched) when the
	/// string does not match the option's schema.
	fn set_value_str(&mut self, value: &str) -> Result<()>;

	/// Serializes the current value.
	fn get_value_str(&self) -> String;

	/// Replaces the default value from its serialized string form.
	///
	/// # Errors
	///
	/// Same contract as [`OptionBase::set_value_str`]; on error the stored
	/// default is untouched.
	fn set_default_value_str(&mut self, value: &str) -> Result<()>;

	/// Serializes the default value.
	fn get_default_value_str(&self) -> String;

	/// Replaces the current value with the stored default.
	fn reset_to_default(&mut self);

	/// Deep-copies the option; no mutable state is shared with the clone.
	fn clone_option(&self) -> Box<dyn OptionBase>;

	/// Registers an observer for successful value mutations.
	fn add_updated_handler(&mut self, handler: UpdatedHandler);

	/// Unregisters an observer, matched by pointer identity.
	fn rem_updated_handler(&mut self, handler: &UpdatedHandler);
}
