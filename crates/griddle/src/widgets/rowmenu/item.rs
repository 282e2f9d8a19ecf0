//! Action menu entries.

use std::borrow::Cow;

/// Visual treatment of an action entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ActionVariant {
	/// Regular entry.
	#[default]
	Default,
	/// Irreversible operation, rendered apart from the regular entries.
	Destructive,
}

/// One entry of a row action menu.
///
/// Carries a command payload that is handed back to the caller when the
/// entry is selected; the menu itself never executes anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionItem<T> {
	/// Display label for the entry.
	pub(crate) label: Cow<'static, str>,
	/// Payload emitted when the entry is selected.
	pub(crate) command: T,
	/// Visual treatment.
	pub(crate) variant: ActionVariant,
}

impl<T> ActionItem<T> {
	/// Creates a regular entry.
	pub fn new(label: impl Into<Cow<'static, str>>, command: T) -> Self {
		Self {
			label: label.into(),
			command,
			variant: ActionVariant::Default,
		}
	}

	/// Marks the entry as destructive.
	#[must_use = "method moves the value of self and returns the modified value"]
	pub fn destructive(mut self) -> Self {
		self.variant = ActionVariant::Destructive;
		self
	}

	/// The entry's display label.
	pub fn label(&self) -> &str {
		&self.label
	}

	/// The entry's visual variant.
	pub fn variant(&self) -> ActionVariant {
		self.variant
	}
}
