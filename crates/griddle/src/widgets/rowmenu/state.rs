//! Row menu state management.

use super::item::{ActionItem, ActionVariant};

/// Events emitted by menu interactions, drained by the caller.
///
/// The menu does not run commands itself: it reports what was picked for
/// which row and leaves execution, feedback and error handling to the
/// embedding application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionEvent<T> {
	/// An entry was selected for the row the menu was opened on.
	Invoked {
		/// The selected entry's command payload.
		command: T,
		/// Id of the record the menu was opened for.
		record_id: String,
	},
}

/// Runtime state for a row action menu.
///
/// Tracks which row the menu is open for, the highlighted entry and the
/// pending events.
///
/// # Example
///
/// ```rust
/// use griddle::{ActionEvent, ActionItem, RowMenuState};
///
/// let mut menu = RowMenuState::new(vec![
/// 	ActionItem::new("Edit", "edit"),
/// 	ActionItem::new("Delete", "delete").destructive(),
/// ]);
/// menu.open("7");
/// menu.down();
/// menu.select();
/// let events: Vec<_> = menu.drain_events().collect();
/// assert_eq!(
/// 	events,
/// 	[ActionEvent::Invoked { command: "delete", record_id: "7".into() }]
/// );
/// ```
pub struct RowMenuState<T> {
	items: Vec<ActionItem<T>>,
	open_for: Option<String>,
	highlighted: usize,
	events: Vec<ActionEvent<T>>,
}

impl<T> RowMenuState<T> {
	/// Creates a menu with the given entries.
	pub fn new(items: Vec<ActionItem<T>>) -> Self {
		Self {
			items,
			open_for: None,
			highlighted: 0,
			events: Vec::new(),
		}
	}

	/// The configured entries.
	pub fn items(&self) -> &[ActionItem<T>] {
		&self.items
	}

	/// Opens the menu for the record with `id`, highlighting the first
	/// entry. Opening while already open moves the menu to the new row.
	pub fn open(&mut self, record_id: impl Into<String>) {
		self.open_for = Some(record_id.into());
		self.highlighted = 0;
	}

	/// Closes the menu without selecting anything.
	pub fn close(&mut self) {
		self.open_for = None;
	}

	/// Returns true while the menu is open.
	pub fn is_open(&self) -> bool {
		self.open_for.is_some()
	}

	/// Id of the record the menu is open for.
	pub fn open_for(&self) -> Option<&str> {
		self.open_for.as_deref()
	}

	/// Index of the highlighted entry.
	pub fn highlighted(&self) -> usize {
		self.highlighted
	}

	/// Moves the highlight down, wrapping at the end.
	pub fn down(&mut self) {
		if self.items.is_empty() || !self.is_open() {
			return;
		}
		self.highlighted = (self.highlighted + 1) % self.items.len();
	}

	/// Moves the highlight up, wrapping at the start.
	pub fn up(&mut self) {
		if self.items.is_empty() || !self.is_open() {
			return;
		}
		self.highlighted = self
			.highlighted
			.checked_sub(1)
			.unwrap_or(self.items.len() - 1);
	}

	/// Returns true when a separator is drawn above the entry at `index`:
	/// the first destructive entry, when it is not also the first entry.
	pub fn separator_before(&self, index: usize) -> bool {
		separator_index(&self.items) == Some(index)
	}

	/// Drains pending events.
	pub fn drain_events(&mut self) -> impl Iterator<Item = ActionEvent<T>> + '_ {
		self.events.drain(..)
	}
}

impl<T: Clone> RowMenuState<T> {
	/// Selects the highlighted entry.
	///
	/// Emits exactly one [`ActionEvent::Invoked`] carrying the entry's
	/// command and the opened row's id, then closes the menu. Does nothing
	/// while the menu is closed.
	pub fn select(&mut self) {
		let Some(record_id) = self.open_for.take() else {
			return;
		};
		if let Some(item) = self.items.get(self.highlighted) {
			self.events.push(ActionEvent::Invoked {
				command: item.command.clone(),
				record_id,
			});
		}
	}
}

/// Index of the entry a separator is drawn above, if any: the first
/// destructive entry when destructive entries don't lead the list.
pub(crate) fn separator_index<T>(items: &[ActionItem<T>]) -> Option<usize> {
	let first = items.iter().position(|item| match item.variant {
		ActionVariant::Destructive => true,
		ActionVariant::Default => false,
	})?;
	(first != 0).then_some(first)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn menu() -> RowMenuState<&'static str> {
		RowMenuState::new(vec![
			ActionItem::new("View", "view"),
			ActionItem::new("Edit", "edit"),
			ActionItem::new("Delete", "delete").destructive(),
		])
	}

	#[test]
	fn opens_on_a_row() {
		let mut menu = menu();
		assert!(!menu.is_open());
		menu.open("7");
		assert!(menu.is_open());
		assert_eq!(menu.open_for(), Some("7"));
		assert_eq!(menu.highlighted(), 0);
	}

	#[test]
	fn reopening_resets_highlight() {
		let mut menu = menu();
		menu.open("7");
		menu.down();
		menu.open("8");
		assert_eq!(menu.open_for(), Some("8"));
		assert_eq!(menu.highlighted(), 0);
	}

	#[test]
	fn navigation_wraps() {
		let mut menu = menu();
		menu.open("7");
		menu.up();
		assert_eq!(menu.highlighted(), 2);
		menu.down();
		assert_eq!(menu.highlighted(), 0);
		menu.down();
		menu.down();
		menu.down();
		assert_eq!(menu.highlighted(), 0);
	}

	#[test]
	fn navigation_ignored_while_closed() {
		let mut menu = menu();
		menu.down();
		assert_eq!(menu.highlighted(), 0);
	}

	#[test]
	fn select_emits_exactly_once_with_the_opened_row() {
		let mut menu = menu();
		menu.open("7");
		menu.down();
		menu.select();

		let events: Vec<_> = menu.drain_events().collect();
		assert_eq!(
			events,
			[ActionEvent::Invoked {
				command: "edit",
				record_id: "7".into()
			}]
		);
		assert!(!menu.is_open());
		assert_eq!(menu.drain_events().count(), 0);
	}

	#[test]
	fn select_while_closed_is_noop() {
		let mut menu = menu();
		menu.select();
		assert_eq!(menu.drain_events().count(), 0);
	}

	#[test]
	fn selection_is_independent_of_view_state() {
		use crate::record::Record;
		use crate::widgets::grid::{Column, GridState, SortDirection};

		let mut grid = GridState::new().with_records(vec![
			Record::new("1").code("NC-002").assignee("Ada"),
			Record::new("2").code("NC-001").assignee("Ada"),
			Record::new("3").code("NC-003").assignee("Grace"),
		]);
		grid.set_filter("ada");
		grid.set_sort(Column::Code, SortDirection::Ascending);
		grid.cursor_first();
		let row = grid.cursor_record().unwrap();

		let mut menu = menu();
		menu.open(row.id.clone());
		menu.select();
		let events: Vec<_> = menu.drain_events().collect();
		assert_eq!(
			events,
			[ActionEvent::Invoked {
				command: "view",
				record_id: "2".into()
			}]
		);
	}

	#[test]
	fn separator_precedes_first_destructive_entry() {
		let menu = menu();
		assert!(!menu.separator_before(0));
		assert!(!menu.separator_before(1));
		assert!(menu.separator_before(2));
	}

	#[test]
	fn no_separator_when_destructive_leads() {
		let menu: RowMenuState<&str> = RowMenuState::new(vec![
			ActionItem::new("Delete", "delete").destructive(),
			ActionItem::new("View", "view"),
		]);
		assert!(!menu.separator_before(0));
		assert!(!menu.separator_before(1));
	}

	#[test]
	fn no_separator_without_destructive_entries() {
		let menu: RowMenuState<&str> = RowMenuState::new(vec![
			ActionItem::new("View", "view"),
			ActionItem::new("Edit", "edit"),
		]);
		assert_eq!(separator_index(menu.items()), None);
	}
}
