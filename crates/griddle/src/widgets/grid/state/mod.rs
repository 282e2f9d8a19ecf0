//! Grid view-state: the dataset plus transient view parameters.

use std::collections::BTreeSet;

use super::column::{Column, Sort, SortDirection};
use super::view::{self, ResolvedView};
use crate::record::Record;

const DEFAULT_PAGE_SIZE: usize = 10;

/// State of a [`Grid`](super::Grid): the loaded records plus sort, filter,
/// column visibility, pagination, selection and cursor.
///
/// Every operation is synchronous and total. The visible page is derived
/// from the raw dataset on demand, never cached, so operations compose in
/// any order; stale page or cursor positions are clamped at read time.
///
/// The dataset is a display projection: [`set_records`](Self::set_records)
/// replaces it wholesale whenever the caller re-fetches, and any manual
/// reordering done in between is discarded with it.
///
/// # Example
///
/// ```rust
/// use griddle::{Column, GridState, Record, SortDirection};
///
/// let mut state = GridState::new();
/// state.set_records(vec![
/// 	Record::new("1").code("NC-002"),
/// 	Record::new("2").code("NC-001"),
/// ]);
/// state.set_sort(Column::Code, SortDirection::Ascending);
/// let codes: Vec<&str> = state
/// 	.visible_rows()
/// 	.iter()
/// 	.map(|record| record.code.as_str())
/// 	.collect();
/// assert_eq!(codes, ["NC-001", "NC-002"]);
/// ```
#[derive(Debug, Clone)]
pub struct GridState {
	pub(crate) records: Vec<Record>,
	pub(crate) sort: Option<Sort>,
	pub(crate) filter: Option<String>,
	pub(crate) hidden: BTreeSet<Column>,
	pub(crate) page: usize,
	pub(crate) page_size: usize,
	pub(crate) selected: BTreeSet<String>,
	pub(crate) cursor: Option<usize>,
	pub(crate) drag: Option<String>,
}

impl Default for GridState {
	fn default() -> Self {
		Self {
			records: Vec::new(),
			sort: None,
			filter: None,
			hidden: BTreeSet::new(),
			page: 0,
			page_size: DEFAULT_PAGE_SIZE,
			selected: BTreeSet::new(),
			cursor: None,
			drag: None,
		}
	}
}

impl GridState {
	/// Creates an empty state with the default page size.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the initial records.
	#[must_use = "method moves the value of self and returns the modified value"]
	pub fn with_records(mut self, records: Vec<Record>) -> Self {
		self.set_records(records);
		self
	}

	/// Replaces the dataset wholesale; last write wins.
	///
	/// No merge or diff is attempted. An in-flight drag is cancelled since
	/// its row may no longer exist; selected ids that survive the refresh
	/// stay selected.
	pub fn set_records(&mut self, records: Vec<Record>) {
		self.records = records;
		self.drag = None;
		self.clamp_cursor();
	}

	/// The raw dataset in its current order.
	pub fn records(&self) -> &[Record] {
		&self.records
	}

	/// Looks up a record by id.
	pub fn record(&self, id: &str) -> Option<&Record> {
		self.records.iter().find(|record| record.id == id)
	}

	/// Number of records in the dataset, ignoring the filter.
	pub fn len(&self) -> usize {
		self.records.len()
	}

	/// Returns true if the dataset is empty.
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// The active sort, if any.
	pub fn sort(&self) -> Option<Sort> {
		self.sort
	}

	/// Sorts by `column` in `direction`.
	pub fn set_sort(&mut self, column: Column, direction: SortDirection) {
		self.sort = Some(Sort { column, direction });
	}

	/// Removes the sort, restoring original dataset order.
	pub fn clear_sort(&mut self) {
		self.sort = None;
	}

	/// Cycles the sort on `column`: ascending, descending, then none.
	///
	/// Toggling a different column starts over at ascending.
	pub fn toggle_sort(&mut self, column: Column) {
		self.sort = match self.sort {
			Some(sort) if sort.column == column => match sort.direction {
				SortDirection::Ascending => Some(Sort {
					column,
					direction: SortDirection::Descending,
				}),
				SortDirection::Descending => None,
			},
			_ => Some(Sort {
				column,
				direction: SortDirection::Ascending,
			}),
		};
	}

	/// The active filter text, if any.
	pub fn filter(&self) -> Option<&str> {
		self.filter.as_deref()
	}

	/// Keeps only rows containing `needle` in any column, matched
	/// case-insensitively. Hidden columns still match. An empty needle
	/// clears the filter. Jumps back to the first page.
	pub fn set_filter(&mut self, needle: impl Into<String>) {
		let needle = needle.into();
		self.filter = if needle.is_empty() { None } else { Some(needle) };
		self.page = 0;
		self.clamp_cursor();
	}

	/// Clears the text filter.
	pub fn clear_filter(&mut self) {
		self.filter = None;
	}

	/// Shows or hides a column.
	///
	/// Visibility is purely presentational: hidden columns keep
	/// participating in sorting and filtering.
	pub fn set_column_visible(&mut self, column: Column, visible: bool) {
		if visible {
			self.hidden.remove(&column);
		} else {
			self.hidden.insert(column);
		}
	}

	/// Hides a column.
	pub fn hide_column(&mut self, column: Column) {
		self.set_column_visible(column, false);
	}

	/// Shows a column.
	pub fn show_column(&mut self, column: Column) {
		self.set_column_visible(column, true);
	}

	/// Returns true if the column is currently displayed.
	pub fn is_column_visible(&self, column: Column) -> bool {
		!self.hidden.contains(&column)
	}

	/// The displayed columns in display order.
	pub fn visible_columns(&self) -> Vec<Column> {
		Column::ALL
			.into_iter()
			.filter(|column| self.is_column_visible(*column))
			.collect()
	}

	/// Current page index, clamped into `[0, page_count - 1]`.
	pub fn page(&self) -> usize {
		self.resolve().page
	}

	/// Rows per page.
	pub fn page_size(&self) -> usize {
		self.page_size
	}

	/// Number of pages over the filtered rows; at least 1.
	pub fn page_count(&self) -> usize {
		self.resolve().page_count
	}

	/// Number of records passing the filter.
	pub fn filtered_len(&self) -> usize {
		self.resolve().filtered
	}

	/// Jumps to page `index`, clamped into the valid range.
	pub fn set_page(&mut self, index: usize) {
		self.page = index.min(self.page_count() - 1);
		self.clamp_cursor();
	}

	/// Sets the page size (floored at 1) and resets to the first page.
	pub fn set_page_size(&mut self, size: usize) {
		self.page_size = size.max(1);
		self.page = 0;
		self.clamp_cursor();
	}

	/// Advances one page, saturating at the last.
	pub fn next_page(&mut self) {
		self.set_page(self.page().saturating_add(1));
	}

	/// Goes back one page, saturating at the first.
	pub fn prev_page(&mut self) {
		self.set_page(self.page().saturating_sub(1));
	}

	/// Toggles selection of the record with `id`.
	pub fn toggle_selected(&mut self, id: impl Into<String>) {
		let id = id.into();
		if !self.selected.remove(&id) {
			self.selected.insert(id);
		}
	}

	/// Returns true if the record with `id` is selected.
	pub fn is_selected(&self, id: &str) -> bool {
		self.selected.contains(id)
	}

	/// Clears the selection.
	pub fn clear_selection(&mut self) {
		self.selected.clear();
	}

	/// The selected ids in lexical order.
	pub fn selected_ids(&self) -> impl Iterator<Item = &str> {
		self.selected.iter().map(String::as_str)
	}

	/// Position of the cursor within the current page, if any.
	pub fn cursor(&self) -> Option<usize> {
		self.cursor
	}

	/// The record under the cursor.
	pub fn cursor_record(&self) -> Option<&Record> {
		let index = *self.resolve().rows.get(self.cursor?)?;
		self.records.get(index)
	}

	/// Moves the cursor down one row, entering the page at the top.
	pub fn cursor_next(&mut self) {
		let len = self.resolve().rows.len();
		if len == 0 {
			self.cursor = None;
			return;
		}
		self.cursor = Some(match self.cursor {
			Some(position) => (position + 1).min(len - 1),
			None => 0,
		});
	}

	/// Moves the cursor up one row, entering the page at the top.
	pub fn cursor_prev(&mut self) {
		if self.resolve().rows.is_empty() {
			self.cursor = None;
			return;
		}
		self.cursor = Some(match self.cursor {
			Some(position) => position.saturating_sub(1),
			None => 0,
		});
	}

	/// Moves the cursor to the first row of the page.
	pub fn cursor_first(&mut self) {
		self.cursor = (!self.resolve().rows.is_empty()).then_some(0);
	}

	/// Moves the cursor to the last row of the page.
	pub fn cursor_last(&mut self) {
		let len = self.resolve().rows.len();
		self.cursor = (len > 0).then(|| len - 1);
	}

	/// Clears the cursor.
	pub fn clear_cursor(&mut self) {
		self.cursor = None;
	}

	/// The current page's rows in display order.
	///
	/// Filter, sort and pagination are applied on every call; with none of
	/// them active this is the dataset's original order.
	pub fn visible_rows(&self) -> Vec<&Record> {
		self.resolve()
			.rows
			.iter()
			.map(|&index| &self.records[index])
			.collect()
	}

	pub(crate) fn resolve(&self) -> ResolvedView {
		view::resolve(
			&self.records,
			self.sort,
			self.filter.as_deref(),
			self.page,
			self.page_size,
		)
	}

	pub(crate) fn clamp_cursor(&mut self) {
		let len = self.resolve().rows.len();
		self.cursor = match self.cursor {
			Some(_) if len == 0 => None,
			Some(position) => Some(position.min(len - 1)),
			None => None,
		};
	}
}
