//! Drag-to-reorder: translating a grab/drop gesture into an array move.

use super::state::GridState;

impl GridState {
	/// Moves the row with `active_id` to the position of `target_id`.
	///
	/// The classic list move: the element is removed and reinserted, so
	/// exactly one element relocates and every other row keeps its
	/// relative order. Returns false without touching the dataset when the
	/// ids are equal or either is absent.
	///
	/// The new order is local state only; it is not written back anywhere,
	/// and the next [`set_records`](GridState::set_records) discards it.
	pub fn move_row(&mut self, active_id: &str, target_id: &str) -> bool {
		if active_id == target_id {
			return false;
		}
		let Some(old_index) = self.records.iter().position(|r| r.id == active_id) else {
			return false;
		};
		let Some(new_index) = self.records.iter().position(|r| r.id == target_id) else {
			return false;
		};
		let row = self.records.remove(old_index);
		self.records.insert(new_index, row);
		true
	}

	/// Starts a drag on the row with `id`.
	///
	/// Only rows on the current page can be grabbed; returns false
	/// otherwise. A drag already in flight is replaced.
	pub fn begin_drag(&mut self, id: impl Into<String>) -> bool {
		let id = id.into();
		if !self.on_current_page(&id) {
			return false;
		}
		self.drag = Some(id);
		true
	}

	/// The id of the row being dragged, if a drag is active.
	pub fn dragging(&self) -> Option<&str> {
		self.drag.as_deref()
	}

	/// Abandons the current drag without moving anything.
	pub fn cancel_drag(&mut self) {
		self.drag = None;
	}

	/// Ends the drag over the row with `target_id`, applying the move.
	///
	/// The target must be on the current page; dropping elsewhere leaves
	/// the drag active so the caller can retry or cancel. Dropping on the
	/// grabbed row itself ends the drag without moving anything. Returns
	/// true when the order changed.
	pub fn drop_on(&mut self, target_id: &str) -> bool {
		let Some(active) = self.drag.clone() else {
			return false;
		};
		if active == target_id {
			self.drag = None;
			return false;
		}
		if !self.on_current_page(target_id) {
			return false;
		}
		let moved = self.move_row(&active, target_id);
		if moved {
			self.drag = None;
		}
		moved
	}

	fn on_current_page(&self, id: &str) -> bool {
		self.resolve()
			.rows
			.iter()
			.any(|&index| self.records[index].id == id)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::record::Record;

	fn state() -> GridState {
		GridState::new().with_records(
			["1", "2", "3", "4"]
				.into_iter()
				.map(|id| Record::new(id).code(format!("NC-00{id}")))
				.collect(),
		)
	}

	fn order(state: &GridState) -> Vec<&str> {
		state.records().iter().map(|r| r.id.as_str()).collect()
	}

	#[test]
	fn move_relocates_exactly_one_row() {
		let mut state = state();
		assert!(state.move_row("1", "3"));
		// 1 lands where 3 was; 2, 3, 4 keep their relative order.
		assert_eq!(order(&state), ["2", "3", "1", "4"]);
	}

	#[test]
	fn move_backward() {
		let mut state = state();
		assert!(state.move_row("4", "2"));
		assert_eq!(order(&state), ["1", "4", "2", "3"]);
	}

	#[test]
	fn move_preserves_id_multiset() {
		let mut state = state();
		state.move_row("2", "4");
		let mut sorted = order(&state);
		sorted.sort_unstable();
		assert_eq!(sorted, ["1", "2", "3", "4"]);
	}

	#[test]
	fn move_to_self_is_noop() {
		let mut state = state();
		assert!(!state.move_row("2", "2"));
		assert_eq!(order(&state), ["1", "2", "3", "4"]);
	}

	#[test]
	fn move_unknown_id_is_noop() {
		let mut state = state();
		assert!(!state.move_row("9", "2"));
		assert!(!state.move_row("2", "9"));
		assert_eq!(order(&state), ["1", "2", "3", "4"]);
	}

	#[test]
	fn drag_lifecycle() {
		let mut state = state();
		assert!(state.begin_drag("1"));
		assert_eq!(state.dragging(), Some("1"));
		assert!(state.drop_on("3"));
		assert_eq!(state.dragging(), None);
		assert_eq!(order(&state), ["2", "3", "1", "4"]);
	}

	#[test]
	fn drop_on_self_ends_drag_unchanged() {
		let mut state = state();
		state.begin_drag("2");
		assert!(!state.drop_on("2"));
		assert_eq!(state.dragging(), None);
		assert_eq!(order(&state), ["1", "2", "3", "4"]);
	}

	#[test]
	fn cancel_drag_keeps_order() {
		let mut state = state();
		state.begin_drag("2");
		state.cancel_drag();
		assert_eq!(state.dragging(), None);
		assert_eq!(order(&state), ["1", "2", "3", "4"]);
	}

	#[test]
	fn drag_is_scoped_to_the_current_page() {
		let mut state = state();
		state.set_page_size(2);
		// Row 4 is on the second page.
		assert!(!state.begin_drag("4"));

		assert!(state.begin_drag("1"));
		assert!(!state.drop_on("4"));
		// Off-page drop leaves the drag active.
		assert_eq!(state.dragging(), Some("1"));
		assert!(state.drop_on("2"));
		assert_eq!(order(&state), ["2", "1", "3", "4"]);
	}

	#[test]
	fn refetch_cancels_drag() {
		let mut state = state();
		state.begin_drag("2");
		state.set_records(vec![Record::new("1")]);
		assert_eq!(state.dragging(), None);
	}

	#[test]
	fn drop_without_drag_is_noop() {
		let mut state = state();
		assert!(!state.drop_on("2"));
		assert_eq!(order(&state), ["1", "2", "3", "4"]);
	}
}
