use super::*;
use crate::record::Record;


fn two_column_state() -> GridState {
	let mut state = GridState::new();
	state.set_records(vec![
		Record::new("1").code("NC-001").assignee("Ada"),
		Record::new("2").code("NC-002").assignee("Grace"),
	]);
	for column in [
		Column::Kind,
		Column::Description,
		Column::Status,
		Column::Severity,
		Column::Date,
	] {
		state.hide_column(column);
	}
	state
}

fn two_column_grid() -> Grid<'static> {
	Grid::new().widths([Constraint::Length(6), Constraint::Length(8)])
}
