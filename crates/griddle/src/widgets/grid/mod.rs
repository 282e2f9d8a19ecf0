//! The [`Grid`] widget displays a record dataset as a sortable, filterable,
//! pageable table driven by [`GridState`].

use itertools::Itertools;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::block::BlockExt;
use ratatui::widgets::{Block, StatefulWidget, Widget};

pub use self::column::{Column, Sort, SortDirection};
pub use self::state::GridState;
use self::view::ResolvedView;
use crate::cells;

mod column;
mod reorder;
mod state;
mod view;

/// A widget displaying records in sortable, filterable, pageable columns.
///
/// `Grid` holds presentation only; records and view parameters live in
/// [`GridState`], which the caller owns and mutates from its event loop.
/// Construct with [`Grid::new`] and chain builder methods. Column widths
/// default to per-column constraints; override them with [`Grid::widths`].
///
/// Each render derives the visible page from the state's raw dataset
/// (filter, then stable sort, then pagination) and clamps any stale page
/// or cursor position it finds.
///
/// # Example
///
/// ```rust
/// use griddle::{Grid, GridState, Record};
/// use ratatui::style::{Style, Stylize};
/// use ratatui::widgets::Block;
///
/// let grid = Grid::new()
/// 	.block(Block::bordered().title("Non-conformities"))
/// 	.highlight_symbol("> ")
/// 	.row_highlight_style(Style::new().reversed());
///
/// let mut state = GridState::new();
/// state.set_records(vec![Record::new("1").code("NC-001").status("open")]);
/// // frame.render_stateful_widget(grid, area, &mut state);
/// ```
#[derive(Debug, Clone)]
pub struct Grid<'a> {
	/// A block to wrap the widget in
	block: Option<Block<'a>>,

	/// Base style for the widget
	style: Style,

	/// Style of the header line
	header_style: Style,

	/// Style applied to the cursor row
	row_highlight_style: Style,

	/// Style applied to rows whose id is selected
	selected_row_style: Style,

	/// Style applied to the row being dragged
	drag_style: Style,

	/// Symbol in front of the cursor row
	highlight_symbol: Text<'a>,

	/// Width constraints overriding the per-column defaults
	widths: Vec<Constraint>,

	/// Space between each column
	column_spacing: u16,

	/// Controls how to distribute extra space among the columns
	flex: Flex,

	/// Whether the pager line is drawn
	pager: bool,
}

impl Default for Grid<'_> {
	fn default() -> Self {
		Self {
			block: None,
			style: Style::new(),
			header_style: Style::new(),
			row_highlight_style: Style::new(),
			selected_row_style: Style::new(),
			drag_style: Style::new(),
			highlight_symbol: Text::default(),
			widths: Vec::new(),
			column_spacing: 1,
			flex: Flex::Start,
			pager: true,
		}
	}
}

impl<'a> Grid<'a> {
	/// Creates a grid with default presentation.
	pub fn new() -> Self {
		Self::default()
	}

	/// Wraps the grid with a [`Block`] widget.
	#[must_use = "method moves the value of self and returns the modified value"]
	pub fn block(mut self, block: Block<'a>) -> Self {
		self.block = Some(block);
		self
	}

	/// Sets the base style. Row and header styles are patched on top.
	#[must_use = "method moves the value of self and returns the modified value"]
	pub fn style<S: Into<Style>>(mut self, style: S) -> Self {
		self.style = style.into();
		self
	}

	/// Sets the header line style.
	#[must_use = "method moves the value of self and returns the modified value"]
	pub fn header_style<S: Into<Style>>(mut self, style: S) -> Self {
		self.header_style = style.into();
		self
	}

	/// Style for the cursor row. Applied over cell styles, includes the
	/// highlight symbol gutter.
	#[must_use = "method moves the value of self and returns the modified value"]
	pub fn row_highlight_style<S: Into<Style>>(mut self, style: S) -> Self {
		self.row_highlight_style = style.into();
		self
	}

	/// Style for rows whose id is in the selection set.
	#[must_use = "method moves the value of self and returns the modified value"]
	pub fn selected_row_style<S: Into<Style>>(mut self, style: S) -> Self {
		self.selected_row_style = style.into();
		self
	}

	/// Style for the row currently being dragged.
	#[must_use = "method moves the value of self and returns the modified value"]
	pub fn drag_style<S: Into<Style>>(mut self, style: S) -> Self {
		self.drag_style = style.into();
		self
	}

	/// Symbol displayed in front of the cursor row (e.g. `"> "`).
	///
	/// Gutter space for the symbol is allocated only while a cursor is
	/// present.
	#[must_use = "method moves the value of self and returns the modified value"]
	pub fn highlight_symbol<T: Into<Text<'a>>>(mut self, highlight_symbol: T) -> Self {
		self.highlight_symbol = highlight_symbol.into();
		self
	}

	/// Overrides the per-column default width constraints.
	///
	/// Constraints apply to the visible columns in display order. Accepts
	/// anything that converts into [`Constraint`]s, including `u16`
	/// lengths.
	#[must_use = "method moves the value of self and returns the modified value"]
	pub fn widths<I>(mut self, widths: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<Constraint>,
	{
		let widths = widths.into_iter().map(Into::into).collect_vec();
		ensure_percentages_less_than_100(&widths);
		self.widths = widths;
		self
	}

	/// Set the spacing between columns.
	#[must_use = "method moves the value of self and returns the modified value"]
	pub const fn column_spacing(mut self, spacing: u16) -> Self {
		self.column_spacing = spacing;
		self
	}

	/// Controls extra space distribution among columns (default:
	/// [`Flex::Start`]).
	#[must_use = "method moves the value of self and returns the modified value"]
	pub const fn flex(mut self, flex: Flex) -> Self {
		self.flex = flex;
		self
	}

	/// Shows or hides the pager line (default: shown).
	#[must_use = "method moves the value of self and returns the modified value"]
	pub const fn pager(mut self, pager: bool) -> Self {
		self.pager = pager;
		self
	}
}

impl Widget for Grid<'_> {
	fn render(self, area: Rect, buf: &mut Buffer) {
		Widget::render(&self, area, buf);
	}
}

impl Widget for &Grid<'_> {
	fn render(self, area: Rect, buf: &mut Buffer) {
		let mut state = GridState::default();
		StatefulWidget::render(self, area, buf, &mut state);
	}
}

impl StatefulWidget for Grid<'_> {
	type State = GridState;

	fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
		StatefulWidget::render(&self, area, buf, state);
	}
}

impl StatefulWidget for &Grid<'_> {
	type State = GridState;

	fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
		buf.set_style(area, self.style);
		if let Some(block) = &self.block {
			block.render(area, buf);
		}
		let grid_area = self.block.inner_if_some(area);
		if grid_area.is_empty() {
			return;
		}

		let view = state.resolve();
		state.page = view.page;
		state.clamp_cursor();

		let columns = state.visible_columns();
		if columns.is_empty() {
			return;
		}

		let selection_width = self.selection_width(state);
		let column_widths = self.column_widths(&columns, grid_area.width, selection_width);
		let (header_area, rows_area, pager_area) = self.layout(grid_area);

		self.render_header(header_area, buf, state, &columns, &column_widths);
		self.render_rows(
			rows_area,
			buf,
			state,
			&view,
			&columns,
			&column_widths,
			selection_width,
		);
		if self.pager {
			self.render_pager(pager_area, buf, &view);
		}
	}
}

// private methods for rendering
impl Grid<'_> {
	/// Splits the grid area into a header line, a rows area and a pager
	/// line.
	fn layout(&self, area: Rect) -> (Rect, Rect, Rect) {
		let layout = Layout::vertical([
			Constraint::Length(1),
			Constraint::Min(0),
			Constraint::Length(u16::from(self.pager)),
		])
		.split(area);
		(layout[0], layout[1], layout[2])
	}

	fn render_header(
		&self,
		area: Rect,
		buf: &mut Buffer,
		state: &GridState,
		columns: &[Column],
		column_widths: &[(u16, u16)],
	) {
		if area.is_empty() {
			return;
		}
		buf.set_style(area, self.header_style);
		for ((x, width), column) in column_widths.iter().zip(columns) {
			let title = match state.sort() {
				Some(sort) if sort.column == *column => {
					let marker = match sort.direction {
						SortDirection::Ascending => " ↑",
						SortDirection::Descending => " ↓",
					};
					format!("{}{marker}", column.title())
				}
				_ => column.title().to_string(),
			};
			buf.set_span(area.x + x, area.y, &Span::raw(title), *width);
		}
	}

	#[allow(clippy::too_many_arguments)]
	fn render_rows(
		&self,
		area: Rect,
		buf: &mut Buffer,
		state: &GridState,
		view: &ResolvedView,
		columns: &[Column],
		column_widths: &[(u16, u16)],
		selection_width: u16,
	) {
		for (position, &index) in view.rows.iter().enumerate() {
			if position as u16 >= area.height {
				break;
			}
			let record = &state.records[index];
			let row_area = Rect {
				y: area.y + position as u16,
				height: 1,
				..area
			};

			if state.is_selected(&record.id) {
				buf.set_style(row_area, self.selected_row_style);
			}

			let is_cursor = state.cursor() == Some(position);
			if selection_width > 0 && is_cursor {
				let selection_area = Rect {
					width: selection_width,
					..row_area
				};
				(&self.highlight_symbol).render(selection_area, buf);
			}
			for ((x, width), column) in column_widths.iter().zip(columns) {
				let span = cells::cell_span(record, *column);
				buf.set_span(row_area.x + x, row_area.y, &span, *width);
			}
			if is_cursor {
				buf.set_style(row_area, self.row_highlight_style);
			}
			if state.dragging() == Some(record.id.as_str()) {
				buf.set_style(row_area, self.drag_style);
			}
		}
	}

	fn render_pager(&self, area: Rect, buf: &mut Buffer, view: &ResolvedView) {
		if area.is_empty() {
			return;
		}
		let label = format!(
			"page {}/{} ({} records)",
			view.page + 1,
			view.page_count,
			view.filtered
		);
		buf.set_line(area.x, area.y, &Line::raw(label), area.width);
	}

	/// Get all offsets and widths of the visible columns.
	///
	/// Returns (x, width). When no widths were set, each column falls back
	/// to its default constraint.
	fn column_widths(
		&self,
		columns: &[Column],
		max_width: u16,
		selection_width: u16,
	) -> Vec<(u16, u16)> {
		let widths = if self.widths.is_empty() {
			columns.iter().map(|column| column.constraint()).collect_vec()
		} else {
			self.widths.clone()
		};
		// this will always allocate a selection area
		let [_selection_area, columns_area] =
			Layout::horizontal([Constraint::Length(selection_width), Constraint::Fill(0)])
				.areas(Rect::new(0, 0, max_width, 1));
		let rects = Layout::horizontal(widths)
			.flex(self.flex)
			.spacing(self.column_spacing)
			.split(columns_area);
		rects.iter().map(|c| (c.x, c.width)).collect()
	}

	/// Returns the width of the selection gutter: the highlight symbol
	/// width while a cursor is present, otherwise 0.
	fn selection_width(&self, state: &GridState) -> u16 {
		if state.cursor().is_some() {
			self.highlight_symbol.width() as u16
		} else {
			0
		}
	}
}

fn ensure_percentages_less_than_100(widths: &[Constraint]) {
	for w in widths {
		if let Constraint::Percentage(p) = w {
			assert!(
				*p <= 100,
				"Percentages should be between 0 and 100 inclusively."
			);
		}
	}
}

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
