//! Row menu rendering.

use core::marker::PhantomData;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Clear, StatefulWidget, Widget};
use unicode_width::UnicodeWidthStr;

use super::item::ActionVariant;
use super::state::{RowMenuState, separator_index};

/// A dropdown listing the actions available for one row.
///
/// Renders as an overlay anchored at the top-left corner of the given
/// area, typically next to the row the menu was opened for, sized to its
/// labels and clamped to the buffer. Destructive entries are set apart
/// from the regular ones by a rule line.
pub struct RowMenu<T> {
	default_style: Style,
	highlight_style: Style,
	destructive_style: Style,
	_marker: PhantomData<T>,
}

impl<T> Default for RowMenu<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> RowMenu<T> {
	/// Creates a menu with default styling.
	pub fn new() -> Self {
		Self {
			default_style: Style::default().fg(Color::White),
			highlight_style: Style::default().fg(Color::White).bg(Color::LightBlue),
			destructive_style: Style::default().fg(Color::LightRed),
			_marker: PhantomData,
		}
	}

	/// Sets the default (non-highlighted) entry style.
	pub fn style(mut self, style: Style) -> Self {
		self.default_style = style;
		self
	}

	/// Sets the highlighted entry style.
	pub fn highlight_style(mut self, style: Style) -> Self {
		self.highlight_style = style;
		self
	}

	/// Sets the style of destructive entries.
	pub fn destructive_style(mut self, style: Style) -> Self {
		self.destructive_style = style;
		self
	}
}

impl<T> StatefulWidget for RowMenu<T> {
	type State = RowMenuState<T>;

	fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
		if !state.is_open() || state.items().is_empty() {
			return;
		}

		let max_label_width = state
			.items()
			.iter()
			.map(|item| UnicodeWidthStr::width(item.label()))
			.max()
			.unwrap_or(0) as u16;
		let content_width = max_label_width + 2;
		let separator = separator_index(state.items());
		let height = state.items().len() as u16 + u16::from(separator.is_some()) + 2;

		let menu_area = Rect::new(area.x, area.y, content_width + 2, height).clamp(buf.area);

		Clear.render(menu_area, buf);
		let block = Block::bordered().style(self.default_style);
		let inner = block.inner(menu_area);
		block.render(menu_area, buf);

		let mut y = inner.y;
		for (idx, item) in state.items().iter().enumerate() {
			if separator == Some(idx) {
				if y >= inner.bottom() {
					break;
				}
				let rule = "─".repeat(inner.width as usize);
				buf.set_span(inner.x, y, &Span::styled(rule, self.default_style), inner.width);
				y += 1;
			}
			if y >= inner.bottom() {
				break;
			}
			let label = format!(" {:<width$} ", item.label(), width = max_label_width as usize);
			let style = if idx == state.highlighted() {
				self.highlight_style
			} else {
				match item.variant() {
					ActionVariant::Destructive => self.destructive_style,
					ActionVariant::Default => self.default_style,
				}
			};
			buf.set_span(inner.x, y, &Span::styled(label, style), content_width);
			y += 1;
		}
	}
}
