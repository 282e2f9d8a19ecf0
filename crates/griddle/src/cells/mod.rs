//! Cell renderers mapping raw record fields to styled spans.
//!
//! Status and severity values render as colored badges; dates render as
//! `DD-MM-YYYY` taken from UTC components. Every renderer is total:
//! unrecognized enum values get a neutral badge, missing or unparseable
//! dates get a placeholder dash.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::record::{Record, Severity, Status, parse_utc_date};
use crate::widgets::Column;

/// Placeholder rendered for missing or unparseable values.
pub const PLACEHOLDER: &str = "-";

const BADGE_ICON: &str = "●";

/// Renders the cell for `column` of `record`.
pub fn cell_span(record: &Record, column: Column) -> Span<'static> {
	match column {
		Column::Code => Span::raw(record.code.clone()),
		Column::Kind => Span::raw(record.kind.clone()),
		Column::Description => Span::raw(record.description.clone()),
		Column::Status => status_badge(&record.status),
		Column::Severity => severity_badge(&record.severity),
		Column::Date => date_cell(&record.date),
		Column::Assignee => Span::raw(record.assignee.clone()),
	}
}

/// Renders a status value as a colored badge.
///
/// Values outside the known status set keep their raw text under the
/// neutral style; blank input renders the placeholder dash.
pub fn status_badge(raw: &str) -> Span<'static> {
	match Status::parse(raw) {
		Some(status) => badge(status.to_string(), status_style(status)),
		None => badge(raw.trim().to_string(), neutral_style()),
	}
}

/// Renders a severity value as a colored badge.
///
/// Same fallback rules as [`status_badge`].
pub fn severity_badge(raw: &str) -> Span<'static> {
	match Severity::parse(raw) {
		Some(severity) => badge(severity.to_string(), severity_style(severity)),
		None => badge(raw.trim().to_string(), neutral_style()),
	}
}

/// Formats an ISO-ish date string as `DD-MM-YYYY` using UTC components.
///
/// Empty, `"N/A"` and otherwise unparseable input render the placeholder
/// dash instead of failing.
///
/// ```rust
/// use griddle::cells::date_cell;
///
/// assert_eq!(date_cell("2024-03-05T00:00:00Z").content, "05-03-2024");
/// assert_eq!(date_cell("N/A").content, "-");
/// ```
pub fn date_cell(raw: &str) -> Span<'static> {
	match parse_utc_date(raw) {
		Some(date) => Span::raw(format!(
			"{:02}-{:02}-{:04}",
			date.day(),
			u8::from(date.month()),
			date.year()
		)),
		None => Span::raw(PLACEHOLDER),
	}
}

fn badge(label: String, style: Style) -> Span<'static> {
	if label.is_empty() {
		return Span::raw(PLACEHOLDER);
	}
	Span::styled(format!("{BADGE_ICON} {label}"), style)
}

fn status_style(status: Status) -> Style {
	match status {
		Status::Open => Style::new().fg(Color::Yellow),
		Status::InProgress => Style::new().fg(Color::Blue),
		Status::Resolved => Style::new().fg(Color::Cyan),
		Status::Closed => Style::new().fg(Color::Green),
	}
}

fn severity_style(severity: Severity) -> Style {
	match severity {
		Severity::Low => Style::new().fg(Color::Green),
		Severity::Medium => Style::new().fg(Color::Yellow),
		Severity::High => Style::new().fg(Color::LightRed),
		Severity::Critical => Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
	}
}

fn neutral_style() -> Style {
	Style::new().fg(Color::DarkGray)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("2024-03-05T00:00:00Z", "05-03-2024")]
	#[case("2024-03-06T01:30:00+02:00", "05-03-2024")]
	#[case("2024-12-31T23:59:59Z", "31-12-2024")]
	#[case("2024-03-05", "05-03-2024")]
	#[case("N/A", "-")]
	#[case("", "-")]
	#[case("not a date", "-")]
	fn date_cases(#[case] raw: &str, #[case] expected: &str) {
		assert_eq!(date_cell(raw).content, expected);
	}

	#[test]
	fn known_status_is_styled() {
		let span = status_badge("in_progress");
		assert_eq!(span.content, "● in_progress");
		assert_eq!(span.style, Style::new().fg(Color::Blue));
	}

	#[test]
	fn unknown_status_is_neutral() {
		let span = status_badge("foo");
		assert_eq!(span.content, "● foo");
		assert_eq!(span.style, neutral_style());
	}

	#[test]
	fn blank_status_renders_placeholder() {
		assert_eq!(status_badge("").content, "-");
		assert_eq!(status_badge("   ").content, "-");
	}

	#[test]
	fn severity_badges() {
		let span = severity_badge("critical");
		assert_eq!(span.content, "● critical");
		assert_eq!(
			span.style,
			Style::new().fg(Color::Red).add_modifier(Modifier::BOLD)
		);
		assert_eq!(severity_badge("catastrophic").style, neutral_style());
	}

	#[test]
	fn dispatch_covers_plain_columns() {
		let record = Record::new("1").code("NC-001").assignee("Ada");
		assert_eq!(cell_span(&record, Column::Code).content, "NC-001");
		assert_eq!(cell_span(&record, Column::Assignee).content, "Ada");
		assert_eq!(cell_span(&record, Column::Date).content, "-");
	}
}
