//! The flat display record backing one grid line.

use core::str::FromStr;

use strum::{Display, EnumString};
use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// A single display record, as projected from a backend list endpoint.
///
/// Records carry no lifecycle of their own: the grid treats them as opaque
/// rows keyed by [`Record::id`], which must be unique within one loaded
/// page of results. Status, severity and date stay in their raw wire form;
/// ranking and styling parse them on demand and fall back gracefully for
/// values outside the known sets.
///
/// # Example
///
/// ```rust
/// use griddle::Record;
///
/// let record = Record::new("42")
/// 	.code("NC-042")
/// 	.status("open")
/// 	.assignee("Ada");
/// assert_eq!(record.code, "NC-042");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Record {
	/// Unique key within the loaded dataset.
	pub id: String,
	/// Human-facing reference code.
	pub code: String,
	/// Record category (wire name `type`).
	#[cfg_attr(feature = "serde", serde(rename = "type"))]
	pub kind: String,
	/// Free-text description.
	pub description: String,
	/// Raw status value.
	pub status: String,
	/// Raw severity value.
	pub severity: String,
	/// ISO-ish date string; may be empty or unparseable.
	pub date: String,
	/// Assignee display name.
	pub assignee: String,
}

impl Record {
	/// Creates a record with the given id and all other fields empty.
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			..Self::default()
		}
	}

	/// Sets the reference code.
	#[must_use = "method moves the value of self and returns the modified value"]
	pub fn code(mut self, code: impl Into<String>) -> Self {
		self.code = code.into();
		self
	}

	/// Sets the record category.
	#[must_use = "method moves the value of self and returns the modified value"]
	pub fn kind(mut self, kind: impl Into<String>) -> Self {
		self.kind = kind.into();
		self
	}

	/// Sets the description.
	#[must_use = "method moves the value of self and returns the modified value"]
	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}

	/// Sets the raw status value.
	#[must_use = "method moves the value of self and returns the modified value"]
	pub fn status(mut self, status: impl Into<String>) -> Self {
		self.status = status.into();
		self
	}

	/// Sets the raw severity value.
	#[must_use = "method moves the value of self and returns the modified value"]
	pub fn severity(mut self, severity: impl Into<String>) -> Self {
		self.severity = severity.into();
		self
	}

	/// Sets the date string.
	#[must_use = "method moves the value of self and returns the modified value"]
	pub fn date(mut self, date: impl Into<String>) -> Self {
		self.date = date.into();
		self
	}

	/// Sets the assignee name.
	#[must_use = "method moves the value of self and returns the modified value"]
	pub fn assignee(mut self, assignee: impl Into<String>) -> Self {
		self.assignee = assignee.into();
		self
	}

	/// Parses the raw date as a UTC calendar date.
	///
	/// Accepts RFC 3339 timestamps (normalized to UTC before the calendar
	/// date is taken), naive `YYYY-MM-DDThh:mm:ss` timestamps and bare
	/// `YYYY-MM-DD` dates. Returns `None` for anything else.
	pub fn date_value(&self) -> Option<Date> {
		parse_utc_date(&self.date)
	}
}

/// Workflow status of a record.
///
/// Declaration order follows the workflow progression and drives status
/// column sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Status {
	/// Newly raised, not yet picked up.
	Open,
	/// Being worked on.
	InProgress,
	/// Addressed, awaiting verification.
	Resolved,
	/// Verified and closed.
	Closed,
}

impl Status {
	/// Parses a raw wire value, returning `None` for unrecognized input.
	pub fn parse(raw: &str) -> Option<Self> {
		Self::from_str(raw.trim()).ok()
	}
}

/// Severity grade of a record.
///
/// Declaration order is the severity ranking and drives severity column
/// sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Severity {
	/// Cosmetic or negligible impact.
	Low,
	/// Limited impact.
	Medium,
	/// Significant impact.
	High,
	/// Requires immediate attention.
	Critical,
}

impl Severity {
	/// Parses a raw wire value, returning `None` for unrecognized input.
	pub fn parse(raw: &str) -> Option<Self> {
		Self::from_str(raw.trim()).ok()
	}
}

const NAIVE_DATETIME: &[BorrowedFormatItem<'static>] =
	format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
const DATE_ONLY: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

pub(crate) fn parse_utc_date(raw: &str) -> Option<Date> {
	let raw = raw.trim();
	if let Ok(stamped) = OffsetDateTime::parse(raw, &Rfc3339) {
		return Some(stamped.to_offset(UtcOffset::UTC).date());
	}
	if let Ok(naive) = PrimitiveDateTime::parse(raw, NAIVE_DATETIME) {
		return Some(naive.date());
	}
	Date::parse(raw, DATE_ONLY).ok()
}

#[cfg(test)]
mod tests;
