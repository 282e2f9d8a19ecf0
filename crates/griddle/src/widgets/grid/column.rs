//! Column metadata: identity, titles, default widths, comparators.

use core::cmp::Ordering;

use ratatui::layout::Constraint;

use crate::record::{Record, Severity, Status};

/// Identifies one display column of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Column {
	/// Reference code.
	Code,
	/// Record category.
	Kind,
	/// Free-text description.
	Description,
	/// Workflow status.
	Status,
	/// Severity grade.
	Severity,
	/// Record date.
	Date,
	/// Assignee name.
	Assignee,
}

impl Column {
	/// All columns in display order.
	pub const ALL: [Self; 7] = [
		Self::Code,
		Self::Kind,
		Self::Description,
		Self::Status,
		Self::Severity,
		Self::Date,
		Self::Assignee,
	];

	/// Header title.
	pub const fn title(self) -> &'static str {
		match self {
			Self::Code => "Code",
			Self::Kind => "Type",
			Self::Description => "Description",
			Self::Status => "Status",
			Self::Severity => "Severity",
			Self::Date => "Date",
			Self::Assignee => "Assignee",
		}
	}

	/// Default width constraint, used when the caller sets none.
	pub(crate) const fn constraint(self) -> Constraint {
		match self {
			Self::Code => Constraint::Length(10),
			Self::Kind => Constraint::Length(12),
			Self::Description => Constraint::Min(20),
			Self::Status => Constraint::Length(14),
			Self::Severity => Constraint::Length(12),
			Self::Date => Constraint::Length(10),
			Self::Assignee => Constraint::Length(16),
		}
	}

	/// Compares two records by this column's value.
	///
	/// Status and severity compare by rank with unrecognized values last,
	/// dates chronologically with unparseable values last, everything else
	/// lexicographically. Equal keys are left to the caller's stable sort,
	/// which keeps original dataset order.
	pub fn compare(self, a: &Record, b: &Record) -> Ordering {
		match self {
			Self::Code => a.code.cmp(&b.code),
			Self::Kind => a.kind.cmp(&b.kind),
			Self::Description => a.description.cmp(&b.description),
			Self::Status => cmp_known(Status::parse(&a.status), Status::parse(&b.status)),
			Self::Severity => cmp_known(Severity::parse(&a.severity), Severity::parse(&b.severity)),
			Self::Date => cmp_known(a.date_value(), b.date_value()),
			Self::Assignee => a.assignee.cmp(&b.assignee),
		}
	}

	/// Returns true if this column's raw value contains `needle`.
	///
	/// `needle` must already be lowercased; matching is case-insensitive on
	/// the record side.
	pub(crate) fn matches(self, record: &Record, needle: &str) -> bool {
		let raw = match self {
			Self::Code => &record.code,
			Self::Kind => &record.kind,
			Self::Description => &record.description,
			Self::Status => &record.status,
			Self::Severity => &record.severity,
			Self::Date => &record.date,
			Self::Assignee => &record.assignee,
		};
		raw.to_lowercase().contains(needle)
	}
}

/// Direction of a column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SortDirection {
	/// Smallest value first.
	Ascending,
	/// Largest value first.
	Descending,
}

impl SortDirection {
	/// The opposite direction.
	#[must_use]
	pub const fn reversed(self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}
}

/// An active column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sort {
	/// Column being sorted.
	pub column: Column,
	/// Sort direction.
	pub direction: SortDirection,
}

impl Sort {
	pub(crate) fn compare(&self, a: &Record, b: &Record) -> Ordering {
		let ordering = self.column.compare(a, b);
		match self.direction {
			SortDirection::Ascending => ordering,
			SortDirection::Descending => ordering.reverse(),
		}
	}
}

/// Orders `Some` before `None` so unrecognized values sink to the end.
fn cmp_known<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
	match (a, b) {
		(Some(a), Some(b)) => a.cmp(&b),
		(Some(_), None) => Ordering::Less,
		(None, Some(_)) => Ordering::Greater,
		(None, None) => Ordering::Equal,
	}
}
