#![warn(missing_docs)]
//! Record grid widgets for [`ratatui`].
//!
//! `griddle` renders flat record lists (the kind a backend list endpoint
//! returns) as a sortable, filterable, pageable table with row selection,
//! drag-to-reorder and per-row action menus. Widgets hold presentation
//! only; records and view parameters live in plain state structs owned by
//! the caller and mutated through total, synchronous operations. The
//! visible page is derived from the raw dataset on every render, so view
//! operations compose in any order.
//!
//! The crate performs no I/O: fetching records, persisting anything, and
//! reacting to [`ActionEvent`]s are the embedding application's job.

pub mod cells;
pub mod record;
pub mod widgets;

pub use self::record::{Record, Severity, Status};
pub use self::widgets::{
	ActionEvent, ActionItem, ActionVariant, Column, Grid, GridState, RowMenu, RowMenuState, Sort,
	SortDirection,
};
