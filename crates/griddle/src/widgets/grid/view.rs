//! Pure derivation of the visible page from records and view parameters.
//!
//! Nothing here is cached: filtering, sorting and pagination recompute from
//! the raw dataset on every call, so view operations stay total and
//! idempotent and can be applied in any order.

use super::column::{Column, Sort};
use crate::record::Record;

/// The resolved view: dataset indices for the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedView {
	/// Dataset indices of the current page's rows, in display order.
	pub rows: Vec<usize>,
	/// Clamped page index.
	pub page: usize,
	/// Total number of pages; at least 1.
	pub page_count: usize,
	/// Number of records passing the filter.
	pub filtered: usize,
}

pub(crate) fn resolve(
	records: &[Record],
	sort: Option<Sort>,
	filter: Option<&str>,
	page: usize,
	page_size: usize,
) -> ResolvedView {
	let mut indices: Vec<usize> = match filter {
		Some(needle) => {
			let needle = needle.to_lowercase();
			records
				.iter()
				.enumerate()
				.filter(|(_, record)| {
					Column::ALL
						.into_iter()
						.any(|column| column.matches(record, &needle))
				})
				.map(|(index, _)| index)
				.collect()
		}
		None => (0..records.len()).collect(),
	};

	if let Some(sort) = sort {
		indices.sort_by(|&a, &b| sort.compare(&records[a], &records[b]));
	}

	let filtered = indices.len();
	let page_size = page_size.max(1);
	let page_count = filtered.div_ceil(page_size).max(1);
	let page = page.min(page_count - 1);
	let rows = indices
		.into_iter()
		.skip(page * page_size)
		.take(page_size)
		.collect();

	ResolvedView {
		rows,
		page,
		page_count,
		filtered,
	}
}
