use pretty_assertions::assert_eq;
use time::macros::date;

use super::*;

#[test]
fn builder() {
	let record = Record::new("7")
		.code("NC-007")
		.kind("non_conformity")
		.description("Calibration drift on line 3")
		.status("open")
		.severity("high")
		.date("2024-03-05T00:00:00Z")
		.assignee("Ada");
	assert_eq!(record.id, "7");
	assert_eq!(record.code, "NC-007");
	assert_eq!(record.kind, "non_conformity");
	assert_eq!(record.status, "open");
	assert_eq!(record.severity, "high");
	assert_eq!(record.assignee, "Ada");
}

#[test]
fn status_parse() {
	assert_eq!(Status::parse("open"), Some(Status::Open));
	assert_eq!(Status::parse("in_progress"), Some(Status::InProgress));
	assert_eq!(Status::parse("IN_PROGRESS"), Some(Status::InProgress));
	assert_eq!(Status::parse(" closed "), Some(Status::Closed));
	assert_eq!(Status::parse("foo"), None);
	assert_eq!(Status::parse(""), None);
}

#[test]
fn status_display_round_trips() {
	assert_eq!(Status::InProgress.to_string(), "in_progress");
	assert_eq!(Status::parse(&Status::Resolved.to_string()), Some(Status::Resolved));
}

#[test]
fn status_ranks_follow_workflow() {
	assert!(Status::Open < Status::InProgress);
	assert!(Status::InProgress < Status::Resolved);
	assert!(Status::Resolved < Status::Closed);
}

#[test]
fn severity_parse() {
	assert_eq!(Severity::parse("critical"), Some(Severity::Critical));
	assert_eq!(Severity::parse("Medium"), Some(Severity::Medium));
	assert_eq!(Severity::parse("catastrophic"), None);
}

#[test]
fn severity_ranks() {
	assert!(Severity::Low < Severity::Medium);
	assert!(Severity::Medium < Severity::High);
	assert!(Severity::High < Severity::Critical);
}

#[test]
fn date_value_rfc3339() {
	let record = Record::new("1").date("2024-03-05T00:00:00Z");
	assert_eq!(record.date_value(), Some(date!(2024 - 03 - 05)));
}

#[test]
fn date_value_normalizes_offset_to_utc() {
	// 01:30 at +02:00 is still the previous day in UTC.
	let record = Record::new("1").date("2024-03-06T01:30:00+02:00");
	assert_eq!(record.date_value(), Some(date!(2024 - 03 - 05)));
}

#[test]
fn date_value_naive_and_bare() {
	assert_eq!(
		Record::new("1").date("2024-03-05T12:00:00").date_value(),
		Some(date!(2024 - 03 - 05))
	);
	assert_eq!(
		Record::new("1").date("2024-03-05").date_value(),
		Some(date!(2024 - 03 - 05))
	);
}

#[test]
fn date_value_rejects_garbage() {
	assert_eq!(Record::new("1").date("N/A").date_value(), None);
	assert_eq!(Record::new("1").date("").date_value(), None);
	assert_eq!(Record::new("1").date("05/03/2024").date_value(), None);
}

#[cfg(feature = "serde")]
#[test]
fn deserializes_wire_names() {
	let json = r#"{"id":"7","code":"NC-007","type":"audit","status":"open"}"#;
	let record: Record = serde_json::from_str(json).unwrap();
	assert_eq!(record.kind, "audit");
	assert_eq!(record.code, "NC-007");
	assert_eq!(record.description, "");
}

#[cfg(feature = "serde")]
#[test]
fn serializes_kind_as_type() {
	let record = Record::new("7").kind("audit");
	let json = serde_json::to_string(&record).unwrap();
	assert!(json.contains(r#""type":"audit""#));
}
