//! Section identifiers: the keys of a response's data map.
//!
//! Identifiers are derived from the request, never from engine output:
//! `table:<name>` per table entry and `event:<types>` per event entry, with
//! the event types sorted and joined by `+`.

pub const TABLE_PREFIX: &str = "table:";
pub const EVENT_PREFIX: &str = "event:";

pub fn table_section_id(table: &str) -> String {
    format!("{TABLE_PREFIX}{table}")
}

/// Two event entries with the same type set share one identifier.
pub fn event_section_id<S: AsRef<str>>(types: &[S]) -> String {
    let mut sorted: Vec<&str> = types.iter().map(AsRef::as_ref).collect();
    sorted.sort_unstable();
    format!("{EVENT_PREFIX}{}", sorted.join("+"))
}
