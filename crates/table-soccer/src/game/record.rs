//! Persisted event rows.

/// One row of the append-only event log: the aggregate type the event belongs
/// to and the event's JSON payload.
///
/// The store treats the payload as opaque text; it must stay byte-stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    /// The type of aggregate (always "Game" for this crate).
    pub aggregate_type: String,

    /// The event payload as JSON text.
    pub payload: String,
}

impl EventRecord {
    /// Creates a new record.
    pub fn new(aggregate_type: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            aggregate_type: aggregate_type.into(),
            payload: payload.into(),
        }
    }
}

impl From<EventRecord> for (String, String) {
    fn from(record: EventRecord) -> Self {
        (record.aggregate_type, record.payload)
    }
}

impl<A: Into<String>, P: Into<String>> From<(A, P)> for EventRecord {
    fn from((aggregate_type, payload): (A, P)) -> Self {
        Self::new(aggregate_type, payload)
    }
}
