//! Core aggregate and domain event traits.

use serde::{Serialize, de::DeserializeOwned};

/// Trait for domain events.
///
/// Domain events represent facts that have happened in the domain.
/// They are immutable and should be named in past tense.
pub trait DomainEvent: Serialize + DeserializeOwned + Send + Sync + Clone {
    /// Returns the event type name.
    ///
    /// Used in logs and error messages. It is not part of the persisted payload.
    fn event_type(&self) -> &'static str;

    /// Serializes the event into its persisted JSON payload.
    fn to_state(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Trait for aggregates in an event-sourced system.
///
/// In event sourcing, aggregates:
/// - Are created from their first event and rebuilt by replaying the rest
/// - Generate events from commands
/// - Apply events to update state (pure, deterministic)
pub trait Aggregate: Send + Sync + Sized {
    /// The type of events this aggregate produces and consumes.
    type Event: DomainEvent;

    /// The type of errors this aggregate can produce.
    type Error: std::error::Error + Send + Sync;

    /// Returns the aggregate type name.
    ///
    /// Every persisted record of this aggregate is tagged with it.
    fn aggregate_type() -> &'static str;

    /// Builds the aggregate from the first event of its history.
    ///
    /// Fails if the event cannot open a history.
    fn create(event: &Self::Event) -> Result<Self, Self::Error>;

    /// Applies an event to the aggregate, updating its state.
    ///
    /// This method must be pure and deterministic:
    /// - Given the same state and event, it must always produce the same new state
    /// - It must not have side effects
    /// - It must not fail (events represent facts that have happened)
    fn apply(&mut self, event: &Self::Event);

    /// Applies multiple events in sequence.
    fn apply_events<'a>(&mut self, events: impl IntoIterator<Item = &'a Self::Event>)
    where
        Self::Event: 'a,
    {
        for event in events {
            self.apply(event);
        }
    }
}
