//! Game error types.

use thiserror::Error;

/// Errors that can occur during game operations.
#[derive(Debug, Error)]
pub enum GameError {
    /// The player is on neither team.
    #[error("Unknown player: {player} belongs to neither team")]
    UnknownPlayer { player: String },

    /// A goal was recorded after the game ended.
    #[error("Game already ended")]
    GameAlreadyEnded,

    /// A start operation was given an unusable player identifier.
    #[error("Invalid player: {reason}")]
    InvalidPlayer { reason: String },

    /// Replay was given no events.
    #[error("Cannot rebuild a game from an empty history")]
    EmptyHistory,

    /// Replay input did not begin with GameStarted.
    #[error("History must start with GameStarted, found {found}")]
    MissingGameStarted { found: &'static str },

    /// Replay met an event the state machine does not allow at that position.
    #[error("Unexpected {event_type} at position {position}: {reason}")]
    UnexpectedEvent {
        position: usize,
        event_type: &'static str,
        reason: &'static str,
    },

    /// A persisted payload matched no event shape.
    #[error("Unrecognized event payload {payload}: {reason}")]
    UnrecognizedPayload { payload: String, reason: String },

    /// A persisted record belongs to another aggregate type.
    #[error("Unexpected aggregate type: expected {expected}, found {found}")]
    UnexpectedAggregateType {
        expected: &'static str,
        found: String,
    },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
