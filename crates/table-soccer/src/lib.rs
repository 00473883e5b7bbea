//! Event-sourced table soccer.
//!
//! This crate provides:
//! - Aggregate and DomainEvent traits for event-sourced entities
//! - Team, Score and TeamColor value objects
//! - The Game aggregate with goal recording, win detection and replay
//! - Serialization of events into persistable `(aggregate type, payload)` records

pub mod aggregate;
pub mod error;
pub mod game;

pub use aggregate::{Aggregate, DomainEvent};
pub use error::GameError;
pub use game::{
    EventRecord, Game, GameEndedData, GameEvent, GameStartedData, GameState, GoalScoredData,
    MAX_SCORE, PlayerId, Score, Team, TeamColor,
};
