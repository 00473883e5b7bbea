//! Game domain events.

use serde::{Deserialize, Serialize};

use crate::aggregate::DomainEvent;
use crate::error::GameError;

use super::{PlayerId, Score, Team, TeamColor};

/// Events that can occur on a game aggregate.
///
/// Payloads carry no type tag: each variant has its own key set, and that
/// key set alone identifies the variant when reading persisted state
/// (see [`GameEvent::from_state`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GameEvent {
    /// Game was started.
    GameStarted(GameStartedData),

    /// A goal was scored.
    GoalScored(GoalScoredData),

    /// A side reached the maximum score.
    GameEnded(GameEndedData),
}

impl DomainEvent for GameEvent {
    fn event_type(&self) -> &'static str {
        match self {
            GameEvent::GameStarted(_) => "GameStarted",
            GameEvent::GoalScored(_) => "GoalScored",
            GameEvent::GameEnded(_) => "GameEnded",
        }
    }
}

/// Data for GameStarted event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameStartedData {
    pub red: Team,
    pub blue: Team,
}

/// Data for GoalScored event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GoalScoredData {
    /// Side credited with the goal.
    #[serde(rename = "teamColor")]
    pub team_color: TeamColor,

    /// Player who scored.
    pub player: PlayerId,

    /// Score after the goal.
    pub score: Score,
}

/// Data for GameEnded event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameEndedData {
    pub red: Team,
    pub blue: Team,

    /// Final score.
    pub score: Score,
}

// Convenience constructors for events
impl GameEvent {
    /// Creates a GameStarted event.
    pub fn game_started(red: Team, blue: Team) -> Self {
        GameEvent::GameStarted(GameStartedData { red, blue })
    }

    /// Creates a GoalScored event.
    pub fn goal_scored(team_color: TeamColor, player: impl Into<PlayerId>, score: Score) -> Self {
        GameEvent::GoalScored(GoalScoredData {
            team_color,
            player: player.into(),
            score,
        })
    }

    /// Creates a GameEnded event.
    pub fn game_ended(red: Team, blue: Team, score: Score) -> Self {
        GameEvent::GameEnded(GameEndedData { red, blue, score })
    }

    /// Parses a persisted payload, picking the variant from its key set.
    pub fn from_state(payload: &str) -> Result<Self, GameError> {
        let value: serde_json::Value = serde_json::from_str(payload)?;
        let unrecognized = |reason: String| GameError::UnrecognizedPayload {
            payload: payload.to_string(),
            reason,
        };

        let event_type = {
            let mut keys: Vec<&str> = value
                .as_object()
                .ok_or_else(|| unrecognized("payload is not a JSON object".to_string()))?
                .keys()
                .map(String::as_str)
                .collect();
            keys.sort_unstable();

            match keys.as_slice() {
                ["blue", "red"] => "GameStarted",
                ["player", "score", "teamColor"] => "GoalScored",
                ["blue", "red", "score"] => "GameEnded",
                other => return Err(unrecognized(format!("unknown key set {other:?}"))),
            }
        };

        let event = match event_type {
            "GameStarted" => serde_json::from_value(value).map(GameEvent::GameStarted),
            "GoalScored" => serde_json::from_value(value).map(GameEvent::GoalScored),
            _ => serde_json::from_value(value).map(GameEvent::GameEnded),
        };

        event.map_err(|e| unrecognized(e.to_string()))
    }
}
