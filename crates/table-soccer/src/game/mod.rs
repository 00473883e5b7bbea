//! Game aggregate and related types.

mod aggregate;
mod events;
mod record;
mod score;
mod state;
mod team;

pub use aggregate::Game;
pub use events::{GameEndedData, GameEvent, GameStartedData, GoalScoredData};
pub use record::EventRecord;
pub use score::{MAX_SCORE, Score};
pub use state::GameState;
pub use team::{PlayerId, Team, TeamColor};
