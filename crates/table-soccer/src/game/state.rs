//! Game state machine.

/// The state of a game in its lifecycle.
///
/// State transitions:
/// ```text
/// InProgress ──(goal)──► InProgress
///     │
///     └──(goal reaching the maximum)──► Ended
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Goals can be recorded.
    #[default]
    InProgress,

    /// One side reached the maximum score (terminal state).
    Ended,
}

impl GameState {
    /// Returns true if a goal can be recorded in this state.
    pub fn can_record_goal(&self) -> bool {
        matches!(self, GameState::InProgress)
    }

    /// Returns true if this is a terminal state (no further transitions possible).
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameState::Ended)
    }

    /// Returns the state name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameState::InProgress => "InProgress",
            GameState::Ended => "Ended",
        }
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
