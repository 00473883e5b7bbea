//! Game aggregate implementation.

use crate::aggregate::{Aggregate, DomainEvent};
use crate::error::GameError;

use super::{
    EventRecord, GameEvent, GameState, PlayerId, Score, Team, TeamColor,
    events::{GameEndedData, GameStartedData, GoalScoredData},
};

/// Game aggregate root.
///
/// Every value is immutable from the caller's point of view: recording a goal
/// returns a new game with the extended history and leaves the receiver as is.
/// `score` and `state` always equal what replaying `events` yields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    red_team: Team,
    blue_team: Team,
    score: Score,
    state: GameState,

    /// Full history, including the opening GameStarted.
    events: Vec<GameEvent>,
}

impl Aggregate for Game {
    type Event = GameEvent;
    type Error = GameError;

    fn aggregate_type() -> &'static str {
        "Game"
    }

    fn create(event: &Self::Event) -> Result<Self, Self::Error> {
        match event {
            GameEvent::GameStarted(data) => Ok(Self {
                red_team: data.red.clone(),
                blue_team: data.blue.clone(),
                score: Score::players_have_not_scored(),
                state: GameState::InProgress,
                events: vec![event.clone()],
            }),
            other => Err(GameError::MissingGameStarted {
                found: other.event_type(),
            }),
        }
    }

    fn apply(&mut self, event: &Self::Event) {
        match event {
            GameEvent::GameStarted(data) => self.apply_game_started(data),
            GameEvent::GoalScored(data) => self.apply_goal_scored(data),
            GameEvent::GameEnded(data) => self.apply_game_ended(data),
        }
        self.events.push(event.clone());
    }
}

// Construction
impl Game {
    /// Starts a singles game.
    pub fn start_one_versus_one(
        red_player: impl Into<PlayerId>,
        blue_player: impl Into<PlayerId>,
    ) -> Result<Self, GameError> {
        Self::start(
            Team::of_one_player(red_player),
            Team::of_one_player(blue_player),
        )
    }

    /// Starts a doubles game.
    pub fn start_two_versus_two(
        red_first: impl Into<PlayerId>,
        red_second: impl Into<PlayerId>,
        blue_first: impl Into<PlayerId>,
        blue_second: impl Into<PlayerId>,
    ) -> Result<Self, GameError> {
        Self::start(
            Team::of_two_player(red_first, red_second),
            Team::of_two_player(blue_first, blue_second),
        )
    }

    /// Rebuilds a game by replaying its history in order.
    ///
    /// The resulting game's events equal `events` exactly.
    pub fn from_events(events: &[GameEvent]) -> Result<Self, GameError> {
        let (first, rest) = events.split_first().ok_or(GameError::EmptyHistory)?;
        let mut game = Self::create(first)?;

        for (offset, event) in rest.iter().enumerate() {
            game.check_replayable(offset + 1, event)?;
            game.apply(event);
        }

        metrics::counter!("table_soccer_games_replayed_total").increment(1);
        tracing::debug!(
            events = events.len(),
            score = %game.score,
            state = %game.state,
            "game replayed"
        );

        Ok(game)
    }

    /// Rebuilds a game from persisted records.
    pub fn from_state(records: &[EventRecord]) -> Result<Self, GameError> {
        let events = records
            .iter()
            .map(|record| {
                if record.aggregate_type != Self::aggregate_type() {
                    return Err(GameError::UnexpectedAggregateType {
                        expected: Self::aggregate_type(),
                        found: record.aggregate_type.clone(),
                    });
                }
                GameEvent::from_state(&record.payload)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_events(&events)
    }

    fn start(red_team: Team, blue_team: Team) -> Result<Self, GameError> {
        validate_rosters(&red_team, &blue_team)?;

        let game = Self::create(&GameEvent::game_started(red_team, blue_team))?;

        metrics::counter!("table_soccer_games_started_total").increment(1);
        tracing::info!(
            red = ?game.red_team.players(),
            blue = ?game.blue_team.players(),
            "game started"
        );

        Ok(game)
    }
}

// Query methods
impl Game {
    /// Returns the red team.
    pub fn red_team(&self) -> &Team {
        &self.red_team
    }

    /// Returns the blue team.
    pub fn blue_team(&self) -> &Team {
        &self.blue_team
    }

    /// Returns the team playing `color`.
    pub fn team(&self, color: TeamColor) -> &Team {
        match color {
            TeamColor::Red => &self.red_team,
            TeamColor::Blue => &self.blue_team,
        }
    }

    /// Returns the current score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Returns the current state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns every event applied so far, oldest first.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Returns true once GameEnded has been applied.
    pub fn is_ended(&self) -> bool {
        self.state.is_terminal()
    }

    /// Returns the winning side of an ended game.
    pub fn winner(&self) -> Option<TeamColor> {
        if self.is_ended() {
            self.score.leader()
        } else {
            None
        }
    }

    /// Returns the side `player` plays for.
    ///
    /// Red is checked first.
    pub fn team_color_of(&self, player: &str) -> Option<TeamColor> {
        if self.red_team.is_teammate(player) {
            Some(TeamColor::Red)
        } else if self.blue_team.is_teammate(player) {
            Some(TeamColor::Blue)
        } else {
            None
        }
    }

    /// Serializes the history into persisted records, one per event.
    pub fn to_state(&self) -> Result<Vec<EventRecord>, GameError> {
        self.events
            .iter()
            .map(|event| -> Result<EventRecord, GameError> {
                Ok(EventRecord::new(Self::aggregate_type(), event.to_state()?))
            })
            .collect()
    }
}

// Command methods
impl Game {
    /// Returns the events a goal by `player` produces, without applying them.
    ///
    /// GoalScored comes first; GameEnded follows when the goal brings a side
    /// to the maximum score.
    pub fn record_goal(&self, player: &str) -> Result<Vec<GameEvent>, GameError> {
        if !self.state.can_record_goal() || self.score.has_winner() {
            return Err(GameError::GameAlreadyEnded);
        }

        let color = self
            .team_color_of(player)
            .ok_or_else(|| GameError::UnknownPlayer {
                player: player.to_string(),
            })?;

        let score = self.score.increase(color);
        let mut events = vec![GameEvent::goal_scored(color, player, score)];
        if score.has_winner() {
            events.push(GameEvent::game_ended(
                self.red_team.clone(),
                self.blue_team.clone(),
                score,
            ));
        }

        Ok(events)
    }

    /// Records a goal by `player` and returns the resulting game.
    #[tracing::instrument(skip(self), fields(score = %self.score))]
    pub fn goal_scored_by(&self, player: &str) -> Result<Self, GameError> {
        let events = self.record_goal(player)?;

        let mut game = self.clone();
        game.apply_events(&events);

        metrics::counter!("table_soccer_goals_scored_total").increment(1);
        if game.is_ended() {
            metrics::counter!("table_soccer_games_ended_total").increment(1);
            tracing::info!(
                score = %game.score,
                winner = ?game.winner(),
                "game ended"
            );
        }

        Ok(game)
    }
}

// Apply event helpers
impl Game {
    fn apply_game_started(&mut self, data: &GameStartedData) {
        self.red_team = data.red.clone();
        self.blue_team = data.blue.clone();
        self.score = Score::players_have_not_scored();
        self.state = GameState::InProgress;
    }

    fn apply_goal_scored(&mut self, data: &GoalScoredData) {
        self.score = self.score.increase(data.team_color);
    }

    fn apply_game_ended(&mut self, data: &GameEndedData) {
        self.score = data.score;
        self.state = GameState::Ended;
    }

    fn check_replayable(&self, position: usize, event: &GameEvent) -> Result<(), GameError> {
        let reason = match event {
            _ if self.state.is_terminal() => Some("game already ended"),
            GameEvent::GameStarted(_) => Some("game already started"),
            GameEvent::GoalScored(_) if self.score.has_winner() => {
                Some("a side already has the maximum score")
            }
            GameEvent::GameEnded(data) if !data.score.has_winner() => {
                Some("final score has no side at the maximum")
            }
            GameEvent::GoalScored(_) | GameEvent::GameEnded(_) => None,
        };

        match reason {
            Some(reason) => Err(GameError::UnexpectedEvent {
                position,
                event_type: event.event_type(),
                reason,
            }),
            None => Ok(()),
        }
    }
}

fn validate_rosters(red_team: &Team, blue_team: &Team) -> Result<(), GameError> {
    let players: Vec<&PlayerId> = red_team
        .players()
        .iter()
        .chain(blue_team.players())
        .collect();

    for (index, player) in players.iter().enumerate() {
        if player.is_empty() {
            return Err(GameError::InvalidPlayer {
                reason: "player identifier must not be empty".to_string(),
            });
        }
        if players[..index].contains(player) {
            return Err(GameError::InvalidPlayer {
                reason: format!("player {player} cannot appear twice in a game"),
            });
        }
    }

    Ok(())
}
