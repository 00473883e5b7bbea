//! Team composition value objects.

use serde::{Deserialize, Serialize};

/// Side of the table.
///
/// Persisted as `0` for red and `1` for blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum TeamColor {
    Red,
    Blue,
}

impl TeamColor {
    /// Returns the other side.
    pub fn opponent(&self) -> TeamColor {
        match self {
            TeamColor::Red => TeamColor::Blue,
            TeamColor::Blue => TeamColor::Red,
        }
    }

    /// Returns the color name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamColor::Red => "Red",
            TeamColor::Blue => "Blue",
        }
    }
}

impl std::fmt::Display for TeamColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<TeamColor> for u8 {
    fn from(color: TeamColor) -> Self {
        match color {
            TeamColor::Red => 0,
            TeamColor::Blue => 1,
        }
    }
}

impl TryFrom<u8> for TeamColor {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TeamColor::Red),
            1 => Ok(TeamColor::Blue),
            other => Err(format!("invalid team color {other}, expected 0 or 1")),
        }
    }
}

/// Player identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Creates a new player ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the player ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the identifier is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for PlayerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Ordered roster of one (singles) or two (doubles) players.
///
/// Always persisted as two identifiers; a singles team fills the second slot
/// with an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "[String; 2]", try_from = "[String; 2]")]
pub struct Team {
    players: Vec<PlayerId>,
}

impl Team {
    /// Creates a singles team.
    pub fn of_one_player(player: impl Into<PlayerId>) -> Self {
        Self {
            players: vec![player.into()],
        }
    }

    /// Creates a doubles team. Roster order is kept as given.
    pub fn of_two_player(first: impl Into<PlayerId>, second: impl Into<PlayerId>) -> Self {
        Self {
            players: vec![first.into(), second.into()],
        }
    }

    /// Returns true if the player is on this team.
    pub fn is_teammate(&self, player: &str) -> bool {
        self.players.iter().any(|p| p.as_str() == player)
    }

    /// Returns the roster in order.
    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    /// Returns true for a one-player team.
    pub fn is_singles(&self) -> bool {
        self.players.len() == 1
    }

    /// Returns the fixed-arity persisted form.
    pub fn to_state(&self) -> [String; 2] {
        self.clone().into()
    }
}

impl From<Team> for [String; 2] {
    fn from(team: Team) -> Self {
        let mut players = team.players.into_iter().map(String::from);
        let first = players.next().unwrap_or_default();
        let second = players.next().unwrap_or_default();
        [first, second]
    }
}

impl From<PlayerId> for String {
    fn from(id: PlayerId) -> Self {
        id.0
    }
}

impl TryFrom<[String; 2]> for Team {
    type Error = String;

    fn try_from([first, second]: [String; 2]) -> Result<Self, Self::Error> {
        if first.is_empty() {
            return Err("team must have at least one player".to_string());
        }
        if second.is_empty() {
            return Ok(Team::of_one_player(first));
        }
        if first == second {
            return Err(format!("player {first} appears twice in the same team"));
        }
        Ok(Team::of_two_player(first, second))
    }
}
