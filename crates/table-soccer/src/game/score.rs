//! Score value object.

use serde::{Deserialize, Serialize};

use super::TeamColor;

/// Points a side needs to win the game.
pub const MAX_SCORE: u8 = 10;

/// Points of each side, persisted as `[red, blue]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "[u8; 2]", try_from = "[u8; 2]")]
pub struct Score {
    red: u8,
    blue: u8,
}

impl Score {
    /// Creates a score from raw points.
    ///
    /// # Panics
    ///
    /// Panics if either side is above [`MAX_SCORE`].
    pub fn new(red: u8, blue: u8) -> Self {
        assert!(
            red <= MAX_SCORE && blue <= MAX_SCORE,
            "score {red} - {blue} exceeds the maximum of {MAX_SCORE}"
        );
        Self { red, blue }
    }

    /// The score at kick-off.
    pub fn players_have_not_scored() -> Self {
        Self { red: 0, blue: 0 }
    }

    /// Returns the points of one side.
    pub fn points(&self, color: TeamColor) -> u8 {
        match color {
            TeamColor::Red => self.red,
            TeamColor::Blue => self.blue,
        }
    }

    /// Returns true while the side is below [`MAX_SCORE`].
    pub fn can_increase(&self, color: TeamColor) -> bool {
        self.points(color) < MAX_SCORE
    }

    /// Returns a new score with one more point for `color`.
    ///
    /// # Panics
    ///
    /// Panics if [`Score::can_increase`] is false for `color`. The game
    /// aggregate never calls it in that state.
    pub fn increase(&self, color: TeamColor) -> Score {
        assert!(
            self.can_increase(color),
            "{color} already has {MAX_SCORE} points"
        );
        match color {
            TeamColor::Red => Score {
                red: self.red + 1,
                ..*self
            },
            TeamColor::Blue => Score {
                blue: self.blue + 1,
                ..*self
            },
        }
    }

    /// Returns true once either side reached [`MAX_SCORE`].
    pub fn has_winner(&self) -> bool {
        self.red == MAX_SCORE || self.blue == MAX_SCORE
    }

    /// Returns the side ahead, or None on a draw.
    pub fn leader(&self) -> Option<TeamColor> {
        match self.red.cmp(&self.blue) {
            std::cmp::Ordering::Greater => Some(TeamColor::Red),
            std::cmp::Ordering::Less => Some(TeamColor::Blue),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Returns the persisted `[red, blue]` form.
    pub fn to_state(&self) -> [u8; 2] {
        (*self).into()
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.red, self.blue)
    }
}

impl From<Score> for [u8; 2] {
    fn from(score: Score) -> Self {
        [score.red, score.blue]
    }
}

impl TryFrom<[u8; 2]> for Score {
    type Error = String;

    fn try_from([red, blue]: [u8; 2]) -> Result<Self, Self::Error> {
        if red > MAX_SCORE || blue > MAX_SCORE {
            return Err(format!(
                "score {red} - {blue} exceeds the maximum of {MAX_SCORE}"
            ));
        }
        Ok(Score { red, blue })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_players_have_not_scored() {
        assert_eq!(Score::players_have_not_scored(), Score::new(0, 0));
        assert_eq!(Score::default(), Score::players_have_not_scored());
    }

    #[test]
    fn test_increase_red() {
        assert_eq!(Score::new(5, 5).increase(TeamColor::Red), Score::new(6, 5));
    }

    #[test]
    fn test_increase_blue() {
        assert_eq!(Score::new(5, 5).increase(TeamColor::Blue), Score::new(5, 6));
    }

    #[test]
    fn test_increase_does_not_mutate() {
        let score = Score::new(2, 3);
        let _ = score.increase(TeamColor::Red);
        assert_eq!(score, Score::new(2, 3));
    }

    #[test]
    fn test_can_increase() {
        assert!(!Score::new(10, 5).can_increase(TeamColor::Red));
        assert!(Score::new(10, 5).can_increase(TeamColor::Blue));
        assert!(Score::new(9, 5).can_increase(TeamColor::Red));
    }

    #[test]
    fn test_reaching_max_stops_increase() {
        let score = Score::new(9, 1).increase(TeamColor::Red);
        assert_eq!(score, Score::new(10, 1));
        assert!(!score.can_increase(TeamColor::Red));
        assert!(score.has_winner());
        assert_eq!(score.leader(), Some(TeamColor::Red));
    }

    #[test]
    #[should_panic(expected = "already has 10 points")]
    fn test_increase_past_max_panics() {
        Score::new(3, 10).increase(TeamColor::Blue);
    }

    #[test]
    fn test_leader() {
        assert_eq!(Score::new(2, 2).leader(), None);
        assert_eq!(Score::new(2, 4).leader(), Some(TeamColor::Blue));
    }

    #[test]
    fn test_score_state() {
        assert_eq!(Score::new(10, 5).to_state(), [10, 5]);
        assert_eq!(serde_json::to_string(&Score::new(10, 5)).unwrap(), "[10,5]");
    }

    #[test]
    fn test_score_deserialization_rejects_overflow() {
        assert_eq!(
            serde_json::from_str::<Score>("[3,7]").unwrap(),
            Score::new(3, 7)
        );
        assert!(serde_json::from_str::<Score>("[11,0]").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Score::new(3, 2).to_string(), "3 - 2");
    }
}
