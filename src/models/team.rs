use serde::{Deserialize, Serialize};

/// Team membership of a worker.
///
/// The first three teams rotate through the 15-day shift cycle, `Regular`
/// follows the weekday/Saturday rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Team1,
    Team2,
    Team3,
    Regular,
}

impl Team {
    /// Rotating teams in cycle order.
    pub const ROTATING: [Team; 3] = [Team::Team1, Team::Team2, Team::Team3];

    /// All teams in display order.
    pub const ALL: [Team; 4] = [Team::Team1, Team::Team2, Team::Team3, Team::Regular];

    pub fn code(&self) -> &'static str {
        match self {
            Team::Team1 => "team1",
            Team::Team2 => "team2",
            Team::Team3 => "team3",
            Team::Regular => "regular",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Team::Team1 => "Team 1",
            Team::Team2 => "Team 2",
            Team::Team3 => "Team 3",
            Team::Regular => "Regular Staff",
        }
    }

    pub fn is_rotating(&self) -> bool {
        !matches!(self, Team::Regular)
    }

    /// Helper: convert input code from CLI (`team1`, `1`, `regular`, `r`, ...)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "team1" | "1" => Some(Team::Team1),
            "team2" | "2" => Some(Team::Team2),
            "team3" | "3" => Some(Team::Team3),
            "regular" | "r" => Some(Team::Regular),
            _ => None,
        }
    }
}
