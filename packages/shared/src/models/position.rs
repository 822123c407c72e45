use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Playing positions a user can pick in their preferences. Each position fixes
/// the six skill labels a rating for that user is scored against; this table is
/// the single source of truth for that mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
    ];

    pub fn skills(&self) -> [&'static str; 6] {
        match self {
            Position::Goalkeeper => [
                "Diving",
                "Handling",
                "Kicking",
                "Reflexes",
                "Positioning",
                "Speed",
            ],
            Position::Defender => [
                "Defending",
                "Physicality",
                "Pace",
                "Interceptions",
                "Heading Accuracy",
                "Marking",
            ],
            Position::Midfielder => [
                "Passing",
                "Dribbling",
                "Physicality",
                "Defending",
                "Pace",
                "Shooting",
            ],
            Position::Forward => [
                "Shooting",
                "Pace",
                "Dribbling",
                "Finishing",
                "Positioning",
                "Physicality",
            ],
        }
    }

    pub fn skill_names(&self) -> Vec<String> {
        self.skills().iter().map(|s| s.to_string()).collect()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "Goalkeeper",
            Position::Defender => "Defender",
            Position::Midfielder => "Midfielder",
            Position::Forward => "Forward",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Goalkeeper" => Ok(Position::Goalkeeper),
            "Defender" => Ok(Position::Defender),
            "Midfielder" => Ok(Position::Midfielder),
            "Forward" => Ok(Position::Forward),
            other => Err(format!("Invalid position: {}", other)),
        }
    }
}
