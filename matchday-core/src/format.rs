//! SeriesFormat - Match series structure for a bracket tie

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DrawError;

/// How a bracket tie is decided
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeriesFormat {
    /// One game decides the tie
    Single,
    /// Home and away legs, aggregate score
    TwoLeg,
    /// First to two wins
    BestOf3,
    /// First to three wins
    BestOf5,
}

impl Default for SeriesFormat {
    fn default() -> Self {
        SeriesFormat::Single
    }
}

impl SeriesFormat {
    /// Maximum number of games played in the series
    pub fn legs(&self) -> u32 {
        match self {
            SeriesFormat::Single => 1,
            SeriesFormat::TwoLeg => 2,
            SeriesFormat::BestOf3 => 3,
            SeriesFormat::BestOf5 => 5,
        }
    }

    /// Whether the tie spans more than one game
    pub fn is_multi_leg(&self) -> bool {
        self.legs() > 1
    }
}

impl fmt::Display for SeriesFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SeriesFormat::Single => "Single match",
            SeriesFormat::TwoLeg => "Two legs",
            SeriesFormat::BestOf3 => "Best of 3",
            SeriesFormat::BestOf5 => "Best of 5",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for SeriesFormat {
    type Err = DrawError;

    /// Parse the wire strings used by the setup panel
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(SeriesFormat::Single),
            "twoLeg" => Ok(SeriesFormat::TwoLeg),
            "bestOf3" => Ok(SeriesFormat::BestOf3),
            "bestOf5" => Ok(SeriesFormat::BestOf5),
            other => Err(DrawError::UnknownFormat(other.to_string())),
        }
    }
}
