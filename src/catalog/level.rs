use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DrillError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    A1,
    A2,
    B1,
    B2,
    #[serde(rename = "mixed")]
    Mixed,
}

impl Level {
    /// Levels with their own word lists, in ascending difficulty.
    pub const GRADED: [Level; 4] = [Level::A1, Level::A2, Level::B1, Level::B2];

    /// Every level the menu offers.
    pub const ALL: [Level; 5] = [Level::A1, Level::A2, Level::B1, Level::B2, Level::Mixed];

    pub fn as_str(self) -> &'static str {
        match self {
            Level::A1 => "A1",
            Level::A2 => "A2",
            Level::B1 => "B1",
            Level::B2 => "B2",
            Level::Mixed => "mixed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Level::Mixed => "MIX",
            other => other.as_str(),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Level::A1 => "Başlangıç",
            Level::A2 => "Temel",
            Level::B1 => "Orta",
            Level::B2 => "Orta Üstü",
            Level::Mixed => "Karışık",
        }
    }

    /// Difficulty on a 1-4 scale. The mixed pool spans all of them.
    pub fn difficulty(self) -> u8 {
        match self {
            Level::A1 => 1,
            Level::A2 => 2,
            Level::B1 => 3,
            Level::B2 | Level::Mixed => 4,
        }
    }

    pub fn is_graded(self) -> bool {
        self != Level::Mixed
    }

    /// Asset file holding this level's word list.
    pub(crate) fn asset_name(self) -> Option<&'static str> {
        match self {
            Level::A1 => Some("a1.json"),
            Level::A2 => Some("a2.json"),
            Level::B1 => Some("b1.json"),
            Level::B2 => Some("b2.json"),
            Level::Mixed => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a1" => Ok(Level::A1),
            "a2" => Ok(Level::A2),
            "b1" => Ok(Level::B1),
            "b2" => Ok(Level::B2),
            "mixed" | "mix" | "all" => Ok(Level::Mixed),
            _ => Err(DrillError::UnknownLevel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("a1".parse::<Level>(), Ok(Level::A1));
        assert_eq!(" B2 ".parse::<Level>(), Ok(Level::B2));
        assert_eq!("Mixed".parse::<Level>(), Ok(Level::Mixed));
    }

    #[test]
    fn unknown_level_is_an_error() {
        assert_eq!(
            "C1".parse::<Level>(),
            Err(DrillError::UnknownLevel("C1".to_string()))
        );
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for level in Level::ALL {
            assert_eq!(level.to_string().parse::<Level>(), Ok(level));
        }
    }

    #[test]
    fn only_mixed_is_ungraded() {
        assert!(Level::GRADED.iter().all(|l| l.is_graded()));
        assert!(!Level::Mixed.is_graded());
        assert!(Level::Mixed.asset_name().is_none());
    }

    #[test]
    fn difficulty_ascends_with_grade() {
        let d: Vec<u8> = Level::GRADED.iter().map(|l| l.difficulty()).collect();
        assert_eq!(d, vec![1, 2, 3, 4]);
    }
}
