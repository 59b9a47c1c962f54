//! Cabinet archetypes
//!
//! The archetype fixes the structural topology of a cabinet: which horizontal
//! members it has and whether it stands on a toe kick.

use crate::error::CabinetError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cabinet archetype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CabinetArchetype {
    /// Floor standing, open top with a stretcher, toe kick below
    Base,
    /// Wall hung, full top and bottom panels, no toe kick
    Wall,
    /// Floor-to-ceiling, full top and bottom panels, toe kick below
    Tall,
}

impl CabinetArchetype {
    /// All supported archetypes in ladder order
    pub const ALL: [CabinetArchetype; 3] = [Self::Base, Self::Wall, Self::Tall];

    /// Lowercase identifier used in files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Wall => "wall",
            Self::Tall => "tall",
        }
    }

    /// Whether the cabinet stands on a toe kick assembly
    pub fn has_toe_kick(&self) -> bool {
        matches!(self, Self::Base | Self::Tall)
    }

    /// Whether the carcass is closed by a full top panel (base uses a stretcher)
    pub fn has_top_panel(&self) -> bool {
        matches!(self, Self::Wall | Self::Tall)
    }
}

impl fmt::Display for CabinetArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CabinetArchetype {
    type Err = CabinetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "base" => Ok(Self::Base),
            "wall" => Ok(Self::Wall),
            "tall" => Ok(Self::Tall),
            other => Err(CabinetError::UnsupportedArchetype(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_archetypes() {
        assert_eq!("base".parse::<CabinetArchetype>().unwrap(), CabinetArchetype::Base);
        assert_eq!(" Wall ".parse::<CabinetArchetype>().unwrap(), CabinetArchetype::Wall);
        assert_eq!("TALL".parse::<CabinetArchetype>().unwrap(), CabinetArchetype::Tall);
    }

    #[test]
    fn test_parse_unknown_archetype() {
        let err = "corner".parse::<CabinetArchetype>().unwrap_err();
        assert_eq!(err, CabinetError::UnsupportedArchetype("corner".to_string()));
    }

    #[test]
    fn test_topology_flags() {
        assert!(CabinetArchetype::Base.has_toe_kick());
        assert!(!CabinetArchetype::Base.has_top_panel());
        assert!(!CabinetArchetype::Wall.has_toe_kick());
        assert!(CabinetArchetype::Wall.has_top_panel());
        assert!(CabinetArchetype::Tall.has_toe_kick());
        assert!(CabinetArchetype::Tall.has_top_panel());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&CabinetArchetype::Tall).unwrap();
        assert_eq!(json, "\"tall\"");
    }
}
