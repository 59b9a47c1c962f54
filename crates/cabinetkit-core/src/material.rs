//! Sheet material model
//!
//! A single `Material` applies uniformly to every carcass part of one cabinet.
//! Door thickness may differ and is carried separately on the dimensions.

use crate::error::{CabinetError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sheet material kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    /// Veneer core plywood
    #[default]
    Plywood,
    /// Medium density fibreboard
    Mdf,
    /// Melamine faced particle board
    Melamine,
    /// Solid hardwood panel
    Hardwood,
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plywood => write!(f, "Plywood"),
            Self::Mdf => write!(f, "MDF"),
            Self::Melamine => write!(f, "Melamine"),
            Self::Hardwood => write!(f, "Hardwood"),
        }
    }
}

impl FromStr for MaterialKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plywood" | "ply" => Ok(Self::Plywood),
            "mdf" => Ok(Self::Mdf),
            "melamine" => Ok(Self::Melamine),
            "hardwood" => Ok(Self::Hardwood),
            _ => Err(format!("Unknown material kind: {}", s)),
        }
    }
}

/// Carcass material record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Sheet thickness in inches
    pub thickness_inches: f64,
    /// Sheet kind
    pub kind: MaterialKind,
}

impl Material {
    /// Standard 3/4" carcass stock
    pub const STANDARD_THICKNESS: f64 = 0.75;

    /// Create a material record
    pub fn new(kind: MaterialKind, thickness_inches: f64) -> Self {
        Self {
            thickness_inches,
            kind,
        }
    }

    /// 3/4" plywood, the default carcass stock
    pub fn plywood_3_4() -> Self {
        Self::new(MaterialKind::Plywood, Self::STANDARD_THICKNESS)
    }

    /// Reject thicknesses that cannot produce a carcass
    pub fn validate(&self) -> Result<()> {
        if !self.thickness_inches.is_finite() || self.thickness_inches <= 0.0 {
            return Err(CabinetError::degenerate(format!(
                "material thickness must be positive, got {}",
                self.thickness_inches
            )));
        }
        if self.thickness_inches > 1.5 {
            return Err(CabinetError::degenerate(format!(
                "material thickness {} exceeds 1.5\"",
                self.thickness_inches
            )));
        }
        Ok(())
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::plywood_3_4()
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            crate::units::format_fraction(self.thickness_inches, 16),
            self.kind
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_material() {
        let m = Material::default();
        assert_eq!(m.kind, MaterialKind::Plywood);
        assert_eq!(m.thickness_inches, 0.75);
        assert_eq!(m.to_string(), "3/4\" Plywood");
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        assert!(Material::new(MaterialKind::Mdf, 0.0).validate().is_err());
        assert!(Material::new(MaterialKind::Mdf, -0.75).validate().is_err());
        assert!(Material::new(MaterialKind::Mdf, f64::NAN).validate().is_err());
        assert!(Material::new(MaterialKind::Mdf, 0.75).validate().is_ok());
    }

    #[test]
    fn test_kind_round_trip_names() {
        assert_eq!("MDF".parse::<MaterialKind>().unwrap(), MaterialKind::Mdf);
        assert_eq!("ply".parse::<MaterialKind>().unwrap(), MaterialKind::Plywood);
        assert!("steel".parse::<MaterialKind>().is_err());
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Material::plywood_3_4()).unwrap();
        assert_eq!(json, r#"{"thickness_inches":0.75,"kind":"plywood"}"#);
    }
}
