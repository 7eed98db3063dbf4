use crate::prelude::ParsingError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Free electron concentration estimate
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ElectronDensity {
    /// Electrons per cubic meter
    pub(crate) per_m3: f64,
}

impl std::ops::Mul<f64> for ElectronDensity {
    type Output = ElectronDensity;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::from_per_m3(self.per_m3 * rhs)
    }
}

impl std::ops::Div<f64> for ElectronDensity {
    type Output = ElectronDensity;

    fn div(self, rhs: f64) -> Self::Output {
        Self::from_per_m3(self.per_m3 / rhs)
    }
}

impl ElectronDensity {
    /// Builds new [ElectronDensity] expressed in electrons per m^3
    pub fn from_per_m3(per_m3: f64) -> Self {
        Self { per_m3 }
    }

    /// Builds new [ElectronDensity] expressed in electrons per cm^3
    pub fn from_per_cm3(per_cm3: f64) -> Self {
        Self {
            per_m3: per_cm3 * 1.0E6,
        }
    }

    /// Returns density in electrons per m^3
    pub fn per_m3(&self) -> f64 {
        self.per_m3
    }

    /// Returns density in electrons per cm^3
    pub fn per_cm3(&self) -> f64 {
        self.per_m3 / 1.0E6
    }

    /// Returns density expressed in desired [DensityUnit]
    pub fn value(&self, unit: DensityUnit) -> f64 {
        match unit {
            DensityUnit::PerCubicCentimeter => self.per_cm3(),
            DensityUnit::PerCubicMeter => self.per_m3(),
        }
    }

    /// True if this estimate is a finite number
    pub fn is_finite(&self) -> bool {
        self.per_m3.is_finite()
    }
}

/// [DensityUnit] used when reporting an [ElectronDensity].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DensityUnit {
    /// Electrons per cm^3, which is what IRI reports
    #[default]
    PerCubicCentimeter,

    /// Electrons per m^3
    PerCubicMeter,
}

impl std::str::FromStr for DensityUnit {
    type Err = ParsingError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "cm3" | "cm-3" | "cm^-3" => Ok(Self::PerCubicCentimeter),
            "m3" | "m-3" | "m^-3" => Ok(Self::PerCubicMeter),
            _ => Err(ParsingError::DensityUnit(s.to_string())),
        }
    }
}

impl std::fmt::Display for DensityUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::PerCubicCentimeter => write!(f, "cm3"),
            Self::PerCubicMeter => write!(f, "m3"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn density_units() {
        for (content, value) in [
            ("cm3", DensityUnit::PerCubicCentimeter),
            ("m3", DensityUnit::PerCubicMeter),
        ] {
            let parsed = DensityUnit::from_str(content).unwrap_or_else(|e| {
                panic!("Failed to parse unit: \"{}\" - {}", content, e);
            });

            assert_eq!(parsed, value);

            let formatted = parsed.to_string();
            assert_eq!(formatted, content);
        }

        assert!(DensityUnit::from_str("km3").is_err());
    }

    #[test]
    fn density_conversions() {
        let ne = ElectronDensity::from_per_cm3(2.5E5);
        assert_eq!(ne.per_m3(), 2.5E11);
        assert_eq!(ne.value(DensityUnit::PerCubicMeter), 2.5E11);
        assert!((ne.value(DensityUnit::PerCubicCentimeter) - 2.5E5).abs() < 1.0E-6);

        let doubled = ne * 2.0;
        assert_eq!(doubled.per_m3(), 5.0E11);
        assert_eq!((doubled / 4.0).per_m3(), 1.25E11);

        assert!(!ElectronDensity::from_per_m3(f64::NAN).is_finite());
    }
}
