use serde::{Deserialize, Serialize};

/// Centimeters per inch.
pub const CM_PER_INCH: f64 = 2.54;

/// Unit the container dimensions are entered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    #[default]
    #[serde(rename = "cm")]
    Centimeters,
    #[serde(rename = "in")]
    Inches,
}

impl LengthUnit {
    pub fn all() -> &'static [LengthUnit] {
        &[LengthUnit::Centimeters, LengthUnit::Inches]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Centimeters => "cm",
            Self::Inches => "in",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cm" => Some(Self::Centimeters),
            "in" => Some(Self::Inches),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Centimeters => "Centimeters",
            Self::Inches => "Inches",
        }
    }

    /// Multiplier that converts a value in this unit to centimeters.
    pub fn to_cm_factor(&self) -> f64 {
        match self {
            Self::Centimeters => 1.0,
            Self::Inches => CM_PER_INCH,
        }
    }

    pub fn to_cm(&self, value: f64) -> f64 {
        value * self.to_cm_factor()
    }
}
