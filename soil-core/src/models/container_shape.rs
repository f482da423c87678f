use serde::{Deserialize, Serialize};

/// Container geometries the calculator knows how to measure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerShape {
    /// A tank measured by length × width.
    #[default]
    Rectangular,
    /// A jar measured by its diameter, entered in the width field.
    Cylindrical,
}

impl ContainerShape {
    pub fn all() -> &'static [ContainerShape] {
        &[ContainerShape::Rectangular, ContainerShape::Cylindrical]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rectangular => "rectangular",
            Self::Cylindrical => "cylindrical",
        }
    }

    /// Case-insensitive lookup of a shape code.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rectangular" => Some(Self::Rectangular),
            "cylindrical" => Some(Self::Cylindrical),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Rectangular => "Rectangular Tank",
            Self::Cylindrical => "Cylindrical Jar",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_every_code() {
        for shape in ContainerShape::all() {
            assert_eq!(ContainerShape::parse(shape.as_str()), Some(*shape));
        }
    }

    #[test]
    fn parse_ignores_case_and_whitespace() {
        assert_eq!(
            ContainerShape::parse("  Cylindrical "),
            Some(ContainerShape::Cylindrical)
        );
    }

    #[test]
    fn parse_rejects_unknown_code() {
        assert_eq!(ContainerShape::parse("spherical"), None);
        assert_eq!(ContainerShape::parse(""), None);
    }

    #[test]
    fn default_is_rectangular() {
        assert_eq!(ContainerShape::default(), ContainerShape::Rectangular);
    }
}
