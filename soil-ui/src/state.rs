//! Form state for the soil calculator.
//!
//! This holds the text the user has typed so far. Derived values are never
//! stored here; every view recomputes them from [`CalculatorState::input`].

use soil_core::{CalculatorInput, ContainerShape, LengthUnit};

/// Editable text fields of the calculator form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Length,
    Width,
    Height,
    SoilDepth,
    CostPerLiter,
}

impl Field {
    pub fn all() -> &'static [Field] {
        &[
            Field::Length,
            Field::Width,
            Field::Height,
            Field::SoilDepth,
            Field::CostPerLiter,
        ]
    }

    /// Dimension fields shown for a shape, in display order.
    ///
    /// A jar has no length; its width field holds the diameter.
    pub fn dimensions_for(shape: ContainerShape) -> &'static [Field] {
        match shape {
            ContainerShape::Rectangular => &[
                Field::Length,
                Field::Width,
                Field::Height,
                Field::SoilDepth,
            ],
            ContainerShape::Cylindrical => &[Field::Width, Field::Height, Field::SoilDepth],
        }
    }

    /// Name used on the command line and in CSV headers.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Length => "length",
            Field::Width => "width",
            Field::Height => "height",
            Field::SoilDepth => "soil_depth",
            Field::CostPerLiter => "cost_per_liter",
        }
    }

    /// Looks up a field by key. `diameter` and `depth` are accepted as
    /// aliases, and `-` may stand in for `_`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "length" => Some(Field::Length),
            "width" | "diameter" => Some(Field::Width),
            "height" => Some(Field::Height),
            "soil_depth" | "depth" => Some(Field::SoilDepth),
            "cost_per_liter" | "cost" => Some(Field::CostPerLiter),
            _ => None,
        }
    }

    /// Label shown next to the field, e.g. `Length (cm)`.
    pub fn label(
        &self,
        shape: ContainerShape,
        unit: LengthUnit,
    ) -> String {
        let name = match (self, shape) {
            (Field::Length, _) => "Length",
            (Field::Width, ContainerShape::Cylindrical) => "Diameter",
            (Field::Width, ContainerShape::Rectangular) => "Width",
            (Field::Height, _) => "Height",
            (Field::SoilDepth, _) => "Soil Depth",
            (Field::CostPerLiter, _) => return "Soil Cost per Liter ($)".to_string(),
        };
        format!("{name} ({})", unit.as_str())
    }
}

/// Current contents of the calculator form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculatorState {
    pub shape: ContainerShape,
    pub unit: LengthUnit,
    pub length: String,
    pub width: String,
    pub height: String,
    pub soil_depth: String,
    pub cost_per_liter: String,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(
        &self,
        field: Field,
    ) -> &str {
        match field {
            Field::Length => &self.length,
            Field::Width => &self.width,
            Field::Height => &self.height,
            Field::SoilDepth => &self.soil_depth,
            Field::CostPerLiter => &self.cost_per_liter,
        }
    }

    /// Replaces the text of one field.
    pub fn set_field(
        &mut self,
        field: Field,
        text: impl Into<String>,
    ) {
        let slot = match field {
            Field::Length => &mut self.length,
            Field::Width => &mut self.width,
            Field::Height => &mut self.height,
            Field::SoilDepth => &mut self.soil_depth,
            Field::CostPerLiter => &mut self.cost_per_liter,
        };
        *slot = text.into();
    }

    /// Switches shape. Typed values are kept, as the form only hides fields.
    pub fn set_shape(
        &mut self,
        shape: ContainerShape,
    ) {
        self.shape = shape;
    }

    pub fn set_unit(
        &mut self,
        unit: LengthUnit,
    ) {
        self.unit = unit;
    }

    /// Empties every text field, keeping shape and unit.
    pub fn clear(&mut self) {
        for field in Field::all() {
            self.set_field(*field, String::new());
        }
    }

    /// Snapshot handed to the calculator.
    pub fn input(&self) -> CalculatorInput {
        CalculatorInput {
            shape: self.shape,
            unit: self.unit,
            length: self.length.clone(),
            width: self.width.clone(),
            height: self.height.clone(),
            soil_depth: self.soil_depth.clone(),
            cost_per_liter: self.cost_per_liter.clone(),
        }
    }
}

impl From<CalculatorInput> for CalculatorState {
    fn from(input: CalculatorInput) -> Self {
        Self {
            shape: input.shape,
            unit: input.unit,
            length: input.length,
            width: input.width,
            height: input.height,
            soil_depth: input.soil_depth,
            cost_per_liter: input.cost_per_liter,
        }
    }
}
