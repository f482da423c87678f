mod calculator_config;
mod calculator_input;
mod calculator_result;
mod container_shape;
mod length_unit;

pub use calculator_config::{CalculatorConfig, CalculatorConfigError};
pub use calculator_input::CalculatorInput;
pub use calculator_result::{CalculatorResult, PreviewBox, PreviewGeometry};
pub use container_shape::ContainerShape;
pub use length_unit::LengthUnit;
