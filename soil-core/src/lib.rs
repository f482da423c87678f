pub mod calculations;
pub mod models;

pub use calculations::{
    SoilVolumeCalculator, compute_aspect, compute_fill_percent, compute_preview, compute_volume,
};
pub use models::*;
