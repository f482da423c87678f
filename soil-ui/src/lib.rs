pub mod app;
pub mod config;
pub mod csv_loader;
pub mod logging;
pub mod state;
pub mod utils;
pub mod views;

pub use app::{CalculatorSession, Command, CommandError, Outcome};
pub use state::{CalculatorState, Field};
