use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use soil_core::{ContainerShape, LengthUnit, SoilVolumeCalculator};
use soil_ui::logging::{LogOptions, init_logging};
use soil_ui::{CalculatorSession, CalculatorState, Field, app, config, csv_loader, views};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Terrarium soil calculator.
///
/// Estimates how much soil a container needs, in liters, cups and retail
/// bags, with an optional cost and a preview of the fill level.
#[derive(Debug, Parser)]
#[command(name = "soil-calc", version)]
struct Cli {
    /// Container shape: rectangular or cylindrical.
    #[arg(long, default_value = "rectangular", value_parser = parse_shape)]
    shape: ContainerShape,

    /// Unit of the dimensions: cm or in.
    #[arg(long, default_value = "cm", value_parser = parse_unit)]
    unit: LengthUnit,

    /// Container length (rectangular only).
    #[arg(long, default_value = "")]
    length: String,

    /// Container width, or diameter for a cylindrical jar.
    #[arg(long, visible_alias = "diameter", default_value = "")]
    width: String,

    /// Container height, used for the fill preview.
    #[arg(long, default_value = "")]
    height: String,

    /// Depth of the soil layer.
    #[arg(long, default_value = "")]
    soil_depth: String,

    /// Optional soil price per liter.
    #[arg(long, default_value = "")]
    cost_per_liter: String,

    /// Estimate every container listed in a CSV file instead.
    #[arg(short, long, conflicts_with = "interactive")]
    file: Option<PathBuf>,

    /// Edit the form line by line, redrawing after each change.
    #[arg(short, long)]
    interactive: bool,

    /// TOML file overriding the calculator constants.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `soil_core=trace`. Overrides RUST_LOG.
    #[arg(long)]
    log_level: Option<String>,

    /// Also append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn parse_shape(s: &str) -> Result<ContainerShape, String> {
    ContainerShape::parse(s).ok_or_else(|| format!("unknown shape '{s}'"))
}

fn parse_unit(s: &str) -> Result<LengthUnit, String> {
    LengthUnit::parse(s).ok_or_else(|| format!("unknown unit '{s}'"))
}

impl Cli {
    /// Form state seeded from the command-line flags.
    fn initial_state(&self) -> CalculatorState {
        let mut state = CalculatorState::new();
        state.set_shape(self.shape);
        state.set_unit(self.unit);
        for (field, value) in [
            (Field::Length, &self.length),
            (Field::Width, &self.width),
            (Field::Height, &self.height),
            (Field::SoilDepth, &self.soil_depth),
            (Field::CostPerLiter, &self.cost_per_liter),
        ] {
            state.set_field(field, value.as_str());
        }
        state
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&LogOptions {
        level: cli.log_level.as_deref(),
        file: cli.log_file.as_deref(),
    })?;

    let calculator_config =
        config::load_config(cli.config.as_deref()).context("failed to load calculator config")?;
    let calculator =
        SoilVolumeCalculator::new(calculator_config).context("invalid calculator config")?;

    if let Some(path) = &cli.file {
        info!("estimating containers from {}", path.display());
        let inputs = csv_loader::load_from_file(path)
            .with_context(|| format!("failed to load containers from {}", path.display()))?;
        println!("{}", app::format_batch_report(&calculator, &inputs));
        return Ok(());
    }

    let state = cli.initial_state();
    if cli.interactive {
        let mut session = CalculatorSession::new(calculator, state);
        session
            .run(io::stdin().lock(), io::stdout().lock())
            .context("interactive session failed")?;
    } else {
        debug!(?state, "one-shot estimate");
        println!("{}", views::render_calculator(&calculator, &state));
    }

    Ok(())
}
