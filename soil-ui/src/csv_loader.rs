//! CSV loader for batches of containers.
//!
//! ## CSV Format
//!
//! Columns are matched by header name, so their order does **not** matter.
//! Header names are case-sensitive.
//!
//! | Column           | Required | Notes                                         |
//! |------------------|----------|-----------------------------------------------|
//! | `shape`          | yes      | `rectangular` or `cylindrical`                |
//! | `unit`           | no       | `cm` or `in`; empty or missing means `cm`     |
//! | `length`         | no       | Ignored for cylindrical containers            |
//! | `width`          | no       | Diameter for cylindrical containers           |
//! | `height`         | no       | Only used by the preview                      |
//! | `soil_depth`     | no       |                                               |
//! | `cost_per_liter` | no       | Leave empty for no cost estimate              |
//!
//! Numeric cells are kept as text and handed to the calculator unchanged,
//! so a blank or malformed measurement never fails the load; that row just
//! has no estimate.
//!
//! ### Example
//!
//! ```csv
//! shape,unit,length,width,height,soil_depth,cost_per_liter
//! rectangular,cm,20,10,15,5,
//! cylindrical,in,,4,8,2,3.50
//! ```
use serde::Deserialize;
use soil_core::{CalculatorInput, ContainerShape, LengthUnit};

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    shape: String,
    #[serde(default)]
    unit: String,
    #[serde(default)]
    length: String,
    #[serde(default)]
    width: String,
    #[serde(default)]
    height: String,
    #[serde(default)]
    soil_depth: String,
    #[serde(default)]
    cost_per_liter: String,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading container rows.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The CSV structure is invalid or the `shape` column is missing.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// The file could not be read.
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A `shape` cell is not a known shape code. `row` is 1-based, not
    /// counting the header.
    #[error("unrecognised shape '{shape}' on row {row}")]
    InvalidShape { shape: String, row: usize },

    /// A `unit` cell is not a known unit code.
    #[error("unrecognised unit '{unit}' on row {row}")]
    InvalidUnit { unit: String, row: usize },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

/// Convert a single CSV row into a calculator input.
fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<CalculatorInput, CsvLoadError> {
    let shape = ContainerShape::parse(&row.shape).ok_or_else(|| CsvLoadError::InvalidShape {
        shape: row.shape.clone(),
        row: row_number,
    })?;

    let unit = if row.unit.trim().is_empty() {
        LengthUnit::default()
    } else {
        LengthUnit::parse(&row.unit).ok_or_else(|| CsvLoadError::InvalidUnit {
            unit: row.unit.clone(),
            row: row_number,
        })?
    };

    Ok(CalculatorInput {
        shape,
        unit,
        length: row.length,
        width: row.width,
        height: row.height,
        soil_depth: row.soil_depth,
        cost_per_liter: row.cost_per_liter,
    })
}

/// Parse CSV text and return one calculator input per row, in file order.
///
/// # Errors
///
/// * [CsvLoadError::Parse] – the CSV is structurally invalid or has no
///   `shape` column.
/// * [CsvLoadError::InvalidShape] / [CsvLoadError::InvalidUnit] – a row
///   names an unknown shape or unit.
pub fn load_from_str(input: &str) -> Result<Vec<CalculatorInput>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    let inputs = reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            convert_row(row, idx + 1)
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(rows = inputs.len(), "loaded container rows");
    Ok(inputs)
}

/// Reads a file from disk and delegates to [load_from_str].
pub fn load_from_file(path: &std::path::Path) -> Result<Vec<CalculatorInput>, CsvLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CsvLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_from_str(&contents)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
