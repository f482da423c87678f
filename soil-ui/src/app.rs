//! Interactive calculator session and batch reports.
//!
//! The session reads one command per line, applies it to the form state and
//! redraws the calculator after every accepted change, the terminal
//! counterpart of recomputing on each keystroke.

use std::io::{self, BufRead, Write};

use soil_core::{CalculatorInput, ContainerShape, LengthUnit, SoilVolumeCalculator};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::logging;
use crate::state::{CalculatorState, Field};
use crate::views::{format_preview, format_result, render_calculator};

/// A command that could not be understood. The session reports it and
/// keeps running.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}' (type 'help' for a list)")]
    UnknownCommand(String),

    #[error("'{command}' needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("unknown shape '{0}' (expected rectangular or cylindrical)")]
    UnknownShape(String),

    #[error("unknown unit '{0}' (expected cm or in)")]
    UnknownUnit(String),

    #[error("unknown field '{0}'")]
    UnknownField(String),
}

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Shape(ContainerShape),
    Unit(LengthUnit),
    /// Replace a field's text. The text may be empty.
    Set(Field, String),
    Clear,
    Show,
    /// Swap the active log filter, e.g. `debug` or `soil_core=trace`.
    Log(String),
    Help,
    Quit,
}

impl Command {
    /// Parses a command line. Returns `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        let Some((word, rest)) = line
            .split_once(char::is_whitespace)
            .or_else(|| (!line.is_empty()).then_some((line, "")))
        else {
            return Ok(None);
        };
        let rest = rest.trim();

        let command = match word.to_ascii_lowercase().as_str() {
            "shape" => {
                let code = required(rest, "shape", "a shape")?;
                Command::Shape(
                    ContainerShape::parse(code)
                        .ok_or_else(|| CommandError::UnknownShape(code.to_string()))?,
                )
            }
            "unit" | "units" => {
                let code = required(rest, "unit", "a unit")?;
                Command::Unit(
                    LengthUnit::parse(code)
                        .ok_or_else(|| CommandError::UnknownUnit(code.to_string()))?,
                )
            }
            "set" => {
                let (name, text) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                let name = required(name, "set", "a field name")?;
                let field =
                    Field::parse(name).ok_or_else(|| CommandError::UnknownField(name.to_string()))?;
                Command::Set(field, text.trim().to_string())
            }
            "log" => Command::Log(required(rest, "log", "a level or filter directive")?.to_string()),
            "clear" => Command::Clear,
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn required<'a>(
    value: &'a str,
    command: &'static str,
    expected: &'static str,
) -> Result<&'a str, CommandError> {
    if value.is_empty() {
        Err(CommandError::MissingArgument { command, expected })
    } else {
        Ok(value)
    }
}

/// Usage hint shown by `help`.
pub struct CommandHint {
    pub usage: &'static str,
    pub action: &'static str,
}

impl CommandHint {
    pub const fn new(
        usage: &'static str,
        action: &'static str,
    ) -> Self {
        Self { usage, action }
    }
}

pub const COMMAND_HINTS: &[CommandHint] = &[
    CommandHint::new("shape rectangular|cylindrical", "Pick the container shape"),
    CommandHint::new("unit cm|in", "Pick the measurement unit"),
    CommandHint::new("set <field> [value]", "Type into a field (empty clears it)"),
    CommandHint::new("clear", "Empty every field"),
    CommandHint::new("show", "Redraw the calculator"),
    CommandHint::new("log <level|directive>", "Change the log filter"),
    CommandHint::new("quit", "Leave"),
];

/// Formats the command list, followed by the field names.
pub fn format_help() -> String {
    let mut lines: Vec<String> = COMMAND_HINTS
        .iter()
        .map(|h| format!("  {:32} {}", h.usage, h.action))
        .collect();
    let fields = Field::all()
        .iter()
        .map(|f| f.key())
        .collect::<Vec<_>>()
        .join(", ");
    lines.push(format!("Fields: {fields}"));
    lines.join("\n")
}

/// What the session should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Render(String),
    Quit,
}

/// Form state plus the calculator that renders it.
#[derive(Debug, Clone)]
pub struct CalculatorSession {
    calculator: SoilVolumeCalculator,
    state: CalculatorState,
}

impl CalculatorSession {
    pub fn new(
        calculator: SoilVolumeCalculator,
        state: CalculatorState,
    ) -> Self {
        Self { calculator, state }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn render(&self) -> String {
        render_calculator(&self.calculator, &self.state)
    }

    /// Applies a command and returns what to show next.
    pub fn apply(
        &mut self,
        command: Command,
    ) -> Outcome {
        debug!(?command, "applying command");
        match command {
            Command::Shape(shape) => self.state.set_shape(shape),
            Command::Unit(unit) => self.state.set_unit(unit),
            Command::Set(field, text) => self.state.set_field(field, text),
            Command::Clear => self.state.clear(),
            Command::Show => {}
            Command::Help => return Outcome::Render(format_help()),
            Command::Log(directive) => return Outcome::Render(change_log_filter(&directive)),
            Command::Quit => return Outcome::Quit,
        }
        Outcome::Render(self.render())
    }

    /// Runs the session until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut out: W,
    ) -> io::Result<()> {
        info!("interactive session started");
        writeln!(out, "{}\n", self.render())?;
        writeln!(out, "Type 'help' for commands.")?;

        for line in input.lines() {
            let line = line?;
            match Command::parse(&line) {
                Ok(None) => continue,
                Ok(Some(command)) => match self.apply(command) {
                    Outcome::Render(text) => writeln!(out, "{text}\n")?,
                    Outcome::Quit => break,
                },
                Err(err) => {
                    warn!(%err, line = %line, "rejected command");
                    writeln!(out, "{err}")?;
                }
            }
        }

        info!("interactive session ended");
        Ok(())
    }
}

fn change_log_filter(directive: &str) -> String {
    match logging::set_log_level(directive) {
        Ok(()) => {
            info!(directive, "log filter changed");
            format!("log filter set to '{directive}'")
        }
        Err(err) => {
            warn!(directive, error = %err, "log filter unchanged");
            format!("{err:#}")
        }
    }
}

/// Formats one report block per container, numbered from 1.
pub fn format_batch_report(
    calculator: &SoilVolumeCalculator,
    inputs: &[CalculatorInput],
) -> String {
    inputs
        .iter()
        .enumerate()
        .map(|(idx, input)| {
            let result = calculator.compute_volume(input);
            let preview = calculator.preview(input);
            format!(
                "Container {} ({}, {})\n{}\n{}",
                idx + 1,
                input.shape.label(),
                input.unit.label(),
                format_result(result.as_ref(), calculator.config()),
                format_preview(&preview, input.shape, calculator.config()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
