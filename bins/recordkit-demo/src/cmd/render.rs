use std::fmt;
use std::io::Write;

use serde::Serialize;

use super::config::OutputFormat;
use super::error::DemoError;

/// One line of showcase output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Line {
    /// `Label: value`
    Field { label: String, value: String },
    /// `Label - name: <name> id: <id>`
    Person { label: String, id: u32, name: String },
    /// Empty separator line; dropped from JSON output.
    Break,
}

impl Line {
    pub fn field(label: &str, value: impl fmt::Display) -> Self {
        Line::Field {
            label: label.to_string(),
            value: value.to_string(),
        }
    }

    pub fn person(label: impl Into<String>, id: u32, name: &str) -> Self {
        Line::Person {
            label: label.into(),
            id,
            name: name.to_string(),
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Field { label, value } => write!(f, "{label}: {value}"),
            Line::Person { label, id, name } => write!(f, "{label} - name: {name} id: {id}"),
            Line::Break => Ok(()),
        }
    }
}

pub fn write_lines<W: Write>(out: &mut W, lines: &[Line], format: OutputFormat) -> Result<(), DemoError> {
    match format {
        OutputFormat::Text => {
            for line in lines {
                writeln!(out, "{line}")?;
            }
        }
        OutputFormat::Json => {
            for line in lines.iter().filter(|l| !matches!(l, Line::Break)) {
                serde_json::to_writer(&mut *out, line)?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
