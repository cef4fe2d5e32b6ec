//! Output formatting for route tables and path results.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use routefinder_lib::{Edge, PathResult, Station};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// JSON documents, one per result.
    Json,
}

impl OutputFormat {
    /// Render the loaded route table.
    pub fn render_routes<W: Write>(self, out: &mut W, edges: &[Edge]) -> Result<()> {
        match self {
            OutputFormat::Text => render_routes_text(out, edges),
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, edges)?;
                writeln!(out)?;
                Ok(())
            }
        }
    }

    /// Render the outcome of a shortest-path query.
    pub fn render_path<W: Write>(
        self,
        out: &mut W,
        from: &Station,
        to: &Station,
        result: Option<&PathResult>,
    ) -> Result<()> {
        match self {
            OutputFormat::Text => match result {
                Some(result) => writeln!(out, "{}", format_path(result))?,
                None => writeln!(out, "No route from {from} to {to}")?,
            },
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &result)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

fn render_routes_text<W: Write>(out: &mut W, edges: &[Edge]) -> Result<()> {
    writeln!(out, "Routes ({}):", edges.len())?;
    let width = edges
        .iter()
        .map(|edge| edge.source.as_str().len())
        .max()
        .unwrap_or(0);
    for edge in edges {
        writeln!(
            out,
            "  {:<width$} -> {} ({})",
            edge.source.as_str(),
            edge.destination,
            edge.weight,
            width = width
        )?;
    }
    Ok(())
}

/// Format a path as `A -> B -> C (total weight: n)`.
pub fn format_path(result: &PathResult) -> String {
    let stations = result
        .stations
        .iter()
        .map(Station::as_str)
        .collect::<Vec<_>>()
        .join(" -> ");
    format!("{} (total weight: {})", stations, result.total_weight)
}

/// Render "did you mean" hints for an unknown station name.
pub fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
