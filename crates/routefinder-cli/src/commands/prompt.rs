//! Interactive prompt loop.

use std::io::{BufRead, Write};

use anyhow::Result;
use routefinder_lib::{shortest_path, RouteGraph, Station};
use tracing::debug;

use super::unknown_station_message;
use crate::output::OutputFormat;

const START_PROMPT: &str = "What station are you getting on the train? ";
const END_PROMPT: &str = "What station are you getting off the train? ";

/// Repeatedly ask for a start and an end station and print the shortest path
/// between them, until `input` is exhausted.
///
/// Returns the number of queries answered.
pub fn run_prompt<R: BufRead, W: Write>(
    graph: &RouteGraph,
    format: OutputFormat,
    mut input: R,
    out: &mut W,
) -> Result<usize> {
    let mut answered = 0;
    loop {
        let Some(from) = ask(&mut input, out, START_PROMPT)? else {
            break;
        };
        let Some(to) = ask(&mut input, out, END_PROMPT)? else {
            break;
        };

        writeln!(out)?;
        if from != to {
            let unknown: Vec<String> = [&from, &to]
                .into_iter()
                .filter_map(|station| unknown_station_message(graph, station))
                .collect();
            if !unknown.is_empty() {
                for message in unknown {
                    writeln!(out, "{message}")?;
                }
                continue;
            }
        }

        let result = shortest_path(graph, &from, &to);
        format.render_path(out, &from, &to, result.as_ref())?;
        answered += 1;
    }

    debug!(answered, "prompt input exhausted");
    Ok(answered)
}

/// Print `prompt` and read one station name. `None` means end of input.
fn ask<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<Station>> {
    write!(out, "\n{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(out)?;
        return Ok(None);
    }
    Ok(Some(Station::new(line.trim())))
}
