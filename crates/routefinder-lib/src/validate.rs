//! Per-record validation for raw route rows.

use std::num::{IntErrorKind, ParseIntError};

use crate::error::{Error, Result, RouteRule, RECORD_FIELDS};
use crate::graph::Edge;
use crate::station::Station;

/// Validate one raw record and turn it into an [`Edge`].
///
/// `fields` holds the raw text of the record (source, destination, weight);
/// extra trailing fields are ignored. `position` is the 1-based index of the
/// record in its input and is only used for error reporting.
///
/// Structural problems are reported before domain rules: a short record is
/// [`Error::MissingField`], an unparsable weight is [`Error::MalformedWeight`],
/// and only then are the [`RouteRule`]s checked in order.
pub fn validate_record<S: AsRef<str>>(fields: &[S], position: usize) -> Result<Edge> {
    let raw_record = || -> Vec<String> {
        fields.iter().map(|f| f.as_ref().to_string()).collect()
    };

    if fields.len() < RECORD_FIELDS {
        return Err(Error::MissingField {
            position,
            found: fields.len(),
            raw_record: raw_record(),
        });
    }

    let source = Station::new(fields[0].as_ref());
    let destination = Station::new(fields[1].as_ref());
    let weight_text = fields[2].as_ref().trim();
    let weight = parse_weight(weight_text).map_err(|source| Error::MalformedWeight {
        position,
        value: weight_text.to_string(),
        raw_record: raw_record(),
        source,
    })?;

    if let Some(reason) = violated_rule(&source, &destination, weight) {
        return Err(Error::InvalidRoute {
            reason,
            position,
            raw_record: raw_record(),
        });
    }

    // Rules above guarantee the weight is non-negative.
    let weight = weight.unsigned_abs();
    Ok(Edge {
        source,
        destination,
        weight,
    })
}

/// Parse the weight text as a signed integer.
///
/// Integer literals below `i64::MIN` are still integers, just negative ones,
/// so they clamp to `i64::MIN` and fail the domain rules instead of parsing.
/// Literals above `i64::MAX` cannot be stored and stay malformed.
fn parse_weight(text: &str) -> std::result::Result<i64, ParseIntError> {
    match text.parse::<i64>() {
        Err(err) if *err.kind() == IntErrorKind::NegOverflow => Ok(i64::MIN),
        other => other,
    }
}

fn violated_rule(source: &Station, destination: &Station, weight: i64) -> Option<RouteRule> {
    let self_loop = source == destination;
    if self_loop && weight != 0 {
        return Some(RouteRule::SelfLoopNonZero);
    }
    if weight < 0 {
        return Some(RouteRule::NegativeWeight);
    }
    if !self_loop && weight == 0 {
        return Some(RouteRule::ZeroBetweenDistinct);
    }
    None
}
