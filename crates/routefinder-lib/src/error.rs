use std::fmt;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the routefinder library.
pub type Result<T> = std::result::Result<T, Error>;

/// Number of fields every route record must carry: source, destination, weight.
pub const RECORD_FIELDS: usize = 3;

/// Domain rule a route record violated.
///
/// Rules are checked in declaration order, so a self-loop with a negative
/// weight reports [`RouteRule::SelfLoopNonZero`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRule {
    /// Source and destination are the same station but the weight is not 0.
    SelfLoopNonZero,
    /// The weight is below zero.
    NegativeWeight,
    /// Source and destination differ but the weight is 0.
    ZeroBetweenDistinct,
}

impl fmt::Display for RouteRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            RouteRule::SelfLoopNonZero => "self-loop must have zero weight",
            RouteRule::NegativeWeight => "weight must be non-negative",
            RouteRule::ZeroBetweenDistinct => "distinct stations must have positive weight",
        };
        f.write_str(reason)
    }
}

/// Top-level library error type.
///
/// Every load-time variant aborts the whole load; no partially built graph is
/// ever returned alongside one of these.
#[derive(Debug, Error)]
pub enum Error {
    /// A record carried fewer than three fields.
    #[error(
        "record {position} has {found} field(s), expected 3: {}",
        format_record(.raw_record)
    )]
    MissingField {
        position: usize,
        found: usize,
        raw_record: Vec<String>,
    },

    /// The weight field is not an integer literal.
    #[error(
        "record {position} has a malformed weight {value:?}: {}",
        format_record(.raw_record)
    )]
    MalformedWeight {
        position: usize,
        value: String,
        raw_record: Vec<String>,
        #[source]
        source: ParseIntError,
    },

    /// A well-formed record broke one of the route rules.
    #[error("invalid route at record {position}: {reason}: {}", format_record(.raw_record))]
    InvalidRoute {
        reason: RouteRule,
        position: usize,
        raw_record: Vec<String>,
    },

    /// The input produced no edges at all.
    #[error("route input produced no edges")]
    EmptyInput,

    /// The route file could not be opened or read.
    #[error("failed to read routes from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Wrapper for CSV tokenizer errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl Error {
    /// 1-based position of the offending record, for record-level errors.
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::MissingField { position, .. }
            | Error::MalformedWeight { position, .. }
            | Error::InvalidRoute { position, .. } => Some(*position),
            _ => None,
        }
    }
}

fn format_record(fields: &[String]) -> String {
    format!("[{}]", fields.join(", "))
}
