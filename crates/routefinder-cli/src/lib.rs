//! Routefinder CLI library.
//!
//! Presentation and interaction around `routefinder-lib`: subcommand
//! handlers, the interactive prompt loop and output rendering. Everything
//! here writes to caller-supplied streams so it can be driven from tests.

pub mod commands;
pub mod output;
