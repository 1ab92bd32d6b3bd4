//! `lotto-check` library crate.
//!
//! The binary (`lotto`) is a thin wrapper around this library so that:
//!
//! - the draw schedule core is testable without spawning processes
//! - the provider boundary can be swapped (site client, static records)
//! - presentation stays out of the validation logic

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod draw;
pub mod error;
pub mod io;
pub mod provider;
pub mod report;
pub mod ticket;
