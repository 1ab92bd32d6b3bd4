//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - draw identity and published results (`DrawRecord`, `DrawResult`)
//! - the reconciliation output (`ValidationReport`)
//! - ticket-side values (`OcrLine`, `Combination`, `MatchOutcome`)

pub mod types;

pub use types::*;
