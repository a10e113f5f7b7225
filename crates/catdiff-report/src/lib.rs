//! Report rendering for catdiff.
//!
//! Turns a [`ComparisonResult`](catdiff_diff::ComparisonResult) into the
//! lines a person (or a CI log) reads:
//!
//! ```text
//! MISSING in pl at [root.nav]: bikes, settings
//! EXTRA in pl at [root]: legacy
//! TYPE MISMATCH at [root.bike.parts]: en=object pl=string
//! FOUND 4 issue(s).
//! ```
//!
//! Missing and extra keys that share a path are grouped on one line; the
//! summary counts every key separately.

pub mod error;
pub mod report;

pub use error::{ReportError, ReportResult};
pub use report::{Report, ReportLine, Style};
