//! Composite quality scoring for software packages.
//!
//! The `analyze` module is the scoring engine: pure functions over facts that
//! have already been fetched. `scan` holds the collaborators that fetch those
//! facts (git, files), `config` the layered settings and `report` the renderers.

pub mod analyze;
pub mod config;
pub mod error;
pub mod report;
pub mod scan;
pub mod types;
