//! Bookkeeping summaries for AlCa dataset production.
//!
//! Queries the DAS data catalog through the external `dasgoclient`
//! executable, tallies dataset sizes and event counts per calibration
//! group and per production year, and renders console report blocks.

pub mod catalog;
pub mod client;
pub mod groups;
pub mod report;
pub mod tally;

pub use client::{Catalog, DasClient};
pub use tally::{GroupTotals, Year};
