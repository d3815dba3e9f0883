//! Core domain types for the lab simulator.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod analysis;
mod mixture;
mod models;
mod page;
mod range;
mod records;
mod table;
pub mod ui;

pub use analysis::{BreakPoint, CstPoint, find_break_point, find_cst};
pub use mixture::Mixture;
pub use models::{
    OXALIC_NORMALITY, OXALIC_VOLUME_ML, TransitionTemps, conductance_ms,
    disappearance_temperature, naoh_normality, observe_transition, reappearance_temperature,
};
pub use page::{Page, PhenolPage, TitrationPage};
pub use range::{NAOH_ADDED, NAOH_USED, PHENOL, RangeError, VolumeRange, WATER};
pub use records::{ConductanceRecord, PhenolRecord};
pub use table::{Column, Keyed, RecordTable, TableRow};
