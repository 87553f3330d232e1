//! Command implementations for the orderlens CLI.
//!
//! Each module implements one subcommand: run one analysis over the loaded
//! dataset, branch on the outcome kind, and render.

pub mod cuisines;
pub mod low;
pub mod popular;
pub mod sales;
pub mod stats;
