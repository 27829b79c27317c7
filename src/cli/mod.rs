//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand
//! and returns the process exit code.

mod assess;
mod catalogue;

pub use assess::{gate_exit_code, run_assess};
pub use catalogue::{run_catalogue, run_check_catalogue, CatalogueFormat};

// Re-export config types used by handlers
pub use crate::config::AppConfig;
