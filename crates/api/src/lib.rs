//! # Agenda API
//!
//! Application layer - commands and context wiring.
//!
//! This crate contains:
//! - Commands for the calendar page and the schedule admin table
//! - Application context (dependency injection)
//!
//! ## Architecture
//! - Depends on `common`, `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
