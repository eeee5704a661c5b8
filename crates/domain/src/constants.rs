//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Configuration defaults
pub const DEFAULT_DB_PATH: &str = "agenda.db";
pub const DEFAULT_POOL_SIZE: u32 = 4;
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_TIMEZONE: &str = "Asia/Jakarta";

// Schedule form defaults (admin dialog pre-fills)
pub const DEFAULT_START_TIME: &str = "09:00";
pub const DEFAULT_END_TIME: &str = "17:00";

// Presentation
pub const MISSING_LOCATION_LABEL: &str = "Tidak ada lokasi";
