//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SOURCE DEFAULTS
// =============================================================================

/// Default path of the line-oriented data file
pub const DEFAULT_DATA_FILE: &str = "codes.txt";

/// Default marker value inserted at the midpoint of every container
pub const DEFAULT_MARKER: &str = "TESTCODE";

// =============================================================================
// RACE DEFAULTS
// =============================================================================

/// Default number of complete pipeline runs
pub const DEFAULT_ROUNDS: u32 = 1;

/// Default tracing filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Reported in place of an elapsed time when an operation does not apply
pub const NOT_APPLICABLE_MS: i64 = -1;

// =============================================================================
// ENVIRONMENT VARIABLES
// =============================================================================

/// Environment variable names read by [`crate::config::Config`]
pub mod env_vars {
    pub const DATA_FILE: &str = "DATA_FILE";
    pub const MARKER: &str = "RACE_MARKER";
    pub const ROUNDS: &str = "RACE_ROUNDS";
    pub const JSON_OUTPUT: &str = "RACE_JSON_OUTPUT";
    pub const RUST_LOG: &str = "RUST_LOG";
}

// =============================================================================
// REPORT LABELS
// =============================================================================

/// Column and row labels of the timing table
pub mod labels {
    pub const OPERATION: &str = "Operation";
    pub const TABLE_TITLE: &str = "Data file outputs";

    pub const VECTOR: &str = "Vector";
    pub const LIST: &str = "List";
    pub const SET: &str = "Set";

    pub const READ: &str = "Read";
    pub const SORT: &str = "Sort";
    pub const INSERT: &str = "Insert";
    pub const DELETE: &str = "Delete";
}
