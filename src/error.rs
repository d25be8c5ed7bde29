//! Error handling module for hanoi-peg
//!
//! Provides the typed rule violations raised by a [`Tower`](crate::tower::Tower)
//! and the crate-wide [`HanoiError`] that wraps them alongside I/O and JSON
//! failures. Callers branch on variants, never on message text.

use thiserror::Error;

/// Rule violations raised by tower operations.
///
/// A tower is left exactly as it was whenever one of these is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TowerError {
    /// `remove_disk` found no disk above the base
    #[error("There are no disks in this tower, try another one")]
    EmptyTower,

    /// `add_disk` would place a disk on one it is not allowed to cover
    #[error("Can't place disk {incoming} on top of disk {top}")]
    IllegalPlacement { incoming: u8, top: u8 },

    /// `add_disk` found no empty level left
    #[error("Tower is full (all {capacity} levels hold a disk)")]
    TowerFull { capacity: usize },

    /// Bulk start-peg initialization on a tower that already holds disks
    #[error("Tower already holds disks; start peg initialization must come first")]
    AlreadyPopulated,

    /// Requested difficulty needs disks the glyph table cannot draw
    #[error("Difficulty {requested} exceeds the maximum of {max}")]
    DifficultyTooHigh { requested: u8, max: u8 },

    /// Disk size outside `1..=max`
    #[error("Disk size {size} is out of range (expected 1-{max})")]
    InvalidDiskSize { size: u8, max: u8 },
}

/// Main error type for hanoi-peg
#[derive(Error, Debug)]
pub enum HanoiError {
    /// IO errors (config files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Tower rule violations
    #[error("Tower error: {0}")]
    Tower(#[from] TowerError),

    /// Configuration errors (loading, parsing, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for hanoi-peg operations
pub type Result<T> = std::result::Result<T, HanoiError>;

impl HanoiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
