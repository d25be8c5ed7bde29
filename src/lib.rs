//! hanoi-peg Library
//!
//! A single peg of the Towers of Hanoi puzzle: which disks it holds, the rule
//! that keeps larger disks off smaller ones, and a text picture of the peg.
//! Coordinating several pegs is left to the caller.

pub mod cli;
pub mod config;
pub mod error;
pub mod level;
pub mod tower;

// Re-export main types for convenience
pub use config::TowerConfig;
pub use error::{HanoiError, TowerError};
pub use level::{Disk, GLYPH_WIDTH, Level, MAX_DISK_SIZE, StackingRule};
pub use tower::{MAX_DIFFICULTY, TopOfStack, Tower};
