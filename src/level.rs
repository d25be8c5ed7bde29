//! Level markers, disks and the static glyph table
//!
//! Every level of a tower holds exactly one [`Level`]. Its picture comes from
//! a compile-time glyph table rather than per-instance state, so markers stay
//! `Copy` and can be handed freely between towers.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::TowerError;

/// Width, in characters, of every glyph in the table
pub const GLYPH_WIDTH: usize = 23;

/// Largest disk the glyph table can draw
pub const MAX_DISK_SIZE: u8 = 5;

const EMPTY_GLYPH: &str = "           |           ";
const BASE_GLYPH: &str = "    [XXXXXX|XXXXXX]    ";

/// Disk glyphs, index `size - 1`
static DISK_GLYPHS: [&str; MAX_DISK_SIZE as usize] = [
    "         (-1-)         ",
    "        (--2--)        ",
    "       (---3---)       ",
    "      (----4----)      ",
    "     (-----5-----)     ",
];

/// A sized puzzle piece. Size 1 is the smallest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Disk(u8);

impl Disk {
    /// Create a disk, rejecting sizes the glyph table cannot draw
    pub fn new(size: u8) -> Result<Self, TowerError> {
        if (1..=MAX_DISK_SIZE).contains(&size) {
            Ok(Self(size))
        } else {
            Err(TowerError::InvalidDiskSize {
                size,
                max: MAX_DISK_SIZE,
            })
        }
    }

    #[inline]
    pub const fn size(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn glyph(self) -> &'static str {
        DISK_GLYPHS[usize::from(self.0 - 1)]
    }
}

impl TryFrom<u8> for Disk {
    type Error = TowerError;

    fn try_from(size: u8) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

/// Contents of a single tower level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// No disk
    Empty,
    /// The peg's fixed foundation (level 0 only)
    Base,
    /// A disk of the given size
    Disk(Disk),
}

impl Level {
    /// The fixed-width picture of this level
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Empty => EMPTY_GLYPH,
            Self::Base => BASE_GLYPH,
            Self::Disk(disk) => disk.glyph(),
        }
    }

    /// Returns the disk on this level, if any
    #[inline]
    pub const fn disk(self) -> Option<Disk> {
        match self {
            Self::Disk(disk) => Some(disk),
            Self::Empty | Self::Base => None,
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<Disk> for Level {
    fn from(disk: Disk) -> Self {
        Self::Disk(disk)
    }
}

/// Policy deciding whether a disk may be set on top of another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StackingRule {
    /// Only a strictly smaller disk may cover another (classic rules)
    #[default]
    Strict,
    /// Equal sizes may stack; only a strictly larger disk is rejected
    Lenient,
}

impl StackingRule {
    /// Check whether `incoming` may be placed directly on `top`
    pub fn allows(self, incoming: Disk, top: Disk) -> bool {
        match self {
            Self::Strict => incoming < top,
            Self::Lenient => incoming <= top,
        }
    }
}
