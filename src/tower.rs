//! Tower state machine
//!
//! A [`Tower`] is one peg of the puzzle. It owns a fixed number of levels and
//! only lets disks on and off through validated operations, so the stack can
//! never end up with gaps or with a disk resting on a smaller one.
//!
//! # Level Layout
//!
//! ```text
//! capacity   Empty       <- spare slot, always free on a start peg
//!    ...
//!    2       Disk(d-1)
//!    1       Disk(d)     <- largest disk sits at the bottom
//!    0       Base
//! ```
//!
//! `capacity` is `difficulty + 1`, one more slot than there are disks.

use std::fmt;

use tracing::{debug, trace};

use crate::error::TowerError;
use crate::level::{Disk, GLYPH_WIDTH, Level, MAX_DISK_SIZE, StackingRule};

/// Highest difficulty a tower can be built for
pub const MAX_DIFFICULTY: u8 = MAX_DISK_SIZE;

/// Result of looking for the slot directly above the disk stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopOfStack {
    /// The lowest empty level; a new disk would go here
    Vacant(usize),
    /// Every level above the base holds a disk
    Full,
}

/// A single peg holding a stack of disks on a fixed base.
///
/// # Example
///
/// ```
/// use hanoi_peg::{Disk, Tower, TowerError};
///
/// let mut tower = Tower::start_peg(3).unwrap();
/// let disk = tower.remove_disk().unwrap();
/// assert_eq!(disk.size(), 1);
///
/// // Disk 3 cannot go on top of disk 2
/// let big = Disk::new(3).unwrap();
/// assert!(matches!(
///     tower.add_disk(big),
///     Err(TowerError::IllegalPlacement { incoming: 3, top: 2 })
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tower {
    difficulty: u8,
    rule: StackingRule,
    /// Index 0 is the base; never resized after construction
    levels: Vec<Level>,
    /// Cached picture, rebuilt after every mutation
    image: String,
}

impl Tower {
    /// Create an empty tower using the strict stacking rule.
    ///
    /// # Errors
    ///
    /// - `DifficultyTooHigh` if `difficulty > MAX_DIFFICULTY`
    pub fn new(difficulty: u8) -> Result<Self, TowerError> {
        Self::with_rule(difficulty, StackingRule::default())
    }

    /// Create an empty tower with an explicit stacking rule.
    pub fn with_rule(difficulty: u8, rule: StackingRule) -> Result<Self, TowerError> {
        if difficulty > MAX_DIFFICULTY {
            return Err(TowerError::DifficultyTooHigh {
                requested: difficulty,
                max: MAX_DIFFICULTY,
            });
        }

        let capacity = usize::from(difficulty) + 1;
        let mut levels = Vec::with_capacity(capacity + 1);
        levels.push(Level::Base);
        levels.resize(capacity + 1, Level::Empty);

        let mut tower = Self {
            difficulty,
            rule,
            levels,
            image: String::new(),
        };
        tower.refresh_image();
        debug!(difficulty, %rule, "Created empty tower");
        Ok(tower)
    }

    /// Create a tower already holding every disk of the game.
    pub fn start_peg(difficulty: u8) -> Result<Self, TowerError> {
        let mut tower = Self::new(difficulty)?;
        tower.initialize_as_start_peg()?;
        Ok(tower)
    }

    /// Fill levels `1..=difficulty` with disks `difficulty..=1`, largest first.
    ///
    /// This is a one-shot bulk load and must precede any other mutation.
    ///
    /// # Errors
    ///
    /// - `AlreadyPopulated` if the tower holds any disk
    pub fn initialize_as_start_peg(&mut self) -> Result<(), TowerError> {
        if !self.is_empty() {
            debug!(disks = self.disk_count(), "Refusing start peg initialization");
            return Err(TowerError::AlreadyPopulated);
        }

        for level in 1..=self.difficulty {
            let disk = Disk::new(self.difficulty + 1 - level)?;
            self.levels[usize::from(level)] = Level::Disk(disk);
        }

        self.refresh_image();
        debug!(difficulty = self.difficulty, "Initialized start peg");
        Ok(())
    }

    /// Find the empty level sitting directly above the disk stack.
    pub fn highest_empty_level(&self) -> TopOfStack {
        let top = self
            .levels
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, level)| level.is_empty())
            .map_or(TopOfStack::Full, |(index, _)| TopOfStack::Vacant(index));
        trace!(?top, "Scanned for top of stack");
        top
    }

    /// Take the top disk off the tower.
    ///
    /// # Errors
    ///
    /// - `EmptyTower` if only the base is left
    pub fn remove_disk(&mut self) -> Result<Disk, TowerError> {
        let top_level = match self.highest_empty_level() {
            TopOfStack::Vacant(index) => index - 1,
            TopOfStack::Full => self.capacity(),
        };

        let Level::Disk(disk) = self.levels[top_level] else {
            debug!("Remove rejected: tower holds no disks");
            return Err(TowerError::EmptyTower);
        };

        self.levels[top_level] = Level::Empty;
        self.refresh_image();
        debug!(level = top_level, size = disk.size(), "Removed disk");
        Ok(disk)
    }

    /// Put a disk on top of the tower.
    ///
    /// Any drawable disk is accepted, including sizes above this tower's
    /// difficulty; only the stacking rule and free space are checked.
    ///
    /// # Errors
    ///
    /// - `TowerFull` if no empty level remains
    /// - `IllegalPlacement` if the stacking rule forbids covering the top disk
    pub fn add_disk(&mut self, disk: Disk) -> Result<(), TowerError> {
        let TopOfStack::Vacant(target) = self.highest_empty_level() else {
            debug!(size = disk.size(), "Add rejected: tower is full");
            return Err(TowerError::TowerFull {
                capacity: self.capacity(),
            });
        };

        // Level below an empty tower's first slot is the base; anything goes there
        if let Level::Disk(top) = self.levels[target - 1] {
            if !self.rule.allows(disk, top) {
                debug!(
                    incoming = disk.size(),
                    top = top.size(),
                    rule = %self.rule,
                    "Add rejected: illegal placement"
                );
                return Err(TowerError::IllegalPlacement {
                    incoming: disk.size(),
                    top: top.size(),
                });
            }
        }

        self.levels[target] = Level::Disk(disk);
        self.refresh_image();
        debug!(level = target, size = disk.size(), "Added disk");
        Ok(())
    }

    /// The tower's picture: a blank separator line, then one glyph line per
    /// level from the top slot down to the base.
    #[inline]
    pub fn render(&self) -> &str {
        &self.image
    }

    fn refresh_image(&mut self) {
        let mut image = String::with_capacity(1 + self.levels.len() * (GLYPH_WIDTH + 1));
        image.push('\n');
        for level in self.levels.iter().rev() {
            image.push_str(level.glyph());
            image.push('\n');
        }
        self.image = image;
    }

    #[inline]
    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }

    #[inline]
    pub fn stacking_rule(&self) -> StackingRule {
        self.rule
    }

    /// Number of disk slots above the base
    #[inline]
    pub fn capacity(&self) -> usize {
        self.levels.len() - 1
    }

    /// Number of levels including the base
    #[inline]
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Returns the marker at `index`, or None past the top slot
    pub fn level(&self, index: usize) -> Option<Level> {
        self.levels.get(index).copied()
    }

    /// All levels, base first
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Disks from bottom to top
    pub fn disks(&self) -> impl Iterator<Item = Disk> + '_ {
        self.levels.iter().filter_map(|level| level.disk())
    }

    pub fn disk_count(&self) -> usize {
        self.disks().count()
    }

    pub fn is_empty(&self) -> bool {
        self.disks().next().is_none()
    }

    /// The disk a caller would get from `remove_disk`
    pub fn top_disk(&self) -> Option<Disk> {
        self.disks().last()
    }
}

impl fmt::Display for Tower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.image)
    }
}
