//! Difficulty tiers and the grid settings they map to.

use std::{
    fmt::{self, Display},
    ops::Index,
};

use wordsearch_core::DirectionSet;

use crate::GridPlacer;

/// A difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Difficulty {
    /// Small grids, words read left to right or top to bottom.
    Easy,
    /// Medium grids, descending diagonals added.
    Medium,
    /// Large grids, all eight directions including reversed ones.
    Hard,
}

impl Difficulty {
    /// All tiers from easiest to hardest.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the lowercase tier name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Easy => 0,
            Self::Medium => 1,
            Self::Hard => 2,
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors returned by [`DifficultyProfile::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ProfileError {
    /// `min_size` is zero or larger than `max_size`.
    #[display("invalid size range {min}..={max}")]
    InvalidSizeRange {
        /// Requested minimum size.
        min: usize,
        /// Requested maximum size.
        max: usize,
    },
    /// `default_size` lies outside `[min_size, max_size]`.
    #[display("default size {default} is outside {min}..={max}")]
    DefaultOutOfRange {
        /// Requested default size.
        default: usize,
        /// Minimum size.
        min: usize,
        /// Maximum size.
        max: usize,
    },
    /// No direction remains once reversed directions are removed.
    #[display("profile allows no directions")]
    NoDirections,
}

/// Errors returned when a grid size does not suit a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridSizeError {
    /// The size is outside the profile's bounds.
    #[display("grid size {size} is outside {min}..={max} for {name} puzzles")]
    OutOfRange {
        /// Requested size.
        size: usize,
        /// Smallest size the profile accepts.
        min: usize,
        /// Largest size the profile accepts.
        max: usize,
        /// Profile name.
        name: &'static str,
    },
}

/// Grid-size bounds and legal directions for one difficulty tier.
///
/// # Examples
///
/// ```
/// use wordsearch_generator::{Difficulty, DifficultyTable};
///
/// let profile = DifficultyTable::STANDARD.profile(Difficulty::Medium);
/// assert_eq!(profile.resolve_size(None)?, 14);
/// assert_eq!(profile.resolve_size(Some(12))?, 12);
/// assert!(profile.resolve_size(Some(20)).is_err());
///
/// let placer = profile.placer(None)?;
/// assert_eq!(placer.size(), 14);
/// assert_eq!(placer.directions(), profile.effective_directions());
/// # Ok::<(), wordsearch_generator::GridSizeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyProfile {
    name: &'static str,
    min_size: usize,
    max_size: usize,
    default_size: usize,
    directions: DirectionSet,
    allow_reversed: bool,
}

impl DifficultyProfile {
    /// Creates a profile.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError`] if the size range is empty or starts at zero,
    /// if `default_size` lies outside it, or if no direction survives the
    /// `allow_reversed` filter.
    pub fn new(
        name: &'static str,
        min_size: usize,
        max_size: usize,
        default_size: usize,
        directions: DirectionSet,
        allow_reversed: bool,
    ) -> Result<Self, ProfileError> {
        if min_size == 0 || min_size > max_size {
            return Err(ProfileError::InvalidSizeRange {
                min: min_size,
                max: max_size,
            });
        }
        if !(min_size..=max_size).contains(&default_size) {
            return Err(ProfileError::DefaultOutOfRange {
                default: default_size,
                min: min_size,
                max: max_size,
            });
        }
        let profile = Self {
            name,
            min_size,
            max_size,
            default_size,
            directions,
            allow_reversed,
        };
        if profile.effective_directions().is_empty() {
            return Err(ProfileError::NoDirections);
        }
        Ok(profile)
    }

    /// Returns the profile name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the smallest accepted grid size.
    #[must_use]
    pub fn min_size(&self) -> usize {
        self.min_size
    }

    /// Returns the largest accepted grid size.
    #[must_use]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Returns the size used when none is requested.
    #[must_use]
    pub fn default_size(&self) -> usize {
        self.default_size
    }

    /// Returns the configured directions, before the reversal filter.
    #[must_use]
    pub fn directions(&self) -> DirectionSet {
        self.directions
    }

    /// Returns `true` if words may read right to left or bottom to top.
    #[must_use]
    pub fn allow_reversed(&self) -> bool {
        self.allow_reversed
    }

    /// Returns the directions words may actually take.
    #[must_use]
    pub fn effective_directions(&self) -> DirectionSet {
        if self.allow_reversed {
            self.directions
        } else {
            self.directions.without_reversed()
        }
    }

    /// Returns `size`, or the default size if `None`, checked against the bounds.
    ///
    /// # Errors
    ///
    /// Returns [`GridSizeError::OutOfRange`] if `size` is outside
    /// `[min_size, max_size]`.
    pub fn resolve_size(&self, size: Option<usize>) -> Result<usize, GridSizeError> {
        let size = size.unwrap_or(self.default_size);
        if (self.min_size..=self.max_size).contains(&size) {
            Ok(size)
        } else {
            Err(GridSizeError::OutOfRange {
                size,
                min: self.min_size,
                max: self.max_size,
                name: self.name,
            })
        }
    }

    /// Builds a placer for this profile.
    ///
    /// # Errors
    ///
    /// See [`DifficultyProfile::resolve_size`].
    pub fn placer(&self, size: Option<usize>) -> Result<GridPlacer, GridSizeError> {
        let size = self.resolve_size(size)?;
        Ok(GridPlacer::new_unchecked(size, self.effective_directions()))
    }
}

/// The profile for each [`Difficulty`].
///
/// Passed explicitly to whatever needs it; [`DifficultyTable::STANDARD`] is the
/// stock configuration and [`DifficultyTable::with_profile`] overrides a tier.
///
/// | tier   | sizes  | default | directions                        | reversed |
/// |--------|--------|---------|-----------------------------------|----------|
/// | easy   | 8-12   | 10      | right, down                       | no       |
/// | medium | 12-15  | 14      | right, down, down-right, down-left| no       |
/// | hard   | 15-20  | 18      | all eight                         | yes      |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyTable {
    profiles: [DifficultyProfile; 3],
}

impl DifficultyTable {
    /// The stock profiles.
    pub const STANDARD: Self = Self {
        profiles: [
            DifficultyProfile {
                name: "easy",
                min_size: 8,
                max_size: 12,
                default_size: 10,
                directions: DirectionSet::FORWARD,
                allow_reversed: false,
            },
            DifficultyProfile {
                name: "medium",
                min_size: 12,
                max_size: 15,
                default_size: 14,
                directions: DirectionSet::DESCENDING,
                allow_reversed: false,
            },
            DifficultyProfile {
                name: "hard",
                min_size: 15,
                max_size: 20,
                default_size: 18,
                directions: DirectionSet::all(),
                allow_reversed: true,
            },
        ],
    };

    /// Creates a table from one profile per tier.
    #[must_use]
    pub const fn new(
        easy: DifficultyProfile,
        medium: DifficultyProfile,
        hard: DifficultyProfile,
    ) -> Self {
        Self {
            profiles: [easy, medium, hard],
        }
    }

    /// Returns the profile for `difficulty`.
    #[must_use]
    pub const fn profile(&self, difficulty: Difficulty) -> &DifficultyProfile {
        &self.profiles[difficulty.index()]
    }

    /// Returns a copy with the profile for `difficulty` replaced.
    #[must_use]
    pub const fn with_profile(
        mut self,
        difficulty: Difficulty,
        profile: DifficultyProfile,
    ) -> Self {
        self.profiles[difficulty.index()] = profile;
        self
    }
}

impl Default for DifficultyTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl Index<Difficulty> for DifficultyTable {
    type Output = DifficultyProfile;

    fn index(&self, difficulty: Difficulty) -> &Self::Output {
        self.profile(difficulty)
    }
}
