use crate::{CellId, Direction, PlacementError};
use num_derive::FromPrimitive;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Describes the direction a word is written in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, FromPrimitive)]
pub enum Axis {
    /// Across, from left to right within one row. `0`.
    Horizontal = 0,
    /// Down, from top to bottom within one column. `1`.
    Vertical = 1,
}

impl Axis {
    /// The number of [`Axis`] variants. 2 axes.
    pub const AXES_LEN: usize = 2;

    /// The marker used in the text form of a [placement](Placement).
    pub fn marker(self) -> char {
        match self {
            Axis::Horizontal => 'A',
            Axis::Vertical => 'D',
        }
    }

    /// The directions just before the first letter and just after the last letter.
    pub fn directions(self) -> (Direction, Direction) {
        match self {
            Axis::Horizontal => (Direction::Left, Direction::Right),
            Axis::Vertical => (Direction::Up, Direction::Down),
        }
    }

    /// The other axis.
    pub fn perpendicular(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

impl Distribution<Axis> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Axis {
        let index = rng.gen_range(0..Axis::AXES_LEN);
        num::FromPrimitive::from_usize(index).unwrap_or_else(|| {
            unreachable!(
                "index ({:?}) should be matched since axes cover all indexes \
                in range 0..Axis::AXES_LEN (0..{:?}).",
                index,
                Axis::AXES_LEN
            );
        })
    }
}

/// Where a word starts and which [axis](Axis) it is written along.
///
/// Written as `A<id>` for [horizontal](Axis::Horizontal) or `D<id>` for
/// [vertical](Axis::Vertical) placements, such as `A113`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Placement {
    /// The id of the cell holding the first letter.
    pub origin: CellId,
    /// The direction the word is written in.
    pub axis: Axis,
}

impl Placement {
    /// Creates a placement from `origin` along `axis`.
    pub fn new(origin: CellId, axis: Axis) -> Placement {
        Placement { origin, axis }
    }

    /// The id of the cell holding the letter at `step` on a grid with `size` cells along one
    /// side.
    ///
    /// # Errors
    ///
    /// * [PlacementError::InvalidRange] When a horizontal placement would continue onto
    /// another row.
    /// * [PlacementError::DoesNotFit] When the id cannot be computed or lies before the first
    /// cell or after the last cell.
    pub fn cell_id_at(&self, size: usize, step: usize) -> Result<CellId, PlacementError> {
        let cell_id = match self.axis {
            Axis::Horizontal => self.origin.checked_add(step),
            Axis::Vertical => step
                .checked_mul(size)
                .and_then(|offset| self.origin.checked_add(offset)),
        }
        .ok_or(PlacementError::DoesNotFit {
            cell_id: self.origin,
        })?;

        if self.axis == Axis::Horizontal && row(cell_id, size) != row(self.origin, size) {
            return Err(PlacementError::InvalidRange {
                origin: self.origin,
                cell_id,
            });
        }
        if cell_id == 0 || cell_id > size * size {
            return Err(PlacementError::DoesNotFit { cell_id });
        }

        Ok(cell_id)
    }
}

/// The 1-based row of `cell_id`, `ceil(cell_id / size)`.
fn row(cell_id: CellId, size: usize) -> usize {
    cell_id / size + usize::from(cell_id % size != 0)
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.axis.marker(), self.origin)
    }
}

/// Describes the reason why text could not be parsed into a [placement](Placement).
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum ParsePlacementError {
    /// The text is empty.
    #[error("placement is empty")]
    Empty,
    /// The text does not start with `A` or `D`.
    #[error("placement must start with A or D, not {marker}")]
    InvalidMarker {
        /// The first character of the text.
        marker: char,
    },
    /// The text has a marker but no cell id.
    #[error("placement is missing a cell id")]
    MissingCellId,
    /// The text after the marker is not a non-negative integer.
    #[error("{cell_id:?} is not a cell id")]
    InvalidCellId {
        /// The text after the marker.
        cell_id: String,
    },
}

impl FromStr for Placement {
    type Err = ParsePlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let axis = match chars.next() {
            None => return Err(ParsePlacementError::Empty),
            Some('A') => Axis::Horizontal,
            Some('D') => Axis::Vertical,
            Some(marker) => return Err(ParsePlacementError::InvalidMarker { marker }),
        };

        let cell_id = chars.as_str();
        if cell_id.is_empty() {
            return Err(ParsePlacementError::MissingCellId);
        }
        let origin = cell_id
            .parse()
            .map_err(|_| ParsePlacementError::InvalidCellId {
                cell_id: cell_id.to_owned(),
            })?;

        Ok(Placement { origin, axis })
    }
}
