use crate::{BonusKind, BonusLayout, CellId, PlacedCell, GRID_SIZE_LIMIT};
use std::fmt;
use std::iter;
use thiserror::Error;

/// One square of the [grid](Grid). The id and bonus never change; the letter is set at most
/// once.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Cell {
    /// The stable, 1-based, row-major id of the cell.
    pub id: CellId,
    /// The letter occupying the cell, if any.
    pub letter: Option<char>,
    /// The bonus printed on the cell.
    pub bonus: BonusKind,
}

impl Cell {
    /// The occupied cell as a [PlacedCell], or [None] when the cell is empty.
    pub fn placed(&self) -> Option<PlacedCell> {
        self.letter.map(|letter| PlacedCell {
            cell_id: self.id,
            letter,
            bonus: self.bonus,
        })
    }
}

/// Filters the cells returned by [Grid::cell_at].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Occupancy {
    /// Any cell inside the grid.
    Any,
    /// Only cells without a letter.
    Empty,
    /// Only cells with a letter.
    Occupied,
}

impl Occupancy {
    fn matches(self, cell: &Cell) -> bool {
        match self {
            Occupancy::Any => true,
            Occupancy::Empty => cell.letter.is_none(),
            Occupancy::Occupied => cell.letter.is_some(),
        }
    }
}

/// One of the four directions to walk from a cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Towards the first column of the same row.
    Left,
    /// Towards the last column of the same row.
    Right,
    /// Towards the first row.
    Up,
    /// Towards the last row.
    Down,
}

impl fmt::Display for Direction {
    /// Writes where the adjacent cell lies relative to a letter, such as `above`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Left => "to the left of",
            Direction::Right => "to the right of",
            Direction::Up => "above",
            Direction::Down => "below",
        })
    }
}

/// Whether each adjacent cell exists inside the grid and is occupied.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Neighbors {
    /// The cell in the previous column of the same row.
    pub left: bool,
    /// The cell in the next column of the same row.
    pub right: bool,
    /// The cell in the previous row.
    pub above: bool,
    /// The cell in the next row.
    pub below: bool,
}

impl Neighbors {
    /// Whether the adjacent cell in `direction` is occupied.
    pub fn is_occupied(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Up => self.above,
            Direction::Down => self.below,
        }
    }
}

/// Describes the reason why a [grid](Grid) could not be created.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum NewGridError {
    /// Attempting to create a grid without cells.
    #[error("grid must have at least one cell")]
    EmptyGrid,
    /// Attempting to create a grid larger than the [limit](GRID_SIZE_LIMIT).
    #[error("grid size {size} is larger than the limit of {GRID_SIZE_LIMIT}")]
    GridTooLarge {
        /// The requested number of cells along one side.
        size: usize,
    },
}

/// Describes the reason why a letter could not be [set](Grid::set_letter).
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum SetLetterError {
    /// The cell id is not inside the grid.
    #[error("cell {cell_id} is not on the grid")]
    Absent {
        /// The id that was looked up.
        cell_id: CellId,
    },
    /// The cell already holds a different letter.
    #[error("{letter} cannot be placed on {existing}")]
    Occupied {
        /// The id of the occupied cell.
        cell_id: CellId,
        /// The letter that was requested.
        letter: char,
        /// The letter already on the cell.
        existing: char,
    },
}

/// A square matrix of [cells](Cell) addressed by [cell ids](CellId) from `1` to the squared size
/// in row-major order. Created once and never resized.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Grid {
    /// The number of cells along one side.
    size: usize,
    /// Every cell, where the cell with id `n` is at index `n - 1`.
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an empty grid of `size` by `size` cells with bonuses copied from `layout`.
    /// Ids in `layout` that are not on the grid are ignored.
    ///
    /// # Errors
    ///
    /// * [NewGridError::EmptyGrid] When `size` is `0`.
    /// * [NewGridError::GridTooLarge] When `size` is greater than [GRID_SIZE_LIMIT].
    pub fn new(size: usize, layout: &BonusLayout) -> Result<Grid, NewGridError> {
        if size == 0 {
            return Err(NewGridError::EmptyGrid);
        }
        if size > GRID_SIZE_LIMIT {
            return Err(NewGridError::GridTooLarge { size });
        }

        let cells = (1..=size * size)
            .map(|id| Cell {
                id,
                letter: None,
                bonus: layout.get(&id).copied().unwrap_or_default(),
            })
            .collect();
        Ok(Grid { size, cells })
    }

    /// The number of cells along one side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Every cell in id order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The id of the center cell, `ceil(size / 2) + size * floor(size / 2)`.
    pub fn center_cell_id(&self) -> CellId {
        (self.size + 1) / 2 + self.size * (self.size / 2)
    }

    /// The cell at `cell_id` when it is inside the grid and matches `occupancy`.
    pub fn cell_at(&self, cell_id: CellId, occupancy: Occupancy) -> Option<&Cell> {
        self.index(cell_id)
            .map(|index| &self.cells[index])
            .filter(|cell| occupancy.matches(cell))
    }

    /// Writes `letter` into the cell at `cell_id`.
    ///
    /// Setting a letter on a cell which already holds the same letter (ignoring ASCII case) is
    /// accepted and keeps the existing letter.
    ///
    /// # Errors
    ///
    /// * [SetLetterError::Absent] When `cell_id` is not inside the grid.
    /// * [SetLetterError::Occupied] When the cell holds a different letter.
    ///
    /// # Returns
    ///
    /// The resulting cell and whether it was empty before the call.
    pub fn set_letter(
        &mut self,
        cell_id: CellId,
        letter: char,
    ) -> Result<(Cell, bool), SetLetterError> {
        let index = self
            .index(cell_id)
            .ok_or(SetLetterError::Absent { cell_id })?;
        let cell = &mut self.cells[index];
        match cell.letter {
            None => {
                cell.letter = Some(letter);
                Ok((*cell, true))
            }
            Some(existing) if existing.eq_ignore_ascii_case(&letter) => Ok((*cell, false)),
            Some(existing) => Err(SetLetterError::Occupied {
                cell_id,
                letter,
                existing,
            }),
        }
    }

    /// Whether each cell adjacent to `cell_id` is inside the grid and occupied. Left and right
    /// neighbors never wrap onto another row.
    pub fn neighbor_occupancy(&self, cell_id: CellId) -> Neighbors {
        let is_occupied = |direction| {
            self.step(cell_id, direction)
                .and_then(|neighbor| self.cell_at(neighbor, Occupancy::Occupied))
                .is_some()
        };
        Neighbors {
            left: is_occupied(Direction::Left),
            right: is_occupied(Direction::Right),
            above: is_occupied(Direction::Up),
            below: is_occupied(Direction::Down),
        }
    }

    /// Walks outward from `cell_id` in `direction`, yielding occupied cells until the first
    /// empty cell or the edge of the grid. The starting cell is not yielded.
    pub fn neighboring_run(
        &self,
        cell_id: CellId,
        direction: Direction,
    ) -> impl Iterator<Item = &Cell> + '_ {
        iter::successors(self.step(cell_id, direction), move |&id| {
            self.step(id, direction)
        })
        .map_while(|id| self.cell_at(id, Occupancy::Occupied))
    }

    /// The index into `cells` for `cell_id`.
    fn index(&self, cell_id: CellId) -> Option<usize> {
        (1..=self.cells.len())
            .contains(&cell_id)
            .then(|| cell_id - 1)
    }

    /// The zero-based row and column of `cell_id`.
    fn row_and_column(&self, cell_id: CellId) -> Option<(usize, usize)> {
        self.index(cell_id)
            .map(|index| (index / self.size, index % self.size))
    }

    /// The id of the adjacent cell in `direction`, or [None] past the edge of the grid.
    fn step(&self, cell_id: CellId, direction: Direction) -> Option<CellId> {
        let (row, column) = self.row_and_column(cell_id)?;
        match direction {
            Direction::Left => (column > 0).then(|| cell_id - 1),
            Direction::Right => (column + 1 < self.size).then(|| cell_id + 1),
            Direction::Up => (row > 0).then(|| cell_id - self.size),
            Direction::Down => (row + 1 < self.size).then(|| cell_id + self.size),
        }
    }
}

impl fmt::Display for Grid {
    /// Writes one line per row where each cell is written as `"<id> <letter> |"` and an empty
    /// cell shows a space for its letter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            for cell in row {
                write!(f, "{} {} |", cell.id, cell.letter.unwrap_or(' '))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
impl Grid {
    /// A grid without bonuses.
    pub fn plain(size: usize) -> Grid {
        Grid::new(size, &BonusLayout::new()).expect("size should be a legal grid size")
    }

    /// Commits each `(placement, word)` pair in order without validation.
    pub fn with_words<'a>(mut self, words: impl IntoIterator<Item = (&'a str, &'a str)>) -> Grid {
        for (placement, word) in words {
            let placement: crate::Placement = placement
                .parse()
                .expect("placement should be written as A<id> or D<id>");
            crate::commit_placement(&mut self, placement, word)
                .expect("commit_placement should return Ok");
        }
        self
    }
}
