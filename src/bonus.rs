use crate::CellId;
use map_macro::hash_map;
use std::collections::HashMap;

/// Describes the permanent bonus printed on a [cell](crate::Cell).
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BonusKind {
    /// No bonus.
    #[default]
    None,
    /// Doubles the letter on the cell.
    DoubleLetter,
    /// Triples the letter on the cell.
    TripleLetter,
    /// Doubles every word through the cell.
    DoubleWord,
    /// Triples every word through the cell.
    TripleWord,
}

impl BonusKind {
    /// The factor applied to the letter on the cell.
    pub fn letter_multiplier(self) -> usize {
        match self {
            BonusKind::DoubleLetter => 2,
            BonusKind::TripleLetter => 3,
            _ => 1,
        }
    }

    /// The factor applied to a whole word through the cell.
    pub fn word_multiplier(self) -> usize {
        match self {
            BonusKind::DoubleWord => 2,
            BonusKind::TripleWord => 3,
            _ => 1,
        }
    }
}

/// A map of [cell ids](CellId) to the [bonus](BonusKind) printed on that cell. Cells missing
/// from the map have no bonus.
///
/// # See Also
///
/// * [standard_bonus_layout]
/// * [Grid::new](crate::Grid::new)
pub type BonusLayout = HashMap<CellId, BonusKind>;

/// The bonus layout of the standard `15` by `15` grid. Ids beyond a smaller grid are ignored
/// by [Grid::new](crate::Grid::new).
pub fn standard_bonus_layout() -> BonusLayout {
    use BonusKind::*;

    hash_map! {
        1 => TripleWord, 8 => TripleWord, 15 => TripleWord, 106 => TripleWord,
        120 => TripleWord, 211 => TripleWord, 218 => TripleWord, 225 => TripleWord,

        21 => TripleLetter, 25 => TripleLetter, 77 => TripleLetter, 81 => TripleLetter,
        85 => TripleLetter, 89 => TripleLetter, 137 => TripleLetter, 141 => TripleLetter,
        145 => TripleLetter, 149 => TripleLetter, 201 => TripleLetter, 205 => TripleLetter,

        17 => DoubleWord, 29 => DoubleWord, 33 => DoubleWord, 43 => DoubleWord,
        49 => DoubleWord, 57 => DoubleWord, 65 => DoubleWord, 71 => DoubleWord,
        155 => DoubleWord, 161 => DoubleWord, 169 => DoubleWord, 177 => DoubleWord,
        183 => DoubleWord, 193 => DoubleWord, 197 => DoubleWord, 209 => DoubleWord,

        4 => DoubleLetter, 12 => DoubleLetter, 37 => DoubleLetter, 39 => DoubleLetter,
        46 => DoubleLetter, 53 => DoubleLetter, 60 => DoubleLetter, 93 => DoubleLetter,
        97 => DoubleLetter, 99 => DoubleLetter, 103 => DoubleLetter, 109 => DoubleLetter,
        117 => DoubleLetter, 123 => DoubleLetter, 127 => DoubleLetter, 129 => DoubleLetter,
        133 => DoubleLetter, 166 => DoubleLetter, 173 => DoubleLetter, 180 => DoubleLetter,
        187 => DoubleLetter, 189 => DoubleLetter, 214 => DoubleLetter, 222 => DoubleLetter,
    }
}
