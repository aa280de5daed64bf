use std::{fmt, str::FromStr};

use crate::{
    grid::Grid,
    moves::{self, Move},
};

/// Width and height of the bounding grid.
pub const SIZE: usize = 7;

/// The centre cell: the canonical start hole and default target.
pub const CENTER: (usize, usize) = (3, 3);

/// Number of playable cells on the cross.
pub const PLAYABLE: usize = 33;

pub type Cells = Grid<Cell, SIZE, SIZE>;

/// The state of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Not part of the board.
    #[default]
    Invalid,
    Peg,
    Empty,
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Invalid => ' ',
            Cell::Peg => 'o',
            Cell::Empty => '.',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            ' ' => Some(Cell::Invalid),
            'o' => Some(Cell::Peg),
            '.' => Some(Cell::Empty),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Cell {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Cell::Invalid),
            1 => Ok(Cell::Peg),
            2 => Ok(Cell::Empty),
            _ => Err(Malformed::Code(code).into()),
        }
    }
}

/// `true` when `(row, col)` lies on the cross: the union of the middle three
/// rows and the middle three columns.
pub fn on_cross(row: usize, col: usize) -> bool {
    row < SIZE && col < SIZE && ((2..=4).contains(&row) || (2..=4).contains(&col))
}

/// A cross-shaped peg solitaire board.
///
/// Cells off the cross are always [`Cell::Invalid`]. The peg count is kept in
/// step with every move so that it never needs a scan.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: Cells,
    pegs: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self::canonical()
    }
}

impl Board {
    /// The standard opening: every playable cell holds a peg except the centre.
    pub fn canonical() -> Self {
        let mut cells = Cells::new();
        for row in 0..SIZE {
            for col in 0..SIZE {
                if on_cross(row, col) {
                    cells[(row, col)] = Cell::Peg;
                }
            }
        }
        cells[CENTER] = Cell::Empty;
        Self {
            cells,
            pegs: PLAYABLE - 1,
        }
    }

    /// The standard opening, with the single hole at `(row, col)` instead of
    /// the centre.
    pub fn with_hole(row: usize, col: usize) -> Result<Self, Error> {
        check_playable(row, col)?;
        let mut board = Self::canonical();
        board.cells[CENTER] = Cell::Peg;
        board.cells[(row, col)] = Cell::Empty;
        Ok(board)
    }

    /// Accept `cells` only if it is a valid opening: the cross shape, with
    /// exactly one empty cell.
    pub fn new(cells: Cells) -> Result<Self, Error> {
        let board = Self::from_position(cells)?;
        match PLAYABLE - board.pegs {
            1 => Ok(board),
            holes => Err(Malformed::Holes(holes).into()),
        }
    }

    /// Accept any position on the cross shape which has at least one peg.
    ///
    /// Unlike [`Board::new`], any number of cells may be empty. This is how
    /// endgame puzzles are set up.
    pub fn from_position(cells: Cells) -> Result<Self, Error> {
        for ((row, col), &cell) in cells.iter() {
            if on_cross(row, col) == (cell == Cell::Invalid) {
                return Err(Malformed::Shape { row, col, cell }.into());
            }
        }
        let pegs = cells.iter().filter(|&(_, &cell)| cell == Cell::Peg).count();
        if pegs == 0 {
            return Err(Malformed::NoPegs.into());
        }
        Ok(Self { cells, pegs })
    }

    /// A position holding pegs exactly at the given cells.
    pub fn from_pegs(pegs: impl IntoIterator<Item = (usize, usize)>) -> Result<Self, Error> {
        let mut cells = Cells::new();
        for ((row, col), cell) in cells.iter_mut() {
            if on_cross(row, col) {
                *cell = Cell::Empty;
            }
        }
        for (row, col) in pegs {
            check_playable(row, col)?;
            cells[(row, col)] = Cell::Peg;
        }
        Self::from_position(cells)
    }

    /// Build an opening from the numeric encoding: 0 invalid, 1 peg, 2 empty.
    pub fn from_codes(codes: [[u8; SIZE]; SIZE]) -> Result<Self, Error> {
        let mut cells = Cells::new();
        for (row, line) in codes.iter().enumerate() {
            for (col, &code) in line.iter().enumerate() {
                cells[(row, col)] = Cell::try_from(code)?;
            }
        }
        Self::new(cells)
    }

    /// The state of the cell at `(row, col)`.
    pub fn cell_state(&self, row: usize, col: usize) -> Result<Cell, Error> {
        self.cells
            .get(row, col)
            .copied()
            .ok_or(Error::OutOfBounds { row, col, size: SIZE })
    }

    /// The state of the cell at `pos`, or `None` off the grid.
    pub fn cell(&self, (row, col): (usize, usize)) -> Option<Cell> {
        self.cells.get(row, col).copied()
    }

    /// `true` when `(row, col)` is on the grid and part of the board.
    pub fn is_playable(&self, row: usize, col: usize) -> bool {
        matches!(self.cell((row, col)), Some(Cell::Peg | Cell::Empty))
    }

    pub fn peg_count(&self) -> usize {
        self.pegs
    }

    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    /// Iterate over the coordinates of every peg, in row-major order.
    pub fn pegs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .filter(|&(_, &cell)| cell == Cell::Peg)
            .map(|(pos, _)| pos)
    }

    /// Every legal move on this board. See [`moves::legal_moves`].
    pub fn legal_moves(&self) -> Vec<Move> {
        moves::legal_moves(self)
    }

    /// `true` when `mv` could be played on this board right now.
    pub fn is_legal(&self, mv: Move) -> bool {
        self.cell(mv.from()) == Some(Cell::Peg)
            && self.cell(mv.jumped()) == Some(Cell::Peg)
            && self.cell(mv.to()) == Some(Cell::Empty)
    }

    /// Play `mv`, or fail with [`Error::IllegalMove`] without touching the board.
    pub fn try_apply_move(&mut self, mv: Move) -> Result<(), Error> {
        if !self.is_legal(mv) {
            return Err(Error::IllegalMove(mv));
        }
        self.apply_move(mv);
        Ok(())
    }

    /// Play `mv`, which must be legal on this board.
    ///
    /// Legality is only checked in debug builds; use
    /// [`try_apply_move`][Self::try_apply_move] for moves from outside the
    /// move generator.
    pub fn apply_move(&mut self, mv: Move) {
        debug_assert!(self.is_legal(mv), "move {mv} must be legal");
        self.cells[mv.from()] = Cell::Empty;
        self.cells[mv.jumped()] = Cell::Empty;
        self.cells[mv.to()] = Cell::Peg;
        self.pegs -= 1;
    }

    /// Take back `mv`, which must be the most recent move still in effect.
    pub fn undo_move(&mut self, mv: Move) {
        debug_assert!(
            self.cell(mv.from()) == Some(Cell::Empty)
                && self.cell(mv.jumped()) == Some(Cell::Empty)
                && self.cell(mv.to()) == Some(Cell::Peg),
            "move {mv} must be in effect to be undone"
        );
        self.cells[mv.from()] = Cell::Peg;
        self.cells[mv.jumped()] = Cell::Peg;
        self.cells[mv.to()] = Cell::Empty;
        self.pegs += 1;
    }
}

/// Fail unless `(row, col)` is a cell of the cross.
pub(crate) fn check_playable(row: usize, col: usize) -> Result<(), Error> {
    if row >= SIZE || col >= SIZE {
        return Err(Error::OutOfBounds { row, col, size: SIZE });
    }
    if !on_cross(row, col) {
        return Err(Malformed::NotPlayable { row, col }.into());
    }
    Ok(())
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parse a position from rows of `o` (peg), `.` (empty) and space
    /// (invalid). Blank lines are skipped and short rows are padded with
    /// invalid cells.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().filter(|line| !line.trim().is_empty()).collect();
        if lines.len() != SIZE {
            return Err(Malformed::Rows(lines.len()).into());
        }

        let mut cells = Cells::new();
        for (row, line) in lines.into_iter().enumerate() {
            let line = line.trim_end();
            if line.chars().count() > SIZE {
                return Err(Malformed::RowLength { row }.into());
            }
            for (col, symbol) in line.chars().enumerate() {
                cells[(row, col)] = Cell::from_symbol(symbol).ok_or(Malformed::Symbol(symbol))?;
            }
        }
        Self::from_position(cells)
    }
}

/// The ways a supplied board can fail validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Malformed {
    #[error("cell `({row}, {col})` is {cell:?}, which does not fit the cross shape")]
    Shape { row: usize, col: usize, cell: Cell },
    #[error("an opening needs exactly one empty cell, found {0}")]
    Holes(usize),
    #[error("the position has no pegs")]
    NoPegs,
    #[error("cell `({row}, {col})` is not part of the board")]
    NotPlayable { row: usize, col: usize },
    #[error("`{0}` is not a cell encoding; expected 0, 1 or 2")]
    Code(u8),
    #[error("unknown cell symbol {0:?}; expected 'o', '.' or ' '")]
    Symbol(char),
    #[error("expected 7 rows, found {0}")]
    Rows(usize),
    #[error("row {row} is longer than 7 cells")]
    RowLength { row: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("the point `({row}, {col})` is out of bounds. max: `({size}, {size})`")]
    OutOfBounds { row: usize, col: usize, size: usize },
    #[error("invalid board: {0}")]
    InvalidInput(#[from] Malformed),
    #[error("the move `{0}` is not legal on this board")]
    IllegalMove(Move),
    #[error("step {step} is past the end of a {len}-move solution")]
    StepOutOfRange { step: usize, len: usize },
}
