use std::fmt;

use crate::board::{Board, Cell};

/// One of the four axis-aligned jump directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
}

impl Direction {
    /// Every direction, in the order the move generator tries them.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];

    /// `(row, col)` step of a single cell in this direction.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
        }
    }
}

/// A jump from one cell to another two cells away along a single axis.
///
/// A `Move` only describes geometry; whether it is legal depends on the
/// board it is played against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    from: (usize, usize),
    to: (usize, usize),
}

impl Move {
    /// Build the move between two cells, or `None` if they are not exactly
    /// two cells apart along a single axis.
    pub fn new(from: (usize, usize), to: (usize, usize)) -> Option<Self> {
        let rows = from.0.abs_diff(to.0);
        let cols = from.1.abs_diff(to.1);
        matches!((rows, cols), (2, 0) | (0, 2)).then_some(Self { from, to })
    }

    /// The move starting at `from` and jumping in `direction`, or `None` if
    /// it would leave the non-negative quadrant.
    pub fn towards(from: (usize, usize), direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.step();
        let row = from.0.checked_add_signed(2 * dr)?;
        let col = from.1.checked_add_signed(2 * dc)?;
        Some(Self {
            from,
            to: (row, col),
        })
    }

    pub fn from(&self) -> (usize, usize) {
        self.from
    }

    pub fn to(&self) -> (usize, usize) {
        self.to
    }

    /// The cell jumped over, which loses its peg.
    pub fn jumped(&self) -> (usize, usize) {
        let midpoint = |a: usize, b: usize| a.min(b) + a.abs_diff(b) / 2;
        (
            midpoint(self.from.0, self.to.0),
            midpoint(self.from.1, self.to.1),
        )
    }

    pub fn direction(&self) -> Direction {
        match (self.from.0.cmp(&self.to.0), self.from.1.cmp(&self.to.1)) {
            (_, std::cmp::Ordering::Less) => Direction::Right,
            (_, std::cmp::Ordering::Greater) => Direction::Left,
            (std::cmp::Ordering::Less, _) => Direction::Down,
            _ => Direction::Up,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) -> ({}, {})",
            self.from.0, self.from.1, self.to.0, self.to.1
        )
    }
}

/// Enumerate every legal jump on `board`.
///
/// Pegs are visited in row-major order and each tries [`Direction::ALL`] in
/// turn. This order decides which solution a search finds first, so it must
/// not change.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    // at most one move per peg per direction
    let mut moves = Vec::with_capacity(board.peg_count() * Direction::ALL.len());
    for from in board.pegs() {
        for direction in Direction::ALL {
            let Some(mv) = Move::towards(from, direction) else {
                continue;
            };
            let (to, jumped) = (mv.to(), mv.jumped());
            if board.cell(to) == Some(Cell::Empty) && board.cell(jumped) == Some(Cell::Peg) {
                moves.push(mv);
            }
        }
    }
    moves
}
