use crate::{
    board::{Board, Error},
    moves::Move,
};

/// A winning sequence of moves, along with the board it was found from.
///
/// This is a snapshot: it owns its own copy of the starting board and has no
/// connection to the board the search ran on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    initial: Board,
    moves: Vec<Move>,
    attempts: u64,
}

impl Solution {
    pub(crate) fn new(initial: Board, moves: Vec<Move>, attempts: u64) -> Self {
        debug_assert_eq!(
            moves.len() + 1,
            initial.peg_count(),
            "each move removes exactly one peg"
        );
        Self {
            initial,
            moves,
            attempts,
        }
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn into_moves(self) -> Vec<Move> {
        self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// `true` when the starting board was already won.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The board the solution starts from.
    pub fn initial(&self) -> &Board {
        &self.initial
    }

    /// How many board configurations the search visited before finding this.
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    /// The board after the first `step` moves have been played.
    ///
    /// `step` ranges over `0..=len()`; `0` is the initial board.
    pub fn board_after(&self, step: usize) -> Result<Board, Error> {
        let moves = self.moves.get(..step).ok_or(Error::StepOutOfRange {
            step,
            len: self.len(),
        })?;
        let mut board = self.initial.clone();
        for &mv in moves {
            board.try_apply_move(mv)?;
        }
        Ok(board)
    }

    /// The board once every move has been played.
    pub fn final_board(&self) -> Board {
        self.replay()
            .last()
            .map(|(_, board)| board)
            .unwrap_or_else(|| self.initial.clone())
    }

    /// Step through the solution one move at a time.
    pub fn replay(&self) -> Replay<'_> {
        Replay {
            board: self.initial.clone(),
            moves: self.moves.iter(),
        }
    }
}

/// Iterator over the frames of a [`Solution`]: each move, paired with the
/// board after it is played.
#[derive(Debug, Clone)]
pub struct Replay<'a> {
    board: Board,
    moves: std::slice::Iter<'a, Move>,
}

impl Replay<'_> {
    /// The board as of the most recent frame.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

impl Iterator for Replay<'_> {
    type Item = (Move, Board);

    fn next(&mut self) -> Option<Self::Item> {
        let &mv = self.moves.next()?;
        self.board.apply_move(mv);
        Some((mv, self.board.clone()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.moves.size_hint()
    }
}

impl ExactSizeIterator for Replay<'_> {}

impl<'a> IntoIterator for &'a Solution {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, CENTER};

    /// The six-peg "cross" puzzle, solved by hand.
    fn cross() -> Solution {
        let initial = Board::from_pegs([(1, 3), (2, 2), (2, 3), (2, 4), (3, 3), (4, 3)]).unwrap();
        let moves = [
            ((2, 3), (2, 5)),
            ((4, 3), (2, 3)),
            ((2, 2), (2, 4)),
            ((2, 5), (2, 3)),
            ((1, 3), (3, 3)),
        ]
        .into_iter()
        .map(|(from, to)| Move::new(from, to).unwrap())
        .collect();
        Solution::new(initial, moves, 0)
    }

    #[test]
    fn prefix_boards() {
        let solution = cross();
        assert_eq!(solution.board_after(0).as_ref(), Ok(solution.initial()));
        for step in 0..=solution.len() {
            let board = solution.board_after(step).unwrap();
            assert_eq!(board.peg_count(), solution.initial().peg_count() - step);
        }
        let last = solution.board_after(solution.len()).unwrap();
        assert_eq!(last.peg_count(), 1);
        assert_eq!(last.cell(CENTER), Some(Cell::Peg));
        assert_eq!(last, solution.final_board());
    }

    #[test]
    fn step_past_the_end() {
        let solution = cross();
        assert_eq!(
            solution.board_after(6),
            Err(Error::StepOutOfRange { step: 6, len: 5 })
        );
    }

    #[test]
    fn replay_matches_prefixes() {
        let solution = cross();
        let mut replay = solution.replay();
        assert_eq!(replay.len(), 5);
        assert_eq!(replay.board(), solution.initial());
        for step in 1..=solution.len() {
            let (mv, board) = replay.next().unwrap();
            assert_eq!(mv, solution.moves()[step - 1]);
            assert_eq!(Ok(board), solution.board_after(step));
        }
        assert_eq!(replay.next(), None);
    }

    #[test]
    fn already_won() {
        let initial = Board::from_pegs([CENTER]).unwrap();
        let solution = Solution::new(initial.clone(), Vec::new(), 1);
        assert!(solution.is_empty());
        assert_eq!(solution.final_board(), initial);
        assert_eq!((&solution).into_iter().count(), 0);
    }
}
