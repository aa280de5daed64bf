//! Depth-first backtracking search.
//!
//! The solver plays every legal move in generator order, recursing after each
//! one, and takes the move back when the recursion fails. Every branch is
//! explored in full before it is abandoned: there is no memoization of seen
//! positions and no pruning, so the first solution found is fully determined
//! by the move generator's ordering.

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};

use crate::{
    board::{check_playable, Board, Cell, Error, CENTER},
    moves::{legal_moves, Move},
    solution::Solution,
};

/// A flag shared between a running search and whoever may want to stop it.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask every search holding this token to stop at its next check.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Why a search stopped before running to completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interruption {
    /// The [`CancelToken`] was cancelled.
    Requested,
    /// The deadline passed.
    DeadlineExceeded,
}

/// The result of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved(Solution),
    /// Every branch was explored and none reaches the goal.
    Exhausted,
    Cancelled(Interruption),
}

impl Outcome {
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Outcome::Solved(solution) => Some(solution),
            _ => None,
        }
    }

    pub fn into_solution(self) -> Option<Solution> {
        match self {
            Outcome::Solved(solution) => Some(solution),
            _ => None,
        }
    }
}

/// The state a single level of the recursion finishes in.
enum Step {
    Success,
    Exhausted,
    Cancelled(Interruption),
}

/// Solves a board by exhaustive depth-first search.
///
/// The goal is a single peg remaining, on the target cell.
#[derive(Debug, Clone)]
pub struct Solver {
    target: (usize, usize),
    cancel: Option<CancelToken>,
    deadline: Option<Instant>,
    attempts: u64,
    stack: Vec<Move>,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// A solver aiming for the centre cell.
    pub fn new() -> Self {
        Self {
            target: CENTER,
            cancel: None,
            deadline: None,
            attempts: 0,
            stack: Vec::new(),
        }
    }

    /// A solver aiming for `(row, col)`, which must be a cell of the board.
    pub fn with_target(row: usize, col: usize) -> Result<Self, Error> {
        check_playable(row, col)?;
        Ok(Self {
            target: (row, col),
            ..Self::new()
        })
    }

    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Give up once `deadline` has passed.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Give up once `timeout` has elapsed, counted from now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    pub fn target(&self) -> (usize, usize) {
        self.target
    }

    /// The number of board configurations visited by the most recent search.
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    /// `true` when exactly one peg remains and it sits on the target.
    pub fn is_won(&self, board: &Board) -> bool {
        board.peg_count() == 1 && board.cell(self.target) == Some(Cell::Peg)
    }

    /// Search for a solution from `board`.
    ///
    /// When solved, `board` is left in the winning position. Otherwise every
    /// move has been taken back and `board` is as it was passed in.
    pub fn search(&mut self, board: &mut Board) -> Outcome {
        self.attempts = 0;
        self.stack.clear();
        let initial = board.clone();
        log::debug!(
            "searching from {} pegs towards {:?}",
            board.peg_count(),
            self.target
        );

        let outcome = match self.explore(board) {
            Step::Success => Outcome::Solved(Solution::new(
                initial,
                std::mem::take(&mut self.stack),
                self.attempts,
            )),
            Step::Exhausted => Outcome::Exhausted,
            Step::Cancelled(why) => Outcome::Cancelled(why),
        };

        match &outcome {
            Outcome::Solved(solution) => log::info!(
                "solved in {} moves after {} attempts",
                solution.len(),
                self.attempts
            ),
            Outcome::Exhausted => log::info!("no solution after {} attempts", self.attempts),
            Outcome::Cancelled(why) => {
                log::info!("search stopped ({why:?}) after {} attempts", self.attempts)
            }
        }
        outcome
    }

    /// Search for a solution from `board`, returning its moves.
    ///
    /// An interrupted search also returns `None`; use [`search`][Self::search]
    /// to tell the two apart.
    pub fn solve(&mut self, board: &mut Board) -> Option<Vec<Move>> {
        self.search(board).into_solution().map(Solution::into_moves)
    }

    fn interruption(&self) -> Option<Interruption> {
        if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
            return Some(Interruption::Requested);
        }
        if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            return Some(Interruption::DeadlineExceeded);
        }
        None
    }

    fn explore(&mut self, board: &mut Board) -> Step {
        if let Some(why) = self.interruption() {
            return Step::Cancelled(why);
        }
        self.attempts += 1;

        if self.is_won(board) {
            return Step::Success;
        }

        for mv in legal_moves(board) {
            board.apply_move(mv);
            self.stack.push(mv);

            match self.explore(board) {
                // leave the winning line on the board and the stack
                Step::Success => return Step::Success,
                Step::Exhausted => {}
                Step::Cancelled(why) => {
                    self.stack.pop();
                    board.undo_move(mv);
                    return Step::Cancelled(why);
                }
            }

            self.stack.pop();
            board.undo_move(mv);
        }

        Step::Exhausted
    }
}
