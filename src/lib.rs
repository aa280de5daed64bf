mod board;
mod config;
mod grid;
mod moves;
mod search;
mod solution;

pub use board::{on_cross, Board, Cell, Cells, Error, Malformed, CENTER, PLAYABLE, SIZE};
pub use config::{Config, ConfigError};
pub use grid::Grid;
pub use moves::{legal_moves, Direction, Move};
pub use search::{CancelToken, Interruption, Outcome, Solver};
pub use solution::{Replay, Solution};
