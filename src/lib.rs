//! IDA* solver for rectangular sliding-tile puzzles: a single-threaded
//! engine and a depth-gated parallel variant, built around an incrementally
//! maintained Manhattan-distance heuristic and a silent parity fixer for
//! otherwise-unsolvable boards.

pub mod board;
pub mod cli;
pub mod goal;
pub mod heuristic;
pub mod parity;
pub mod solving;

pub use board::{Board, BoardError};
pub use goal::GoalIndex;
pub use heuristic::Heuristic;
pub use solving::SolutionRecord;
