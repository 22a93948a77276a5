#![warn(missing_docs)]

//! # `destrier`
//!
//! A walker for the [knight's tour](https://en.wikipedia.org/wiki/Knight%27s_tour) puzzle on the standard 8x8 chessboard,
//! driven by [Warnsdorff's rule](https://en.wikipedia.org/wiki/Knight%27s_tour#Warnsdorff's_rule).
//! Begin with a [`Board`], whose knight starts on [`Board::DEFAULT_START`], or [`reset`](Board::reset) it onto any square.
//! Then call [`step()`](Board::step) to advance one move at a time or [`run_to_end()`](Board::run_to_end) to walk until no move is left,
//! and read the numbered squares back through [`cells()`](Board::cells) or the [`Display`](std::fmt::Display) rendering.
//!
//! # Internals
//! At each step the engine ranks every unclaimed square one knight move away by how many onward exits taking it would leave,
//! and commits to the most constrained one; ties fall to the fixed scan order of the [`KnightStep`] table.
//! Squares at risk of becoming unreachable are spent as early as possible, which lets a single greedy pass
//! cover the whole board far more often than chance would.
//! The rule looks ahead one ply and never backtracks, so a walk can still strand the knight early;
//! the engine reports that per step and leaves any retrying to the caller.

pub use board::{Board, PlacementError};
pub use cell::{Cell, StepOrder};
pub use location::{Location, BOARD_DIM};
pub use step::KnightStep;

pub(crate) mod board;
pub(crate) mod cell;
pub(crate) mod heuristic;
pub(crate) mod location;
pub(crate) mod step;
