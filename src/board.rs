use std::fmt::{Display, Formatter};
use std::num::NonZero;

use itertools::Itertools;
use ndarray::{Array2, ArrayView2};
use strum::VariantArray;
use thiserror::Error;

use crate::cell::{Cell, StepOrder};
use crate::heuristic;
use crate::location::{Location, BOARD_DIM};
use crate::step::KnightStep;

/// Reasons a knight cannot be placed where [`Board::reset`] was asked to place it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum PlacementError {
    /// The requested starting square lies outside the 8x8 board.
    #[error("square {0:?} is outside the 8x8 board")]
    OutOfBounds(Location),
}

/// An 8x8 board walked by a single knight under
/// [Warnsdorff's rule](https://en.wikipedia.org/wiki/Knight%27s_tour#Warnsdorff's_rule).
///
/// Every square the knight lands on is claimed with the step number of that landing, the starting
/// square included, so the square under the knight always carries a number. A walk never revisits
/// a claimed square and never backs out of a committed move; the only way back is a full
/// [`reset`](Self::reset).
pub struct Board {
    cells: Array2<Cell>,
    knight: Location,
}

impl Board {
    /// Where a fresh board places the knight.
    pub const DEFAULT_START: Location = Location(0, 1);

    /// Construct a board with every square empty except [`DEFAULT_START`](Self::DEFAULT_START),
    /// which the knight occupies as step 1.
    pub fn new() -> Self {
        let mut board = Self {
            cells: Array2::from_shape_simple_fn((BOARD_DIM, BOARD_DIM), Cell::default),
            knight: Self::DEFAULT_START,
        };
        board.mark(board.knight, NonZero::<StepOrder>::MIN);
        board
    }

    /// Clear every square and restart the walk from `start`, which the knight occupies as step 1.
    ///
    /// Fails without touching the board if `start` is not on the board.
    pub fn reset(&mut self, start: Location) -> Result<(), PlacementError> {
        if !start.on_board() {
            return Err(PlacementError::OutOfBounds(start));
        }

        self.cells.fill(Cell::Empty);
        self.knight = start;
        self.mark(start, NonZero::<StepOrder>::MIN);
        log::debug!("board cleared, walk restarts at {:?}", start);

        Ok(())
    }

    /// Every square reachable from `from` by one knight move that is on the board and not yet
    /// claimed, in `KnightStep::VARIANTS` order.
    pub fn exits(&self, from: Location) -> Vec<Location> {
        KnightStep::VARIANTS.iter()
            .map(|step| step.attempt_from(from))
            .filter(|dest| dest.on_board() && self.cells[dest.as_index()].is_empty())
            .collect_vec()
    }

    /// Advance the walk by one move.
    ///
    /// The knight commits to the exit with the fewest onward exits, ties going to the candidate
    /// scanned first in [`KnightStep`] order, and claims it with the next step number.
    /// Returns `false` and mutates nothing when the current square has no exits; the walk is then
    /// stuck until the next [`reset`](Self::reset).
    pub fn step(&mut self) -> bool {
        let order = match self.cells[self.knight.as_index()] {
            Cell::Visited(order) => order,
            // the square under the knight is claimed from the moment it lands
            Cell::Empty => unreachable!(),
        };

        let Some(exit) = heuristic::most_constrained_exit(self, self.knight) else {
            log::debug!("no exits from {:?}, walk is stuck at {} squares", self.knight, order);
            return false;
        };

        self.knight = exit;
        self.mark(exit, order.checked_add(1).unwrap());
        log::debug!("step {}: knight takes {:?}", order.get() + 1, exit);

        true
    }

    /// Call [`step`](Self::step) until the walk is stuck, then return the number of squares
    /// claimed in total, the starting square included.
    pub fn run_to_end(&mut self) -> usize {
        while self.step() {}
        self.visited_count()
    }

    /// How many squares have been claimed so far.
    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Whether every square on the board has been claimed, i.e. the walk found a full tour.
    pub fn is_complete(&self) -> bool {
        self.visited_count() == BOARD_DIM * BOARD_DIM
    }

    /// Whether the knight's square has no exits left. Predicts, without mutating anything, what
    /// the next [`step`](Self::step) will return.
    pub fn is_stuck(&self) -> bool {
        self.exits(self.knight).is_empty()
    }

    /// Read-only view of the grid, row-major.
    pub fn cells(&self) -> ArrayView2<'_, Cell> {
        self.cells.view()
    }

    /// The square the knight currently occupies.
    pub fn knight(&self) -> Location {
        self.knight
    }

    /// The step number recorded at `location`, or `None` if it is unclaimed or off the board.
    pub fn order_at(&self, location: Location) -> Option<NonZero<StepOrder>> {
        self.cells.get(location.as_index()).and_then(Cell::order)
    }

    fn mark(&mut self, location: Location, order: NonZero<StepOrder>) {
        self.cells[location.as_index()] = Cell::Visited(order);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.rows() {
            let line = row.iter()
                .map(|cell| match cell.order() {
                    Some(order) => format!("{:>2}", order),
                    None => " .".to_string(),
                })
                .join(" ");
            writeln!(f, "{}", line)?;
        }

        Ok(())
    }
}
