use ndarray::Ix;

type Coord = usize;

/// Side length of the board, in squares.
pub const BOARD_DIM: Coord = 8;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
/// A square `(row, column)` on the board. The top left corner is `Location(0, 0)` and rows grow downward.
pub struct Location(pub Coord, pub Coord);

impl Location {
    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.0, self.1)
    }
    pub(crate) fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }
    /// Whether this square lies on the board.
    /// Offsets past the top or left edge wrap around `usize` and land far beyond [`BOARD_DIM`], so one comparison per axis suffices.
    pub fn on_board(&self) -> bool {
        self.0 < BOARD_DIM && self.1 < BOARD_DIM
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.0, value.1)
    }
}
