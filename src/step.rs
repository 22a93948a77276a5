use strum::VariantArray;

use crate::location::Location;

/// The eight knight-move directions, named by compass point: [`Nnw`](Self::Nnw) is two rows up and one
/// column left, [`Ene`](Self::Ene) is one row up and two columns right, and so on around the clock.
///
/// `Self::VARIANTS` lists the directions in the order exits are scanned, which is what breaks ties
/// between equally constrained candidates. Reordering the variants changes which tours are produced.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum KnightStep {
    /// `(-2, -1)`
    Nnw,
    /// `(-2, 1)`
    Nne,
    /// `(-1, 2)`
    Ene,
    /// `(1, 2)`
    Ese,
    /// `(2, 1)`
    Sse,
    /// `(2, -1)`
    Ssw,
    /// `(1, -2)`
    Wsw,
    /// `(-1, -2)`
    Wnw,
}

impl KnightStep {
    /// Attempt the step from `location` in the direction specified by `self` and return the
    /// resultant [`Location`], which may lie off the board.
    pub fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Nnw => location.offset_by((-2, -1)),
            Self::Nne => location.offset_by((-2, 1)),
            Self::Ene => location.offset_by((-1, 2)),
            Self::Ese => location.offset_by((1, 2)),
            Self::Sse => location.offset_by((2, 1)),
            Self::Ssw => location.offset_by((2, -1)),
            Self::Wsw => location.offset_by((1, -2)),
            Self::Wnw => location.offset_by((-1, -2)),
        }
    }
}
