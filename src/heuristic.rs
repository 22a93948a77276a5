use itertools::Itertools;

use crate::board::Board;
use crate::location::Location;

/// Pick the exit from `from` with the fewest onward exits, everything counted against the board
/// as it stands: the candidate itself is still unclaimed while its onward exits are tallied.
///
/// Ties go to the candidate scanned earliest, i.e. a later candidate wins only with a strictly
/// smaller tally ([`position_min_by_key`](Itertools::position_min_by_key) keeps the first of
/// equal minima). Returns `None` when `from` has no exits at all.
pub(crate) fn most_constrained_exit(board: &Board, from: Location) -> Option<Location> {
    let candidates = board.exits(from);

    candidates.iter()
        .position_min_by_key(|candidate| {
            let onward = board.exits(**candidate).len();
            log::trace!("candidate {:?} leaves {} onward exits", candidate, onward);
            onward
        })
        .map(|at| candidates[at])
}
