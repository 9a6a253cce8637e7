//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::cell::Cell;
use crate::session::GameSession;
use crate::types::Board;

/// Invariant: the board grows by exactly one mark per move and never
/// clears or overwrites a cell.
///
/// Verified by walking the snapshot chain into the live board and
/// comparing each consecutive pair of boards.
pub struct MonotonicBoardInvariant;

fn grows_by_one(earlier: &Board, later: &Board) -> bool {
    let mut added = 0;
    for cell in Cell::ALL {
        match (earlier.get(cell), later.get(cell)) {
            (Some(a), Some(b)) if a == b => {}
            // A cleared or rewritten cell breaks monotonicity.
            (Some(_), _) => return false,
            (None, Some(_)) => added += 1,
            (None, None) => {}
        }
    }
    added == 1
}

impl Invariant<GameSession> for MonotonicBoardInvariant {
    fn holds(session: &GameSession) -> bool {
        let mut boards: Vec<&Board> = session
            .history()
            .entries()
            .iter()
            .map(|snapshot| snapshot.board())
            .collect();
        boards.push(session.board());

        boards.windows(2).all(|pair| grows_by_one(pair[0], pair[1]))
    }

    fn description() -> &'static str {
        "Board cells are monotonic (one new mark per move, never overwritten)"
    }
}
