// Cell safety checks
//
// A cell is safe to enter next turn if it is on the board, not covered by a
// snake body (tails excluded, they move away this turn), and not next to the
// head of an opponent at least as long as us.

use crate::snapshot::Snapshot;
use crate::types::Coord;

/// Decides whether moving a head onto `coord` survives the next turn
pub fn is_safe(coord: &Coord, snapshot: &Snapshot) -> bool {
    if !snapshot.in_bounds(coord) {
        return false;
    }

    if snapshot.you().blocking_segments().contains(coord) {
        return false;
    }

    let my_length = snapshot.length();

    for snake in snapshot.opponents() {
        if snake.blocking_segments().contains(coord) {
            return false;
        }

        // Head-to-head: a tie kills both snakes, so equal length counts as a loss
        if let Some(head) = snake.body.first() {
            if snake.body.len() >= my_length && head.manhattan_distance(coord) == 1 {
                return false;
            }
        }
    }

    true
}
