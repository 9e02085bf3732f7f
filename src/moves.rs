// Move generation and path-to-move translation

use log::warn;

use crate::safety::is_safe;
use crate::snapshot::Snapshot;
use crate::types::{Coord, Direction};

/// Generates all safe moves for our snake
/// A move is safe if it:
/// - Doesn't reverse into the neck
/// - Lands on a cell that passes `is_safe`
///
/// Directions are returned in the fixed order up, down, left, right.
/// An empty result means we are boxed in.
pub fn safe_moves(snapshot: &Snapshot) -> Vec<Direction> {
    let head = snapshot.head();
    let neck = snapshot.neck();

    Direction::all()
        .iter()
        .filter(|&&dir| {
            let next = dir.apply(&head);
            next != neck && is_safe(&next, snapshot)
        })
        .copied()
        .collect()
}

/// Direction of the first step along `path`
///
/// # Returns
/// * `None` if there is no second cell, or if it is not adjacent to `head`
pub fn move_from_path(path: Option<&[Coord]>, head: &Coord) -> Option<Direction> {
    let next = path?.get(1)?;

    let direction = Direction::all()
        .iter()
        .copied()
        .find(|dir| dir.apply(head) == *next);

    if direction.is_none() {
        warn!(
            "Path step {:?} is not adjacent to head {:?}, ignoring path",
            next, head
        );
    }

    direction
}
