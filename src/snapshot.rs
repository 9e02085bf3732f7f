// Validated per-turn view of the board
//
// The wire types are checked once here so the decision core can index the
// agent's head and neck without re-validating on every lookup.

use crate::types::{Battlesnake, Board, Coord};

/// Read-only view of one turn: the board plus the snake we are playing
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    board: &'a Board,
    you: &'a Battlesnake,
}

impl<'a> Snapshot<'a> {
    /// Validates board shape and the agent's body
    ///
    /// # Returns
    /// * `Err` if the board has no cells or the agent has fewer than two segments
    pub fn new(board: &'a Board, you: &'a Battlesnake) -> Result<Self, String> {
        if board.width <= 0 || board.height <= 0 {
            return Err(format!(
                "Invalid board dimensions {}x{}",
                board.width, board.height
            ));
        }

        if you.body.len() < 2 {
            return Err(format!(
                "Snake '{}' has {} body segment(s), need at least head and neck",
                you.id,
                you.body.len()
            ));
        }

        Ok(Snapshot { board, you })
    }

    pub fn board(&self) -> &'a Board {
        self.board
    }

    pub fn you(&self) -> &'a Battlesnake {
        self.you
    }

    pub fn head(&self) -> Coord {
        self.you.body[0]
    }

    pub fn neck(&self) -> Coord {
        self.you.body[1]
    }

    /// Length is the segment count, not the `length` field reported by the API
    pub fn length(&self) -> usize {
        self.you.body.len()
    }

    pub fn health(&self) -> i32 {
        self.you.health
    }

    /// True when the coordinate lies inside the board
    pub fn in_bounds(&self, coord: &Coord) -> bool {
        coord.x >= 0 && coord.y >= 0 && coord.x < self.board.width && coord.y < self.board.height
    }

    /// Every snake except ours, in board order
    pub fn opponents(&self) -> impl Iterator<Item = &'a Battlesnake> + 'a {
        let you_id = self.you.id.as_str();
        self.board.snakes.iter().filter(move |s| s.id != you_id)
    }

    /// Longest opponent body, 0 when we are alone
    pub fn max_opponent_length(&self) -> usize {
        self.opponents().map(|s| s.body.len()).max().unwrap_or(0)
    }
}
