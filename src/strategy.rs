// Per-turn move selection
//
// Tiers are tried in order and the first one that produces a move wins:
// 1. Nothing is safe: any direction at random
// 2. Hungry or not clearly the longest: head for the closest food
// 3. Chase the tail of the first shorter opponent
// 4. A random safe move
//
// Moves from tiers 2 and 3 are only accepted if they are also in the
// independently computed safe-move set.

use log::{debug, error, info};
use rand::Rng;

use crate::config::StrategyConfig;
use crate::moves::{move_from_path, safe_moves};
use crate::pathfinding::PathFinder;
use crate::snapshot::Snapshot;
use crate::types::{Battlesnake, Board, Coord, Direction};

/// Which tier produced the move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// The snapshot failed validation, a direction was drawn from all four
    MalformedSnapshot,
    /// No safe move existed, a direction was drawn from all four
    NoSafeMoves,
    SeekFood,
    ChaseSmallerSnake,
    RandomSafe,
}

impl Tier {
    /// Tiers that consult the random source
    pub fn is_random(&self) -> bool {
        matches!(
            self,
            Tier::MalformedSnapshot | Tier::NoSafeMoves | Tier::RandomSafe
        )
    }
}

/// Outcome of a single move decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub direction: Direction,
    pub tier: Tier,
}

/// Stateless move selection policy
#[derive(Debug, Clone, Copy)]
pub struct Strategy {
    thresholds: StrategyConfig,
    path_finder: PathFinder,
}

impl Strategy {
    pub fn new(thresholds: StrategyConfig, path_finder: PathFinder) -> Self {
        Strategy {
            thresholds,
            path_finder,
        }
    }

    pub fn thresholds(&self) -> &StrategyConfig {
        &self.thresholds
    }

    /// Computes the move for one turn; always returns a direction
    ///
    /// A snapshot that fails validation is logged and answered with a random
    /// direction so no error reaches the caller.
    pub fn decide_move<R: Rng>(&self, board: &Board, you: &Battlesnake, rng: &mut R) -> Decision {
        let snapshot = match Snapshot::new(board, you) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                error!("Malformed snapshot: {}. Making a random move", e);
                return Self::random_move(&Direction::all(), Tier::MalformedSnapshot, rng);
            }
        };

        let safe = safe_moves(&snapshot);
        debug!(
            "Safe moves: {:?}",
            safe.iter().map(|d| d.as_str()).collect::<Vec<_>>()
        );

        self.select(&snapshot, &safe, rng)
    }

    /// Runs the strategy tiers against a precomputed safe-move set
    pub fn select<R: Rng>(&self, snapshot: &Snapshot, safe: &[Direction], rng: &mut R) -> Decision {
        if safe.is_empty() {
            info!("No safe moves. Making a random move");
            return Self::random_move(&Direction::all(), Tier::NoSafeMoves, rng);
        }

        if self.should_seek_food(snapshot) {
            if let Some(direction) = self.seek_food(snapshot, safe) {
                info!("Seeking food");
                return Decision {
                    direction,
                    tier: Tier::SeekFood,
                };
            }
        }

        if let Some(direction) = self.chase_smaller_snake(snapshot, safe) {
            info!("Chasing a smaller snake");
            return Decision {
                direction,
                tier: Tier::ChaseSmallerSnake,
            };
        }

        info!("Making a random safe move");
        Self::random_move(safe, Tier::RandomSafe, rng)
    }

    /// Food is the priority when hungry or not ahead of every opponent by the margin
    pub fn should_seek_food(&self, snapshot: &Snapshot) -> bool {
        snapshot.health() < self.thresholds.low_health_threshold
            || snapshot.length()
                <= snapshot
                    .max_opponent_length()
                    .saturating_add(self.thresholds.length_advantage_threshold)
    }

    /// First step towards the food closest to our head
    pub fn seek_food(&self, snapshot: &Snapshot, safe: &[Direction]) -> Option<Direction> {
        let head = snapshot.head();
        let target = Self::closest_food(&head, &snapshot.board().food)?;

        self.step_towards(snapshot, target, safe)
    }

    /// First step towards the tail of the first opponent shorter than us
    ///
    /// Only the first shorter opponent in board order is tried.
    pub fn chase_smaller_snake(&self, snapshot: &Snapshot, safe: &[Direction]) -> Option<Direction> {
        let my_length = snapshot.length();
        let prey = snapshot.opponents().find(|s| s.body.len() < my_length)?;
        let tail = prey.tail()?;

        debug!("Chasing '{}' towards tail {:?}", prey.id, tail);
        self.step_towards(snapshot, tail, safe)
    }

    /// Closest food by Manhattan distance; ties keep the earliest in board order
    fn closest_food(head: &Coord, food: &[Coord]) -> Option<Coord> {
        food.iter().min_by_key(|f| head.manhattan_distance(f)).copied()
    }

    fn step_towards(&self, snapshot: &Snapshot, target: Coord, safe: &[Direction]) -> Option<Direction> {
        let head = snapshot.head();
        let path = self.path_finder.find_path(head, target, snapshot);

        move_from_path(path.as_deref(), &head).filter(|dir| safe.contains(dir))
    }

    fn random_move<R: Rng>(choices: &[Direction], tier: Tier, rng: &mut R) -> Decision {
        let direction = choices[rng.random_range(0..choices.len())];
        Decision { direction, tier }
    }
}
