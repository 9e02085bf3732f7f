// Shortest-path search over the safe cells of the board
//
// Two interchangeable searches satisfy the same contract: the returned path is
// a shortest sequence of adjacent cells from start to goal where every cell
// after the start passes `is_safe`. Neighbours are always expanded in the order
// up, down, left, right so ties resolve the same way every turn.

use log::debug;
use serde::Deserialize;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use crate::safety::is_safe;
use crate::snapshot::Snapshot;
use crate::types::{Coord, Direction};

/// Search algorithm used by the path finder
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SearchAlgorithm {
    /// Uninformed breadth-first expansion
    BreadthFirst,
    /// Best-first search guided by Manhattan distance
    AStar,
}

/// Shortest-path finder with the search algorithm fixed at construction
#[derive(Debug, Clone, Copy)]
pub struct PathFinder {
    algorithm: SearchAlgorithm,
}

impl PathFinder {
    pub fn new(algorithm: SearchAlgorithm) -> Self {
        PathFinder { algorithm }
    }

    pub fn algorithm(&self) -> SearchAlgorithm {
        self.algorithm
    }

    /// Finds a shortest safe path from `start` to `goal`, both inclusive
    ///
    /// The start cell is never checked for safety, since our own head sits on it.
    ///
    /// # Returns
    /// * `Some(vec![start])` when start equals goal
    /// * `None` when the goal cannot be reached through safe cells
    pub fn find_path(&self, start: Coord, goal: Coord, snapshot: &Snapshot) -> Option<Vec<Coord>> {
        if start == goal {
            return Some(vec![start]);
        }

        let path = match self.algorithm {
            SearchAlgorithm::BreadthFirst => Self::breadth_first(start, goal, snapshot),
            SearchAlgorithm::AStar => Self::a_star(start, goal, snapshot),
        };

        debug!(
            "{:?} path {:?} -> {:?}: {}",
            self.algorithm,
            start,
            goal,
            path.as_ref()
                .map(|p| format!("{} steps", p.len() - 1))
                .unwrap_or_else(|| "unreachable".to_string())
        );

        path
    }

    fn breadth_first(start: Coord, goal: Coord, snapshot: &Snapshot) -> Option<Vec<Coord>> {
        let mut queue = VecDeque::new();
        let mut came_from: HashMap<Coord, Coord> = HashMap::new();
        let mut seen = HashSet::new();

        queue.push_back(start);
        seen.insert(start);

        while let Some(current) = queue.pop_front() {
            if current == goal {
                return Some(Self::reconstruct_path(&came_from, start, goal));
            }

            for dir in Direction::all().iter() {
                let next = dir.apply(&current);
                if seen.contains(&next) || !is_safe(&next, snapshot) {
                    continue;
                }

                seen.insert(next);
                came_from.insert(next, current);
                queue.push_back(next);
            }
        }

        None
    }

    fn a_star(start: Coord, goal: Coord, snapshot: &Snapshot) -> Option<Vec<Coord>> {
        // Heap key: (estimated total, cost so far, push order). Lower wins on every
        // component, so equal estimates prefer the shallower node and then the
        // earlier direction.
        let mut open_set = BinaryHeap::new();
        let mut closed_set = HashSet::new();
        let mut came_from: HashMap<Coord, Coord> = HashMap::new();
        let mut g_score: HashMap<Coord, i32> = HashMap::new();
        let mut push_order: u64 = 0;

        g_score.insert(start, 0);
        open_set.push(Reverse((start.manhattan_distance(&goal), 0, push_order, start)));

        while let Some(Reverse((_, g, _, current))) = open_set.pop() {
            if current == goal {
                return Some(Self::reconstruct_path(&came_from, start, goal));
            }

            if !closed_set.insert(current) {
                continue;
            }

            for dir in Direction::all().iter() {
                let next = dir.apply(&current);
                if closed_set.contains(&next) || !is_safe(&next, snapshot) {
                    continue;
                }

                let tentative = g + 1;
                if g_score.get(&next).map_or(false, |&known| known <= tentative) {
                    continue;
                }

                g_score.insert(next, tentative);
                came_from.insert(next, current);
                push_order += 1;
                open_set.push(Reverse((
                    tentative + next.manhattan_distance(&goal),
                    tentative,
                    push_order,
                    next,
                )));
            }
        }

        None
    }

    /// Walks parent links back from the goal
    fn reconstruct_path(came_from: &HashMap<Coord, Coord>, start: Coord, goal: Coord) -> Vec<Coord> {
        let mut path = vec![goal];
        let mut current = goal;

        while current != start {
            match came_from.get(&current) {
                Some(&parent) => {
                    path.push(parent);
                    current = parent;
                }
                None => break,
            }
        }

        path.reverse();
        path
    }
}

impl Default for PathFinder {
    fn default() -> Self {
        PathFinder::new(SearchAlgorithm::BreadthFirst)
    }
}
