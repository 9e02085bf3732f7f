// Replay module for analyzing historical game states and debugging decision-making
//
// This module provides functionality to:
// 1. Parse JSONL debug logs
// 2. Replay the decision on historical states
// 3. Compare logged vs replayed moves
// 4. Generate analysis reports
//
// Food seeking and chasing are deterministic, so a mismatch on those tiers
// points at a behaviour change. Random tiers are reported but not counted
// against the match rate.

use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use crate::config::Config;
use crate::pathfinding::PathFinder;
use crate::strategy::{Strategy, Tier};
use crate::types::{Board, Direction};

const REPLAY_SEED: u64 = 0x5eed;

/// Represents a single log entry from the debug JSONL file
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LogEntry {
    pub turn: i32,
    pub you_id: String,
    pub chosen_move: Direction,
    #[serde(default)]
    pub tier: Option<String>,
    pub board: Board,
    pub timestamp: String,
}

/// Result of replaying a single turn
#[derive(Debug, Clone)]
pub struct ReplayResult {
    pub turn: i32,
    pub original_move: Direction,
    pub replayed_move: Direction,
    pub replayed_tier: Tier,
    pub matches: bool,
    pub computation_time_us: u128,
}

impl ReplayResult {
    /// A mismatch on a deterministic tier
    pub fn is_divergence(&self) -> bool {
        !self.matches && !self.replayed_tier.is_random()
    }
}

/// Statistics for a complete replay session
#[derive(Debug, Default)]
pub struct ReplayStats {
    pub total_turns: usize,
    pub matches: usize,
    pub mismatches: usize,
    pub deterministic_turns: usize,
    pub divergences: usize,
    pub match_rate: f64,
}

/// Replay engine for analyzing debug logs
pub struct ReplayEngine {
    strategy: Strategy,
    verbose: bool,
}

impl ReplayEngine {
    /// Creates a new replay engine with the given configuration
    pub fn new(config: Config, verbose: bool) -> Self {
        let strategy = Strategy::new(
            config.strategy,
            PathFinder::new(config.pathfinding.algorithm),
        );
        ReplayEngine { strategy, verbose }
    }

    /// Loads all log entries from a JSONL file
    pub fn load_log_file<P: AsRef<Path>>(&self, log_path: P) -> Result<Vec<LogEntry>, String> {
        let file = File::open(log_path.as_ref())
            .map_err(|e| format!("Failed to open log file: {}", e))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| format!("Failed to read line {}: {}", line_num + 1, e))?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: LogEntry = serde_json::from_str(&line)
                .map_err(|e| format!("Failed to parse JSON on line {}: {}", line_num + 1, e))?;

            entries.push(entry);
        }

        info!("Loaded {} log entries", entries.len());
        Ok(entries)
    }

    /// Re-runs the decision on a single board state
    pub fn replay_turn(
        &self,
        board: &Board,
        our_snake_id: &str,
    ) -> Result<(Direction, Tier, u128), String> {
        let our_snake = board
            .snakes
            .iter()
            .find(|s| s.id == our_snake_id)
            .ok_or_else(|| format!("Snake with id '{}' not found in board state", our_snake_id))?;

        let start_time = Instant::now();
        let mut rng = StdRng::seed_from_u64(REPLAY_SEED);
        let decision = self.strategy.decide_move(board, our_snake, &mut rng);

        Ok((decision.direction, decision.tier, start_time.elapsed().as_micros()))
    }

    /// Replays a single log entry and compares the result
    pub fn replay_entry(&self, entry: &LogEntry) -> Result<ReplayResult, String> {
        if self.verbose {
            info!("Replaying turn {}...", entry.turn);
        }

        let (replayed_move, replayed_tier, computation_time) =
            self.replay_turn(&entry.board, &entry.you_id)?;

        let result = ReplayResult {
            turn: entry.turn,
            original_move: entry.chosen_move,
            replayed_move,
            replayed_tier,
            matches: entry.chosen_move == replayed_move,
            computation_time_us: computation_time,
        };

        if self.verbose {
            if result.matches {
                info!(
                    "Turn {}: ✓ MATCH - {} ({:?}, time: {}us)",
                    entry.turn,
                    replayed_move.as_str(),
                    replayed_tier,
                    computation_time
                );
            } else {
                warn!(
                    "Turn {}: ✗ MISMATCH - Original: {}, Replayed: {} ({:?}, time: {}us)",
                    entry.turn,
                    entry.chosen_move.as_str(),
                    replayed_move.as_str(),
                    replayed_tier,
                    computation_time
                );
            }
        }

        Ok(result)
    }

    /// Replays all entries in a log file
    pub fn replay_all(&self, entries: &[LogEntry]) -> Vec<ReplayResult> {
        let mut results = Vec::new();

        for entry in entries {
            match self.replay_entry(entry) {
                Ok(result) => results.push(result),
                Err(e) => {
                    warn!("Failed to replay turn {}: {}", entry.turn, e);
                }
            }
        }

        results
    }

    /// Replays specific turns from a log file
    pub fn replay_turns(
        &self,
        entries: &[LogEntry],
        turn_numbers: &[i32],
    ) -> Result<Vec<ReplayResult>, String> {
        let mut results = Vec::new();

        for turn_num in turn_numbers {
            let entry = entries
                .iter()
                .find(|e| e.turn == *turn_num)
                .ok_or_else(|| format!("Turn {} not found in log file", turn_num))?;

            match self.replay_entry(entry) {
                Ok(result) => results.push(result),
                Err(e) => {
                    warn!("Failed to replay turn {}: {}", turn_num, e);
                }
            }
        }

        Ok(results)
    }

    /// Generates statistics from replay results
    pub fn generate_stats(&self, results: &[ReplayResult]) -> ReplayStats {
        let total_turns = results.len();
        let matches = results.iter().filter(|r| r.matches).count();
        let deterministic: Vec<_> = results.iter().filter(|r| !r.replayed_tier.is_random()).collect();
        let deterministic_matches = deterministic.iter().filter(|r| r.matches).count();

        let match_rate = if deterministic.is_empty() {
            0.0
        } else {
            (deterministic_matches as f64 / deterministic.len() as f64) * 100.0
        };

        ReplayStats {
            total_turns,
            matches,
            mismatches: total_turns - matches,
            deterministic_turns: deterministic.len(),
            divergences: deterministic.len() - deterministic_matches,
            match_rate,
        }
    }

    /// Prints a detailed report of replay results
    pub fn print_report(&self, results: &[ReplayResult]) {
        let stats = self.generate_stats(results);

        println!("\n═══════════════════════════════════════════════════════════");
        println!("                    REPLAY REPORT");
        println!("═══════════════════════════════════════════════════════════");
        println!("Total Turns:          {}", stats.total_turns);
        println!("Matches:              {}", stats.matches);
        println!("Mismatches:           {}", stats.mismatches);
        println!("Deterministic Turns:  {}", stats.deterministic_turns);
        println!(
            "Divergences:          {} ({:.1}% deterministic match rate)",
            stats.divergences, stats.match_rate
        );
        println!("═══════════════════════════════════════════════════════════\n");

        if !results.is_empty() {
            let avg_time: f64 = results
                .iter()
                .map(|r| r.computation_time_us as f64)
                .sum::<f64>()
                / results.len() as f64;

            println!("Average Computation Time:   {:.1}us\n", avg_time);
        }

        let divergences: Vec<_> = results.iter().filter(|r| r.is_divergence()).collect();
        if !divergences.is_empty() {
            println!("═══════════════════════════════════════════════════════════");
            println!("                  DETAILED DIVERGENCES");
            println!("═══════════════════════════════════════════════════════════");

            for result in divergences {
                println!(
                    "Turn {}: {} → {} ({:?})",
                    result.turn,
                    result.original_move.as_str(),
                    result.replayed_move.as_str(),
                    result.replayed_tier
                );
            }
            println!();
        }
    }

    /// Validates that specific expected moves were made
    pub fn validate_expected_moves(
        &self,
        entries: &[LogEntry],
        expected_moves: &[(i32, Vec<Direction>)], // (turn, acceptable_moves)
    ) -> Result<(), String> {
        for (turn, acceptable) in expected_moves {
            let entry = entries
                .iter()
                .find(|e| e.turn == *turn)
                .ok_or_else(|| format!("Turn {} not found in log", turn))?;

            if !acceptable.contains(&entry.chosen_move) {
                return Err(format!(
                    "Turn {}: Expected one of {:?}, but got {}",
                    turn,
                    acceptable.iter().map(|d| d.as_str()).collect::<Vec<_>>(),
                    entry.chosen_move.as_str()
                ));
            }
        }

        Ok(())
    }
}
