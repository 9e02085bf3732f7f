// Welcome to
// __________         __    __  .__                               __
// \______   \_____ _/  |__/  |_|  |   ____   ______ ____ _____  |  | __ ____
//  |    |  _/\__  \\   __\   __\  | _/ __ \ /  ___//    \\__  \ |  |/ // __ \
//  |    |   \ / __ \|  |  |  | |  |_\  ___/ \___ \|   |  \/ __ \|    <\  ___/
//  |________/(______/__|  |__| |____/\_____>______>___|__(______/__|__\\_____>
//
// This is a nice home for our Battlesnake called Hunter.
// For more info see docs.battlesnake.com

use log::info;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};
use std::time::Instant;

use crate::config::Config;
use crate::debug_logger::DebugLogger;
use crate::pathfinding::PathFinder;
use crate::strategy::{Decision, Strategy};
use crate::types::{Battlesnake, Board, Game};

/// Battlesnake Bot with OOP-style API
/// Takes static configuration dependencies and exposes methods corresponding to API endpoints
pub struct Bot {
    config: Config,
    strategy: Strategy,
    rng: Mutex<StdRng>,
    debug_logger: DebugLogger,
}

impl Bot {
    /// Creates a new Bot instance with the given configuration
    /// The random fallback is seeded from the OS
    ///
    /// # Arguments
    /// * `config` - Static configuration that does not change during the bot's lifetime
    pub fn new(config: Config) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Creates a Bot whose random fallback is reproducible
    pub fn with_seed(config: Config, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: Config, rng: StdRng) -> Self {
        let strategy = Strategy::new(
            config.strategy,
            PathFinder::new(config.pathfinding.algorithm),
        );

        Bot {
            config,
            strategy,
            rng: Mutex::new(rng),
            debug_logger: DebugLogger::disabled(),
        }
    }

    /// Attaches a per-turn JSONL logger
    pub fn with_debug_logger(mut self, debug_logger: DebugLogger) -> Self {
        self.debug_logger = debug_logger;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns bot metadata and appearance
    /// Corresponds to GET / endpoint
    pub fn info(&self) -> Value {
        info!("INFO");

        let appearance = &self.config.appearance;
        json!({
            "apiversion": appearance.apiversion,
            "author": appearance.author,
            "color": appearance.color,
            "head": appearance.head,
            "tail": appearance.tail,
        })
    }

    /// Called when a game starts
    /// Corresponds to POST /start endpoint
    pub fn start(&self, game: &Game, _turn: &i32, _board: &Board, _you: &Battlesnake) {
        info!("GAME START {}", game.id);
    }

    /// Called when a game ends
    /// Corresponds to POST /end endpoint
    pub fn end(&self, game: &Game, turn: &i32, _board: &Board, you: &Battlesnake) {
        info!("GAME OVER {} after {} turns", game.id, turn);
        info!("Snake length: {}", you.body.len());
    }

    /// Computes the decision for one turn without logging it
    pub fn decide_move(&self, board: &Board, you: &Battlesnake) -> Decision {
        let mut rng = self.rng.lock();
        self.strategy.decide_move(board, you, &mut *rng)
    }

    /// Computes and returns the next move
    /// Corresponds to POST /move endpoint
    ///
    /// # Returns
    /// * `Value` - JSON response containing the chosen move direction
    pub fn get_move(&self, _game: &Game, turn: &i32, board: &Board, you: &Battlesnake) -> Value {
        let start_time = Instant::now();

        let decision = self.decide_move(board, you);

        info!(
            "Turn {}: Chose {} ({:?}, time: {}us)",
            turn,
            decision.direction.as_str(),
            decision.tier,
            start_time.elapsed().as_micros()
        );

        self.debug_logger
            .log_move(*turn, &you.id, board.clone(), decision.direction, decision.tier);

        json!({ "move": decision.direction.as_str() })
    }
}
