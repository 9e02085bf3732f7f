// Library exports for the Hunter Battlesnake
// This allows the replay tool and integration tests to use the core bot logic

pub mod bot;
pub mod config;
pub mod debug_logger;
pub mod moves;
pub mod pathfinding;
pub mod replay;
pub mod safety;
pub mod snapshot;
pub mod strategy;
pub mod types;
