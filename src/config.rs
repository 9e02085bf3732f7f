// Configuration module for reading Snake.toml
// This module provides OOP-style configuration management for the Battlesnake bot

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::pathfinding::SearchAlgorithm;

/// Main configuration structure containing all tunable parameters
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub strategy: StrategyConfig,
    pub pathfinding: PathfindingConfig,
    pub appearance: AppearanceConfig,
    pub debug: DebugConfig,
}

/// Thresholds driving the strategy tiers
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct StrategyConfig {
    /// Below this health the snake always looks for food first
    pub low_health_threshold: i32,
    /// Length margin over the longest opponent before food stops being a priority
    pub length_advantage_threshold: usize,
}

/// Shortest-path search policy
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct PathfindingConfig {
    pub algorithm: SearchAlgorithm,
}

/// Metadata returned from GET /
#[derive(Debug, Deserialize, Clone)]
pub struct AppearanceConfig {
    pub apiversion: String,
    pub author: String,
    pub color: String,
    pub head: String,
    pub tail: String,
}

/// Debug configuration
#[derive(Debug, Deserialize, Clone)]
pub struct DebugConfig {
    pub enabled: bool,
    pub log_file_path: String,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        StrategyConfig {
            low_health_threshold: 30,
            length_advantage_threshold: 2,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the Snake.toml configuration file
    ///
    /// # Returns
    /// * `Result<Config, String>` - Parsed configuration or error message
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        Self::from_toml_str(&contents)
    }

    /// Parses configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Loads default configuration from Snake.toml in the project root
    pub fn load_default() -> Result<Self, String> {
        Self::from_file("Snake.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the constants defined in Snake.toml
    pub fn default_hardcoded() -> Self {
        Config {
            strategy: StrategyConfig::default(),
            pathfinding: PathfindingConfig {
                algorithm: SearchAlgorithm::BreadthFirst,
            },
            appearance: AppearanceConfig {
                apiversion: "1".to_string(),
                author: "Gruppe 7".to_string(),
                color: "#888888".to_string(),
                head: "default".to_string(),
                tail: "default".to_string(),
            },
            debug: DebugConfig {
                enabled: false,
                log_file_path: "battlesnake_debug.jsonl".to_string(),
            },
        }
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            log::warn!(
                "Could not load Snake.toml ({}), using hardcoded defaults",
                e
            );
            Self::default_hardcoded()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_can_be_created() {
        let config = Config::default_hardcoded();
        assert_eq!(config.strategy.low_health_threshold, 30);
        assert_eq!(config.strategy.length_advantage_threshold, 2);
        assert_eq!(config.pathfinding.algorithm, SearchAlgorithm::BreadthFirst);
    }

    #[test]
    fn test_snake_toml_can_be_parsed() {
        // This test ensures Snake.toml is valid and can be parsed
        let result = Config::from_file("Snake.toml");
        assert!(
            result.is_ok(),
            "Failed to parse Snake.toml: {:?}",
            result.err()
        );
    }

    #[test]
    fn test_all_config_values_match_hardcoded_defaults() {
        let file_config = Config::from_file("Snake.toml").expect("Snake.toml should be parseable");
        let hardcoded_config = Config::default_hardcoded();

        assert_eq!(file_config.strategy, hardcoded_config.strategy);
        assert_eq!(file_config.pathfinding, hardcoded_config.pathfinding);
        assert_eq!(
            file_config.appearance.author,
            hardcoded_config.appearance.author
        );
        assert_eq!(
            file_config.appearance.color,
            hardcoded_config.appearance.color
        );
        assert_eq!(file_config.debug.enabled, hardcoded_config.debug.enabled);
        assert_eq!(
            file_config.debug.log_file_path,
            hardcoded_config.debug.log_file_path
        );
    }

    #[test]
    fn test_a_star_can_be_selected() {
        let toml = r##"
            [strategy]
            low_health_threshold = 50
            length_advantage_threshold = 0

            [pathfinding]
            algorithm = "a_star"

            [appearance]
            apiversion = "1"
            author = "tester"
            color = "#000000"
            head = "default"
            tail = "default"

            [debug]
            enabled = false
            log_file_path = "x.jsonl"
        "##;

        let config = Config::from_toml_str(toml).expect("inline config should parse");
        assert_eq!(config.pathfinding.algorithm, SearchAlgorithm::AStar);
        assert_eq!(config.strategy.low_health_threshold, 50);
        assert_eq!(config.strategy.length_advantage_threshold, 0);
    }

    #[test]
    fn test_unknown_algorithm_is_rejected() {
        let toml = r##"
            [strategy]
            low_health_threshold = 30
            length_advantage_threshold = 2

            [pathfinding]
            algorithm = "dijkstra"

            [appearance]
            apiversion = "1"
            author = "tester"
            color = "#000000"
            head = "default"
            tail = "default"

            [debug]
            enabled = false
            log_file_path = "x.jsonl"
        "##;

        assert!(Config::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_invalid_toml_returns_error() {
        let result = Config::from_file("nonexistent.toml");
        assert!(result.is_err());
    }
}
