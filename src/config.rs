use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

use crate::game::grid::{DEFAULT_GRID_SIZE, DEFAULT_MAX_ATTEMPTS, MAX_GRID_SIZE};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    pub grid_size: usize,
    pub max_grid_size: usize,
    pub max_words: usize,
    pub placement_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            max_grid_size: 30,
            max_words: 50,
            placement_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let server = ServerConfig {
            host: env::var("HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a number")?,
        };

        let defaults = GameConfig::default();
        let game = GameConfig {
            grid_size: env_or("GRID_SIZE", defaults.grid_size),
            max_grid_size: env_or("MAX_GRID_SIZE", defaults.max_grid_size).min(MAX_GRID_SIZE),
            max_words: env_or("MAX_WORDS", defaults.max_words),
            placement_attempts: env_or("PLACEMENT_ATTEMPTS", defaults.placement_attempts),
        };

        if game.grid_size > game.max_grid_size {
            anyhow::bail!(
                "GRID_SIZE ({}) must not exceed MAX_GRID_SIZE ({})",
                game.grid_size,
                game.max_grid_size
            );
        }

        Ok(Config { server, game })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Parse an optional numeric variable, keeping the default when unset or malformed
fn env_or(key: &str, default: usize) -> usize {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
