//! Word-search puzzle generation and interactive solving.
//!
//! [`game::PuzzleBuilder`] turns a raw word list into a filled [`models::Puzzle`];
//! [`game::selection`] evaluates drag gestures against a finished puzzle. The
//! [`routes`] module exposes both over HTTP.

pub mod config;
pub mod error;
pub mod game;
pub mod models;
pub mod routes;
pub mod utils;

use config::Config;
use error::PuzzleError;
use game::PuzzleBuilder;

/// Application state shared across all handlers
pub struct AppState {
    pub config: Config,
    /// Builder for the configured default grid size
    pub builder: PuzzleBuilder,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, PuzzleError> {
        let builder = PuzzleBuilder::new(config.game.grid_size)?
            .with_max_attempts(config.game.placement_attempts);

        Ok(Self { config, builder })
    }
}
