//! Seed loading
//!
//! The store is filled once at startup from a JSON array of movies, either the
//! catalogue compiled into the binary or a file chosen at launch.

use super::MovieStore;
use crate::core::{Movie, Result};
use std::path::Path;
use tracing::{debug, info};

/// The catalogue bundled with the binary.
pub const BUNDLED_MOVIES: &str = include_str!("../../data/movies.json");

impl MovieStore {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let movies: Vec<Movie> = serde_json::from_str(json)?;
        debug!(count = movies.len(), "parsed seed movies");
        Self::from_movies(movies)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let store = Self::from_json_str(&json)?;
        info!(path = %path.display(), count = store.len(), "loaded movies from file");
        Ok(store)
    }

    pub fn bundled() -> Result<Self> {
        let store = Self::from_json_str(BUNDLED_MOVIES)?;
        info!(count = store.len(), "loaded bundled movies");
        Ok(store)
    }
}
