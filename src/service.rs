use crate::core::{Movie, MovieError, Result};
use crate::json::MovieSchema;
use crate::storage::MovieStore;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Shared handle over the movie store.
///
/// Reads share the lock; every mutation holds the write lock across its whole
/// read-modify-write so writers never interleave.
#[derive(Clone)]
pub struct MovieService {
    store: Arc<RwLock<MovieStore>>,
    schema: Arc<MovieSchema>,
}

impl MovieService {
    pub fn new(store: MovieStore) -> Self {
        Self::with_schema(store, MovieSchema::new())
    }

    pub fn with_schema(store: MovieStore, schema: MovieSchema) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            schema: Arc::new(schema),
        }
    }

    pub async fn list(&self, genre: Option<&str>) -> Vec<Movie> {
        self.store.read().await.filter_by_genre(genre)
    }

    pub async fn get(&self, id: &str) -> Result<Movie> {
        self.store
            .read()
            .await
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| MovieError::NotFound(id.to_string()))
    }

    pub async fn create(&self, payload: &JsonValue) -> Result<Movie> {
        let new_movie = self.schema.validate_full(payload)?;
        let movie = Movie::create(new_movie);

        self.store.write().await.append(movie.clone());
        info!(id = %movie.id, title = %movie.title, "movie created");
        Ok(movie)
    }

    /// Validation runs before the lookup, so a bad body wins over a missing id.
    pub async fn update(&self, id: &str, payload: &JsonValue) -> Result<Movie> {
        let patch = self.schema.validate_partial(payload)?;

        let mut store = self.store.write().await;
        let existing = store
            .find_by_id(id)
            .ok_or_else(|| MovieError::NotFound(id.to_string()))?;

        if patch.is_empty() {
            debug!(id, "empty patch, movie unchanged");
            return Ok(existing.clone());
        }

        let updated = existing.merged(patch);
        store.replace_at(id, updated.clone());
        info!(id, "movie updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        if !self.store.write().await.remove_by_id(id) {
            return Err(MovieError::NotFound(id.to_string()));
        }
        info!(id, "movie deleted");
        Ok(())
    }

    pub async fn count(&self) -> usize {
        self.store.read().await.len()
    }
}
