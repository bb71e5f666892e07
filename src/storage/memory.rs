use crate::core::{Movie, MovieError, Result};
use std::collections::HashSet;

/// Ordered in-memory movie list.
///
/// Lookups are linear scans; insertion order is the listing order.
#[derive(Debug, Clone, Default)]
pub struct MovieStore {
    movies: Vec<Movie>,
}

impl MovieStore {
    /// Builds a store from seed records, rejecting duplicate ids.
    pub fn from_movies(movies: Vec<Movie>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(movies.len());
        for movie in &movies {
            if !seen.insert(movie.id.as_str()) {
                return Err(MovieError::DuplicateId(movie.id.clone()));
            }
        }
        Ok(Self { movies })
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn all(&self) -> &[Movie] {
        &self.movies
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Movie> {
        self.movies.iter().find(|movie| movie.id == id)
    }

    /// Movies tagged with `genre` (case-insensitive); everything when the
    /// filter is absent or empty.
    pub fn filter_by_genre(&self, genre: Option<&str>) -> Vec<Movie> {
        match genre {
            Some(name) if !name.is_empty() => self
                .movies
                .iter()
                .filter(|movie| movie.has_genre(name))
                .cloned()
                .collect(),
            _ => self.movies.clone(),
        }
    }

    /// Callers guarantee a fresh id.
    pub fn append(&mut self, movie: Movie) {
        self.movies.push(movie);
    }

    pub fn remove_by_id(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(index) => {
                self.movies.remove(index);
                true
            }
            None => false,
        }
    }

    /// Overwrites the record with `id` in place, keeping its position.
    pub fn replace_at(&mut self, id: &str, movie: Movie) -> bool {
        match self.position(id) {
            Some(index) => {
                self.movies[index] = movie;
                true
            }
            None => false,
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.movies.iter().position(|movie| movie.id == id)
    }
}
