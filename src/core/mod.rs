pub mod error;
pub mod types;

pub use error::{MovieError, Result};
pub use types::{Genre, Movie, MoviePatch, NewMovie};
