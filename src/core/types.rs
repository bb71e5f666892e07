use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The closed set of genre names a movie may be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Animation,
    Biography,
    Comedy,
    Crime,
    Drama,
    Fantasy,
    Horror,
    Romance,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Thriller,
}

impl Genre {
    pub const ALL: [Genre; 12] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Animation,
        Genre::Biography,
        Genre::Comedy,
        Genre::Crime,
        Genre::Drama,
        Genre::Fantasy,
        Genre::Horror,
        Genre::Romance,
        Genre::SciFi,
        Genre::Thriller,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Animation => "Animation",
            Genre::Biography => "Biography",
            Genre::Comedy => "Comedy",
            Genre::Crime => "Crime",
            Genre::Drama => "Drama",
            Genre::Fantasy => "Fantasy",
            Genre::Horror => "Horror",
            Genre::Romance => "Romance",
            Genre::SciFi => "Sci-Fi",
            Genre::Thriller => "Thriller",
        }
    }

    /// Exact, case-sensitive lookup used by the validator.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|genre| genre.as_str() == name)
    }

    /// Case-insensitive comparison used by the list filter.
    pub fn matches_ignore_case(&self, name: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(name)
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub director: String,
    pub duration: u32,
    pub poster: String,
    pub genre: Vec<Genre>,
    #[serde(default)]
    pub rate: f64,
}

impl Movie {
    /// Assigns a fresh UUID v4 identifier to a validated create payload.
    pub fn create(new_movie: NewMovie) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), new_movie)
    }

    pub fn with_id(id: impl Into<String>, new_movie: NewMovie) -> Self {
        let NewMovie {
            title,
            year,
            director,
            duration,
            rate,
            poster,
            genre,
        } = new_movie;

        Self {
            id: id.into(),
            title,
            year,
            director,
            duration,
            poster,
            genre,
            rate,
        }
    }

    pub fn has_genre(&self, name: &str) -> bool {
        self.genre.iter().any(|genre| genre.matches_ignore_case(name))
    }

    /// Returns a copy with every field present in `patch` replaced.
    pub fn merged(&self, patch: MoviePatch) -> Self {
        let mut updated = self.clone();
        if let Some(title) = patch.title {
            updated.title = title;
        }
        if let Some(year) = patch.year {
            updated.year = year;
        }
        if let Some(director) = patch.director {
            updated.director = director;
        }
        if let Some(duration) = patch.duration {
            updated.duration = duration;
        }
        if let Some(rate) = patch.rate {
            updated.rate = rate;
        }
        if let Some(poster) = patch.poster {
            updated.poster = poster;
        }
        if let Some(genre) = patch.genre {
            updated.genre = genre;
        }
        updated
    }
}

/// A fully validated create payload; the id is assigned by the server.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub director: String,
    pub duration: u32,
    #[serde(default)]
    pub rate: f64,
    pub poster: String,
    pub genre: Vec<Genre>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub director: Option<String>,
    pub duration: Option<u32>,
    pub rate: Option<f64>,
    pub poster: Option<String>,
    pub genre: Option<Vec<Genre>>,
}

impl MoviePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
