use super::router::AppState;
use super::{MOVIE_DELETED_MESSAGE, MessageResponse, WebResult};
use crate::core::Movie;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde_json::Value as JsonValue;

/// First `genre` value in the query string; repeats are ignored.
fn genre_filter(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .find(|(key, _)| key == "genre")
        .map(|(_, value)| value.as_str())
}

pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello World"))
}

pub async fn list_movies(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Json<Vec<Movie>> {
    Json(state.movies.list(genre_filter(&params)).await)
}

pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> WebResult<Json<Movie>> {
    let movie = state.movies.get(&id).await?;
    Ok(Json(movie))
}

pub async fn create_movie(
    State(state): State<AppState>,
    payload: Result<Json<JsonValue>, JsonRejection>,
) -> WebResult<(StatusCode, Json<Movie>)> {
    let Json(payload) = payload?;
    let created = state.movies.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<JsonValue>, JsonRejection>,
) -> WebResult<Json<Movie>> {
    let Json(payload) = payload?;
    let updated = state.movies.update(&id, &payload).await?;
    Ok(Json(updated))
}

pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> WebResult<Json<MessageResponse>> {
    state.movies.delete(&id).await?;
    Ok(Json(MessageResponse::new(MOVIE_DELETED_MESSAGE)))
}

pub async fn route_not_found() -> (StatusCode, Json<MessageResponse>) {
    (StatusCode::NOT_FOUND, Json(MessageResponse::new("Not Found")))
}

#[cfg(test)]
mod tests {
    use super::genre_filter;

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn genre_filter_takes_first_value() {
        let query = params(&[("page", "2"), ("genre", "Drama"), ("genre", "Action")]);
        assert_eq!(genre_filter(&query), Some("Drama"));
    }

    #[test]
    fn genre_filter_is_absent_without_param() {
        assert_eq!(genre_filter(&params(&[("sort", "year")])), None);
    }
}
