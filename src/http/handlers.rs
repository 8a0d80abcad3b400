use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use super::error::ApiError;
use crate::movie::Movie;
use crate::store::MovieStore;
use crate::validation::{validate_full, validate_partial};

#[derive(Debug, Deserialize)]
pub(crate) struct ListQuery {
    genre: Option<String>,
}

/// `GET /health`: returns `{ "ok": true, "movies": <count> }`.
pub(crate) async fn health<S: MovieStore>(
    State(store): State<Arc<S>>,
) -> Result<Json<Value>, ApiError> {
    let count = store.len()?;
    Ok(Json(json!({ "ok": true, "movies": count })))
}

/// `GET /movies[?genre=<tag>]`: an empty tag lists everything.
pub(crate) async fn list_movies<S: MovieStore>(
    State(store): State<Arc<S>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let Query(query) = query?;
    let movies = match query.genre.as_deref().filter(|genre| !genre.is_empty()) {
        Some(genre) => store.list_by_genre(genre)?,
        None => store.list_all()?,
    };
    Ok(Json(movies))
}

/// `GET /movies/:id`
pub(crate) async fn get_movie<S: MovieStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, ApiError> {
    let movie = store.get_by_id(&id)?.ok_or(ApiError::NotFound)?;
    Ok(Json(movie))
}

/// `POST /movies`: validate, then insert with a fresh id.
pub(crate) async fn create_movie<S: MovieStore>(
    State(store): State<Arc<S>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Movie>), ApiError> {
    let Json(body) = body?;
    let data = validate_full(&body)?;
    let movie = store.insert(data)?;
    Ok((StatusCode::CREATED, Json(movie)))
}

/// `PATCH /movies/:id`: the body is validated before the id is looked up.
pub(crate) async fn update_movie<S: MovieStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Movie>, ApiError> {
    let Json(body) = body?;
    let patch = validate_partial(&body)?;
    let movie = store.update(&id, patch)?.ok_or(ApiError::NotFound)?;
    Ok(Json(movie))
}

/// `DELETE /movies/:id`
pub(crate) async fn delete_movie<S: MovieStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    if !store.remove(&id)? {
        return Err(ApiError::NotFound);
    }
    Ok(Json(json!({ "message": "Movie Deleted" })))
}
