//! HTTP transport mapping the movie routes onto a [`MovieStore`].
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /movies`: all movies, or `?genre=<tag>` to filter (case-insensitive).
//! - `GET /movies/:id`: one movie, `404 {"message": "Movie not found"}` otherwise.
//! - `POST /movies`: full validation, `201` with the created movie, `400 {"error": [...]}` on violations.
//! - `PATCH /movies/:id`: partial validation then merge, `400` on violations, `404` if absent.
//! - `DELETE /movies/:id`: `200 {"message": "Movie Deleted"}` or `404`.
//! - `GET /health`: `{ "ok": true, "movies": <count> }`.
//!
//! Every route sits behind the [`CorsPolicy`] allow-list.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use movies_api::{http, seed, CorsPolicy};
//!
//! let store = Arc::new(seed::load_store(None)?);
//! let app = http::router(store.clone(), CorsPolicy::new(["http://localhost:1234"]));
//!
//! // Or serve directly
//! http::serve(store, CorsPolicy::default(), "0.0.0.0:3000".parse()?).await?;
//! ```

mod cors;
mod error;
mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::{middleware, Router};

use crate::store::MovieStore;

pub use cors::CorsPolicy;
pub use error::ApiError;

/// Build an axum `Router` serving the movie routes from the given store.
pub fn router<S: MovieStore + 'static>(store: Arc<S>, policy: CorsPolicy) -> Router {
    Router::new()
        .route("/health", get(handlers::health::<S>))
        .route(
            "/movies",
            get(handlers::list_movies::<S>).post(handlers::create_movie::<S>),
        )
        .route(
            "/movies/:id",
            get(handlers::get_movie::<S>)
                .patch(handlers::update_movie::<S>)
                .delete(handlers::delete_movie::<S>),
        )
        .layer(middleware::from_fn_with_state(Arc::new(policy), cors::enforce))
        .with_state(store)
}

/// Serve the store over HTTP until Ctrl-C.
pub async fn serve<S: MovieStore + 'static>(
    store: Arc<S>,
    policy: CorsPolicy,
    addr: SocketAddr,
) -> Result<(), std::io::Error> {
    let app = router(store, policy);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let port = listener.local_addr()?.port();
    tracing::info!("Server listening on port http://localhost:{}", port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutting down"),
        Err(e) => {
            tracing::warn!(error = %e, "could not listen for Ctrl-C, serving until killed");
            std::future::pending::<()>().await;
        }
    }
}
