//! Route-level behaviour of the movie API.

use movies_api::{InMemoryMovieStore, MovieStore};
use serde_json::{json, Value};

use crate::support::{seeded_store, start_server, valid_movie};

async fn get_json(url: String) -> (u16, Value) {
    let resp = reqwest::get(url).await.unwrap();
    let status = resp.status().as_u16();
    (status, resp.json().await.unwrap())
}

fn titles(body: &Value) -> Vec<&str> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn health_check() {
    let base = start_server(seeded_store()).await;
    let (status, body) = get_json(format!("{base}/health")).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "ok": true, "movies": 3 }));
}

#[tokio::test]
async fn list_all_movies_in_order() {
    let base = start_server(seeded_store()).await;
    let (status, body) = get_json(format!("{base}/movies")).await;
    assert_eq!(status, 200);
    assert_eq!(
        titles(&body),
        vec!["The Hangover", "Forrest Gump", "Little Miss Sunshine"]
    );
    assert_eq!(body[2]["rate"], 5.0);
}

#[tokio::test]
async fn filter_by_genre_ignores_case() {
    let base = start_server(seeded_store()).await;

    let (status, body) = get_json(format!("{base}/movies?genre=comedy")).await;
    assert_eq!(status, 200);
    assert_eq!(titles(&body), vec!["The Hangover", "Little Miss Sunshine"]);

    let (_, body) = get_json(format!("{base}/movies?genre=ROMANCE")).await;
    assert_eq!(titles(&body), vec!["Forrest Gump"]);
}

#[tokio::test]
async fn unknown_genre_matches_nothing() {
    let base = start_server(seeded_store()).await;
    let (status, body) = get_json(format!("{base}/movies?genre=western")).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn empty_genre_lists_everything() {
    let base = start_server(seeded_store()).await;
    let (_, body) = get_json(format!("{base}/movies?genre=")).await;
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn get_by_id() {
    let base = start_server(seeded_store()).await;

    let (status, body) = get_json(format!("{base}/movies/seed-drama")).await;
    assert_eq!(status, 200);
    assert_eq!(body["title"], "Forrest Gump");
    assert_eq!(body["genre"], json!(["Drama", "Romance"]));

    let (status, body) = get_json(format!("{base}/movies/nope")).await;
    assert_eq!(status, 404);
    assert_eq!(body, json!({ "message": "Movie not found" }));
}

#[tokio::test]
async fn create_returns_201_with_id() {
    let base = start_server(InMemoryMovieStore::new()).await;
    let client = reqwest::Client::new();

    let mut payload = valid_movie();
    payload.as_object_mut().unwrap().remove("rate");
    payload["id"] = json!("client-chosen");

    let resp = client
        .post(format!("{base}/movies"))
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);

    let body: Value = resp.json().await.unwrap();
    let id = body["id"].as_str().unwrap();
    assert_ne!(id, "client-chosen");
    assert!(uuid_like(id));
    assert_eq!(body["rate"], 5.0);
    assert_eq!(body["genre"], json!(["Action", "Sci-Fi"]));
}

fn uuid_like(id: &str) -> bool {
    let groups: Vec<usize> = id.split('-').map(str::len).collect();
    groups == vec![8, 4, 4, 4, 12]
}

#[tokio::test]
async fn create_reports_every_violation() {
    let base = start_server(InMemoryMovieStore::new()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/movies"))
        .json(&json!({
            "title": 1,
            "year": 1800,
            "director": "Someone",
            "duration": 90,
            "poster": "not a url",
            "genre": ["Drama", "Documentary"]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let body: Value = resp.json().await.unwrap();
    let errors = body["error"].as_array().unwrap();
    assert_eq!(errors.len(), 4);
    assert_eq!(errors[0]["path"], json!(["title"]));
    assert_eq!(errors[0]["message"], "Movie title must be a string");
    assert_eq!(errors[1]["code"], "too_small");
    assert_eq!(errors[2]["message"], "Movie poster must be a valid URL");
    assert_eq!(errors[3]["path"], json!(["genre", 1]));
    assert_eq!(errors[3]["code"], "invalid_enum_value");
}

#[tokio::test]
async fn create_with_non_string_genre_is_a_type_error() {
    let base = start_server(InMemoryMovieStore::new()).await;
    let client = reqwest::Client::new();

    let mut payload = valid_movie();
    payload["genre"] = json!(["Drama", 3]);
    let resp = client
        .post(format!("{base}/movies"))
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body["error"],
        json!([{
            "code": "invalid_type",
            "path": ["genre", 1],
            "message": "Movie genre must be an array of enum Genre"
        }])
    );
}

#[tokio::test]
async fn create_with_malformed_json_is_400() {
    let store = InMemoryMovieStore::new();
    let base = start_server(store.clone()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/movies"))
        .header("content-type", "application/json")
        .body("{ not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(body["message"].is_string());

    assert!(store.is_empty().unwrap());
}

#[tokio::test]
async fn patch_invalid_payload_is_400_even_for_unknown_id() {
    let base = start_server(seeded_store()).await;
    let client = reqwest::Client::new();

    let resp = client
        .patch(format!("{base}/movies/seed-drama"))
        .json(&json!({ "genre": ["Western"] }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"][0]["path"], json!(["genre", 0]));

    let resp = client
        .patch(format!("{base}/movies/nope"))
        .json(&json!({ "rate": 42 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn patch_unknown_id_is_404() {
    let base = start_server(seeded_store()).await;
    let client = reqwest::Client::new();

    let resp = client
        .patch(format!("{base}/movies/nope"))
        .json(&json!({ "year": 2020 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Movie not found" }));
}

#[tokio::test]
async fn patch_merges_and_keeps_id() {
    let base = start_server(seeded_store()).await;
    let client = reqwest::Client::new();

    let (_, before) = get_json(format!("{base}/movies/seed-comedy")).await;

    let resp = client
        .patch(format!("{base}/movies/seed-comedy"))
        .json(&json!({ "year": 2020, "id": "hijacked" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let after: Value = resp.json().await.unwrap();

    let mut expected = before.clone();
    expected["year"] = json!(2020);
    assert_eq!(after, expected);

    let (status, _) = get_json(format!("{base}/movies/hijacked")).await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn delete_removes_once() {
    let base = start_server(seeded_store()).await;
    let client = reqwest::Client::new();

    let resp = client
        .delete(format!("{base}/movies/seed-both"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Movie Deleted" }));

    let (_, list) = get_json(format!("{base}/movies")).await;
    assert_eq!(titles(&list), vec!["The Hangover", "Forrest Gump"]);

    let resp = client
        .delete(format!("{base}/movies/seed-both"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}
