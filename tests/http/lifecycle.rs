//! Create, read, patch, delete a single movie against an empty collection.

use movies_api::InMemoryMovieStore;
use serde_json::{json, Value};

use crate::support::{start_server, valid_movie};

#[tokio::test]
async fn full_movie_lifecycle() {
    let base = start_server(InMemoryMovieStore::new()).await;
    let client = reqwest::Client::new();

    // Create
    let resp = client
        .post(format!("{base}/movies"))
        .json(&valid_movie())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let created: Value = resp.json().await.unwrap();
    let id = created["id"].as_str().unwrap().to_string();

    let mut expected = valid_movie();
    expected["id"] = json!(id);
    assert_eq!(created, expected);

    // Read back
    let resp = client
        .get(format!("{base}/movies/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let fetched: Value = resp.json().await.unwrap();
    assert_eq!(fetched, created);

    // Patch the rate only
    let resp = client
        .patch(format!("{base}/movies/{id}"))
        .json(&json!({ "rate": 8 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let patched: Value = resp.json().await.unwrap();
    let mut expected = created.clone();
    expected["rate"] = json!(8.0);
    assert_eq!(patched, expected);

    // Delete
    let resp = client
        .delete(format!("{base}/movies/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    // Gone
    let resp = client
        .get(format!("{base}/movies/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let resp = client.get(format!("{base}/movies")).send().await.unwrap();
    let list: Value = resp.json().await.unwrap();
    assert_eq!(list, json!([]));
}
