//! Origin allow-list in front of the routes.

use movies_api::{CorsPolicy, InMemoryMovieStore};
use reqwest::header;

use crate::support::{seeded_store, start_server, start_server_with_policy, ALLOWED_ORIGIN};

#[tokio::test]
async fn same_origin_request_passes() {
    let base = start_server(seeded_store()).await;
    let resp = reqwest::get(format!("{base}/movies")).await.unwrap();
    assert_eq!(resp.status(), 200);
    assert!(resp
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn allowed_origin_is_echoed() {
    let base = start_server(seeded_store()).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/movies"))
        .header(header::ORIGIN, ALLOWED_ORIGIN)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        ALLOWED_ORIGIN
    );
    let varies_on_origin = resp
        .headers()
        .get_all(header::VARY)
        .iter()
        .flat_map(|value| value.to_str().unwrap().split(','))
        .any(|name| name.trim().eq_ignore_ascii_case("origin"));
    assert!(varies_on_origin);
    assert!(resp.headers().get("x-powered-by").is_none());
}

#[tokio::test]
async fn unknown_origin_is_refused() {
    let base = start_server(seeded_store()).await;
    let client = reqwest::Client::new();

    let resp = client
        .delete(format!("{base}/movies/seed-drama"))
        .header(header::ORIGIN, "https://evil.example")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 403);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Not allowed by CORS");

    // the delete never ran
    let resp = reqwest::get(format!("{base}/movies/seed-drama")).await.unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn preflight_from_allowed_origin() {
    let base = start_server(InMemoryMovieStore::new()).await;
    let client = reqwest::Client::new();

    let resp = client
        .request(reqwest::Method::OPTIONS, format!("{base}/movies/abc"))
        .header(header::ORIGIN, ALLOWED_ORIGIN)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PATCH")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 204);

    let headers = resp.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], ALLOWED_ORIGIN);
    let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS].to_str().unwrap();
    assert!(methods.contains("PATCH"));
    assert!(methods.contains("DELETE"));
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "content-type");
}

#[tokio::test]
async fn configured_policy_replaces_defaults() {
    let policy = CorsPolicy::new(["https://iap-dev.tech"]);
    let base = start_server_with_policy(seeded_store(), policy).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/movies"))
        .header(header::ORIGIN, ALLOWED_ORIGIN)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 403);

    let resp = client
        .get(format!("{base}/movies"))
        .header(header::ORIGIN, "https://iap-dev.tech")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
}
