//! Test utilities and fixtures for pulsegroove tests.
//!
//! HTTP clients are exercised end to end against a [`wiremock::MockServer`].
//! The helpers here cover what nearly every such test repeats.
//!
//! # Example
//!
//! ```ignore
//! use wiremock::matchers::{method, path};
//! use wiremock::{Mock, MockServer};
//! use crate::test_utils::json;
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let server = MockServer::start().await;
//!     Mock::given(method("GET"))
//!         .and(path("/search"))
//!         .respond_with(json(r#"{"data": []}"#))
//!         .mount(&server)
//!         .await;
//!     let client = DeezerClient::with_base_url(reqwest::Client::new(), server.uri());
//!     // ... test logic
//! }
//! ```

use wiremock::{MockServer, ResponseTemplate};

/// 200 OK with a JSON body
pub fn json(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.to_owned(), "application/json")
}

/// Path plus query string of every request the server saw, in order
pub async fn received_targets(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| match request.url.query() {
            Some(query) => format!("{}?{}", request.url.path(), query),
            None => request.url.path().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use wiremock::Mock;
    use wiremock::matchers::{method, path};

    use super::*;

    #[tokio::test]
    async fn test_json_helper_and_received_targets() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/a"))
            .respond_with(json(r#"{"ok":true}"#))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let a = client.get(format!("{}/a?x=1", server.uri())).send().await.unwrap();
        assert_eq!(a.status(), 200);
        assert_eq!(
            a.headers()["content-type"].to_str().unwrap(),
            "application/json"
        );
        assert_eq!(a.text().await.unwrap(), r#"{"ok":true}"#);

        let missing = client.get(format!("{}/nope", server.uri())).send().await.unwrap();
        assert_eq!(missing.status(), 404);

        assert_eq!(received_targets(&server).await, vec!["/a?x=1", "/nope"]);
    }
}
