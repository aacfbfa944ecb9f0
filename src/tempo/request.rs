//! Shared request handling for provider clients.
//!
//! Every provider collapses transport failures, bad statuses and malformed
//! bodies into [`TempoError`] the same way, so the clients only build URLs.

use serde::de::DeserializeOwned;

use super::domain::TempoError;

/// GET `url` and decode the JSON body as `T`.
pub(crate) async fn get_json<T: DeserializeOwned>(
    http: &reqwest::Client,
    url: &str,
) -> Result<T, TempoError> {
    let response = http.get(url).send().await.map_err(map_transport)?;

    let status = response.status();
    if !status.is_success() {
        // Keep a bit of the body for the log line
        let body = response.text().await.unwrap_or_default();
        return Err(TempoError::Http {
            status: status.as_u16(),
            message: format!(
                "{} - {}",
                status.canonical_reason().unwrap_or("Unknown"),
                body.chars().take(200).collect::<String>()
            ),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| TempoError::Parse(e.to_string()))
}

fn map_transport(e: reqwest::Error) -> TempoError {
    if e.is_timeout() {
        TempoError::Network(format!("timed out: {}", e))
    } else {
        TempoError::Network(e.to_string())
    }
}
