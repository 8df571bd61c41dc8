//! Shared HTTP plumbing: client construction, JSON helpers and request deadlines

use futures::future::{self, Either};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

use super::errors::{ClientError, ClientResult};

/// Create the HTTP client used by every service
pub fn build_http_client() -> ClientResult<Client> {
    Client::builder().build().map_err(ClientError::from)
}

/// Run `operation` under a client-side deadline; expiry becomes [`ClientError::Timeout`]
pub async fn with_timeout<T, F>(operation: &str, timeout: Duration, request: F) -> ClientResult<T>
where
    F: Future<Output = ClientResult<T>>,
{
    let request = Box::pin(request);
    let timer = Box::pin(sleep(timeout));

    match future::select(request, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => {
            debug!("{} timed out after {:?}", operation, timeout);
            Err(ClientError::Timeout {
                operation: operation.to_string(),
                after_ms: timeout.as_millis() as u64,
            })
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(millis).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// GET a JSON document
pub async fn get_json<T: DeserializeOwned>(client: &Client, url: &str) -> ClientResult<T> {
    let response = client.get(url).send().await?;
    let response = ensure_success(response).await?;
    response.json::<T>().await.map_err(|e| ClientError::SerializationError {
        message: format!("Failed to parse response from {}: {}", url, e),
    })
}

/// POST a JSON body, returning the JSON response (`null` for an empty body)
pub async fn post_json<B: Serialize + ?Sized>(
    client: &Client,
    url: &str,
    body: &B,
) -> ClientResult<serde_json::Value> {
    let response = client
        .post(url)
        .header("Content-Type", "application/json")
        .json(body)
        .send()
        .await?;
    let response = ensure_success(response).await?;
    let text = response.text().await?;
    parse_body(&text)
}

async fn ensure_success(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::HttpStatus {
            status: status.as_u16(),
            body,
        })
    }
}

pub(crate) fn parse_body(text: &str) -> ClientResult<serde_json::Value> {
    if text.trim().is_empty() {
        Ok(serde_json::Value::Null)
    } else {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_with_timeout_passes_through_result() {
        let result = with_timeout("fast", Duration::from_millis(200), async { Ok(7u32) }).await;
        assert_eq!(result, Ok(7));
    }

    #[tokio::test]
    async fn test_with_timeout_expires() {
        let result: ClientResult<()> = with_timeout(
            "slow",
            Duration::from_millis(5),
            future::pending::<ClientResult<()>>(),
        )
        .await;

        assert_eq!(
            result,
            Err(ClientError::Timeout {
                operation: "slow".to_string(),
                after_ms: 5
            })
        );
    }

    #[test]
    fn test_parse_body_empty_is_null() {
        assert_eq!(parse_body("  "), Ok(serde_json::Value::Null));
        assert!(parse_body("{\"token\":\"t\"}").unwrap().is_object());
        assert!(matches!(
            parse_body("<html>"),
            Err(ClientError::SerializationError { .. })
        ));
    }
}
