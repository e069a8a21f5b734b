//! `ReqwestTransport` — a network [`Transport`] backed by `reqwest`.
//!
//! Decodes successful responses as JSON and maps error statuses to
//! [`HttpError`] variants. It sets no timeout of its own: wrap it in a
//! [`ManagedHttpClient`](crate::client::ManagedHttpClient) for that.

use std::future::Future;
use std::marker::PhantomData;

use reqwest::header::RETRY_AFTER;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::HttpError;
use crate::network::DEFAULT_USER_AGENT;
use crate::transport::Transport;

/// GET-only JSON transport. `O` is the type the response body decodes into.
pub struct ReqwestTransport<O = serde_json::Value> {
    client: Client,
    _output: PhantomData<fn() -> O>,
}

impl<O> ReqwestTransport<O> {
    pub fn new() -> Result<Self, HttpError> {
        let mut builder = Client::builder().user_agent(DEFAULT_USER_AGENT);
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.pool_max_idle_per_host(10);
        }

        Ok(Self::with_client(builder.build()?))
    }

    /// Use a preconfigured `reqwest::Client`.
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            _output: PhantomData,
        }
    }
}

impl<O> Clone for ReqwestTransport<O> {
    fn clone(&self) -> Self {
        Self::with_client(self.client.clone())
    }
}

impl<O: DeserializeOwned> ReqwestTransport<O> {
    async fn do_request(&self, url: &str) -> Result<O, HttpError> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<O>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let retry_after_ms = resp
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_retry_after);
        let body_text = match resp.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!(status = status_code, "Failed to read error body: {}", e);
                String::new()
            }
        };
        tracing::debug!(status = status_code, "Request to {} failed", url);

        match status_code {
            401 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited { retry_after_ms }),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

impl<O> Transport for ReqwestTransport<O>
where
    O: DeserializeOwned + Send,
{
    type Output = O;
    type Error = HttpError;

    fn get(&self, url: &str) -> impl Future<Output = Result<O, HttpError>> + Send {
        self.do_request(url)
    }
}

/// `Retry-After` in its delta-seconds form, as milliseconds. HTTP-date values
/// are not supported.
fn parse_retry_after(value: &str) -> Option<u64> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .map(|secs| secs.saturating_mul(1000))
}
