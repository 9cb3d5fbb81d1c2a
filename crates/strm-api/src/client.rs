//! TorrServer listing client

use std::time::Duration;

use reqwest::Client;
use serde_json::{Value, json};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};

/// Credentials for HTTP Basic authentication.
#[derive(Debug, Clone)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

/// Async client for a TorrServer instance.
///
/// Holds a pooled `reqwest` client; one instance serves every polling
/// pass for the lifetime of the process.
pub struct TorrServerClient {
    client: Client,
    base_url: String,
    auth: Option<BasicAuth>,
}

impl TorrServerClient {
    /// Create a client for the given base URL.
    ///
    /// The timeout bounds each listing request end to end. A trailing
    /// `/` on the base URL is tolerated.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: &str, auth: Option<BasicAuth>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(10)))
            .user_agent(concat!("strm-sync/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
        })
    }

    /// Fetch the current torrent listing.
    ///
    /// Issues `POST <base>/torrents` with body `{"action":"list"}`,
    /// attaching a Basic auth header only when credentials were supplied.
    /// A valid JSON response that is not an array is tolerated and
    /// treated as an empty listing; an empty body likewise.
    ///
    /// # Errors
    ///
    /// Transport failures, non-success HTTP statuses and unparseable
    /// bodies are returned as errors; callers treat them as aborting the
    /// current pass only.
    pub async fn list_torrents(&self) -> Result<Vec<Value>> {
        let url = format!("{}/torrents", self.base_url);
        info!(%url, "requesting torrent listing");

        let mut request = self.client.post(&url).json(&json!({ "action": "list" }));
        if let Some(auth) = &self.auth {
            debug!("using HTTP basic auth");
            request = request.basic_auth(&auth.username, Some(&auth.password));
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            info!("listing body is empty, treating as empty listing");
            return Ok(Vec::new());
        }

        match serde_json::from_str::<Value>(&body)? {
            Value::Array(torrents) => {
                info!(torrents = torrents.len(), "received torrent listing");
                debug!(preview = %preview(&body), "listing body");
                Ok(torrents)
            }
            other => {
                warn!(
                    kind = json_kind(&other),
                    "expected a list from /torrents, treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }
}

/// First part of the body for verbose logging.
fn preview(body: &str) -> &str {
    let end = body
        .char_indices()
        .nth(500)
        .map_or(body.len(), |(idx, _)| idx);
    &body[..end]
}

/// Human-readable JSON value kind for log lines.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
