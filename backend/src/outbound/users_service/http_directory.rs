//! Reqwest-backed users service adapter.
//!
//! Owns transport details only: URL construction, timeout and status mapping,
//! and JSON decoding into [`UserSummary`]. Each lookup is a single GET with no
//! retry.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url, redirect};
use tracing::debug;

use super::dto::UserSummaryDto;
use crate::domain::ports::{UserDirectory, UserDirectoryError};
use crate::domain::{UserId, UserSummary};

/// Users service client that resolves `<base_url>/<user_id>`.
#[derive(Debug, Clone)]
pub struct HttpUserDirectory {
    client: Client,
    base_url: Url,
}

impl HttpUserDirectory {
    /// Build a client with an explicit request timeout.
    ///
    /// The base URL is normalised to end with `/` so the user id is appended
    /// as a new path segment rather than replacing the last one. Redirects are
    /// not followed: a 3xx answer is a failed lookup like any other non-2xx.
    ///
    /// ```rust,ignore
    /// let base = Url::parse("http://localhost:8081/api/users")?;
    /// let directory = HttpUserDirectory::new(base, Duration::from_secs(5))?;
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(redirect::Policy::none())
            .build()?;
        Ok(Self {
            client,
            base_url: normalise_base_url(base_url),
        })
    }

    /// The normalised base URL lookups are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn user_url(&self, user_id: UserId) -> Result<Url, UserDirectoryError> {
        self.base_url
            .join(&user_id.to_string())
            .map_err(|error| UserDirectoryError::unavailable(format!("invalid user URL: {error}")))
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn fetch_user(&self, user_id: UserId) -> Result<UserSummary, UserDirectoryError> {
        let url = self.user_url(user_id)?;
        debug!(%url, "requesting user from users service");
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(user_id, status, body.as_ref()));
        }

        parse_user(body.as_ref())
    }
}

fn normalise_base_url(mut base_url: Url) -> Url {
    if !base_url.path().ends_with('/') {
        let path = format!("{}/", base_url.path());
        base_url.set_path(&path);
    }
    base_url
}

fn parse_user(body: &[u8]) -> Result<UserSummary, UserDirectoryError> {
    serde_json::from_slice::<UserSummaryDto>(body)
        .map(UserSummary::from)
        .map_err(|error| UserDirectoryError::malformed(error.to_string()))
}

fn map_transport_error(error: reqwest::Error) -> UserDirectoryError {
    if error.is_timeout() {
        UserDirectoryError::timeout(error.to_string())
    } else {
        UserDirectoryError::unavailable(error.to_string())
    }
}

fn map_status_error(user_id: UserId, status: StatusCode, body: &[u8]) -> UserDirectoryError {
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), body_preview)
    };

    match status {
        StatusCode::NOT_FOUND => UserDirectoryError::not_found(user_id),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            UserDirectoryError::timeout(message)
        }
        _ => UserDirectoryError::unavailable(message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
