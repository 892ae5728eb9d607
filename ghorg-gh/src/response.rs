//! Buffered GitHub responses and the success contract shared by the
//! repository endpoints.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::consts::BAD_CREDENTIALS;
use crate::error::Result;

/// A response whose body has been read in full, releasing the connection
#[derive(Debug)]
pub(crate) struct ApiResponse {
  pub(crate) status: StatusCode,
  pub(crate) body: String,
}

impl ApiResponse {
  pub(crate) async fn read(response: Response) -> Result<Self> {
    let status = response.status();
    debug!("GitHub API response status: {}", status);

    let body = response.text().await?;
    trace!("GitHub API response body: {}", body);

    Ok(Self { status, body })
  }

  /// The `message` field of a JSON object body, if there is one
  pub(crate) fn message(&self) -> Option<String> {
    let value = serde_json::from_str::<serde_json::Value>(&self.body).ok()?;
    value.get("message").and_then(|m| m.as_str()).map(str::to_string)
  }

  pub(crate) fn is_bad_credentials(&self) -> bool {
    self.message().as_deref() == Some(BAD_CREDENTIALS)
  }

  /// 200 or 201, and GitHub did not reject the token in the body
  pub(crate) fn is_success(&self) -> bool {
    matches!(self.status, StatusCode::OK | StatusCode::CREATED) && !self.is_bad_credentials()
  }

  pub(crate) fn json<T: DeserializeOwned>(&self) -> Result<T> {
    Ok(serde_json::from_str(&self.body)?)
  }
}
