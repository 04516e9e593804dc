//! Blocking HTTP implementation of [`MailApi`].

use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use url::Url;

use super::MailApi;
use crate::error::{Result, ViewerError};
use crate::model::{MessageDetail, MessageSummary};

/// Talks JSON over HTTP to a capture server.
#[derive(Debug, Clone)]
pub struct HttpMailApi {
    client: Client,
    base: Url,
}

impl HttpMailApi {
    /// Build a client for `base_url`. `timeout: None` lets requests wait forever.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base = Url::parse(base_url.trim())
            .map_err(|e| ViewerError::InvalidUrl(format!("{base_url}: {e}")))?;
        if !matches!(base.scheme(), "http" | "https") || base.cannot_be_a_base() {
            return Err(ViewerError::InvalidUrl(base_url.to_string()));
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("inboxview/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ViewerError::transport(base.as_str(), e))?;

        Ok(Self { client, base })
    }

    /// Base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Append path segments to the base URL, percent-encoding each one.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ViewerError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| ViewerError::transport(url.as_str(), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ViewerError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .map_err(|e| ViewerError::transport(url.as_str(), e))?;
        serde_json::from_str(&body).map_err(|source| ViewerError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

impl MailApi for HttpMailApi {
    fn list_summaries(&self) -> Result<Vec<MessageSummary>> {
        let url = self.endpoint(&["api", "emails"])?;
        let summaries: Vec<MessageSummary> = self.get_json(url)?;
        tracing::debug!(count = summaries.len(), "Fetched summaries");
        Ok(summaries)
    }

    fn get_detail(&self, id: &str) -> Result<MessageDetail> {
        let url = self.endpoint(&["api", "emails", id])?;
        let mut detail: MessageDetail = self.get_json(url)?;
        if detail.id.is_empty() {
            detail.id = id.to_string();
        }
        Ok(detail)
    }

    fn clear_all(&self) -> Result<()> {
        let url = self.endpoint(&["api", "clear"])?;
        let response = self
            .client
            .post(url.clone())
            .send()
            .map_err(|e| ViewerError::transport(url.as_str(), e))?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(url = %url, "Cleared all messages");
            Ok(())
        } else {
            Err(ViewerError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            })
        }
    }
}
