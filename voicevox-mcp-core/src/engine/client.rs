//! HTTP client for the VOICEVOX engine

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use std::time::Duration;
use tracing::debug;

use super::provider::SpeechEngine;
use super::types::{AudioQuery, Speaker, VoiceParameters};
use crate::error::ToolError;

pub const HEALTH_TIMEOUT: Duration = Duration::from_secs(2);
pub const LIST_TIMEOUT: Duration = Duration::from_secs(10);
pub const SYNTHESIS_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Clone)]
pub struct VoicevoxEngine {
    client: Client,
    base_url: String,
}

impl VoicevoxEngine {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and turn transport failures and non-2xx statuses into
    /// tool errors.
    async fn send(&self, request: RequestBuilder) -> Result<Response, ToolError> {
        let response = request.send().await.map_err(|e| self.classify(e))?;
        response.error_for_status().map_err(|e| self.classify(e))
    }

    fn classify(&self, err: reqwest::Error) -> ToolError {
        if err.is_connect() {
            return ToolError::Connection {
                url: self.base_url.clone(),
            };
        }
        if let Some(status) = err.status() {
            return ToolError::HttpStatus(status.as_u16());
        }

        let kind = if err.is_timeout() {
            "Timeout"
        } else if err.is_decode() {
            "Decode"
        } else if err.is_body() {
            "Body"
        } else if err.is_request() {
            "Request"
        } else {
            "Http"
        };
        ToolError::Unclassified {
            kind: kind.to_string(),
            message: err.to_string(),
        }
    }
}

#[async_trait]
impl SpeechEngine for VoicevoxEngine {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn is_running(&self) -> bool {
        match self
            .client
            .get(self.url("/version"))
            .timeout(HEALTH_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => response.status() == reqwest::StatusCode::OK,
            Err(e) => {
                debug!(error = %e, url = %self.base_url, "Engine health check failed");
                false
            }
        }
    }

    async fn version(&self) -> Result<String, ToolError> {
        let response = self
            .send(self.client.get(self.url("/version")).timeout(HEALTH_TIMEOUT))
            .await?;
        response.json::<String>().await.map_err(|e| self.classify(e))
    }

    async fn speakers(&self) -> Result<Vec<Speaker>, ToolError> {
        let response = self
            .send(self.client.get(self.url("/speakers")).timeout(LIST_TIMEOUT))
            .await?;
        response
            .json::<Vec<Speaker>>()
            .await
            .map_err(|e| self.classify(e))
    }

    async fn synthesize(&self, text: &str, params: &VoiceParameters) -> Result<Vec<u8>, ToolError> {
        let speaker = params.speaker.to_string();

        let response = self
            .send(
                self.client
                    .post(self.url("/audio_query"))
                    .query(&[("text", text), ("speaker", speaker.as_str())])
                    .timeout(SYNTHESIS_TIMEOUT),
            )
            .await?;
        let mut query: AudioQuery = response.json().await.map_err(|e| self.classify(e))?;

        query.apply(params);
        debug!(speaker = params.speaker, "Audio query built, synthesizing");

        let response = self
            .send(
                self.client
                    .post(self.url("/synthesis"))
                    .query(&[("speaker", speaker.as_str())])
                    .json(&query)
                    .timeout(SYNTHESIS_TIMEOUT),
            )
            .await?;
        let bytes = response.bytes().await.map_err(|e| self.classify(e))?;

        Ok(bytes.to_vec())
    }
}
