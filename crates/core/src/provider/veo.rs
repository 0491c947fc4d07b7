//! Veo video generation API client.
//!
//! Talks to the generative language API's long-running-operation surface:
//! `predictLongRunning` starts a render, the operation endpoint reports
//! progress, and the returned file URI serves the bytes. Every call carries
//! the currently selected API key as a query parameter, read fresh from the
//! key provider so a key switched mid-session is picked up.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::{GeneratedVideo, JobHandle, ProviderError};
use super::GenerationProvider;
use crate::credential::KeyProvider;
use crate::generation::GenerationRequest;

/// Veo client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VeoConfig {
    /// API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds (default: 30). Applies to submit/poll;
    /// byte fetches get a longer allowance.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_model() -> String {
    "veo-3.1-fast-generate-preview".to_string()
}

fn default_timeout() -> u32 {
    30
}

impl Default for VeoConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: default_timeout(),
        }
    }
}

/// HTTP client for the Veo long-running generation API.
pub struct VeoClient {
    client: Client,
    config: VeoConfig,
    keys: Arc<dyn KeyProvider>,
}

impl VeoClient {
    /// Create a new Veo client.
    pub fn new(config: VeoConfig, keys: Arc<dyn KeyProvider>) -> Result<Self, ProviderError> {
        if config.base_url.is_empty() {
            return Err(ProviderError::NotConfigured(
                "provider base_url is required".to_string(),
            ));
        }
        if config.model.is_empty() {
            return Err(ProviderError::NotConfigured(
                "provider model is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs as u64))
            .build()?;

        Ok(Self {
            client,
            config,
            keys,
        })
    }

    async fn current_key(&self) -> Result<String, ProviderError> {
        self.keys.key().await.ok_or_else(|| {
            ProviderError::NotConfigured("no API key selected".to_string())
        })
    }

    async fn error_for_status(response: reqwest::Response) -> ProviderError {
        let status = response.status();
        let message = response.text().await.unwrap_or_else(|_| {
            status.canonical_reason().unwrap_or("request failed").to_string()
        });
        ProviderError::Api {
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait]
impl GenerationProvider for VeoClient {
    fn name(&self) -> &str {
        "veo"
    }

    async fn submit(&self, request: &GenerationRequest) -> Result<JobHandle, ProviderError> {
        let key = self.current_key().await?;
        let url = format!(
            "{}/models/{}:predictLongRunning",
            self.config.base_url, self.config.model
        );

        debug!("Veo submit: model={}", self.config.model);

        let body = PredictRequest {
            instances: vec![Instance {
                prompt: request.prompt.clone(),
            }],
            parameters: Parameters {
                aspect_ratio: request.aspect_ratio.as_keyword().to_string(),
                resolution: request.resolution.as_keyword().to_string(),
                sample_count: 1,
            },
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", key.as_str())])
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_for_status(response).await);
        }

        let operation: OperationResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(format!("invalid submit response: {}", e)))?;

        Ok(operation.into_handle())
    }

    async fn poll(&self, handle: &JobHandle) -> Result<JobHandle, ProviderError> {
        let key = self.current_key().await?;
        let url = format!("{}/{}", self.config.base_url, handle.id);

        debug!("Veo poll: operation={}", handle.id);

        let response = self
            .client
            .get(&url)
            .query(&[("key", key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_for_status(response).await);
        }

        let operation: OperationResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(format!("invalid operation response: {}", e)))?;

        Ok(operation.into_handle())
    }

    async fn fetch(&self, uri: &str) -> Result<Bytes, ProviderError> {
        let key = self.current_key().await?;

        debug!("Veo fetch: uri={}", uri);

        // Video payloads can be large; don't reuse the short API timeout.
        let response = self
            .client
            .get(uri)
            .query(&[("key", key.as_str())])
            .timeout(Duration::from_secs(600))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string(),
            });
        }

        Ok(response.bytes().await?)
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
struct PredictRequest {
    instances: Vec<Instance>,
    parameters: Parameters,
}

#[derive(Debug, Serialize)]
struct Instance {
    prompt: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Parameters {
    aspect_ratio: String,
    resolution: String,
    sample_count: u32,
}

#[derive(Debug, Deserialize)]
struct OperationResponse {
    name: String,
    #[serde(default)]
    done: bool,
    #[serde(default)]
    error: Option<OperationError>,
    #[serde(default)]
    response: Option<OperationResult>,
}

impl OperationResponse {
    fn into_handle(self) -> JobHandle {
        let results = self
            .response
            .and_then(|r| r.generate_video_response)
            .map(|r| {
                r.generated_samples
                    .into_iter()
                    .map(|s| GeneratedVideo {
                        uri: s.video.and_then(|v| v.uri),
                    })
                    .collect()
            })
            .unwrap_or_default();

        JobHandle {
            id: self.name,
            done: self.done,
            error: self.error.and_then(|e| e.message),
            results,
        }
    }
}

#[derive(Debug, Deserialize)]
struct OperationError {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OperationResult {
    #[serde(default)]
    generate_video_response: Option<GenerateVideoResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateVideoResponse {
    #[serde(default)]
    generated_samples: Vec<GeneratedSample>,
}

#[derive(Debug, Deserialize)]
struct GeneratedSample {
    #[serde(default)]
    video: Option<VideoRef>,
}

#[derive(Debug, Deserialize)]
struct VideoRef {
    #[serde(default)]
    uri: Option<String>,
}
