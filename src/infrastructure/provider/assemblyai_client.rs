use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ProviderError, TranscriptionProvider};
use crate::domain::{JobStatus, TranscriptionJob};

/// AssemblyAI transcript API client. Jobs are created with speed-optimized
/// options and language auto-detection; auxiliary analysis features stay off
/// to keep provider-side latency and cost down.
pub struct AssemblyAiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl AssemblyAiClient {
    pub fn new(base_url: &str, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn decode(&self, resource: TranscriptResource) -> Result<TranscriptionJob, ProviderError> {
        let id = resource
            .id
            .ok_or_else(|| ProviderError::InvalidResponse("missing transcript id".to_string()))?;
        let status = resource
            .status
            .unwrap_or_else(|| "queued".to_string())
            .parse::<JobStatus>()
            .map_err(ProviderError::InvalidResponse)?;

        Ok(TranscriptionJob {
            id,
            status,
            text: resource.text,
            error: resource.error,
        })
    }
}

#[derive(Serialize)]
struct SubmitRequest<'a> {
    audio_url: &'a str,
    speed_boost: bool,
    language_detection: bool,
    punctuate: bool,
    format_text: bool,
}

#[derive(Deserialize)]
struct TranscriptResource {
    id: Option<String>,
    status: Option<String>,
    text: Option<String>,
    error: Option<String>,
}

#[async_trait]
impl TranscriptionProvider for AssemblyAiClient {
    async fn submit(&self, audio_url: &str) -> Result<TranscriptionJob, ProviderError> {
        let url = format!("{}/transcript", self.base_url);

        tracing::debug!("Submitting transcription job");

        let response = self
            .client
            .post(&url)
            .header("authorization", &self.api_key)
            .json(&SubmitRequest {
                audio_url,
                speed_boost: true,
                language_detection: true,
                punctuate: true,
                format_text: true,
            })
            .send()
            .await
            .map_err(|e| ProviderError::ApiRequestFailed(format!("request: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::ApiRequestFailed(format!("body: {}", e)))?;

        let resource: TranscriptResource = match serde_json::from_str(&body) {
            Ok(r) => r,
            Err(_) if !status.is_success() => {
                return Err(ProviderError::ApiRequestFailed(format!(
                    "status {}: {}",
                    status, body
                )));
            }
            Err(e) => {
                return Err(ProviderError::InvalidResponse(format!(
                    "parse response: {}",
                    e
                )));
            }
        };

        if resource.id.is_none() {
            let reason = resource
                .error
                .unwrap_or_else(|| format!("status {}: {}", status, body));
            return Err(ProviderError::SubmissionRejected(reason));
        }

        self.decode(resource)
    }

    async fn poll(&self, job_id: &str) -> Result<TranscriptionJob, ProviderError> {
        let url = format!("{}/transcript/{}", self.base_url, job_id);

        let response = self
            .client
            .get(&url)
            .header("authorization", &self.api_key)
            .send()
            .await
            .map_err(|e| ProviderError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ProviderError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let resource: TranscriptResource = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("parse response: {}", e)))?;

        self.decode(resource)
    }
}
