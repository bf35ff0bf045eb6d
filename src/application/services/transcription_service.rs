use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{AssetResolver, ProviderError, ResolverError, TranscriptionProvider};
use crate::application::services::polling::{PollPolicy, PollingError, PollingOrchestrator};
use crate::application::services::rate_limiter::SlidingWindowRateLimiter;
use crate::application::services::transcript_cache::TranscriptCache;

#[derive(Debug, Clone)]
pub struct TranscribeOutcome {
    pub transcript: String,
    pub cached: bool,
}

/// Request coordinator: rate-limit admission, URL validation, cache lookup,
/// asset resolution, submit-and-poll under a wall-clock deadline, cache
/// write-back. The cache is only written on full success.
pub struct TranscriptionService<R, P>
where
    R: AssetResolver,
    P: TranscriptionProvider,
{
    resolver: Arc<R>,
    orchestrator: PollingOrchestrator<P>,
    cache: Arc<TranscriptCache>,
    rate_limiter: Arc<SlidingWindowRateLimiter>,
    deadline: Duration,
}

impl<R, P> TranscriptionService<R, P>
where
    R: AssetResolver,
    P: TranscriptionProvider,
{
    pub fn new(
        resolver: Arc<R>,
        provider: Arc<P>,
        cache: Arc<TranscriptCache>,
        rate_limiter: Arc<SlidingWindowRateLimiter>,
        poll_policy: PollPolicy,
        deadline: Duration,
    ) -> Self {
        Self {
            resolver,
            orchestrator: PollingOrchestrator::new(provider, poll_policy),
            cache,
            rate_limiter,
            deadline,
        }
    }

    pub async fn transcribe(
        &self,
        client_id: &str,
        url: Option<&str>,
    ) -> Result<TranscribeOutcome, TranscribeError> {
        if !self.rate_limiter.admit(client_id) {
            tracing::warn!(client = %client_id, "Rate limit exceeded");
            return Err(TranscribeError::RateLimited);
        }

        let url = match url {
            Some(u) if !u.trim().is_empty() => u,
            _ => return Err(TranscribeError::MissingUrl),
        };

        if let Some(transcript) = self.cache.get(url) {
            tracing::info!(url = %url, "Serving transcript from cache");
            return Ok(TranscribeOutcome {
                transcript,
                cached: true,
            });
        }

        // Dropping the future on elapse cancels the in-flight upstream calls.
        let transcript =
            match tokio::time::timeout(self.deadline, self.resolve_and_transcribe(url)).await {
                Ok(result) => result?,
                Err(_) => {
                    tracing::warn!(url = %url, deadline_secs = self.deadline.as_secs(), "Transcription deadline elapsed");
                    return Err(TranscribeError::DeadlineExceeded);
                }
            };

        self.cache.put(url, transcript.clone());

        Ok(TranscribeOutcome {
            transcript,
            cached: false,
        })
    }

    async fn resolve_and_transcribe(&self, url: &str) -> Result<String, TranscribeError> {
        let media = self.resolver.resolve(url).await?;

        let source = media
            .first_video_source()
            .ok_or(TranscribeError::NoPlayableSource)?;
        tracing::debug!(source = %source.url, "Resolved playable video source");

        let transcript = self.orchestrator.run(&source.url).await?;
        Ok(transcript)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranscribeError {
    #[error("Missing TikTok URL in request body")]
    MissingUrl,
    #[error("Too many requests. Please try again later.")]
    RateLimited,
    #[error("No playable source found")]
    NoPlayableSource,
    #[error("{0}")]
    Resolution(#[from] ResolverError),
    #[error("{0}")]
    Submission(ProviderError),
    #[error("{0}")]
    Provider(ProviderError),
    #[error("Transcription failed: {0}")]
    JobFailed(String),
    #[error("Transcription is taking longer than expected. Please try again later.")]
    PollBudgetExceeded,
    #[error("Transcription took too long to complete. Please try again later.")]
    DeadlineExceeded,
}

impl From<PollingError> for TranscribeError {
    fn from(e: PollingError) -> Self {
        match e {
            PollingError::Submission(e) => TranscribeError::Submission(e),
            PollingError::Poll(e) => TranscribeError::Provider(e),
            PollingError::JobFailed(reason) => TranscribeError::JobFailed(reason),
            PollingError::MissingTranscript => TranscribeError::Provider(
                ProviderError::InvalidResponse("completed job carried no transcript text".into()),
            ),
            PollingError::AttemptsExhausted(_) => TranscribeError::PollBudgetExceeded,
        }
    }
}
