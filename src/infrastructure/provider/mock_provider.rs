use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;

use crate::application::ports::{ProviderError, TranscriptionProvider};
use crate::domain::{JobStatus, TranscriptionJob};

/// Scripted provider for tests: reports `processing` for a configured number
/// of polls, then `completed` (or a job-level error). Counts submit and poll
/// calls for assertions.
pub struct MockTranscriptionProvider {
    text: String,
    processing_polls: u32,
    fail_reason: Option<String>,
    submit_calls: AtomicU32,
    poll_calls: AtomicU32,
}

impl MockTranscriptionProvider {
    /// Completes on the poll after `processing_polls` non-terminal polls.
    pub fn completing_after(processing_polls: u32, text: &str) -> Self {
        Self {
            text: text.to_string(),
            processing_polls,
            fail_reason: None,
            submit_calls: AtomicU32::new(0),
            poll_calls: AtomicU32::new(0),
        }
    }

    pub fn failing_with(reason: &str) -> Self {
        Self {
            text: String::new(),
            processing_polls: 0,
            fail_reason: Some(reason.to_string()),
            submit_calls: AtomicU32::new(0),
            poll_calls: AtomicU32::new(0),
        }
    }

    pub fn never_completing() -> Self {
        Self::completing_after(u32::MAX, "")
    }

    pub fn submit_calls(&self) -> u32 {
        self.submit_calls.load(Ordering::SeqCst)
    }

    pub fn poll_calls(&self) -> u32 {
        self.poll_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranscriptionProvider for MockTranscriptionProvider {
    async fn submit(&self, _audio_url: &str) -> Result<TranscriptionJob, ProviderError> {
        self.submit_calls.fetch_add(1, Ordering::SeqCst);
        Ok(TranscriptionJob::new(
            "mock-transcript-1".to_string(),
            JobStatus::Queued,
        ))
    }

    async fn poll(&self, job_id: &str) -> Result<TranscriptionJob, ProviderError> {
        let polls = self.poll_calls.fetch_add(1, Ordering::SeqCst) + 1;

        if let Some(reason) = &self.fail_reason {
            let mut job = TranscriptionJob::new(job_id.to_string(), JobStatus::Error);
            job.error = Some(reason.clone());
            return Ok(job);
        }

        if polls > self.processing_polls {
            let mut job = TranscriptionJob::new(job_id.to_string(), JobStatus::Completed);
            job.text = Some(self.text.clone());
            Ok(job)
        } else {
            Ok(TranscriptionJob::new(
                job_id.to_string(),
                JobStatus::Processing,
            ))
        }
    }
}
