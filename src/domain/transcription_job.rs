use super::JobStatus;

/// Snapshot of a remote transcription job. Never mutated locally; the
/// orchestrator replaces it with a fresh snapshot on every poll.
#[derive(Debug, Clone)]
pub struct TranscriptionJob {
    pub id: String,
    pub status: JobStatus,
    pub text: Option<String>,
    pub error: Option<String>,
}

impl TranscriptionJob {
    pub fn new(id: String, status: JobStatus) -> Self {
        Self {
            id,
            status,
            text: None,
            error: None,
        }
    }
}
