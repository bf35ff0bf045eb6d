mod polling;
mod rate_limiter;
mod transcript_cache;
mod transcription_service;

pub use polling::{PollPolicy, PollingError, PollingOrchestrator};
pub use rate_limiter::SlidingWindowRateLimiter;
pub use transcript_cache::TranscriptCache;
pub use transcription_service::{TranscribeError, TranscribeOutcome, TranscriptionService};
