mod job_status;
mod media;
mod transcription_job;

pub use job_status::JobStatus;
pub use media::{MediaKind, MediaSource, ResolvedMedia};
pub use transcription_job::TranscriptionJob;
