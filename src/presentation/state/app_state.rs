use std::sync::Arc;

use crate::application::ports::{AssetResolver, TranscriptionProvider};
use crate::application::services::TranscriptionService;

pub struct AppState<R, P>
where
    R: AssetResolver,
    P: TranscriptionProvider,
{
    pub transcription_service: Arc<TranscriptionService<R, P>>,
}

impl<R, P> Clone for AppState<R, P>
where
    R: AssetResolver,
    P: TranscriptionProvider,
{
    fn clone(&self) -> Self {
        Self {
            transcription_service: Arc::clone(&self.transcription_service),
        }
    }
}
