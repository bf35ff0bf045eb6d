use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::application::ports::{AssetResolver, ResolverError};
use crate::domain::{MediaSource, ResolvedMedia};

/// Resolver stand-in for tests and local runs: returns a fixed result and
/// counts how often it was asked.
pub struct MockAssetResolver {
    media: ResolvedMedia,
    calls: AtomicUsize,
}

impl MockAssetResolver {
    pub fn with_video_source(url: &str) -> Self {
        Self::with_media(ResolvedMedia::video(vec![MediaSource {
            url: url.to_string(),
            quality: Some("hd".to_string()),
        }]))
    }

    pub fn with_media(media: ResolvedMedia) -> Self {
        Self {
            media,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn resolve_calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AssetResolver for MockAssetResolver {
    async fn resolve(&self, _url: &str) -> Result<ResolvedMedia, ResolverError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.media.clone())
    }
}
