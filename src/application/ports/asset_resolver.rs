use async_trait::async_trait;

use crate::domain::ResolvedMedia;

/// Maps a TikTok page URL to downloadable media sources. Implemented by the
/// external resolution API adapter; consumed as a black box.
#[async_trait]
pub trait AssetResolver: Send + Sync {
    async fn resolve(&self, url: &str) -> Result<ResolvedMedia, ResolverError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ResolverError {
    #[error("resolver request failed: {0}")]
    RequestFailed(String),
    #[error("invalid resolver response: {0}")]
    InvalidResponse(String),
}
