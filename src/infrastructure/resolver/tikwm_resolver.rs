use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{AssetResolver, ResolverError};
use crate::domain::{MediaKind, MediaSource, ResolvedMedia};

/// Adapter for the tikwm.com resolution API. One GET per lookup; the API
/// returns watermark-free, HD and watermarked renditions for video posts,
/// or an image list for photo posts.
pub struct TikwmResolver {
    client: reqwest::Client,
    base_url: String,
}

impl TikwmResolver {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Deserialize)]
struct TikwmResponse {
    code: i32,
    msg: Option<String>,
    data: Option<TikwmData>,
}

#[derive(Deserialize)]
struct TikwmData {
    hdplay: Option<String>,
    play: Option<String>,
    wmplay: Option<String>,
    images: Option<Vec<String>>,
}

#[async_trait]
impl AssetResolver for TikwmResolver {
    async fn resolve(&self, url: &str) -> Result<ResolvedMedia, ResolverError> {
        let endpoint = format!("{}/api/", self.base_url);

        tracing::debug!(url = %url, "Resolving TikTok URL");

        let response = self
            .client
            .get(&endpoint)
            .query(&[("url", url), ("hd", "1")])
            .send()
            .await
            .map_err(|e| ResolverError::RequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ResolverError::RequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let body: TikwmResponse = response
            .json()
            .await
            .map_err(|e| ResolverError::InvalidResponse(format!("parse response: {}", e)))?;

        if body.code != 0 {
            return Err(ResolverError::RequestFailed(
                body.msg.unwrap_or_else(|| format!("code {}", body.code)),
            ));
        }

        let data = body
            .data
            .ok_or_else(|| ResolverError::InvalidResponse("missing data field".to_string()))?;

        if let Some(images) = data.images.filter(|i| !i.is_empty()) {
            let sources = images
                .into_iter()
                .map(|url| MediaSource { url, quality: None })
                .collect();
            return Ok(ResolvedMedia {
                kind: MediaKind::Image,
                sources,
            });
        }

        let mut sources = Vec::new();
        for (rendition, quality) in [
            (data.hdplay, "hd"),
            (data.play, "standard"),
            (data.wmplay, "watermarked"),
        ] {
            if let Some(url) = rendition.filter(|u| !u.is_empty()) {
                sources.push(MediaSource {
                    url,
                    quality: Some(quality.to_string()),
                });
            }
        }

        tracing::debug!(candidates = sources.len(), "Resolved video sources");

        Ok(ResolvedMedia::video(sources))
    }
}
