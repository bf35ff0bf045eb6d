mod asset_resolver;
mod transcription_provider;

pub use asset_resolver::{AssetResolver, ResolverError};
pub use transcription_provider::{ProviderError, TranscriptionProvider};
