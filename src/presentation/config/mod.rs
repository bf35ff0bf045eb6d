mod settings;

pub use settings::{
    CacheSettings, ProviderSettings, RateLimitSettings, ResolverSettings, ServerSettings, Settings,
    TranscriptionSettings,
};
