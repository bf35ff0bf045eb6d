use std::str::FromStr;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub resolver: ResolverSettings,
    pub provider: ProviderSettings,
    pub transcription: TranscriptionSettings,
    pub cache: CacheSettings,
    pub rate_limit: RateLimitSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResolverSettings {
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSettings {
    pub api_key: String,
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub deadline_secs: u64,
    pub poll_initial_ms: u64,
    pub poll_max_ms: u64,
    pub poll_max_attempts: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    pub retention_secs: u64,
    pub sweep_interval_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitSettings {
    pub window_secs: u64,
    pub max_requests: usize,
}

impl Settings {
    /// Build the configuration from environment variables, falling back to
    /// defaults for everything except the provider credential (which stays
    /// empty unless set; it is never hardcoded).
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: env_parse_or("SERVER_PORT", 3000),
            },
            resolver: ResolverSettings {
                base_url: env_or("RESOLVER_BASE_URL", "https://www.tikwm.com"),
            },
            provider: ProviderSettings {
                api_key: std::env::var("ASSEMBLYAI_API_KEY").unwrap_or_default(),
                base_url: env_or("ASSEMBLYAI_BASE_URL", "https://api.assemblyai.com/v2"),
            },
            transcription: TranscriptionSettings {
                deadline_secs: env_parse_or("TRANSCRIBE_DEADLINE_SECS", 55),
                poll_initial_ms: env_parse_or("POLL_INITIAL_MS", 1000),
                poll_max_ms: env_parse_or("POLL_MAX_MS", 4000),
                poll_max_attempts: env_parse_or("POLL_MAX_ATTEMPTS", 12),
            },
            cache: CacheSettings {
                retention_secs: env_parse_or("CACHE_RETENTION_SECS", 24 * 60 * 60),
                sweep_interval_secs: env_parse_or("CACHE_SWEEP_SECS", 60 * 60),
            },
            rate_limit: RateLimitSettings {
                window_secs: env_parse_or("RATE_LIMIT_WINDOW_SECS", 60),
                max_requests: env_parse_or("RATE_LIMIT_MAX_REQUESTS", 30),
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_parse_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
