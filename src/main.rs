use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use tikscribe::application::services::{
    PollPolicy, SlidingWindowRateLimiter, TranscriptCache, TranscriptionService,
};
use tikscribe::infrastructure::observability::{TracingConfig, init_tracing};
use tikscribe::infrastructure::provider::AssemblyAiClient;
use tikscribe::infrastructure::resolver::TikwmResolver;
use tikscribe::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(TracingConfig::default(), settings.server.port);

    if settings.provider.api_key.is_empty() {
        tracing::warn!("ASSEMBLYAI_API_KEY is not set; transcription submissions will be rejected upstream");
    }

    let resolver = Arc::new(TikwmResolver::new(&settings.resolver.base_url));
    let provider = Arc::new(AssemblyAiClient::new(
        &settings.provider.base_url,
        settings.provider.api_key.clone(),
    ));

    let cache = Arc::new(TranscriptCache::new(Duration::from_secs(
        settings.cache.retention_secs,
    )));
    let _sweeper = cache.spawn_sweeper(Duration::from_secs(settings.cache.sweep_interval_secs));

    let rate_limiter = Arc::new(SlidingWindowRateLimiter::new(
        Duration::from_secs(settings.rate_limit.window_secs),
        settings.rate_limit.max_requests,
    ));

    let poll_policy = PollPolicy {
        initial_interval: Duration::from_millis(settings.transcription.poll_initial_ms),
        max_interval: Duration::from_millis(settings.transcription.poll_max_ms),
        max_attempts: settings.transcription.poll_max_attempts,
        ..PollPolicy::default()
    };

    let transcription_service = Arc::new(TranscriptionService::new(
        resolver,
        provider,
        cache,
        rate_limiter,
        poll_policy,
        Duration::from_secs(settings.transcription.deadline_secs),
    ));

    let state = AppState {
        transcription_service,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
