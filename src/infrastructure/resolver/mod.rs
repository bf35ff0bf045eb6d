mod mock_resolver;
mod tikwm_resolver;

pub use mock_resolver::MockAssetResolver;
pub use tikwm_resolver::TikwmResolver;
