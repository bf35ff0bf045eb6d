mod assemblyai_client;
mod mock_provider;

pub use assemblyai_client::AssemblyAiClient;
pub use mock_provider::MockTranscriptionProvider;
