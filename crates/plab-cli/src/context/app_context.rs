use anyhow::Context;
use plab_client::ApiClient;
use plab_config::PlabConfig;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: PlabConfig,
    pub client: ApiClient,
}

impl AppContext {
    pub fn init(config: PlabConfig) -> anyhow::Result<Self> {
        let client = ApiClient::from_config(&config.api)
            .context("failed to initialize the backend HTTP client")?;
        Ok(Self { config, client })
    }
}
