use anyhow::{Context, bail};
use plab_config::PlabConfig;

use crate::cli::GlobalFlags;

/// Load layered config, then apply `--api-url`.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<PlabConfig> {
    if let Some(path) = &flags.config
        && !path.is_file()
    {
        bail!("config file '{}' does not exist", path.display());
    }

    let mut config = PlabConfig::load_with_dotenv(flags.config.as_deref())
        .context("failed to load configuration")?;

    if let Some(url) = &flags.api_url {
        config.api.base_url.clone_from(url);
        config
            .validate()
            .context("invalid --api-url")?;
    }

    tracing::debug!(base_url = config.api.base_url(), "configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            quiet: true,
            verbose: false,
            config: None,
            api_url: None,
        }
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let mut flags = flags();
        flags.config = Some("/definitely/not/here/plab.toml".into());
        let err = load_config(&flags).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn invalid_api_url_override_is_rejected() {
        let mut flags = flags();
        flags.api_url = Some("localhost:5001".into());
        let err = load_config(&flags).unwrap_err();
        assert!(format!("{err:#}").contains("--api-url"));
    }

    #[test]
    fn explicit_config_and_override_apply() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plab.toml");
        std::fs::write(&path, "[wizard]\nprocessing_delay_ms = 10\n").unwrap();

        let mut flags = flags();
        flags.config = Some(path);
        flags.api_url = Some("https://research.example.com/".into());

        let config = load_config(&flags).unwrap();
        assert_eq!(config.wizard.processing_delay_ms, 10);
        assert_eq!(config.api.base_url(), "https://research.example.com");
    }
}
