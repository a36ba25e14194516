//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed cwd and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use plab_config::PlabConfig;
use pretty_assertions::assert_eq;
use std::path::Path;
use std::time::Duration;

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://lab.example.com"
timeout_secs = 15

[wizard]
processing_delay_ms = 5000
download_dir = "reports"

[progress]
stage_one_ms = 200
stage_two_ms = 400
stage_three_ms = 600
cap_percent = 90.0
"#,
        )?;

        let config: PlabConfig = Figment::from(Serialized::defaults(PlabConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url(), "https://lab.example.com");
        assert_eq!(config.api.timeout(), Some(Duration::from_secs(15)));
        assert_eq!(config.wizard.processing_delay(), Duration::from_secs(5));
        assert_eq!(config.wizard.download_dir, Path::new("reports"));
        let timeline = config.progress.timeline().expect("valid timeline");
        assert_eq!(timeline.floor(), Duration::from_millis(1_200));
        assert!((timeline.cap - 90.0).abs() < f64::EPSILON);
        Ok(())
    });
}

#[test]
fn project_local_config_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".plab")?;
        jail.create_file(
            ".plab/config.toml",
            r#"
[api]
base_url = "http://127.0.0.1:9000"
"#,
        )?;

        let config = PlabConfig::load(None).expect("config loads");
        assert_eq!(config.api.base_url(), "http://127.0.0.1:9000");
        assert_eq!(config.wizard.processing_delay_ms, 3_000);
        Ok(())
    });
}

#[test]
fn explicit_file_beats_project_config() {
    Jail::expect_with(|jail| {
        jail.create_dir(".plab")?;
        jail.create_file(
            ".plab/config.toml",
            "[api]\nbase_url = \"http://project:1\"\n",
        )?;
        jail.create_file("custom.toml", "[api]\nbase_url = \"http://explicit:2\"\n")?;

        let config = PlabConfig::load(Some(Path::new("custom.toml"))).expect("config loads");
        assert_eq!(config.api.base_url(), "http://explicit:2");
        Ok(())
    });
}

#[test]
fn invalid_cap_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_file("bad.toml", "[progress]\ncap_percent = 100.0\n")?;

        let err = PlabConfig::load(Some(Path::new("bad.toml"))).unwrap_err();
        assert!(err.to_string().contains("progress.cap_percent"));
        Ok(())
    });
}
