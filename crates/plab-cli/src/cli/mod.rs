use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `plab` binary.
#[derive(Debug, Parser)]
#[command(
    name = "plab",
    version,
    about = "Persona Lab - user research with synthetic personas"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra config file layered above project and user config
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL, overriding `api.base_url`
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            config: self.config.clone(),
            api_url: self.api_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use plab_core::enums::{AgeRange, GenderFilter, ReportFormat};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn default_format_is_table() {
        let cli = Cli::try_parse_from(["plab", "wizard"]).expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Table);
        assert!(matches!(cli.command, Commands::Wizard));
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "plab",
            "--format",
            "json",
            "--api-url",
            "http://10.0.0.5:5001",
            "--verbose",
            "insights",
            "res-1",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.api_url.as_deref(), Some("http://10.0.0.5:5001"));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Insights(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["plab", "recommend", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Recommend(_)));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["plab", "--format", "xml", "wizard"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn setup_parses_filters() {
        let cli = Cli::try_parse_from([
            "plab",
            "setup",
            "--product",
            "YouTube",
            "--target",
            "commuters",
            "--age",
            "26-30",
            "--gender",
            "female",
        ])
        .expect("cli should parse");

        let Commands::Setup(args) = cli.command else {
            panic!("expected setup");
        };
        let profile = args.profile();
        assert_eq!(profile.product, "YouTube");
        assert_eq!(profile.age_range, Some(AgeRange::From26To30));
        assert_eq!(profile.gender, Some(GenderFilter::Female));
    }

    #[test]
    fn setup_requires_product_and_target() {
        assert!(Cli::try_parse_from(["plab", "setup", "--product", "YouTube"]).is_err());
        assert!(
            Cli::try_parse_from(["plab", "setup", "--product", "x", "--target", "y", "--age", "99"])
                .is_err()
        );
    }

    #[test]
    fn submit_requires_at_least_one_question() {
        assert!(Cli::try_parse_from(["plab", "submit", "res-1"]).is_err());
        let cli = Cli::try_parse_from(["plab", "submit", "res-1", "Why?", "How?"])
            .expect("cli should parse");
        let Commands::Submit(args) = cli.command else {
            panic!("expected submit");
        };
        assert_eq!(args.research_id.as_str(), "res-1");
        assert_eq!(args.questions, vec!["Why?", "How?"]);
    }

    #[test]
    fn blank_research_id_is_rejected() {
        assert!(Cli::try_parse_from(["plab", "insights", "  "]).is_err());
    }

    #[test]
    fn download_defaults_to_pdf() {
        let cli = Cli::try_parse_from(["plab", "download", "res-1"]).expect("cli should parse");
        let Commands::Download(args) = cli.command else {
            panic!("expected download");
        };
        assert_eq!(args.report_format, ReportFormat::Pdf);
        assert!(args.out_dir.is_none());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["plab", "--config", "/tmp/plab.toml", "wizard"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(
            flags.config.as_deref(),
            Some(std::path::Path::new("/tmp/plab.toml"))
        );
    }
}
