use std::path::PathBuf;

use clap::{Args, Subcommand};
use plab_core::entities::ResearchProfile;
use plab_core::enums::{AgeRange, GenderFilter, ReportFormat};
use plab_core::ids::SessionId;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the interactive four-step research wizard.
    Wizard,
    /// Step 1: describe the product and audience, generate personas.
    Setup(SetupArgs),
    /// Print suggested research questions.
    Recommend(RecommendArgs),
    /// Step 2: submit questions for an existing research session.
    Submit(SubmitArgs),
    /// Step 4: fetch and print the insight report.
    Insights(InsightsArgs),
    /// Save the server-rendered report.
    Download(DownloadArgs),
    /// Write a local JSON export of the insight report.
    Export(ExportArgs),
}

fn parse_session_id(raw: &str) -> Result<SessionId, String> {
    SessionId::new(raw).ok_or_else(|| String::from("research id must not be blank"))
}

/// Arguments for `plab setup`.
#[derive(Clone, Debug, Args)]
pub struct SetupArgs {
    /// Product or service under research.
    #[arg(long)]
    pub product: String,
    /// Target audience.
    #[arg(long)]
    pub target: String,
    /// Age range: 20-25, 26-30, 31-35, 36-40, 41+
    #[arg(long)]
    pub age: Option<AgeRange>,
    /// Gender filter: all, male, female
    #[arg(long)]
    pub gender: Option<GenderFilter>,
    /// Occupation or field.
    #[arg(long, default_value = "")]
    pub occupation: String,
    /// Anything else the personas should know.
    #[arg(long, default_value = "")]
    pub context: String,
}

impl SetupArgs {
    #[must_use]
    pub fn profile(&self) -> ResearchProfile {
        ResearchProfile {
            product: self.product.trim().to_string(),
            target_audience: self.target.trim().to_string(),
            age_range: self.age,
            gender: self.gender,
            occupation: self.occupation.trim().to_string(),
            additional_context: self.context.trim().to_string(),
        }
    }
}

/// Arguments for `plab recommend`.
#[derive(Clone, Debug, Args)]
pub struct RecommendArgs {
    /// Fall back to built-in templates for this product if the backend fails.
    #[arg(long)]
    pub product: Option<String>,
}

/// Arguments for `plab submit`.
#[derive(Clone, Debug, Args)]
pub struct SubmitArgs {
    #[arg(value_parser = parse_session_id)]
    pub research_id: SessionId,
    /// Question texts, in order.
    #[arg(required = true, num_args = 1..)]
    pub questions: Vec<String>,
}

/// Arguments for `plab insights`.
#[derive(Clone, Debug, Args)]
pub struct InsightsArgs {
    #[arg(value_parser = parse_session_id)]
    pub research_id: SessionId,
}

/// Arguments for `plab download`.
#[derive(Clone, Debug, Args)]
pub struct DownloadArgs {
    #[arg(value_parser = parse_session_id)]
    pub research_id: SessionId,
    /// Report format: json or pdf
    #[arg(long, default_value = "pdf")]
    pub report_format: ReportFormat,
    /// Directory to save into (defaults to `wizard.download_dir`).
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

/// Arguments for `plab export`.
#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    #[arg(value_parser = parse_session_id)]
    pub research_id: SessionId,
    /// Directory to save into (defaults to `wizard.download_dir`).
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}
