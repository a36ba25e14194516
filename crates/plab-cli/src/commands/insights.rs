use plab_core::normalize::NormalizedReport;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InsightsArgs;
use crate::commands::shared::spinner::with_spinner;
use crate::context::AppContext;
use crate::output::{output_with, report};

/// Handle `plab insights`.
pub async fn handle(
    args: &InsightsArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let raw = with_spinner(
        "Analyzing responses...",
        "Analysis failed",
        ctx.client.analyze_insights(&args.research_id),
    )
    .await?;
    let normalized = NormalizedReport::from(&raw);

    output_with(&normalized, flags.format, || report::render_report(&normalized))
}
