use chrono::Utc;
use plab_core::export::ExportDocument;
use plab_core::normalize::NormalizedReport;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExportArgs;
use crate::commands::shared::export::{SavedFile, write_export};
use crate::commands::shared::spinner::with_spinner;
use crate::context::AppContext;
use crate::output::output;

/// Handle `plab export`.
///
/// Outside the wizard there is no local profile, so `research_data` is null.
pub async fn handle(args: &ExportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let dir = args
        .out_dir
        .as_deref()
        .unwrap_or(&ctx.config.wizard.download_dir);

    let raw = with_spinner(
        "Fetching insights...",
        "Analysis failed",
        ctx.client.analyze_insights(&args.research_id),
    )
    .await?;
    let doc = ExportDocument::new(None, &[], &NormalizedReport::from(&raw), Utc::now());
    let (path, bytes) = write_export(&doc, dir).await?;

    output(&SavedFile::new(&path, bytes), flags.format)
}
