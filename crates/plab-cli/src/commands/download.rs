use crate::cli::GlobalFlags;
use crate::cli::root_commands::DownloadArgs;
use crate::commands::shared::export::SavedFile;
use crate::commands::shared::spinner::with_spinner;
use crate::context::AppContext;
use crate::output::output;

/// Handle `plab download`.
pub async fn handle(
    args: &DownloadArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let dir = args
        .out_dir
        .as_deref()
        .unwrap_or(&ctx.config.wizard.download_dir);

    let report = with_spinner(
        "Downloading report...",
        "Download failed",
        ctx.client.download_report(&args.research_id, args.report_format),
    )
    .await?;
    let path = report.save_to(dir).await?;

    output(&SavedFile::new(&path, report.bytes.len()), flags.format)
}
