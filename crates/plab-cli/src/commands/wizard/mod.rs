//! `plab wizard`: the four research steps driven by one [`WizardController`].

mod prompts;

use anyhow::bail;
use chrono::Utc;
use plab_client::pacing::run_with_timeline;
use plab_core::entities::{QuestionDraft, suggested_questions};
use plab_core::enums::{ReportFormat, WizardStep};
use plab_core::errors::CoreError;
use plab_core::export::ExportDocument;
use plab_core::normalize::NormalizedReport;
use plab_core::wizard::WizardController;

use crate::cli::GlobalFlags;
use crate::commands::shared::export::write_export;
use crate::commands::shared::spinner::with_spinner;
use crate::context::AppContext;
use crate::output::report;
use crate::progress::Progress;
use crate::ui;

use prompts::{EditorExit, Finish};

/// How one pass through the wizard ended.
enum Flow {
    Restart,
    Quit,
}

/// Handle `plab wizard`.
pub async fn handle(ctx: &AppContext, _flags: &GlobalFlags) -> anyhow::Result<()> {
    if !ui::is_interactive() {
        bail!("plab wizard needs an interactive terminal; use setup, submit and insights for scripts");
    }

    let mut wizard = WizardController::new();
    loop {
        match run(&mut wizard, ctx).await? {
            Flow::Restart => wizard.reset(),
            Flow::Quit => return Ok(()),
        }
    }
}

async fn run(wizard: &mut WizardController, ctx: &AppContext) -> anyhow::Result<Flow> {
    if !setup_step(wizard, ctx).await? {
        return terminal_menu(wizard, ctx, None).await;
    }
    if !questions_step(wizard, ctx).await? {
        return Ok(Flow::Restart);
    }
    collecting_step(wizard, ctx).await?;
    let report = insights_step(wizard, ctx).await?;
    terminal_menu(wizard, ctx, report.as_ref()).await
}

/// Step 1. Returns `false` when the backend issued no session id, which
/// leaves reset as the only way forward.
async fn setup_step(wizard: &mut WizardController, ctx: &AppContext) -> anyhow::Result<bool> {
    println!("\n{}", report::step_header(WizardStep::Setup));

    let mut previous = None;
    loop {
        let profile = prompts::profile(previous.as_ref())?;
        let outcome = match with_spinner(
            "Generating personas...",
            "Research setup failed",
            ctx.client.setup_research(&profile),
        )
        .await
        {
            Ok(outcome) => outcome,
            Err(error) => {
                println!("  {error}");
                previous = Some(profile);
                continue;
            }
        };

        match wizard.complete_setup(profile.clone(), outcome.personas, outcome.session_id) {
            Ok(()) => {
                println!("\n{}", report::render_personas(wizard.personas()));
                return Ok(true);
            }
            Err(CoreError::MissingSession) => {
                println!("  {}", CoreError::MissingSession);
                return Ok(false);
            }
            Err(error) => {
                println!("  {error}");
                previous = Some(profile);
            }
        }
    }
}

/// Step 2. Returns `false` when the user chose to start over.
async fn questions_step(wizard: &mut WizardController, ctx: &AppContext) -> anyhow::Result<bool> {
    println!("\n{}", report::step_header(WizardStep::Questions));

    let product = wizard
        .profile()
        .map(|profile| profile.product.clone())
        .unwrap_or_default();
    let suggestions = match ctx.client.question_recommendations().await {
        Ok(list) if !list.is_empty() => list,
        Ok(_) => suggested_questions(&product),
        Err(error) => {
            tracing::warn!(%error, "using built-in question templates");
            suggested_questions(&product)
        }
    };
    let timeline = ctx.config.progress.timeline()?;
    let mut draft = QuestionDraft::new();

    loop {
        if prompts::edit_questions(&mut draft, &suggestions)? == EditorExit::Restart {
            return Ok(false);
        }
        let questions = match draft.submission() {
            Ok(questions) => questions,
            Err(error) => {
                println!("  {error}");
                continue;
            }
        };
        let session = wizard.require_session()?.clone();

        let bar = Progress::timeline();
        let result = run_with_timeline(
            &timeline,
            ctx.client.submit_questions(&session, &questions),
            |sample| bar.set_sample(sample),
        )
        .await;

        match result {
            Ok(_) => {
                bar.finish_ok("Responses collected");
                wizard.complete_questions()?;
                return Ok(true);
            }
            Err(error) => {
                bar.finish_err("Submission failed");
                println!("  {error}");
            }
        }
    }
}

/// Step 3: a fixed wait; the backend is not polled.
async fn collecting_step(wizard: &mut WizardController, ctx: &AppContext) -> anyhow::Result<()> {
    println!("\n{}", report::step_header(WizardStep::Collecting));

    let delay = ctx.config.wizard.processing_delay();
    let spinner = Progress::spinner("Preparing insights...");
    tokio::time::sleep(delay).await;
    spinner.finish_clear();

    wizard.finish_processing()?;
    Ok(())
}

/// Step 4. `None` when the report could not be loaded; the error is shown
/// in place of the report.
async fn insights_step(
    wizard: &WizardController,
    ctx: &AppContext,
) -> anyhow::Result<Option<NormalizedReport>> {
    println!("\n{}", report::step_header(WizardStep::Insights));

    let session = wizard.require_session()?;
    match with_spinner(
        "Analyzing responses...",
        "Analysis failed",
        ctx.client.analyze_insights(session),
    )
    .await
    {
        Ok(raw) => {
            let normalized = NormalizedReport::from(&raw);
            println!("\n{}", report::render_report(&normalized));
            Ok(Some(normalized))
        }
        Err(error) => {
            println!("  Could not load insights: {error}");
            Ok(None)
        }
    }
}

async fn terminal_menu(
    wizard: &WizardController,
    ctx: &AppContext,
    report: Option<&NormalizedReport>,
) -> anyhow::Result<Flow> {
    let dir = &ctx.config.wizard.download_dir;

    loop {
        let choice = prompts::finish(report.is_some())?;
        let format = match choice {
            Finish::Restart => return Ok(Flow::Restart),
            Finish::Quit => return Ok(Flow::Quit),
            Finish::ExportJson => {
                if let Some(report) = report {
                    let doc =
                        ExportDocument::new(wizard.profile(), wizard.personas(), report, Utc::now());
                    match write_export(&doc, dir).await {
                        Ok((path, _)) => println!("  Saved {}", path.display()),
                        Err(error) => println!("  {error:#}"),
                    }
                }
                continue;
            }
            Finish::DownloadPdf => ReportFormat::Pdf,
            Finish::DownloadJson => ReportFormat::Json,
        };

        let session = wizard.require_session()?;
        let saved = match with_spinner(
            "Downloading report...",
            "Download failed",
            ctx.client.download_report(session, format),
        )
        .await
        {
            Ok(downloaded) => downloaded.save_to(dir).await,
            Err(error) => Err(error),
        };
        match saved {
            Ok(path) => println!("  Saved {}", path.display()),
            Err(error) => println!("  {error}"),
        }
    }
}
