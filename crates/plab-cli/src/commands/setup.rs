use plab_core::wizard::{WizardController, WizardSnapshot};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SetupArgs;
use crate::commands::shared::spinner::with_spinner;
use crate::context::AppContext;
use crate::output::{output_with, report};

/// Handle `plab setup`.
pub async fn handle(args: &SetupArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let profile = args.profile();
    profile.validate()?;

    let outcome = with_spinner(
        "Generating personas...",
        "Research setup failed",
        ctx.client.setup_research(&profile),
    )
    .await?;

    let mut wizard = WizardController::new();
    wizard.complete_setup(profile, outcome.personas, outcome.session_id)?;
    let snapshot = wizard.snapshot();

    output_with(&snapshot, flags.format, || render(&snapshot))
}

fn render(snapshot: &WizardSnapshot) -> String {
    let research_id = snapshot
        .session_id
        .as_ref()
        .map_or("-", |id| id.as_str());
    format!(
        "Research id: {research_id}\n\n{}\n\nNext: plab submit {research_id} \"<question>\"...",
        report::render_personas(&snapshot.personas)
    )
}
