use plab_client::pacing::run_with_timeline;
use plab_core::entities::QuestionDraft;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SubmitArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct SubmitView<'a> {
    research_id: &'a str,
    status: Option<String>,
    questions: Vec<String>,
}

/// Handle `plab submit`.
pub async fn handle(args: &SubmitArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let draft: QuestionDraft = args.questions.iter().map(String::as_str).collect();
    let questions = draft.submission()?;
    let timeline = ctx.config.progress.timeline()?;

    let bar = Progress::timeline();
    let result = run_with_timeline(
        &timeline,
        ctx.client.submit_questions(&args.research_id, &questions),
        |sample| bar.set_sample(sample),
    )
    .await;

    let ack = match result {
        Ok(ack) => {
            bar.finish_ok("Responses collected");
            ack
        }
        Err(error) => {
            bar.finish_err("Submission failed");
            return Err(error.into());
        }
    };

    output(
        &SubmitView {
            research_id: args.research_id.as_str(),
            status: ack.status,
            questions,
        },
        flags.format,
    )
}
