use plab_core::entities::suggested_questions;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RecommendArgs;
use crate::commands::shared::spinner::with_spinner;
use crate::context::AppContext;
use crate::output::output;

/// Handle `plab recommend`.
pub async fn handle(
    args: &RecommendArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let fetched = with_spinner(
        "Loading question suggestions...",
        "Could not load suggestions",
        ctx.client.question_recommendations(),
    )
    .await;

    let suggestions = match (fetched, args.product.as_deref()) {
        (Ok(list), _) if !list.is_empty() => list,
        (Ok(_), Some(product)) => suggested_questions(product),
        (Err(error), Some(product)) => {
            tracing::warn!(%error, "using built-in question templates");
            suggested_questions(product)
        }
        (Ok(list), None) => list,
        (Err(error), None) => return Err(error.into()),
    };

    output(&suggestions, flags.format)
}
