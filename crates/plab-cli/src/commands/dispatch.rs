use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Wizard => commands::wizard::handle(ctx, flags).await,
        Commands::Setup(args) => commands::setup::handle(&args, ctx, flags).await,
        Commands::Recommend(args) => commands::recommend::handle(&args, ctx, flags).await,
        Commands::Submit(args) => commands::submit::handle(&args, ctx, flags).await,
        Commands::Insights(args) => commands::insights::handle(&args, ctx, flags).await,
        Commands::Download(args) => commands::download::handle(&args, ctx, flags).await,
        Commands::Export(args) => commands::export::handle(&args, ctx, flags).await,
    }
}
