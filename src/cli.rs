use clap::Parser;

#[derive(Parser)]
#[command(name = "kudos")]
#[command(about = "A task tracker that pays out points and stickers for finished tasks")]
#[command(version)]
pub struct Cli {
    /// Use development mode (uses a separate dev config directory)
    #[arg(long)]
    pub dev: bool,

    /// Start with an empty board instead of the demo tasks
    #[arg(long)]
    pub fresh: bool,
}
