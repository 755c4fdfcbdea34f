use clap::Parser;
use color_eyre::Result;
use kudos_tui::{Config, Profile, cli::Cli};

fn main() -> Result<()> {
    // Set up error reporting with color-eyre
    color_eyre::install()?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Determine profile: --dev flag enables dev mode, otherwise use prod
    let profile = if cli.dev { Profile::Dev } else { Profile::Prod };

    // Logging goes to a file; a failure here is not worth refusing to start over
    if let Err(e) = kudos_tui::utils::init_logger(profile) {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }

    // Load configuration with the determined profile
    let config = Config::load_with_profile(profile)?;

    let app = kudos_tui::tui::App::new(config, !cli.fresh);
    kudos_tui::tui::run_event_loop(app)?;

    Ok(())
}
