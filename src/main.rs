use clap::Parser;
use color_eyre::eyre::WrapErr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use toolsapp::{
    app::App,
    cli::{Cli, Commands, is_toml},
    config::Settings,
    event::EventHandler,
    logging,
    service::SampleDataService,
};
use tracing::info;

const DEFAULT_TICK_RATE: Duration = Duration::from_millis(500);

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();
    match args.command {
        Commands::Run { config, debug } => run(config.as_deref(), debug).await,
        Commands::GenerateConfig { output } => {
            Settings::default()
                .save(&output)
                .wrap_err_with(|| format!("Failed to write {}", output.display()))?;
            println!("Configuration saved to {}", output.display());
            Ok(())
        }
        Commands::ShowConfig => {
            let settings = Settings::load(None)?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
            Ok(())
        }
    }
}

async fn run(config: Option<&Path>, debug: bool) -> color_eyre::Result<()> {
    if let Some(path) = config
        && !is_toml(path)
    {
        eprintln!("Unsupported config file format. Use TOML.");
        std::process::exit(1);
    }

    let mut settings = Settings::load(config)?;
    if debug {
        settings.debug = true;
    }
    logging::init(&settings)?;
    info!("Starting {} {}", settings.app_name, settings.version);

    let service = Arc::new(SampleDataService::new(&settings)?);
    let tick_rate = Duration::try_from_secs_f64(settings.ui.refresh_rate).unwrap_or(DEFAULT_TICK_RATE);
    let events = EventHandler::new(tick_rate);

    let terminal = ratatui::init();
    let app = App::new(settings, service, events);
    let result = app.run(terminal).await;

    ratatui::restore();
    result
}
