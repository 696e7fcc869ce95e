use agent_exposure_assessment::catalog;
use agent_exposure_cli::args::{Cli, Commands};
use agent_exposure_cli::{completions, display, interactive, oneshot};
use agent_exposure_common::{init_tracing_with_level, ExposureConfig, OutputFormat};
use anyhow::Context;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_found = cli.config.exists();
    let mut config = if config_found {
        ExposureConfig::from_file(&cli.config)
            .with_context(|| format!("Failed to load config from {}", cli.config.display()))?
    } else {
        let mut config = ExposureConfig::default();
        // Keep the terminal quiet unless asked otherwise
        config.logging.level = "warn".to_string();
        config
    };
    cli.apply_overrides(&mut config);
    config.validate().context("Invalid configuration")?;
    init_tracing_with_level(&config.logging.level)?;

    match cli.command {
        Some(Commands::Completions { shell }) => completions::generate(shell),
        Some(Commands::Questions { json }) => {
            let questions = catalog();
            if json || config.cli.output == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&questions)?);
            } else {
                print!("{}", display::render_catalog(&questions));
            }
        }
        Some(Commands::Assess(args)) => {
            let output = if args.json {
                OutputFormat::Json
            } else {
                config.cli.output
            };
            oneshot::execute(&args.profile(), output, config.cli.server_url.as_deref()).await?;
        }
        Some(Commands::Wizard) | None => interactive::run(config.cli.show_help_text)?,
    }

    Ok(())
}
