use anyhow::Context;
use clap::{ArgAction, Parser};
use paalkraal::report::format_bill;
use paalkraal::tokens::parse_tokens;
use paalkraal::{
    init_logging, DesignerCommand, DesignerState, FenceSettings, SettingsManager, BUILD_DATE,
    VERSION,
};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "paalkraal")]
#[command(about = "Fence and kraal layout calculator")]
#[command(version)]
struct Cli {
    /// Settings file (JSON or TOML); defaults to the user config directory
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Joint overlap between poles in meters
    #[arg(long)]
    overlap: Option<f64>,

    /// Fence height in meters
    #[arg(long)]
    height: Option<f64>,

    /// Vertical spacing between rails in meters
    #[arg(long)]
    spacing: Option<f64>,

    /// Print the full design snapshot as JSON instead of the bill
    #[arg(long)]
    json: bool,

    /// Save the resulting settings to the user config directory
    #[arg(long)]
    save: bool,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Design tokens: 1.8, 2.4, 3.6, gate, turn:<deg> or t<deg>, undo, reset
    #[arg(allow_hyphen_values = true)]
    tokens: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    info!("PaalKraalForge {} (built {})", VERSION, BUILD_DATE);

    let settings = load_settings(&cli)?;
    let commands = parse_tokens(&cli.tokens)?;

    let mut designer = DesignerState::default();
    let mut snapshot = designer
        .execute(DesignerCommand::UpdateSettings(settings))
        .context("Invalid fence settings")?;

    for command in commands {
        snapshot = designer
            .execute(command.clone())
            .with_context(|| format!("Failed to apply '{}'", command))?;
    }
    debug!("Applied {} tokens", cli.tokens.len());

    if cli.save {
        let path = SettingsManager::save(designer.settings())?;
        info!("Settings written to {}", path.display());
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", format_bill(&snapshot));
    }

    Ok(())
}

fn load_settings(cli: &Cli) -> anyhow::Result<FenceSettings> {
    let mut settings = match &cli.config {
        Some(path) => FenceSettings::load_from_file(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => SettingsManager::load()?,
    };

    if let Some(overlap) = cli.overlap {
        settings.overlap = overlap;
    }
    if let Some(height) = cli.height {
        settings.fence_height = height;
    }
    if let Some(spacing) = cli.spacing {
        settings.rail_spacing = spacing;
    }
    Ok(settings)
}
