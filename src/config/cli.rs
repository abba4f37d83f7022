use crate::config::toml_config::TomlConfig;
use crate::core::finder::FinderKind;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "setcard")]
#[command(about = "Print the image filename for a card spec string")]
pub struct CliConfig {
    /// Card spec: number (123), shape (sdo), color (rpg), shading (fhe), e.g. 2dgh
    pub spec: String,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Image file extension, without the dot
    #[arg(long)]
    pub extension: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Reads the config file, if any, and applies command-line overrides.
    pub fn settings(&self) -> Result<TomlConfig> {
        let mut settings = load_file(self.config.as_ref())?;
        if let Some(extension) = &self.extension {
            settings.image.extension = Some(extension.clone());
        }
        settings.validate()?;
        Ok(settings)
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "find-sets")]
#[command(about = "Deal a table of cards and list every set on it")]
pub struct FindSetsConfig {
    /// Number of cards to deal (3..=81)
    #[arg(short = 'n', long)]
    pub cards: Option<usize>,

    /// Seed for a reproducible deal
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Search algorithm: gnt, gnt-mod, simple or fast
    #[arg(short, long)]
    pub algorithm: Option<FinderKind>,

    /// Run every algorithm and report how long each takes
    #[arg(long)]
    pub compare: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl FindSetsConfig {
    pub fn settings(&self) -> Result<TomlConfig> {
        let mut settings = load_file(self.config.as_ref())?;
        if let Some(cards) = self.cards {
            settings.table.cards = Some(cards);
        }
        if let Some(seed) = self.seed {
            settings.table.seed = Some(seed);
        }
        if let Some(algorithm) = self.algorithm {
            settings.table.algorithm = Some(algorithm);
        }
        settings.validate()?;
        Ok(settings)
    }
}

fn load_file(path: Option<&PathBuf>) -> Result<TomlConfig> {
    match path {
        Some(path) => TomlConfig::from_file(path),
        None => Ok(TomlConfig::default()),
    }
}
