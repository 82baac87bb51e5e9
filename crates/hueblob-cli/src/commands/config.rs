use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use hueblob_core::detection::DetectorConfig;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write config to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save the default DetectorConfig as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let config = DetectorConfig::default();
    let toml_str = toml::to_string_pretty(&config)?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Default config saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}

/// Load a DetectorConfig from a TOML file. Missing fields take their defaults.
pub fn load(path: &Path) -> Result<DetectorConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: DetectorConfig = toml::from_str(&text)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    Ok(config)
}
