//! Config Commands

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use tracing::info;

use storefront_qa_common::SuiteConfig;

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Write the effective configuration to the --config path
    Init(InitArgs),
}

#[derive(Args)]
pub struct InitArgs {
    /// Replace an existing file
    #[arg(long)]
    pub force: bool,
}

pub fn execute(command: ConfigCommand, config: &SuiteConfig, path: &Path) -> Result<()> {
    match command {
        ConfigCommand::Init(args) => init(args, config, path),
    }
}

fn init(args: InitArgs, config: &SuiteConfig, path: &Path) -> Result<()> {
    if path.exists() && !args.force {
        bail!("{} already exists (pass --force to replace it)", path.display());
    }
    config
        .save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), "configuration written");
    println!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sqa.toml");
        let mut config = SuiteConfig::default();
        config.urls.booking_api = "http://localhost:3001".to_string();

        execute(ConfigCommand::Init(InitArgs { force: false }), &config, &path).unwrap();

        assert_eq!(SuiteConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_init_keeps_existing_file_unless_forced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sqa.toml");
        std::fs::write(&path, "# hand edited\n").unwrap();
        let config = SuiteConfig::default();

        let err = execute(ConfigCommand::Init(InitArgs { force: false }), &config, &path).unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# hand edited\n");

        execute(ConfigCommand::Init(InitArgs { force: true }), &config, &path).unwrap();
        assert_eq!(SuiteConfig::load(&path).unwrap(), config);
    }
}
