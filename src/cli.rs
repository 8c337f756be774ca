use crate::version::long_version;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, long_version = long_version(), about = "Terminal tools shell")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the terminal application
    Run {
        /// Configuration file path (TOML)
        #[arg(short, long, value_parser = existing_file)]
        config: Option<PathBuf>,

        /// Enable debug mode
        #[arg(short, long)]
        debug: bool,
    },
    /// Generate a default configuration file
    GenerateConfig {
        /// Output file path
        #[arg(short, long, default_value = "config.toml")]
        output: PathBuf,
    },
    /// Show the current configuration
    ShowConfig,
}

fn existing_file(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.exists() {
        Ok(path)
    } else {
        Err(format!("path '{value}' does not exist"))
    }
}

/// True if the path names a TOML file.
pub fn is_toml(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_config_default_output() {
        let cli = Cli::try_parse_from(["toolsapp", "generate-config"]).unwrap();
        match cli.command {
            Commands::GenerateConfig { output } => assert_eq!(output, PathBuf::from("config.toml")),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_run_rejects_missing_config() {
        let result = Cli::try_parse_from(["toolsapp", "run", "--config", "/no/such/file.toml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_flags() {
        let cli = Cli::try_parse_from(["toolsapp", "run", "-d"]).unwrap();
        assert!(matches!(cli.command, Commands::Run { config: None, debug: true }));
    }

    #[test]
    fn test_is_toml() {
        assert!(is_toml(std::path::Path::new("settings.TOML")));
        assert!(!is_toml(std::path::Path::new("settings.yaml")));
        assert!(!is_toml(std::path::Path::new("settings")));
    }
}
