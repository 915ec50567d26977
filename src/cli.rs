//! Command-line argument parsing
//!
//! Supports:
//! - Scanning an installed editor asset directory
//! - Validating a field configuration
//! - Driving a headless field through a mount/switch/blur cycle

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect editor assets and code field configurations
#[derive(Parser, Debug)]
#[command(name = "codefield", version, about = "Code field controller tools")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// List the modes, themes and other files in an asset directory
    Scan {
        /// Directory holding `mode-*.js` / `theme-*.js` files
        #[arg(value_name = "DIR")]
        dir: PathBuf,
    },
    /// Validate a field config and print the picker labels
    Check {
        /// Config file (defaults to ~/.config/codefield/field.yaml)
        #[arg(value_name = "CONFIG")]
        config: Option<PathBuf>,

        /// Also verify modes and theme against an asset directory
        #[arg(long, value_name = "DIR")]
        assets: Option<PathBuf>,
    },
    /// Mount a headless field, optionally switch mode, blur, print the value
    Demo {
        #[arg(value_name = "CONFIG")]
        config: Option<PathBuf>,

        /// Saved value as JSON (`{"code":"...","type":"..."}`)
        #[arg(long, value_name = "JSON")]
        value: Option<String>,

        /// Mode to switch to after mounting
        #[arg(long, value_name = "MODE")]
        mode: Option<String>,
    },
}

impl CliCommand {
    /// Config path argument, falling back to the user config file
    pub fn config_path(explicit: Option<PathBuf>) -> Result<PathBuf, String> {
        explicit
            .or_else(crate::config_paths::field_config_file)
            .ok_or_else(|| "No config path given and no config directory available".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scan() {
        let args = CliArgs::parse_from(["codefield", "scan", "/opt/ace"]);
        match args.command {
            CliCommand::Scan { dir } => assert_eq!(dir, PathBuf::from("/opt/ace")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_parse_demo_flags() {
        let args = CliArgs::parse_from([
            "codefield",
            "demo",
            "field.yaml",
            "--mode",
            "python",
            "--value",
            r#"{"code":"x","type":"markdown"}"#,
        ]);
        match args.command {
            CliCommand::Demo {
                config,
                value,
                mode,
            } => {
                assert_eq!(config, Some(PathBuf::from("field.yaml")));
                assert_eq!(mode.as_deref(), Some("python"));
                assert!(value.unwrap().contains("markdown"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_explicit_config_path_wins() {
        let path = CliCommand::config_path(Some(PathBuf::from("a.yaml"))).unwrap();
        assert_eq!(path, PathBuf::from("a.yaml"));
    }
}
