//! Command-Line Interface

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// hoverintent - Replay pointer traces through the dwell intent engine
#[derive(Parser, Debug)]
#[command(name = "hoverintent")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a signal trace and report the enter/leave decisions
    Replay {
        /// Input trace file
        #[arg(short, long)]
        input: PathBuf,

        /// Print the report as JSON instead of a text summary
        #[arg(long)]
        json: bool,
    },

    /// Validate a signal trace file
    Validate {
        /// Path to the trace file
        trace: PathBuf,
    },

    /// List traces in the trace directory
    List {
        /// Show detailed information
        #[arg(short, long)]
        detailed: bool,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// View or modify configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "engine.poll_interval_ms")
        key: String,

        /// Value to set
        value: String,
    },

    /// Get a specific configuration value
    Get {
        /// Configuration key
        key: String,
    },

    /// Reset configuration to defaults
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the trace directory
    pub fn traces_dir() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".hoverintent").join("traces"))
            .unwrap_or_else(|| PathBuf::from("traces"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_traces_dir() {
        let dir = Cli::traces_dir();
        assert!(dir.to_string_lossy().contains("traces"));
        assert!(!dir.as_os_str().is_empty());
    }

    #[test]
    fn test_cli_parse_replay_command() {
        let args = vec!["hoverintent", "replay", "--input", "/path/to/trace.json"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Replay { input, json } => {
                assert_eq!(input, PathBuf::from("/path/to/trace.json"));
                assert!(!json);
            }
            _ => panic!("Expected Replay command"),
        }
    }

    #[test]
    fn test_cli_parse_replay_json_flag() {
        let args = vec![
            "hoverintent",
            "replay",
            "--input",
            "/path/to/trace.json",
            "--json",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Replay { json, .. } => assert!(json),
            _ => panic!("Expected Replay command"),
        }
    }

    #[test]
    fn test_cli_parse_validate_command() {
        let args = vec!["hoverintent", "validate", "/path/to/trace.json"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Validate { trace } => {
                assert_eq!(trace, PathBuf::from("/path/to/trace.json"));
            }
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn test_cli_parse_list_command() {
        let args = vec!["hoverintent", "list", "--detailed"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::List { detailed } => assert!(detailed),
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_parse_list_command_defaults() {
        let args = vec!["hoverintent", "list"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::List { detailed } => assert!(!detailed),
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_parse_init_command() {
        let args = vec!["hoverintent", "init", "--force"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Init { force } => assert!(force),
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_cli_global_flags() {
        let args = vec![
            "hoverintent",
            "--verbose",
            "--config",
            "/custom/config.toml",
            "list",
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_cli_parse_config_show() {
        let args = vec!["hoverintent", "config", "show"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Config {
                action: ConfigAction::Show,
            } => {}
            _ => panic!("Expected Config Show"),
        }
    }

    #[test]
    fn test_cli_parse_config_set() {
        let args = vec![
            "hoverintent",
            "config",
            "set",
            "engine.poll_interval_ms",
            "50",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Config {
                action: ConfigAction::Set { key, value },
            } => {
                assert_eq!(key, "engine.poll_interval_ms");
                assert_eq!(value, "50");
            }
            _ => panic!("Expected Config Set"),
        }
    }

    #[test]
    fn test_cli_parse_config_get() {
        let args = vec!["hoverintent", "config", "get", "engine.sensitivity_px"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Config {
                action: ConfigAction::Get { key },
            } => {
                assert_eq!(key, "engine.sensitivity_px");
            }
            _ => panic!("Expected Config Get"),
        }
    }

    #[test]
    fn test_cli_parse_config_reset() {
        let args = vec!["hoverintent", "config", "reset", "--force"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Config {
                action: ConfigAction::Reset { force },
            } => assert!(force),
            _ => panic!("Expected Config Reset"),
        }
    }

    #[test]
    fn test_cli_invalid_command_fails() {
        let args = vec!["hoverintent", "invalid-command"];
        let result = Cli::try_parse_from(args);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_missing_required_argument_fails() {
        let args = vec!["hoverintent", "replay"];
        let result = Cli::try_parse_from(args);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_verify_command_structure() {
        let cmd = Cli::command();

        let subcommands: Vec<_> = cmd.get_subcommands().map(|s| s.get_name()).collect();
        assert!(subcommands.contains(&"replay"));
        assert!(subcommands.contains(&"validate"));
        assert!(subcommands.contains(&"list"));
        assert!(subcommands.contains(&"init"));
        assert!(subcommands.contains(&"config"));
    }
}
