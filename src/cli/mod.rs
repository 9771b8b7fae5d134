//! CLI module - Command-line interface for catnip
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::clients::catfact::DEFAULT_MAX_LENGTH;

/// catnip - Cat facts server and client
#[derive(Parser)]
#[command(name = "catnip")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a config file (default: search ./config.toml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the API server
    #[command(alias = "server")]
    Serve,

    /// Create default config file
    Init {
        /// Where to write the config (default: ./config.toml)
        path: Option<PathBuf>,
    },

    /// Log in and store the session locally
    Login {
        username: String,
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// List user-submitted cat facts
    #[command(alias = "ls")]
    Facts {
        /// Only show facts owned by the logged-in user
        #[arg(long)]
        mine: bool,
    },

    /// Submit a new cat fact (requires login)
    #[command(alias = "add")]
    Create {
        /// Fact text
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Browse facts from the public cat-fact API
    InternetFacts {
        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Longest fact to return
        #[arg(long, default_value_t = DEFAULT_MAX_LENGTH)]
        max_length: u32,
    },
}

pub use commands::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_create_joins_words() {
        let cli = Cli::try_parse_from(["catnip", "create", "Cats", "purr"]).unwrap();
        match cli.command {
            Commands::Create { text } => assert_eq!(text.join(" "), "Cats purr"),
            _ => panic!("expected create"),
        }
    }

    #[test]
    fn test_parse_internet_facts_defaults() {
        let cli = Cli::try_parse_from(["catnip", "internet-facts"]).unwrap();
        match cli.command {
            Commands::InternetFacts { page, max_length } => {
                assert_eq!(page, 1);
                assert_eq!(max_length, DEFAULT_MAX_LENGTH);
            }
            _ => panic!("expected internet-facts"),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["catnip", "facts", "--config", "alt.toml", "--mine"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
        assert!(matches!(cli.command, Commands::Facts { mine: true }));
    }
}
