pub mod toml_config;

pub use crate::adapters::endpoints::DEFAULT_BASE_URL;

/// 2018 Finals, game 4.
pub const DEFAULT_GAME_ID: &str = "0041700404";

#[cfg(feature = "cli")]
mod cli {
    use super::{DEFAULT_BASE_URL, DEFAULT_GAME_ID};
    use crate::core::ConfigProvider;
    use crate::domain::ports::OutputFormat;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_game_id, validate_url, Validate};
    use clap::{Parser, ValueEnum};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
    pub enum LogFormat {
        #[default]
        Text,
        Json,
    }

    #[derive(Debug, Clone, Parser)]
    #[command(name = "oncourt-etl")]
    #[command(about = "Lists the players on court at the start of each period of an NBA game")]
    pub struct CliConfig {
        #[arg(long, default_value = DEFAULT_GAME_ID)]
        pub game_id: String,

        #[arg(long, default_value = DEFAULT_BASE_URL)]
        pub base_url: String,

        /// Output format written to stdout
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        pub format: OutputFormat,

        /// TOML configuration file; replaces the game/source/output flags
        #[arg(short, long)]
        pub config: Option<String>,

        /// Print the planned boxscore queries without issuing them
        #[arg(long)]
        pub dry_run: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, value_enum, default_value_t = LogFormat::Text)]
        pub log_format: LogFormat,
    }

    impl ConfigProvider for CliConfig {
        fn game_id(&self) -> &str {
            &self.game_id
        }

        fn base_url(&self) -> &str {
            &self.base_url
        }

        fn output_format(&self) -> OutputFormat {
            self.format
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_game_id("game_id", &self.game_id)?;
            validate_url("base_url", &self.base_url)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_defaults() {
            let config = CliConfig::parse_from(["oncourt-etl"]);
            assert_eq!(config.game_id, "0041700404");
            assert_eq!(config.base_url, "https://stats.nba.com/stats");
            assert_eq!(config.format, OutputFormat::Table);
            assert_eq!(config.log_format, LogFormat::Text);
            assert!(!config.dry_run);
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_flags() {
            let config = CliConfig::parse_from([
                "oncourt-etl",
                "--game-id",
                "0021800001",
                "--format",
                "tsv",
                "--dry-run",
                "-v",
            ]);
            assert_eq!(config.game_id(), "0021800001");
            assert_eq!(config.output_format(), OutputFormat::Tsv);
            assert!(config.dry_run);
            assert!(config.verbose);
        }

        #[test]
        fn test_invalid_game_id_fails_validation() {
            let config = CliConfig::parse_from(["oncourt-etl", "--game-id", "401"]);
            assert!(config.validate().is_err());
        }
    }
}

#[cfg(feature = "cli")]
pub use cli::{CliConfig, LogFormat};
