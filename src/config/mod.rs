use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_non_empty_string, validate_path, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "coffee-info")]
#[command(about = "Read-only lookup over a coffee drink catalog")]
pub struct CliConfig {
    #[arg(long, help = "Catalog file (.json or .toml); uses the built-in sample catalog when omitted")]
    pub catalog: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print every drink in the catalog
    List,
    /// Look up a single drink by its version-4 identifier
    DrinkById { id: String },
    /// Look up a single drink by title (case-insensitive)
    DrinkByTitle { title: String },
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.catalog {
            validate_path("catalog", path)?;
            validate_file_extension("catalog", path, &["json", "toml"])?;
        }

        if let Command::DrinkByTitle { title } = &self.command {
            validate_non_empty_string("title", title)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_catalog_paths() {
        let config = CliConfig::parse_from(["coffee-info", "--catalog", "drinks.json", "list"]);
        assert!(config.validate().is_ok());

        let config = CliConfig::parse_from(["coffee-info", "--catalog", "drinks.toml", "list"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_unsupported_catalog_extension() {
        let config = CliConfig::parse_from(["coffee-info", "--catalog", "drinks.csv", "list"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_blank_title() {
        let config = CliConfig::parse_from(["coffee-info", "drink-by-title", "  "]);
        assert!(config.validate().is_err());
    }
}
