use crate::domain::model::CoffeeInformation;
use crate::domain::ports::CoffeeInformationRepository;
use crate::utils::error::{CoffeeError, Result};
use async_trait::async_trait;
use std::fs;
use std::path::PathBuf;

/// Catalog backed by a JSON or TOML file, chosen by extension.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn decode(&self, contents: &str) -> Result<CoffeeInformation> {
        match self.path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(serde_json::from_str(contents)?),
            Some("toml") => Ok(toml::from_str(contents)?),
            _ => Err(CoffeeError::InvalidConfigValueError {
                field: "catalog".to_string(),
                value: self.path.display().to_string(),
                reason: "Unsupported catalog format, expected .json or .toml".to_string(),
            }),
        }
    }
}

#[async_trait]
impl CoffeeInformationRepository for FileCatalog {
    // Re-reads the file on every call; each lookup sees a fresh snapshot.
    async fn get_coffee_information(&self) -> Result<CoffeeInformation> {
        tracing::debug!("Reading catalog from: {}", self.path.display());
        let contents = fs::read_to_string(&self.path)?;
        self.decode(&contents)
    }
}
