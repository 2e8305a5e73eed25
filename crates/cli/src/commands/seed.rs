//! Validate catalog seed files.
//!
//! Seeds are accepted as JSON (the format the storefront loads) or YAML,
//! chosen by file extension. Both go through the same catalog validation.

use std::path::Path;

use fresh_daily_core::{CatalogError, CatalogStore};
use thiserror::Error;
use tracing::info;

/// Errors reading or validating a seed file.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("File not found: {0}")]
    NotFound(String),
    #[error("Failed to read seed: {0}")]
    Read(#[from] std::io::Error),
    #[error("Invalid JSON seed: {0}")]
    Json(#[from] CatalogError),
    #[error("Invalid YAML seed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Seed formats recognized by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SeedFormat {
    Json,
    Yaml,
}

impl SeedFormat {
    fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Parse seed text in the given format.
fn parse(content: &str, format: SeedFormat) -> Result<CatalogStore, SeedError> {
    match format {
        SeedFormat::Json => Ok(CatalogStore::from_json(content)?),
        SeedFormat::Yaml => Ok(serde_yaml::from_str(content)?),
    }
}

/// Read and validate the seed at `path`.
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable or invalid.
pub fn load(path: &Path) -> Result<CatalogStore, SeedError> {
    if !path.exists() {
        return Err(SeedError::NotFound(path.display().to_string()));
    }

    info!(path = %path.display(), "Loading catalog seed");
    let content = std::fs::read_to_string(path)?;
    parse(&content, SeedFormat::for_path(path))
}

/// Validate a seed file and log a summary of its contents.
///
/// # Errors
///
/// Returns an error if the seed cannot be loaded.
pub fn check(path: &Path) -> Result<(), SeedError> {
    let catalog = load(path)?;

    info!(
        products = catalog.products().len(),
        customers = catalog.customers().len(),
        categories = ?catalog.categories(),
        "Seed validated successfully"
    );
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const YAML_SEED: &str = r"
products:
  - id: 1
    name: Premium Bananas
    unit: kg
    basePrice: '1.50'
    category: Tropical
customers:
  - id: 101
    name: City Juice Bar
    type: Wholesale
";

    #[test]
    fn test_format_from_extension() {
        assert_eq!(SeedFormat::for_path(Path::new("seed.yaml")), SeedFormat::Yaml);
        assert_eq!(SeedFormat::for_path(Path::new("seed.yml")), SeedFormat::Yaml);
        assert_eq!(SeedFormat::for_path(Path::new("seed.json")), SeedFormat::Json);
        assert_eq!(SeedFormat::for_path(Path::new("seed")), SeedFormat::Json);
    }

    #[test]
    fn test_parse_yaml_seed() {
        let catalog = parse(YAML_SEED, SeedFormat::Yaml).unwrap();
        assert_eq!(catalog.products().len(), 1);
        assert_eq!(catalog.customers().len(), 1);
        assert_eq!(catalog.categories(), vec!["Tropical"]);
    }

    #[test]
    fn test_yaml_seed_is_validated() {
        let duplicated = r"
customers:
  - id: 101
    name: City Juice Bar
    type: Wholesale
  - id: 101
    name: Mrs. Johnson
    type: Retail
";
        assert!(matches!(
            parse(duplicated, SeedFormat::Yaml),
            Err(SeedError::Yaml(_))
        ));
    }

    #[test]
    fn test_parse_json_seed_errors() {
        assert!(matches!(
            parse("{ not json", SeedFormat::Json),
            Err(SeedError::Json(CatalogError::Parse(_)))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = load(Path::new("/nonexistent/fresh-daily.yaml"));
        assert!(matches!(result, Err(SeedError::NotFound(_))));
    }
}
