//! Cohort registry configuration
//!
//! Recruitment runs are listed in a YAML file keyed by run id:
//!
//! ```yaml
//! pilot:
//!   start: 2023-10-05T00:00:00Z
//!   end: 2023-10-06T23:59:59Z
//! ```

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ConfigError;
use crate::domain::scope::CohortRegistry;

/// Where to find the cohort registry
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CohortConfig {
    /// Path to the YAML run registry. No path means no named runs.
    pub registry_path: Option<PathBuf>,
}

impl CohortConfig {
    /// Loads and validates the registry.
    pub fn load_registry(&self) -> Result<CohortRegistry, ConfigError> {
        let Some(path) = &self.registry_path else {
            return Ok(CohortRegistry::new());
        };

        let raw = std::fs::read_to_string(path).map_err(|source| {
            ConfigError::CohortRegistryUnreadable {
                path: path.clone(),
                source,
            }
        })?;
        parse_registry(&raw)
    }
}

/// Parses a YAML registry document. An empty document is an empty registry.
pub fn parse_registry(raw: &str) -> Result<CohortRegistry, ConfigError> {
    if raw.trim().is_empty() {
        return Ok(CohortRegistry::new());
    }
    let registry: CohortRegistry = serde_yaml::from_str(raw)?;
    registry.validate()?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::RunId;
    use std::io::Write;

    const REGISTRY: &str = r#"
pilot:
  start: 2023-10-05T00:00:00Z
  end: 2023-10-06T23:59:59Z
main:
  start: 2023-10-10T00:00:00Z
  end: 2023-10-12T00:00:00Z
"#;

    #[test]
    fn test_no_path_means_empty_registry() {
        let registry = CohortConfig::default().load_registry().unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_loads_registry_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(REGISTRY.as_bytes()).unwrap();

        let config = CohortConfig {
            registry_path: Some(file.path().to_path_buf()),
        };
        let registry = config.load_registry().unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.resolve(&RunId::new("pilot").unwrap()).is_some());
    }

    #[test]
    fn test_missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let config = CohortConfig {
            registry_path: Some(dir.path().join("absent.yaml")),
        };
        assert!(matches!(
            config.load_registry(),
            Err(ConfigError::CohortRegistryUnreadable { .. })
        ));
    }

    #[test]
    fn test_malformed_yaml_is_reported() {
        assert!(matches!(
            parse_registry("pilot: [1, 2"),
            Err(ConfigError::CohortRegistryMalformed(_))
        ));
    }

    #[test]
    fn test_inverted_window_is_rejected() {
        let raw = "late:\n  start: 2023-10-06T00:00:00Z\n  end: 2023-10-05T00:00:00Z\n";
        assert!(matches!(
            parse_registry(raw),
            Err(ConfigError::CohortRegistryInvalid(_))
        ));
    }

    #[test]
    fn test_empty_document_is_empty_registry() {
        assert!(parse_registry("  \n").unwrap().is_empty());
    }
}
