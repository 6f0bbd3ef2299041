//! Release catalog loading from the bundled release data or a local file

use super::model::ReleaseCatalog;
use super::version::parse_version;
use crate::error::CatalogError;
use crate::library::LibraryConfig;
use std::path::PathBuf;
use tokio::fs;

/// Release data shipped with the scaffolder
pub const BUNDLED_CATALOG: &str = include_str!("../../assets/vvc-release-data.json");

/// Catalog source - either the bundled release data or a JSON file on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Bundled,
    Local(PathBuf),
}

impl CatalogSource {
    /// Bundled catalog unless the library's path environment variable is set
    pub fn from_config<C: LibraryConfig>(config: &C) -> Self {
        match std::env::var(config.catalog_path_env()) {
            Ok(path) if !path.trim().is_empty() => Self::Local(PathBuf::from(path)),
            _ => Self::Bundled,
        }
    }

    /// Create a local catalog source from a path
    pub fn local(path: PathBuf) -> Self {
        Self::Local(path)
    }

    /// Human-readable origin, for progress messages
    pub fn describe(&self) -> String {
        match self {
            CatalogSource::Bundled => "bundled release data".to_string(),
            CatalogSource::Local(path) => path.display().to_string(),
        }
    }
}

/// Parse a release catalog and check its version and prop lists
pub fn parse_catalog(content: &str) -> Result<ReleaseCatalog, CatalogError> {
    let catalog: ReleaseCatalog = serde_json::from_str(content)?;

    parse_version(&catalog.version).map_err(|source| CatalogError::InvalidVersion {
        version: catalog.version.clone(),
        source,
    })?;
    catalog.validate()?;

    Ok(catalog)
}

/// The catalog shipped with this build
pub fn bundled_catalog() -> Result<ReleaseCatalog, CatalogError> {
    parse_catalog(BUNDLED_CATALOG)
}

/// Load and validate a catalog from `source`
pub async fn load_catalog(source: &CatalogSource) -> Result<ReleaseCatalog, CatalogError> {
    match source {
        CatalogSource::Bundled => bundled_catalog(),
        CatalogSource::Local(path) => {
            let content = fs::read_to_string(path)
                .await
                .map_err(|source| CatalogError::Io {
                    path: path.clone(),
                    source,
                })?;
            parse_catalog(&content)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::materialize;
    use crate::runtime::RuntimeInfo;
    use std::path::Path;

    #[derive(Clone)]
    struct EnvConfig(&'static str);

    impl LibraryConfig for EnvConfig {
        fn name(&self) -> &'static str {
            "test"
        }
        fn display_name(&self) -> &'static str {
            "Test"
        }
        fn package_name(&self) -> &'static str {
            "@test/charts"
        }
        fn catalog_path_env(&self) -> &'static str {
            self.0
        }
        fn docs_url(&self) -> &'static str {
            "https://example.com/docs"
        }
        fn cli_description(&self) -> &'static str {
            "test"
        }
        fn next_steps(&self, _dir: &Path, _runtimes: &[RuntimeInfo]) -> Vec<String> {
            Vec::new()
        }
    }

    #[test]
    fn test_bundled_catalog_is_valid() {
        let catalog = bundled_catalog().unwrap();
        assert!(!catalog.templates.is_empty());
        for name in catalog.template_names() {
            assert!(materialize(&catalog, &name).is_ok(), "{} failed", name);
        }
    }

    #[test]
    fn test_parse_rejects_bad_version() {
        let err = parse_catalog(r#"{ "version": "next", "templates": {} }"#).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidVersion { .. }));
    }

    #[test]
    fn test_parse_rejects_overlapping_props() {
        let err = parse_catalog(
            r#"{ "version": "1.0.0", "templates": { "Bar": { "required": ["a"], "optional": ["a"] } } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::Integrity(_)));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(matches!(
            parse_catalog("{ not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_source_from_env() {
        let config = EnvConfig("CHART_SCAFFOLDER_TEST_CATALOG_FROM_ENV");
        std::env::remove_var(config.0);
        assert_eq!(CatalogSource::from_config(&config), CatalogSource::Bundled);

        std::env::set_var(config.0, "/tmp/catalog.json");
        assert_eq!(
            CatalogSource::from_config(&config),
            CatalogSource::Local(PathBuf::from("/tmp/catalog.json"))
        );
        std::env::remove_var(config.0);
    }

    #[tokio::test]
    async fn test_load_local_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("release.json");
        std::fs::write(
            &path,
            r#"{ "version": "v2.0.0", "templates": { "Bar": { "required": ["data"] } } }"#,
        )
        .unwrap();

        let catalog = load_catalog(&CatalogSource::local(path)).await.unwrap();
        assert_eq!(catalog.template_names(), vec!["Bar"]);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = CatalogSource::local(dir.path().join("missing.json"));
        assert!(matches!(
            load_catalog(&source).await,
            Err(CatalogError::Io { .. })
        ));
    }
}
