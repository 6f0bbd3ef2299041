//! Library version handling for catalogs and scaffolded manifests

use semver::Version;

/// Parse a catalog version, tolerating a leading 'v'
pub fn parse_version(version_str: &str) -> Result<Version, semver::Error> {
    let cleaned = version_str.strip_prefix('v').unwrap_or(version_str);
    Version::parse(cleaned)
}

/// Dependency specifier written into the scaffolded package.json.
/// Pins the exact release the catalog was generated from.
pub fn dependency_spec(version: &Version) -> String {
    version.to_string()
}

/// Compare a catalog loaded from disk against the bundled one.
/// Returns a warning message if the loaded catalog is older.
pub fn check_compatibility(loaded: &str, bundled: &str) -> Option<String> {
    let loaded_ver = parse_version(loaded).ok()?;
    let bundled_ver = parse_version(bundled).ok()?;

    if loaded_ver < bundled_ver {
        Some(format!(
            "This catalog describes library version {}, older than the bundled {}.\n\
             Generated examples may reference templates or props that have since changed.",
            loaded, bundled
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version_strips_prefix() {
        assert_eq!(parse_version("v2.3.1").unwrap(), Version::new(2, 3, 1));
        assert_eq!(parse_version("2.3.1").unwrap(), Version::new(2, 3, 1));
    }

    #[test]
    fn test_parse_version_rejects_garbage() {
        assert!(parse_version("latest").is_err());
        assert!(parse_version("1.2").is_err());
    }

    #[test]
    fn test_dependency_spec_is_exact() {
        let v = parse_version("v4.0.0-beta.2").unwrap();
        assert_eq!(dependency_spec(&v), "4.0.0-beta.2");
    }

    #[test]
    fn test_older_catalog_warns() {
        let warning = check_compatibility("1.0.0", "2.0.0");
        assert!(warning.is_some());
        assert!(warning.unwrap().contains("2.0.0"));
    }

    #[test]
    fn test_same_or_newer_catalog_is_silent() {
        assert!(check_compatibility("2.0.0", "2.0.0").is_none());
        assert!(check_compatibility("2.1.0", "2.0.0").is_none());
    }

    #[test]
    fn test_invalid_versions() {
        // Can't compare, skip warning
        assert!(check_compatibility("invalid", "1.0.0").is_none());
    }
}
