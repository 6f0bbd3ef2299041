//! Detection of the JavaScript tooling a scaffolded chart runs with

use std::process::Command;

/// Runtime detection result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

impl RuntimeInfo {
    /// `name (version)` or `name (not installed)`
    pub fn summary(&self) -> String {
        if self.available {
            format!(
                "{} ({})",
                self.name,
                self.version.as_deref().unwrap_or("unknown")
            )
        } else {
            format!("{} (not installed)", self.name)
        }
    }
}

/// Run `<binary> --version` and report what came back
pub fn check_command(binary: &str, name: &'static str) -> RuntimeInfo {
    let output = Command::new(binary).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    check_command("node", "Node.js")
}

/// Check if the Parcel bundler is available
pub fn check_parcel() -> RuntimeInfo {
    check_command("parcel", "Parcel")
}

/// Check Node.js and Parcel. Advisory only: missing tools change the next
/// steps shown to the user, nothing is installed.
pub fn check_runtimes() -> Vec<RuntimeInfo> {
    vec![check_node(), check_parcel()]
}

/// Look up a runtime by display name
pub fn find<'a>(runtimes: &'a [RuntimeInfo], name: &str) -> Option<&'a RuntimeInfo> {
    runtimes.iter().find(|r| r.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_binary_is_unavailable() {
        let info = check_command("chart-scaffolder-no-such-binary", "Nothing");
        assert!(!info.available);
        assert!(info.version.is_none());
        assert_eq!(info.summary(), "Nothing (not installed)");
    }

    #[test]
    fn test_summary_with_version() {
        let info = RuntimeInfo {
            name: "Node.js",
            version: Some("v20.11.0".to_string()),
            available: true,
        };
        assert_eq!(info.summary(), "Node.js (v20.11.0)");
    }

    #[test]
    fn test_check_runtimes_reports_node_and_parcel() {
        let runtimes = check_runtimes();
        assert!(find(&runtimes, "Node.js").is_some());
        assert!(find(&runtimes, "Parcel").is_some());
    }
}
