//! Rewriter configuration.
//!
//! The config is optional: without `--config` the built-in defaults target the
//! user handler tests and treat the usual 4xx/5xx statuses as error statuses.
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Target used when no path is given on the command line.
pub const DEFAULT_TARGET: &str = "internal/user/handler_test.go";

/// `net/http` status constants whose responses carry the `error` envelope.
pub const DEFAULT_ERROR_STATUSES: &[&str] = &[
    "StatusBadRequest",
    "StatusUnauthorized",
    "StatusForbidden",
    "StatusNotFound",
    "StatusConflict",
    "StatusInternalServerError",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RewriteConfig {
    pub default_target: PathBuf,
    pub error_statuses: Vec<String>,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            default_target: PathBuf::from(DEFAULT_TARGET),
            error_statuses: DEFAULT_ERROR_STATUSES
                .iter()
                .map(|status| status.to_string())
                .collect(),
        }
    }
}

/// Load and validate the config, falling back to defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<RewriteConfig> {
    let Some(path) = path else {
        return Ok(RewriteConfig::default());
    };
    let bytes = fs::read(path).with_context(|| format!("read config {}", path.display()))?;
    let config: RewriteConfig = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse config JSON {}", path.display()))?;
    validate_config(&config)?;
    tracing::debug!(
        path = %path.display(),
        statuses = config.error_statuses.len(),
        "loaded config"
    );
    Ok(config)
}

pub fn validate_config(config: &RewriteConfig) -> Result<()> {
    if config.default_target.as_os_str().is_empty() {
        return Err(anyhow!("default_target must be non-empty"));
    }
    if config.error_statuses.is_empty() {
        return Err(anyhow!("error_statuses must list at least one status"));
    }
    for status in &config.error_statuses {
        if !is_status_constant(status) {
            return Err(anyhow!(
                "error_statuses entries must be net/http constant names like StatusNotFound (got {status:?})"
            ));
        }
    }
    Ok(())
}

fn is_status_constant(name: &str) -> bool {
    name.strip_prefix("Status")
        .is_some_and(|rest| !rest.is_empty() && rest.chars().all(|ch| ch.is_ascii_alphabetic()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        validate_config(&RewriteConfig::default()).expect("defaults are valid");
    }

    #[test]
    fn missing_path_uses_defaults() {
        let config = load_config(None).expect("load defaults");
        assert_eq!(config, RewriteConfig::default());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("respwrap.json");
        fs::write(&path, r#"{"error_statuses": ["StatusConflict"]}"#).expect("write config");

        let config = load_config(Some(&path)).expect("load config");
        assert_eq!(config.error_statuses, vec!["StatusConflict".to_string()]);
        assert_eq!(config.default_target, PathBuf::from(DEFAULT_TARGET));
    }

    #[test]
    fn rejects_unknown_status_names() {
        let config = RewriteConfig {
            error_statuses: vec!["StatusConflict".to_string(), "409".to_string()],
            ..RewriteConfig::default()
        };
        let err = validate_config(&config).expect_err("numeric status rejected");
        assert!(err.to_string().contains("\"409\""));
    }

    #[test]
    fn rejects_empty_status_list() {
        let config = RewriteConfig {
            error_statuses: Vec::new(),
            ..RewriteConfig::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn rejects_unknown_fields() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("respwrap.json");
        fs::write(&path, r#"{"statuses": []}"#).expect("write config");

        let err = load_config(Some(&path)).expect_err("unknown field rejected");
        assert!(format!("{err:#}").contains("unknown field"));
    }
}
