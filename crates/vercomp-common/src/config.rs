//! ---
//! vc_section: "01-core-functionality"
//! vc_subsection: "module"
//! vc_type: "source"
//! vc_scope: "code"
//! vc_description: "Configuration loading for release and logging settings."
//! vc_version: "v0.0.0-prealpha"
//! vc_owner: "tbd"
//! ---
use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;
use vercomp_versioning::{VersionIdentifier, RELEASE};

use crate::logging::LogFormat;

fn default_logging_directory() -> PathBuf {
    PathBuf::from("target/logs")
}

fn default_log_format() -> LogFormat {
    LogFormat::StructuredJson
}

/// Primary configuration object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Release override. Falls back to the built-in [`RELEASE`] when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release: Option<VersionIdentifier>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Metadata describing where an [`AppConfig`] was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedAppConfig {
    pub config: AppConfig,
    pub source: PathBuf,
}

impl AppConfig {
    pub const ENV_CONFIG_PATH: &str = "VERCOMP_CONFIG";

    /// Load configuration from disk, respecting the `VERCOMP_CONFIG` override.
    pub fn load<P: AsRef<Path>>(candidates: &[P]) -> Result<Self> {
        Ok(Self::load_with_source(candidates)?.config)
    }

    /// Load configuration from disk together with the effective source path.
    pub fn load_with_source<P: AsRef<Path>>(candidates: &[P]) -> Result<LoadedAppConfig> {
        if let Ok(env_path) = std::env::var(Self::ENV_CONFIG_PATH) {
            if !env_path.trim().is_empty() {
                let path = PathBuf::from(env_path);
                let config = Self::from_path(&path)?;
                return Ok(LoadedAppConfig {
                    config,
                    source: path,
                });
            }
        }

        for candidate in candidates {
            let path = candidate.as_ref();
            if path.exists() {
                let config = Self::from_path(path)?;
                return Ok(LoadedAppConfig {
                    config,
                    source: path.to_path_buf(),
                });
            }
        }

        Err(anyhow!(
            "no configuration files found. inspected: {}",
            candidates
                .iter()
                .map(|p| p.as_ref().display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ))
    }

    /// Load a single file, bypassing the `VERCOMP_CONFIG` override.
    pub fn from_path(path: &Path) -> Result<Self> {
        debug!(config_path = %path.display(), "loading configuration");
        let contents = fs::read_to_string(path)
            .with_context(|| format!("unable to read config file {}", path.display()))?;
        let config = toml::from_str::<AppConfig>(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Release to report: the configured override or the built-in release.
    pub fn effective_release(&self) -> VersionIdentifier {
        self.release.clone().unwrap_or(RELEASE)
    }

    /// Validate structural invariants not covered by deserialisation.
    pub fn validate(&self) -> Result<()> {
        self.logging.validate()
    }
}

impl std::str::FromStr for AppConfig {
    type Err = anyhow::Error;

    fn from_str(content: &str) -> std::result::Result<Self, Self::Err> {
        let config: AppConfig =
            toml::from_str(content).with_context(|| "failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_directory")]
    pub directory: PathBuf,
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
    #[serde(default)]
    pub file_prefix: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: default_logging_directory(),
            format: default_log_format(),
            file_prefix: None,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<()> {
        if let Some(prefix) = &self.file_prefix {
            let mut components = Path::new(prefix).components();
            let single_name = matches!(
                (components.next(), components.next()),
                (Some(Component::Normal(_)), None)
            );
            if !single_name {
                return Err(anyhow!(
                    "logging file_prefix '{}' must be a plain file name",
                    prefix
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn release_section_is_optional() {
        let config: AppConfig = "".parse().unwrap();
        assert!(config.release.is_none());
        assert_eq!(config.effective_release(), RELEASE);
        assert_eq!(config.logging.format, LogFormat::StructuredJson);
    }

    #[test]
    fn release_section_overrides_builtin() {
        let config: AppConfig = r#"
            [release]
            major = 7
            minor = 2
            tiny = 1

            [logging]
            format = "pretty"
            file_prefix = "vercomp"
        "#
        .parse()
        .unwrap();
        assert_eq!(config.effective_release().render(), "7.2.1");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn missing_required_field_is_invalid_version() {
        let err = r#"
            [release]
            major = 5
            tiny = 0
            pre = "beta1"
        "#
        .parse::<AppConfig>()
        .unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("invalid version"), "{chain}");
        assert!(chain.contains("'minor'"), "{chain}");
    }

    #[test]
    fn empty_pre_label_is_rejected() {
        let err = "[release]\nmajor = 1\nminor = 0\ntiny = 0\npre = \"\"\n"
            .parse::<AppConfig>()
            .unwrap_err();
        assert!(format!("{err:#}").contains("must not be empty"));
    }

    #[test]
    fn file_prefix_must_not_be_a_path() {
        let err = "[logging]\nfile_prefix = \"../escape\"\n"
            .parse::<AppConfig>()
            .unwrap_err();
        assert!(err.to_string().contains("plain file name"));
    }

    #[test]
    fn load_picks_first_existing_candidate() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let present = dir.path().join("release.toml");
        let mut file = fs::File::create(&present).unwrap();
        writeln!(file, "[release]\nmajor = 0\nminor = 0\ntiny = 0").unwrap();

        let loaded = AppConfig::load_with_source(&[&missing, &present]).unwrap();
        assert_eq!(loaded.source, present);
        assert_eq!(loaded.config.effective_release().render(), "0.0.0");
    }

    #[test]
    fn load_reports_inspected_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nowhere.toml");
        let err = AppConfig::load(&[&missing]).unwrap_err();
        assert!(err.to_string().contains("nowhere.toml"));
    }
}
