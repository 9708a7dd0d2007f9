//! ---
//! vc_section: "05-external-interfaces"
//! vc_subsection: "binary"
//! vc_type: "source"
//! vc_scope: "code"
//! vc_description: "Displays the configured release."
//! vc_version: "v0.0.0-prealpha"
//! vc_owner: "tbd"
//! ---
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde_json::json;
use tracing::{debug, info};
use vercomp_common::config::AppConfig;
use vercomp_versioning::VersionIdentifier;

const SERVICE_NAME: &str = "vercompctl";

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Path to a configuration file with a `[release]` section.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Emit the release as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ShowArgs) -> Result<()> {
    let release = resolve_release(&args)?;
    if args.json {
        let body = json!({
            "major": release.major(),
            "minor": release.minor(),
            "tiny": release.tiny(),
            "pre": release.pre(),
            "display": release.render(),
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        println!("{release}");
    }
    Ok(())
}

/// An explicit `--config` is read as given, even when `VERCOMP_CONFIG` is set.
/// Otherwise the default locations are tried and the built-in release is used
/// when none exist. A loaded configuration also drives log output.
fn resolve_release(args: &ShowArgs) -> Result<VersionIdentifier> {
    if let Some(path) = &args.config {
        let config = AppConfig::from_path(path)?;
        vercomp_common::init_tracing(SERVICE_NAME, &config.logging)?;
        if let Some(ignored) = std::env::var_os(AppConfig::ENV_CONFIG_PATH) {
            info!(
                ignored = %PathBuf::from(ignored).display(),
                "--config takes precedence over {}",
                AppConfig::ENV_CONFIG_PATH
            );
        }
        info!(source = %path.display(), "release loaded from configuration");
        return Ok(config.effective_release());
    }
    let candidates = [
        PathBuf::from("configs/release.toml"),
        PathBuf::from("vercomp.toml"),
    ];
    let env_override = std::env::var_os(AppConfig::ENV_CONFIG_PATH)
        .is_some_and(|value| !value.is_empty());
    if !env_override && !candidates.iter().any(|path| path.exists()) {
        vercomp_common::init();
        debug!("no configuration found; using built-in release");
        return Ok(AppConfig::default().effective_release());
    }
    let loaded = AppConfig::load_with_source(&candidates)?;
    vercomp_common::init_tracing(SERVICE_NAME, &loaded.config.logging)?;
    info!(source = %loaded.source.display(), "release loaded from configuration");
    Ok(loaded.config.effective_release())
}
