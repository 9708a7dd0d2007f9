//! ---
//! vc_section: "02-versioning"
//! vc_subsection: "module"
//! vc_type: "source"
//! vc_scope: "code"
//! vc_description: "Build metadata and semantic version interop."
//! vc_version: "v0.0.0-prealpha"
//! vc_owner: "tbd"
//! ---
use semver::{BuildMetadata, Prerelease, Version};
use serde::Serialize;

use crate::error::Result;
use crate::identifier::VersionIdentifier;
use crate::release::{RELEASE, RELEASE_STRING};

impl VersionIdentifier {
    /// Express this identifier as a [`semver::Version`], with the label
    /// carried as the prerelease component (`5.1.0.beta1` -> `5.1.0-beta1`).
    pub fn to_semver(&self) -> Result<Version> {
        let pre = match self.pre() {
            Some(label) => Prerelease::new(label)?,
            None => Prerelease::EMPTY,
        };
        Ok(Version {
            major: self.major(),
            minor: self.minor(),
            patch: self.tiny(),
            pre,
            build: BuildMetadata::EMPTY,
        })
    }
}

/// Compile-time version metadata captured via `vergen`.
#[derive(Debug, Clone, Serialize)]
pub struct VersionInfo {
    /// Cargo package version of the crate.
    pub package: String,
    /// Release identifier shipped by the workspace.
    pub release: VersionIdentifier,
    /// Canonical string of [`VersionInfo::release`].
    pub display: String,
    /// Git commit hash captured at build time.
    pub git_sha: String,
    /// Build timestamp from the compilation environment.
    pub build_timestamp: String,
    /// Target triple used for the build.
    pub target: String,
    /// Cargo profile used during compilation.
    pub profile: String,
}

impl VersionInfo {
    /// Construct a new [`VersionInfo`] instance using environment metadata.
    #[must_use]
    pub fn current() -> Self {
        Self {
            package: env!("CARGO_PKG_VERSION").to_owned(),
            release: RELEASE,
            display: RELEASE_STRING.clone(),
            git_sha: option_env!("VERGEN_GIT_SHA")
                .unwrap_or("UNKNOWN")
                .to_owned(),
            build_timestamp: option_env!("VERGEN_BUILD_TIMESTAMP")
                .unwrap_or("UNKNOWN")
                .to_owned(),
            target: option_env!("VERGEN_CARGO_TARGET_TRIPLE")
                .unwrap_or("UNKNOWN")
                .to_owned(),
            profile: option_env!("VERGEN_CARGO_PROFILE")
                .unwrap_or("UNKNOWN")
                .to_owned(),
        }
    }

    /// Returns a concise CLI string combining release and git hash.
    #[must_use]
    pub fn cli_string(&self) -> String {
        format!("{} ({})", self.display, self.git_sha)
    }

    /// Human readable banner used in logging surfaces.
    #[must_use]
    pub fn banner(&self) -> String {
        format!("vercomp v{} (git {})", self.display, self.git_sha)
    }

    /// Extended string containing build metadata suitable for `--version` flags.
    #[must_use]
    pub fn extended(&self) -> String {
        format!(
            "{banner}\nPackage: {package}\nBuilt: {built}\nTarget: {target}\nProfile: {profile}",
            banner = self.banner(),
            package = self.package,
            built = self.build_timestamp,
            target = self.target,
            profile = self.profile
        )
    }
}
