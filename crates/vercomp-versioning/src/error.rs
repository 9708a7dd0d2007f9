//! ---
//! vc_section: "02-versioning"
//! vc_subsection: "module"
//! vc_type: "source"
//! vc_scope: "code"
//! vc_description: "Error taxonomy for version construction and rendering."
//! vc_version: "v0.0.0-prealpha"
//! vc_owner: "tbd"
//! ---
use std::num::ParseIntError;

use thiserror::Error;

/// Convenience alias used throughout the versioning crate.
pub type Result<T> = std::result::Result<T, VersionError>;

/// Failures raised while constructing, parsing, or converting a version.
#[derive(Debug, Error)]
pub enum VersionError {
    /// A required field was missing or a pre-release label was malformed.
    #[error("invalid version: {reason}")]
    InvalidVersion {
        /// Human readable description of the violated constraint.
        reason: String,
    },
    /// A numeric segment could not be read as a non-negative integer.
    #[error("invalid version segment '{segment}': {source}")]
    InvalidSegment {
        /// Offending segment text.
        segment: String,
        /// Underlying integer parse failure.
        #[source]
        source: ParseIntError,
    },
    /// The identifier cannot be expressed as a semantic version.
    #[error("not representable as semver: {0}")]
    Semver(#[from] semver::Error),
}

impl VersionError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidVersion {
            reason: reason.into(),
        }
    }

    /// Returns `true` for the [`VersionError::InvalidVersion`] kind.
    #[must_use]
    pub fn is_invalid_version(&self) -> bool {
        matches!(self, Self::InvalidVersion { .. })
    }
}
