//! ---
//! vc_section: "02-versioning"
//! vc_subsection: "module"
//! vc_type: "source"
//! vc_scope: "code"
//! vc_description: "Pinned release identifier for the workspace."
//! vc_version: "v0.0.0-prealpha"
//! vc_owner: "tbd"
//! ---
use once_cell::sync::Lazy;

use crate::identifier::VersionIdentifier;

/// Release currently shipped by this workspace.
pub const RELEASE: VersionIdentifier = VersionIdentifier::prerelease(5, 1, 0, "beta1");

/// Canonical string form of [`RELEASE`], composed on first access.
pub static RELEASE_STRING: Lazy<String> = Lazy::new(|| RELEASE.render());
