//! ---
//! vc_section: "02-versioning"
//! vc_subsection: "module"
//! vc_type: "source"
//! vc_scope: "code"
//! vc_description: "Release version value object, composition and build metadata."
//! vc_version: "v0.0.0-prealpha"
//! vc_owner: "tbd"
//! ---
#![warn(missing_docs)]

//! Release version identifiers and their canonical dotted rendering, plus the
//! build metadata helpers embedded by the CLI.

pub mod compose;
pub mod error;
pub mod identifier;
pub mod release;
pub mod semver;

pub use compose::{compose, VersionComposer};
pub use error::{Result, VersionError};
pub use identifier::{VersionBuilder, VersionIdentifier};
pub use release::{RELEASE, RELEASE_STRING};
pub use self::semver::VersionInfo;
