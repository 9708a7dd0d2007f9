//! ---
//! vc_section: "02-versioning"
//! vc_subsection: "module"
//! vc_type: "source"
//! vc_scope: "code"
//! vc_description: "Canonical display string composition."
//! vc_version: "v0.0.0-prealpha"
//! vc_owner: "tbd"
//! ---
use std::fmt::Display;

use crate::identifier::VersionIdentifier;

/// Renders a [`VersionIdentifier`] into its canonical display string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VersionComposer;

impl VersionComposer {
    /// Separator placed between consecutive segments.
    pub const SEPARATOR: char = '.';

    /// Render `[major, minor, tiny, pre]`, skipping the label when absent.
    #[must_use]
    pub fn render(&self, version: &VersionIdentifier) -> String {
        compose([
            Some(version.major().to_string()),
            Some(version.minor().to_string()),
            Some(version.tiny().to_string()),
            version.pre().map(str::to_owned),
        ])
    }
}

/// Drop absent segments, then join the remaining ones with
/// [`VersionComposer::SEPARATOR`].
pub fn compose<I, T>(parts: I) -> String
where
    I: IntoIterator<Item = Option<T>>,
    T: Display,
{
    let mut out = String::new();
    for part in parts.into_iter().flatten() {
        if !out.is_empty() {
            out.push(VersionComposer::SEPARATOR);
        }
        out.push_str(&part.to_string());
    }
    out
}
