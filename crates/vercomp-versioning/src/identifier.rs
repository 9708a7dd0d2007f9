//! ---
//! vc_section: "02-versioning"
//! vc_subsection: "module"
//! vc_type: "source"
//! vc_scope: "code"
//! vc_description: "Release version value object and its builder."
//! vc_version: "v0.0.0-prealpha"
//! vc_owner: "tbd"
//! ---
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::compose::VersionComposer;
use crate::error::{Result, VersionError};

/// Four-field release version: `major.minor.tiny` plus an optional
/// pre-release label such as `beta1`.
///
/// Values are immutable once constructed. An absent label is `None`, never an
/// empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "VersionBuilder")]
pub struct VersionIdentifier {
    major: u64,
    minor: u64,
    tiny: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pre: Option<Cow<'static, str>>,
}

impl VersionIdentifier {
    /// Final release without a pre-release label.
    #[must_use]
    pub const fn new(major: u64, minor: u64, tiny: u64) -> Self {
        Self {
            major,
            minor,
            tiny,
            pre: None,
        }
    }

    /// Pre-release identifier built from a static label, usable in `const` items.
    ///
    /// # Panics
    ///
    /// Panics when `pre` is empty, contains `.` or whitespace, or is not
    /// ASCII. In a `const` context this is reported at compile time.
    #[must_use]
    pub const fn prerelease(major: u64, minor: u64, tiny: u64, pre: &'static str) -> Self {
        match label_fault(pre) {
            Some(LabelFault::Empty) => panic!("pre-release label must not be empty"),
            Some(LabelFault::Separator) => panic!("pre-release label must not contain '.'"),
            Some(LabelFault::Whitespace) => {
                panic!("pre-release label must not contain whitespace")
            }
            Some(LabelFault::NonAscii) => panic!("pre-release label must be ASCII"),
            None => {}
        }
        Self {
            major,
            minor,
            tiny,
            pre: Some(Cow::Borrowed(pre)),
        }
    }

    /// Returns a copy of this identifier carrying `label` as its pre-release tag.
    pub fn with_pre(&self, label: impl Into<String>) -> Result<Self> {
        let label = label.into();
        validate_pre(&label)?;
        Ok(Self {
            pre: Some(Cow::Owned(label)),
            ..self.clone()
        })
    }

    /// Returns a copy of this identifier with the pre-release tag removed.
    #[must_use]
    pub fn without_pre(&self) -> Self {
        Self::new(self.major, self.minor, self.tiny)
    }

    /// The `major` component.
    #[must_use]
    pub const fn major(&self) -> u64 {
        self.major
    }

    /// The `minor` component.
    #[must_use]
    pub const fn minor(&self) -> u64 {
        self.minor
    }

    /// The `tiny` component.
    #[must_use]
    pub const fn tiny(&self) -> u64 {
        self.tiny
    }

    /// Pre-release label, if any.
    #[must_use]
    pub fn pre(&self) -> Option<&str> {
        self.pre.as_deref()
    }

    /// Whether this identifier denotes a pre-release.
    #[must_use]
    pub fn is_prerelease(&self) -> bool {
        self.pre.is_some()
    }

    /// Canonical dotted display string, e.g. `5.1.0.beta1`.
    #[must_use]
    pub fn render(&self) -> String {
        VersionComposer.render(self)
    }
}

impl fmt::Display for VersionIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl FromStr for VersionIdentifier {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        debug!(input = %s, "parsing version identifier");
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(VersionError::invalid("version string is empty"));
        }
        let segments: Vec<&str> = trimmed.split(VersionComposer::SEPARATOR).collect();
        if !(3..=4).contains(&segments.len()) {
            return Err(VersionError::invalid(format!(
                "expected 3 or 4 segments, found {}",
                segments.len()
            )));
        }
        let mut builder = VersionBuilder::new()
            .major(numeric_segment(segments[0])?)
            .minor(numeric_segment(segments[1])?)
            .tiny(numeric_segment(segments[2])?);
        if let Some(label) = segments.get(3) {
            builder = builder.pre(*label);
        }
        builder.build()
    }
}

impl TryFrom<VersionBuilder> for VersionIdentifier {
    type Error = VersionError;

    fn try_from(builder: VersionBuilder) -> Result<Self> {
        builder.build()
    }
}

/// Partially specified [`VersionIdentifier`].
///
/// Every field is optional here; [`VersionBuilder::build`] enforces that the
/// numeric fields are present before an identifier can exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VersionBuilder {
    /// `major` component; required.
    #[serde(default)]
    pub major: Option<u64>,
    /// `minor` component; required.
    #[serde(default)]
    pub minor: Option<u64>,
    /// `tiny` component; required.
    #[serde(default)]
    pub tiny: Option<u64>,
    /// Optional pre-release label.
    #[serde(default)]
    pub pre: Option<String>,
}

impl VersionBuilder {
    /// Empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `major` component.
    #[must_use]
    pub fn major(mut self, major: u64) -> Self {
        self.major = Some(major);
        self
    }

    /// Set the `minor` component.
    #[must_use]
    pub fn minor(mut self, minor: u64) -> Self {
        self.minor = Some(minor);
        self
    }

    /// Set the `tiny` component.
    #[must_use]
    pub fn tiny(mut self, tiny: u64) -> Self {
        self.tiny = Some(tiny);
        self
    }

    /// Set the pre-release label.
    #[must_use]
    pub fn pre(mut self, label: impl Into<String>) -> Self {
        self.pre = Some(label.into());
        self
    }

    /// Validate and freeze the builder.
    ///
    /// Fails with [`VersionError::InvalidVersion`] naming the first missing
    /// numeric field, or describing why the label was rejected.
    pub fn build(self) -> Result<VersionIdentifier> {
        let major = self.major.ok_or_else(|| missing("major"))?;
        let minor = self.minor.ok_or_else(|| missing("minor"))?;
        let tiny = self.tiny.ok_or_else(|| missing("tiny"))?;
        let identifier = VersionIdentifier::new(major, minor, tiny);
        match self.pre {
            Some(label) => identifier.with_pre(label),
            None => Ok(identifier),
        }
    }
}

fn missing(field: &str) -> VersionError {
    VersionError::invalid(format!("missing required field '{field}'"))
}

/// Plain decimal digits, no sign and no leading zero, so that only the
/// output of `render` is accepted.
fn numeric_segment(segment: &str) -> Result<u64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VersionError::invalid(format!(
            "segment '{segment}' must be a non-negative decimal integer"
        )));
    }
    if segment.len() > 1 && segment.starts_with('0') {
        return Err(VersionError::invalid(format!(
            "segment '{segment}' must not have leading zeros"
        )));
    }
    segment
        .parse::<u64>()
        .map_err(|source| VersionError::InvalidSegment {
            segment: segment.to_owned(),
            source,
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LabelFault {
    Empty,
    Separator,
    Whitespace,
    NonAscii,
}

/// Single label rule shared by the `const` constructor and runtime validation.
const fn label_fault(label: &str) -> Option<LabelFault> {
    let bytes = label.as_bytes();
    if bytes.is_empty() {
        return Some(LabelFault::Empty);
    }
    let mut idx = 0;
    while idx < bytes.len() {
        let b = bytes[idx];
        if !b.is_ascii() {
            return Some(LabelFault::NonAscii);
        }
        if b == b'.' {
            return Some(LabelFault::Separator);
        }
        if b.is_ascii_whitespace() {
            return Some(LabelFault::Whitespace);
        }
        idx += 1;
    }
    None
}

fn validate_pre(label: &str) -> Result<()> {
    let reason = match label_fault(label) {
        None => return Ok(()),
        Some(LabelFault::Empty) => {
            "pre-release label must not be empty; omit it for final releases".to_owned()
        }
        Some(LabelFault::Separator) => format!(
            "pre-release label '{label}' must not contain '{}'",
            VersionComposer::SEPARATOR
        ),
        Some(LabelFault::Whitespace) => {
            format!("pre-release label '{label}' must not contain whitespace")
        }
        Some(LabelFault::NonAscii) => {
            format!("pre-release label '{label}' must be ASCII")
        }
    };
    Err(VersionError::invalid(reason))
}
