//! ---
//! vc_section: "05-external-interfaces"
//! vc_subsection: "binary"
//! vc_type: "source"
//! vc_scope: "code"
//! vc_description: "Field-level render, parse and semver commands."
//! vc_version: "v0.0.0-prealpha"
//! vc_owner: "tbd"
//! ---
use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;
use vercomp_versioning::{VersionBuilder, VersionIdentifier};

/// Fields for `render`. Numeric fields are checked by [`VersionBuilder`] so a
/// missing one is reported as an invalid version.
#[derive(Debug, Args)]
pub struct RenderArgs {
    #[arg(long)]
    pub major: Option<u64>,
    #[arg(long)]
    pub minor: Option<u64>,
    #[arg(long)]
    pub tiny: Option<u64>,
    /// Pre-release label, e.g. `beta1`.
    #[arg(long, value_name = "LABEL")]
    pub pre: Option<String>,
}

impl From<RenderArgs> for VersionBuilder {
    fn from(args: RenderArgs) -> Self {
        VersionBuilder {
            major: args.major,
            minor: args.minor,
            tiny: args.tiny,
            pre: args.pre,
        }
    }
}

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Dotted version such as `5.1.0.beta1`.
    pub version: String,
    /// Emit the fields as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct SemverArgs {
    pub version: String,
}

pub fn render(args: RenderArgs) -> Result<()> {
    let identifier = VersionBuilder::from(args).build()?;
    debug!(version = %identifier, "rendered version");
    println!("{}", identifier.render());
    Ok(())
}

pub fn parse(args: ParseArgs) -> Result<()> {
    let identifier = parse_identifier(&args.version)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&identifier)?);
    } else {
        println!(
            "major: {}\nminor: {}\ntiny: {}\npre: {}",
            identifier.major(),
            identifier.minor(),
            identifier.tiny(),
            identifier.pre().unwrap_or("-")
        );
    }
    Ok(())
}

pub fn semver(args: SemverArgs) -> Result<()> {
    let identifier = parse_identifier(&args.version)?;
    let version = identifier
        .to_semver()
        .with_context(|| format!("cannot express {identifier} as semver"))?;
    println!("{version}");
    Ok(())
}

fn parse_identifier(raw: &str) -> Result<VersionIdentifier> {
    raw.parse::<VersionIdentifier>()
        .with_context(|| format!("failed to parse version '{raw}'"))
}
