//! ---
//! vc_section: "05-external-interfaces"
//! vc_subsection: "binary"
//! vc_type: "source"
//! vc_scope: "code"
//! vc_description: "Control CLI for composing and inspecting release versions."
//! vc_version: "v0.0.0-prealpha"
//! vc_owner: "tbd"
//! ---
use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use vercomp_versioning::VersionInfo;

mod compose;
mod show;

#[derive(Debug, Parser)]
#[command(
    author,
    disable_version_flag = true,
    about = "Compose and inspect release version strings",
    long_about = None
)]
struct Cli {
    #[arg(
        short = 'V',
        long = "version",
        action = ArgAction::SetTrue,
        help = "Print extended version information and exit"
    )]
    version: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Render a version from its individual fields")]
    Render(compose::RenderArgs),
    #[command(about = "Parse a dotted version string into its fields")]
    Parse(compose::ParseArgs),
    #[command(about = "Print the semantic-version form of a dotted version")]
    Semver(compose::SemverArgs),
    #[command(about = "Show the configured (or built-in) release")]
    Show(show::ShowArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    // `show` installs its subscriber once the configuration is known.
    if !matches!(cli.command, Some(Commands::Show(_))) {
        vercomp_common::init();
    }
    if cli.version {
        println!("{}", VersionInfo::current().extended());
        return Ok(());
    }
    match cli.command {
        Some(Commands::Render(args)) => compose::render(args)?,
        Some(Commands::Parse(args)) => compose::parse(args)?,
        Some(Commands::Semver(args)) => compose::semver(args)?,
        Some(Commands::Show(args)) => show::run(args)?,
        None => println!("{}", VersionInfo::current().cli_string()),
    }
    Ok(())
}
