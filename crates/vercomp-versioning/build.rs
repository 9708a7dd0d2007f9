//! ---
//! vc_section: "02-versioning"
//! vc_subsection: "build"
//! vc_type: "source"
//! vc_scope: "build"
//! vc_description: "Emits build metadata consumed by VersionInfo."
//! vc_version: "v0.0.0-prealpha"
//! vc_owner: "tbd"
//! ---
use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Git metadata is optional: source tarballs fall back to vergen's defaults.
    EmitBuilder::builder()
        .build_timestamp()
        .cargo_target_triple()
        .git_sha(true)
        .emit()?;

    println!("cargo:rerun-if-changed=build.rs");
    println!(
        "cargo:rustc-env=VERGEN_CARGO_PROFILE={}",
        std::env::var("PROFILE").unwrap_or_else(|_| "UNKNOWN".to_owned())
    );
    Ok(())
}
