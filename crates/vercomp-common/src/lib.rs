//! ---
//! vc_section: "01-core-functionality"
//! vc_subsection: "module"
//! vc_type: "source"
//! vc_scope: "code"
//! vc_description: "Shared configuration and logging primitives."
//! vc_version: "v0.0.0-prealpha"
//! vc_owner: "tbd"
//! ---
//! Shared primitives for the vercomp workspace: configuration loading and
//! tracing initialisation consumed by the CLI.

pub mod config;
pub mod logging;

pub use config::{AppConfig, LoadedAppConfig, LoggingConfig};
pub use logging::{init, init_tracing, LogFormat};
