//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::OutputFormat;
use crate::platform::HostOverrides;

/// platgate - Install-time platform validation and dependency resolution.
#[derive(Debug, Parser)]
#[command(name = "platgate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .platgate.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Only print errors and the requirement list
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate the host and emit the resolved requirements
    Install(InstallArgs),

    /// Validate the host platform only
    Check(CheckArgs),

    /// Resolve requirements without validating the host
    Resolve(ResolveArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Overrides for detected host facts.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct HostArgs {
    /// Architecture word-size marker (e.g. 64bit)
    #[arg(long, env = "PLATGATE_ARCH", value_name = "MARKER")]
    pub arch: Option<String>,

    /// Platform tag (e.g. macosx-x86_64, linux-x86_64, win-amd64)
    #[arg(long, env = "PLATGATE_PLATFORM", value_name = "TAG")]
    pub platform: Option<String>,

    /// Dotted OS version (e.g. 10.15.7)
    #[arg(long, env = "PLATGATE_OS_VERSION", value_name = "VERSION")]
    pub os_version: Option<String>,

    /// Runtime version as MAJOR.MINOR (e.g. 3.8)
    #[arg(long, env = "PLATGATE_RUNTIME", value_name = "X.Y")]
    pub runtime: Option<String>,

    /// Interpreter probed for the runtime version
    #[arg(long, env = "PLATGATE_PYTHON", value_name = "BIN")]
    pub python: Option<String>,
}

impl HostArgs {
    pub fn overrides(&self) -> HostOverrides {
        HostOverrides {
            arch: self.arch.clone(),
            platform: self.platform.clone(),
            os_version: self.os_version.clone(),
            runtime: self.runtime.clone(),
            python: self.python.clone(),
        }
    }
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InstallArgs {
    /// Leave out heavyweight optional dependencies
    #[arg(long)]
    pub minimal: bool,

    /// Output format for the requirement list
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(flatten)]
    pub host: HostArgs,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Output format for the platform description
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(flatten)]
    pub host: HostArgs,
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResolveArgs {
    /// Leave out heavyweight optional dependencies
    #[arg(long)]
    pub minimal: bool,

    /// OS family to resolve for (macos, linux, windows, or any platform tag)
    #[arg(long, value_name = "OS")]
    pub os: Option<String>,

    /// Output format for the requirement list
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(flatten)]
    pub host: HostArgs,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
