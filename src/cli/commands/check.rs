//! The `platgate check` command.

use anyhow::Context;
use serde::Serialize;

use crate::cli::args::CheckArgs;
use crate::config::{GateConfig, OutputFormat};
use crate::error::Result;
use crate::platform::{HostDetector, PlatformDescriptor, Validator};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// JSON shape of a passed check.
#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    package: &'a str,
    architecture: &'a str,
    platform: &'a str,
    os_family: String,
    os_version: &'a str,
    supported: bool,
}

/// The check command implementation.
pub struct CheckCommand {
    config: GateConfig,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(config: GateConfig, args: CheckArgs) -> Self {
        Self { config, args }
    }

    /// Validate an already-detected descriptor.
    pub fn run(
        &self,
        descriptor: &PlatformDescriptor,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let package = &self.config.package.name;
        ui.show_header(&format!("Checking host for {}", package));
        ui.field("Architecture", &descriptor.architecture);
        ui.field("Platform", &descriptor.platform);
        ui.field("OS", descriptor.os_family.display_name());
        ui.field("OS version", &descriptor.os_version);

        Validator::new(package.as_str()).validate(descriptor)?;
        ui.success("Platform supported");

        if self.args.format.unwrap_or(self.config.settings.format) == OutputFormat::Json {
            let report = CheckReport {
                package,
                architecture: &descriptor.architecture,
                platform: &descriptor.platform,
                os_family: descriptor.os_family.to_string(),
                os_version: &descriptor.os_version,
                supported: true,
            };
            let json = serde_json::to_string_pretty(&report)
                .context("Failed to serialize platform report")?;
            ui.emit(&json);
        }

        Ok(CommandResult::success())
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let overrides = self.args.host.overrides().or(self.config.host.clone());
        let descriptor = HostDetector::new(overrides).platform()?;
        self.run(&descriptor, ui)
    }
}
