//! The `platgate install` command.
//!
//! Resolves the requirement list for the host, reports the minimal and
//! original lists when minimal mode is on, then gates on the platform. The
//! list is only emitted once the host passes validation.

use crate::cli::args::InstallArgs;
use crate::config::GateConfig;
use crate::error::Result;
use crate::platform::{HostDetector, PlatformDescriptor, Validator};
use crate::requirements::{base_requirements, Resolver};
use crate::ui::UserInterface;
use crate::version::RuntimeVersion;

use super::dispatcher::{Command, CommandResult};
use super::report::{emit_resolution, report_minimal};

/// The install command implementation.
pub struct InstallCommand {
    config: GateConfig,
    args: InstallArgs,
}

impl InstallCommand {
    /// Create a new install command.
    pub fn new(config: GateConfig, args: InstallArgs) -> Self {
        Self { config, args }
    }

    /// Minimal mode from the flag, falling back to the config.
    fn minimal(&self) -> Option<bool> {
        if self.args.minimal {
            Some(true)
        } else {
            self.config.settings.minimal
        }
    }

    fn detector(&self) -> HostDetector {
        HostDetector::new(self.args.host.overrides().or(self.config.host.clone()))
    }

    /// Run against already-detected host facts.
    pub fn run(
        &self,
        descriptor: &PlatformDescriptor,
        runtime: RuntimeVersion,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let package = &self.config.package;
        ui.show_header(&format!("{} {}", package.name, package.version));
        ui.field("Platform", &descriptor.platform);
        ui.field("Runtime", &runtime.to_string());
        ui.message("Resolving requirements");

        let resolution = Resolver::builtin().resolve_report(
            &base_requirements(),
            runtime,
            &descriptor.os_family,
            self.minimal(),
        );
        report_minimal(&resolution, ui);

        Validator::new(package.name.as_str()).validate(descriptor)?;
        ui.success(&format!(
            "{} {} supported",
            descriptor.os_family.display_name(),
            descriptor.os_version
        ));

        let format = self.args.format.unwrap_or(self.config.settings.format);
        emit_resolution(package, &resolution, format, ui)?;
        Ok(CommandResult::success())
    }
}

impl Command for InstallCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let detector = self.detector();
        let descriptor = detector.platform()?;
        let runtime = detector.runtime()?;
        self.run(&descriptor, runtime, ui)
    }
}
