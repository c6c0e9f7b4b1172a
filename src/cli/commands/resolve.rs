//! The `platgate resolve` command.
//!
//! Runs the resolver alone. The OS family comes from `--os`, then the
//! platform override, then the running binary; no validation is done.

use crate::cli::args::ResolveArgs;
use crate::config::GateConfig;
use crate::error::Result;
use crate::platform::detect::platform_tag;
use crate::platform::{HostDetector, OsFamily};
use crate::requirements::{base_requirements, Resolver};
use crate::ui::UserInterface;
use crate::version::RuntimeVersion;

use super::dispatcher::{Command, CommandResult};
use super::report::{emit_resolution, report_minimal};

/// The resolve command implementation.
pub struct ResolveCommand {
    config: GateConfig,
    args: ResolveArgs,
}

impl ResolveCommand {
    /// Create a new resolve command.
    pub fn new(config: GateConfig, args: ResolveArgs) -> Self {
        Self { config, args }
    }

    fn os_family(&self, detector: &HostDetector) -> OsFamily {
        match (&self.args.os, &detector.overrides().platform) {
            (Some(os), _) => OsFamily::from_platform(os),
            (None, Some(platform)) => OsFamily::from_platform(platform),
            (None, None) => OsFamily::from_platform(&platform_tag()),
        }
    }

    /// Resolve for the given runtime and family.
    pub fn run(
        &self,
        runtime: RuntimeVersion,
        os_family: &OsFamily,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let minimal = if self.args.minimal {
            Some(true)
        } else {
            self.config.settings.minimal
        };

        ui.show_header(&format!("Resolving for {} on {}", runtime, os_family));
        if let OsFamily::Other(raw) = os_family {
            ui.warning(&format!("'{}' is not a supported OS family", raw));
        }
        let resolution =
            Resolver::builtin().resolve_report(&base_requirements(), runtime, os_family, minimal);
        report_minimal(&resolution, ui);
        if !resolution.applied_rules.is_empty() {
            ui.field("Rules", &resolution.applied_rules.join(", "));
        }

        let format = self.args.format.unwrap_or(self.config.settings.format);
        emit_resolution(&self.config.package, &resolution, format, ui)?;
        Ok(CommandResult::success())
    }
}

impl Command for ResolveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let detector =
            HostDetector::new(self.args.host.overrides().or(self.config.host.clone()));
        let runtime = detector.runtime()?;
        let os_family = self.os_family(&detector);
        self.run(runtime, &os_family, ui)
    }
}
