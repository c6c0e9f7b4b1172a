//! Host introspection.
//!
//! Produces the [`PlatformDescriptor`] and [`RuntimeVersion`] facts the core
//! consumes. Every fact can be overridden through [`HostOverrides`], which
//! keeps the check hermetic in tests and lets operators evaluate a different
//! target than the machine they are on.

use std::process::Command;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::descriptor::{OsFamily, PlatformDescriptor, ARCH_32BIT, ARCH_64BIT};
use crate::error::{GateError, Result};
use crate::version::RuntimeVersion;

/// Interpreter probed for the runtime version when none is configured.
pub const DEFAULT_PYTHON: &str = "python3";

static DOTTED_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)+").expect("dotted version pattern is valid"));

/// Optional replacements for detected host facts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostOverrides {
    /// Word-size marker, e.g. `64bit`.
    pub arch: Option<String>,
    /// Platform tag, e.g. `macosx-x86_64`.
    pub platform: Option<String>,
    /// Dotted OS version.
    pub os_version: Option<String>,
    /// Runtime `major.minor`.
    pub runtime: Option<String>,
    /// Interpreter used to detect the runtime.
    pub python: Option<String>,
}

impl HostOverrides {
    /// Fill every unset field from `fallback`.
    pub fn or(self, fallback: HostOverrides) -> HostOverrides {
        HostOverrides {
            arch: self.arch.or(fallback.arch),
            platform: self.platform.or(fallback.platform),
            os_version: self.os_version.or(fallback.os_version),
            runtime: self.runtime.or(fallback.runtime),
            python: self.python.or(fallback.python),
        }
    }
}

/// Word-size marker of the running binary.
pub fn architecture() -> &'static str {
    if cfg!(target_pointer_width = "64") {
        ARCH_64BIT
    } else {
        ARCH_32BIT
    }
}

/// Platform tag of the running binary, e.g. `linux-x86_64` or `macosx-aarch64`.
pub fn platform_tag() -> String {
    let os = match std::env::consts::OS {
        "macos" => "macosx",
        "windows" => "win",
        other => other,
    };
    format!("{}-{}", os, std::env::consts::ARCH)
}

/// Pull the first dotted version out of command output.
fn extract_dotted(output: &str) -> Option<String> {
    DOTTED_PATTERN.find(output).map(|m| m.as_str().to_string())
}

/// Run a command and return its combined stdout and stderr on success.
fn run_command(program: &str, args: &[&str]) -> Option<String> {
    match Command::new(program).args(args).output() {
        Ok(output) if output.status.success() => {
            let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
            text.push_str(&String::from_utf8_lossy(&output.stderr));
            Some(text)
        }
        Ok(output) => {
            tracing::debug!("{} exited with {}", program, output.status);
            None
        }
        Err(e) => {
            tracing::debug!("could not run {}: {}", program, e);
            None
        }
    }
}

/// Builds host descriptors, applying overrides before detection.
#[derive(Debug, Clone, Default)]
pub struct HostDetector {
    overrides: HostOverrides,
}

impl HostDetector {
    pub fn new(overrides: HostOverrides) -> Self {
        Self { overrides }
    }

    pub fn overrides(&self) -> &HostOverrides {
        &self.overrides
    }

    /// Describe the host platform.
    pub fn platform(&self) -> Result<PlatformDescriptor> {
        self.platform_with(run_command)
    }

    /// Describe the host platform with a custom command runner (for testing).
    pub fn platform_with<F>(&self, run: F) -> Result<PlatformDescriptor>
    where
        F: Fn(&str, &[&str]) -> Option<String>,
    {
        let arch = self
            .overrides
            .arch
            .clone()
            .unwrap_or_else(|| architecture().to_string());
        let platform = self.overrides.platform.clone().unwrap_or_else(platform_tag);
        let family = OsFamily::from_platform(&platform);

        let os_version = match &self.overrides.os_version {
            Some(v) => v.clone(),
            None => detect_os_version(&family, &run)?,
        };

        tracing::debug!(
            "host: arch={} platform={} os_version={}",
            arch,
            platform,
            os_version
        );

        Ok(PlatformDescriptor::new(arch, platform, os_version))
    }

    /// Detect the runtime version.
    pub fn runtime(&self) -> Result<RuntimeVersion> {
        self.runtime_with(run_command)
    }

    /// Detect the runtime version with a custom command runner (for testing).
    pub fn runtime_with<F>(&self, run: F) -> Result<RuntimeVersion>
    where
        F: Fn(&str, &[&str]) -> Option<String>,
    {
        if let Some(runtime) = &self.overrides.runtime {
            return runtime.parse();
        }

        let python = self.overrides.python.as_deref().unwrap_or(DEFAULT_PYTHON);
        let banner = run(python, &["--version"]).ok_or_else(|| GateError::DetectionFailed {
            what: "runtime version".to_string(),
            message: format!("'{} --version' did not succeed; pass --runtime", python),
        })?;

        let runtime = banner.parse()?;
        tracing::debug!("runtime {} from '{}'", runtime, banner.trim());
        Ok(runtime)
    }
}

/// Detect the OS version for a family.
///
/// macOS and Windows need a version for the floor check, so failing to read
/// one is an error. Other families keep whatever `uname -r` reports, or an
/// empty string.
fn detect_os_version<F>(family: &OsFamily, run: &F) -> Result<String>
where
    F: Fn(&str, &[&str]) -> Option<String>,
{
    let (program, args): (&str, &[&str]) = match family {
        OsFamily::MacOs => ("sw_vers", &["-productVersion"][..]),
        OsFamily::Windows => ("cmd", &["/C", "ver"][..]),
        OsFamily::Linux | OsFamily::Other(_) => ("uname", &["-r"][..]),
    };

    let detected = run(program, args).and_then(|out| extract_dotted(&out));

    match (detected, family) {
        (Some(version), _) => Ok(version),
        (None, OsFamily::MacOs | OsFamily::Windows) => Err(GateError::DetectionFailed {
            what: format!("{} version", family.display_name()),
            message: format!(
                "'{} {}' produced no version; pass --os-version",
                program,
                args.join(" ")
            ),
        }),
        (None, _) => Ok(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_commands(_: &str, _: &[&str]) -> Option<String> {
        None
    }

    fn overrides(platform: &str) -> HostOverrides {
        HostOverrides {
            platform: Some(platform.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn extract_dotted_versions() {
        assert_eq!(extract_dotted("14.2.1\n"), Some("14.2.1".to_string()));
        assert_eq!(
            extract_dotted("Microsoft Windows [Version 10.0.19045.3803]"),
            Some("10.0.19045.3803".to_string())
        );
        assert_eq!(extract_dotted("6.5.0-14-generic"), Some("6.5.0".to_string()));
        assert_eq!(extract_dotted("no version"), None);
    }

    #[test]
    fn overrides_skip_detection() {
        let detector = HostDetector::new(HostOverrides {
            arch: Some("32bit".to_string()),
            platform: Some("win-amd64".to_string()),
            os_version: Some("5.1".to_string()),
            ..Default::default()
        });
        let d = detector.platform_with(no_commands).unwrap();
        assert_eq!(d.architecture, "32bit");
        assert_eq!(d.os_family, OsFamily::Windows);
        assert_eq!(d.os_version, "5.1");
    }

    #[test]
    fn macos_version_comes_from_sw_vers() {
        let detector = HostDetector::new(overrides("macosx-arm64"));
        let d = detector
            .platform_with(|program, args| {
                assert_eq!(program, "sw_vers");
                assert_eq!(args, ["-productVersion"]);
                Some("14.2.1\n".to_string())
            })
            .unwrap();
        assert_eq!(d.os_version, "14.2.1");
    }

    #[test]
    fn windows_version_comes_from_ver() {
        let detector = HostDetector::new(overrides("win-amd64"));
        let d = detector
            .platform_with(|program, _| {
                assert_eq!(program, "cmd");
                Some("\r\nMicrosoft Windows [Version 10.0.22631.2861]\r\n".to_string())
            })
            .unwrap();
        assert_eq!(d.os_version, "10.0.22631.2861");
    }

    #[test]
    fn missing_macos_version_is_an_error() {
        let detector = HostDetector::new(overrides("macosx-x86_64"));
        let err = detector.platform_with(no_commands).unwrap_err();
        assert!(matches!(err, GateError::DetectionFailed { .. }));
    }

    #[test]
    fn missing_linux_version_is_empty() {
        let detector = HostDetector::new(overrides("linux-x86_64"));
        let d = detector.platform_with(no_commands).unwrap();
        assert_eq!(d.os_version, "");
        assert_eq!(d.os_family, OsFamily::Linux);
    }

    #[test]
    fn runtime_override_wins() {
        let detector = HostDetector::new(HostOverrides {
            runtime: Some("3.9".to_string()),
            ..Default::default()
        });
        let runtime = detector
            .runtime_with(|_, _| panic!("should not probe"))
            .unwrap();
        assert_eq!(runtime, RuntimeVersion::new(3, 9));
    }

    #[test]
    fn runtime_from_interpreter_banner() {
        let detector = HostDetector::new(HostOverrides {
            python: Some("python2".to_string()),
            ..Default::default()
        });
        let runtime = detector
            .runtime_with(|program, args| {
                assert_eq!(program, "python2");
                assert_eq!(args, ["--version"]);
                Some("Python 2.7.18\n".to_string())
            })
            .unwrap();
        assert_eq!(runtime, RuntimeVersion::new(2, 7));
    }

    #[test]
    fn runtime_detection_failure() {
        let detector = HostDetector::default();
        let err = detector.runtime_with(no_commands).unwrap_err();
        assert!(err.to_string().contains("python3"));
    }

    #[test]
    fn overrides_merge_prefers_self() {
        let cli = HostOverrides {
            arch: Some("64bit".to_string()),
            ..Default::default()
        };
        let config = HostOverrides {
            arch: Some("32bit".to_string()),
            runtime: Some("3.7".to_string()),
            ..Default::default()
        };
        let merged = cli.or(config);
        assert_eq!(merged.arch.as_deref(), Some("64bit"));
        assert_eq!(merged.runtime.as_deref(), Some("3.7"));
        assert!(merged.platform.is_none());
    }

    #[test]
    fn running_binary_has_a_tag() {
        assert!(platform_tag().contains('-'));
        assert!([ARCH_32BIT, ARCH_64BIT].contains(&architecture()));
    }
}
