//! Library integration tests.

use platgate::platform::{HostDetector, HostOverrides, OsFamily, PlatformDescriptor, Validator};
use platgate::requirements::{base_requirements, Requirement, Resolver};
use platgate::version::RuntimeVersion;
use platgate::GateError;

#[test]
fn error_types_are_public() {
    let err = GateError::DetectionFailed {
        what: "runtime version".into(),
        message: "no interpreter".into(),
    };
    assert!(err.to_string().contains("runtime version"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> platgate::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use platgate::cli::{Cli, Commands};

    let cli = Cli::parse_from(["platgate", "install", "--minimal"]);
    if let Commands::Install(args) = cli.command {
        assert!(args.minimal);
    } else {
        panic!("Expected Install command");
    }
}

#[test]
fn detector_then_validator_round() {
    let detector = HostDetector::new(HostOverrides {
        arch: Some("64bit".into()),
        platform: Some("macosx-arm64".into()),
        os_version: Some("13.4".into()),
        runtime: Some("3.9".into()),
        python: None,
    });
    let descriptor = detector.platform().unwrap();
    let runtime = detector.runtime().unwrap();

    assert_eq!(descriptor.os_family, OsFamily::MacOs);
    assert_eq!(runtime, RuntimeVersion::new(3, 9));
    assert!(Validator::new("turicreate").validate(&descriptor).is_ok());
}

#[test]
fn resolution_has_one_entry_per_name_everywhere() {
    let resolver = Resolver::builtin();
    let families = [
        OsFamily::MacOs,
        OsFamily::Linux,
        OsFamily::Windows,
        OsFamily::Other("sunos5".into()),
    ];
    let runtimes = [(2, 7), (3, 5), (3, 6), (3, 7), (3, 8), (3, 9), (3, 10)];

    for family in &families {
        for (major, minor) in runtimes {
            for minimal in [None, Some(false), Some(true)] {
                let res = resolver.resolve_report(
                    &base_requirements(),
                    RuntimeVersion::new(major, minor),
                    family,
                    minimal,
                );
                assert!(
                    res.duplicate_names().is_empty(),
                    "duplicates for {} {}.{}",
                    family,
                    major,
                    minor
                );
            }
        }
    }
}

#[test]
fn custom_base_list_is_resolved() {
    let base: Vec<Requirement> = ["numpy >= 1.20", "pandas"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    let descriptor = PlatformDescriptor::new("64bit", "linux-x86_64", "6.1");
    let reqs = Resolver::builtin().resolve(
        &base,
        RuntimeVersion::new(3, 8),
        &descriptor.os_family,
        Some(true),
    );

    let specs: Vec<String> = reqs.iter().map(|r| r.to_string()).collect();
    assert_eq!(specs, ["numpy >= 1.20", "numba < 0.51.0"]);
}
