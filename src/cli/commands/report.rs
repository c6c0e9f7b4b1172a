//! Shared rendering for the requirement list.
//!
//! The requirement list is the artifact of `install` and `resolve` and is
//! always written through [`UserInterface::emit`]; everything else goes to
//! the status channel.

use anyhow::Context;
use serde::Serialize;

use crate::config::{OutputFormat, PackageInfo};
use crate::error::Result;
use crate::requirements::{Requirement, Resolution};
use crate::ui::UserInterface;

/// JSON shape of an emitted resolution.
#[derive(Debug, Serialize)]
struct ResolutionReport<'a> {
    package: &'a str,
    version: &'a str,
    #[serde(flatten)]
    resolution: &'a Resolution,
}

fn join(reqs: &[Requirement]) -> String {
    reqs.iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Show both lists when minimal filtering ran.
pub fn report_minimal(resolution: &Resolution, ui: &mut dyn UserInterface) {
    let Some(unfiltered) = &resolution.unfiltered else {
        return;
    };

    let minimal = join(&resolution.requirements);
    let original = join(unfiltered);
    tracing::info!("minimal install: [{}]", minimal);
    tracing::info!("original install: [{}]", original);

    ui.field("Minimal install", &minimal);
    ui.field("Original install", &original);
}

/// Write the requirement list in the requested format.
pub fn emit_resolution(
    package: &PackageInfo,
    resolution: &Resolution,
    format: OutputFormat,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for req in &resolution.requirements {
                ui.emit(&req.to_string());
            }
        }
        OutputFormat::Json => {
            let report = ResolutionReport {
                package: &package.name,
                version: &package.version,
                resolution,
            };
            let json = serde_json::to_string_pretty(&report)
                .context("Failed to serialize requirement list")?;
            ui.emit(&json);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::OsFamily;
    use crate::requirements::{base_requirements, Resolver};
    use crate::ui::MockUI;
    use crate::version::RuntimeVersion;

    fn resolution(minimal: Option<bool>) -> Resolution {
        Resolver::builtin().resolve_report(
            &base_requirements(),
            RuntimeVersion::new(3, 8),
            &OsFamily::Linux,
            minimal,
        )
    }

    #[test]
    fn text_emits_one_specifier_per_line() {
        let mut ui = MockUI::new();
        let res = resolution(None);
        emit_resolution(&PackageInfo::default(), &res, OutputFormat::Text, &mut ui).unwrap();

        assert_eq!(ui.emitted().len(), res.requirements.len());
        assert_eq!(ui.emitted()[0], "decorator >= 4.0.9");
        assert_eq!(ui.emitted()[1], "numpy");
        assert!(ui.emitted().contains(&"numba < 0.51.0".to_string()));
    }

    #[test]
    fn text_output_for_linux_3_8() {
        let mut ui = MockUI::new();
        emit_resolution(
            &PackageInfo::default(),
            &resolution(None),
            OutputFormat::Text,
            &mut ui,
        )
        .unwrap();

        insta::assert_snapshot!(ui.emitted().join("\n"), @r"
        decorator >= 4.0.9
        numpy
        pandas >= 0.23.2
        pillow >= 5.2.0
        prettytable == 0.7.2
        resampy == 0.2.1
        requests >= 2.9.1
        scipy >= 1.1.0
        six >= 1.10.0
        coremltools == 5.0b2
        tensorflow >= 2.0.0
        numba < 0.51.0
        ");
    }

    #[test]
    fn json_carries_package_and_rules() {
        let mut ui = MockUI::new();
        let res = resolution(Some(true));
        emit_resolution(&PackageInfo::default(), &res, OutputFormat::Json, &mut ui).unwrap();

        assert_eq!(ui.emitted().len(), 1);
        let value: serde_json::Value = serde_json::from_str(&ui.emitted()[0]).unwrap();
        assert_eq!(value["package"], "turicreate");
        assert_eq!(value["version"], "6.4.2");
        assert_eq!(
            value["applied_rules"],
            serde_json::json!(["tensorflow-3.8-plus", "numba-manylinux2010"])
        );
        let reqs = value["requirements"].as_array().unwrap();
        assert!(reqs.iter().all(|r| !r.as_str().unwrap().starts_with("pandas")));
        assert!(value["unfiltered"].as_array().unwrap().len() > reqs.len());
    }

    #[test]
    fn json_unfiltered_is_null_without_minimal() {
        let mut ui = MockUI::new();
        emit_resolution(
            &PackageInfo::default(),
            &resolution(None),
            OutputFormat::Json,
            &mut ui,
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.emitted()[0]).unwrap();
        assert!(value["unfiltered"].is_null());
    }

    #[test]
    fn minimal_report_shows_both_lists() {
        let mut ui = MockUI::new();
        report_minimal(&resolution(Some(true)), &mut ui);

        let minimal = ui.field_value("Minimal install").unwrap();
        let original = ui.field_value("Original install").unwrap();
        assert!(!minimal.contains("scipy"));
        assert!(original.contains("scipy >= 1.1.0"));
    }

    #[test]
    fn minimal_report_silent_without_minimal() {
        let mut ui = MockUI::new();
        report_minimal(&resolution(Some(false)), &mut ui);
        assert!(ui.fields().is_empty());
    }
}
