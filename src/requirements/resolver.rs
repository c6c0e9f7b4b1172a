//! Dependency set resolution.
//!
//! Resolution is a pure function of the base list, the runtime version, the
//! OS family and the minimal flag:
//!
//! 1. start from the base list
//! 2. add every [`ConditionalRule`](super::ConditionalRule) whose predicate
//!    holds, in table order; a rule naming a package already present replaces
//!    that entry in place
//! 3. when minimal mode is requested, drop everything the
//!    [`ExclusionSet`] excludes
//!
//! # Example
//!
//! ```
//! use platgate::platform::OsFamily;
//! use platgate::requirements::{base_requirements, resolve};
//! use platgate::version::RuntimeVersion;
//!
//! let reqs = resolve(&base_requirements(), RuntimeVersion::new(3, 9), &OsFamily::Linux, None);
//! assert!(reqs.iter().any(|r| r.to_string() == "llvmlite == 0.36.0"));
//! assert!(reqs.iter().all(|r| r.name != "numba"));
//! ```

use serde::Serialize;

use super::exclusion::ExclusionSet;
use super::requirement::Requirement;
use super::rules::{ResolveContext, RuleTable};
use crate::platform::OsFamily;
use crate::version::RuntimeVersion;

/// Requirements declared on every platform and runtime.
pub fn base_requirements() -> Vec<Requirement> {
    vec![
        Requirement::at_least("decorator", "4.0.9"),
        Requirement::any("numpy"),
        Requirement::at_least("pandas", "0.23.2"),
        Requirement::at_least("pillow", "5.2.0"),
        Requirement::exact("prettytable", "0.7.2"),
        Requirement::exact("resampy", "0.2.1"),
        Requirement::at_least("requests", "2.9.1"),
        Requirement::at_least("scipy", "1.1.0"),
        Requirement::at_least("six", "1.10.0"),
        Requirement::exact("coremltools", "5.0b2"),
    ]
}

/// Outcome of a resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Final requirement list, in declaration order.
    pub requirements: Vec<Requirement>,
    /// The list before minimal filtering; `None` unless minimal was requested.
    pub unfiltered: Option<Vec<Requirement>>,
    /// Ids of the conditional rules that fired.
    pub applied_rules: Vec<&'static str>,
}

impl Resolution {
    /// Package names that appear more than once in the final list.
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        let mut dupes = Vec::new();
        for req in &self.requirements {
            let name = req.name.as_str();
            if seen.contains(&name) {
                if !dupes.contains(&name) {
                    dupes.push(name);
                }
            } else {
                seen.push(name);
            }
        }
        dupes
    }

    /// Requirements dropped by minimal filtering.
    pub fn excluded(&self) -> Vec<&Requirement> {
        match &self.unfiltered {
            Some(all) => all
                .iter()
                .filter(|r| !self.requirements.contains(r))
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Resolver over a rule table and exclusion set.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    rules: RuleTable,
    exclusions: ExclusionSet,
}

impl Resolver {
    pub fn new(rules: RuleTable, exclusions: ExclusionSet) -> Self {
        Self { rules, exclusions }
    }

    /// Resolver with the builtin rules and exclusion set.
    pub fn builtin() -> Self {
        Self::new(RuleTable::builtin(), ExclusionSet::builtin())
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn exclusions(&self) -> &ExclusionSet {
        &self.exclusions
    }

    /// Resolve and keep the details needed for reporting.
    pub fn resolve_report(
        &self,
        base: &[Requirement],
        runtime: RuntimeVersion,
        os_family: &OsFamily,
        minimal: Option<bool>,
    ) -> Resolution {
        let ctx = ResolveContext::new(runtime, os_family.clone());
        let mut accumulated = base.to_vec();
        let mut applied_rules = Vec::new();

        for rule in self.rules.matching(&ctx) {
            let requirement = rule.requirement().clone();
            match accumulated.iter().position(|r| r.name == requirement.name) {
                Some(index) => {
                    tracing::warn!(
                        "rule '{}' replaces '{}' with '{}'",
                        rule.id(),
                        accumulated[index],
                        requirement
                    );
                    accumulated[index] = requirement;
                }
                None => accumulated.push(requirement),
            }
            tracing::debug!("applied rule '{}' for runtime {} on {}", rule.id(), runtime, os_family);
            applied_rules.push(rule.id());
        }

        if minimal == Some(true) {
            let requirements: Vec<Requirement> = accumulated
                .iter()
                .filter(|r| self.exclusions.keeps(r))
                .cloned()
                .collect();
            Resolution {
                requirements,
                unfiltered: Some(accumulated),
                applied_rules,
            }
        } else {
            Resolution {
                requirements: accumulated,
                unfiltered: None,
                applied_rules,
            }
        }
    }

    /// Resolve to the final requirement list.
    pub fn resolve(
        &self,
        base: &[Requirement],
        runtime: RuntimeVersion,
        os_family: &OsFamily,
        minimal: Option<bool>,
    ) -> Vec<Requirement> {
        self.resolve_report(base, runtime, os_family, minimal)
            .requirements
    }
}

/// Resolve with the builtin rule table and exclusion set.
pub fn resolve(
    base: &[Requirement],
    runtime: RuntimeVersion,
    os_family: &OsFamily,
    minimal: Option<bool>,
) -> Vec<Requirement> {
    Resolver::builtin().resolve(base, runtime, os_family, minimal)
}
