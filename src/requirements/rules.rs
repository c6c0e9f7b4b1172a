//! Conditional requirement rules.
//!
//! Each [`ConditionalRule`] pairs a predicate over the [`ResolveContext`]
//! with the requirement it contributes. The [`RuleTable`] keeps rules in
//! evaluation order; the resolver walks it once per resolution.

use super::requirement::Requirement;
use crate::platform::OsFamily;
use crate::version::RuntimeVersion;

/// Inputs every rule predicate sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveContext {
    pub runtime: RuntimeVersion,
    pub os_family: OsFamily,
}

impl ResolveContext {
    pub fn new(runtime: RuntimeVersion, os_family: OsFamily) -> Self {
        Self { runtime, os_family }
    }
}

/// A requirement added when its predicate holds.
#[derive(Debug, Clone)]
pub struct ConditionalRule {
    id: &'static str,
    description: &'static str,
    when: fn(&ResolveContext) -> bool,
    requirement: Requirement,
}

impl ConditionalRule {
    pub fn new(
        id: &'static str,
        description: &'static str,
        when: fn(&ResolveContext) -> bool,
        requirement: Requirement,
    ) -> Self {
        Self {
            id,
            description,
            when,
            requirement,
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn requirement(&self) -> &Requirement {
        &self.requirement
    }

    pub fn applies(&self, ctx: &ResolveContext) -> bool {
        (self.when)(ctx)
    }
}

fn legacy_llvmlite(ctx: &ResolveContext) -> bool {
    ctx.runtime.major == 2 || ctx.runtime.is(3, 5)
}

fn py39_llvmlite(ctx: &ResolveContext) -> bool {
    ctx.runtime.is(3, 9)
}

fn tensorflow_macos(ctx: &ResolveContext) -> bool {
    ctx.os_family.is_macos()
}

// TensorFlow 2.1.x segfaults several toolkits off macOS. Runtime 3.8 needs
// TensorFlow >= 2.2, so the cap stops at 3.8.
fn tensorflow_pre_38(ctx: &ResolveContext) -> bool {
    !ctx.os_family.is_macos() && ctx.runtime < RuntimeVersion::new(3, 8)
}

fn tensorflow_38_plus(ctx: &ResolveContext) -> bool {
    !ctx.os_family.is_macos() && ctx.runtime >= RuntimeVersion::new(3, 8)
}

// numba 0.51 moved from manylinux2010 to manylinux2014 wheels. Runtime 3.9
// stays unbounded.
fn numba_manylinux2010(ctx: &ResolveContext) -> bool {
    !ctx.os_family.is_macos() && !ctx.runtime.is(3, 9)
}

/// Ordered collection of conditional rules.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<ConditionalRule>,
}

impl RuleTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a table with the builtin rules.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        table.push(ConditionalRule::new(
            "llvmlite-legacy",
            "llvmlite pin for runtime 2.x and 3.5",
            legacy_llvmlite,
            Requirement::exact("llvmlite", "0.31.0"),
        ));
        table.push(ConditionalRule::new(
            "llvmlite-py39",
            "llvmlite pin for runtime 3.9",
            py39_llvmlite,
            Requirement::exact("llvmlite", "0.36.0"),
        ));
        table.push(ConditionalRule::new(
            "tensorflow-macos",
            "TensorFlow floor on macOS",
            tensorflow_macos,
            Requirement::at_least("tensorflow", "2.0.0"),
        ));
        table.push(ConditionalRule::new(
            "tensorflow-pre-3.8",
            "TensorFlow 2.0.x off macOS for runtime below 3.8",
            tensorflow_pre_38,
            Requirement::range("tensorflow", "2.0.0", "2.1.0"),
        ));
        table.push(ConditionalRule::new(
            "tensorflow-3.8-plus",
            "TensorFlow floor off macOS for runtime 3.8 and newer",
            tensorflow_38_plus,
            Requirement::at_least("tensorflow", "2.0.0"),
        ));
        table.push(ConditionalRule::new(
            "numba-manylinux2010",
            "numba cap off macOS except runtime 3.9",
            numba_manylinux2010,
            Requirement::below("numba", "0.51.0"),
        ));
        table
    }

    /// Append a rule; it is evaluated after every rule already present.
    pub fn push(&mut self, rule: ConditionalRule) {
        self.rules.push(rule);
    }

    /// Get a rule by id.
    pub fn get(&self, id: &str) -> Option<&ConditionalRule> {
        self.rules.iter().find(|r| r.id == id)
    }

    /// Iterate over all rules in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &ConditionalRule> {
        self.rules.iter()
    }

    /// Rules whose predicate holds for `ctx`, in evaluation order.
    pub fn matching<'a>(
        &'a self,
        ctx: &'a ResolveContext,
    ) -> impl Iterator<Item = &'a ConditionalRule> + 'a {
        self.rules.iter().filter(move |r| r.applies(ctx))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(major: u32, minor: u32, os: OsFamily) -> ResolveContext {
        ResolveContext::new(RuntimeVersion::new(major, minor), os)
    }

    fn matching_ids(table: &RuleTable, ctx: &ResolveContext) -> Vec<&'static str> {
        table.matching(ctx).map(|r| r.id()).collect()
    }

    #[test]
    fn builtin_table_has_rules_in_order() {
        let table = RuleTable::builtin();
        let ids: Vec<_> = table.iter().map(|r| r.id()).collect();
        assert_eq!(
            ids,
            [
                "llvmlite-legacy",
                "llvmlite-py39",
                "tensorflow-macos",
                "tensorflow-pre-3.8",
                "tensorflow-3.8-plus",
                "numba-manylinux2010",
            ]
        );
        assert!(table.get("tensorflow-macos").is_some());
        assert!(table.get("unknown").is_none());
    }

    #[test]
    fn llvmlite_gates() {
        let table = RuleTable::builtin();
        let legacy = table.get("llvmlite-legacy").unwrap();
        let py39 = table.get("llvmlite-py39").unwrap();

        assert!(legacy.applies(&ctx(2, 7, OsFamily::Linux)));
        assert!(legacy.applies(&ctx(3, 5, OsFamily::MacOs)));
        assert!(!legacy.applies(&ctx(3, 6, OsFamily::Linux)));
        assert!(!legacy.applies(&ctx(3, 9, OsFamily::Linux)));

        assert!(py39.applies(&ctx(3, 9, OsFamily::Windows)));
        assert!(!py39.applies(&ctx(3, 8, OsFamily::Linux)));
        assert!(!py39.applies(&ctx(2, 9, OsFamily::Linux)));
    }

    #[test]
    fn tensorflow_gates_split_on_3_8_off_macos() {
        let table = RuleTable::builtin();
        assert_eq!(
            matching_ids(&table, &ctx(3, 7, OsFamily::MacOs)),
            ["tensorflow-macos"]
        );
        assert_eq!(
            matching_ids(&table, &ctx(3, 7, OsFamily::Linux)),
            ["tensorflow-pre-3.8", "numba-manylinux2010"]
        );
        assert_eq!(
            matching_ids(&table, &ctx(3, 8, OsFamily::Windows)),
            ["tensorflow-3.8-plus", "numba-manylinux2010"]
        );
        assert_eq!(
            matching_ids(&table, &ctx(2, 7, OsFamily::Linux)),
            ["llvmlite-legacy", "tensorflow-pre-3.8", "numba-manylinux2010"]
        );
    }

    #[test]
    fn numba_gate_skips_only_3_9() {
        // The installer this replaces wrote the gate as
        // `major != 3 and minor != 9`, which never fires on any 3.x runtime.
        // Skipping at exactly 3.9 is the intended behavior.
        let table = RuleTable::builtin();
        let numba = table.get("numba-manylinux2010").unwrap();
        for minor in [5, 6, 7, 8, 10] {
            assert!(numba.applies(&ctx(3, minor, OsFamily::Linux)), "3.{minor}");
        }
        assert!(numba.applies(&ctx(2, 7, OsFamily::Linux)));
        assert!(!numba.applies(&ctx(3, 9, OsFamily::Linux)));
        assert!(!numba.applies(&ctx(3, 7, OsFamily::MacOs)));
    }

    #[test]
    fn custom_rules_append_in_order() {
        let mut table = RuleTable::new();
        assert!(table.is_empty());
        table.push(ConditionalRule::new(
            "always",
            "always applies",
            |_| true,
            Requirement::any("extra"),
        ));
        assert_eq!(table.len(), 1);
        let rule = table.get("always").unwrap();
        assert_eq!(rule.description(), "always applies");
        assert_eq!(rule.requirement(), &Requirement::any("extra"));
    }
}
