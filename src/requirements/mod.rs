//! Dependency specifiers and dependency-set resolution.
//!
//! # Modules
//!
//! - [`requirement`] - The [`Requirement`] specifier and its constraint forms
//! - [`rules`] - Declarative runtime- and OS-conditional rules
//! - [`exclusion`] - The minimal-install exclusion predicate
//! - [`resolver`] - Combines the above into the final requirement list

pub mod exclusion;
pub mod requirement;
pub mod resolver;
pub mod rules;

pub use exclusion::{ExclusionSet, NON_MINIMAL};
pub use requirement::{Requirement, VersionConstraint};
pub use resolver::{base_requirements, resolve, Resolution, Resolver};
pub use rules::{ConditionalRule, ResolveContext, RuleTable};
