//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which loads the config
//! once and routes CLI subcommands to their implementations. The requirement
//! list rendering shared by `install` and `resolve` lives in [`report`].

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod install;
pub mod report;
pub mod resolve;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
