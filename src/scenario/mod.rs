//! Ephemeral subjects that option commands run against.
//!
//! Every evaluation builds a fresh scenario, runs one command against it and
//! releases it again before returning, whether the command worked or not.

mod fs;
mod json;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub use fs::{FsLayout, build_fs};
pub use json::{JsonDocument, PLACEHOLDER, substitute_placeholder};

/// A question's subject matter.
pub trait Scenario {
    /// Print the captured and expected output when an answer is wrong.
    const SHOWS_OUTPUT: bool = false;

    /// Text rendered below the prompt, already wrapped and indented.
    fn describe(&self) -> String;

    /// Build the scenario, run `command` against it, and tear it down.
    ///
    /// Command failures end up in the returned output; only failures to
    /// build the scenario are errors.
    fn run(&self, command: &str) -> Result<String, ScenarioError>;

    /// Whether an option command is usable with this kind of scenario.
    fn accepts_command(_command: &str) -> bool {
        true
    }
}

/// Failure to materialize a scenario. These point at a broken question bank.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to create scenario workspace: {0}")]
    Workspace(#[source] io::Error),

    #[error("failed to write scenario document: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to create {kind} '{}': {source}", .path.display())]
    Create {
        kind: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to set metadata on '{}': {source}", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("scenario path '{}' must stay inside the sandbox root", .0.display())]
    EscapesRoot(PathBuf),

    #[error("invalid modification time for '{}'", .0.display())]
    InvalidTimestamp(PathBuf),

    #[error("{0} are not supported on this platform")]
    Unsupported(&'static str),
}
