use std::io::Write;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::debug;

use super::{Scenario, ScenarioError};
use crate::exec;
use crate::ui;

/// Token in option commands that stands for the scenario document.
pub const PLACEHOLDER: &str = "file.json";

/// A JSON document written to a temp file for each evaluation.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonDocument {
    pub json: Value,
}

impl JsonDocument {
    fn materialize(&self) -> Result<NamedTempFile, ScenarioError> {
        let mut file = tempfile::Builder::new()
            .prefix("jq-quiz-")
            .suffix(".json")
            .tempfile()
            .map_err(ScenarioError::Workspace)?;
        serde_json::to_writer(&mut file, &self.json).map_err(ScenarioError::Serialize)?;
        file.flush().map_err(ScenarioError::Workspace)?;
        debug!(path = %file.path().display(), "wrote scenario document");
        Ok(file)
    }
}

impl Scenario for JsonDocument {
    fn describe(&self) -> String {
        format!("JSON =\n{}", ui::fill_indented(&self.json.to_string()))
    }

    fn run(&self, command: &str) -> Result<String, ScenarioError> {
        let document = self.materialize()?;
        let command = substitute_placeholder(command, document.path());
        Ok(exec::run_shell(&command, None))
    }

    fn accepts_command(command: &str) -> bool {
        command.contains(PLACEHOLDER)
    }
}

/// Replaces every placeholder with the shell-quoted `path`.
pub fn substitute_placeholder(command: &str, path: &Path) -> String {
    let path = path.to_string_lossy();
    command.replace(PLACEHOLDER, &shell_words::quote(&path))
}
