use serde_derive::Serialize;

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusDetails {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<String>,
}

impl StatusDetails {
    /// Details of a failure where the trace repeats the message.
    pub fn failure(message: String) -> Self {
        Self {
            trace: Some(message.clone()),
            message,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn trace(&self) -> Option<&str> {
        self.trace.as_deref()
    }
}

impl From<String> for StatusDetails {
    fn from(message: String) -> Self {
        Self {
            message,
            trace: None,
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Status {
    Failed,
    Broken,
    Passed,
    Skipped,
}

impl Default for Status {
    fn default() -> Self {
        Status::Passed
    }
}

impl Status {
    /// Maps a Cucumber step status. Cucumber's `pending`, `undefined` and
    /// `ambiguous` and anything unrecognised become `Broken`.
    pub fn from_source(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "passed" => Status::Passed,
            "failed" => Status::Failed,
            "skipped" => Status::Skipped,
            _ => Status::Broken,
        }
    }

    /// Folds a step status into the status of its test case.
    ///
    /// `Failed` is absorbing, `Skipped` replaces anything but `Failed`, and
    /// `Passed` or `Broken` steps leave the current verdict alone.
    pub fn merge(self, step: Status) -> Status {
        match (self, step) {
            (_, Status::Failed) => Status::Failed,
            (Status::Failed, _) => Status::Failed,
            (_, Status::Skipped) => Status::Skipped,
            (current, _) => current,
        }
    }
}
