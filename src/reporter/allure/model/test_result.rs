use serde_derive::Serialize;

use super::{
    attachment::Attachment,
    label::Label,
    parameter::Parameter,
    stage::Stage,
    status::{Status, StatusDetails},
};

#[derive(Debug, Serialize, Clone, Builder, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StepResult {
    name: String,
    #[builder(default)]
    status: Status,
    #[builder(default)]
    stage: Stage,
    start: u128,
    stop: u128,
    #[builder(default = "Vec::new()")]
    parameters: Vec<Parameter>,
}

impl StepResult {
    pub fn builder() -> StepResultBuilder {
        StepResultBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn start(&self) -> u128 {
        self.start
    }

    pub fn stop(&self) -> u128 {
        self.stop
    }
}

#[derive(Debug, Serialize, Clone, Builder, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    uuid: uuid::Uuid,
    history_id: String,
    name: String,
    full_name: String,
    #[builder(default)]
    status: Status,
    #[builder(default)]
    stage: Stage,
    start: u128,
    stop: u128,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default = "None")]
    status_details: Option<StatusDetails>,
    #[builder(default = "Vec::new()")]
    labels: Vec<Label>,
    #[builder(default = "Vec::new()")]
    parameters: Vec<Parameter>,
    #[builder(default = "Vec::new()")]
    steps: Vec<StepResult>,
    #[builder(default = "Vec::new()")]
    attachments: Vec<Attachment>,
}

impl TestResult {
    pub fn builder() -> TestResultBuilder {
        TestResultBuilder::default()
    }

    pub fn uuid(&self) -> uuid::Uuid {
        self.uuid
    }

    pub fn history_id(&self) -> &str {
        &self.history_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn status_details(&self) -> Option<&StatusDetails> {
        self.status_details.as_ref()
    }

    pub fn start(&self) -> u128 {
        self.start
    }

    pub fn stop(&self) -> u128 {
        self.stop
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn steps(&self) -> &[StepResult] {
        &self.steps
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }
}
