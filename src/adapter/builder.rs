use lazy_static::*;
use regex::Regex;

use crate::configuration::constants::common::{MISSING_ERROR_MESSAGE, STEP_PLACEHOLDER_MILLIS};
use crate::configuration::settings::Settings;
use crate::cucumber::model::{Scenario, Step};
use crate::reporter::allure::model::{
    attachment::Attachment,
    label::Label,
    parameter::Parameter,
    status::{Status, StatusDetails},
    test_result::{StepResult, TestResult},
};
use crate::time::{epoch_millis, nanos_to_millis};

lazy_static! {
    static ref HISTORY_ID_FORBIDDEN: Regex =
        Regex::new(r"[^A-Za-z0-9_]").expect("Regex compilation error");
}

/// Stable identity of a scenario across runs.
pub fn history_id(feature: &str, scenario: &str) -> String {
    HISTORY_ID_FORBIDDEN
        .replace_all(&format!("{}_{}", feature, scenario), "_")
        .into_owned()
}

/// Accumulates one scenario into a test result.
///
/// A builder is created per scenario and owns everything derived from it,
/// including the index of the next step.
pub struct TestCaseBuilder<'a> {
    settings: &'a Settings,
    feature: &'a str,
    scenario: &'a str,
    uuid: uuid::Uuid,
    start: u128,
    index: usize,
    status: Status,
    status_details: Option<StatusDetails>,
    steps: Vec<StepResult>,
    attachments: Vec<Attachment>,
}

impl<'a> TestCaseBuilder<'a> {
    pub fn new(settings: &'a Settings, feature: &'a str, scenario: &'a Scenario) -> Self {
        let start = match &scenario.start_timestamp {
            Some(timestamp) => epoch_millis(timestamp),
            None => crate::now!(),
        };
        Self {
            settings,
            feature,
            scenario: &scenario.name,
            uuid: uuid::Uuid::new_v4(),
            start,
            index: 0,
            status: Status::default(),
            status_details: None,
            steps: Vec::new(),
            attachments: Vec::new(),
        }
    }

    pub fn uuid(&self) -> uuid::Uuid {
        self.uuid
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Records the next step and folds its status into the test case.
    pub fn push_step(&mut self, step: &Step) -> &StepResult {
        let status = step.status();
        let (start, stop) = self.step_timing(step);
        let result = StepResult::builder()
            .name(step.display_name(self.index))
            .status(status)
            .start(start)
            .stop(stop)
            .build();
        let result = match result {
            Ok(result) => result,
            Err(err) => unreachable!("step result is missing a field: {}", err),
        };

        self.status = self.status.merge(status);
        if status == Status::Failed {
            let message = step.error_message().unwrap_or(MISSING_ERROR_MESSAGE);
            self.status_details = Some(StatusDetails::failure(message.to_owned()));
        }

        trace!(
            "Step {} '{}' of '{}' is {:?}, test case is {:?}",
            self.index,
            result.name(),
            self.scenario,
            status,
            self.status
        );
        self.index += 1;
        self.steps.push(result);
        &self.steps[self.steps.len() - 1]
    }

    pub fn attach(&mut self, attachment: Attachment) {
        self.attachments.push(attachment);
    }

    /// Finishes the test case. `stop` is the moment of building, not the end
    /// of the last step.
    pub fn build(self) -> TestResult {
        let labels = self.labels();
        let parameters = self.parameters();
        let result = TestResult::builder()
            .uuid(self.uuid)
            .history_id(history_id(self.feature, self.scenario))
            .name(self.scenario.to_owned())
            .full_name(format!("{}: {}", self.feature, self.scenario))
            .status(self.status)
            .status_details(self.status_details)
            .start(self.start)
            .stop(crate::now!())
            .labels(labels)
            .parameters(parameters)
            .steps(self.steps)
            .attachments(self.attachments)
            .build();
        match result {
            Ok(result) => result,
            Err(err) => unreachable!("test result is missing a field: {}", err),
        }
    }

    fn step_timing(&self, step: &Step) -> (u128, u128) {
        match &step.start_timestamp {
            Some(timestamp) => {
                let start = epoch_millis(timestamp);
                let stop = match step.duration() {
                    Some(nanos) => start + nanos_to_millis(nanos),
                    None => start + STEP_PLACEHOLDER_MILLIS,
                };
                (start, stop)
            }
            None => {
                let start = self.start + self.index as u128 * STEP_PLACEHOLDER_MILLIS;
                (start, start + STEP_PLACEHOLDER_MILLIS)
            }
        }
    }

    fn labels(&self) -> Vec<Label> {
        vec![
            Label::Feature(self.feature.to_owned()),
            Label::Story(self.scenario.to_owned()),
            Label::Tag(self.settings.tag.clone()),
            Label::Framework(self.settings.framework.clone()),
            Label::Language(self.settings.language.clone()),
            Label::Host(self.settings.host.clone()),
            Label::Suite(self.feature.to_owned()),
        ]
    }

    fn parameters(&self) -> Vec<Parameter> {
        vec![
            Parameter::new("Browser", self.settings.browser.as_str()),
            Parameter::new("Headless", self.settings.headless_label()),
            Parameter::new("Base URL", self.settings.base_url.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scenario(value: serde_json::Value) -> Scenario {
        serde_json::from_value(value).unwrap()
    }

    fn step(value: serde_json::Value) -> Step {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_history_id_replaces_every_forbidden_character() {
        assert_eq!(history_id("Login", "Valid login"), "Login_Valid_login");
        assert_eq!(
            history_id("Cart & Checkout", "Add 2 items (fast)"),
            "Cart___Checkout_Add_2_items__fast_"
        );
        assert_eq!(history_id("snake_case", "Keep_Case"), "snake_case_Keep_Case");
        assert_eq!(history_id("Café", "ü"), "Caf___");
    }

    #[test]
    fn test_history_id_is_deterministic() {
        let first = history_id("Inventory", "Sort by price: low → high");
        let second = history_id("Inventory", "Sort by price: low → high");

        assert_eq!(first, second);
        assert!(first
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_'));
    }

    #[test]
    fn test_empty_scenario_is_passed() {
        let settings = Settings::default();
        let source = scenario(json!({ "name": "Nothing", "steps": [] }));

        let result = TestCaseBuilder::new(&settings, "Empty", &source).build();

        assert_eq!(result.status(), Status::Passed);
        assert!(result.status_details().is_none());
        assert!(result.steps().is_empty());
        assert!(result.attachments().is_empty());
        assert_eq!(result.full_name(), "Empty: Nothing");
        assert_eq!(result.history_id(), "Empty_Nothing");
    }

    #[test]
    fn test_failed_step_sets_status_details() {
        let settings = Settings::default();
        let source = scenario(json!({ "name": "Valid login" }));
        let mut builder = TestCaseBuilder::new(&settings, "Login", &source);

        builder.push_step(&step(json!({ "name": "a", "result": { "status": "passed" } })));
        builder.push_step(&step(json!({
            "name": "b",
            "result": { "status": "failed", "error_message": "Element not found" }
        })));
        builder.push_step(&step(json!({ "name": "c", "result": { "status": "skipped" } })));
        builder.push_step(&step(json!({ "name": "d", "result": { "status": "passed" } })));
        let result = builder.build();

        assert_eq!(result.status(), Status::Failed);
        let details = result.status_details().unwrap();
        assert_eq!(details.message(), "Element not found");
        assert_eq!(details.trace(), Some("Element not found"));
        let statuses: Vec<Status> = result.steps().iter().map(StepResult::status).collect();
        assert_eq!(
            statuses,
            vec![Status::Passed, Status::Failed, Status::Skipped, Status::Passed]
        );
    }

    #[test]
    fn test_failed_step_without_message_uses_placeholder() {
        let settings = Settings::default();
        let source = scenario(json!({ "name": "s" }));
        let mut builder = TestCaseBuilder::new(&settings, "f", &source);

        builder.push_step(&step(json!({ "name": "x", "result": { "status": "failed" } })));

        let result = builder.build();
        assert_eq!(
            result.status_details().unwrap().message(),
            "Step failed without error message"
        );
    }

    #[test]
    fn test_skipped_step_marks_test_case_skipped() {
        let settings = Settings::default();
        let source = scenario(json!({ "name": "s" }));
        let mut builder = TestCaseBuilder::new(&settings, "f", &source);

        builder.push_step(&step(json!({ "name": "x", "result": { "status": "skipped" } })));
        builder.push_step(&step(json!({ "name": "y", "result": { "status": "passed" } })));

        assert_eq!(builder.status(), Status::Skipped);
        assert!(builder.build().status_details().is_none());
    }

    #[test]
    fn test_step_timing_without_timestamps_uses_placeholders() {
        let settings = Settings::default();
        let source = scenario(json!({
            "name": "s",
            "start_timestamp": "2024-03-01T10:00:00.000Z"
        }));
        let mut builder = TestCaseBuilder::new(&settings, "f", &source);

        builder.push_step(&step(json!({ "name": "first", "result": { "duration": 5_000_000 } })));
        builder.push_step(&step(json!({ "name": "second" })));
        let result = builder.build();

        let base = 1_709_287_200_000u128;
        assert_eq!(result.start(), base);
        assert_eq!(result.steps()[0].start(), base);
        assert_eq!(result.steps()[0].stop(), base + 1000);
        assert_eq!(result.steps()[1].start(), base + 1000);
        assert_eq!(result.steps()[1].stop(), base + 2000);
        assert!(result.stop() >= result.start());
    }

    #[test]
    fn test_step_timing_from_timestamp_and_duration() {
        let settings = Settings::default();
        let source = scenario(json!({ "name": "s" }));
        let mut builder = TestCaseBuilder::new(&settings, "f", &source);

        let timed = builder
            .push_step(&step(json!({
                "name": "timed",
                "start_timestamp": "2024-03-01T10:00:00.000Z",
                "result": { "status": "passed", "duration": 250_000_000 }
            })))
            .clone();
        let untimed = builder
            .push_step(&step(json!({
                "name": "no duration",
                "start_timestamp": "2024-03-01T10:00:01.000Z"
            })))
            .clone();

        assert_eq!(timed.start(), 1_709_287_200_000);
        assert_eq!(timed.stop(), 1_709_287_200_250);
        assert_eq!(untimed.start(), 1_709_287_201_000);
        assert_eq!(untimed.stop(), 1_709_287_202_000);
    }

    #[test]
    fn test_unnamed_steps_are_numbered() {
        let settings = Settings::default();
        let source = scenario(json!({ "name": "s" }));
        let mut builder = TestCaseBuilder::new(&settings, "f", &source);

        builder.push_step(&step(json!({ "keyword": "Before" })));
        builder.push_step(&step(json!({ "keyword": "Given ", "name": "named" })));
        builder.push_step(&step(json!({ "keyword": "After" })));
        let result = builder.build();

        let names: Vec<&str> = result.steps().iter().map(StepResult::name).collect();
        assert_eq!(names, vec!["Step 1", "named", "Step 3"]);
    }

    #[test]
    fn test_labels_and_parameters_from_settings() {
        let settings = Settings {
            browser: "firefox".to_owned(),
            headless: Some("false".to_owned()),
            base_url: "http://localhost".to_owned(),
            host: "runner".to_owned(),
            ..Settings::default()
        };
        let source = scenario(json!({ "name": "Valid login" }));

        let result = TestCaseBuilder::new(&settings, "Login", &source).build();

        assert_eq!(
            result.labels(),
            &[
                Label::Feature("Login".to_owned()),
                Label::Story("Valid login".to_owned()),
                Label::Tag("Cucumber".to_owned()),
                Label::Framework("Cucumber BDD".to_owned()),
                Label::Language("JavaScript".to_owned()),
                Label::Host("runner".to_owned()),
                Label::Suite("Login".to_owned()),
            ][..]
        );
        assert_eq!(
            result.parameters(),
            &[
                Parameter::new("Browser", "firefox"),
                Parameter::new("Headless", "No"),
                Parameter::new("Base URL", "http://localhost"),
            ][..]
        );
    }

    #[test]
    fn test_each_builder_has_its_own_uuid() {
        let settings = Settings::default();
        let source = scenario(json!({ "name": "s" }));

        let first = TestCaseBuilder::new(&settings, "f", &source);
        let second = TestCaseBuilder::new(&settings, "f", &source);

        assert_ne!(first.uuid(), second.uuid());
    }
}
