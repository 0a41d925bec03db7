pub(crate) mod builder;
pub(crate) mod error;

use std::path::Path;

use crate::adapter::builder::TestCaseBuilder;
use crate::adapter::error::{Error, Result};
use crate::configuration::constants::common::ATTACHMENT_SUFFIX;
use crate::configuration::settings::Settings;
use crate::cucumber;
use crate::cucumber::model::{Element, Embedding, Feature, Scenario, Step};
use crate::reporter::allure::model::attachment::Attachment;
use crate::reporter::allure::{ResultWriter, ResultsDirectory};

/// Outcome of a conversion run.
#[derive(Debug, Default)]
pub struct Summary {
    /// Result documents written.
    pub processed: usize,
    /// Records and attachments that were dropped, in the order they failed.
    pub skipped: Vec<Error>,
}

/// Converts a cucumber report into Allure results.
///
/// The report is loaded before anything touches the output directory, so a
/// broken report leaves no output behind.
pub fn adapt<S: AsRef<Path>, O: AsRef<Path>>(
    source: S,
    output_dir: O,
    settings: &Settings,
) -> Result<Summary> {
    let source = source.as_ref();
    info!("Reading cucumber report {}", source.display());
    let report = cucumber::load(source).map_err(|source_err| Error::Parse {
        path: source.to_path_buf(),
        source: source_err,
    })?;
    let output_dir = output_dir.as_ref();
    let directory = ResultsDirectory::create(output_dir).map_err(|err| Error::OutputDir {
        path: output_dir.to_path_buf(),
        source: err,
    })?;
    Ok(ReportAdapter::new(settings, &directory).convert(&report))
}

pub struct ReportAdapter<'a, W: ResultWriter> {
    settings: &'a Settings,
    writer: &'a W,
}

impl<'a, W: ResultWriter> ReportAdapter<'a, W> {
    pub fn new(settings: &'a Settings, writer: &'a W) -> Self {
        Self { settings, writer }
    }

    pub fn convert(&self, features: &[Feature]) -> Summary {
        let mut summary = Summary::default();
        for feature in features {
            info!("Processing feature: {}", feature.name);
            for element in &feature.elements {
                match element {
                    Element::Scenario(scenario) => {
                        self.convert_scenario(feature, scenario, &mut summary)
                    }
                    Element::Background(background) => {
                        debug!("Skipping background '{}'", background.name)
                    }
                    Element::Other => debug!("Skipping element of unsupported type"),
                }
            }
        }
        summary
    }

    fn convert_scenario(&self, feature: &Feature, scenario: &Scenario, summary: &mut Summary) {
        info!("  Processing scenario: {}", scenario.name);
        let mut builder = TestCaseBuilder::new(self.settings, &feature.name, scenario);
        for step in &scenario.steps {
            let step_name = builder.push_step(step).name().to_owned();
            for embedding in step.screenshots() {
                match self.extract(step, &step_name, embedding) {
                    Ok(attachment) => builder.attach(attachment),
                    Err(err) => {
                        warn!("Skipping attachment: {}", err);
                        summary.skipped.push(err);
                    }
                }
            }
        }
        let result = builder.build();
        let name = ResultsDirectory::result_file_name(&result);
        match self.writer.write_result(&result) {
            Ok(_) => {
                info!("    Created Allure test result: {}", name);
                summary.processed += 1;
            }
            Err(source) => {
                let err = Error::Write { name, source };
                warn!("Skipping test result: {}", err);
                summary.skipped.push(err);
            }
        }
    }

    fn extract(&self, step: &Step, step_name: &str, embedding: &Embedding) -> Result<Attachment> {
        let data = base64::decode(&embedding.data).map_err(|source| Error::Decode {
            step: step_name.to_owned(),
            source,
        })?;
        let name = format!("{}{}", uuid::Uuid::new_v4(), ATTACHMENT_SUFFIX);
        self.writer
            .write_attachment(&name, &data)
            .map_err(|source| Error::Write {
                name: name.clone(),
                source,
            })?;
        Ok(Attachment::new(
            format!("Screenshot after {} {}", step.keyword, step_name),
            name,
            mime::IMAGE_PNG,
        ))
    }
}
