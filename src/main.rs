// #![forbid(unsafe_code)]
// #![deny(missing_docs)]

#[macro_use]
extern crate log;

#[macro_use]
extern crate derive_builder;

mod adapter;
mod configuration;
mod cucumber;
mod reporter;
mod time;

use log::LevelFilter;
use std::{path::PathBuf, process::exit};
use structopt::StructOpt;

use self::adapter::adapt;
use self::configuration::{
    command_line::{LogLevel, Opt},
    settings::Settings,
};

fn main() {
    let options = Opt::from_args();

    if let Err(e) = init_logging(
        options.logging.unwrap_or(LogLevel::Info).into(),
        &options.log_output_file,
    ) {
        eprintln!("Failed to initialise logging: {}", e);
        exit(1);
    }

    let settings = match Settings::load(options.config.as_deref(), std::env::vars()) {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load settings: {}", e);
            exit(1);
        }
    };
    debug!("Run environment {:#?}", settings);

    match adapt(&options.report, &options.output, &settings) {
        Ok(summary) => {
            for skipped in &summary.skipped {
                warn!("Skipped: {}", skipped);
            }
            info!(
                "Converted {} test case(s) into {} ({} skipped)",
                summary.processed,
                options.output.display(),
                summary.skipped.len()
            );
        }
        Err(e) => {
            error!("Error processing cucumber results: {}", e);
            exit(1);
        }
    }
}

fn init_logging(level: LevelFilter, output: &Option<PathBuf>) -> Result<(), fern::InitError> {
    let mut dispatcher = fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}:{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record
                    .line()
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "".to_owned()),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout());

    if let Some(log_file) = output {
        dispatcher = dispatcher.chain(fern::log_file(log_file)?)
    }
    dispatcher.apply()?;
    info!("Logging level {} enabled", level);
    Ok(())
}
