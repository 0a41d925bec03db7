//! Run environment reported alongside every test case.
//!
//! Settings are layered: built-in defaults, then an optional settings file,
//! then the environment variables the test run itself was driven by
//! (`BROWSER`, `HEADLESS`, `BASE_URL`, `COMPUTERNAME`).

use crate::configuration::constants::{defaults, env_vars};
use config::{Config, ConfigError, File};
use serde_derive::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub browser: String,
    /// Raw `HEADLESS` value; only the exact string `false` reports a headed run.
    #[serde(default)]
    pub headless: Option<String>,
    pub base_url: String,
    pub host: String,
    pub tag: String,
    pub framework: String,
    pub language: String,
}

impl Settings {
    /// Loads settings from an optional file and the given environment.
    ///
    /// The environment is passed in rather than read here so that callers
    /// decide where it comes from; `main` hands over `std::env::vars()`.
    pub fn load<I>(file: Option<&Path>, env: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut config = Config::new();
        config
            .set_default("browser", defaults::BROWSER)?
            .set_default("base_url", defaults::BASE_URL)?
            .set_default("host", default_host())?
            .set_default("tag", defaults::TAG)?
            .set_default("framework", defaults::FRAMEWORK)?
            .set_default("language", defaults::LANGUAGE)?;

        if let Some(path) = file {
            config.merge(File::from(path))?;
        }

        for (name, value) in env {
            let key = match name.as_str() {
                env_vars::BROWSER => "browser",
                env_vars::HEADLESS => "headless",
                env_vars::BASE_URL => "base_url",
                env_vars::HOST => "host",
                _ => continue,
            };
            config.set(key, value)?;
        }

        config.try_into()
    }

    /// Value of the `Headless` parameter.
    pub fn headless_label(&self) -> &'static str {
        match self.headless.as_deref() {
            Some("false") => "No",
            _ => "Yes",
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            browser: defaults::BROWSER.to_owned(),
            headless: None,
            base_url: defaults::BASE_URL.to_owned(),
            host: defaults::HOST.to_owned(),
            tag: defaults::TAG.to_owned(),
            framework: defaults::FRAMEWORK.to_owned(),
            language: defaults::LANGUAGE.to_owned(),
        }
    }
}

fn default_host() -> String {
    hostname::get()
        .ok()
        .and_then(|name| name.into_string().ok())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| defaults::HOST.to_owned())
}
