pub mod cargo_env {
    pub const CARGO_PKG_NAME: &'static str = env!("CARGO_PKG_NAME");
}

pub mod defaults {
    pub const REPORT_PATH: &'static str = "src/reports/cucumber-report.json";
    pub const RESULTS_DIR: &'static str = "allure-results";
    pub const BROWSER: &'static str = "chromium";
    pub const BASE_URL: &'static str = "https://www.saucedemo.com";
    pub const HOST: &'static str = "Unknown";
    pub const TAG: &'static str = "Cucumber";
    pub const FRAMEWORK: &'static str = "Cucumber BDD";
    pub const LANGUAGE: &'static str = "JavaScript";
}

pub mod env_vars {
    pub const BROWSER: &'static str = "BROWSER";
    pub const HEADLESS: &'static str = "HEADLESS";
    pub const BASE_URL: &'static str = "BASE_URL";
    pub const HOST: &'static str = "COMPUTERNAME";
}

pub mod common {
    /// Placeholder length of a step without its own timing, in milliseconds.
    pub const STEP_PLACEHOLDER_MILLIS: u128 = 1000;
    pub const MISSING_ERROR_MESSAGE: &'static str = "Step failed without error message";
    pub const SCREENSHOT_MIME: &'static str = "image/png";
    pub const RESULT_SUFFIX: &'static str = "-result.json";
    pub const ATTACHMENT_SUFFIX: &'static str = "-attachment.png";
}
