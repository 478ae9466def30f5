// Suite configuration
//
// The page objects carry constant paths and titles; everything
// deployment-specific (where the WebDriver endpoint listens, where the
// application is served, how patient the waits are) lives here.

use std::time::Duration;

use url::Url;

use crate::error::{Error, Result};

/// Default WebDriver endpoint (a local chromedriver/geckodriver behind a
/// Selenium-compatible URL).
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:4444";

/// Default base URL of the Credit Cards application.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Default budget for a single wait.
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default polling interval inside a wait.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Suite configuration consumed by [`crate::Session`] and the page objects.
#[derive(Debug, Clone)]
pub struct Config {
    /// WebDriver endpoint the session connects to.
    pub webdriver_url: String,
    /// Base URL the application under test is served from.
    pub base_url: Url,
    /// Budget for a single wait.
    pub wait_timeout: Duration,
    /// Polling interval inside a wait.
    pub poll_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            webdriver_url: DEFAULT_WEBDRIVER_URL.to_owned(),
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url parses"),
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl Config {
    /// Creates a new `Config` with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads overrides from the environment: `WEBDRIVER_URL`,
    /// `CREDITCARDS_BASE_URL`, `CREDITCARDS_WAIT_TIMEOUT_MS`, and
    /// `CREDITCARDS_POLL_INTERVAL_MS`.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(value) = lookup("WEBDRIVER_URL") {
            config.webdriver_url = value;
        }
        if let Some(value) = lookup("CREDITCARDS_BASE_URL") {
            config.base_url = Url::parse(&value)
                .map_err(|err| Error::Config(format!("CREDITCARDS_BASE_URL '{value}': {err}")))?;
        }
        if let Some(value) = lookup("CREDITCARDS_WAIT_TIMEOUT_MS") {
            config.wait_timeout = Duration::from_millis(parse_millis(
                "CREDITCARDS_WAIT_TIMEOUT_MS",
                &value,
            )?);
        }
        if let Some(value) = lookup("CREDITCARDS_POLL_INTERVAL_MS") {
            config.poll_interval = Duration::from_millis(parse_millis(
                "CREDITCARDS_POLL_INTERVAL_MS",
                &value,
            )?);
        }
        Ok(config)
    }

    /// Set the WebDriver endpoint.
    pub fn webdriver_url(mut self, url: impl Into<String>) -> Self {
        self.webdriver_url = url.into();
        self
    }

    /// Set the application base URL.
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = url;
        self
    }

    /// Set the wait budget.
    pub fn wait_timeout(mut self, timeout: Duration) -> Self {
        self.wait_timeout = timeout;
        self
    }

    /// Set the wait polling interval.
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Full URL for an application path, e.g. `page_url("/Apply")`.
    pub fn page_url(&self, path: &str) -> Url {
        // Paths are constants on the page objects; a join only fails on a
        // relative base, which Url::parse already rejects.
        self.base_url
            .join(path)
            .expect("page path joins onto the base url")
    }
}

fn parse_millis(key: &str, value: &str) -> Result<u64> {
    value
        .parse()
        .map_err(|err| Error::Config(format!("{key} '{value}': {err}")))
}
