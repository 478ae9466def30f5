// Error types for creditcards-uitests

use std::time::Duration;

use thiserror::Error;

use crate::locator::Locator;

/// Result type alias for suite operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to test cases.
///
/// None of these are recovered inside a page object: a failed wait, a wrong
/// page identity, or a missing element is the signal the test exists to
/// produce, so each one propagates to the caller.
#[derive(Debug, Error)]
pub enum Error {
    /// A waited-for condition never became true within its budget.
    ///
    /// Carries the last-seen URL and raw page source so a failing test can
    /// be diagnosed without re-running it against a live browser.
    #[error("timed out after {budget:?} waiting for {condition} (last url: '{url}')")]
    Timeout {
        condition: String,
        budget: Duration,
        url: String,
        page_source: String,
    },

    /// Navigation completed but the live (URL, title) pair does not match
    /// the page object's expected identity.
    #[error(
        "failed to load page '{expected_title}': expected url '{expected_url}', \
         current url '{url}'"
    )]
    PageLoadFailure {
        expected_url: String,
        expected_title: String,
        url: String,
        page_source: String,
    },

    /// A locator matched zero elements at the moment of use.
    #[error("no element found {locator}")]
    ElementNotFound { locator: Locator },

    /// A WebDriver command failed.
    #[error("webdriver command failed: {0}")]
    WebDriver(#[from] fantoccini::error::CmdError),

    /// A new WebDriver session could not be established.
    #[error("failed to open webdriver session: {0}")]
    NewSession(#[from] fantoccini::error::NewSessionError),

    /// The suite configuration is invalid.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Last observed page state (URL + raw page source), when the error
    /// carries one.
    pub fn page_state(&self) -> Option<(&str, &str)> {
        match self {
            Error::Timeout {
                url, page_source, ..
            }
            | Error::PageLoadFailure {
                url, page_source, ..
            } => Some((url, page_source)),
            _ => None,
        }
    }
}
