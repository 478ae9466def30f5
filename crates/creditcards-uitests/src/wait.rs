// Wait - bounded polling against asynchronous browser state
//
// The browser's rendering and navigation pipeline runs independently of the
// calling test; an action's effects are not guaranteed visible the moment it
// returns. Waiting is the suite's only blocking point: poll a probe at a
// fixed interval until it yields a value or the budget elapses. A timeout is
// terminal for that call and carries the last page state seen; it does not
// abort whatever the browser is still doing.

use std::time::Duration;

use fantoccini::elements::Element;
use fantoccini::error::CmdError;
use tokio::time::Instant;
use url::Url;

use crate::error::{Error, Result};
use crate::locator::Locator;
use crate::session::{self, Session};

/// A bounded wait over one [`Session`].
///
/// Budget and polling interval default from the suite config; override per
/// call with [`at_most`](Wait::at_most) / [`poll_every`](Wait::poll_every).
#[derive(Debug)]
pub struct Wait<'a> {
    session: &'a Session,
    timeout: Duration,
    interval: Duration,
}

impl<'a> Wait<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self {
            session,
            timeout: session.config().wait_timeout,
            interval: session.config().poll_interval,
        }
    }

    #[must_use]
    pub fn at_most(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn poll_every(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Polls `probe` until it yields a value or the budget elapses.
    ///
    /// `Ok(None)` from the probe means "not yet true": element-not-found
    /// and alert-not-present are conditions to keep polling on, not errors.
    /// `Err` aborts immediately. On timeout, [`Error::Timeout`] carries
    /// `condition` and the last-seen URL and page source.
    pub async fn until<T, F>(&self, condition: &str, probe: F) -> Result<T>
    where
        F: AsyncFnMut() -> Result<Option<T>>,
    {
        match poll(self.timeout, self.interval, probe).await? {
            Some(value) => Ok(value),
            None => {
                tracing::warn!(
                    condition,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "wait timed out"
                );
                let (url, page_source) = self.session.page_state().await;
                Err(Error::Timeout {
                    condition: condition.to_owned(),
                    budget: self.timeout,
                    url,
                    page_source,
                })
            }
        }
    }

    /// Waits for an element to be present in the document.
    pub async fn for_element(&self, locator: &Locator) -> Result<Element> {
        self.until(&format!("element {locator}"), async || {
            Ok(self.session.find_all(locator).await?.into_iter().next())
        })
        .await
    }

    /// Waits for an element to be present, displayed, and enabled.
    pub async fn for_clickable(&self, locator: &Locator) -> Result<Element> {
        self.until(&format!("clickable element {locator}"), async || {
            let Some(element) = self.session.find_all(locator).await?.into_iter().next() else {
                return Ok(None);
            };
            match clickable_state(&element).await {
                Ok(true) => Ok(Some(element)),
                Ok(false) => Ok(None),
                // The node was replaced mid-poll; the next poll re-resolves.
                Err(err) if session::is_stale(&err) => Ok(None),
                Err(err) => Err(err.into()),
            }
        })
        .await
    }

    /// Waits for a native alert to be open and yields its message text.
    pub async fn for_alert(&self) -> Result<String> {
        self.until("alert to be present", async || {
            self.session.alert_text().await
        })
        .await
    }

    /// Waits for the live (URL, title) pair to match an expected identity.
    pub(crate) async fn for_identity(&self, expected_url: &Url, expected_title: &str) -> Result<()> {
        self.until(
            &format!("page '{expected_title}' at {expected_url}"),
            async || {
                let url = self.session.current_url().await?;
                let title = self.session.title().await?;
                Ok((url == *expected_url && title == expected_title).then_some(()))
            },
        )
        .await
    }
}

async fn clickable_state(element: &Element) -> std::result::Result<bool, CmdError> {
    Ok(element.is_displayed().await? && element.is_enabled().await?)
}

/// The polling loop itself: `Ok(None)` means the budget elapsed.
///
/// The probe always runs at least once, even with a zero budget.
async fn poll<T, F>(timeout: Duration, interval: Duration, mut probe: F) -> Result<Option<T>>
where
    F: AsyncFnMut() -> Result<Option<T>>,
{
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(value) = probe().await? {
            return Ok(Some(value));
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
        tokio::time::sleep(interval).await;
    }
}
