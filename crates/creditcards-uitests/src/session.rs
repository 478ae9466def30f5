// Session - one live browser under WebDriver control
//
// Wraps a fantoccini Client. The session does not track which page is
// "current"; page objects confirm identity themselves. Element lookups are
// resolved fresh on every call and handles are never stored across actions,
// because a re-render (a validation round-trip, say) replaces the underlying
// DOM nodes and invalidates any reference taken before it.

use std::fmt;
use std::panic::AssertUnwindSafe;

use fantoccini::cookies::Cookie;
use fantoccini::elements::Element;
use fantoccini::error::CmdError;
use fantoccini::wd::WindowHandle;
use fantoccini::ClientBuilder;
use futures_util::FutureExt;
use serde_json::Value;
use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::locator::Locator;
use crate::wait::Wait;

/// Handle to one browser session.
///
/// Cheap to clone; all clones drive the same session. Whoever opened the
/// session closes it, either through [`Session::run_scoped`] or by handing
/// ownership to a [`crate::SessionFixture`].
#[derive(Clone)]
pub struct Session {
    client: fantoccini::Client,
    config: Config,
}

impl Session {
    /// Connects to the configured WebDriver endpoint and starts a browser
    /// session.
    pub async fn open(config: Config) -> Result<Self> {
        tracing::debug!("opening webdriver session at {}", config.webdriver_url);
        let client = ClientBuilder::native()
            .connect(&config.webdriver_url)
            .await?;
        Ok(Self { client, config })
    }

    /// Ends the session and releases the browser.
    pub async fn close(self) -> Result<()> {
        tracing::debug!("closing webdriver session");
        self.client.close().await?;
        Ok(())
    }

    /// Runs `body` against a fresh session and closes it on every exit
    /// path, including a panicking assertion inside `body`.
    pub async fn run_scoped<T, E, F>(config: Config, body: F) -> std::result::Result<T, E>
    where
        E: From<Error>,
        F: AsyncFnOnce(Session) -> std::result::Result<T, E>,
    {
        let session = Session::open(config).await?;
        let outcome = AssertUnwindSafe(body(session.clone())).catch_unwind().await;
        if let Err(err) = session.close().await {
            tracing::warn!("failed to close webdriver session: {err}");
        }
        match outcome {
            Ok(result) => result,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// A wait over this session, budgeted from the suite config.
    pub fn wait(&self) -> Wait<'_> {
        Wait::new(self)
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub async fn goto(&self, url: &str) -> Result<()> {
        tracing::debug!("navigating to {url}");
        self.client.goto(url).await?;
        Ok(())
    }

    pub async fn back(&self) -> Result<()> {
        self.client.back().await?;
        Ok(())
    }

    pub async fn forward(&self) -> Result<()> {
        self.client.forward().await?;
        Ok(())
    }

    pub async fn refresh(&self) -> Result<()> {
        self.client.refresh().await?;
        Ok(())
    }

    pub async fn current_url(&self) -> Result<Url> {
        Ok(self.client.current_url().await?)
    }

    pub async fn title(&self) -> Result<String> {
        Ok(self.client.title().await?)
    }

    /// Raw source of the current document.
    pub async fn page_source(&self) -> Result<String> {
        Ok(self.client.source().await?)
    }

    /// Best-effort (URL, page source) snapshot for error diagnostics.
    pub(crate) async fn page_state(&self) -> (String, String) {
        let url = match self.client.current_url().await {
            Ok(url) => url.to_string(),
            Err(_) => "<unavailable>".to_owned(),
        };
        let page_source = self
            .client
            .source()
            .await
            .unwrap_or_else(|_| "<unavailable>".to_owned());
        (url, page_source)
    }

    // ------------------------------------------------------------------
    // Elements
    // ------------------------------------------------------------------

    /// Resolves a locator to the first matching element, fresh.
    ///
    /// Zero matches is [`Error::ElementNotFound`]. The returned handle is
    /// for immediate use only; never store it across actions.
    pub async fn find(&self, locator: &Locator) -> Result<Element> {
        self.find_all(locator)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| Error::ElementNotFound {
                locator: locator.clone(),
            })
    }

    /// Resolves a locator to all matching elements (possibly none), fresh.
    pub async fn find_all(&self, locator: &Locator) -> Result<Vec<Element>> {
        let lowered = locator.lowered();
        Ok(self.client.find_all(lowered.as_wire()).await?)
    }

    /// Whether at least one element matches right now.
    pub async fn is_present(&self, locator: &Locator) -> Result<bool> {
        Ok(!self.find_all(locator).await?.is_empty())
    }

    pub async fn click(&self, locator: &Locator) -> Result<()> {
        self.find(locator).await?.click().await?;
        Ok(())
    }

    pub async fn type_text(&self, locator: &Locator, text: &str) -> Result<()> {
        self.find(locator).await?.send_keys(text).await?;
        Ok(())
    }

    pub async fn clear(&self, locator: &Locator) -> Result<()> {
        self.find(locator).await?.clear().await?;
        Ok(())
    }

    pub async fn select_by_value(&self, locator: &Locator, value: &str) -> Result<()> {
        self.find(locator).await?.select_by_value(value).await?;
        Ok(())
    }

    /// Text of the first matching element, as an owned snapshot.
    pub async fn text_of(&self, locator: &Locator) -> Result<String> {
        Ok(self.find(locator).await?.text().await?)
    }

    /// Texts of all matching elements, in document order.
    pub async fn texts_of(&self, locator: &Locator) -> Result<Vec<String>> {
        let mut texts = Vec::new();
        for element in self.find_all(locator).await? {
            texts.push(element.text().await?);
        }
        Ok(texts)
    }

    /// Submits the form matched by `locator` (standard form submit).
    pub async fn submit_form(&self, locator: &Locator) -> Result<()> {
        let lowered = locator.lowered();
        self.client.form(lowered.as_wire()).await?.submit().await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Cookies
    // ------------------------------------------------------------------

    pub async fn add_cookie(&self, name: &str, value: &str) -> Result<()> {
        self.client
            .add_cookie(Cookie::new(name.to_owned(), value.to_owned()))
            .await?;
        Ok(())
    }

    /// Value of the named cookie, or `None` when the browser has no such
    /// cookie for the current document.
    pub async fn cookie_value(&self, name: &str) -> Result<Option<String>> {
        match self.client.get_named_cookie(name).await {
            Ok(cookie) => Ok(Some(cookie.value().to_owned())),
            Err(err) if is_no_such_cookie(&err) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn delete_cookie(&self, name: &str) -> Result<()> {
        self.client.delete_cookie(name).await?;
        Ok(())
    }

    pub async fn delete_all_cookies(&self) -> Result<()> {
        self.client.delete_all_cookies().await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Alerts
    // ------------------------------------------------------------------

    /// Text of the open alert, or `None` when no alert is present.
    ///
    /// Alert appearance is asynchronous relative to the click that triggers
    /// it; interact with alerts through [`Wait::for_alert`] rather than
    /// calling accept/dismiss blind.
    pub async fn alert_text(&self) -> Result<Option<String>> {
        match self.client.get_alert_text().await {
            Ok(text) => Ok(Some(text)),
            Err(err) if is_no_such_alert(&err) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn accept_alert(&self) -> Result<()> {
        self.client.accept_alert().await?;
        Ok(())
    }

    pub async fn dismiss_alert(&self) -> Result<()> {
        self.client.dismiss_alert().await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Windows
    // ------------------------------------------------------------------

    /// Handles of all open windows/tabs, enumerated fresh.
    ///
    /// Enumerate only after the action expected to create a tab; indices
    /// are not stable before the tab exists.
    pub async fn window_handles(&self) -> Result<Vec<WindowHandle>> {
        Ok(self.client.windows().await?)
    }

    pub async fn switch_to_window(&self, handle: WindowHandle) -> Result<()> {
        self.client.switch_to_window(handle).await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Miscellaneous
    // ------------------------------------------------------------------

    /// PNG screenshot of the current viewport.
    pub async fn screenshot(&self) -> Result<Vec<u8>> {
        Ok(self.client.screenshot().await?)
    }

    /// Runs a JavaScript snippet in the current document.
    pub async fn execute(&self, script: &str, args: Vec<Value>) -> Result<Value> {
        Ok(self.client.execute(script, args).await?)
    }

    /// Clears session-scoped state before a shared session is reused:
    /// cookies are deleted (while still on the current document's domain)
    /// and the browser is parked on a blank page.
    pub async fn reset(&self) -> Result<()> {
        tracing::debug!("resetting session state");
        self.client.delete_all_cookies().await?;
        self.client.goto("about:blank").await?;
        Ok(())
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("webdriver_url", &self.config.webdriver_url)
            .field("base_url", &self.config.base_url.as_str())
            .finish_non_exhaustive()
    }
}

// W3C command errors are classified by their standardized error-code string
// ("no such alert", "stale element reference", ...), which every conformant
// remote end reports verbatim.
fn has_error_code(err: &CmdError, code: &str) -> bool {
    err.to_string().contains(code)
}

pub(crate) fn is_no_such_alert(err: &CmdError) -> bool {
    has_error_code(err, "no such alert")
}

pub(crate) fn is_no_such_cookie(err: &CmdError) -> bool {
    has_error_code(err, "no such cookie")
}

/// The element handle went stale between resolution and use (the document
/// was replaced under it). Waits treat this as "not yet true".
pub(crate) fn is_stale(err: &CmdError) -> bool {
    has_error_code(err, "stale element reference")
}
