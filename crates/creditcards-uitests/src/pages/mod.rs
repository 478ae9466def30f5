// Page objects for the Credit Cards application
//
// A page object hides raw locators behind semantic operations for one page.
// Its accessors are only meaningful once the page's identity, the
// (URL, title) pair, has been confirmed, so every navigation path funnels
// through ensure_loaded before returning control to the test.

mod application;
mod application_complete;
mod home;

pub use application::ApplicationPage;
pub use application_complete::ApplicationCompletePage;
pub use home::{HomePage, Product};

use url::Url;

use crate::error::{Error, Result};
use crate::session::Session;

/// Waits for the live (URL, title) pair to match `expected`, converting a
/// timed-out wait into [`Error::PageLoadFailure`] with the current URL and
/// raw page source attached.
pub(crate) async fn ensure_identity(
    session: &Session,
    expected_url: &Url,
    expected_title: &str,
) -> Result<()> {
    match session.wait().for_identity(expected_url, expected_title).await {
        Ok(()) => Ok(()),
        Err(Error::Timeout {
            url, page_source, ..
        }) => Err(Error::PageLoadFailure {
            expected_url: expected_url.to_string(),
            expected_title: expected_title.to_owned(),
            url,
            page_source,
        }),
        Err(err) => Err(err),
    }
}
