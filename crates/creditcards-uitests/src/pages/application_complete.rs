// Application completion page
//
// Served from the same URL as the form (the POST re-renders in place), so
// the title is what distinguishes a completed application from a rejected
// one; identity is the (URL, title) pair, not the URL alone.

use url::Url;

use crate::error::Result;
use crate::locator::Locator;
use crate::session::Session;

pub struct ApplicationCompletePage {
    session: Session,
    expected_url: Url,
}

impl ApplicationCompletePage {
    pub const PATH: &'static str = "/Apply";
    pub const TITLE: &'static str = "Application Complete - Credit Cards";

    pub fn new(session: &Session) -> Self {
        let expected_url = session.config().page_url(Self::PATH);
        Self {
            session: session.clone(),
            expected_url,
        }
    }

    pub fn expected_url(&self) -> &Url {
        &self.expected_url
    }

    pub async fn ensure_loaded(&self) -> Result<()> {
        super::ensure_identity(&self.session, &self.expected_url, Self::TITLE).await
    }

    /// Reference number assigned to the accepted application.
    pub async fn reference_number(&self) -> Result<String> {
        self.session.text_of(&Locator::id("ReferenceNumber")).await
    }

    /// Applicant's full name as the application recorded it.
    pub async fn full_name(&self) -> Result<String> {
        self.session.text_of(&Locator::id("FullName")).await
    }
}
