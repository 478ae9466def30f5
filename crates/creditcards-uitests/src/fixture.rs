// SessionFixture - one browser session shared across several test cases
//
// Session startup is expensive; sharing one amortizes it. Ownership stays
// explicit: whoever opens the fixture closes it, and a test never receives
// the session without its session-scoped state (cookies, current page)
// having been reset first.

use crate::config::Config;
use crate::error::Result;
use crate::session::Session;

/// Owns one [`Session`] for reuse across test cases.
pub struct SessionFixture {
    session: Session,
}

impl SessionFixture {
    /// Opens the shared session.
    pub async fn open(config: Config) -> Result<Self> {
        let session = Session::open(config).await?;
        Ok(Self { session })
    }

    /// Hands out the shared session for one test case.
    ///
    /// Cookies are cleared and the browser is parked on a blank page first,
    /// so the test starts from fresh identity rather than whatever the
    /// previous test left behind.
    pub async fn checkout(&self) -> Result<Session> {
        self.session.reset().await?;
        Ok(self.session.clone())
    }

    /// Closes the shared session.
    pub async fn close(self) -> Result<()> {
        self.session.close().await
    }
}
