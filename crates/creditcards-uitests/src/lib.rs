//! End-to-end UI test suite for the Credit Cards demo application.
//!
//! The library half of this crate is the reusable core: a [`Session`]
//! handle over a WebDriver endpoint, the bounded-polling [`Wait`] policy
//! that synchronizes against the browser's asynchronous rendering, and one
//! page object per application page. The integration tests under `tests/`
//! script user journeys with it.
//!
//! # Example
//!
//! ```ignore
//! use creditcards_uitests::{ApplicationPage, Config, HomePage, Session};
//!
//! #[tokio::main]
//! async fn main() -> creditcards_uitests::Result<()> {
//!     let config = Config::from_env()?;
//!     Session::run_scoped(config, async |session| {
//!         let home = HomePage::new(&session);
//!         home.navigate_to().await?;
//!         home.apply_low_rate().await?;
//!
//!         // ensure_loaded is the synchronization point: it waits for the
//!         // (URL, title) pair and fails with PageLoadFailure otherwise.
//!         let application = ApplicationPage::new(&session);
//!         application.ensure_loaded().await?;
//!
//!         application.enter_first_name("Sarah").await?;
//!         application.accept_terms().await?;
//!         application.submit().await?;
//!         Ok(())
//!     })
//!     .await
//! }
//! ```
//!
//! # Design rules
//!
//! - Element references are resolved fresh on every action and never cached:
//!   a validation round-trip re-renders the form, and any reference taken
//!   before the submit is invalid after it.
//! - Page-object accessors are only valid once `ensure_loaded` has
//!   confirmed the page identity; every navigation path re-confirms it.
//! - Waits are bounded and their timeouts are terminal: a [`Error::Timeout`]
//!   carries the last-seen URL and page source and propagates to the test.

pub mod config;
pub mod error;
pub mod fixture;
pub mod locator;
pub mod pages;
pub mod session;
pub mod wait;

pub use config::Config;
pub use error::{Error, Result};
pub use fixture::SessionFixture;
pub use locator::Locator;
pub use pages::{ApplicationCompletePage, ApplicationPage, HomePage, Product};
pub use session::Session;
pub use wait::Wait;
