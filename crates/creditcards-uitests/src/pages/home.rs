// Home page ("/")

use url::Url;

use crate::error::Result;
use crate::locator::Locator;
use crate::session::Session;

/// One row of the product rates table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub interest_rate: String,
}

/// The Credit Cards home page.
pub struct HomePage {
    session: Session,
    expected_url: Url,
}

impl HomePage {
    pub const PATH: &'static str = "/";
    pub const TITLE: &'static str = "Home Page - Credit Cards";

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

    /// Navigates to the home page and confirms its identity.
    pub async fn navigate_to(&self) -> Result<()> {
        self.session.goto(self.expected_url.as_str()).await?;
        self.ensure_loaded().await
    }

    /// Confirms the live (URL, title) pair matches this page.
    ///
    /// Call after any action expected to land here; this is the
    /// synchronization point that turns an asynchronous page transition
    /// into a synchronous return.
    pub async fn ensure_loaded(&self) -> Result<()> {
        super::ensure_identity(&self.session, &self.expected_url, Self::TITLE).await
    }

    pub async fn refresh(&self) -> Result<()> {
        self.session.refresh().await
    }

    // ------------------------------------------------------------------
    // Read accessors (owned snapshots, resolved fresh on every call)
    // ------------------------------------------------------------------

    /// Product name / interest-rate pairs from consecutive `td` cells of
    /// the rates table.
    pub async fn products(&self) -> Result<Vec<Product>> {
        let cells = self.session.texts_of(&Locator::tag_name("td")).await?;
        Ok(cells
            .chunks_exact(2)
            .map(|pair| Product {
                name: pair[0].clone(),
                interest_rate: pair[1].clone(),
            })
            .collect())
    }

    /// Server-generated token rendered into each response; changes whenever
    /// the page is re-rendered.
    pub async fn generation_token(&self) -> Result<String> {
        self.session.text_of(&Locator::id("GenerationToken")).await
    }

    pub async fn is_cookie_notice_present(&self) -> Result<bool> {
        self.session.is_present(&Locator::id("CookiesBeingUsed")).await
    }

    // ------------------------------------------------------------------
    // Apply links
    //
    // Each performs exactly one click; the caller confirms the destination
    // page's identity itself.
    // ------------------------------------------------------------------

    pub async fn apply_low_rate(&self) -> Result<()> {
        self.session.click(&Locator::name("ApplyLowRate")).await
    }

    pub async fn apply_random_greeting(&self) -> Result<()> {
        self.session
            .click(&Locator::xpath("/html/body/div/div[4]/div/p/a"))
            .await
    }

    /// Advances the promo carousel one slide.
    pub async fn next_carousel_slide(&self) -> Result<()> {
        self.session.click(&Locator::css("[data-slide='next']")).await
    }

    /// Follows the "Easy: Apply Now!" link, which the carousel only renders
    /// once its slide comes into rotation.
    pub async fn apply_easy_application(&self) -> Result<()> {
        let link = self
            .session
            .wait()
            .for_element(&Locator::link_text("Easy: Apply Now!"))
            .await?;
        link.click().await?;
        Ok(())
    }

    /// Follows the customer-service apply link, which the page enables a
    /// moment after load.
    pub async fn apply_customer_service(&self) -> Result<()> {
        let link = self
            .session
            .wait()
            .for_clickable(&Locator::class_name("customer-service-apply-now"))
            .await?;
        link.click().await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Other links
    // ------------------------------------------------------------------

    /// Opens the contact page; the link targets a new tab.
    pub async fn click_contact_footer_link(&self) -> Result<()> {
        self.session.click(&Locator::id("ContactFooter")).await
    }

    /// Triggers a confirmation dialog before navigating to the about page.
    pub async fn click_learn_about_us_link(&self) -> Result<()> {
        self.session.click(&Locator::id("LearnAboutUs")).await
    }

    /// Triggers the live-chat alert.
    pub async fn click_live_chat_link(&self) -> Result<()> {
        self.session.click(&Locator::id("LiveChat")).await
    }
}
