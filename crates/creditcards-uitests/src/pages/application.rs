// Credit card application form page ("/Apply")

use url::Url;

use crate::error::Result;
use crate::locator::Locator;
use crate::session::Session;

/// The credit card application form.
///
/// Submission must not be assumed to succeed: after [`submit`] the caller
/// checks for either the completion page's identity or a non-empty
/// [`validation_errors`] list on the re-rendered form.
///
/// [`submit`]: ApplicationPage::submit
/// [`validation_errors`]: ApplicationPage::validation_errors
pub struct ApplicationPage {
    session: Session,
    expected_url: Url,
}

impl ApplicationPage {
    pub const PATH: &'static str = "/Apply";
    pub const TITLE: &'static str = "Credit Card Application - Credit Cards";

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

    pub async fn navigate_to(&self) -> Result<()> {
        self.session.goto(self.expected_url.as_str()).await?;
        self.ensure_loaded().await
    }

    pub async fn ensure_loaded(&self) -> Result<()> {
        super::ensure_identity(&self.session, &self.expected_url, Self::TITLE).await
    }

    // ------------------------------------------------------------------
    // Field setters
    //
    // One semantic operation each: locate fresh, perform one interaction,
    // return. Typing appends to whatever the field already holds; clear
    // explicitly when correcting a value.
    // ------------------------------------------------------------------

    pub async fn enter_first_name(&self, first_name: &str) -> Result<()> {
        self.session
            .type_text(&Locator::id("FirstName"), first_name)
            .await
    }

    pub async fn enter_last_name(&self, last_name: &str) -> Result<()> {
        self.session
            .type_text(&Locator::id("LastName"), last_name)
            .await
    }

    pub async fn enter_frequent_flyer_number(&self, number: &str) -> Result<()> {
        self.session
            .type_text(&Locator::id("FrequentFlyerNumber"), number)
            .await
    }

    pub async fn enter_age(&self, age: &str) -> Result<()> {
        self.session.type_text(&Locator::id("Age"), age).await
    }

    pub async fn clear_age(&self) -> Result<()> {
        self.session.clear(&Locator::id("Age")).await
    }

    pub async fn enter_gross_annual_income(&self, income: &str) -> Result<()> {
        self.session
            .type_text(&Locator::id("GrossAnnualIncome"), income)
            .await
    }

    pub async fn select_marital_status_single(&self) -> Result<()> {
        self.session.click(&Locator::id("Single")).await
    }

    pub async fn select_business_source(&self, value: &str) -> Result<()> {
        self.session
            .select_by_value(&Locator::id("BusinessSource"), value)
            .await
    }

    pub async fn accept_terms(&self) -> Result<()> {
        self.session.click(&Locator::id("TermsAccepted")).await
    }

    /// Standard form submit.
    pub async fn submit(&self) -> Result<()> {
        self.session.submit_form(&Locator::tag_name("form")).await
    }

    // ------------------------------------------------------------------
    // Read accessors
    // ------------------------------------------------------------------

    /// Text of the currently selected business-source option.
    pub async fn selected_business_source(&self) -> Result<String> {
        self.session
            .text_of(&Locator::css("#BusinessSource option:checked"))
            .await
    }

    /// Texts of all business-source options, in declaration order.
    pub async fn business_source_options(&self) -> Result<Vec<String>> {
        self.session
            .texts_of(&Locator::css("#BusinessSource option"))
            .await
    }

    /// Validation errors from a failed submission, in the order the form
    /// declares its fields. Empty when the form rendered clean.
    pub async fn validation_errors(&self) -> Result<Vec<String>> {
        self.session
            .texts_of(&Locator::css(".validation-summary-errors > ul > li"))
            .await
    }
}
