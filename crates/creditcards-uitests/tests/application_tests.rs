// Integration tests for the credit card application journey
//
// Each test drives a real browser through a WebDriver endpoint against the
// local application fixture: navigate, interact, then assert on observable
// outcomes (page identity, rendered text, alerts, cookies, tabs).

mod common;

use app_server::AppServer;
use creditcards_uitests::{ApplicationCompletePage, ApplicationPage, HomePage};

// ============================================================================
// Starting an application from the home page
// ============================================================================

#[tokio::test]
async fn initiates_application_from_low_rate_link() -> anyhow::Result<()> {
    let server = AppServer::start().await;
    common::run_with_session(&server.url(), async |session| {
        let home = HomePage::new(&session);
        home.navigate_to().await?;
        home.apply_low_rate().await?;
        ApplicationPage::new(&session).ensure_loaded().await?;
        Ok(())
    })
    .await?;
    server.shutdown();
    Ok(())
}

#[tokio::test]
async fn initiates_application_from_random_greeting_link() -> anyhow::Result<()> {
    let server = AppServer::start().await;
    common::run_with_session(&server.url(), async |session| {
        let home = HomePage::new(&session);
        home.navigate_to().await?;
        home.apply_random_greeting().await?;
        ApplicationPage::new(&session).ensure_loaded().await?;
        Ok(())
    })
    .await?;
    server.shutdown();
    Ok(())
}

#[tokio::test]
async fn initiates_application_from_carousel_easy_application_link() -> anyhow::Result<()> {
    let server = AppServer::start().await;
    common::run_with_session(&server.url(), async |session| {
        let home = HomePage::new(&session);
        home.navigate_to().await?;
        // The link only appears once the carousel advances; the page object
        // waits for it rather than racing the animation.
        home.next_carousel_slide().await?;
        home.apply_easy_application().await?;
        ApplicationPage::new(&session).ensure_loaded().await?;
        Ok(())
    })
    .await?;
    server.shutdown();
    Ok(())
}

#[tokio::test]
async fn initiates_application_from_customer_service_link() -> anyhow::Result<()> {
    let server = AppServer::start().await;
    common::run_with_session(&server.url(), async |session| {
        let home = HomePage::new(&session);
        home.navigate_to().await?;
        // Enabled by the page a moment after load; waits for clickability.
        home.apply_customer_service().await?;
        ApplicationPage::new(&session).ensure_loaded().await?;
        Ok(())
    })
    .await?;
    server.shutdown();
    Ok(())
}

// ============================================================================
// Home page content
// ============================================================================

#[tokio::test]
async fn displays_products_and_rates() -> anyhow::Result<()> {
    let server = AppServer::start().await;
    common::run_with_session(&server.url(), async |session| {
        let home = HomePage::new(&session);
        home.navigate_to().await?;

        let products = home.products().await?;
        assert_eq!(
            products.first().map(|product| product.name.as_str()),
            Some("Easy Credit Card")
        );
        assert_eq!(
            products.first().map(|product| product.interest_rate.as_str()),
            Some("20% APR")
        );

        // Reading twice without an intervening action returns identical data.
        let again = home.products().await?;
        assert_eq!(products, again);
        Ok(())
    })
    .await?;
    server.shutdown();
    Ok(())
}

// ============================================================================
// Submitting the application form
// ============================================================================

#[tokio::test]
async fn accepts_a_valid_application() -> anyhow::Result<()> {
    let server = AppServer::start().await;
    common::run_with_session(&server.url(), async |session| {
        let application = ApplicationPage::new(&session);
        application.navigate_to().await?;

        application.enter_first_name("Sarah").await?;
        application.enter_last_name("Smith").await?;
        application.enter_frequent_flyer_number("123456-A").await?;
        application.enter_age("18").await?;
        application.enter_gross_annual_income("50000").await?;
        application.select_marital_status_single().await?;

        assert_eq!(
            application.selected_business_source().await?,
            "I'd Rather Not Say"
        );
        assert_eq!(application.business_source_options().await?.len(), 5);
        application.select_business_source("Email").await?;

        application.accept_terms().await?;
        application.submit().await?;

        let complete = ApplicationCompletePage::new(&session);
        complete.ensure_loaded().await?;
        assert!(!complete.reference_number().await?.is_empty());
        assert_eq!(complete.full_name().await?, "Sarah Smith");
        Ok(())
    })
    .await?;
    server.shutdown();
    Ok(())
}

#[tokio::test]
async fn accepts_an_application_after_validation_errors_are_corrected() -> anyhow::Result<()> {
    let server = AppServer::start().await;
    common::run_with_session(&server.url(), async |session| {
        let application = ApplicationPage::new(&session);
        application.navigate_to().await?;

        // Last name omitted and age below the minimum.
        application.enter_first_name("Sarah").await?;
        application.enter_frequent_flyer_number("123456-A").await?;
        application.enter_age("5").await?;
        application.enter_gross_annual_income("50000").await?;
        application.select_marital_status_single().await?;
        application.select_business_source("Email").await?;
        application.accept_terms().await?;
        application.submit().await?;

        // The form re-renders with errors in field declaration order.
        application.ensure_loaded().await?;
        let errors = application.validation_errors().await?;
        assert_eq!(
            errors,
            vec![
                "Please provide a last name".to_owned(),
                "You must be at least 18 years old".to_owned(),
            ]
        );

        // Correct both fields and resubmit in the same session.
        application.clear_age().await?;
        application.enter_age("18").await?;
        application.enter_last_name("Smith").await?;
        application.submit().await?;

        let complete = ApplicationCompletePage::new(&session);
        complete.ensure_loaded().await?;
        assert!(!complete.reference_number().await?.is_empty());
        assert_eq!(complete.full_name().await?, "Sarah Smith");
        Ok(())
    })
    .await?;
    server.shutdown();
    Ok(())
}

// ============================================================================
// Tabs, alerts, and cookies
// ============================================================================

#[tokio::test]
async fn opens_contact_page_in_a_new_tab_from_the_footer() -> anyhow::Result<()> {
    let server = AppServer::start().await;
    common::run_with_session(&server.url(), async |session| {
        let home = HomePage::new(&session);
        home.navigate_to().await?;
        home.click_contact_footer_link().await?;

        // Tab creation is asynchronous: enumerate handles only after the
        // click, and only once a second one exists.
        let handles = session
            .wait()
            .until("a second browser tab", async || {
                let handles = session.window_handles().await?;
                Ok((handles.len() >= 2).then_some(handles))
            })
            .await?;
        session.switch_to_window(handles[1].clone()).await?;

        let url = session.current_url().await?;
        assert!(
            url.as_str().ends_with("/Home/Contact"),
            "unexpected url in new tab: {url}"
        );
        Ok(())
    })
    .await?;
    server.shutdown();
    Ok(())
}

#[tokio::test]
async fn alerts_when_live_chat_is_closed() -> anyhow::Result<()> {
    let server = AppServer::start().await;
    common::run_with_session(&server.url(), async |session| {
        let home = HomePage::new(&session);
        home.navigate_to().await?;
        home.click_live_chat_link().await?;

        let text = session.wait().for_alert().await?;
        assert_eq!(text, "Live chat is currently closed.");

        // Accepting dismisses the alert without navigating away.
        session.accept_alert().await?;
        home.ensure_loaded().await?;
        Ok(())
    })
    .await?;
    server.shutdown();
    Ok(())
}

#[tokio::test]
async fn stays_on_home_page_when_about_us_is_cancelled() -> anyhow::Result<()> {
    let server = AppServer::start().await;
    common::run_with_session(&server.url(), async |session| {
        let home = HomePage::new(&session);
        home.navigate_to().await?;
        home.click_learn_about_us_link().await?;

        session.wait().for_alert().await?;
        session.dismiss_alert().await?;
        home.ensure_loaded().await?;
        Ok(())
    })
    .await?;
    server.shutdown();
    Ok(())
}

#[tokio::test]
async fn hides_cookie_notice_once_cookies_are_accepted() -> anyhow::Result<()> {
    let server = AppServer::start().await;
    common::run_with_session(&server.url(), async |session| {
        let home = HomePage::new(&session);
        home.navigate_to().await?;
        assert!(home.is_cookie_notice_present().await?);

        session.add_cookie("acceptedCookies", "true").await?;
        assert_eq!(
            session.cookie_value("acceptedCookies").await?.as_deref(),
            Some("true")
        );

        home.refresh().await?;
        home.ensure_loaded().await?;
        assert!(!home.is_cookie_notice_present().await?);
        Ok(())
    })
    .await?;
    server.shutdown();
    Ok(())
}

// ============================================================================
// Screenshots
// ============================================================================

#[tokio::test]
async fn captures_a_screenshot_of_the_about_page() -> anyhow::Result<()> {
    let server = AppServer::start().await;
    common::run_with_session(&server.url(), async |session| {
        let about_url = session.config().page_url("/Home/About");
        session.goto(about_url.as_str()).await?;
        session
            .wait()
            .until("about page title", async || {
                Ok((session.title().await? == "About - Credit Cards").then_some(()))
            })
            .await?;

        let png = session.screenshot().await?;
        let decoded = image::load_from_memory(&png)?;
        let (width, height) = image::GenericImageView::dimensions(&decoded);
        assert!(width > 0 && height > 0);

        let dir = tempfile::tempdir()?;
        let path = dir.path().join("aboutPage.png");
        std::fs::write(&path, &png)?;
        assert!(std::fs::metadata(&path)?.len() > 0);
        Ok(())
    })
    .await?;
    server.shutdown();
    Ok(())
}
