//! Wait and text-entry behavior against local pages.
//!
//! These tests exercise the element-interaction layer with `data:` URLs, so
//! they need a local Chrome but no reachable deployment. Run with:
//!
//! ```bash
//! cargo test --test interaction -- --ignored
//! ```

use orangehrm_e2e::{BasePage, BrowserSession, EnvConfig, Error, LaunchOptions, Locator};
use std::time::{Duration, Instant};

const WAIT_SECS: u64 = 2;

fn fixture() -> (BrowserSession, EnvConfig) {
    let _ = env_logger::builder().is_test(true).try_init();

    let session = BrowserSession::launch(LaunchOptions::new().headless(true))
        .expect("browser should launch");
    let config = EnvConfig::from_json(
        r#"{
            "webdriver": { "explicit_wait": 2 },
            "application": { "base_url": "https://example.test" },
            "performance": { "performance_threshold": 2 }
        }"#,
    )
    .expect("fixture settings are valid");

    (session, config)
}

fn open(session: &BrowserSession, body: &str) {
    let url = format!("data:text/html,<html><body>{body}</body></html>");
    session.navigate(&url).expect("navigation to fixture page should succeed");
}

fn field_value(session: &BrowserSession, id: &str) -> String {
    let js = format!("document.getElementById('{id}').value");
    let result = session
        .tab()
        .evaluate(&js, false)
        .expect("field value should be readable");
    result
        .value
        .and_then(|v| v.as_str().map(str::to_string))
        .expect("field value is a string")
}

#[test]
#[ignore] // Requires Chrome to be installed
fn wait_for_visible_returns_present_element() {
    let (session, config) = fixture();
    open(&session, "<button id='go'>Go</button>");

    let base = BasePage::new(session.tab(), &config);
    let element = base.wait_for_visible(&Locator::css("#go"));
    assert!(element.is_ok());
}

#[test]
#[ignore]
fn wait_for_visible_times_out_on_absent_element() {
    let (session, config) = fixture();
    open(&session, "<p>nothing else</p>");

    let base = BasePage::new(session.tab(), &config);
    let start = Instant::now();
    let err = match base.wait_for_visible(&Locator::css("#never")) {
        Ok(_) => panic!("absent element must time out"),
        Err(err) => err,
    };

    assert!(matches!(err, Error::WaitTimeout { .. }), "got: {err:?}");
    assert!(
        start.elapsed() >= Duration::from_secs(WAIT_SECS),
        "timed out after only {:?}",
        start.elapsed()
    );
}

#[test]
#[ignore]
fn is_visible_reports_absence_without_raising() {
    let (session, config) = fixture();
    open(&session, "<p>nothing else</p>");

    let base = BasePage::new(session.tab(), &config);
    let shown = base
        .is_visible(&Locator::css("#never"))
        .expect("timeout is a negative answer, not an error");
    assert!(!shown);
}

#[test]
#[ignore]
fn hidden_element_is_not_visible() {
    let (session, config) = fixture();
    open(&session, "<div id='ghost' style='display:none'>boo</div>");

    let base = BasePage::new(session.tab(), &config);
    let shown = base.is_visible(&Locator::css("#ghost")).expect("check should not fail");
    assert!(!shown);
}

#[test]
#[ignore]
fn element_appearing_before_the_deadline_is_found() {
    let (session, config) = fixture();
    open(
        &session,
        "<div id='late' style='display:none'>late</div>\
         <script>setTimeout(() => { document.getElementById('late').style.display = 'block'; }, 500);</script>",
    );

    let base = BasePage::new(session.tab(), &config);
    let start = Instant::now();
    base.wait_for_visible(&Locator::css("#late"))
        .expect("element appears well before the deadline");
    assert!(start.elapsed() < Duration::from_secs(WAIT_SECS));
}

#[test]
#[ignore]
fn disabled_element_is_visible_but_not_clickable() {
    let (session, config) = fixture();
    open(&session, "<button id='off' disabled>Off</button>");

    let base = BasePage::new(session.tab(), &config);

    assert!(base.wait_for_visible(&Locator::css("#off")).is_ok());

    let err = match base.wait_for_clickable(&Locator::css("#off")) {
        Ok(_) => panic!("disabled element must not become clickable"),
        Err(err) => err,
    };
    assert!(matches!(err, Error::WaitTimeout { .. }), "got: {err:?}");
    assert!(err.to_string().contains("clickable"), "got: {err}");
}

#[test]
#[ignore]
fn enter_text_replaces_existing_content() {
    let (session, config) = fixture();
    open(&session, "<input id='field' value='stale text'>");

    let base = BasePage::new(session.tab(), &config);
    base.enter_text(&Locator::css("#field"), "fresh", false)
        .expect("text entry should succeed");

    assert_eq!(field_value(&session, "field"), "fresh");
}

#[test]
#[ignore]
fn entering_empty_text_clears_the_field_idempotently() {
    let (session, config) = fixture();
    open(&session, "<input id='field' value='stale text'>");

    let base = BasePage::new(session.tab(), &config);
    let locator = Locator::css("#field");

    base.enter_text(&locator, "", false).expect("first clear should succeed");
    assert_eq!(field_value(&session, "field"), "");

    base.enter_text(&locator, "", false).expect("second clear should succeed");
    assert_eq!(field_value(&session, "field"), "");
}

#[test]
#[ignore]
fn click_dispatches_to_the_page() {
    let (session, config) = fixture();
    open(
        &session,
        "<button id='go' onclick=\"this.textContent='clicked'\">Go</button>",
    );

    let base = BasePage::new(session.tab(), &config);
    base.click(&Locator::css("#go")).expect("click should succeed");

    let text = session
        .tab()
        .evaluate("document.getElementById('go').textContent", false)
        .expect("text should be readable")
        .value
        .and_then(|v| v.as_str().map(str::to_string));
    assert_eq!(text.as_deref(), Some("clicked"));
}

#[test]
#[ignore]
fn xpath_locators_resolve() {
    let (session, config) = fixture();
    open(&session, "<h6>Dashboard</h6>");

    let base = BasePage::new(session.tab(), &config);
    let shown = base
        .is_visible(&Locator::xpath("//h6[normalize-space()='Dashboard']"))
        .expect("check should not fail");
    assert!(shown);
}
