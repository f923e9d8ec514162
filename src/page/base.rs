//! Core element-interaction layer shared by every page object.
//!
//! [`BasePage`] wraps a browser tab with explicit-wait polling, performance
//! accounting, and consistent logging, so page objects never touch raw
//! driver polling mechanics. Waiting is a blocking poll with a bounded
//! timeout; there is no retry beyond the poll itself.

use crate::config::EnvConfig;
use crate::error::{Error, Result};
use crate::locator::{By, Locator};
use headless_chrome::{Element, Tab};
use log::{debug, error, warn};
use std::fmt;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Log target for performance records, so they can be filtered on their own
/// (`RUST_LOG=orangehrm_e2e::performance=info`).
pub const PERFORMANCE_TARGET: &str = "orangehrm_e2e::performance";

/// Pause between readiness-predicate evaluations.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Element must be attached, not display:none/visibility:hidden, and have a
/// non-empty box.
const VISIBLE_PREDICATE: &str = r#"
function() {
    if (!this.isConnected) {
        return false;
    }
    const style = window.getComputedStyle(this);
    if (style.display === 'none' || style.visibility === 'hidden') {
        return false;
    }
    const rect = this.getBoundingClientRect();
    return rect.width > 0 && rect.height > 0;
}
"#;

/// Visible AND not disabled.
const CLICKABLE_PREDICATE: &str = r#"
function() {
    if (!this.isConnected || this.disabled === true) {
        return false;
    }
    const style = window.getComputedStyle(this);
    if (style.display === 'none' || style.visibility === 'hidden') {
        return false;
    }
    const rect = this.getBoundingClientRect();
    return rect.width > 0 && rect.height > 0;
}
"#;

/// Clears an input the way a user would see it: value reset plus the input
/// and change events frameworks listen for.
const CLEAR_FIELD_FN: &str = r#"
function() {
    this.value = '';
    this.dispatchEvent(new Event('input', { bubbles: true }));
    this.dispatchEvent(new Event('change', { bubbles: true }));
}
"#;

/// Readiness predicate an element must satisfy before an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// Present in the DOM and displayed.
    Visible,
    /// Displayed and enabled.
    Clickable,
}

impl fmt::Display for Readiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Readiness::Visible => "visible",
            Readiness::Clickable => "clickable",
        })
    }
}

/// Outcome of one bounded poll. Timeout is its own variant rather than an
/// error kind so callers choose per call site whether it is a failure
/// (`wait_for_visible`) or a negative answer (`is_visible`).
enum WaitOutcome<'a> {
    Found(Element<'a>),
    TimedOut,
    Failed(Error),
}

/// Element-interaction layer over a single browser tab.
///
/// Holds the tab, the explicit-wait timeout, and the performance threshold;
/// all three are fixed at construction. Instances share no state, so
/// parallel test cases are safe as long as each owns its own session.
pub struct BasePage {
    tab: Arc<Tab>,
    explicit_wait: Duration,
    performance_threshold: Duration,
}

impl BasePage {
    pub fn new(tab: Arc<Tab>, config: &EnvConfig) -> Self {
        Self {
            tab,
            explicit_wait: config.explicit_wait(),
            performance_threshold: config.performance_threshold(),
        }
    }

    /// Wait until the element is present and displayed, or the explicit-wait
    /// timeout elapses.
    ///
    /// Timeout fails with [`Error::WaitTimeout`]; any other failure during
    /// polling fails with [`Error::UnexpectedInteraction`]. Both are logged
    /// here, once — callers must not log them again.
    pub fn wait_for_visible(&self, locator: &Locator) -> Result<Element<'_>> {
        self.await_element(locator, Readiness::Visible)
    }

    /// Same contract as [`wait_for_visible`](Self::wait_for_visible), but
    /// the element must also be enabled.
    pub fn wait_for_clickable(&self, locator: &Locator) -> Result<Element<'_>> {
        self.await_element(locator, Readiness::Clickable)
    }

    /// Check whether the element becomes visible within the explicit-wait
    /// timeout.
    ///
    /// Timeout is a normal outcome for this query and yields `Ok(false)`;
    /// only non-timeout failures propagate as errors.
    pub fn is_visible(&self, locator: &Locator) -> Result<bool> {
        debug!(
            "checking visibility of element for up to {:?} [{locator}]",
            self.explicit_wait
        );
        let start = Instant::now();

        match self.await_readiness(locator, Readiness::Visible) {
            WaitOutcome::Found(_) => {
                self.log_performance(&format!("is_visible({locator})"), start.elapsed());
                debug!("element is visible [{locator}]");
                Ok(true)
            }
            WaitOutcome::TimedOut => {
                warn!(
                    "element did not become visible within {:?} [{locator}]",
                    self.explicit_wait
                );
                Ok(false)
            }
            WaitOutcome::Failed(err) => {
                error!("{err}");
                Err(err)
            }
        }
    }

    /// Resolve the element via [`wait_for_clickable`](Self::wait_for_clickable),
    /// clear any existing content, then type `text` into it.
    ///
    /// With `is_secret` the logged value is replaced by a same-length run of
    /// asterisks; the raw text never reaches a log sink.
    pub fn enter_text(&self, locator: &Locator, text: &str, is_secret: bool) -> Result<()> {
        let element = self.wait_for_clickable(locator)?;

        debug!("clearing element [{locator}]");
        if let Err(e) = clear_field(&element) {
            return Err(self.input_error(locator, e));
        }

        debug!("sending keys to element [{locator}]");
        if let Err(e) = element.type_into(text) {
            return Err(self.input_error(locator, e));
        }

        debug!("entered text '{}' [{locator}]", masked(text, is_secret));
        Ok(())
    }

    /// Resolve the element via [`wait_for_clickable`](Self::wait_for_clickable)
    /// and click it.
    pub fn click(&self, locator: &Locator) -> Result<()> {
        let element = self.wait_for_clickable(locator)?;

        if let Err(e) = element.click() {
            let err = Error::UnexpectedInteraction {
                context: "clicking element".to_string(),
                locator: *locator,
                source: e.into(),
            };
            warn!("{err}");
            return Err(err);
        }

        debug!("clicked element [{locator}]");
        Ok(())
    }

    fn await_element(&self, locator: &Locator, readiness: Readiness) -> Result<Element<'_>> {
        debug!(
            "waiting for element to be {readiness} for up to {:?} [{locator}]",
            self.explicit_wait
        );
        let start = Instant::now();

        match self.await_readiness(locator, readiness) {
            WaitOutcome::Found(element) => {
                self.log_performance(&format!("wait_for_{readiness}({locator})"), start.elapsed());
                debug!("element is {readiness} [{locator}]");
                Ok(element)
            }
            WaitOutcome::TimedOut => {
                let err = Error::WaitTimeout {
                    readiness,
                    locator: *locator,
                    timeout: self.explicit_wait,
                };
                warn!("{err}");
                Err(err)
            }
            WaitOutcome::Failed(err) => {
                error!("{err}");
                Err(err)
            }
        }
    }

    /// The bounded poll itself. The final predicate evaluation happens on or
    /// after the deadline, so a timeout takes at least the configured wait.
    fn await_readiness(&self, locator: &Locator, readiness: Readiness) -> WaitOutcome<'_> {
        let deadline = Instant::now() + self.explicit_wait;

        loop {
            // The driver reports an absent element as an error; absence just
            // means the element has not appeared yet, so keep polling.
            if let Ok(element) = self.find_element(locator) {
                match element_ready(&element, readiness) {
                    Ok(true) => return WaitOutcome::Found(element),
                    Ok(false) => {}
                    Err(e) => {
                        return WaitOutcome::Failed(Error::UnexpectedInteraction {
                            context: format!("checking the {readiness} state of element"),
                            locator: *locator,
                            source: e.into(),
                        });
                    }
                }
            }

            if Instant::now() >= deadline {
                return WaitOutcome::TimedOut;
            }
            thread::sleep(POLL_INTERVAL);
        }
    }

    fn find_element(&self, locator: &Locator) -> anyhow::Result<Element<'_>> {
        match locator.by {
            By::Css => self.tab.find_element(locator.selector),
            By::XPath => self.tab.find_element_by_xpath(locator.selector),
        }
    }

    fn input_error(&self, locator: &Locator, source: anyhow::Error) -> Error {
        let err = Error::Input {
            locator: *locator,
            source: source.into(),
        };
        warn!("{err}");
        err
    }

    fn log_performance(&self, action: &str, duration: Duration) {
        let level = performance_level(duration, self.performance_threshold);
        if level == log::Level::Warn {
            log::log!(
                target: PERFORMANCE_TARGET,
                level,
                "action '{action}' took {:.2}s, exceeding the {:.2}s threshold",
                duration.as_secs_f64(),
                self.performance_threshold.as_secs_f64()
            );
        } else {
            log::log!(
                target: PERFORMANCE_TARGET,
                level,
                "action '{action}' took {:.2}s",
                duration.as_secs_f64()
            );
        }
    }
}

/// Severity of a performance record: strictly above threshold is a warning,
/// at or below is informational.
fn performance_level(duration: Duration, threshold: Duration) -> log::Level {
    if duration > threshold {
        log::Level::Warn
    } else {
        log::Level::Info
    }
}

/// Value as it may appear in logs: the raw text, or a same-length mask.
fn masked(text: &str, is_secret: bool) -> String {
    if is_secret {
        "*".repeat(text.chars().count())
    } else {
        text.to_string()
    }
}

fn element_ready(element: &Element<'_>, readiness: Readiness) -> anyhow::Result<bool> {
    let predicate = match readiness {
        Readiness::Visible => VISIBLE_PREDICATE,
        Readiness::Clickable => CLICKABLE_PREDICATE,
    };

    let result = element.call_js_fn(predicate, vec![], false)?;
    Ok(result.value.and_then(|v| v.as_bool()).unwrap_or(false))
}

fn clear_field(element: &Element<'_>) -> anyhow::Result<()> {
    element.call_js_fn(CLEAR_FIELD_FN, vec![], false)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_above_threshold_is_a_warning() {
        let threshold = Duration::from_secs(2);
        assert_eq!(
            performance_level(Duration::from_millis(2001), threshold),
            log::Level::Warn
        );
    }

    #[test]
    fn duration_at_or_below_threshold_is_informational() {
        let threshold = Duration::from_secs(2);
        // Exactly at the threshold counts as within it.
        assert_eq!(performance_level(threshold, threshold), log::Level::Info);
        assert_eq!(
            performance_level(Duration::from_millis(450), threshold),
            log::Level::Info
        );
    }

    #[test]
    fn secret_text_is_masked_to_same_length() {
        let shown = masked("secret123", true);
        assert_eq!(shown, "*********");
        assert_eq!(shown.len(), "secret123".len());
        assert!(!shown.contains("secret"));
    }

    #[test]
    fn mask_counts_characters_not_bytes() {
        assert_eq!(masked("päss", true), "****");
    }

    #[test]
    fn plain_text_is_logged_verbatim() {
        assert_eq!(masked("Admin", false), "Admin");
        assert_eq!(masked("", false), "");
    }
}
