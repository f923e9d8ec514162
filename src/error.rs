use crate::locator::Locator;
use crate::page::Readiness;
use std::time::Duration;
use thiserror::Error;

/// Errors produced by the e2e suite.
#[derive(Debug, Error)]
pub enum Error {
    /// A readiness predicate (visible/clickable) was not satisfied within the
    /// configured explicit-wait timeout. `is_visible` converts this into
    /// `false`; every other call site propagates it.
    #[error("timed out waiting for element to be {readiness} after {timeout:?} [{locator}]")]
    WaitTimeout {
        readiness: Readiness,
        locator: Locator,
        timeout: Duration,
    },

    /// Text entry into a resolved element failed at the driver level.
    #[error("error entering text [{locator}]")]
    Input {
        locator: Locator,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A failure during element interaction that is not a timeout. Never
    /// silently swallowed.
    #[error("unexpected error while {context} [{locator}]")]
    UnexpectedInteraction {
        context: String,
        locator: Locator,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A required credential or setting was missing or blank at load time.
    /// Raised before any browser session is created.
    #[error("invalid configuration: {0}")]
    ConfigValidation(String),

    /// The browser process could not be launched or no tab could be opened.
    #[error("failed to launch browser: {0}")]
    Launch(String),

    /// Navigating the active tab to a URL failed.
    #[error("failed to navigate to {url}: {reason}")]
    Navigation { url: String, reason: String },
}

/// Result type alias for the e2e suite.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wait_timeout_message_names_operation_locator_and_timeout() {
        let err = Error::WaitTimeout {
            readiness: Readiness::Clickable,
            locator: Locator::xpath("//button[normalize-space()='Login']"),
            timeout: Duration::from_secs(10),
        };

        let msg = err.to_string();
        assert!(msg.contains("clickable"), "message was: {msg}");
        assert!(msg.contains("10s"), "message was: {msg}");
        assert!(msg.contains("//button[normalize-space()='Login']"), "message was: {msg}");
    }

    #[test]
    fn input_error_preserves_cause() {
        let cause: Box<dyn std::error::Error + Send + Sync> = "keyboard gone".into();
        let err = Error::Input {
            locator: Locator::css("input[name='username']"),
            source: cause,
        };

        let source = std::error::Error::source(&err).expect("cause is attached");
        assert_eq!(source.to_string(), "keyboard gone");
    }
}
