use crate::browser::config::LaunchOptions;
use crate::error::{Error, Result};
use headless_chrome::{Browser, Tab};
use std::{ffi::OsStr, path::Path, sync::Arc, time::Duration};
use tempfile::TempDir;

/// Browser session that manages a Chrome/Chromium instance.
///
/// One session per test case: sessions share nothing, so parallel test
/// execution is safe as long as each test owns its own session. The profile
/// directory is a fresh [`TempDir`] removed when the session is dropped, on
/// every exit path including panics in the test body.
pub struct BrowserSession {
    // Declared before `user_data_dir` so the browser process shuts down
    // before its profile directory is removed.
    browser: Browser,

    /// The single tab this session drives.
    tab: Arc<Tab>,

    user_data_dir: TempDir,
}

impl BrowserSession {
    /// Launch a new browser instance with the given options.
    pub fn launch(options: LaunchOptions) -> Result<Self> {
        let user_data_dir = tempfile::Builder::new()
            .prefix("orangehrm-e2e-")
            .tempdir()
            .map_err(|e| Error::Launch(format!("failed to create profile directory: {e}")))?;

        let mut launch_opts = headless_chrome::LaunchOptions::default();

        launch_opts.headless = options.headless;
        launch_opts.sandbox = options.sandbox;
        launch_opts.window_size = Some((options.window_width, options.window_height));
        launch_opts.user_data_dir = Some(user_data_dir.path().to_path_buf());

        // Keep Chrome's own logging out of the test output.
        launch_opts.args.push(OsStr::new("--disable-logging"));
        launch_opts.args.push(OsStr::new("--log-level=3"));

        // The default 30s idle timeout can close the browser between slow
        // interactions on a loaded runner.
        launch_opts.idle_browser_timeout = Duration::from_secs(300);

        if let Some(path) = options.chrome_path {
            launch_opts.path = Some(path);
        }

        let browser = Browser::new(launch_opts).map_err(|e| Error::Launch(e.to_string()))?;

        let tab = browser
            .new_tab()
            .map_err(|e| Error::Launch(format!("failed to open tab: {e}")))?;

        log::debug!(
            "launched browser session (headless={}, profile={})",
            options.headless,
            user_data_dir.path().display()
        );

        Ok(Self { browser, tab, user_data_dir })
    }

    /// Launch a browser with default options.
    pub fn new() -> Result<Self> {
        Self::launch(LaunchOptions::default())
    }

    /// Get the tab this session drives.
    pub fn tab(&self) -> Arc<Tab> {
        self.tab.clone()
    }

    /// Navigate the tab to a URL and block until navigation completes.
    pub fn navigate(&self, url: &str) -> Result<()> {
        self.tab.navigate_to(url).map_err(|e| Error::Navigation {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        self.tab.wait_until_navigated().map_err(|e| Error::Navigation {
            url: url.to_string(),
            reason: format!("navigation did not complete: {e}"),
        })?;

        Ok(())
    }

    /// Get the underlying Browser instance.
    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Path of the scoped profile directory backing this session.
    pub fn user_data_dir(&self) -> &Path {
        self.user_data_dir.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests (require Chrome to be installed)
    #[test]
    #[ignore] // Run with: cargo test -- --ignored
    fn test_launch_browser() {
        let result = BrowserSession::launch(LaunchOptions::new().headless(true));
        assert!(result.is_ok());
    }

    #[test]
    #[ignore]
    fn test_navigate() {
        let session =
            BrowserSession::launch(LaunchOptions::new().headless(true)).expect("Failed to launch browser");

        let result = session.navigate("about:blank");
        assert!(result.is_ok());
    }

    #[test]
    #[ignore]
    fn test_profile_dir_is_scoped_to_session() {
        let profile_path = {
            let session = BrowserSession::launch(LaunchOptions::new().headless(true))
                .expect("Failed to launch browser");
            let path = session.user_data_dir().to_path_buf();
            assert!(path.exists());
            path
        };

        // Dropped with the session.
        assert!(!profile_path.exists());
    }
}
