//! Page object for the dashboard shown after a successful login.

use crate::browser::BrowserSession;
use crate::config::EnvConfig;
use crate::error::Result;
use crate::locator::Locator;
use crate::page::BasePage;
use log::info;

/// Page object for the dashboard page.
pub struct DashboardPage {
    base: BasePage,
}

impl DashboardPage {
    pub const DASHBOARD_TITLE: Locator = Locator::xpath("//h6[normalize-space()='Dashboard']");

    pub fn new(session: &BrowserSession, config: &EnvConfig) -> Self {
        Self {
            base: BasePage::new(session.tab(), config),
        }
    }

    /// Check whether the dashboard title is shown. Returns `Ok(false)` when
    /// it does not appear within the explicit wait — tests assert on the
    /// negative outcome as well.
    pub fn is_dashboard_title_shown(&self) -> Result<bool> {
        info!("checking whether the dashboard title is shown");
        self.base.is_visible(&Self::DASHBOARD_TITLE)
    }
}
