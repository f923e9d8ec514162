//! Page object for the login page.

use crate::browser::BrowserSession;
use crate::config::EnvConfig;
use crate::error::Result;
use crate::locator::Locator;
use crate::page::BasePage;
use log::info;

/// Page object for the login page: credentials entry, form submission, and
/// the error messages the form can show.
///
/// Every method is a thin composition of [`BasePage`] primitives against the
/// fixed locators below and propagates their results unchanged.
pub struct LoginPage<'a> {
    session: &'a BrowserSession,
    base: BasePage,
    url: String,
}

impl<'a> LoginPage<'a> {
    pub const USERNAME_FIELD: Locator = Locator::xpath("//input[@placeholder='Username']");
    pub const PASSWORD_FIELD: Locator = Locator::xpath("//input[@placeholder='Password']");
    pub const LOGIN_BUTTON: Locator = Locator::xpath("//button[normalize-space()='Login']");

    /// Alert shown after submitting a well-formed but wrong credential pair.
    pub const INVALID_CREDENTIALS_MESSAGE: Locator =
        Locator::xpath("//p[@class='oxd-text oxd-text--p oxd-alert-content-text']");

    /// Field-level "Required" hint under an empty username.
    pub const USERNAME_VALIDATION_ERROR: Locator =
        Locator::xpath("//div[@class='orangehrm-login-slot-wrapper']//div[1]//div[1]//span[1]");

    /// Field-level "Required" hint under an empty password.
    pub const PASSWORD_VALIDATION_ERROR: Locator =
        Locator::xpath("//div[@class='orangehrm-login-form']//div[2]//div[1]//span[1]");

    pub fn new(session: &'a BrowserSession, config: &EnvConfig) -> Self {
        Self {
            session,
            base: BasePage::new(session.tab(), config),
            url: format!("{}/auth/login", config.base_url()),
        }
    }

    /// Navigate to the login page.
    pub fn navigate(&self) -> Result<()> {
        info!("navigating to login page at {}", self.url);
        self.session.navigate(&self.url)
    }

    /// Enter the username into the username field.
    pub fn enter_username(&self, username: &str) -> Result<()> {
        info!("entering username");
        self.base.enter_text(&Self::USERNAME_FIELD, username, false)
    }

    /// Enter the password into the password field. The value is masked in
    /// logs.
    pub fn enter_password(&self, password: &str) -> Result<()> {
        info!("entering password");
        self.base.enter_text(&Self::PASSWORD_FIELD, password, true)
    }

    /// Click the login button to submit the form.
    pub fn click_login(&self) -> Result<()> {
        info!("clicking the login button");
        self.base.click(&Self::LOGIN_BUTTON)
    }

    /// Fill both fields and submit.
    pub fn login(&self, username: &str, password: &str) -> Result<()> {
        self.enter_username(username)?;
        self.enter_password(password)?;
        self.click_login()
    }

    /// Check that the invalid-credentials alert appears. Absence within the
    /// explicit wait is a failure here, not a negative answer.
    pub fn is_invalid_credentials_message_shown(&self) -> Result<bool> {
        info!("checking whether the invalid credentials message is shown");
        self.base.wait_for_visible(&Self::INVALID_CREDENTIALS_MESSAGE)?;
        Ok(true)
    }

    /// Check that the username field shows its validation error.
    pub fn is_username_validation_error_shown(&self) -> Result<bool> {
        info!("checking whether the username validation error is shown");
        self.base.wait_for_visible(&Self::USERNAME_VALIDATION_ERROR)?;
        Ok(true)
    }

    /// Check that the password field shows its validation error.
    pub fn is_password_validation_error_shown(&self) -> Result<bool> {
        info!("checking whether the password validation error is shown");
        self.base.wait_for_visible(&Self::PASSWORD_VALIDATION_ERROR)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locator::By;

    #[test]
    fn locators_use_the_expected_strategies() {
        for locator in [
            LoginPage::USERNAME_FIELD,
            LoginPage::PASSWORD_FIELD,
            LoginPage::LOGIN_BUTTON,
            LoginPage::INVALID_CREDENTIALS_MESSAGE,
            LoginPage::USERNAME_VALIDATION_ERROR,
            LoginPage::PASSWORD_VALIDATION_ERROR,
        ] {
            assert_eq!(locator.by, By::XPath);
            assert!(locator.selector.starts_with("//"), "{locator}");
        }
    }
}
