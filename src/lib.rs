//! # orangehrm-e2e
//!
//! Browser-driven UI test suite for the OrangeHRM web application, built on
//! the Chrome DevTools Protocol (CDP) via `headless_chrome`.
//!
//! The suite validates login and dashboard behaviors through simulated user
//! interaction: typing, clicking, and waiting for elements. Page objects
//! declare their locators as constants and compose the element-interaction
//! layer ([`BasePage`]) which handles explicit-wait polling, timeout
//! handling, and performance-threshold logging.
//!
//! ## Running the scenarios
//!
//! The end-to-end tests need a local Chrome/Chromium and credentials in the
//! environment (or a `.env` file):
//!
//! ```bash
//! export ORANGEHRM_USERNAME=Admin
//! export ORANGEHRM_PASSWORD=admin123
//! cargo test -- --ignored
//! ```
//!
//! A single smoke run against a chosen environment:
//!
//! ```bash
//! cargo run --bin smoke -- --env dev
//! cargo run --bin smoke -- --env staging --headed
//! ```
//!
//! ## Library usage
//!
//! ```rust,no_run
//! use orangehrm_e2e::{BrowserSession, DashboardPage, EnvConfig, Environment, LaunchOptions, LoginPage};
//!
//! # fn main() -> orangehrm_e2e::Result<()> {
//! let config = EnvConfig::load(Environment::Dev)?;
//! let session = BrowserSession::launch(LaunchOptions::new().headless(true))?;
//!
//! let login = LoginPage::new(&session, &config);
//! login.navigate()?;
//! login.login("Admin", "admin123")?;
//!
//! let dashboard = DashboardPage::new(&session, &config);
//! assert!(dashboard.is_dashboard_title_shown()?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`browser`]: Browser session management and launch configuration
//! - [`config`]: Per-environment settings and credential loading
//! - [`locator`]: Typed (strategy, selector) element locators
//! - [`page`]: The element-interaction layer and the page objects on top of it
//! - [`error`]: Error types and result alias

pub mod browser;
pub mod config;
pub mod error;
pub mod locator;
pub mod page;

pub use browser::{BrowserSession, LaunchOptions};
pub use config::{Credentials, EnvConfig, Environment, SecretStore};
pub use error::{Error, Result};
pub use locator::{By, Locator};
pub use page::{BasePage, DashboardPage, LoginPage};
