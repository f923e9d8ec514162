//! Page objects and the element-interaction layer beneath them.
//!
//! [`BasePage`] owns the wait/interaction primitives; [`LoginPage`] and
//! [`DashboardPage`] compose them into named, intention-revealing
//! operations against fixed locators.

pub mod base;
pub mod dashboard;
pub mod login;

pub use base::{BasePage, Readiness, PERFORMANCE_TARGET};
pub use dashboard::DashboardPage;
pub use login::LoginPage;
