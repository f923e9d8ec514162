use std::fmt;

/// Strategy used to find a DOM element.
///
/// Only the strategies the suite actually uses are modeled; an unsupported
/// strategy is unrepresentable rather than a runtime error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum By {
    /// CSS selector, resolved with `querySelector` semantics.
    Css,
    /// XPath expression.
    XPath,
}

impl By {
    pub fn as_str(self) -> &'static str {
        match self {
            By::Css => "css",
            By::XPath => "xpath",
        }
    }
}

/// A (strategy, selector) pair identifying a DOM element.
///
/// `const`-constructible so page objects can declare their locators as
/// associated constants:
///
/// ```
/// use orangehrm_e2e::locator::Locator;
///
/// const LOGIN_BUTTON: Locator = Locator::xpath("//button[normalize-space()='Login']");
/// assert_eq!(LOGIN_BUTTON.selector, "//button[normalize-space()='Login']");
/// ```
///
/// Uniqueness of the matched element is assumed, not verified; the first
/// match wins, as with the underlying driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locator {
    pub by: By,
    pub selector: &'static str,
}

impl Locator {
    pub const fn css(selector: &'static str) -> Self {
        Self { by: By::Css, selector }
    }

    pub const fn xpath(selector: &'static str) -> Self {
        Self { by: By::XPath, selector }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "by={} selector={}", self.by.as_str(), self.selector)
    }
}
