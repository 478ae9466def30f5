// Locator - tagged element-lookup strategies, resolved lazily at the moment of use
//
// A locator is a strategy plus a value. Nothing here touches the DOM:
// resolution happens in `Session` every time an action or accessor runs,
// because a re-render may have replaced the underlying node since the last
// call. Locators are never cached alongside a resolved element.

use std::fmt;

/// An element-lookup strategy.
///
/// One variant per strategy the suite uses; all of them funnel through a
/// single lowering step onto the strategies the WebDriver client speaks
/// natively (`lowered`), rather than one code path per strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// By element id attribute.
    Id(String),
    /// By element name attribute.
    Name(String),
    /// By CSS selector.
    Css(String),
    /// By XPath expression.
    XPath(String),
    /// By exact anchor text.
    LinkText(String),
    /// By a single class name.
    ClassName(String),
    /// By tag name.
    TagName(String),
}

impl Locator {
    pub fn id(value: impl Into<String>) -> Self {
        Locator::Id(value.into())
    }

    pub fn name(value: impl Into<String>) -> Self {
        Locator::Name(value.into())
    }

    pub fn css(value: impl Into<String>) -> Self {
        Locator::Css(value.into())
    }

    pub fn xpath(value: impl Into<String>) -> Self {
        Locator::XPath(value.into())
    }

    pub fn link_text(value: impl Into<String>) -> Self {
        Locator::LinkText(value.into())
    }

    pub fn class_name(value: impl Into<String>) -> Self {
        Locator::ClassName(value.into())
    }

    pub fn tag_name(value: impl Into<String>) -> Self {
        Locator::TagName(value.into())
    }

    /// Lower this locator onto the client's native strategies.
    ///
    /// W3C WebDriver has no name/class/tag strategies; those compile to
    /// equivalent CSS selectors.
    pub(crate) fn lowered(&self) -> Lowered {
        match self {
            Locator::Id(value) => Lowered::Id(value.clone()),
            Locator::Name(value) => Lowered::Css(format!("[name='{value}']")),
            Locator::Css(value) => Lowered::Css(value.clone()),
            Locator::XPath(value) => Lowered::XPath(value.clone()),
            Locator::LinkText(value) => Lowered::LinkText(value.clone()),
            Locator::ClassName(value) => Lowered::Css(format!(".{value}")),
            Locator::TagName(value) => Lowered::Css(value.clone()),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Id(value) => write!(f, "by id '{value}'"),
            Locator::Name(value) => write!(f, "by name '{value}'"),
            Locator::Css(value) => write!(f, "by css '{value}'"),
            Locator::XPath(value) => write!(f, "by xpath '{value}'"),
            Locator::LinkText(value) => write!(f, "by link text '{value}'"),
            Locator::ClassName(value) => write!(f, "by class '{value}'"),
            Locator::TagName(value) => write!(f, "by tag '{value}'"),
        }
    }
}

/// A locator lowered to the client's native strategy set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Lowered {
    Id(String),
    Css(String),
    XPath(String),
    LinkText(String),
}

impl Lowered {
    pub(crate) fn as_wire(&self) -> fantoccini::Locator<'_> {
        match self {
            Lowered::Id(value) => fantoccini::Locator::Id(value),
            Lowered::Css(value) => fantoccini::Locator::Css(value),
            Lowered::XPath(value) => fantoccini::Locator::XPath(value),
            Lowered::LinkText(value) => fantoccini::Locator::LinkText(value),
        }
    }
}
