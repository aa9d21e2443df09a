//! Document root class toggling, smooth scrolling and external links.

use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions};

use crate::config::DARK_CLASS;
use crate::error::{platform_error, PortfolioError};
use crate::navigation::ScrollSurface;
use crate::theme::ThemeSurface;

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

// =============================================================================
// DocumentRoot
// =============================================================================

/// `<html>` element; dark mode is a class on it
pub struct DocumentRoot {
    root: Option<Element>,
    dark_class: String,
}

impl Default for DocumentRoot {
    fn default() -> Self {
        Self::new(DARK_CLASS)
    }
}

impl DocumentRoot {
    pub fn new(dark_class: &str) -> Self {
        Self {
            root: document().and_then(|d| d.document_element()),
            dark_class: dark_class.to_string(),
        }
    }
}

impl ThemeSurface for DocumentRoot {
    fn set_dark(&mut self, dark: bool) -> Result<(), PortfolioError> {
        let root = self
            .root
            .as_ref()
            .ok_or_else(|| PortfolioError::Platform("document root unavailable".into()))?;
        let classes = root.class_list();
        let result = if dark {
            classes.add_1(&self.dark_class)
        } else {
            classes.remove_1(&self.dark_class)
        };
        result.map_err(|e| platform_error("classList", e))
    }
}

// =============================================================================
// DomScroller
// =============================================================================

/// `getElementById(id).scrollIntoView({ behavior: 'smooth' })`
pub struct DomScroller {
    document: Option<Document>,
}

impl Default for DomScroller {
    fn default() -> Self {
        Self::new()
    }
}

impl DomScroller {
    pub fn new() -> Self {
        Self { document: document() }
    }
}

impl ScrollSurface for DomScroller {
    fn scroll_into_view(&self, id: &str) -> bool {
        let Some(element) = self.document.as_ref().and_then(|d| d.get_element_by_id(id)) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

// =============================================================================
// Links
// =============================================================================

/// Open an opaque link (mailto:, tel:, https:) in a new browsing context
pub fn open_link(url: &str) -> Result<(), PortfolioError> {
    let window = web_sys::window().ok_or_else(|| PortfolioError::Platform("window unavailable".into()))?;
    window
        .open_with_url_and_target(url, "_blank")
        .map(|_| ())
        .map_err(|e| platform_error("window.open", e))
}
