//! ScrollNavigator: smooth scroll to a page anchor.
//!
//! A missing anchor is a silent no-op.

use crate::log_debug;
use crate::navigation::section::SectionId;

/// Something that can bring an anchored node into view
pub trait ScrollSurface {
    /// Returns false when no node carries `id`
    fn scroll_into_view(&self, id: &str) -> bool;
}

pub struct ScrollNavigator<N: ScrollSurface> {
    surface: N,
}

impl<N: ScrollSurface> ScrollNavigator<N> {
    pub fn new(surface: N) -> Self {
        Self { surface }
    }

    pub fn go_to(&self, section: SectionId) -> bool {
        self.go_to_anchor(section.as_str())
    }

    pub fn go_to_anchor(&self, anchor: &str) -> bool {
        let found = self.surface.scroll_into_view(anchor);
        if !found {
            log_debug!("ScrollNavigator", "no element with id {:?}", anchor);
        }
        found
    }

    pub fn surface(&self) -> &N {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Fake page with a fixed set of anchors that records scroll requests
    struct FakePage {
        anchors: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl ScrollSurface for FakePage {
        fn scroll_into_view(&self, id: &str) -> bool {
            if self.anchors.iter().any(|a| *a == id) {
                self.scrolled.borrow_mut().push(id.to_string());
                true
            } else {
                false
            }
        }
    }

    fn page(anchors: Vec<&'static str>) -> ScrollNavigator<FakePage> {
        ScrollNavigator::new(FakePage {
            anchors,
            scrolled: RefCell::new(Vec::new()),
        })
    }

    #[test]
    fn test_scrolls_to_existing_section() {
        let nav = page(vec!["experience", "projects"]);
        assert!(nav.go_to(SectionId::Projects));
        assert_eq!(*nav.surface().scrolled.borrow(), vec!["projects".to_string()]);
    }

    #[test]
    fn test_missing_target_is_noop() {
        let nav = page(vec!["experience"]);
        assert!(!nav.go_to(SectionId::Hero));
        assert!(!nav.go_to_anchor("does-not-exist"));
        assert!(nav.surface().scrolled.borrow().is_empty());
    }
}
