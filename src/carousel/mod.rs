//! ProjectCarousel: single-selection browsing over a fixed project list
//!
//! The list is non-empty and fixed at construction. Boundary behavior is a
//! policy: `Wrap` cycles past either end, `Clamp` stops there and reports the
//! control as disabled.

use serde::{Deserialize, Serialize};

use crate::error::PortfolioError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryPolicy {
    #[default]
    Wrap,
    Clamp,
}

#[derive(Debug, Clone)]
pub struct ProjectCarousel<T> {
    items: Vec<T>,
    current: usize,
    policy: BoundaryPolicy,
}

impl<T> ProjectCarousel<T> {
    pub fn new(items: Vec<T>, policy: BoundaryPolicy) -> Result<Self, PortfolioError> {
        if items.is_empty() {
            return Err(PortfolioError::EmptyCarousel);
        }
        Ok(Self {
            items,
            current: 0,
            policy,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; construction rejects empty lists
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    pub fn current(&self) -> &T {
        &self.items[self.current]
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn can_next(&self) -> bool {
        match self.policy {
            BoundaryPolicy::Wrap => self.items.len() > 1,
            BoundaryPolicy::Clamp => self.current + 1 < self.items.len(),
        }
    }

    pub fn can_previous(&self) -> bool {
        match self.policy {
            BoundaryPolicy::Wrap => self.items.len() > 1,
            BoundaryPolicy::Clamp => self.current > 0,
        }
    }

    /// Advance one; returns the resulting index
    pub fn next(&mut self) -> usize {
        let last = self.items.len() - 1;
        self.current = match self.policy {
            BoundaryPolicy::Wrap if self.current == last => 0,
            BoundaryPolicy::Clamp if self.current == last => last,
            _ => self.current + 1,
        };
        self.current
    }

    /// Step back one; returns the resulting index
    pub fn previous(&mut self) -> usize {
        let last = self.items.len() - 1;
        self.current = match self.policy {
            BoundaryPolicy::Wrap if self.current == 0 => last,
            BoundaryPolicy::Clamp if self.current == 0 => 0,
            _ => self.current - 1,
        };
        self.current
    }

    /// Select `index` directly. Out-of-range leaves the selection unchanged.
    pub fn jump_to(&mut self, index: usize) -> Result<usize, PortfolioError> {
        if index >= self.items.len() {
            return Err(PortfolioError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        self.current = index;
        Ok(self.current)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(policy: BoundaryPolicy) -> ProjectCarousel<&'static str> {
        ProjectCarousel::new(vec!["deploy-tool", "3d-pipeline"], policy).unwrap()
    }

    // -------------------------------------------------------------------------
    // Requirement 1: construction
    // -------------------------------------------------------------------------
    #[test]
    fn test_starts_at_zero() {
        let carousel = pair(BoundaryPolicy::Wrap);
        assert_eq!(carousel.index(), 0);
        assert_eq!(*carousel.current(), "deploy-tool");
        assert_eq!(carousel.len(), 2);
    }

    #[test]
    fn test_empty_rejected() {
        let err = ProjectCarousel::<u8>::new(vec![], BoundaryPolicy::Wrap).unwrap_err();
        assert_eq!(err, PortfolioError::EmptyCarousel);
    }

    // -------------------------------------------------------------------------
    // Requirement 2: wrap policy (default)
    // -------------------------------------------------------------------------
    #[test]
    fn test_wrap_previous_from_zero() {
        let mut carousel = pair(BoundaryPolicy::Wrap);
        assert_eq!(carousel.previous(), 1);
    }

    #[test]
    fn test_wrap_next_cycles() {
        let mut carousel = pair(BoundaryPolicy::Wrap);
        assert_eq!(carousel.next(), 1);
        assert_eq!(carousel.next(), 0);
        assert!(carousel.can_next());
        assert!(carousel.can_previous());
    }

    // -------------------------------------------------------------------------
    // Requirement 3: clamp policy
    // -------------------------------------------------------------------------
    #[test]
    fn test_clamp_previous_from_zero() {
        let mut carousel = pair(BoundaryPolicy::Clamp);
        assert!(!carousel.can_previous());
        assert_eq!(carousel.previous(), 0);
    }

    #[test]
    fn test_clamp_next_stops_at_end() {
        let mut carousel = pair(BoundaryPolicy::Clamp);
        assert_eq!(carousel.next(), 1);
        assert!(!carousel.can_next());
        assert_eq!(carousel.next(), 1);
        assert!(carousel.can_previous());
    }

    // -------------------------------------------------------------------------
    // Requirement 4: jump_to
    // -------------------------------------------------------------------------
    #[test]
    fn test_jump_then_navigate() {
        let mut carousel = pair(BoundaryPolicy::Wrap);
        assert_eq!(carousel.jump_to(1).unwrap(), 1);
        assert_eq!(*carousel.current(), "3d-pipeline");
        assert_eq!(carousel.previous(), 0);

        carousel.jump_to(1).unwrap();
        assert_eq!(carousel.next(), 0);
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut carousel = pair(BoundaryPolicy::Clamp);
        carousel.jump_to(1).unwrap();
        let err = carousel.jump_to(2).unwrap_err();
        assert_eq!(err, PortfolioError::IndexOutOfRange { index: 2, len: 2 });
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_single_item() {
        let mut wrap = ProjectCarousel::new(vec![1], BoundaryPolicy::Wrap).unwrap();
        assert!(!wrap.can_next());
        assert_eq!(wrap.next(), 0);
        assert_eq!(wrap.previous(), 0);

        let clamp = ProjectCarousel::new(vec![1], BoundaryPolicy::Clamp).unwrap();
        assert!(!clamp.can_next());
        assert!(!clamp.can_previous());
    }
}
