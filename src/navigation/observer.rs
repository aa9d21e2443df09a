//! SectionObserver: scroll-spy over the page sections
//!
//! # Design Principles
//! 1. One state variable: the active section, starting at `hero`
//! 2. A section becomes active when it goes from hidden to visible past the
//!    threshold; nothing else moves it (sticky)
//! 3. Entries in one tick apply in delivery order, last one wins
//!
//! Subscription lifecycle lives in [`SectionWatch`]: subscribe on mount,
//! unsubscribe on unmount or drop.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::config::VISIBILITY_THRESHOLD;
use crate::error::PortfolioError;
use crate::log_debug;
use crate::navigation::section::SectionId;

/// Browsers round intersection ratios; a crossing reported at 0.2999 still counts
const RATIO_EPSILON: f64 = 1e-3;

// =============================================================================
// Types
// =============================================================================

/// One visibility report for one section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisibilityEntry {
    pub section: SectionId,
    pub intersection_ratio: f64,
    pub is_intersecting: bool,
}

impl VisibilityEntry {
    pub fn new(section: SectionId, intersection_ratio: f64) -> Self {
        Self {
            section,
            intersection_ratio,
            is_intersecting: intersection_ratio > 0.0,
        }
    }

    pub fn hidden(section: SectionId) -> Self {
        Self::new(section, 0.0)
    }

    fn crosses(&self, threshold: f64) -> bool {
        self.is_intersecting && self.intersection_ratio + RATIO_EPSILON >= threshold
    }
}

// =============================================================================
// SectionObserver
// =============================================================================

#[derive(Debug, Clone)]
pub struct SectionObserver {
    active: SectionId,
    threshold: f64,
    visible: [bool; SectionId::ALL.len()],
}

impl Default for SectionObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionObserver {
    pub fn new() -> Self {
        Self::with_threshold(VISIBILITY_THRESHOLD)
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            active: SectionId::Hero,
            threshold,
            visible: [false; SectionId::ALL.len()],
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_visible(&self, section: SectionId) -> bool {
        self.visible[section.index()]
    }

    /// Apply one tick of visibility reports.
    /// Returns the new active section if it changed.
    pub fn observe(&mut self, entries: &[VisibilityEntry]) -> Option<SectionId> {
        let before = self.active;

        for entry in entries {
            let slot = &mut self.visible[entry.section.index()];
            if entry.crosses(self.threshold) {
                if !*slot {
                    self.active = entry.section;
                }
                *slot = true;
            } else {
                *slot = false;
            }
        }

        if self.active != before {
            log_debug!("SectionObserver", "active section {} -> {}", before, self.active);
            Some(self.active)
        } else {
            None
        }
    }

    /// Back to `hero` with nothing visible
    pub fn reset(&mut self) {
        self.active = SectionId::Hero;
        self.visible = [false; SectionId::ALL.len()];
    }
}

// =============================================================================
// Subscription seam
// =============================================================================

pub type VisibilityCallback = Box<dyn FnMut(Vec<VisibilityEntry>)>;

/// Platform service that pushes visibility reports for watched sections
pub trait VisibilityService {
    type Registration;

    fn subscribe(
        &mut self,
        sections: &[SectionId],
        threshold: f64,
        callback: VisibilityCallback,
    ) -> Result<Self::Registration, PortfolioError>;

    fn unsubscribe(&mut self, registration: Self::Registration);
}

/// Owns one registration against a [`VisibilityService`].
///
/// Dropping the watch unsubscribes.
pub struct SectionWatch<V: VisibilityService> {
    service: V,
    registration: Option<V::Registration>,
}

impl<V: VisibilityService> SectionWatch<V> {
    pub fn new(service: V) -> Self {
        Self {
            service,
            registration: None,
        }
    }

    /// Register all sections. A second mount while mounted is ignored.
    pub fn mount(&mut self, threshold: f64, callback: VisibilityCallback) -> Result<(), PortfolioError> {
        if self.registration.is_some() {
            return Ok(());
        }
        let registration = self.service.subscribe(&SectionId::ALL, threshold, callback)?;
        self.registration = Some(registration);
        Ok(())
    }

    pub fn unmount(&mut self) {
        if let Some(registration) = self.registration.take() {
            self.service.unsubscribe(registration);
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.registration.is_some()
    }

    pub fn service(&self) -> &V {
        &self.service
    }
}

impl<V: VisibilityService> Drop for SectionWatch<V> {
    fn drop(&mut self) {
        self.unmount();
    }
}

// =============================================================================
// ScriptedVisibility
// =============================================================================

#[derive(Default)]
struct ScriptedInner {
    next_id: u64,
    callbacks: BTreeMap<u64, VisibilityCallback>,
}

/// In-memory visibility service driven by explicit `emit` calls.
///
/// Clones share the same subscriber list.
#[derive(Clone, Default)]
pub struct ScriptedVisibility {
    inner: Rc<RefCell<ScriptedInner>>,
}

impl ScriptedVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver one tick to every live subscriber
    pub fn emit(&self, entries: &[VisibilityEntry]) {
        let mut inner = self.inner.borrow_mut();
        for callback in inner.callbacks.values_mut() {
            callback(entries.to_vec());
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().callbacks.len()
    }
}

impl VisibilityService for ScriptedVisibility {
    type Registration = u64;

    fn subscribe(
        &mut self,
        _sections: &[SectionId],
        _threshold: f64,
        callback: VisibilityCallback,
    ) -> Result<u64, PortfolioError> {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.callbacks.insert(id, callback);
        Ok(id)
    }

    fn unsubscribe(&mut self, registration: u64) {
        self.inner.borrow_mut().callbacks.remove(&registration);
    }
}

// =============================================================================
// Tests
// =============================================================================
