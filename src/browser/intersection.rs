//! `IntersectionObserver` as a [`VisibilityService`].

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::{platform_error, PortfolioError};
use crate::log_debug;
use crate::navigation::{SectionId, VisibilityCallback, VisibilityEntry, VisibilityService};

type ObserverClosure = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Live observer plus the closure it calls. The closure lives until the
/// observer is disconnected.
pub struct IntersectionRegistration {
    observer: IntersectionObserver,
    _callback: ObserverClosure,
}

pub struct IntersectionVisibility {
    document: Option<Document>,
}

impl Default for IntersectionVisibility {
    fn default() -> Self {
        Self::new()
    }
}

impl IntersectionVisibility {
    pub fn new() -> Self {
        Self {
            document: web_sys::window().and_then(|w| w.document()),
        }
    }
}

fn to_entry(value: JsValue) -> Option<VisibilityEntry> {
    let entry = value.dyn_into::<IntersectionObserverEntry>().ok()?;
    let section = SectionId::from_anchor(&entry.target().id())?;
    Some(VisibilityEntry {
        section,
        intersection_ratio: entry.intersection_ratio(),
        is_intersecting: entry.is_intersecting(),
    })
}

impl VisibilityService for IntersectionVisibility {
    type Registration = IntersectionRegistration;

    fn subscribe(
        &mut self,
        sections: &[SectionId],
        threshold: f64,
        mut callback: VisibilityCallback,
    ) -> Result<IntersectionRegistration, PortfolioError> {
        let document = self
            .document
            .as_ref()
            .ok_or_else(|| PortfolioError::Platform("document unavailable".into()))?;

        let closure: ObserverClosure = Closure::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let reports: Vec<VisibilityEntry> = entries.iter().filter_map(to_entry).collect();
            if !reports.is_empty() {
                callback(reports);
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)
            .map_err(|e| platform_error("IntersectionObserver", e))?;

        for section in sections {
            match document.get_element_by_id(section.as_str()) {
                Some(element) => observer.observe(&element),
                None => log_debug!("IntersectionVisibility", "no element for section {}", section),
            }
        }

        Ok(IntersectionRegistration {
            observer,
            _callback: closure,
        })
    }

    fn unsubscribe(&mut self, registration: IntersectionRegistration) {
        registration.observer.disconnect();
    }
}
