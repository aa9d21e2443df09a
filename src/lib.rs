//! PortfolioCore: UI logic for a single-page developer portfolio
//!
//! A Rust/WASM implementation of the interactive pieces of the portfolio page.
//! Rendering stays in JS; everything stateful or textual lives here.
//!
//! # Architecture
//!
//! ## Core Components
//! - `theme/` - PreferenceStore: light/dark preference, persisted and applied to `<html>`
//! - `navigation/scroll.rs` - ScrollNavigator: smooth scroll to a section anchor
//! - `navigation/observer.rs` - SectionObserver: scroll-spy over the fixed section set
//! - `annotate/` - TextAnnotator: metric + keyword emphasis spans (regex, Aho-Corasick)
//! - `carousel/` - ProjectCarousel: cyclic (or clamped) project index
//! - `page/` - PageState/PageShell: single state container, actions in, snapshots out
//! - `content/` - Static résumé data
//!
//! ## Platform
//! - `browser/` - localStorage, document root, `scrollIntoView`, `IntersectionObserver`
//! - `config.rs` - Configuration types and defaults
//! - `error.rs` - PortfolioError
//! - `logging.rs` - Console logging macros
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { PortfolioApp, annotate } from 'portfolio-core';
//!
//! await init();
//!
//! // Loads the stored theme and applies it to <html>
//! const app = new PortfolioApp({ carousel_policy: 'wrap' });
//! app.mount();
//!
//! const content = app.content();
//! console.log(content.profile.name);
//!
//! app.goTo('experience');
//! const snap = app.nextProject();
//! console.log(snap.project.title, snap.canNext);
//!
//! // Emphasis spans for résumé prose
//! el.innerHTML = annotate('Reduced deployment time by 94% using Docker');
//! ```

#[macro_use]
pub mod logging;

pub mod error;
pub mod config;
pub mod theme;
pub mod navigation;
pub mod annotate;
pub mod carousel;
pub mod content;
pub mod page;
pub mod browser;

// Public exports
pub use error::PortfolioError;
pub use config::PortfolioConfig;
pub use theme::{KeyValueStore, PreferenceStore, ThemePreference, ThemeSurface};
pub use navigation::{
    ScrollNavigator, ScrollSurface, SectionId, SectionObserver, SectionWatch, VisibilityEntry,
    VisibilityService,
};
pub use annotate::{annotate, Highlight, HighlightKind, TextAnnotator};
pub use carousel::{BoundaryPolicy, ProjectCarousel};
pub use content::{portfolio, Portfolio, ProjectRecord};
pub use page::{PageAction, PageShell, PageSnapshot, PageState};
pub use browser::PortfolioApp;

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator for smaller WASM bundle size.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    format!("portfolio-core v{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_names_crate() {
        assert!(version().starts_with("portfolio-core v"));
    }
}
