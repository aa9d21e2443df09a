//! PortfolioApp: the JS-facing page controller
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { PortfolioApp } from 'portfolio-core';
//!
//! await init();
//! const app = new PortfolioApp();          // loads + applies the stored theme
//! app.mount();                             // starts the scroll-spy
//!
//! app.toggleTheme();                       // "dark"
//! app.goTo('projects');
//! app.nextProject();                       // { projectIndex: 1, canNext: true, ... }
//! el.innerHTML = app.annotate('Cut latency by 40% with Redis');
//!
//! app.unmount();                           // on teardown
//! ```

use wasm_bindgen::prelude::*;

use crate::annotate::TextAnnotator;
use crate::browser::document::{open_link, DocumentRoot, DomScroller};
use crate::browser::intersection::IntersectionVisibility;
use crate::browser::storage::LocalStorage;
use crate::config::PortfolioConfig;
use crate::content::{portfolio, Portfolio};
use crate::log_info;
use crate::navigation::{SectionId, SectionWatch};
use crate::page::{PageAction, PageShell, PageSnapshot};

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub struct PortfolioApp {
    shell: PageShell<LocalStorage, DocumentRoot, DomScroller>,
    watch: SectionWatch<IntersectionVisibility>,
    annotator: TextAnnotator,
    content: Portfolio,
}

#[wasm_bindgen]
impl PortfolioApp {
    /// Optional config object; missing fields take defaults
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<PortfolioApp, JsValue> {
        let config = PortfolioConfig::from_js(config)?;
        let content = portfolio();

        let storage = LocalStorage::new();
        if !storage.is_available() {
            log_info!("PortfolioApp", "localStorage unavailable, theme is session-only");
        }

        let shell = PageShell::new(
            storage,
            DocumentRoot::new(&config.dark_class),
            DomScroller::new(),
            content.projects.clone(),
            &config,
        )?;
        let annotator = TextAnnotator::from_config(&config)?;

        Ok(Self {
            shell,
            watch: SectionWatch::new(IntersectionVisibility::new()),
            annotator,
            content,
        })
    }

    /// Start watching section visibility. Call once the sections are in the DOM.
    #[wasm_bindgen]
    pub fn mount(&mut self) -> Result<(), JsValue> {
        let threshold = self.shell.threshold();
        self.watch.mount(threshold, self.shell.visibility_sink())?;
        Ok(())
    }

    /// Cancel every visibility watch
    #[wasm_bindgen]
    pub fn unmount(&mut self) {
        self.watch.unmount();
    }

    #[wasm_bindgen(js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.watch.is_mounted()
    }

    /// Returns the new theme ("light" | "dark")
    #[wasm_bindgen(js_name = toggleTheme)]
    pub fn toggle_theme(&mut self) -> String {
        self.shell.toggle_theme().to_string()
    }

    #[wasm_bindgen]
    pub fn theme(&self) -> String {
        self.shell.theme().to_string()
    }

    /// Smooth-scroll to an anchor; false when no such element exists
    #[wasm_bindgen(js_name = goTo)]
    pub fn go_to(&self, id: &str) -> bool {
        match id.parse::<SectionId>() {
            Ok(section) => self.shell.go_to(section),
            Err(_) => self.shell.go_to_anchor(id),
        }
    }

    #[wasm_bindgen(js_name = activeSection)]
    pub fn active_section(&self) -> String {
        self.shell.active_section().to_string()
    }

    #[wasm_bindgen(js_name = nextProject)]
    pub fn next_project(&mut self) -> Result<JsValue, JsValue> {
        self.apply(PageAction::NextProject)
    }

    #[wasm_bindgen(js_name = previousProject)]
    pub fn previous_project(&mut self) -> Result<JsValue, JsValue> {
        self.apply(PageAction::PreviousProject)
    }

    #[wasm_bindgen(js_name = jumpToProject)]
    pub fn jump_to_project(&mut self, index: usize) -> Result<JsValue, JsValue> {
        self.apply(PageAction::JumpToProject(index))
    }

    /// Generic action entry point: `{ type: 'navigate', payload: 'skills' }`
    #[wasm_bindgen]
    pub fn dispatch(&mut self, action: JsValue) -> Result<JsValue, JsValue> {
        let action: PageAction = serde_wasm_bindgen::from_value(action)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse action: {}", e)))?;
        self.apply(action)
    }

    #[wasm_bindgen]
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js(&self.shell.snapshot())
    }

    /// HTML string with metric and keyword spans
    #[wasm_bindgen]
    pub fn annotate(&self, text: &str) -> String {
        self.annotator.annotate(text)
    }

    /// `[{ kind, start, end, text }]` over the raw text
    #[wasm_bindgen]
    pub fn highlights(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.annotator.find_highlights(text))
    }

    /// Full résumé content for rendering
    #[wasm_bindgen]
    pub fn content(&self) -> Result<JsValue, JsValue> {
        to_js(&self.content)
    }

    #[wasm_bindgen(js_name = openLink)]
    pub fn open_link(&self, url: &str) -> Result<(), JsValue> {
        open_link(url)?;
        Ok(())
    }
}

impl PortfolioApp {
    fn apply(&mut self, action: PageAction) -> Result<JsValue, JsValue> {
        let snapshot: PageSnapshot = self.shell.dispatch(action)?;
        to_js(&snapshot)
    }
}
