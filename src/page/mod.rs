//! Page composition: one state container, actions in, snapshots out.
//!
//! # Design Principles
//! 1. `PageState` owns theme, active section and carousel; nothing else mutates them
//! 2. Views get an immutable `PageSnapshot` and request changes with `PageAction`
//! 3. `dispatch` is pure; side effects come back as `PageEffect`s for the shell
//!
//! `PageShell` wires the state to the platform seams (storage, document root,
//! scroller) and executes the effects.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};

use crate::carousel::ProjectCarousel;
use crate::config::PortfolioConfig;
use crate::content::ProjectRecord;
use crate::error::PortfolioError;
use crate::navigation::{ScrollNavigator, ScrollSurface, SectionId, SectionObserver, VisibilityCallback, VisibilityEntry};
use crate::theme::{KeyValueStore, PreferenceStore, ThemePreference, ThemeSurface};
use crate::{log_debug, log_warn};

// =============================================================================
// Types
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum PageAction {
    ToggleTheme,
    SetTheme(ThemePreference),
    NextProject,
    PreviousProject,
    JumpToProject(usize),
    Navigate(SectionId),
    Visibility(Vec<VisibilityEntry>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageEffect {
    /// Write the preference and apply the visual mode
    PersistTheme(ThemePreference),
    ScrollTo(SectionId),
}

/// Immutable view handed to renderers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSnapshot {
    pub theme: ThemePreference,
    pub active_section: SectionId,
    pub project_index: usize,
    pub project_count: usize,
    pub can_previous: bool,
    pub can_next: bool,
    pub project: ProjectRecord,
}

// =============================================================================
// PageState
// =============================================================================

#[derive(Debug, Clone)]
pub struct PageState {
    theme: ThemePreference,
    observer: SectionObserver,
    carousel: ProjectCarousel<ProjectRecord>,
}

impl PageState {
    pub fn new(
        theme: ThemePreference,
        projects: Vec<ProjectRecord>,
        config: &PortfolioConfig,
    ) -> Result<Self, PortfolioError> {
        config.validate()?;
        Ok(Self {
            theme,
            observer: SectionObserver::with_threshold(config.visibility_threshold),
            carousel: ProjectCarousel::new(projects, config.carousel_policy)?,
        })
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    pub fn active_section(&self) -> SectionId {
        self.observer.active()
    }

    pub fn carousel(&self) -> &ProjectCarousel<ProjectRecord> {
        &self.carousel
    }

    pub fn dispatch(&mut self, action: PageAction) -> Result<Vec<PageEffect>, PortfolioError> {
        let effects = match action {
            PageAction::ToggleTheme => {
                self.theme = self.theme.toggled();
                vec![PageEffect::PersistTheme(self.theme)]
            }
            PageAction::SetTheme(theme) => {
                if theme == self.theme {
                    vec![]
                } else {
                    self.theme = theme;
                    vec![PageEffect::PersistTheme(theme)]
                }
            }
            PageAction::NextProject => {
                self.carousel.next();
                vec![]
            }
            PageAction::PreviousProject => {
                self.carousel.previous();
                vec![]
            }
            PageAction::JumpToProject(index) => {
                self.carousel.jump_to(index)?;
                vec![]
            }
            PageAction::Navigate(section) => vec![PageEffect::ScrollTo(section)],
            PageAction::Visibility(entries) => {
                self.observer.observe(&entries);
                vec![]
            }
        };
        Ok(effects)
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            theme: self.theme,
            active_section: self.observer.active(),
            project_index: self.carousel.index(),
            project_count: self.carousel.len(),
            can_previous: self.carousel.can_previous(),
            can_next: self.carousel.can_next(),
            project: self.carousel.current().clone(),
        }
    }
}

// =============================================================================
// PageShell
// =============================================================================

pub struct PageShell<S: KeyValueStore, R: ThemeSurface, N: ScrollSurface> {
    state: Rc<RefCell<PageState>>,
    prefs: PreferenceStore<S, R>,
    navigator: ScrollNavigator<N>,
}

impl<S: KeyValueStore, R: ThemeSurface, N: ScrollSurface> PageShell<S, R, N> {
    /// Load the stored theme, apply it and build the page state
    pub fn new(
        storage: S,
        surface: R,
        scroller: N,
        projects: Vec<ProjectRecord>,
        config: &PortfolioConfig,
    ) -> Result<Self, PortfolioError> {
        let mut prefs = PreferenceStore::with_key(storage, surface, &config.storage_key);
        let theme = prefs.load();
        prefs.apply(theme);

        let state = PageState::new(theme, projects, config)?;
        log_debug!("PageShell", "ready: theme={}, projects={}", theme, state.carousel().len());

        Ok(Self {
            state: Rc::new(RefCell::new(state)),
            prefs,
            navigator: ScrollNavigator::new(scroller),
        })
    }

    pub fn dispatch(&mut self, action: PageAction) -> Result<PageSnapshot, PortfolioError> {
        let effects = self.state.borrow_mut().dispatch(action)?;
        for effect in effects {
            match effect {
                PageEffect::PersistTheme(theme) => {
                    self.prefs.persist(theme);
                    self.prefs.apply(theme);
                }
                PageEffect::ScrollTo(section) => {
                    self.navigator.go_to(section);
                }
            }
        }
        Ok(self.snapshot())
    }

    pub fn toggle_theme(&mut self) -> ThemePreference {
        let current = self.state.borrow().theme();
        let next = self.prefs.toggle(current);
        // The store already persisted and applied it
        self.state.borrow_mut().theme = next;
        next
    }

    pub fn go_to(&self, section: SectionId) -> bool {
        self.navigator.go_to(section)
    }

    /// Scroll to an arbitrary anchor id; unknown ids are a no-op
    pub fn go_to_anchor(&self, anchor: &str) -> bool {
        self.navigator.go_to_anchor(anchor)
    }

    pub fn snapshot(&self) -> PageSnapshot {
        self.state.borrow().snapshot()
    }

    pub fn theme(&self) -> ThemePreference {
        self.state.borrow().theme()
    }

    pub fn active_section(&self) -> SectionId {
        self.state.borrow().active_section()
    }

    pub fn threshold(&self) -> f64 {
        self.state.borrow().observer.threshold()
    }

    /// Callback for a visibility service. Holds only a weak reference, so
    /// reports delivered after the shell is dropped are ignored.
    pub fn visibility_sink(&self) -> VisibilityCallback {
        let state: Weak<RefCell<PageState>> = Rc::downgrade(&self.state);
        Box::new(move |entries: Vec<VisibilityEntry>| {
            let Some(state) = state.upgrade() else {
                return;
            };
            let Ok(mut state) = state.try_borrow_mut() else {
                log_warn!("PageShell", "visibility report dropped: state busy");
                return;
            };
            state.observer.observe(&entries);
        })
    }

    pub fn preferences(&self) -> &PreferenceStore<S, R> {
        &self.prefs
    }

    pub fn navigator(&self) -> &ScrollNavigator<N> {
        &self.navigator
    }
}

// =============================================================================
// Tests
// =============================================================================
