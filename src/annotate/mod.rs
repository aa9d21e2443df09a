//! TextAnnotator: metric and keyword emphasis for résumé prose
//!
//! Two passes, always in this order:
//! 1. Metric pass over the raw text (`94%`, `2 hours`, `10,000+`, `<200ms`)
//! 2. Keyword pass over the metric-annotated text (`Docker`, `PostgreSQL`)
//!
//! Each pass returns a new string. Text outside the inserted span markers is
//! copied byte-for-byte; no HTML escaping is done, so callers feed trusted,
//! build-time content only.

pub mod keyword;
pub mod markup;
pub mod metric;

pub use keyword::*;
pub use metric::*;

use std::ops::Range;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::config::{PortfolioConfig, KEYWORD_CLASS, METRIC_CLASS};
use crate::error::PortfolioError;

// =============================================================================
// Types
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightKind {
    Metric,
    Keyword,
}

/// A located emphasis span in raw text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub kind: HighlightKind,
    pub start: usize,
    pub end: usize,
    pub text: String,
}

// =============================================================================
// TextAnnotator
// =============================================================================

#[wasm_bindgen]
pub struct TextAnnotator {
    metrics: MetricScanner,
    keywords: KeywordMatcher,
    metric_class: String,
    keyword_class: String,
}

impl Default for TextAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl TextAnnotator {
    /// Annotator with the built-in keyword vocabulary
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::with_keywords(DEFAULT_KEYWORDS).expect("built-in annotation rules compile")
    }

    /// Both passes, metrics first
    #[wasm_bindgen]
    pub fn annotate(&self, text: &str) -> String {
        self.keyword_pass(&self.metric_pass(text))
    }

    #[wasm_bindgen(js_name = keywordCount)]
    pub fn keyword_count(&self) -> usize {
        self.keywords.keyword_count()
    }

    /// Custom vocabulary (JS binding). Expects an array of strings.
    #[wasm_bindgen(js_name = withKeywords)]
    pub fn js_with_keywords(keywords: JsValue) -> Result<TextAnnotator, JsValue> {
        let keywords: Vec<String> = serde_wasm_bindgen::from_value(keywords)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse keywords: {}", e)))?;
        Self::with_keywords(&keywords).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Located highlights as `[{ kind, start, end, text }]` (JS binding)
    #[wasm_bindgen(js_name = findHighlights)]
    pub fn js_find_highlights(&self, text: &str) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.find_highlights(text))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl TextAnnotator {
    pub fn with_keywords<S: AsRef<str>>(keywords: &[S]) -> Result<Self, PortfolioError> {
        Ok(Self {
            metrics: MetricScanner::new()?,
            keywords: KeywordMatcher::new(keywords)?,
            metric_class: METRIC_CLASS.to_string(),
            keyword_class: KEYWORD_CLASS.to_string(),
        })
    }

    /// Built-in vocabulary with the configured class names
    pub fn from_config(config: &PortfolioConfig) -> Result<Self, PortfolioError> {
        let mut annotator = Self::with_keywords(DEFAULT_KEYWORDS)?;
        annotator.metric_class = config.metric_class.clone();
        annotator.keyword_class = config.keyword_class.clone();
        Ok(annotator)
    }

    /// Pass 1: wrap every metric hit
    pub fn metric_pass(&self, text: &str) -> String {
        let ranges: Vec<Range<usize>> = self
            .metrics
            .find(text)
            .into_iter()
            .map(|m| m.start..m.end)
            .collect();
        markup::wrap_ranges(text, &ranges, &self.metric_class)
    }

    /// Pass 2: wrap keyword hits, skipping any that touch existing tags.
    /// Hits inside an earlier metric span are allowed to nest.
    pub fn keyword_pass(&self, text: &str) -> String {
        let tags = markup::tag_ranges(text);
        let ranges: Vec<Range<usize>> = self
            .keywords
            .find(text)
            .into_iter()
            .filter(|m| !markup::overlaps_any(m.start, m.end, &tags))
            .map(|m| m.start..m.end)
            .collect();
        markup::wrap_ranges(text, &ranges, &self.keyword_class)
    }

    /// Highlights located in the raw text, sorted by start.
    /// Keyword hits overlapping a metric hit are dropped (metrics take precedence).
    pub fn find_highlights(&self, text: &str) -> Vec<Highlight> {
        let metrics = self.metrics.find(text);
        let metric_ranges: Vec<Range<usize>> = metrics.iter().map(|m| m.start..m.end).collect();

        let mut highlights: Vec<Highlight> = metrics
            .iter()
            .map(|m| Highlight {
                kind: HighlightKind::Metric,
                start: m.start,
                end: m.end,
                text: text[m.start..m.end].to_string(),
            })
            .collect();

        highlights.extend(
            self.keywords
                .find(text)
                .into_iter()
                .filter(|m| !markup::overlaps_any(m.start, m.end, &metric_ranges))
                .map(|m| Highlight {
                    kind: HighlightKind::Keyword,
                    start: m.start,
                    end: m.end,
                    text: text[m.start..m.end].to_string(),
                }),
        );

        highlights.sort_by_key(|h| h.start);
        highlights
    }
}

fn default_annotator() -> &'static TextAnnotator {
    static ANNOTATOR: OnceLock<TextAnnotator> = OnceLock::new();
    ANNOTATOR.get_or_init(TextAnnotator::new)
}

/// Annotate with the built-in rules
#[wasm_bindgen]
pub fn annotate(text: &str) -> String {
    default_annotator().annotate(text)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const M: &str = "<span class=\"metric-highlight\">";
    const K: &str = "<span class=\"keyword-highlight\">";
    const END: &str = "</span>";

    // -------------------------------------------------------------------------
    // Requirement 1: metric wrap leaves surrounding text untouched
    // -------------------------------------------------------------------------
    #[test]
    fn test_percentage_wrapped() {
        let out = annotate("Boosted accuracy by 94%");
        assert_eq!(out, format!("Boosted accuracy by {M}94%{END}"));
    }

    // -------------------------------------------------------------------------
    // Requirement 2: keywords wrapped case-insensitively
    // -------------------------------------------------------------------------
    #[test]
    fn test_keywords_wrapped() {
        let out = annotate("Built with PostgreSQL and Docker");
        assert_eq!(
            out,
            format!("Built with {K}PostgreSQL{END} and {K}Docker{END}")
        );
    }

    #[test]
    fn test_lowercase_keyword_wrapped() {
        let out = annotate("built with postgresql");
        assert_eq!(out, format!("built with {K}postgresql{END}"));
    }

    // -------------------------------------------------------------------------
    // Requirement 3: no matches, no change
    // -------------------------------------------------------------------------
    #[test]
    fn test_no_matches_identity() {
        assert_eq!(annotate("hello world"), "hello world");
        assert_eq!(annotate(""), "");
    }

    // -------------------------------------------------------------------------
    // Requirement 4: both passes on one sentence, deterministic
    // -------------------------------------------------------------------------
    #[test]
    fn test_mixed_sentence() {
        let text = "Boosted scalability by 30% and supported 10,000+ instances on OpenStack";
        let out = annotate(text);
        assert_eq!(
            out,
            format!(
                "Boosted scalability by {M}30%{END} and supported {M}10,000+{END} instances on {K}OpenStack{END}"
            )
        );
        assert_eq!(annotate(text), out);
    }

    #[test]
    fn test_comparison_not_mistaken_for_tag() {
        let out = annotate("Redis lookups under <5ms");
        assert_eq!(out, format!("{K}Redis{END} lookups under {M}<5ms{END}"));
    }

    #[test]
    fn test_markup_removal_restores_input() {
        let text = "Reduced deployment from 2 hours to 20 minutes using Python and Flask, 99.8% R2";
        let out = annotate(text);
        let stripped = out
            .replace(M, "")
            .replace(K, "")
            .replace(END, "");
        assert_eq!(stripped, text);
    }

    // -------------------------------------------------------------------------
    // Requirement 5: passes are individually usable
    // -------------------------------------------------------------------------
    #[test]
    fn test_metric_pass_alone() {
        let annotator = TextAnnotator::new();
        assert_eq!(
            annotator.metric_pass("Docker at 40%"),
            format!("Docker at {M}40%{END}")
        );
    }

    #[test]
    fn test_keyword_pass_skips_tags() {
        let annotator = TextAnnotator::with_keywords(&["span", "class"]).unwrap();
        let input = format!("a {M}5%{END} span");
        assert_eq!(
            annotator.keyword_pass(&input),
            format!("a {M}5%{END} {K}span{END}")
        );
    }

    #[test]
    fn test_keyword_nested_inside_metric() {
        let annotator = TextAnnotator::with_keywords(&["hours"]).unwrap();
        let out = annotator.annotate("took 2 hours");
        assert_eq!(out, format!("took {M}2 {K}hours{END}{END}"));
    }

    // -------------------------------------------------------------------------
    // Requirement 6: structured highlights
    // -------------------------------------------------------------------------
    #[test]
    fn test_find_highlights() {
        let annotator = TextAnnotator::new();
        let hits = annotator.find_highlights("Docker cut costs by 25%");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].kind, HighlightKind::Keyword);
        assert_eq!(hits[0].text, "Docker");
        assert_eq!((hits[0].start, hits[0].end), (0, 6));
        assert_eq!(hits[1].kind, HighlightKind::Metric);
        assert_eq!(hits[1].text, "25%");
    }

    #[test]
    fn test_find_highlights_metric_precedence() {
        let annotator = TextAnnotator::with_keywords(&["hours"]).unwrap();
        let hits = annotator.find_highlights("took 2 hours");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].kind, HighlightKind::Metric);
    }

    #[test]
    fn test_configured_classes() {
        let config = PortfolioConfig {
            metric_class: "num".into(),
            keyword_class: "kw".into(),
            ..PortfolioConfig::default()
        };
        let annotator = TextAnnotator::from_config(&config).unwrap();
        assert_eq!(
            annotator.annotate("AWS 3x"),
            "<span class=\"kw\">AWS</span> <span class=\"num\">3x</span>"
        );
    }

    #[test]
    fn test_invalid_vocabulary() {
        assert!(TextAnnotator::with_keywords(&[""]).is_err());
    }
}
