//! Metric detection: percentages, unit-suffixed magnitudes,
//! comparison-prefixed durations and large-number shorthand.
//!
//! All four patterns run over the raw text; overlapping hits collapse to the
//! leftmost, then longest one.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::PortfolioError;

/// A number with optional thousands separators and decimals: 94, 99.8, 10,000
const NUMBER: &str = r"\b(?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d+)?";

/// Longer spellings first so `\b` can settle on the full word
const TIME_UNITS: &str =
    r"ms|seconds?|secs?|s|minutes?|mins?|hours?|hrs?|days?|weeks?|months?|years?";

const BYTE_UNITS: &str = r"(?i:KB|MB|GB|TB|PB)";

const SHORTHAND: &str = r"k\+|K\+|M\+|\+";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricRule {
    /// `94%`, `99.8%`
    Percentage,
    /// `2 hours`, `512MB`, `10x`, `5k+`
    Magnitude,
    /// `<200ms`, `> 5 seconds`
    ComparisonDuration,
    /// `10,000+`, `5k+`, `2M+`
    Shorthand,
}

/// Located metric hit, byte offsets into the scanned text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricMatch {
    pub rule: MetricRule,
    pub start: usize,
    pub end: usize,
}

pub struct MetricScanner {
    rules: Vec<(MetricRule, Regex)>,
}

impl MetricScanner {
    pub fn new() -> Result<Self, PortfolioError> {
        let percentage = format!(r"{NUMBER}%");
        let magnitude = format!(
            r"{NUMBER}(?:\s?(?:{BYTE_UNITS}|{TIME_UNITS})\b|x\b|{SHORTHAND})"
        );
        let comparison = format!(r"[<>=]\s?{NUMBER}\s?(?:{TIME_UNITS})\b");
        let shorthand = format!(r"{NUMBER}(?:{SHORTHAND})");

        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| PortfolioError::Pattern(e.to_string()))
        };

        Ok(Self {
            rules: vec![
                (MetricRule::ComparisonDuration, compile(&comparison)?),
                (MetricRule::Percentage, compile(&percentage)?),
                (MetricRule::Magnitude, compile(&magnitude)?),
                (MetricRule::Shorthand, compile(&shorthand)?),
            ],
        })
    }

    /// All metric hits in `text`, sorted and non-overlapping
    pub fn find(&self, text: &str) -> Vec<MetricMatch> {
        if text.is_empty() {
            return vec![];
        }

        let mut hits: Vec<MetricMatch> = Vec::new();
        for (rule, re) in &self.rules {
            for m in re.find_iter(text) {
                hits.push(MetricMatch {
                    rule: *rule,
                    start: m.start(),
                    end: m.end(),
                });
            }
        }

        dedupe_overlapping(hits)
    }
}

/// Keep leftmost hits, preferring the longer one at equal start.
/// Rule order breaks exact ties.
fn dedupe_overlapping(mut hits: Vec<MetricMatch>) -> Vec<MetricMatch> {
    if hits.len() <= 1 {
        return hits;
    }

    // Stable sort keeps rule order for identical spans
    hits.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then_with(|| (b.end - b.start).cmp(&(a.end - a.start)))
    });

    let mut result: Vec<MetricMatch> = Vec::new();
    let mut last_end = 0;
    for hit in hits {
        if hit.start >= last_end {
            last_end = hit.end;
            result.push(hit);
        }
    }
    result
}
