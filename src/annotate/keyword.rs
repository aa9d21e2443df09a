//! Keyword detection via Aho-Corasick.
//!
//! Case-insensitive (ASCII) and whole-word: the characters on either side of
//! a hit must not be alphanumeric or `_`. Overlapping hits resolve to the
//! leftmost, then longest keyword.

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};

use crate::error::PortfolioError;

/// Technology names and domain terms emphasized across the résumé
pub const DEFAULT_KEYWORDS: &[&str] = &[
    // Languages
    "Python",
    "JavaScript",
    "TypeScript",
    "SQL",
    // Frameworks & libraries
    "React",
    "Next.js",
    "Flask",
    "FastAPI",
    "TensorFlow",
    "Tailwind CSS",
    "shadcn/ui",
    // Cloud & DevOps
    "Docker",
    "Kubernetes",
    "AWS",
    "OpenStack",
    "Ceph",
    "Nagios",
    "OSM",
    "DNS",
    "CI/CD",
    // Databases
    "MongoDB",
    "PostgreSQL",
    "Redis",
    "Redshift",
    "vector database",
    // Domain terms
    "LLM",
    "Machine Learning",
    "gradient boosting",
    "computer vision",
    "real-time streaming",
    "agentic",
    "multithreading",
    "REST",
    "RESTful APIs",
    "REST APIs",
    "data visualization",
    "recommendation engine",
];

/// Located keyword hit, byte offsets into the scanned text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordMatch {
    pub keyword: usize,
    pub start: usize,
    pub end: usize,
}

pub struct KeywordMatcher {
    automaton: AhoCorasick,
    keywords: Vec<String>,
}

impl KeywordMatcher {
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Result<Self, PortfolioError> {
        let mut unique: Vec<String> = Vec::with_capacity(keywords.len());
        for keyword in keywords {
            let keyword = keyword.as_ref().trim();
            if keyword.is_empty() {
                return Err(PortfolioError::InvalidKeyword(keyword.to_string()));
            }
            // Case-insensitive duplicates would only shadow each other
            if !unique.iter().any(|k| k.eq_ignore_ascii_case(keyword)) {
                unique.push(keyword.to_string());
            }
        }

        let automaton = AhoCorasickBuilder::new()
            .match_kind(MatchKind::Standard)
            .ascii_case_insensitive(true)
            .build(&unique)
            .map_err(|e| PortfolioError::Pattern(format!("Failed to build automaton: {}", e)))?;

        Ok(Self {
            automaton,
            keywords: unique,
        })
    }

    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    pub fn keyword(&self, index: usize) -> Option<&str> {
        self.keywords.get(index).map(String::as_str)
    }

    /// All whole-word hits, sorted and non-overlapping
    pub fn find(&self, text: &str) -> Vec<KeywordMatch> {
        if text.is_empty() || self.keywords.is_empty() {
            return vec![];
        }

        let hits: Vec<KeywordMatch> = self
            .automaton
            .find_overlapping_iter(text)
            .filter(|m| is_whole_word(text, m.start(), m.end()))
            .map(|m| KeywordMatch {
                keyword: m.pattern().as_usize(),
                start: m.start(),
                end: m.end(),
            })
            .collect();

        dedupe_overlapping(hits)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_whole_word(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

fn dedupe_overlapping(mut hits: Vec<KeywordMatch>) -> Vec<KeywordMatch> {
    if hits.len() <= 1 {
        return hits;
    }

    hits.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then_with(|| (b.end - b.start).cmp(&(a.end - a.start)))
    });

    let mut result: Vec<KeywordMatch> = Vec::new();
    let mut last_end = 0;
    for hit in hits {
        if hit.start >= last_end {
            last_end = hit.end;
            result.push(hit);
        }
    }
    result
}

// =============================================================================
// Tests
// =============================================================================
