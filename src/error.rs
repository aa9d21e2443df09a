//! Error type shared by every PortfolioCore component.
//!
//! Most UI paths never fail (missing preference → light, missing anchor →
//! no-op). The variants below cover precondition violations and platform
//! glue that the JS host should hear about.

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum PortfolioError {
    /// A carousel needs at least one project
    EmptyCarousel,
    /// `jump_to` was handed an index outside `[0, len)`
    IndexOutOfRange { index: usize, len: usize },
    /// Anchor string that is not one of the page sections
    UnknownSection(String),
    /// Blank keyword in a custom vocabulary
    InvalidKeyword(String),
    /// Regex or automaton construction failed
    Pattern(String),
    /// Browser API call failed or is unavailable
    Platform(String),
    /// Rejected configuration value
    Config(String),
}

impl std::fmt::Display for PortfolioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PortfolioError::EmptyCarousel => write!(f, "Carousel requires at least one project"),
            PortfolioError::IndexOutOfRange { index, len } => {
                write!(f, "Project index {} out of range (len {})", index, len)
            }
            PortfolioError::UnknownSection(id) => write!(f, "Unknown section: {}", id),
            PortfolioError::InvalidKeyword(k) => write!(f, "Invalid keyword: {:?}", k),
            PortfolioError::Pattern(msg) => write!(f, "Pattern error: {}", msg),
            PortfolioError::Platform(msg) => write!(f, "Platform error: {}", msg),
            PortfolioError::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for PortfolioError {}

impl From<PortfolioError> for JsValue {
    fn from(err: PortfolioError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Convert a thrown JS value into a platform error
pub(crate) fn platform_error(context: &str, value: JsValue) -> PortfolioError {
    PortfolioError::Platform(format!("{}: {:?}", context, value))
}
