//! web-sys implementations of the platform seams, plus the JS facade.
//!
//! Nothing in here runs off-browser; native code and tests use the in-memory
//! seams from `theme` and `navigation` instead.

pub mod app;
pub mod document;
pub mod intersection;
pub mod storage;

pub use app::*;
pub use document::*;
pub use intersection::*;
pub use storage::*;
