pub mod section;
pub mod scroll;
pub mod observer;

pub use section::*;
pub use scroll::*;
pub use observer::*;
