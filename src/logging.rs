//! Console logging.
//!
//! Messages go to the browser console with a `[Component]` prefix. On
//! non-wasm targets the macros expand to nothing (arguments are still
//! type-checked), so native code and tests never touch `web_sys`.

#[doc(hidden)]
#[cfg(target_arch = "wasm32")]
pub fn __emit(level: Level, component: &str, message: &str) {
    let line = wasm_bindgen::JsValue::from_str(&format!("[{}] {}", component, message));
    match level {
        Level::Debug => web_sys::console::debug_1(&line),
        Level::Info => web_sys::console::log_1(&line),
        Level::Warn => web_sys::console::warn_1(&line),
        Level::Error => web_sys::console::error_1(&line),
    }
}

#[doc(hidden)]
#[cfg(not(target_arch = "wasm32"))]
pub fn __emit(_level: Level, _component: &str, _message: &str) {}

#[doc(hidden)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

#[macro_export]
macro_rules! log_debug {
    ($component:expr, $($arg:tt)*) => {
        $crate::logging::__emit($crate::logging::Level::Debug, $component, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($component:expr, $($arg:tt)*) => {
        $crate::logging::__emit($crate::logging::Level::Info, $component, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::logging::__emit($crate::logging::Level::Warn, $component, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($component:expr, $($arg:tt)*) => {
        $crate::logging::__emit($crate::logging::Level::Error, $component, &format!($($arg)*))
    };
}
