//! Logging macros.
//!
//! Every log line in the crate goes through the macros below, which forward
//! to either the [`log`](https://docs.rs/log) facade or
//! [`tracing`](https://docs.rs/tracing), whichever cargo feature is enabled.
//! Enable at most one of them.
//!
//! | Feature    | Backend         | Default |
//! |------------|-----------------|---------|
//! | `log`      | `log` crate     | yes     |
//! | `tracing`  | `tracing` crate | no      |
//!
//! With neither feature enabled the macros expand to nothing.
//!
//! Levels used by the crate:
//!
//! - `trace_log!`: bus deliveries, cache hits and misses.
//! - `debug_log!`: route resolution, redirects, view re-renders.
//! - `info_log!`: route registration, router start, completed navigations.
//! - `warn_log!`: ignored navigations (router not started, nothing to go back to).
//! - `error_log!`: navigation failures raised inside click handlers.
//!
//! ```ignore
//! use page_navigator::{debug_log, info_log};
//!
//! info_log!("Router started at '{}'", url);
//! debug_log!("Fragment '{}' matched route '{}'", fragment, pattern);
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __navigator_log {
    ($level:ident, $($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        ::tracing::$level!($($arg)*);
        #[cfg(feature = "log")]
        ::log::$level!($($arg)*);
    }};
}

/// Emit a **trace**-level log message through the enabled backend.
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        $crate::__navigator_log!(trace, $($arg)*)
    };
}

/// Emit a **debug**-level log message through the enabled backend.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::__navigator_log!(debug, $($arg)*)
    };
}

/// Emit an **info**-level log message through the enabled backend.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        $crate::__navigator_log!(info, $($arg)*)
    };
}

/// Emit a **warn**-level log message through the enabled backend.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        $crate::__navigator_log!(warn, $($arg)*)
    };
}

/// Emit an **error**-level log message through the enabled backend.
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        $crate::__navigator_log!(error, $($arg)*)
    };
}
