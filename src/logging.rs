//! Internal logging shims.
//!
//! Forward to the `log` crate when the `logging` feature is enabled. Without
//! it the arguments are still type-checked through `format_args!` but nothing
//! is emitted.

macro_rules! board_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "logging")]
        log::debug!($($arg)*);
        #[cfg(not(feature = "logging"))]
        let _ = format_args!($($arg)*);
    }};
}

macro_rules! board_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "logging")]
        log::trace!($($arg)*);
        #[cfg(not(feature = "logging"))]
        let _ = format_args!($($arg)*);
    }};
}
