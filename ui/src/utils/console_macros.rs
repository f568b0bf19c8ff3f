/// Timestamped browser console logging.
///
/// Each macro formats on the Rust side and hands `gloo_console` a single string
/// prefixed with `js_sys::Date::now()`, so ordering between handlers shows up in
/// devtools. These call into the browser; keep them out of code that runs under
/// native tests and use `tracing` there instead.
#[doc(hidden)]
#[macro_export]
macro_rules! __console_stamped {
    ($level:ident, $fmt:expr) => {
        gloo_console::$level!(format!("[{}] {}", js_sys::Date::now(), $fmt))
    };
    ($level:ident, $fmt:expr, $($arg:tt)*) => {
        gloo_console::$level!(format!("[{}] {}", js_sys::Date::now(), format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! console_info {
    ($($arg:tt)*) => {
        $crate::__console_stamped!(info, $($arg)*)
    };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::__console_stamped!(warn, $($arg)*)
    };
}

#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {
        $crate::__console_stamped!(error, $($arg)*)
    };
}

#[macro_export]
macro_rules! console_debug {
    ($($arg:tt)*) => {
        $crate::__console_stamped!(debug, $($arg)*)
    };
}
