/// Timestamped browser console logging for component code.
///
/// Messages are formatted eagerly so they reach the console as plain strings.
/// These touch `js_sys`, so only call them from code that runs in the browser;
/// shared logic logs through `tracing`.
#[doc(hidden)]
#[macro_export]
macro_rules! __console_stamped {
    ($level:ident, $fmt:expr) => {
        gloo_console::$level!(format!(
            "[{}] [auth] {}",
            String::from(js_sys::Date::new_0().to_iso_string()),
            $fmt
        ))
    };
    ($level:ident, $fmt:expr, $($arg:tt)*) => {
        gloo_console::$level!(format!(
            "[{}] [auth] {}",
            String::from(js_sys::Date::new_0().to_iso_string()),
            format!($fmt, $($arg)*)
        ))
    };
}

#[macro_export]
macro_rules! console_info {
    ($($t:tt)*) => { $crate::__console_stamped!(info, $($t)*) };
}

#[macro_export]
macro_rules! console_warn {
    ($($t:tt)*) => { $crate::__console_stamped!(warn, $($t)*) };
}

#[macro_export]
macro_rules! console_error {
    ($($t:tt)*) => { $crate::__console_stamped!(error, $($t)*) };
}
