// src/macros.rs

#[macro_export]
macro_rules! debug_print {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}
