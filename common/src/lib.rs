//! Diagnostics shared by the workspace crates.
//!
//! Everything goes to stderr, stdout is reserved for the rendered map.

/// Prints a diagnostic line in debug builds only
#[macro_export]
macro_rules! debug {
    ($str: expr) => {
        #[cfg(debug_assertions)]
        {
            eprintln!(concat!("[debug] ", $str))
        }
    };
    ($str: expr, $($rest: expr),+) => {
        #[cfg(debug_assertions)]
        {
            eprintln!(concat!("[debug] ", $str), $($rest),+)
        }
    };
}

/// Prints a warning line, regardless of build profile
#[macro_export]
macro_rules! warn {
    ($str: expr) => {
        eprintln!(concat!("[warn] ", $str))
    };
    ($str: expr, $($rest: expr),+) => {
        eprintln!(concat!("[warn] ", $str), $($rest),+)
    };
}
